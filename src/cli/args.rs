use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hesp-processor")]
#[command(about = "Merges Hespérides weather and position logbooks into one time-indexed dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize all workbooks in the data directory and write the merged dataset
    Process {
        #[arg(
            short,
            long,
            help = "Directory holding the .xlsx logbooks [default: hesp_rafaelhermida_2019]"
        )]
        data_dir: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output JSON path [default: <data-dir>/TristanHespData.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Also write a tab-separated export to this path")]
        tsv_file: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Run the pipeline and report, without writing anything
    Validate {
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Display information about a merged JSON dataset
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "10")]
        sample: usize,
    },
}
