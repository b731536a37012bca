use clap::Parser;
use hesp_processor::cli::{run, Cli};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => subscriber
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init(),
        None => subscriber.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    run(cli)?;
    Ok(())
}
