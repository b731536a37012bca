use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::models::MergedDataset;
use crate::processors::{IntegrityChecker, Pipeline, PipelineOutput};
use crate::utils::progress::ProgressReporter;
use crate::writers::{JsonWriter, TsvWriter};

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Process {
            data_dir,
            output_file,
            tsv_file,
            pretty,
        } => {
            let settings = apply_data_dir(settings, data_dir);
            let output_file = output_file.unwrap_or_else(|| settings.output_path());

            println!("Processing logbooks...");
            println!("Data directory: {}", settings.data_dir.display());
            println!("Output file: {}", output_file.display());

            let output = run_pipeline(&settings, cli.quiet)?;
            print_report(&output);

            if output.dataset.is_empty() {
                warn!("No rows were merged, writing an empty dataset");
            }

            println!("Writing {} rows to JSON file...", output.dataset.len());
            write_outputs(&output.dataset, &output_file, tsv_file.as_deref(), pretty)?;

            println!("Processing complete!");
        }

        Commands::Validate { data_dir } => {
            let settings = apply_data_dir(settings, data_dir);

            println!("Validating logbooks...");
            println!("Data directory: {}", settings.data_dir.display());

            let output = run_pipeline(&settings, cli.quiet)?;
            print_report(&output);

            let failures = output.stats.weather_rows_failed + output.stats.position_rows_failed;
            if failures == 0 && output.report.coordinate_violations.is_empty() {
                println!("✅ All rows normalized cleanly");
            } else {
                println!(
                    "⚠️  {} rows failed to parse, {} rows have out-of-range coordinates",
                    failures,
                    output.report.coordinate_violations.len()
                );
            }
        }

        Commands::Info { file, sample } => {
            println!("Analyzing dataset: {}", file.display());

            let dataset = JsonWriter::new().read_dataset(&file)?;
            let checker = IntegrityChecker::new();
            let report = checker.check_integrity(&dataset, None);
            println!("\n{}", checker.generate_summary(&report));

            if sample > 0 {
                println!("Sample Rows (showing {} rows):", sample.min(dataset.len()));
                for (i, (key, row)) in dataset.iter().take(sample).enumerate() {
                    println!(
                        "{}. {:09}: DOY={} P={} T={} H={} lat={} lon={}",
                        i + 1,
                        key.value(),
                        show(row.doy_decimal),
                        show(row.pressure),
                        show(row.temperature),
                        show(row.humidity),
                        show(row.latitude),
                        show(row.longitude)
                    );
                }
            }
        }
    }

    Ok(())
}

fn apply_data_dir(settings: Settings, data_dir: Option<PathBuf>) -> Settings {
    match data_dir {
        Some(dir) => settings.with_data_dir(dir),
        None => settings,
    }
}

fn run_pipeline(settings: &Settings, quiet: bool) -> Result<PipelineOutput> {
    let progress = ProgressReporter::new_spinner("Reading workbooks...", quiet);
    let output = Pipeline::new(settings).with_progress(&progress).run()?;
    progress.finish_with_message(&format!("Merged {} rows", output.dataset.len()));
    Ok(output)
}

/// Persist the merged table, replacing whatever an earlier run left behind
fn write_outputs(
    dataset: &MergedDataset,
    output_file: &Path,
    tsv_file: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    JsonWriter::new()
        .with_pretty(pretty)
        .write_dataset(dataset, output_file)?;
    info!("Wrote {}", output_file.display());

    if let Some(tsv_file) = tsv_file {
        TsvWriter::new().write_dataset(dataset, tsv_file)?;
        info!("Wrote {}", tsv_file.display());
    }

    Ok(())
}

fn print_report(output: &PipelineOutput) {
    println!("\n{}", IntegrityChecker::new().generate_summary(&output.report));
}

fn show(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string())
}
