use validator::Validate;

use crate::models::{MergedDataset, TimestampKey};
use crate::processors::PipelineStats;

#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub total_rows: usize,
    pub matched_rows: usize,
    pub weather_only_rows: usize,
    pub position_only_rows: usize,
    pub missing_pressure_rows: usize,
    pub missing_temperature_rows: usize,
    pub missing_humidity_rows: usize,
    pub missing_position_rows: usize,
    pub coordinate_violations: Vec<CoordinateViolation>,
    pub first_key: Option<TimestampKey>,
    pub last_key: Option<TimestampKey>,
    /// Counters of the run that produced the dataset; `None` for a dataset read back from disk
    pub stats: Option<PipelineStats>,
}

#[derive(Debug, Clone)]
pub struct CoordinateViolation {
    pub key: TimestampKey,
    pub details: String,
}

pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Summarize coverage and coordinate validity of a merged dataset
    pub fn check_integrity(
        &self,
        dataset: &MergedDataset,
        stats: Option<&PipelineStats>,
    ) -> IntegrityReport {
        let mut report = IntegrityReport {
            total_rows: dataset.len(),
            first_key: dataset.keys().next().copied(),
            last_key: dataset.keys().next_back().copied(),
            stats: stats.cloned(),
            ..IntegrityReport::default()
        };

        for (key, row) in dataset.iter() {
            // Rows without weather data can only come from the position series
            match (row.has_weather(), row.has_position()) {
                (true, true) => report.matched_rows += 1,
                (true, false) => report.weather_only_rows += 1,
                (false, _) => report.position_only_rows += 1,
            }

            if row.has_weather() {
                if row.pressure.is_none() {
                    report.missing_pressure_rows += 1;
                }
                if row.temperature.is_none() {
                    report.missing_temperature_rows += 1;
                }
                if row.humidity.is_none() {
                    report.missing_humidity_rows += 1;
                }
            }

            if !row.has_position() {
                report.missing_position_rows += 1;
            }

            if let Err(errors) = row.validate() {
                report.coordinate_violations.push(CoordinateViolation {
                    key: *key,
                    details: errors.to_string(),
                });
            }
        }

        report
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();

        summary.push_str("Data Integrity Report\n");
        summary.push_str("=====================\n");
        summary.push_str(&format!("Total rows: {}\n", report.total_rows));

        if let (Some(first), Some(last)) = (report.first_key, report.last_key) {
            summary.push_str(&format!(
                "Key range: {:09} .. {:09} (DOY {:.3} .. {:.3})\n",
                first.value(),
                last.value(),
                first.decimal_day_of_year(),
                last.decimal_day_of_year()
            ));
        }

        summary.push_str(&format!("Weather + position: {}\n", report.matched_rows));
        summary.push_str(&format!("Weather only: {}\n", report.weather_only_rows));
        summary.push_str(&format!("Position only: {}\n", report.position_only_rows));
        summary.push_str(&format!(
            "Missing values: pressure={}, temperature={}, humidity={}, position={}\n",
            report.missing_pressure_rows,
            report.missing_temperature_rows,
            report.missing_humidity_rows,
            report.missing_position_rows
        ));

        if report.coordinate_violations.is_empty() {
            summary.push_str("Coordinates: all within range\n");
        } else {
            summary.push_str(&format!(
                "Coordinates out of range: {}\n",
                report.coordinate_violations.len()
            ));
            for violation in report.coordinate_violations.iter().take(10) {
                summary.push_str(&format!(
                    "  {:09}: {}\n",
                    violation.key.value(),
                    violation.details
                ));
            }
        }

        if let Some(stats) = &report.stats {
            summary.push_str(&format!("\n{}\n", stats));
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
