use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::MergedDataset;
use crate::utils::constants::TSV_HEADER;

/// Tab-separated export of the merged dataset, one line per timestamp key
pub struct TsvWriter;

impl TsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_dataset(&self, dataset: &MergedDataset, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.write_to(dataset, fs::File::create(path)?)
    }

    pub fn write_to<W: Write>(&self, dataset: &MergedDataset, output: W) -> Result<()> {
        let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(output);
        writer.write_record(TSV_HEADER)?;

        for (key, row) in dataset.iter() {
            writer.write_record([
                format!("{:09}", key.value()),
                fixed(row.doy_decimal, 5),
                fixed(row.pressure, 2),
                fixed(row.temperature, 2),
                fixed(row.humidity, 3),
                fixed(row.latitude, 6),
                fixed(row.longitude, 6),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for TsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn fixed(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PositionRecord, TimestampKey, WeatherRecord};
    use crate::processors::DataMerger;

    #[test]
    fn test_tsv_output() {
        let key = TimestampKey::new(45, 6, 0, 0).unwrap();
        let dataset = DataMerger::new()
            .merge(
                &[WeatherRecord::new(key, Some(1013.2), Some(15.0), None)],
                &[PositionRecord::new(key, Some(40.0), Some(-3.0))],
            )
            .dataset;

        let mut buffer = Vec::new();
        TsvWriter::new().write_to(&dataset, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "doyhhmmss\tdoy.ddd\tPress.\tTemp.\tHum.\tLat.\tLon.");
        assert_eq!(
            lines[1],
            "045060000\t45.25000\t1013.20\t15.00\t\t40.000000\t-3.000000"
        );
        assert_eq!(lines.len(), 2);
    }
}
