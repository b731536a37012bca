use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::MergedDataset;

/// Persists the merged dataset as a JSON object keyed by timestamp key
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_dataset(&self, dataset: &MergedDataset, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, dataset)?;
        } else {
            serde_json::to_writer(&mut writer, dataset)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn to_json_string(&self, dataset: &MergedDataset) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(dataset)?
        } else {
            serde_json::to_string(dataset)?
        };
        Ok(json)
    }

    pub fn read_dataset(&self, path: &Path) -> Result<MergedDataset> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
