use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_DATA_DIR, OBSERVATION_COLUMNS, OUTPUT_FILE_NAME, POSITION_COLUMNS,
    POSITION_FILE_PREFIX, POSITION_SHEET, WORKBOOK_EXTENSION,
};

/// Runtime settings. Defaults reproduce the layout of the 2019 logbooks;
/// a TOML file and `HESP_*` environment variables may override them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    pub data_dir: PathBuf,

    #[validate(length(min = 1))]
    pub output_file_name: String,

    #[validate(length(min = 1))]
    pub workbook_extension: String,

    #[validate(length(min = 1))]
    pub position_prefix: String,

    #[validate(length(min = 1))]
    pub position_sheet: String,

    #[validate(range(min = 4, max = 16384))]
    pub observation_columns: usize,

    #[validate(range(min = 4, max = 16384))]
    pub position_columns: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            workbook_extension: WORKBOOK_EXTENSION.to_string(),
            position_prefix: POSITION_FILE_PREFIX.to_string(),
            position_sheet: POSITION_SHEET.to_string(),
            observation_columns: OBSERVATION_COLUMNS,
            position_columns: POSITION_COLUMNS,
        }
    }
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("output_file_name", OUTPUT_FILE_NAME)?
            .set_default("workbook_extension", WORKBOOK_EXTENSION)?
            .set_default("position_prefix", POSITION_FILE_PREFIX)?
            .set_default("position_sheet", POSITION_SHEET)?
            .set_default("observation_columns", OBSERVATION_COLUMNS as i64)?
            .set_default("position_columns", POSITION_COLUMNS as i64)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix("HESP"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Where the merged JSON dataset is written
    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.observation_columns, 15);
        assert_eq!(settings.position_columns, 4);
        assert_eq!(
            settings.output_path(),
            Path::new("hesp_rafaelhermida_2019").join("TristanHespData.json")
        );
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/tmp/logbooks\"")?;
        writeln!(file, "position_sheet = \"Sheet1\"")?;

        let settings = Settings::load(Some(file.path()))?;
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/logbooks"));
        assert_eq!(settings.position_sheet, "Sheet1");
        assert_eq!(settings.position_prefix, "Pos");
        assert_eq!(settings.observation_columns, 15);

        Ok(())
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            observation_columns: 2,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
