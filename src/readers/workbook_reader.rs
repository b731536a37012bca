use calamine::{open_workbook, Reader, Xlsx};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{ProcessingError, Result};
use crate::readers::SheetTable;
use crate::utils::constants::LOCK_FILE_PREFIX;

/// Workbook files found in a data directory, in name order
#[derive(Debug, Clone, Default)]
pub struct SourceFiles {
    pub observations: Vec<PathBuf>,
    pub positions: Vec<PathBuf>,
}

/// An observation workbook: one sheet per logbook day
#[derive(Debug, Clone)]
pub struct ObservationDocument {
    /// File name without extension, e.g. "2.Noviembre 2019"
    pub name: String,
    pub sheets: Vec<SheetTable>,
}

#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub observations: Vec<ObservationDocument>,
    pub positions: Vec<SheetTable>,
}

pub struct WorkbookReader {
    extension: String,
    position_prefix: String,
    position_sheet: String,
    observation_columns: usize,
    position_columns: usize,
}

impl WorkbookReader {
    pub fn new(settings: &Settings) -> Self {
        Self {
            extension: settings.workbook_extension.clone(),
            position_prefix: settings.position_prefix.clone(),
            position_sheet: settings.position_sheet.clone(),
            observation_columns: settings.observation_columns,
            position_columns: settings.position_columns,
        }
    }

    /// List workbooks in `dir`, split into observation and position files
    pub fn discover(&self, dir: &Path) -> Result<SourceFiles> {
        let mut files = SourceFiles::default();

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        for path in paths {
            let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
                continue;
            };
            if file_name.starts_with(LOCK_FILE_PREFIX) {
                debug!("Ignoring lock file {}", file_name);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }

            if file_name.starts_with(&self.position_prefix) {
                files.positions.push(path);
            } else {
                files.observations.push(path);
            }
        }

        if files.positions.is_empty() {
            return Err(ProcessingError::MissingData(format!(
                "no position workbook ({}*.{}) in {}",
                self.position_prefix,
                self.extension,
                dir.display()
            )));
        }

        info!(
            "Found {} observation workbooks and {} position workbooks in {}",
            files.observations.len(),
            files.positions.len(),
            dir.display()
        );

        Ok(files)
    }

    /// Discover and load every workbook in `dir`
    pub fn load_directory(&self, dir: &Path) -> Result<SourceTables> {
        let files = self.discover(dir)?;

        let observations = files
            .observations
            .iter()
            .map(|path| self.read_observation_workbook(path))
            .collect::<Result<Vec<_>>>()?;

        let positions = files
            .positions
            .iter()
            .map(|path| self.read_position_workbook(path))
            .collect::<Result<Vec<_>>>()?;

        Ok(SourceTables {
            observations,
            positions,
        })
    }

    /// Read every sheet of an observation workbook, in workbook order
    pub fn read_observation_workbook(&self, path: &Path) -> Result<ObservationDocument> {
        let name = document_name(path)?;
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let mut sheets = Vec::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet_name)?;
            let table = SheetTable::from_range(&sheet_name, &range, self.observation_columns);
            debug!(
                "Read sheet '{}' of '{}': {} rows",
                sheet_name,
                name,
                table.rows.len()
            );
            sheets.push(table);
        }

        Ok(ObservationDocument { name, sheets })
    }

    /// Read the position sheet of a position workbook
    pub fn read_position_workbook(&self, path: &Path) -> Result<SheetTable> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        if !workbook
            .sheet_names()
            .iter()
            .any(|name| name == &self.position_sheet)
        {
            return Err(ProcessingError::SheetNotFound {
                workbook: path.display().to_string(),
                sheet: self.position_sheet.clone(),
            });
        }

        let range = workbook.worksheet_range(&self.position_sheet)?;
        let table = SheetTable::from_range(&self.position_sheet, &range, self.position_columns);
        debug!(
            "Read position sheet of {}: {} rows",
            path.display(),
            table.rows.len()
        );

        Ok(table)
    }
}

fn document_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ProcessingError::InvalidFormat(format!("Invalid file path: {}", path.display()))
        })
}
