use std::fmt;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::models::{MergedDataset, PositionRecord, WeatherRecord};
use crate::processors::{
    DataMerger, IntegrityChecker, IntegrityReport, PositionNormalizer, TimestampResolver,
    WeatherNormalizer,
};
use crate::readers::{ObservationDocument, SheetTable, SourceTables, WorkbookReader};
use crate::utils::progress::ProgressReporter;

/// Counters collected while normalizing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub documents: usize,
    pub documents_skipped: usize,
    pub sheets: usize,
    pub sheets_skipped: usize,
    pub weather_rows_read: usize,
    pub weather_records: usize,
    pub weather_rows_skipped: usize,
    pub weather_rows_failed: usize,
    pub position_rows_read: usize,
    pub position_records: usize,
    pub position_rows_failed: usize,
    pub weather_duplicates: usize,
    pub position_duplicates: usize,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Statistics")?;
        writeln!(f, "===================")?;
        writeln!(
            f,
            "Documents: {} ({} skipped)",
            self.documents, self.documents_skipped
        )?;
        writeln!(f, "Sheets: {} ({} skipped)", self.sheets, self.sheets_skipped)?;
        writeln!(
            f,
            "Weather rows: {} read, {} records, {} skipped, {} failed, {} duplicates",
            self.weather_rows_read,
            self.weather_records,
            self.weather_rows_skipped,
            self.weather_rows_failed,
            self.weather_duplicates
        )?;
        write!(
            f,
            "Position rows: {} read, {} records, {} failed, {} duplicates",
            self.position_rows_read,
            self.position_records,
            self.position_rows_failed,
            self.position_duplicates
        )
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub dataset: MergedDataset,
    pub stats: PipelineStats,
    pub report: IntegrityReport,
}

/// Discovery, normalization and merge as one sequential pass
pub struct Pipeline<'a> {
    settings: &'a Settings,
    progress: Option<&'a ProgressReporter>,
    resolver: TimestampResolver,
    weather: WeatherNormalizer,
    position: PositionNormalizer,
}

impl<'a> Pipeline<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            progress: None,
            resolver: TimestampResolver::new(),
            weather: WeatherNormalizer::new(),
            position: PositionNormalizer::new(),
        }
    }

    pub fn with_progress(mut self, progress: &'a ProgressReporter) -> Self {
        self.progress = Some(progress);
        self
    }

    fn report_progress(&self, message: &str) {
        if let Some(p) = self.progress {
            p.set_message(message);
        }
    }

    /// Read every workbook in the configured data directory and process it
    pub fn run(&self) -> Result<PipelineOutput> {
        self.report_progress("Reading workbooks...");
        let reader = WorkbookReader::new(self.settings);
        let sources = reader.load_directory(&self.settings.data_dir)?;
        self.process_tables(&sources)
    }

    /// Normalize and merge already loaded tables
    pub fn process_tables(&self, sources: &SourceTables) -> Result<PipelineOutput> {
        let mut stats = PipelineStats::default();

        let weather = self.normalize_weather(&sources.observations, &mut stats);
        let positions = self.normalize_positions(&sources.positions, &mut stats)?;

        self.report_progress("Merging weather and position series...");
        let outcome = DataMerger::new().merge(&weather, &positions);
        stats.weather_duplicates = outcome.weather_duplicates;
        stats.position_duplicates = outcome.position_duplicates;

        info!(
            "Merged {} weather and {} position records into {} rows",
            weather.len(),
            positions.len(),
            outcome.dataset.len()
        );

        let report = IntegrityChecker::new().check_integrity(&outcome.dataset, Some(&stats));

        Ok(PipelineOutput {
            dataset: outcome.dataset,
            stats,
            report,
        })
    }

    fn normalize_weather(
        &self,
        documents: &[ObservationDocument],
        stats: &mut PipelineStats,
    ) -> Vec<WeatherRecord> {
        let mut records = Vec::new();

        for document in documents {
            stats.documents += 1;
            self.report_progress(&format!("Normalizing '{}'...", document.name));

            if let Err(e) = self.resolver.parse_document_name(&document.name) {
                warn!("Skipping document: {}", e);
                stats.documents_skipped += 1;
                continue;
            }

            for table in &document.sheets {
                stats.sheets += 1;
                match self.normalize_sheet(&document.name, table, stats) {
                    Ok(Some(mut sheet_records)) => records.append(&mut sheet_records),
                    Ok(None) => stats.sheets_skipped += 1,
                    Err(e) => {
                        warn!(
                            "Skipping sheet '{}' of '{}': {}",
                            table.name, document.name, e
                        );
                        stats.sheets_skipped += 1;
                    }
                }
            }
        }

        stats.weather_records = records.len();
        records
    }

    fn normalize_sheet(
        &self,
        document: &str,
        table: &SheetTable,
        stats: &mut PipelineStats,
    ) -> Result<Option<Vec<WeatherRecord>>> {
        let Some(day_of_year) = self.resolver.resolve(document, &table.name)? else {
            return Ok(None);
        };

        let sheet = table.weather_sheet(document)?;
        let mut records = Vec::with_capacity(sheet.rows.len());

        for row in &sheet.rows {
            stats.weather_rows_read += 1;
            match self.weather.normalize_row(day_of_year, row) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => stats.weather_rows_skipped += 1,
                Err(e) => {
                    warn!(
                        "'{}' / '{}' row {}: {}",
                        sheet.document, sheet.sheet, row.line, e
                    );
                    stats.weather_rows_failed += 1;
                }
            }
        }

        debug!(
            "'{}' / '{}' -> day {}: {} records",
            sheet.document,
            sheet.sheet,
            day_of_year,
            records.len()
        );

        Ok(Some(records))
    }

    fn normalize_positions(
        &self,
        tables: &[SheetTable],
        stats: &mut PipelineStats,
    ) -> Result<Vec<PositionRecord>> {
        self.report_progress("Normalizing position fixes...");
        let mut records = Vec::new();

        for table in tables {
            for row in table.position_rows()? {
                stats.position_rows_read += 1;
                match self.position.normalize_row(&row) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        warn!("Position sheet '{}' row {}: {}", table.name, row.line, e);
                        stats.position_rows_failed += 1;
                    }
                }
            }
        }

        stats.position_records = records.len();
        Ok(records)
    }
}
