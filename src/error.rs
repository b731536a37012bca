use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid document name '{document}': {reason}")]
    DocumentName { document: String, reason: String },

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Invalid {field} value: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid roman numeral: '{0}'")]
    InvalidRomanNumeral(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid timestamp key: {0}")]
    InvalidTimestampKey(String),

    #[error("Unknown military time zone: '{0}'")]
    UnknownTimeZone(String),

    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Sheet '{sheet}' not found in workbook {workbook}")]
    SheetNotFound { workbook: String, sheet: String },

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
