use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{CellValue, PositionRecord, RawPositionRow, TimestampKey};
use crate::processors::weather_normalizer::numeric;
use crate::utils::constants::{zone_offset_hours, SECOND_ROUNDING_THRESHOLD};

/// Text layouts accepted in the "FECHA / HORA" column
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Turns position fixes into UTC-keyed position records
pub struct PositionNormalizer;

impl PositionNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize_row(&self, row: &RawPositionRow) -> Result<PositionRecord> {
        let mut timestamp = self.parse_timestamp(&row.timestamp)?;

        // Readings at hh:mm:59 belong to the next minute
        if timestamp.second() >= SECOND_ROUNDING_THRESHOLD {
            timestamp += Duration::seconds(1);
        }

        let zone = match &row.time_zone {
            CellValue::Text(s) => s.trim().to_string(),
            other => other.to_string(),
        };
        let offset = zone_offset_hours(&zone).ok_or(ProcessingError::UnknownTimeZone(zone))?;
        let utc = timestamp - Duration::hours(offset);

        let key = TimestampKey::from_datetime(&utc)?;
        let (latitude, longitude) = self.parse_coordinates(row);

        Ok(PositionRecord::new(key, latitude, longitude))
    }

    pub fn parse_timestamp(&self, cell: &CellValue) -> Result<NaiveDateTime> {
        match cell {
            CellValue::DateTime(dt) => Ok(*dt),
            CellValue::Number(serial) => excel_serial_to_datetime(*serial).ok_or_else(|| {
                ProcessingError::InvalidTimestamp(format!("serial date {} is out of range", serial))
            }),
            CellValue::Text(s) => {
                let text = s.trim();
                TIMESTAMP_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                    .ok_or_else(|| ProcessingError::InvalidTimestamp(format!("'{}'", s)))
            }
            CellValue::Missing => Err(ProcessingError::InvalidTimestamp("empty cell".to_string())),
        }
    }

    /// Latitude and longitude; if either fails to parse both are dropped
    pub fn parse_coordinates(&self, row: &RawPositionRow) -> (Option<f64>, Option<f64>) {
        match (
            numeric(&row.latitude, "latitude"),
            numeric(&row.longitude, "longitude"),
        ) {
            (Ok(latitude), Ok(longitude)) => (latitude, longitude),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Row {}: {}, position marked missing", row.line, e);
                (None, None)
            }
        }
    }
}

impl Default for PositionNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Excel serial date (days since 1899-12-30) to a timestamp, to the millisecond
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::try_milliseconds(millis)?)
}
