use tracing::warn;

use crate::error::{ProcessingError, Result};
use crate::models::{CellValue, RawWeatherRow, TimestampKey, WeatherRecord};
use crate::utils::constants::DEGREE_MARKERS;
use crate::utils::lexical::{is_missing, roman_to_arabic};

/// Turns logbook rows into weather records for a resolved day of year
pub struct WeatherNormalizer;

impl WeatherNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one row. `Ok(None)` means the row has no usable hour and
    /// was skipped; `Err` means a measurement could not be parsed.
    pub fn normalize_row(
        &self,
        day_of_year: u32,
        row: &RawWeatherRow,
    ) -> Result<Option<WeatherRecord>> {
        if row.hour.is_missing() {
            return Ok(None);
        }

        let Some(hour) = self.resolve_hour(&row.hour) else {
            warn!(
                "Row {}: hour label '{}' is neither an integer nor a roman numeral, skipping",
                row.line, row.hour
            );
            return Ok(None);
        };

        let hour = if hour == 24 { 0 } else { hour };
        if !(0..24).contains(&hour) {
            warn!("Row {}: hour {} is out of range, skipping", row.line, hour);
            return Ok(None);
        }

        // The weather log is kept on the hour
        let key = TimestampKey::new(day_of_year, hour as u32, 0, 0)?;

        let pressure = self.parse_pressure(&row.pressure)?;
        let temperature = self.parse_temperature(&row.wet_bulb)?;
        let humidity = self.parse_humidity(&row.humidity)?;

        Ok(Some(WeatherRecord::new(key, pressure, temperature, humidity)))
    }

    /// Hour label as an integer, accepting arabic or roman numerals
    pub fn resolve_hour(&self, cell: &CellValue) -> Option<i64> {
        match cell {
            CellValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            // Whitespace is tolerated around arabic labels only
            CellValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| roman_to_arabic(s).ok()),
            _ => None,
        }
    }

    /// Barometric pressure in mb. Falls back to the "1013,2a" form: comma
    /// decimal separator followed by a one-character unit marker.
    pub fn parse_pressure(&self, cell: &CellValue) -> Result<Option<f64>> {
        match cell {
            CellValue::Text(s) => {
                if let Some(value) = parse_float(s) {
                    return Ok(value);
                }

                let mut localized = s.replace(',', ".");
                localized.pop();
                parse_float(&localized).ok_or_else(|| ProcessingError::InvalidNumber {
                    field: "pressure",
                    value: s.clone(),
                })
            }
            other => numeric(other, "pressure"),
        }
    }

    /// Wet-bulb temperature; text such as "15º C" is cut at the degree marker
    pub fn parse_temperature(&self, cell: &CellValue) -> Result<Option<f64>> {
        match cell {
            CellValue::Text(s) => {
                let number = s.split(&DEGREE_MARKERS[..]).next().unwrap_or_default();
                parse_float(number).ok_or_else(|| ProcessingError::InvalidNumber {
                    field: "temperature",
                    value: s.clone(),
                })
            }
            other => numeric(other, "temperature"),
        }
    }

    /// Relative humidity. No fallback: a malformed value fails the row.
    pub fn parse_humidity(&self, cell: &CellValue) -> Result<Option<f64>> {
        match cell {
            CellValue::Text(s) => parse_float(s).ok_or_else(|| ProcessingError::InvalidNumber {
                field: "humidity",
                value: s.clone(),
            }),
            other => numeric(other, "humidity"),
        }
    }
}

impl Default for WeatherNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse trimmed text as a float; NaN becomes missing
pub(crate) fn parse_float(text: &str) -> Option<Option<f64>> {
    text.trim()
        .parse::<f64>()
        .ok()
        .map(|value| if is_missing(value) { None } else { Some(value) })
}

/// Non-text cells: numbers pass through, empty cells are missing
pub(crate) fn numeric(cell: &CellValue, field: &'static str) -> Result<Option<f64>> {
    match cell {
        CellValue::Missing => Ok(None),
        CellValue::Number(n) => Ok(Some(*n)),
        CellValue::Text(s) => parse_float(s).ok_or_else(|| ProcessingError::InvalidNumber {
            field,
            value: s.clone(),
        }),
        CellValue::DateTime(dt) => Err(ProcessingError::InvalidNumber {
            field,
            value: dt.to_string(),
        }),
    }
}
