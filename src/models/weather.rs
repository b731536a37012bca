use serde::{Deserialize, Serialize};

use crate::models::{CellValue, TimestampKey};

/// One logbook row as read from an observation sheet
#[derive(Debug, Clone, PartialEq)]
pub struct RawWeatherRow {
    /// 1-based spreadsheet row, for diagnostics
    pub line: usize,
    pub hour: CellValue,
    pub pressure: CellValue,
    pub wet_bulb: CellValue,
    pub humidity: CellValue,
}

impl RawWeatherRow {
    pub fn new(
        line: usize,
        hour: CellValue,
        pressure: CellValue,
        wet_bulb: CellValue,
        humidity: CellValue,
    ) -> Self {
        Self {
            line,
            hour,
            pressure,
            wet_bulb,
            humidity,
        }
    }
}

/// All rows of one daily sheet, identified by its document and sheet names
#[derive(Debug, Clone)]
pub struct RawWeatherSheet {
    pub document: String,
    pub sheet: String,
    pub rows: Vec<RawWeatherRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub key: TimestampKey,
    pub doy_decimal: f64,
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl WeatherRecord {
    pub fn new(
        key: TimestampKey,
        pressure: Option<f64>,
        temperature: Option<f64>,
        humidity: Option<f64>,
    ) -> Self {
        Self {
            key,
            doy_decimal: key.decimal_day_of_year(),
            pressure,
            temperature,
            humidity,
        }
    }
}
