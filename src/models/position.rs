use serde::{Deserialize, Serialize};

use crate::models::{CellValue, TimestampKey};

/// One position fix as read from the position workbook
#[derive(Debug, Clone, PartialEq)]
pub struct RawPositionRow {
    pub line: usize,
    pub time_zone: CellValue,
    pub timestamp: CellValue,
    pub latitude: CellValue,
    pub longitude: CellValue,
}

impl RawPositionRow {
    pub fn new(
        line: usize,
        time_zone: CellValue,
        timestamp: CellValue,
        latitude: CellValue,
        longitude: CellValue,
    ) -> Self {
        Self {
            line,
            time_zone,
            timestamp,
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub key: TimestampKey,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PositionRecord {
    pub fn new(key: TimestampKey, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            key,
            latitude,
            longitude,
        }
    }

    pub fn has_fix(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
