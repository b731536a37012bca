use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::models::{PositionRecord, TimestampKey, WeatherRecord};

/// One row of the joined weather/position table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct MergedRow {
    #[serde(rename = "DOY dec")]
    pub doy_decimal: Option<f64>,

    #[serde(rename = "Pressure")]
    pub pressure: Option<f64>,

    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,

    #[serde(rename = "Humidity")]
    pub humidity: Option<f64>,

    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}

impl MergedRow {
    pub fn from_parts(weather: Option<&WeatherRecord>, position: Option<&PositionRecord>) -> Self {
        let mut row = MergedRow::default();

        if let Some(w) = weather {
            row.doy_decimal = Some(w.doy_decimal);
            row.pressure = w.pressure;
            row.temperature = w.temperature;
            row.humidity = w.humidity;
        }

        if let Some(p) = position {
            row.latitude = p.latitude;
            row.longitude = p.longitude;
        }

        row
    }

    pub fn has_weather(&self) -> bool {
        self.doy_decimal.is_some()
    }

    pub fn has_position(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some()
    }
}

/// Joined table keyed and ordered by timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedDataset {
    rows: BTreeMap<TimestampKey, MergedRow>,
}

impl MergedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: BTreeMap<TimestampKey, MergedRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &TimestampKey) -> Option<&MergedRow> {
        self.rows.get(key)
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &TimestampKey> {
        self.rows.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TimestampKey, &MergedRow)> {
        self.rows.iter()
    }
}
