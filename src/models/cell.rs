use calamine::Data;
use chrono::NaiveDateTime;
use std::fmt;

use crate::utils::lexical::is_missing;

/// Value of a single spreadsheet cell after loading
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn text(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(value.to_string())
        }
    }

    pub fn number(value: f64) -> Self {
        if is_missing(value) {
            CellValue::Missing
        } else {
            CellValue::Number(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::number(*f),
            Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
            Data::String(s) => CellValue::text(s),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Missing),
            Data::DateTimeIso(s) => s
                .parse::<NaiveDateTime>()
                .map(CellValue::DateTime)
                .unwrap_or_else(|_| CellValue::text(s)),
            Data::DurationIso(s) => CellValue::text(s),
            Data::Error(_) | Data::Empty => CellValue::Missing,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => write!(f, "<empty>"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}
