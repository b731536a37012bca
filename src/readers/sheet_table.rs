use calamine::{Data, Range};

use crate::error::{ProcessingError, Result};
use crate::models::{CellValue, RawPositionRow, RawWeatherRow, RawWeatherSheet};
use crate::utils::constants::{
    HEADER_DATE_TIME, HEADER_HOUR, HEADER_HUMIDITY, HEADER_LATITUDE, HEADER_LONGITUDE,
    HEADER_PRESSURE, HEADER_TIME_ZONE, HEADER_WET_BULB,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based spreadsheet row
    pub line: usize,
    pub cells: Vec<CellValue>,
}

/// A worksheet whose first row holds the column headers
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<SheetRow>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Build a table from a calamine range, keeping only the first
    /// `max_columns` spreadsheet columns (counted from column A)
    pub fn from_range(name: &str, range: &Range<Data>, max_columns: usize) -> Self {
        let (first_row, first_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));
        let keep = max_columns.saturating_sub(first_col);

        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|row| row.iter().take(keep).map(header_text).collect())
            .unwrap_or_default();

        let rows = rows
            .enumerate()
            .map(|(i, row)| SheetRow {
                line: first_row + i + 2,
                cells: row.iter().take(keep).map(CellValue::from).collect(),
            })
            .filter(|row| !row.cells.iter().all(CellValue::is_missing))
            .collect();

        Self {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    pub fn column_index(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| ProcessingError::MissingColumn {
                sheet: self.name.clone(),
                column: header.to_string(),
            })
    }

    fn cell(row: &SheetRow, col: usize) -> CellValue {
        row.cells.get(col).cloned().unwrap_or(CellValue::Missing)
    }

    /// Extract the hour, pressure, wet-bulb and humidity columns
    pub fn weather_sheet(&self, document: &str) -> Result<RawWeatherSheet> {
        let hour = self.column_index(HEADER_HOUR)?;
        let pressure = self.column_index(HEADER_PRESSURE)?;
        let wet_bulb = self.column_index(HEADER_WET_BULB)?;
        let humidity = self.column_index(HEADER_HUMIDITY)?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                RawWeatherRow::new(
                    row.line,
                    Self::cell(row, hour),
                    Self::cell(row, pressure),
                    Self::cell(row, wet_bulb),
                    Self::cell(row, humidity),
                )
            })
            .collect();

        Ok(RawWeatherSheet {
            document: document.to_string(),
            sheet: self.name.clone(),
            rows,
        })
    }

    /// Extract the zone, timestamp, latitude and longitude columns
    pub fn position_rows(&self) -> Result<Vec<RawPositionRow>> {
        let time_zone = self.column_index(HEADER_TIME_ZONE)?;
        let timestamp = self.column_index(HEADER_DATE_TIME)?;
        let latitude = self.column_index(HEADER_LATITUDE)?;
        let longitude = self.column_index(HEADER_LONGITUDE)?;

        Ok(self
            .rows
            .iter()
            .map(|row| {
                RawPositionRow::new(
                    row.line,
                    Self::cell(row, time_zone),
                    Self::cell(row, timestamp),
                    Self::cell(row, latitude),
                    Self::cell(row, longitude),
                )
            })
            .collect())
    }
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
