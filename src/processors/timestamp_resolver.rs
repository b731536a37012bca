use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::month_number;

/// Derives the day of year of a logbook sheet from its document and sheet
/// names, e.g. document "2.Noviembre 2019" and sheet "Dia 15".
pub struct TimestampResolver;

impl TimestampResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the day of year, or `None` when the sheet is not a day sheet
    pub fn resolve(&self, document_name: &str, sheet_name: &str) -> Result<Option<u32>> {
        let (year, month) = self.parse_document_name(document_name)?;

        let Some(day) = self.parse_sheet_day(sheet_name) else {
            warn!("Sheet named '{}' is not a day number, skipping", sheet_name);
            return Ok(None);
        };

        self.day_of_year(year, month, day).map(Some)
    }

    /// Year from the last 4 characters, month name from character 2 up to
    /// the last 5
    pub fn parse_document_name(&self, document_name: &str) -> Result<(i32, u32)> {
        let chars: Vec<char> = document_name.chars().collect();
        let len = chars.len();
        if len < 7 {
            return Err(ProcessingError::DocumentName {
                document: document_name.to_string(),
                reason: "too short to hold a month and year".to_string(),
            });
        }

        let year_text: String = chars[len - 4..].iter().collect();
        let month_text: String = chars[2..len - 5].iter().collect();

        let year = year_text
            .parse::<i32>()
            .map_err(|_| ProcessingError::DocumentName {
                document: document_name.to_string(),
                reason: format!("'{}' is not a year", year_text),
            })?;

        let month = month_number(&month_text).ok_or_else(|| ProcessingError::DocumentName {
            document: document_name.to_string(),
            reason: format!("'{}' is not a month name", month_text),
        })?;

        Ok((year, month))
    }

    /// Day number from the last 2 characters of the sheet name
    pub fn parse_sheet_day(&self, sheet_name: &str) -> Option<u32> {
        let chars: Vec<char> = sheet_name.chars().collect();
        let start = chars.len().saturating_sub(2);
        let day_text: String = chars[start..].iter().collect();
        day_text.trim().parse::<u32>().ok()
    }

    /// Ordinal day of (year, month, day). A day one past the end of the
    /// month resolves to the first day of the next month.
    pub fn day_of_year(&self, year: i32, month: u32, day: u32) -> Result<u32> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Ok(date.ordinal());
        }

        day.checked_sub(1)
            .and_then(|previous| NaiveDate::from_ymd_opt(year, month, previous))
            .map(|date| date.ordinal() + 1)
            .ok_or_else(|| {
                ProcessingError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
            })
    }
}

impl Default for TimestampResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_name() {
        let resolver = TimestampResolver::new();
        assert_eq!(
            resolver.parse_document_name("2.Noviembre 2019").unwrap(),
            (2019, 11)
        );
        assert_eq!(resolver.parse_document_name("4.Abril 2020").unwrap(), (2020, 4));
    }

    #[test]
    fn test_invalid_document_names() {
        let resolver = TimestampResolver::new();
        // Two-digit prefixes push the dot into the month slice
        assert!(resolver.parse_document_name("10.Enero 2020").is_err());
        assert!(resolver.parse_document_name("2.noviembre 2019").is_err());
        assert!(resolver.parse_document_name("2.Noviembre 20x9").is_err());
        assert!(resolver.parse_document_name("Pos").is_err());
    }

    #[test]
    fn test_parse_sheet_day() {
        let resolver = TimestampResolver::new();
        assert_eq!(resolver.parse_sheet_day("Dia 15"), Some(15));
        assert_eq!(resolver.parse_sheet_day("Dia 5"), Some(5));
        assert_eq!(resolver.parse_sheet_day("7"), Some(7));
        assert_eq!(resolver.parse_sheet_day("Resumen"), None);
        assert_eq!(resolver.parse_sheet_day(""), None);
    }

    #[test]
    fn test_resolve() {
        let resolver = TimestampResolver::new();
        assert_eq!(resolver.resolve("2.Noviembre 2019", "Dia 15").unwrap(), Some(319));
        assert_eq!(resolver.resolve("1.Enero 2020", "Dia 01").unwrap(), Some(1));
        assert_eq!(resolver.resolve("2.Noviembre 2019", "Hoja3").unwrap(), None);
    }

    #[test]
    fn test_rollover_to_next_month() {
        let resolver = TimestampResolver::new();

        // April has 30 days; day 31 is May 1st
        let may_first = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().ordinal();
        assert_eq!(resolver.resolve("4.Abril 2020", "Dia 31").unwrap(), Some(may_first));
        assert_eq!(may_first, 122);

        // Non-leap February
        let march_first = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap().ordinal();
        assert_eq!(resolver.day_of_year(2019, 2, 29).unwrap(), march_first);
    }

    #[test]
    fn test_rollover_is_a_single_retry() {
        let resolver = TimestampResolver::new();
        assert!(resolver.day_of_year(2019, 2, 30).is_err());
        assert!(resolver.day_of_year(2019, 4, 0).is_err());
        assert!(resolver.resolve("4.Abril 2020", "Dia 32").is_err());
    }
}
