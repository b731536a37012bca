use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, Result};
use crate::utils::lexical::decimal_day_of_year;

/// Join key encoding day of year, hour, minute and second as the decimal
/// digits `DDDHHMMSS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimestampKey(u32);

impl TimestampKey {
    pub fn new(day_of_year: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        if !(1..=999).contains(&day_of_year) || hour > 23 || minute > 59 || second > 59 {
            return Err(ProcessingError::InvalidTimestampKey(format!(
                "day {} {:02}:{:02}:{:02} is out of range",
                day_of_year, hour, minute, second
            )));
        }

        let digits = format!("{day_of_year:03}{hour:02}{minute:02}{second:02}");
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ProcessingError::InvalidTimestampKey(digits))
    }

    pub fn from_datetime(datetime: &NaiveDateTime) -> Result<Self> {
        Self::new(
            datetime.ordinal(),
            datetime.hour(),
            datetime.minute(),
            datetime.second(),
        )
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn day_of_year(&self) -> u32 {
        self.0 / 1_000_000
    }

    pub fn hour(&self) -> u32 {
        self.0 / 10_000 % 100
    }

    pub fn minute(&self) -> u32 {
        self.0 / 100 % 100
    }

    pub fn second(&self) -> u32 {
        self.0 % 100
    }

    /// (day of year, hour, minute, second)
    pub fn components(&self) -> (u32, u32, u32, u32) {
        (self.day_of_year(), self.hour(), self.minute(), self.second())
    }

    pub fn decimal_day_of_year(&self) -> f64 {
        decimal_day_of_year(self.day_of_year(), self.hour(), self.minute(), self.second())
    }
}

impl fmt::Display for TimestampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimestampKey {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ProcessingError::InvalidTimestampKey(s.to_string()))?;
        let key = TimestampKey(value);
        let (day, hour, minute, second) = key.components();
        TimestampKey::new(day, hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_key_digits() {
        let key = TimestampKey::new(45, 6, 0, 0).unwrap();
        assert_eq!(key.value(), 45_060_000);
        assert_eq!(format!("{:09}", key.value()), "045060000");
        assert_eq!(key.to_string(), "45060000");

        let key = TimestampKey::new(366, 23, 59, 59).unwrap();
        assert_eq!(key.value(), 366_235_959);
    }

    #[test]
    fn test_key_round_trip() {
        let key = TimestampKey::new(45, 6, 0, 0).unwrap();
        assert_eq!(key.components(), (45, 6, 0, 0));

        let parsed: TimestampKey = "306123015".parse().unwrap();
        assert_eq!(parsed.components(), (306, 12, 30, 15));
    }

    #[test]
    fn test_key_rejects_out_of_range_components() {
        assert!(TimestampKey::new(0, 0, 0, 0).is_err());
        assert!(TimestampKey::new(45, 24, 0, 0).is_err());
        assert!(TimestampKey::new(45, 0, 60, 0).is_err());
        assert!(TimestampKey::new(45, 0, 0, 60).is_err());
        assert!("45990000".parse::<TimestampKey>().is_err());
        assert!("abc".parse::<TimestampKey>().is_err());
    }

    #[test]
    fn test_key_order_matches_chronology() {
        let instants = [
            (1, 0, 0, 0),
            (1, 0, 0, 59),
            (1, 0, 1, 0),
            (1, 23, 59, 59),
            (2, 0, 0, 0),
            (99, 12, 0, 0),
            (100, 0, 0, 0),
            (366, 23, 59, 59),
        ];
        let keys: Vec<TimestampKey> = instants
            .iter()
            .map(|(d, h, m, s)| TimestampKey::new(*d, *h, *m, *s).unwrap())
            .collect();

        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].decimal_day_of_year() < pair[1].decimal_day_of_year());
        }
    }

    #[test]
    fn test_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2019, 2, 14)
            .unwrap()
            .and_hms_opt(6, 5, 4)
            .unwrap();
        let key = TimestampKey::from_datetime(&dt).unwrap();
        assert_eq!(key.components(), (45, 6, 5, 4));
    }

    #[test]
    fn test_serializes_as_integer() {
        let key = TimestampKey::new(45, 6, 0, 0).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "45060000");
    }
}
