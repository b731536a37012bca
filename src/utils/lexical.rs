use crate::error::{ProcessingError, Result};

/// Check whether a value is the NaN "missing" sentinel
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

fn roman_digit(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Convert a roman numeral to an integer
///
/// A symbol followed by a larger one is subtracted, otherwise it is added.
/// The numeral grammar itself is not checked, so `"IIV"` decodes to 5.
///
/// # Examples
/// ```
/// use hesp_processor::utils::roman_to_arabic;
///
/// assert_eq!(roman_to_arabic("XII").unwrap(), 12);
/// assert!(roman_to_arabic("12h").is_err());
/// ```
pub fn roman_to_arabic(roman: &str) -> Result<i64> {
    let values = roman
        .chars()
        .map(|symbol| {
            roman_digit(symbol)
                .ok_or_else(|| ProcessingError::InvalidRomanNumeral(roman.to_string()))
        })
        .collect::<Result<Vec<i64>>>()?;

    let arabic = values
        .iter()
        .enumerate()
        .fold(0, |total, (i, value)| match values.get(i + 1) {
            Some(next) if value < next => total - value,
            _ => total + value,
        });

    Ok(arabic)
}

/// Fold hour, minute and second into the fractional part of a day of year
pub fn decimal_day_of_year(day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let minute = minute as f64 + second as f64 / 60.0;
    let hour = hour as f64 + minute / 60.0;
    day as f64 + hour / 24.0
}
