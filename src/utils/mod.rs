pub mod constants;
pub mod lexical;
pub mod progress;

pub use constants::*;
pub use lexical::{decimal_day_of_year, is_missing, roman_to_arabic};
pub use progress::ProgressReporter;
