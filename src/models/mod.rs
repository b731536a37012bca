pub mod cell;
pub mod codes;
pub mod merged;
pub mod position;
pub mod timestamp;
pub mod weather;

pub use cell::CellValue;
pub use codes::{present_weather, visibility_from_code, Visibility};
pub use merged::{MergedDataset, MergedRow};
pub use position::{PositionRecord, RawPositionRow};
pub use timestamp::TimestampKey;
pub use weather::{RawWeatherRow, RawWeatherSheet, WeatherRecord};
