//! Meteorological code tables used in the logbook's visibility and
//! present-weather columns.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Code 90
    Below50m,
    Meters(u32),
    /// Code 99
    Above50km,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Below50m => write!(f, "< 50 m"),
            Visibility::Meters(m) => write!(f, "{} m", m),
            Visibility::Above50km => write!(f, "> 50000 m"),
        }
    }
}

pub fn visibility_from_code(code: u8) -> Option<Visibility> {
    match code {
        90 => Some(Visibility::Below50m),
        91 => Some(Visibility::Meters(50)),
        92 => Some(Visibility::Meters(200)),
        93 => Some(Visibility::Meters(500)),
        94 => Some(Visibility::Meters(1000)),
        95 => Some(Visibility::Meters(2000)),
        96 => Some(Visibility::Meters(4000)),
        97 => Some(Visibility::Meters(10000)),
        98 => Some(Visibility::Meters(20000)),
        99 => Some(Visibility::Above50km),
        _ => None,
    }
}

/// Spanish description of a present-weather code
pub fn present_weather(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("Despejado"),
        3 => Some("Nubosidad variable"),
        5 => Some("Calma"),
        18 => Some("Chuvascos de viento"),
        41 => Some("Niebla"),
        58 => Some("Llovizna"),
        65 => Some("Lluvia"),
        72 => Some("Nevada"),
        81 => Some("Chuvascos de lluvia"),
        86 => Some("Chuvascos de nieve"),
        97 => Some("Tormenta"),
        _ => None,
    }
}
