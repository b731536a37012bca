/// File and directory names
pub const DEFAULT_DATA_DIR: &str = "hesp_rafaelhermida_2019";
pub const OUTPUT_FILE_NAME: &str = "TristanHespData.json";
pub const WORKBOOK_EXTENSION: &str = "xlsx";
pub const POSITION_FILE_PREFIX: &str = "Pos";
pub const POSITION_SHEET: &str = "Hoja1";

/// Excel writes this prefix for the lock file of an open workbook
pub const LOCK_FILE_PREFIX: &str = "~$";

/// Column windows (A:O for observations, A:D for positions)
pub const OBSERVATION_COLUMNS: usize = 15;
pub const POSITION_COLUMNS: usize = 4;

/// Observation sheet headers
pub const HEADER_HOUR: &str = " Horario U.T.C.";
pub const HEADER_PRESSURE: &str = "Barómetro en mb.";
pub const HEADER_WET_BULB: &str = "Temperatura bola Humeda";
pub const HEADER_HUMIDITY: &str = "Humedad";

/// Position sheet headers
pub const HEADER_TIME_ZONE: &str = "HUSO HORARIO";
pub const HEADER_DATE_TIME: &str = "FECHA / HORA";
pub const HEADER_LATITUDE: &str = "LATITUD (N + ; S -)";
pub const HEADER_LONGITUDE: &str = "LONGITUD (E + ; W -)";

/// Temperature strings are written as "15º C" or "15° C"
pub const DEGREE_MARKERS: [char; 2] = ['º', '°'];

/// Position readings this close to the next minute are pushed forward one second
pub const SECOND_ROUNDING_THRESHOLD: u32 = 59;

pub const MONTHS: [(&str, u32); 12] = [
    ("Enero", 1),
    ("Febrero", 2),
    ("Marzo", 3),
    ("Abril", 4),
    ("Mayo", 5),
    ("Junio", 6),
    ("Julio", 7),
    ("Agosto", 8),
    ("Septiembre", 9),
    ("Octubre", 10),
    ("Noviembre", 11),
    ("Diciembre", 12),
];

/// Military time zones and their offset from UTC in hours
pub const MILITARY_TIME_ZONES: [(&str, i64); 5] = [
    ("ALFA", 1),
    ("ZULU", 0),
    ("NOVEMBER", -1),
    ("OSCAR", -2),
    ("PAPA", -3),
];

/// TSV export header
pub const TSV_HEADER: [&str; 7] = [
    "doyhhmmss",
    "doy.ddd",
    "Press.",
    "Temp.",
    "Hum.",
    "Lat.",
    "Lon.",
];

pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

pub fn zone_offset_hours(zone: &str) -> Option<i64> {
    MILITARY_TIME_ZONES
        .iter()
        .find(|(name, _)| *name == zone)
        .map(|(_, offset)| *offset)
}
