use hesp_processor::config::Settings;
use hesp_processor::models::{CellValue, TimestampKey};
use hesp_processor::processors::Pipeline;
use hesp_processor::readers::{ObservationDocument, SheetRow, SheetTable, SourceTables};
use hesp_processor::writers::JsonWriter;
use hesp_processor::ProcessingError;
use pretty_assertions::assert_eq;
use std::fs::File;
use tempfile::TempDir;

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn table(name: &str, headers: &[&str], rows: Vec<Vec<CellValue>>) -> SheetTable {
    SheetTable::new(
        name,
        headers.iter().map(|h| h.to_string()).collect(),
        rows.into_iter()
            .enumerate()
            .map(|(i, cells)| SheetRow { line: i + 2, cells })
            .collect(),
    )
}

fn weather_headers() -> [&'static str; 4] {
    [
        " Horario U.T.C.",
        "Barómetro en mb.",
        "Temperatura bola Humeda",
        "Humedad",
    ]
}

fn position_headers() -> [&'static str; 4] {
    [
        "HUSO HORARIO",
        "FECHA / HORA",
        "LATITUD (N + ; S -)",
        "LONGITUD (E + ; W -)",
    ]
}

#[test]
fn test_end_to_end_single_row() {
    let sources = SourceTables {
        observations: vec![ObservationDocument {
            name: "2.Noviembre 2019".to_string(),
            sheets: vec![table(
                "Dia 15",
                &weather_headers(),
                vec![vec![text("XII"), text("1013,2a"), text("15º C"), text("60")]],
            )],
        }],
        positions: vec![table(
            "Hoja1",
            &position_headers(),
            vec![vec![
                text("ZULU"),
                text("2019-11-15 12:00:00"),
                text("40.0"),
                text("-3.0"),
            ]],
        )],
    };

    let settings = Settings::default();
    let output = Pipeline::new(&settings).process_tables(&sources).unwrap();

    assert_eq!(output.dataset.len(), 1);
    let key = TimestampKey::new(319, 12, 0, 0).unwrap();
    let row = output.dataset.get(&key).unwrap();

    assert_eq!(row.doy_decimal, Some(319.5));
    assert!((row.pressure.unwrap() - 1013.2).abs() < 1e-9);
    assert_eq!(row.temperature, Some(15.0));
    assert_eq!(row.humidity, Some(60.0));
    assert_eq!(row.latitude, Some(40.0));
    assert_eq!(row.longitude, Some(-3.0));
    assert_eq!(output.report.matched_rows, 1);
}

#[test]
fn test_first_sheet_wins_on_duplicate_keys() {
    // "Dia 31" of April rolls over to May 1st, colliding with "Dia 01" of May
    let sources = SourceTables {
        observations: vec![
            ObservationDocument {
                name: "4.Abril 2020".to_string(),
                sheets: vec![table(
                    "Dia 31",
                    &weather_headers(),
                    vec![vec![text("6"), text("1001"), text("10"), text("50")]],
                )],
            },
            ObservationDocument {
                name: "5.Mayo 2020".to_string(),
                sheets: vec![table(
                    "Dia 01",
                    &weather_headers(),
                    vec![vec![text("VI"), text("1002"), text("11"), text("51")]],
                )],
            },
        ],
        positions: vec![table("Hoja1", &position_headers(), vec![])],
    };

    let settings = Settings::default();
    let output = Pipeline::new(&settings).process_tables(&sources).unwrap();

    assert_eq!(output.dataset.len(), 1);
    assert_eq!(output.stats.weather_duplicates, 1);

    let key = TimestampKey::new(122, 6, 0, 0).unwrap();
    assert_eq!(output.dataset.get(&key).unwrap().pressure, Some(1001.0));
}

#[test]
fn test_persisted_dataset_round_trip() {
    let sources = SourceTables {
        observations: vec![ObservationDocument {
            name: "2.Noviembre 2019".to_string(),
            sheets: vec![table(
                "Dia 02",
                &weather_headers(),
                vec![
                    vec![text("0"), text("1010,5b"), CellValue::Missing, text("70")],
                    vec![
                        text("VI"),
                        CellValue::Number(1011.0),
                        text("14º C"),
                        CellValue::Number(72.0),
                    ],
                ],
            )],
        }],
        positions: vec![table(
            "Hoja1",
            &position_headers(),
            vec![vec![
                text("OSCAR"),
                text("2019-11-02 04:00:00"),
                CellValue::Number(-37.06),
                CellValue::Number(-12.31),
            ]],
        )],
    };

    let settings = Settings::default();
    let output = Pipeline::new(&settings).process_tables(&sources).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(&settings.output_file_name);
    let writer = JsonWriter::new();
    writer.write_dataset(&output.dataset, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_reader(File::open(&path).unwrap()).unwrap();
    let midnight = &json["306000000"];
    assert_eq!(midnight["Pressure"], serde_json::json!(1010.5));
    assert!(midnight["Temperature"].is_null());
    assert!(midnight["Latitude"].is_null());

    // OSCAR is UTC-2, so the 04:00 fix lands on the 06:00 observation
    let six = &json["306060000"];
    assert_eq!(six["Latitude"], serde_json::json!(-37.06));
    assert_eq!(six["Temperature"], serde_json::json!(14.0));

    assert_eq!(writer.read_dataset(&path).unwrap(), output.dataset);
}

#[test]
fn test_run_without_position_workbook_fails() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("2.Noviembre 2019.xlsx")).unwrap();

    let settings = Settings::default().with_data_dir(dir.path().to_path_buf());
    match Pipeline::new(&settings).run() {
        Err(ProcessingError::MissingData(_)) => {}
        other => panic!("Expected MissingData, got {:?}", other.map(|o| o.dataset.len())),
    }
}
