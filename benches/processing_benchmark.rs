use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hesp_processor::models::{
    CellValue, PositionRecord, RawWeatherRow, TimestampKey, WeatherRecord,
};
use hesp_processor::processors::{DataMerger, WeatherNormalizer};
use hesp_processor::utils::roman_to_arabic;

const ROMAN_HOURS: [&str; 24] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV",
];

// One row per hour for each day, alternating arabic and roman labels
fn create_test_rows(days: usize) -> Vec<(u32, RawWeatherRow)> {
    let mut rows = Vec::with_capacity(days * 24);

    for day in 1..=days {
        for hour in 0..24 {
            let label = if hour % 2 == 0 {
                CellValue::Number((hour + 1) as f64)
            } else {
                CellValue::Text(ROMAN_HOURS[hour].to_string())
            };
            rows.push((
                day as u32,
                RawWeatherRow::new(
                    hour + 2,
                    label,
                    CellValue::Text(format!("10{:02},{}a", hour, day % 10)),
                    CellValue::Text(format!("{}º C", 10 + hour % 8)),
                    CellValue::Text(format!("{}", 50 + hour)),
                ),
            ));
        }
    }

    rows
}

fn create_test_series(days: u32) -> (Vec<WeatherRecord>, Vec<PositionRecord>) {
    let mut weather = Vec::new();
    let mut positions = Vec::new();

    for day in 1..=days {
        for hour in 0..24 {
            let key = TimestampKey::new(day, hour, 0, 0).unwrap();
            weather.push(WeatherRecord::new(key, Some(1013.0), Some(15.0), Some(60.0)));

            for minute in (0..60).step_by(15) {
                let key = TimestampKey::new(day, hour, minute, 0).unwrap();
                positions.push(PositionRecord::new(key, Some(-37.0), Some(-12.0)));
            }
        }
    }

    (weather, positions)
}

fn benchmark_weather_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("weather_normalizer");
    let normalizer = WeatherNormalizer::new();

    for days in [30, 365].iter() {
        let rows = create_test_rows(*days);
        group.bench_with_input(BenchmarkId::new("normalize_rows", days), &rows, |b, rows| {
            b.iter(|| {
                rows.iter()
                    .filter_map(|(doy, row)| normalizer.normalize_row(*doy, row).ok().flatten())
                    .count()
            })
        });
    }

    group.finish();
}

fn benchmark_data_merger(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_merger");
    let merger = DataMerger::new();

    for days in [30, 365].iter() {
        let (weather, positions) = create_test_series(*days);
        group.bench_with_input(
            BenchmarkId::new("merge", days),
            &(weather, positions),
            |b, (weather, positions)| {
                b.iter(|| merger.merge(black_box(weather), black_box(positions)))
            },
        );
    }

    group.finish();
}

fn benchmark_roman_numerals(c: &mut Criterion) {
    c.bench_function("roman_to_arabic", |b| {
        b.iter(|| {
            ROMAN_HOURS
                .iter()
                .map(|label| roman_to_arabic(black_box(label)).unwrap_or(0))
                .sum::<i64>()
        })
    });
}

criterion_group!(
    benches,
    benchmark_weather_normalizer,
    benchmark_data_merger,
    benchmark_roman_numerals
);
criterion_main!(benches);
