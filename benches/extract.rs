// benches/extract.rs
use agenda_watch::{
    config::options::EvaluateOptions,
    evaluate::evaluate,
    specs::agenda_center::extract,
    store::records_to_dataset,
};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PAGE: &str = include_str!("../tests/fixtures/agenda_center.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_agenda_center", |b| {
        b.iter(|| extract(black_box(PAGE)).map(|a| a.count()))
    });

    let table = records_to_dataset(extract(PAGE).unwrap());
    let now = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let opts = EvaluateOptions::default();
    c.bench_function("evaluate_fixture", |b| {
        b.iter(|| evaluate(black_box(&table), now, &opts).map(|e| e.alert_count()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
