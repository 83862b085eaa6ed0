use chrono::Weekday;
use criterion::{criterion_group, criterion_main, Criterion};
use newtab_dashboard::models::{PushupRecord, WeekdayAggregate};
use newtab_dashboard::widgets;
use std::hint::black_box;

fn benchmark_weekday_aggregate(c: &mut Criterion) {
    // A year of daily entries, plus a few rows with a bad weekday
    let records: Vec<PushupRecord> = (0..365i32)
        .map(|i| PushupRecord {
            amount: f64::from(20 + (i % 17)),
            weekday: i64::from((i % 7) + 1),
        })
        .chain((0..5i64).map(|i| PushupRecord {
            amount: 1.0,
            weekday: 8 + i,
        }))
        .collect();

    let mut group = c.benchmark_group("weekday_aggregate");

    group.bench_function("fold_year_of_records", |b| {
        b.iter(|| {
            let mut aggregate = WeekdayAggregate::starting_after(Weekday::Wed);
            for record in black_box(&records) {
                aggregate.add(record);
            }
            aggregate.total()
        })
    });

    let mut aggregate = WeekdayAggregate::starting_after(Weekday::Wed);
    for record in &records {
        aggregate.add(record);
    }

    group.bench_function("render_chart", |b| {
        b.iter(|| widgets::fitness::render(black_box(&aggregate)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_weekday_aggregate);
criterion_main!(benches);
