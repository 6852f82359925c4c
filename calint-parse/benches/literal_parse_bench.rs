//! Bench the four literal grammars and the canonical formatter over 100_000 random values.

#![forbid(unsafe_code)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use calint_parse::{
    CalendarInterval, IntervalUnit, parse_day_time, parse_interval, parse_single_unit,
    parse_year_month,
};

const N: usize = 100_000;

fn make_intervals(n: usize) -> Vec<CalendarInterval> {
    let mut rng = SmallRng::seed_from_u64(0xC0FF_EE00_DADA_BEEF);
    (0..n)
        .map(|_| CalendarInterval::new(rng.random::<i32>(), rng.random::<i64>()))
        .collect()
}

fn make_day_times(n: usize) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(0xBADC_0FFE_EE00_1234);
    (0..n)
        .map(|_| {
            format!(
                "{} {:02}:{:02}:{:02}.{:09}",
                rng.random_range(0..10_000u32),
                rng.random_range(0..24u32),
                rng.random_range(0..60u32),
                rng.random_range(0..60u32),
                rng.random_range(0..1_000_000_000u32),
            )
        })
        .collect()
}

fn bench_literals(c: &mut Criterion) {
    let values = make_intervals(N);
    let full_forms: Vec<String> = values.iter().map(ToString::to_string).collect();
    let year_months: Vec<String> = values
        .iter()
        .map(|v| format!("{}-{}", v.months.unsigned_abs() / 12, v.months.unsigned_abs() % 12))
        .collect();
    let day_times = make_day_times(N);
    let milli_counts: Vec<String> = values
        .iter()
        .map(|v| (v.microseconds / 1_000_000_000).to_string())
        .collect();

    c.bench_function("literal/full_form", |b| {
        b.iter(|| {
            for text in &full_forms {
                black_box(parse_interval(text).ok());
            }
        });
    });

    c.bench_function("literal/year_month", |b| {
        b.iter(|| {
            for text in &year_months {
                black_box(parse_year_month(text).ok());
            }
        });
    });

    c.bench_function("literal/day_time", |b| {
        b.iter(|| {
            for text in &day_times {
                black_box(parse_day_time(text).ok());
            }
        });
    });

    c.bench_function("literal/single_unit", |b| {
        b.iter(|| {
            for text in &milli_counts {
                black_box(parse_single_unit(IntervalUnit::Millisecond, text).ok());
            }
        });
    });

    c.bench_function("literal/format", |b| {
        b.iter(|| {
            let mut bytes = 0usize;
            for value in &values {
                bytes += value.to_string().len();
            }
            black_box(bytes);
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_literals
}
criterion_main!(benches);
