use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scheduler_core::recurrence::{next_date, next_occurrence, upcoming, RepeatRule, SearchLimits};

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn bench_rule_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parsing");

    for rule in ["y", "d 7", "w 1,3,5", "m 1,15,-1", "m 1,10,20,30 1,4,7,10"] {
        group.bench_with_input(BenchmarkId::from_parameter(rule), rule, |b, rule| {
            b.iter(|| RepeatRule::parse(black_box(rule)).unwrap())
        });
    }
    group.finish();
}

fn bench_next_occurrence(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let limits = SearchLimits::default();

    let mut group = c.benchmark_group("next_occurrence");

    for rule in ["y", "d 3", "w 1,3", "m 31", "m -2,-1", "m 10,-1", "m 29 2"] {
        let parsed = RepeatRule::parse(rule).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rule), &parsed, |b, parsed| {
            b.iter(|| next_occurrence(black_box(parsed), start, now(), &limits).unwrap())
        });
    }
    group.finish();
}

fn bench_distant_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("distant_start");

    for start in ["20230101", "20000101", "19000101"] {
        group.bench_with_input(BenchmarkId::new("weekly", start), start, |b, start| {
            b.iter(|| next_date(now(), black_box(start), "w 2,4").unwrap())
        });
        group.bench_with_input(BenchmarkId::new("yearly", start), start, |b, start| {
            b.iter(|| next_date(now(), black_box(start), "y").unwrap())
        });
    }
    group.finish();
}

fn bench_upcoming(c: &mut Criterion) {
    let limits = SearchLimits::default();
    let mut group = c.benchmark_group("upcoming");

    for count in [5usize, 50, 500] {
        group.bench_with_input(BenchmarkId::new("count", count), &count, |b, &count| {
            b.iter(|| upcoming(now(), "20240101", "m 1,15,-1", black_box(count), &limits).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rule_parsing,
    bench_next_occurrence,
    bench_distant_start,
    bench_upcoming
);
criterion_main!(benches);
