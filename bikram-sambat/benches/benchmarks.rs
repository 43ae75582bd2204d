use bikram_sambat::{normalize, Calendar};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DATE_PADDED: &str = "2081-01-15";
const DATE_LOOSE: &str = "2081-1-5";

fn criterion_benches(c: &mut Criterion) {
    let calendar = Calendar::default();

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(DATE_LOOSE)).unwrap())
    });

    c.bench_function("parse_and_validate", |b| {
        b.iter(|| calendar.parse_and_validate(black_box(DATE_PADDED)).unwrap())
    });

    c.bench_function("day_of_week first year", |b| {
        b.iter(|| calendar.day_of_week(black_box(2000), black_box(0), black_box(1)))
    });

    c.bench_function("day_of_week last year", |b| {
        b.iter(|| calendar.day_of_week(black_box(2090), black_box(11), black_box(30)))
    });

    c.bench_function("from_days_since_epoch", |b| {
        b.iter(|| calendar.from_days_since_epoch(black_box(29585)))
    });

    c.bench_function("month_grid", |b| {
        b.iter(|| calendar.month_grid(black_box(2081), black_box(0)).unwrap())
    });
}

criterion_group!(benches, criterion_benches);
criterion_main!(benches);
