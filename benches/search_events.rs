use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skyseek::{
    body::Body,
    observer::Observer,
    search::{seasons::seasons, Direction, SearchDirection},
    sky::Sky,
    time::Instant,
};

fn bench_daily(c: &mut Criterion) {
    let sky = Sky::new();
    let observer = Observer::new(45.0, 5.0, 200.0).expect("valid site");
    let start = Instant::from_calendar(2024, 3, 1, 0, 0, 0.0).expect("valid date");

    c.bench_function("search/sunrise", |b| {
        b.iter(|| sky.search_rise_set(Body::Sun, &observer, Direction::Rise, black_box(&start), 2.0))
    });

    c.bench_function("search/moon_culmination", |b| {
        b.iter(|| {
            sky.search_hour_angle(Body::Moon, &observer, 0.0, black_box(&start), SearchDirection::Forward)
        })
    });
}

fn bench_long_range(c: &mut Criterion) {
    let sky = Sky::new();
    let start = Instant::from_calendar(2024, 1, 1, 0, 0, 0.0).expect("valid date");

    c.bench_function("search/seasons", |b| b.iter(|| seasons(black_box(2024))));

    c.bench_function("search/moon_quarter", |b| b.iter(|| sky.search_moon_quarter(black_box(&start))));

    c.bench_function("search/lunar_eclipse", |b| {
        b.iter(|| sky.search_lunar_eclipse(black_box(&start)))
    });

    c.bench_function("search/mars_opposition", |b| {
        b.iter(|| sky.search_relative_longitude(Body::MARS, 0.0, black_box(&start)))
    });
}

criterion_group!(benches, bench_daily, bench_long_range);
criterion_main!(benches);
