use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skyseek::{
    body::{Body, Planet},
    light_time::Aberration,
    moon::geo_moon,
    planets::helio_state,
    sky::Sky,
    time::Instant,
};

/// Random instants spread over two centuries around J2000.
fn random_instants(rng: &mut StdRng, n: usize) -> Vec<Instant> {
    (0..n)
        .map(|_| Instant::from_ut(rng.random_range(-36_500.0..36_500.0)))
        .collect()
}

fn bench_series(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    c.bench_function("planets/helio_state_jupiter", |b| {
        b.iter_batched(
            || random_instants(&mut rng, 1_000),
            |times| {
                for t in &times {
                    black_box(helio_state(Planet::Jupiter, t));
                }
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("moon/geo_moon", |b| {
        b.iter_batched(
            || random_instants(&mut rng, 1_000),
            |times| {
                for t in &times {
                    black_box(geo_moon(t));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_sky(c: &mut Criterion) {
    let sky = Sky::new();
    let t = Instant::from_ut(8_000.0);
    // Warm the Pluto cache around `t`.
    let _ = sky.helio_state(Body::Pluto, &t);

    c.bench_function("sky/geo_vector_mars_corrected", |b| {
        b.iter(|| sky.geo_vector(black_box(Body::MARS), black_box(&t), Aberration::Corrected))
    });

    c.bench_function("sky/pluto_cached", |b| {
        b.iter(|| sky.helio_state(Body::Pluto, black_box(&t)))
    });

    c.bench_function("sky/jupiter_moons", |b| b.iter(|| sky.jupiter_moons(black_box(&t))));
}

criterion_group!(benches, bench_series, bench_sky);
criterion_main!(benches);
