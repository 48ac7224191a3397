use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::Point;
use zoomclust::{City, ZoomLevelClusterer, build_clusters, destination_point, distance};

fn synthetic_cities(count: usize) -> Vec<City> {
    (0..count)
        .map(|i| {
            let lat = -55.0 + ((i * 37) % 1100) as f64 * 0.1;
            let lon = -170.0 + ((i * 91) % 3400) as f64 * 0.1;
            City::new(lat, lon)
                .with_popularity((i % 1000) as f64)
                .with_capital(i % 250 == 0)
        })
        .collect()
}

fn benchmark_geodesy(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesy");

    let paris = Point::new(2.3522, 48.8566);
    let tokyo = Point::new(139.6917, 35.6895);

    group.bench_function("haversine_distance", |b| {
        b.iter(|| distance(black_box(&paris), black_box(&tokyo)))
    });

    group.bench_function("destination_point", |b| {
        b.iter(|| destination_point(black_box(&paris), black_box(350.0), black_box(90.0)))
    });

    group.finish();
}

fn benchmark_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pass");
    let cities = synthetic_cities(2_000);

    for size in [1400.0, 175.0, 44.0] {
        group.bench_with_input(BenchmarkId::new("build_clusters", size), &size, |b, &size| {
            b.iter(|| build_clusters(black_box(&cities), size))
        });
    }

    group.finish();
}

fn benchmark_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");
    group.sample_size(20);

    let clusterer = ZoomLevelClusterer::default();
    for count in [500, 2_000, 5_000] {
        let cities = synthetic_cities(count);
        group.bench_with_input(BenchmarkId::new("default_zoom_range", count), &cities, |b, cities| {
            b.iter_batched(
                || cities.clone(),
                |mut batch| clusterer.execute(&mut batch).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_geodesy,
    benchmark_single_pass,
    benchmark_execute
);
criterion_main!(benches);
