use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tintmix::{Mixer, Paint, SearchOptions};

fn studio_palette() -> Vec<Paint> {
    vec![
        Paint::new("tw", "Titanium White", 96.5, -0.3, 1.9),
        Paint::new("ib", "Ivory Black", 17.2, 0.4, -0.6),
        Paint::new("cr", "Cadmium Red", 45.8, 63.1, 41.2),
        Paint::new("cy", "Cadmium Yellow", 82.4, 4.6, 81.9),
        Paint::new("ub", "Ultramarine Blue", 28.9, 18.5, -53.4),
        Paint::new("pg", "Phthalo Green", 40.1, -46.7, 6.3),
        Paint::new("bs", "Burnt Sienna", 37.6, 26.4, 26.8),
        Paint::new("yo", "Yellow Ochre", 65.3, 10.1, 47.5),
    ]
}

pub fn run_benchmarks(c: &mut Criterion) {
    let palette = studio_palette();

    let mut group = c.benchmark_group("recipe-search");
    group.sample_size(20);

    group.bench_function("size-up-to-3", |b| {
        let mixer = Mixer::new(SearchOptions {
            max_recipe_size: 3,
            ..SearchOptions::default()
        });
        b.iter(|| mixer.solve(black_box("#87CEEB"), black_box(&palette)))
    });

    group.bench_function("size-up-to-4", |b| {
        let mixer = Mixer::new(SearchOptions::default());
        b.iter(|| mixer.solve(black_box("#87CEEB"), black_box(&palette)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
