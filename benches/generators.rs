use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use kruskal_mazes::{
    generators::{self, KruskalGenerator},
    grid_dimensions::MazeDimensions,
    observers::NullObserver,
    units::{Height, Width},
};

fn bench_kruskal_maze_32(c: &mut Criterion) {
    let dimensions = MazeDimensions::new(Width(32), Height(32)).unwrap();
    let mut rng = StdRng::seed_from_u64(32);

    c.bench_function("kruskal_maze_32", move |b| {
        b.iter(|| generators::generate(dimensions, &mut rng, &mut NullObserver).unwrap())
    });
}

fn bench_kruskal_carve_128(c: &mut Criterion) {
    let dimensions = MazeDimensions::new(Width(128), Height(128)).unwrap();
    let mut rng = StdRng::seed_from_u64(128);

    c.bench_function("kruskal_carve_128", move |b| {
        b.iter(|| {
            let mut generator = KruskalGenerator::new(dimensions);
            generator.carve(&mut rng, &mut NullObserver).unwrap();
            generator.into_grid()
        })
    });
}

criterion_group!(benches, bench_kruskal_maze_32, bench_kruskal_carve_128);
criterion_main!(benches);
