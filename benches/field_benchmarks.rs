//! 粒子场性能基准测试
//!
//! 测试形状生成与模拟推进的性能

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gesture_particles::config::FieldConfig;
use gesture_particles::particles::{generate, ParticleField, ParticleShape};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SHAPES: [ParticleShape; 5] = [
    ParticleShape::Sphere,
    ParticleShape::Heart,
    ParticleShape::Flower,
    ParticleShape::Firework,
    ParticleShape::Nebula,
];

fn bench_shape_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_generation");

    for shape in SHAPES {
        group.bench_with_input(
            BenchmarkId::from_parameter(shape.name()),
            &shape,
            |b, &shape| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| {
                    for index in 0..10_000 {
                        black_box(generate(shape, index, 10_000, &mut rng));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_field_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_rebuild");

    for count in [1_000usize, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let config = FieldConfig {
                    count,
                    shape: ParticleShape::Firework,
                    seed: Some(42),
                    ..Default::default()
                };
                black_box(ParticleField::new(config));
            });
        });
    }

    group.finish();
}

fn bench_field_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_advance");

    // 烟花做全量积分，球形只有标量平滑
    for shape in [ParticleShape::Firework, ParticleShape::Sphere] {
        group.bench_with_input(
            BenchmarkId::from_parameter(shape.name()),
            &shape,
            |b, &shape| {
                let config = FieldConfig {
                    count: 50_000,
                    shape,
                    seed: Some(42),
                    ..Default::default()
                };
                let mut field = ParticleField::new(config);
                field.set_scale(1.5);
                b.iter(|| {
                    field.advance(black_box(1.0 / 60.0));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_shape_generation,
    bench_field_rebuild,
    bench_field_advance
);
criterion_main!(benches);
