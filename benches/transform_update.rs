use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use glam::Vec3;
use gpu_scene::{Placement, SceneObject, Surface, TriangleData};

/// Builds a flat sheet of triangles to push through the re-placement pass.
fn triangle_soup(count: usize) -> Vec<TriangleData> {
    let surface = Surface::default();
    (0..count)
        .map(|i| {
            let base = Vec3::new((i % 100) as f32, 0.0, (i / 100) as f32);
            TriangleData::new(base, base + Vec3::X, base + Vec3::Y, &surface)
        })
        .collect()
}

fn bench_update_translate(c: &mut Criterion) {
    let triangles = triangle_soup(10_000);
    let target = Placement::new(Vec3::new(5.0, 1.0, -2.0), Vec3::ZERO, Vec3::ONE);

    c.bench_function("update_translate_10k", |b| {
        b.iter_batched(
            || SceneObject::from_triangles(None, "soup", Placement::default(), triangles.clone()),
            |mut object| {
                object.update(black_box(target)).unwrap();
                object
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_update_full_transform(c: &mut Criterion) {
    let triangles = triangle_soup(10_000);
    let target = Placement::new(
        Vec3::new(5.0, 1.0, -2.0),
        Vec3::new(15.0, 30.0, 45.0),
        Vec3::new(2.0, 0.5, 1.5),
    );

    c.bench_function("update_full_transform_10k", |b| {
        b.iter_batched(
            || SceneObject::from_triangles(None, "soup", Placement::default(), triangles.clone()),
            |mut object| {
                object.update(black_box(target)).unwrap();
                object
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_update_translate, bench_update_full_transform);
criterion_main!(benches);
