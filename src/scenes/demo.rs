use glam::Vec3;

use crate::error::SceneError;
use crate::object::{ObjectKind, SceneObject};
use crate::placement::{Placement, Surface};
use crate::scene::Scene;
use crate::types::TriangleData;

/// Builds the fallback scene used when no scene file is given: a grey ground
/// slab, three spheres with different surfaces, and a pyramid mesh so the
/// re-placement path has triangles to chew on.
pub fn create_demo_scene() -> Result<Scene, SceneError> {
    let mut scene = Scene::new();

    scene.add(SceneObject::new(
        None,
        ObjectKind::Box,
        "ground",
        None,
        Placement::new(
            Vec3::new(0.0, -0.25, 0.0),
            Vec3::ZERO,
            Vec3::new(40.0, 0.5, 40.0),
        ),
        Surface {
            albedo: Vec3::splat(0.3),
            ..Surface::default()
        },
    )?);

    scene.add(SceneObject::new(
        None,
        ObjectKind::Sphere,
        "matte",
        None,
        Placement::new(Vec3::new(-3.0, 1.0, 0.0), Vec3::ZERO, Vec3::splat(1.0)),
        Surface {
            albedo: Vec3::new(0.8, 0.2, 0.2),
            ..Surface::default()
        },
    )?);

    scene.add(SceneObject::new(
        None,
        ObjectKind::Sphere,
        "mirror",
        None,
        Placement::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec3::splat(1.0)),
        Surface {
            albedo: Vec3::new(0.9, 0.9, 0.9),
            smoothness: 1.0,
            ..Surface::default()
        },
    )?);

    scene.add(SceneObject::new(
        None,
        ObjectKind::Sphere,
        "lamp",
        None,
        Placement::new(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO, Vec3::splat(1.5)),
        Surface {
            albedo: Vec3::ONE,
            emission: Vec3::new(1.0, 0.9, 0.7),
            emission_strength: 8.0,
            ..Surface::default()
        },
    )?);

    scene.add(SceneObject::from_triangles(
        None,
        "pyramid",
        Placement::default(),
        create_pyramid_triangles(),
    ));

    Ok(scene)
}

/// A square pyramid: 4 triangular sides + 2 triangles for the base.
fn create_pyramid_triangles() -> Vec<TriangleData> {
    let surface = Surface {
        albedo: Vec3::new(0.9, 0.7, 0.2),
        ..Surface::default()
    };

    let apex = Vec3::new(0.0, 2.0, -4.0);
    let base_y = 0.0;
    let p0 = Vec3::new(-1.0, base_y, -5.0);
    let p1 = Vec3::new(1.0, base_y, -5.0);
    let p2 = Vec3::new(1.0, base_y, -3.0);
    let p3 = Vec3::new(-1.0, base_y, -3.0);

    vec![
        TriangleData::new(p0, p1, apex, &surface),
        TriangleData::new(p1, p2, apex, &surface),
        TriangleData::new(p2, p3, apex, &surface),
        TriangleData::new(p3, p0, apex, &surface),
        TriangleData::new(p0, p2, p1, &surface),
        TriangleData::new(p0, p3, p2, &surface),
    ]
}
