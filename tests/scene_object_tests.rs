use glam::Vec3;
use gpu_scene::{GpuRecord, ObjectKind, Placement, SceneObject, Surface, TriangleData};

#[cfg(test)]
mod scene_object_tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn unit_triangle() -> TriangleData {
        TriangleData::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            &Surface::default(),
        )
    }

    fn triangle_vertices(object: &SceneObject) -> Vec<[f32; 4]> {
        object
            .records()
            .iter()
            .flat_map(|record| match record {
                GpuRecord::Triangle(tri) => vec![tri.v0, tri.v1, tri.v2],
                _ => panic!("mesh object holds a non-triangle record"),
            })
            .collect()
    }

    fn assert_vertex_eq(actual: [f32; 4], expected: [f32; 4]) {
        for i in 0..4 {
            assert!(
                (actual[i] - expected[i]).abs() < TOLERANCE,
                "component {} differs: {:?} vs {:?}",
                i,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_update_to_same_placement_is_identity() {
        let placement = Placement::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(10.0, 20.0, 30.0),
            Vec3::new(2.0, 2.0, 2.0),
        );
        let mut object =
            SceneObject::from_triangles(None, "mesh", placement, vec![unit_triangle()]);
        let before = triangle_vertices(&object);

        object.update(placement).unwrap();

        let after = triangle_vertices(&object);
        for (a, b) in before.iter().zip(&after) {
            assert_vertex_eq(*a, *b);
        }
        assert_eq!(object.placement(), placement);
    }

    #[test]
    fn test_repeated_update_to_same_target_is_idempotent() {
        let mut object = SceneObject::from_triangles(
            None,
            "mesh",
            Placement::default(),
            vec![unit_triangle()],
        );
        let target = Placement::new(
            Vec3::new(4.0, -1.0, 2.0),
            Vec3::new(0.0, 45.0, 0.0),
            Vec3::new(1.5, 1.5, 1.5),
        );

        object.update(target).unwrap();
        let once = triangle_vertices(&object);

        object.update(target).unwrap();
        let twice = triangle_vertices(&object);

        for (a, b) in once.iter().zip(&twice) {
            assert_vertex_eq(*a, *b);
        }
    }

    #[test]
    fn test_update_leaves_box_untouched() {
        let placement = Placement::new(Vec3::ZERO, Vec3::ZERO, Vec3::splat(2.0));
        let mut object = SceneObject::new(
            None,
            ObjectKind::Box,
            "crate",
            None,
            placement,
            Surface::default(),
        )
        .unwrap();

        let before = match object.records()[0] {
            GpuRecord::Box(data) => data,
            _ => panic!("expected a box record"),
        };

        object
            .update(Placement::new(
                Vec3::new(9.0, 9.0, 9.0),
                Vec3::new(0.0, 90.0, 0.0),
                Vec3::ONE,
            ))
            .unwrap();

        assert_eq!(object.placement(), placement);
        match object.records()[0] {
            GpuRecord::Box(data) => {
                assert_eq!(data.position, before.position);
                assert_eq!(data.size, before.size);
            }
            _ => panic!("expected a box record"),
        }
    }

    #[test]
    fn test_update_leaves_sphere_untouched() {
        let placement = Placement::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO, Vec3::splat(3.0));
        let mut object = SceneObject::new(
            None,
            ObjectKind::Sphere,
            "ball",
            None,
            placement,
            Surface::default(),
        )
        .unwrap();

        object
            .update(Placement::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE))
            .unwrap();

        assert_eq!(object.placement(), placement);
        match object.records()[0] {
            GpuRecord::Sphere(data) => {
                assert_eq!(data.position, [1.0, 1.0, 1.0]);
                assert_eq!(data.radius, 3.0);
            }
            _ => panic!("expected a sphere record"),
        }
    }

    #[test]
    fn test_record_sequences_are_homogeneous() {
        let box_object = SceneObject::new(
            None,
            ObjectKind::Box,
            "crate",
            None,
            Placement::default(),
            Surface::default(),
        )
        .unwrap();
        assert_eq!(box_object.records().len(), 1);
        assert!(matches!(box_object.records()[0], GpuRecord::Box(_)));

        let sphere_object = SceneObject::new(
            None,
            ObjectKind::Sphere,
            "ball",
            None,
            Placement::default(),
            Surface::default(),
        )
        .unwrap();
        assert_eq!(sphere_object.records().len(), 1);
        assert!(matches!(sphere_object.records()[0], GpuRecord::Sphere(_)));

        let mesh_object = SceneObject::from_triangles(
            None,
            "mesh",
            Placement::default(),
            vec![unit_triangle(), unit_triangle()],
        );
        assert!(mesh_object
            .records()
            .iter()
            .all(|record| matches!(record, GpuRecord::Triangle(_))));
    }

    #[test]
    fn test_box_construction_copies_fields_verbatim() {
        let object = SceneObject::new(
            None,
            ObjectKind::Box,
            "crate",
            None,
            Placement::new(Vec3::ZERO, Vec3::ZERO, Vec3::splat(2.0)),
            Surface {
                albedo: Vec3::new(1.0, 0.0, 0.0),
                smoothness: 0.5,
                emission: Vec3::ZERO,
                emission_strength: 0.0,
                alpha: 1.0,
                ior: 1.0,
                absorb: 0.0,
            },
        )
        .unwrap();

        match object.records()[0] {
            GpuRecord::Box(data) => {
                assert_eq!(data.position, [0.0, 0.0, 0.0]);
                assert_eq!(data.size, [2.0, 2.0, 2.0]);
                assert_eq!(data.albedo, [1.0, 0.0, 0.0]);
                assert_eq!(data.smoothness, 0.5);
                assert_eq!(data.emission, [0.0, 0.0, 0.0]);
                assert_eq!(data.emission_strength, 0.0);
                assert_eq!(data.alpha, 1.0);
                assert_eq!(data.ior, 1.0);
                assert_eq!(data.absorb, 0.0);
            }
            _ => panic!("expected a box record"),
        }
    }

    #[test]
    fn test_sphere_radius_comes_from_scale_x_only() {
        let object = SceneObject::new(
            None,
            ObjectKind::Sphere,
            "ball",
            None,
            Placement::new(Vec3::ZERO, Vec3::ZERO, Vec3::new(3.0, 7.0, 9.0)),
            Surface::default(),
        )
        .unwrap();

        match object.records()[0] {
            GpuRecord::Sphere(data) => assert_eq!(data.radius, 3.0),
            _ => panic!("expected a sphere record"),
        }
    }

    #[test]
    fn test_translate_only_update_offsets_every_vertex() {
        let mut object = SceneObject::from_triangles(
            None,
            "mesh",
            Placement::default(),
            vec![unit_triangle()],
        );

        object
            .update(Placement::new(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, Vec3::ONE))
            .unwrap();

        let vertices = triangle_vertices(&object);
        assert_vertex_eq(vertices[0], [5.0, 0.0, 0.0, 1.0]);
        assert_vertex_eq(vertices[1], [6.0, 0.0, 0.0, 1.0]);
        assert_vertex_eq(vertices[2], [5.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rotation_about_z_turns_x_into_y() {
        let mut object = SceneObject::from_triangles(
            None,
            "mesh",
            Placement::default(),
            vec![unit_triangle()],
        );

        object
            .update(Placement::new(
                Vec3::ZERO,
                Vec3::new(0.0, 0.0, 90.0),
                Vec3::ONE,
            ))
            .unwrap();

        let vertices = triangle_vertices(&object);
        assert_vertex_eq(vertices[0], [0.0, 0.0, 0.0, 1.0]);
        assert_vertex_eq(vertices[1], [0.0, 1.0, 0.0, 1.0]);
        assert_vertex_eq(vertices[2], [-1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_update_rescales_relative_to_position() {
        let mut object = SceneObject::from_triangles(
            None,
            "mesh",
            Placement::default(),
            vec![unit_triangle()],
        );

        object
            .update(Placement::new(Vec3::ZERO, Vec3::ZERO, Vec3::splat(2.0)))
            .unwrap();

        let vertices = triangle_vertices(&object);
        assert_vertex_eq(vertices[1], [2.0, 0.0, 0.0, 1.0]);
        assert_vertex_eq(vertices[2], [0.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_vertices_stay_homogeneous_through_updates() {
        let mut object = SceneObject::from_triangles(
            None,
            "mesh",
            Placement::default(),
            vec![unit_triangle()],
        );

        object
            .update(Placement::new(
                Vec3::new(2.0, 3.0, 4.0),
                Vec3::new(15.0, 30.0, 45.0),
                Vec3::new(0.5, 2.0, 1.0),
            ))
            .unwrap();

        for vertex in triangle_vertices(&object) {
            assert!((vertex[3] - 1.0).abs() < TOLERANCE);
        }
    }
}
