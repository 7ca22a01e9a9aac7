use std::path::Path;

use glam::{Mat4, Vec3};
use log::info;

use super::ImportError;
use crate::placement::{rotation_degrees, Placement, Surface};
use crate::types::TriangleData;

/// Loads a glTF/glb file and returns world-space triangles. Node transforms
/// from the file apply first, then the object's placement on top (rotate,
/// scale, translate), the same baking order the OBJ loader uses.
pub fn load_gltf(
    path: &Path,
    placement: &Placement,
    surface: &Surface,
) -> Result<Vec<TriangleData>, ImportError> {
    let (document, buffers, _images) = gltf::import(path)?;

    let rotation = rotation_degrees(placement.rotation);
    let mut triangles = Vec::new();

    for scene in document.scenes() {
        for node in scene.nodes() {
            collect_node(
                &node,
                &buffers,
                &Mat4::IDENTITY,
                &rotation,
                placement,
                surface,
                &mut triangles,
            )?;
        }
    }

    info!("imported {} triangle(s) from {:?}", triangles.len(), path);
    Ok(triangles)
}

/// Recursively walks glTF nodes, accumulating their local transforms.
fn collect_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    rotation: &Mat4,
    placement: &Placement,
    surface: &Surface,
    triangles: &mut Vec<TriangleData>,
) -> Result<(), ImportError> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        collect_mesh(
            &mesh,
            buffers,
            &global_transform,
            rotation,
            placement,
            surface,
            triangles,
        )?;
    }

    for child in node.children() {
        collect_node(
            &child,
            buffers,
            &global_transform,
            rotation,
            placement,
            surface,
            triangles,
        )?;
    }

    Ok(())
}

/// Extracts the triangles of one mesh, baking node transform and placement.
fn collect_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    rotation: &Mat4,
    placement: &Placement,
    surface: &Surface,
    triangles: &mut Vec<TriangleData>,
) -> Result<(), ImportError> {
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .ok_or_else(|| ImportError::Malformed("mesh primitive has no positions".into()))?;

        let vertices: Vec<Vec3> = positions
            .map(|pos| {
                let local = transform.transform_point3(Vec3::from_array(pos));
                rotation.transform_point3(local) * placement.scale + placement.position
            })
            .collect();

        if let Some(indices) = reader.read_indices() {
            let indices: Vec<u32> = indices.into_u32().collect();

            for corner in indices.chunks(3) {
                if corner.len() == 3 {
                    triangles.push(TriangleData::new(
                        vertices[corner[0] as usize],
                        vertices[corner[1] as usize],
                        vertices[corner[2] as usize],
                        surface,
                    ));
                }
            }
        } else {
            // No indices - treat as triangle list
            for i in (0..vertices.len()).step_by(3) {
                if i + 2 < vertices.len() {
                    triangles.push(TriangleData::new(
                        vertices[i],
                        vertices[i + 1],
                        vertices[i + 2],
                        surface,
                    ));
                }
            }
        }
    }

    Ok(())
}
