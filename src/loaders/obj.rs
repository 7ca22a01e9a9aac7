use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::{Mat4, Vec3};
use log::info;

use super::ImportError;
use crate::placement::{rotation_degrees, Placement, Surface};
use crate::types::TriangleData;

/// Loads a Wavefront OBJ file and returns world-space triangles carrying the
/// object's surface.
pub fn load_obj(
    path: &Path,
    placement: &Placement,
    surface: &Surface,
) -> Result<Vec<TriangleData>, ImportError> {
    let file = File::open(path)?;
    let triangles = parse_obj(BufReader::new(file), placement, surface)?;

    info!("imported {} triangle(s) from {:?}", triangles.len(), path);
    Ok(triangles)
}

/// Parses OBJ text from any reader. Split from file handling so tests can
/// feed in-memory buffers.
///
/// Only `v` and `f` directives matter for flat triangle records; normals,
/// texture coordinates and grouping directives are skipped. Faces with more
/// than three corners are fan-triangulated.
pub(crate) fn parse_obj(
    reader: impl BufRead,
    placement: &Placement,
    surface: &Surface,
) -> Result<Vec<TriangleData>, ImportError> {
    let rotation = rotation_degrees(placement.rotation);
    let mut positions: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<TriangleData> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_no = index + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "v" => {
                if parts.len() < 4 {
                    return Err(malformed(line_no, "vertex needs 3 components"));
                }
                let x = parse_component(parts[1], line_no)?;
                let y = parse_component(parts[2], line_no)?;
                let z = parse_component(parts[3], line_no)?;
                positions.push(Vec3::new(x, y, z));
            }
            "f" => {
                if parts.len() < 4 {
                    return Err(malformed(line_no, "face needs at least 3 corners"));
                }
                let corners = parts[1..]
                    .iter()
                    .map(|token| resolve_index(token, positions.len(), line_no))
                    .collect::<Result<Vec<usize>, ImportError>>()?;

                for i in 1..corners.len() - 1 {
                    triangles.push(bake_triangle(
                        positions[corners[0]],
                        positions[corners[i]],
                        positions[corners[i + 1]],
                        &rotation,
                        placement,
                        surface,
                    ));
                }
            }
            _ => {}
        }
    }

    Ok(triangles)
}

/// Places a local-space triangle into world space: rotate, then scale each
/// component, then translate. Scale applies outside the rotation so that a
/// later re-placement can divide it back out exactly.
fn bake_triangle(
    a: Vec3,
    b: Vec3,
    c: Vec3,
    rotation: &Mat4,
    placement: &Placement,
    surface: &Surface,
) -> TriangleData {
    let bake = |v: Vec3| rotation.transform_point3(v) * placement.scale + placement.position;
    TriangleData::new(bake(a), bake(b), bake(c), surface)
}

fn parse_component(token: &str, line_no: usize) -> Result<f32, ImportError> {
    token
        .parse::<f32>()
        .map_err(|_| malformed(line_no, "vertex component is not a number"))
}

/// Resolves one face corner token (`7`, `7/1`, `7//3`, `-1`) to a position
/// index. OBJ indices are 1-based; negative values count back from the end.
fn resolve_index(token: &str, count: usize, line_no: usize) -> Result<usize, ImportError> {
    let first = token.split('/').next().unwrap_or(token);
    let raw: isize = first
        .parse()
        .map_err(|_| malformed(line_no, "face index is not an integer"))?;

    let resolved = if raw < 0 {
        count as isize + raw
    } else {
        raw - 1
    };

    if resolved < 0 || resolved as usize >= count {
        return Err(malformed(line_no, "face index out of range"));
    }
    Ok(resolved as usize)
}

fn malformed(line_no: usize, detail: &str) -> ImportError {
    ImportError::Malformed(format!("line {}: {}", line_no, detail))
}
