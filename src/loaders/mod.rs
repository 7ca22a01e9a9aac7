pub mod gltf;
pub mod obj;

use std::path::Path;

use thiserror::Error;

use crate::error::SceneError;
use crate::placement::{Placement, Surface};
use crate::types::TriangleData;

/// Failure inside a mesh loader. Wrapped into [`SceneError::Import`] together
/// with the offending path.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("glTF error: {0}")]
    Gltf(#[from] ::gltf::Error),
    #[error("{0}")]
    Malformed(String),
}

/// Imports a mesh file and bakes the placement into every triangle. The
/// format is picked from the file extension.
pub fn load_mesh(
    path: &Path,
    placement: &Placement,
    surface: &Surface,
) -> Result<Vec<TriangleData>, SceneError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let result = match extension.as_deref() {
        Some("obj") => obj::load_obj(path, placement, surface),
        Some("gltf") | Some("glb") => gltf::load_gltf(path, placement, surface),
        _ => {
            return Err(SceneError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    result.map_err(|source| SceneError::Import {
        path: path.to_path_buf(),
        source,
    })
}
