use std::path::PathBuf;

use glam::Vec3;
use thiserror::Error;

use crate::loaders::ImportError;

/// Errors surfaced while building or re-placing scene geometry.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A mesh source path was given but could not be read or parsed.
    #[error("failed to import mesh {path:?}: {source}")]
    Import {
        path: PathBuf,
        #[source]
        source: ImportError,
    },

    /// No loader recognizes the file extension.
    #[error("no mesh loader for {path:?}")]
    UnsupportedFormat { path: PathBuf },

    /// A re-placement was requested while the current scale has a zero
    /// component; undoing the old scaling would divide by zero.
    #[error("current scale {scale} has a zero component, mesh geometry cannot be re-placed")]
    DegenerateScale { scale: Vec3 },
}
