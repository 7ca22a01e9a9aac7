pub mod cli;
pub mod error;
pub mod loaders;
pub mod object;
pub mod placement;
pub mod scene;
pub mod scene_file;
pub mod scenes;
pub mod types;

pub use error::SceneError;
pub use object::{ObjectId, ObjectKind, SceneObject};
pub use placement::{Placement, Surface};
pub use scene::Scene;
pub use scenes::create_demo_scene;
pub use types::{BoxData, GpuRecord, SendList, SphereData, TriangleData};
