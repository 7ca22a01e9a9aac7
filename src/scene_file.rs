//! Declarative JSON scene descriptions for the demo binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;

use crate::object::{ObjectKind, SceneObject};
use crate::placement::{Placement, Surface};
use crate::scene::Scene;

#[derive(Debug, Deserialize)]
pub struct SceneFile {
    pub objects: Vec<ObjectEntry>,
}

/// One object of a scene file, mirroring the construction parameter set.
/// Appearance fields default to a plain grey diffuse surface.
#[derive(Debug, Deserialize)]
pub struct ObjectEntry {
    pub kind: EntryKind,
    pub name: String,
    /// Mesh source file, relative to the process working directory.
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Index of the parent entry, which must appear earlier in the list.
    #[serde(default)]
    pub parent: Option<usize>,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default = "grey")]
    pub albedo: [f32; 3],
    #[serde(default)]
    pub smoothness: f32,
    #[serde(default)]
    pub emission: [f32; 3],
    #[serde(default)]
    pub emission_strength: f32,
    #[serde(default = "one")]
    pub alpha: f32,
    #[serde(default = "one")]
    pub ior: f32,
    #[serde(default)]
    pub absorb: f32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Box,
    Sphere,
    Mesh,
}

impl From<EntryKind> for ObjectKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Box => ObjectKind::Box,
            EntryKind::Sphere => ObjectKind::Sphere,
            EntryKind::Mesh => ObjectKind::Mesh,
        }
    }
}

fn one() -> f32 {
    1.0
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn grey() -> [f32; 3] {
    [0.8, 0.8, 0.8]
}

/// Reads a scene description and constructs every object in order.
pub fn load_scene_file(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {:?}", path))?;
    let file: SceneFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scene file {:?}", path))?;
    build_scene(&file)
}

/// Constructs a scene from a parsed description. Parent indices resolve to
/// the ids of already-constructed entries.
pub fn build_scene(file: &SceneFile) -> Result<Scene> {
    let mut scene = Scene::new();
    let mut ids = Vec::with_capacity(file.objects.len());

    for (index, entry) in file.objects.iter().enumerate() {
        let parent = match entry.parent {
            Some(parent_index) => Some(*ids.get(parent_index).with_context(|| {
                format!(
                    "object {} ({:?}) refers to parent {} which is not an earlier entry",
                    index, entry.name, parent_index
                )
            })?),
            None => None,
        };

        let object = SceneObject::new(
            parent,
            entry.kind.into(),
            entry.name.clone(),
            entry.source.as_deref(),
            Placement::new(
                Vec3::from_array(entry.position),
                Vec3::from_array(entry.rotation),
                Vec3::from_array(entry.scale),
            ),
            Surface {
                albedo: Vec3::from_array(entry.albedo),
                smoothness: entry.smoothness,
                emission: Vec3::from_array(entry.emission),
                emission_strength: entry.emission_strength,
                alpha: entry.alpha,
                ior: entry.ior,
                absorb: entry.absorb,
            },
        )?;

        ids.push(scene.add(object));
    }

    Ok(scene)
}
