use std::path::Path;

use glam::Vec3;
use log::debug;

use crate::error::SceneError;
use crate::loaders;
use crate::placement::{rotation_degrees, Placement, Surface};
use crate::types::{BoxData, GpuRecord, SendList, SphereData, TriangleData};

/// Geometric flavor of a scene object. Decides which record variant the
/// object feeds to the GPU.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Box,
    Sphere,
    Mesh,
}

/// Non-owning handle to an object stored in a [`crate::scene::Scene`].
/// Parent links hold one of these, never the object itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// A scene object together with the flat GPU records that represent it.
///
/// The record sequence is homogeneous: a box object holds one box record, a
/// sphere object one sphere record, a mesh object zero or more triangle
/// records. Placement and records only change together, so both are private.
pub struct SceneObject {
    pub kind: ObjectKind,
    pub parent: Option<ObjectId>,
    pub id: Option<ObjectId>,
    pub name: String,
    placement: Placement,
    records: Vec<GpuRecord>,
}

impl SceneObject {
    /// Builds the object and its GPU records in one shot.
    ///
    /// Boxes and spheres bake their placement into a single implicit record;
    /// meshes import `source` (already placed in world space) or start empty
    /// when no source is given. Import failures propagate to the caller.
    pub fn new(
        parent: Option<ObjectId>,
        kind: ObjectKind,
        name: impl Into<String>,
        source: Option<&Path>,
        placement: Placement,
        surface: Surface,
    ) -> Result<Self, SceneError> {
        let records = match kind {
            // Rotation stays on the placement; the box record is axis-aligned
            // on the GPU side.
            ObjectKind::Box => vec![GpuRecord::Box(BoxData::new(
                placement.position,
                placement.scale,
                &surface,
            ))],
            // Spheres are uniform: only the X component of scale feeds the
            // radius.
            ObjectKind::Sphere => vec![GpuRecord::Sphere(SphereData::new(
                placement.position,
                placement.scale.x,
                &surface,
            ))],
            ObjectKind::Mesh => match source {
                Some(path) => loaders::load_mesh(path, &placement, &surface)?
                    .into_iter()
                    .map(GpuRecord::Triangle)
                    .collect(),
                None => Vec::new(),
            },
        };

        let name = name.into();
        debug!(
            "constructed {:?} object {:?} with {} record(s)",
            kind,
            name,
            records.len()
        );

        Ok(Self {
            kind,
            parent,
            id: None,
            name,
            placement,
            records,
        })
    }

    /// Wraps triangles that were already baked into world space, e.g. by an
    /// importer run elsewhere.
    pub fn from_triangles(
        parent: Option<ObjectId>,
        name: impl Into<String>,
        placement: Placement,
        triangles: Vec<TriangleData>,
    ) -> Self {
        Self {
            kind: ObjectKind::Mesh,
            parent,
            id: None,
            name: name.into(),
            placement,
            records: triangles.into_iter().map(GpuRecord::Triangle).collect(),
        }
    }

    /// Rewrites the owned triangle records so the mesh appears at `new`
    /// placement, without re-reading the source geometry. Objects of any
    /// other kind are left untouched.
    ///
    /// The rewrite undoes the current placement (translate to origin, divide
    /// out the old scale), rotates by the Euler delta (X, then Y, then Z),
    /// applies the new scale, and only then translates every vertex to the
    /// new position in a second pass. `&mut self` keeps the whole rewrite
    /// exclusive; no reader can observe a half-updated sequence.
    pub fn update(&mut self, new: Placement) -> Result<(), SceneError> {
        if self.kind != ObjectKind::Mesh {
            return Ok(());
        }
        if self.placement.has_zero_scale() {
            return Err(SceneError::DegenerateScale {
                scale: self.placement.scale,
            });
        }

        let rotation = rotation_degrees(new.rotation - self.placement.rotation);
        let old_position = self.placement.position.extend(0.0);
        let old_scale = self.placement.scale.extend(1.0);
        let new_scale = new.scale.extend(1.0);

        for record in &mut self.records {
            if let GpuRecord::Triangle(tri) = record {
                *tri =
                    tri.map_vertices(|v| (rotation * ((v - old_position) / old_scale)) * new_scale);
            }
        }

        // Translation runs as its own pass once every vertex is re-scaled.
        let new_position = new.position.extend(0.0);
        for record in &mut self.records {
            if let GpuRecord::Triangle(tri) = record {
                *tri = tri.map_vertices(|v| v + new_position);
            }
        }

        self.placement = new;
        Ok(())
    }

    /// Appends every record the object owns to the frame's send list.
    pub fn append_to(&self, send: &mut SendList) {
        for record in &self.records {
            record.append_to(send);
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn records(&self) -> &[GpuRecord] {
        &self.records
    }

    /// Convenience for callers that move objects around: position component
    /// of the current placement.
    pub fn position(&self) -> Vec3 {
        self.placement.position
    }
}
