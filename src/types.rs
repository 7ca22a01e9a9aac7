use glam::{Vec3, Vec4};

use crate::placement::Surface;

/// Box primitive data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxData {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub size: [f32; 3],
    pub _pad1: f32,
    pub albedo: [f32; 3],
    pub smoothness: f32,
    pub emission: [f32; 3],
    pub emission_strength: f32,
    pub alpha: f32,
    pub ior: f32,
    pub absorb: f32,
    pub _pad2: f32,
}

impl BoxData {
    pub fn new(position: Vec3, size: Vec3, surface: &Surface) -> Self {
        Self {
            position: position.to_array(),
            _pad0: 0.0,
            size: size.to_array(),
            _pad1: 0.0,
            albedo: surface.albedo.to_array(),
            smoothness: surface.smoothness,
            emission: surface.emission.to_array(),
            emission_strength: surface.emission_strength,
            alpha: surface.alpha,
            ior: surface.ior,
            absorb: surface.absorb,
            _pad2: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Sphere primitive data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereData {
    pub position: [f32; 3],
    pub radius: f32,
    pub albedo: [f32; 3],
    pub smoothness: f32,
    pub emission: [f32; 3],
    pub emission_strength: f32,
    pub alpha: f32,
    pub ior: f32,
    pub absorb: f32,
    pub _pad0: f32,
}

impl SphereData {
    pub fn new(position: Vec3, radius: f32, surface: &Surface) -> Self {
        Self {
            position: position.to_array(),
            radius,
            albedo: surface.albedo.to_array(),
            smoothness: surface.smoothness,
            emission: surface.emission.to_array(),
            emission_strength: surface.emission_strength,
            alpha: surface.alpha,
            ior: surface.ior,
            absorb: surface.absorb,
            _pad0: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Triangle data for GPU. Vertices are homogeneous world-space points with
/// w = 1; appearance is shared per triangle, not per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TriangleData {
    pub v0: [f32; 4],
    pub v1: [f32; 4],
    pub v2: [f32; 4],
    pub albedo: [f32; 3],
    pub smoothness: f32,
    pub emission: [f32; 3],
    pub emission_strength: f32,
    pub alpha: f32,
    pub ior: f32,
    pub absorb: f32,
    pub _pad0: f32,
}

impl TriangleData {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, surface: &Surface) -> Self {
        Self {
            v0: v0.extend(1.0).to_array(),
            v1: v1.extend(1.0).to_array(),
            v2: v2.extend(1.0).to_array(),
            albedo: surface.albedo.to_array(),
            smoothness: surface.smoothness,
            emission: surface.emission.to_array(),
            emission_strength: surface.emission_strength,
            alpha: surface.alpha,
            ior: surface.ior,
            absorb: surface.absorb,
            _pad0: 0.0,
        }
    }

    /// Returns a copy with `f` applied to each of the three vertices.
    pub fn map_vertices(&self, f: impl Fn(Vec4) -> Vec4) -> Self {
        let mut out = *self;
        out.v0 = f(Vec4::from_array(self.v0)).to_array();
        out.v1 = f(Vec4::from_array(self.v1)).to_array();
        out.v2 = f(Vec4::from_array(self.v2)).to_array();
        out
    }

    pub fn vertices(&self) -> [Vec4; 3] {
        [
            Vec4::from_array(self.v0),
            Vec4::from_array(self.v1),
            Vec4::from_array(self.v2),
        ]
    }
}

/// One GPU-ready record owned by a scene object. The variant set is closed;
/// the only capability is appending to a send list.
#[derive(Copy, Clone, Debug)]
pub enum GpuRecord {
    Box(BoxData),
    Sphere(SphereData),
    Triangle(TriangleData),
}

impl GpuRecord {
    /// Appends the record to the matching lane of the send list.
    pub fn append_to(&self, send: &mut SendList) {
        match self {
            GpuRecord::Box(data) => send.boxes.push(*data),
            GpuRecord::Sphere(data) => send.spheres.push(*data),
            GpuRecord::Triangle(data) => send.triangles.push(*data),
        }
    }
}

/// Accumulation buffer consumed by the tracing backend. One lane per record
/// variant; each lane uploads directly via `bytemuck::cast_slice`.
#[derive(Default)]
pub struct SendList {
    pub boxes: Vec<BoxData>,
    pub spheres: Vec<SphereData>,
    pub triangles: Vec<TriangleData>,
}

impl SendList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.boxes.len() + self.spheres.len() + self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
        self.spheres.clear();
        self.triangles.clear();
    }
}
