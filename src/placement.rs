use glam::{Mat4, Vec3};

/// World transform of a scene object: position, Euler rotation in degrees,
/// and per-axis scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Placement {
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// True if any scale component is exactly zero. Dividing vertices by such
    /// a scale produces infinite or NaN geometry.
    pub fn has_zero_scale(&self) -> bool {
        self.scale.x == 0.0 || self.scale.y == 0.0 || self.scale.z == 0.0
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Appearance parameters shared by every GPU record an object produces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    pub albedo: Vec3,
    pub smoothness: f32,
    pub emission: Vec3,
    pub emission_strength: f32,
    pub alpha: f32,
    pub ior: f32,
    pub absorb: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            albedo: Vec3::splat(0.8),
            smoothness: 0.0,
            emission: Vec3::ZERO,
            emission_strength: 0.0,
            alpha: 1.0,
            ior: 1.0,
            absorb: 0.0,
        }
    }
}

/// Builds the rotation that applies X, then Y, then Z, each angle in degrees.
/// With column vectors the first rotation sits rightmost in the product.
pub fn rotation_degrees(angles: Vec3) -> Mat4 {
    Mat4::from_rotation_z(angles.z.to_radians())
        * Mat4::from_rotation_y(angles.y.to_radians())
        * Mat4::from_rotation_x(angles.x.to_radians())
}
