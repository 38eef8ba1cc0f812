use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Per-vertex data for ribbon meshes: position + texture coordinates.
/// Must match the TypeScript renderer protocol: 5 floats = 20 bytes
/// stride. Vertices are consumed in consecutive triples as an explicit
/// (non-indexed) triangle list.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RibbonVertex {
    /// X position in local space.
    pub x: f32,
    /// Y position in local space.
    pub y: f32,
    /// Z position in local space.
    pub z: f32,
    /// U texture coordinate.
    pub u: f32,
    /// V texture coordinate.
    pub v: f32,
}

impl RibbonVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 5;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 20

    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            u: uv.x,
            v: uv.y,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::new(self.u, self.v)
    }
}
