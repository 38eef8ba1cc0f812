use glam::{Mat4, Vec3};

/// World ↔ local conversion for the node that owns the ribbon mesh.
///
/// The host scene graph positions the mesh node somewhere in the world;
/// ribbon points flagged as world-space, and the camera origin, must be
/// mapped into the node's local frame before generation. The inverse is
/// computed once at construction and reused every frame.
#[derive(Debug, Clone, Copy)]
pub struct LocalSpace {
    world_from_local: Mat4,
    local_from_world: Mat4,
}

impl LocalSpace {
    /// A node at the world origin with no rotation or scale.
    pub fn identity() -> Self {
        Self {
            world_from_local: Mat4::IDENTITY,
            local_from_world: Mat4::IDENTITY,
        }
    }

    /// Build from the node's world transform (local → world).
    pub fn from_world_matrix(world_from_local: Mat4) -> Self {
        Self {
            world_from_local,
            local_from_world: world_from_local.inverse(),
        }
    }

    /// Transform a world-space point into the node's local space.
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.local_from_world.transform_point3(point)
    }

    /// Transform a local-space point back into world space.
    pub fn to_world(&self, point: Vec3) -> Vec3 {
        self.world_from_local.transform_point3(point)
    }

    /// The node's world transform (local → world).
    pub fn world_matrix(&self) -> Mat4 {
        self.world_from_local
    }
}

impl Default for LocalSpace {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_leaves_points_unchanged() {
        let space = LocalSpace::identity();
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(space.to_local(p), p);
        assert_eq!(space.to_world(p), p);
    }

    #[test]
    fn translated_node_offsets_points() {
        let space = LocalSpace::from_world_matrix(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
        let local = space.to_local(Vec3::new(12.0, 5.0, 0.0));
        assert!((local - Vec3::new(2.0, 5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn to_world_inverts_to_local() {
        let world = Mat4::from_rotation_y(FRAC_PI_2) * Mat4::from_translation(Vec3::new(3.0, 1.0, -2.0));
        let space = LocalSpace::from_world_matrix(world);
        let p = Vec3::new(0.5, -1.5, 4.0);
        let roundtrip = space.to_world(space.to_local(p));
        assert!((roundtrip - p).length() < 1e-4);
    }
}
