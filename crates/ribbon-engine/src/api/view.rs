use glam::Vec3;

use crate::core::transform::LocalSpace;

/// What the engine needs from its host every frame.
///
/// The host owns the scene graph and the active camera; the engine only
/// ever sees a resolved camera position and a world→local mapping.
pub trait HostView {
    /// The active camera's origin, already in the mesh's local space.
    /// Returns `None` when no camera is resolvable; the frame's rebuild
    /// is skipped in that case.
    fn camera_local_origin(&self) -> Option<Vec3>;

    /// Transform a world-space point into the mesh's local space.
    fn to_local(&self, point: Vec3) -> Vec3;
}

/// Host view backed by an explicit camera position and node transform.
///
/// Hosts without a scene graph of their own (tests, the web bridge)
/// set a world-space camera and the mesh node's transform directly.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    camera_world: Option<Vec3>,
    space: LocalSpace,
}

impl SceneView {
    pub fn new(camera_world: Option<Vec3>, space: LocalSpace) -> Self {
        Self {
            camera_world,
            space,
        }
    }

    /// A view with the given world-space camera and an identity node.
    pub fn with_camera(camera_world: Vec3) -> Self {
        Self::new(Some(camera_world), LocalSpace::identity())
    }

    /// A view with no resolvable camera; every tick is skipped.
    pub fn without_camera() -> Self {
        Self::new(None, LocalSpace::identity())
    }
}

impl HostView for SceneView {
    fn camera_local_origin(&self) -> Option<Vec3> {
        self.camera_world.map(|camera| self.space.to_local(camera))
    }

    fn to_local(&self, point: Vec3) -> Vec3 {
        self.space.to_local(point)
    }
}
