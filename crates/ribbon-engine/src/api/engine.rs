use glam::Vec3;

use crate::api::types::RibbonId;
use crate::api::view::HostView;
use crate::assets::manifest::RibbonManifest;
use crate::components::ribbon::Ribbon;
use crate::components::style::RibbonStyle;
use crate::core::scene::RibbonScene;
use crate::renderer::vertex::RibbonVertex;
use crate::systems::ribbon::build_scene_buffer;

/// Configuration for the engine, provided by the host.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of ribbon vertices per frame (default: 16384).
    /// Used to size the frame buffer and the bridge protocol layout.
    pub max_ribbon_vertices: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ribbon_vertices: 16384,
        }
    }
}

/// Owns the ribbon scene and the per-frame vertex buffer.
///
/// `tick` rebuilds the whole buffer from scratch; there is no partial
/// update or caching. When the host cannot resolve a camera the tick is
/// a no-op and the previous frame's buffer stays visible until the next
/// successful pass.
pub struct RibbonEngine {
    pub scene: RibbonScene,
    vertices: Vec<RibbonVertex>,
    next_id: u32,
    frame: u32,
    camera_active: bool,
}

impl RibbonEngine {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            scene: RibbonScene::new(),
            vertices: Vec::with_capacity(config.max_ribbon_vertices),
            next_id: 1,
            frame: 0,
            camera_active: false,
        }
    }

    /// Generate the next unique ribbon ID.
    pub fn next_id(&mut self) -> RibbonId {
        let id = RibbonId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn a ribbon with the given points and style. Returns its ID.
    pub fn spawn(&mut self, points: Vec<Vec3>, style: RibbonStyle) -> RibbonId {
        let id = self.next_id();
        self.scene
            .spawn(Ribbon::new(id).with_points(points).with_style(style));
        id
    }

    /// Remove a ribbon. Returns the removed component if found.
    pub fn despawn(&mut self, id: RibbonId) -> Option<Ribbon> {
        self.scene.despawn(id)
    }

    /// Load a JSON ribbon manifest, spawning every descriptor.
    /// Returns the new IDs; a malformed manifest spawns nothing.
    pub fn load_manifest(&mut self, json: &str) -> Vec<RibbonId> {
        match RibbonManifest::from_json(json) {
            Ok(manifest) => manifest
                .ribbons
                .into_iter()
                .map(|descriptor| {
                    let id = self.next_id();
                    self.scene.spawn(descriptor.into_ribbon(id));
                    id
                })
                .collect(),
            Err(err) => {
                log::warn!("ribbon manifest rejected: {err}");
                Vec::new()
            }
        }
    }

    /// Rebuild the vertex buffer for this frame.
    ///
    /// Skipped — leaving the previous buffer in place — when the host
    /// cannot resolve a camera.
    pub fn tick(&mut self, view: &impl HostView) {
        let Some(camera_origin) = view.camera_local_origin() else {
            self.camera_active = false;
            log::debug!("ribbon rebuild skipped: no camera");
            return;
        };
        self.camera_active = true;
        build_scene_buffer(&self.scene, view, camera_origin, &mut self.vertices);
        self.frame = self.frame.wrapping_add(1);
    }

    /// Drop the current frame's geometry without touching the scene.
    /// For hosts that prefer absence over stale geometry while the
    /// camera is unavailable.
    pub fn clear_buffer(&mut self) {
        self.vertices.clear();
    }

    /// The current frame's triangle-list vertices.
    pub fn vertices(&self) -> &[RibbonVertex] {
        &self.vertices
    }

    /// The current frame's vertices as a flat float slice.
    pub fn vertices_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw pointer to vertex data for SharedArrayBuffer reads.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of successfully built frames so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Whether the most recent tick resolved a camera.
    pub fn camera_active(&self) -> bool {
        self.camera_active
    }
}

impl Default for RibbonEngine {
    fn default() -> Self {
        Self::new()
    }
}
