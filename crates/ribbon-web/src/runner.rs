use glam::{Mat4, Vec3};
use ribbon_engine::{
    EngineConfig, LocalSpace, ProtocolLayout, RibbonEngine, RibbonId, RibbonStyle, SceneView,
};

/// Engine runner that wires the per-frame loop to the browser.
///
/// The JS host owns the camera and the mesh node transform and pushes
/// them through setters; each `tick` resolves them into a view and
/// rebuilds the ribbon buffer. When no camera has been set (or it was
/// cleared) the tick is skipped and the previous buffer persists.
pub struct EngineRunner {
    engine: RibbonEngine,
    camera_world: Option<Vec3>,
    space: LocalSpace,
    layout: ProtocolLayout,
}

impl EngineRunner {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        Self {
            engine: RibbonEngine::with_config(&config),
            camera_world: None,
            space: LocalSpace::identity(),
            layout,
        }
    }

    /// Set the active camera's world-space position.
    pub fn set_camera(&mut self, position: Vec3) {
        self.camera_world = Some(position);
    }

    /// Mark the camera unavailable; subsequent ticks are skipped.
    pub fn clear_camera(&mut self) {
        self.camera_world = None;
    }

    /// Set the mesh node's world transform from 16 column-major floats.
    pub fn set_node_transform(&mut self, matrix: &[f32; 16]) {
        self.space = LocalSpace::from_world_matrix(Mat4::from_cols_array(matrix));
    }

    /// Spawn an empty tagged ribbon. Returns its numeric ID.
    pub fn spawn(&mut self, tag: &str) -> u32 {
        let id = self.engine.next_id();
        self.engine.scene.spawn(
            ribbon_engine::Ribbon::new(id)
                .with_tag(tag)
                .with_points(Vec::new()),
        );
        id.0
    }

    /// Remove a ribbon by numeric ID.
    pub fn despawn(&mut self, id: u32) {
        self.engine.despawn(RibbonId(id));
    }

    /// Replace a ribbon's polyline from a flat `[x, y, z, ...]` slice.
    /// A slice whose length is not a multiple of 3 is rejected.
    pub fn set_points(&mut self, id: u32, coords: &[f32]) {
        if coords.len() % 3 != 0 {
            log::warn!("set_points({id}): length {} is not a multiple of 3", coords.len());
            return;
        }
        if let Some(ribbon) = self.engine.scene.get_mut(RibbonId(id)) {
            ribbon.points = coords
                .chunks_exact(3)
                .map(|c| Vec3::new(c[0], c[1], c[2]))
                .collect();
        }
    }

    /// Replace a ribbon's style from a JSON object; omitted fields keep
    /// their defaults. A malformed style is rejected.
    pub fn set_style(&mut self, id: u32, json: &str) {
        match RibbonStyle::from_json(json) {
            Ok(style) => {
                if let Some(ribbon) = self.engine.scene.get_mut(RibbonId(id)) {
                    ribbon.style = style;
                }
            }
            Err(err) => log::warn!("set_style({id}) rejected: {err}"),
        }
    }

    /// Load a JSON ribbon manifest. Returns how many ribbons spawned.
    pub fn load_manifest(&mut self, json: &str) -> u32 {
        self.engine.load_manifest(json).len() as u32
    }

    /// Run one frame tick: resolve the view and rebuild the buffer.
    pub fn tick(&mut self) {
        let view = SceneView::new(self.camera_world, self.space);
        self.engine.tick(&view);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.engine.vertices_ptr()
    }

    pub fn vertices_f32(&self) -> &[f32] {
        self.engine.vertices_f32()
    }

    pub fn vertex_count(&self) -> u32 {
        self.engine.vertex_count() as u32
    }

    pub fn frame(&self) -> u32 {
        self.engine.frame()
    }

    pub fn camera_active(&self) -> bool {
        self.engine.camera_active()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_vertices(&self) -> u32 {
        self.layout.max_vertices as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

impl Default for EngineRunner {
    fn default() -> Self {
        Self::new()
    }
}
