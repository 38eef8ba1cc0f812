pub mod runner;

pub use runner::EngineRunner;

use std::cell::RefCell;

use glam::Vec3;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<EngineRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut EngineRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Engine not initialized. Call engine_init() first.");
        f(runner)
    })
}

/// Initialize logging and the engine runner. Call once before anything
/// else.
#[wasm_bindgen]
pub fn engine_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(EngineRunner::new());
    });

    log::info!("ribbon-engine: initialized");
}

/// Rebuild the ribbon vertex buffer for this frame.
/// A no-op while no camera is set; the previous buffer persists.
#[wasm_bindgen]
pub fn engine_tick() {
    with_runner(|r| r.tick());
}

/// Set the active camera's world-space position.
#[wasm_bindgen]
pub fn engine_set_camera(x: f32, y: f32, z: f32) {
    with_runner(|r| r.set_camera(Vec3::new(x, y, z)));
}

/// Mark the camera unavailable (e.g. during a viewport teardown).
#[wasm_bindgen]
pub fn engine_clear_camera() {
    with_runner(|r| r.clear_camera());
}

/// Set the mesh node's world transform from 16 column-major floats.
#[wasm_bindgen]
pub fn engine_set_node_transform(matrix: &[f32]) {
    if matrix.len() != 16 {
        log::warn!("set_node_transform: expected 16 floats, got {}", matrix.len());
        return;
    }
    let mut cols = [0.0f32; 16];
    cols.copy_from_slice(matrix);
    with_runner(|r| r.set_node_transform(&cols));
}

/// Spawn an empty tagged ribbon. Returns its ID.
#[wasm_bindgen]
pub fn engine_spawn(tag: &str) -> u32 {
    with_runner(|r| r.spawn(tag))
}

/// Remove a ribbon by ID.
#[wasm_bindgen]
pub fn engine_despawn(id: u32) {
    with_runner(|r| r.despawn(id));
}

/// Replace a ribbon's polyline from a flat `[x, y, z, ...]` array.
#[wasm_bindgen]
pub fn engine_set_points(id: u32, coords: &[f32]) {
    with_runner(|r| r.set_points(id, coords));
}

/// Replace a ribbon's style from a JSON object string.
#[wasm_bindgen]
pub fn engine_set_style(id: u32, json: &str) {
    with_runner(|r| r.set_style(id, json));
}

/// Load a JSON ribbon manifest. Returns how many ribbons spawned.
#[wasm_bindgen]
pub fn engine_load_manifest(json: &str) -> u32 {
    with_runner(|r| r.load_manifest(json))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vertices_ptr())
}

#[wasm_bindgen]
pub fn get_vertex_count() -> u32 {
    with_runner(|r| r.vertex_count())
}

#[wasm_bindgen]
pub fn get_frame_counter() -> u32 {
    with_runner(|r| r.frame())
}

#[wasm_bindgen]
pub fn get_camera_active() -> bool {
    with_runner(|r| r.camera_active())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_vertices() -> u32 {
    with_runner(|r| r.max_vertices())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

/// Zero-copy `Float32Array` view over the current vertex buffer.
///
/// The view aliases WASM memory and is invalidated by any call that
/// grows it; read it out (or copy it) before the next engine call.
#[wasm_bindgen]
pub fn get_vertices_view() -> js_sys::Float32Array {
    with_runner(|r| unsafe { js_sys::Float32Array::view(r.vertices_f32()) })
}
