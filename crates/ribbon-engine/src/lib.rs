pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::engine::{EngineConfig, RibbonEngine};
pub use api::types::RibbonId;
pub use api::view::{HostView, SceneView};
pub use assets::manifest::{RibbonDescriptor, RibbonManifest};
pub use bridge::protocol::ProtocolLayout;
pub use components::ribbon::Ribbon;
pub use components::style::RibbonStyle;
pub use core::scene::RibbonScene;
pub use core::transform::LocalSpace;
pub use renderer::vertex::RibbonVertex;
pub use systems::ribbon::{build_ribbon_vertices, build_scene_buffer};
