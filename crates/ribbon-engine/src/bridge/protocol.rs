/// SharedArrayBuffer layout.
/// Must stay in sync with the TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Vertices: max_ribbon_vertices × 5 floats]
/// ```
///
/// The vertex capacity is written once into the header at init.
/// TypeScript reads it from the header to compute offsets dynamically.
use crate::api::engine::EngineConfig;
use crate::renderer::vertex::RibbonVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_VERTICES: usize = 2;
pub const HEADER_VERTEX_COUNT: usize = 3;
pub const HEADER_CAMERA_ACTIVE: usize = 4;
pub const HEADER_PROTOCOL_VERSION: usize = 5;
// Indices 6-7 are reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per ribbon vertex: x, y, z, u, v (wire format — never changes).
pub const VERTEX_FLOATS: usize = RibbonVertex::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolLayout {
    /// Maximum ribbon vertices per frame.
    pub max_vertices: usize,
    /// Size of the vertex data section in floats.
    pub vertex_data_floats: usize,
    /// Offset (in floats) where vertex data begins.
    pub vertex_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute the layout from a raw vertex capacity.
    pub fn new(max_vertices: usize) -> Self {
        let vertex_data_floats = max_vertices * VERTEX_FLOATS;
        let vertex_data_offset = HEADER_FLOATS;
        let buffer_total_floats = vertex_data_offset + vertex_data_floats;
        Self {
            max_vertices,
            vertex_data_floats,
            vertex_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute the layout from an engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_ribbon_vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_offsets_follow_the_header() {
        let layout = ProtocolLayout::new(1000);
        assert_eq!(layout.vertex_data_offset, HEADER_FLOATS);
        assert_eq!(layout.vertex_data_floats, 1000 * 5);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 5000);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn layout_matches_engine_config() {
        let config = EngineConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_vertices, config.max_ribbon_vertices);
    }

    #[test]
    fn header_indices_are_distinct() {
        let indices = [
            HEADER_LOCK,
            HEADER_FRAME_COUNTER,
            HEADER_MAX_VERTICES,
            HEADER_VERTEX_COUNT,
            HEADER_CAMERA_ACTIVE,
            HEADER_PROTOCOL_VERSION,
        ];
        for (i, a) in indices.iter().enumerate() {
            assert!(*a < HEADER_FLOATS);
            for b in &indices[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
