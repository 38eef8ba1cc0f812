use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::RibbonId;
use crate::components::ribbon::Ribbon;
use crate::components::style::RibbonStyle;

/// Ribbon manifest describing the polylines a host wants at startup.
/// Loaded from a JSON string at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RibbonManifest {
    /// Ribbons to spawn, in order.
    pub ribbons: Vec<RibbonDescriptor>,
}

/// Describes a single ribbon: a polyline plus optional tag and style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RibbonDescriptor {
    /// Optional name for tag lookups (default: empty).
    #[serde(default)]
    pub tag: String,
    /// Polyline points as `[x, y, z]` triples.
    pub points: Vec<[f32; 3]>,
    /// Style overrides; omitted fields fall back to defaults.
    #[serde(default)]
    pub style: RibbonStyle,
}

impl RibbonManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl RibbonDescriptor {
    /// Convert into a scene-ready component with the given ID.
    pub fn into_ribbon(self, id: RibbonId) -> Ribbon {
        Ribbon::new(id)
            .with_tag(self.tag)
            .with_points(self.points.into_iter().map(Vec3::from).collect())
            .with_style(self.style)
    }
}
