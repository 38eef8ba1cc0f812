use glam::Vec3;

use crate::api::types::RibbonId;
use crate::components::style::RibbonStyle;

/// Fat ribbon component — a polyline plus styling, owned by the scene.
///
/// The polyline is mutable between frames (trails, cables and beams all
/// move) and read-only during a generation pass. Fewer than two points
/// renders nothing.
#[derive(Debug, Clone)]
pub struct Ribbon {
    /// Unique identifier.
    pub id: RibbonId,
    /// String tag for finding ribbons by name.
    pub tag: String,
    /// Whether this ribbon is rendered (hidden ribbons are skipped).
    pub visible: bool,
    /// Ordered polyline points.
    pub points: Vec<Vec3>,
    /// Generation parameters.
    pub style: RibbonStyle,
}

impl Ribbon {
    /// Create a new ribbon with the given ID.
    ///
    /// Defaults to a short vertical two-point line so a freshly spawned
    /// ribbon is visible before the host supplies real points.
    pub fn new(id: RibbonId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            points: vec![Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)],
            style: RibbonStyle::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_points(mut self, points: Vec<Vec3>) -> Self {
        self.points = points;
        self
    }

    pub fn with_style(mut self, style: RibbonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ribbon_has_a_renderable_default_polyline() {
        let ribbon = Ribbon::new(RibbonId(1));
        assert!(ribbon.visible);
        assert_eq!(ribbon.points.len(), 2);
    }

    #[test]
    fn builders_set_fields() {
        let ribbon = Ribbon::new(RibbonId(7))
            .with_tag("beam")
            .with_points(vec![Vec3::ZERO, Vec3::X, Vec3::Y])
            .with_style(RibbonStyle::default().with_caps(false))
            .with_visible(false);
        assert_eq!(ribbon.tag, "beam");
        assert_eq!(ribbon.points.len(), 3);
        assert!(!ribbon.style.draw_caps);
        assert!(!ribbon.visible);
    }
}
