use serde::{Deserialize, Serialize};

/// Style parameters controlling ribbon geometry generation.
///
/// Thickness is the centerline-to-edge offset in world units and varies
/// linearly from start to end by vertex index along the polyline.
/// Smoothing values count fan triangles; 0 and 1 both collapse to a
/// single flat triangle, negative values are clamped to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonStyle {
    /// Edge offset from the centerline at the first point.
    pub start_thickness: f32,
    /// Edge offset from the centerline at the last point.
    pub end_thickness: f32,
    /// Fan triangles approximating a round joint at interior corners.
    pub corner_smooth: i32,
    /// Fan triangles approximating a round cap at each open end.
    pub cap_smooth: i32,
    /// Close the ribbon ends with rounded caps.
    pub draw_caps: bool,
    /// Fill the outer wedge at interior joints.
    pub draw_corners: bool,
    /// Input points are world-space and must be transformed into the
    /// mesh's local space before use.
    pub global_coords: bool,
    /// Scale U texture coordinates by world-space segment length so the
    /// texture tiles continuously across joints, instead of a fixed
    /// 0..1 per segment.
    pub scale_texture: bool,
}

impl Default for RibbonStyle {
    fn default() -> Self {
        Self {
            start_thickness: 0.1,
            end_thickness: 0.1,
            corner_smooth: 5,
            cap_smooth: 5,
            draw_caps: true,
            draw_corners: true,
            global_coords: true,
            scale_texture: true,
        }
    }
}

impl RibbonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_thickness(mut self, start: f32, end: f32) -> Self {
        self.start_thickness = start;
        self.end_thickness = end;
        self
    }

    pub fn with_corner_smooth(mut self, corner_smooth: i32) -> Self {
        self.corner_smooth = corner_smooth;
        self
    }

    pub fn with_cap_smooth(mut self, cap_smooth: i32) -> Self {
        self.cap_smooth = cap_smooth;
        self
    }

    pub fn with_caps(mut self, draw_caps: bool) -> Self {
        self.draw_caps = draw_caps;
        self
    }

    pub fn with_corners(mut self, draw_corners: bool) -> Self {
        self.draw_corners = draw_corners;
        self
    }

    pub fn with_global_coords(mut self, global_coords: bool) -> Self {
        self.global_coords = global_coords;
        self
    }

    pub fn with_scale_texture(mut self, scale_texture: bool) -> Self {
        self.scale_texture = scale_texture;
        self
    }

    /// Parse a style from a JSON object; omitted fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Thickness at normalized progress `t` along the polyline.
    /// Progress advances by vertex index, not by arc length.
    pub fn thickness_at(&self, t: f32) -> f32 {
        self.start_thickness + (self.end_thickness - self.start_thickness) * t
    }

    /// Corner fan step count with negative values clamped away.
    pub fn corner_steps(&self) -> u32 {
        self.corner_smooth.max(0) as u32
    }

    /// Cap fan step count with negative values clamped away.
    pub fn cap_steps(&self) -> u32 {
        self.cap_smooth.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_exported_tool_defaults() {
        let style = RibbonStyle::default();
        assert_eq!(style.start_thickness, 0.1);
        assert_eq!(style.end_thickness, 0.1);
        assert_eq!(style.corner_smooth, 5);
        assert_eq!(style.cap_smooth, 5);
        assert!(style.draw_caps);
        assert!(style.draw_corners);
        assert!(style.global_coords);
        assert!(style.scale_texture);
    }

    #[test]
    fn thickness_interpolates_linearly() {
        let style = RibbonStyle::default().with_thickness(1.0, 3.0);
        assert!((style.thickness_at(0.0) - 1.0).abs() < 1e-6);
        assert!((style.thickness_at(0.5) - 2.0).abs() < 1e-6);
        assert!((style.thickness_at(1.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn negative_smoothing_clamps_to_zero() {
        let style = RibbonStyle::default()
            .with_corner_smooth(-3)
            .with_cap_smooth(-1);
        assert_eq!(style.corner_steps(), 0);
        assert_eq!(style.cap_steps(), 0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let style = RibbonStyle::from_json(r#"{ "start_thickness": 0.5, "draw_caps": false }"#).unwrap();
        assert_eq!(style.start_thickness, 0.5);
        assert!(!style.draw_caps);
        assert_eq!(style.end_thickness, 0.1);
        assert_eq!(style.cap_smooth, 5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RibbonStyle::from_json("{ nope").is_err());
    }
}
