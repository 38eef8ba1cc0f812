//! Camera-facing ribbon mesh generation.
//!
//! Turns a polyline into a billboarded triangle list: one quad per
//! segment whose short edges always face the camera, rounded fills at
//! interior joints, and rounded caps at the open ends. Everything is
//! regenerated from scratch each call; nothing is cached.

use glam::{Vec2, Vec3};

use super::fan::{cap_fan, corner_fan};
use crate::components::style::RibbonStyle;
use crate::renderer::vertex::RibbonVertex;

/// Generate ribbon triangles for a polyline, appending to `out`.
///
/// `points` and `camera_origin` must be in the same coordinate space
/// (the mesh's local space). Emits an explicit triangle list; with
/// fewer than two points nothing is emitted. Degenerate inputs
/// (coincident points, camera on a segment's line) produce zero-area
/// geometry, never NaN.
pub fn build_ribbon_vertices(
    points: &[Vec3],
    camera_origin: Vec3,
    style: &RibbonStyle,
    out: &mut Vec<RibbonVertex>,
) {
    if points.len() < 2 {
        return;
    }

    let cap_steps = style.cap_steps();
    let corner_steps = style.corner_steps();

    // Thickness progresses by vertex index, not by arc length.
    let progress_step = 1.0 / points.len() as f32;
    let mut progress = 0.0;

    for i in 0..points.len() - 1 {
        let a = points[i];
        let b = points[i + 1];

        let thickness = style.thickness_at(progress);
        let next_thickness = style.thickness_at(progress + progress_step);

        let ab = b - a;
        // Crossing view-to-midpoint with the segment direction keeps
        // the quad's short edges perpendicular to the line of sight.
        // Zero when the camera lies on the segment's line or the
        // points coincide; the quad then collapses to zero area.
        let side = (camera_origin - (a + b) / 2.0).cross(ab).normalize_or_zero();
        let ortho_start = side * thickness;
        let ortho_end = side * next_thickness;

        let a_plus = a + ortho_start;
        let a_minus = a - ortho_start;
        let b_plus = b + ortho_end;
        let b_minus = b - ortho_end;

        if i == 0 && style.draw_caps {
            cap_fan(a, b, camera_origin, thickness, cap_steps, out);
        }

        let (u_start, u_end) = if style.scale_texture {
            // floor at the leading edge, -fract at the trailing edge:
            // consecutive segments tile continuously across joints.
            let len = ab.length();
            (len.floor(), -(len - len.floor()))
        } else {
            (1.0, 0.0)
        };

        out.push(RibbonVertex::new(a_plus, Vec2::new(u_start, 0.0)));
        out.push(RibbonVertex::new(b_plus, Vec2::new(u_end, 0.0)));
        out.push(RibbonVertex::new(a_minus, Vec2::new(u_start, 1.0)));
        out.push(RibbonVertex::new(b_plus, Vec2::new(u_end, 0.0)));
        out.push(RibbonVertex::new(b_minus, Vec2::new(u_end, 1.0)));
        out.push(RibbonVertex::new(a_minus, Vec2::new(u_start, 1.0)));

        if i == points.len() - 2 {
            if style.draw_caps {
                cap_fan(b, a, camera_origin, next_thickness, cap_steps, out);
            }
        } else if style.draw_corners {
            let c = points[i + 2];
            let bc = c - b;
            let ortho_bc_start = (camera_origin - (b + c) / 2.0)
                .cross(bc)
                .normalize_or_zero()
                * next_thickness;

            // The sign picks the convex (outer) side of the turn; the
            // concave side already overlaps and needs no fill.
            let angle_dot = ab.dot(ortho_bc_start);
            if angle_dot > 0.0 {
                corner_fan(b, b_plus, b + ortho_bc_start, corner_steps, out);
            } else {
                corner_fan(b, b - ortho_bc_start, b_minus, corner_steps, out);
            }
        }

        progress += progress_step;
    }
}
