//! Triangle-fan tessellation for rounded caps and corner joints.
//!
//! Both fans share the same emission pattern: a rim of `steps + 1`
//! points around a center, one triangle per consecutive rim pair, with
//! a normalized radial UV mapping that is independent of the ribbon's
//! texture-scaling mode.

use glam::{Quat, Vec2, Vec3};
use std::f32::consts::PI;

use crate::renderer::vertex::RibbonVertex;

/// Linear interpolation between `a` and `b`.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rotate `v` around a unit-length `axis` by `angle` radians.
#[inline]
fn rotated(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis, angle) * v
}

/// Emit one triangle per consecutive rim pair, fanning from `center`.
fn emit_fan(rim: &[Vec3], center: Vec3, out: &mut Vec<RibbonVertex>) {
    let steps = rim.len() - 1;
    for i in 1..=steps {
        let v = (i - 1) as f32 / steps as f32;
        out.push(RibbonVertex::new(rim[i - 1], Vec2::new(0.0, v)));
        out.push(RibbonVertex::new(rim[i], Vec2::new(0.0, v)));
        out.push(RibbonVertex::new(center, Vec2::new(0.5, 0.5)));
    }
}

/// Build a rounded half-disc cap at `center`, the first or last point
/// of the polyline.
///
/// `pivot` is the adjacent polyline point; the half-disc sweeps the
/// side facing away from it, rotating around the camera view axis so
/// the cap always faces the viewer. `smoothing <= 1` collapses to a
/// single flat triangle. Always emits `max(smoothing, 1)` triangles.
pub fn cap_fan(
    center: Vec3,
    pivot: Vec3,
    camera_origin: Vec3,
    thickness: f32,
    smoothing: u32,
    out: &mut Vec<RibbonVertex>,
) {
    let steps = smoothing.max(1) as usize;
    let orthogonal = (camera_origin - center)
        .cross(center - pivot)
        .normalize_or_zero()
        * thickness;
    let axis = (center - camera_origin).normalize_or_zero();

    let mut rim = Vec::with_capacity(steps + 1);
    rim.push(center + orthogonal);
    if axis.length_squared() > 0.0 {
        for i in 1..steps {
            let angle = lerp(0.0, PI, i as f32 / steps as f32);
            rim.push(center + rotated(orthogonal, axis, angle));
        }
    } else {
        // Camera sits on the cap center: no view axis to sweep around.
        for _ in 1..steps {
            rim.push(center + orthogonal);
        }
    }
    rim.push(center - orthogonal);

    emit_fan(&rim, center, out);
}

/// Fill the outer wedge between two segment edges at joint `center`.
///
/// `start` and `end` are the absolute edge endpoints to bridge; the fan
/// rotates `start - center` toward `end - center` around their common
/// normal. Colinear or degenerate offsets, and `smoothing <= 1`, all
/// collapse to the single direct triangle. Always emits
/// `max(smoothing, 1)` triangles.
pub fn corner_fan(
    center: Vec3,
    start: Vec3,
    end: Vec3,
    smoothing: u32,
    out: &mut Vec<RibbonVertex>,
) {
    let steps = smoothing.max(1) as usize;
    let offset = start - center;
    let target = end - center;
    let axis = offset.cross(target).normalize_or_zero();

    let mut rim = Vec::with_capacity(steps + 1);
    rim.push(start);
    if axis.length_squared() > 0.0 {
        let angle = offset.angle_between(target);
        for i in 1..steps {
            rim.push(center + rotated(offset, axis, lerp(0.0, angle, i as f32 / steps as f32)));
        }
    } else {
        for _ in 1..steps {
            rim.push(start);
        }
    }
    rim.push(end);

    emit_fan(&rim, center, out);
}
