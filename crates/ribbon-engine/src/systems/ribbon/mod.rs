//! Ribbon mesh generation system.
//!
//! `build_scene_buffer` walks the scene once per frame and appends
//! every visible ribbon's triangles into one shared vertex stream;
//! the stream is cleared and rebuilt from scratch on every call.

mod fan;
mod geometry;

// Re-export public entry points
pub use fan::{cap_fan, corner_fan};
pub use geometry::build_ribbon_vertices;

use glam::Vec3;

use crate::api::view::HostView;
use crate::core::scene::RibbonScene;
use crate::renderer::vertex::RibbonVertex;

/// Build the frame vertex buffer for every visible ribbon in the scene.
///
/// `camera_origin` must already be resolved into the mesh's local
/// space; frames without a camera are the caller's concern and never
/// reach this function. Points of ribbons flagged `global_coords` are
/// transformed through `view`; all others are taken as already local.
pub fn build_scene_buffer(
    scene: &RibbonScene,
    view: &impl HostView,
    camera_origin: Vec3,
    out: &mut Vec<RibbonVertex>,
) {
    out.clear();

    let mut local_points: Vec<Vec3> = Vec::new();
    for ribbon in scene.iter() {
        if !ribbon.visible || ribbon.points.len() < 2 {
            continue;
        }

        if ribbon.style.global_coords {
            local_points.clear();
            local_points.extend(ribbon.points.iter().map(|&p| view.to_local(p)));
            build_ribbon_vertices(&local_points, camera_origin, &ribbon.style, out);
        } else {
            build_ribbon_vertices(&ribbon.points, camera_origin, &ribbon.style, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RibbonId;
    use crate::api::view::SceneView;
    use crate::components::ribbon::Ribbon;
    use crate::components::style::RibbonStyle;
    use crate::core::transform::LocalSpace;
    use glam::Mat4;

    fn local_style() -> RibbonStyle {
        RibbonStyle::default()
            .with_caps(false)
            .with_corners(false)
            .with_global_coords(false)
    }

    #[test]
    fn hidden_and_underfilled_ribbons_are_skipped() {
        let mut scene = RibbonScene::new();
        scene.spawn(
            Ribbon::new(RibbonId(1))
                .with_points(vec![Vec3::ZERO, Vec3::Y])
                .with_style(local_style())
                .with_visible(false),
        );
        scene.spawn(
            Ribbon::new(RibbonId(2))
                .with_points(vec![Vec3::ZERO])
                .with_style(local_style()),
        );
        scene.spawn(
            Ribbon::new(RibbonId(3))
                .with_points(vec![Vec3::ZERO, Vec3::Y])
                .with_style(local_style()),
        );

        let view = SceneView::with_camera(Vec3::new(0.0, 0.0, -10.0));
        let mut out = Vec::new();
        build_scene_buffer(&scene, &view, Vec3::new(0.0, 0.0, -10.0), &mut out);

        // Only the third ribbon contributes its single quad.
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn buffer_is_cleared_between_rebuilds() {
        let mut scene = RibbonScene::new();
        scene.spawn(
            Ribbon::new(RibbonId(1))
                .with_points(vec![Vec3::ZERO, Vec3::Y])
                .with_style(local_style()),
        );

        let view = SceneView::with_camera(Vec3::new(0.0, 0.0, -10.0));
        let mut out = Vec::new();
        build_scene_buffer(&scene, &view, Vec3::new(0.0, 0.0, -10.0), &mut out);
        build_scene_buffer(&scene, &view, Vec3::new(0.0, 0.0, -10.0), &mut out);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn global_points_are_transformed_into_local_space() {
        // Node sits at x = +10; a world-space ribbon at x = 10 lands on
        // the local origin.
        let space = LocalSpace::from_world_matrix(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
        let view = SceneView::new(Some(Vec3::new(10.0, 0.0, -10.0)), space);

        let mut scene = RibbonScene::new();
        scene.spawn(
            Ribbon::new(RibbonId(1))
                .with_points(vec![Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 1.0, 0.0)])
                .with_style(local_style().with_global_coords(true)),
        );

        let camera = view.camera_local_origin().unwrap();
        let mut out = Vec::new();
        build_scene_buffer(&scene, &view, camera, &mut out);

        assert_eq!(out.len(), 6);
        for vertex in &out {
            assert!(vertex.position().x.abs() < 1.0, "point was not localized");
        }
    }

    #[test]
    fn multiple_ribbons_share_one_stream() {
        let mut scene = RibbonScene::new();
        for i in 0..3 {
            scene.spawn(
                Ribbon::new(RibbonId(i))
                    .with_points(vec![Vec3::ZERO, Vec3::new(0.0, 1.0 + i as f32, 0.0)])
                    .with_style(local_style()),
            );
        }

        let view = SceneView::with_camera(Vec3::new(0.0, 0.0, -10.0));
        let mut out = Vec::new();
        build_scene_buffer(&scene, &view, Vec3::new(0.0, 0.0, -10.0), &mut out);
        assert_eq!(out.len(), 3 * 6);
    }
}
