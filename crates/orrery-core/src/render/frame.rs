//! Per-frame rendering: scene snapshot in, draw commands out.
//!
//! The frame order is fixed configuration, not computed from depth:
//! star first, then each body's orbit path and marker in registration
//! order, then the satellite, then the HUD overlay. Orbit radii grow
//! monotonically with registration order in well-formed rosters, which
//! is what makes the static order read correctly.

use glam::DVec2;

use crate::api::sim::ViewConfig;
use crate::api::types::{BodyId, Rgba};
use crate::core::scene::Scene;
use crate::render::projector::{depth_factor, project, rendered_radius, OrbitPath};
use crate::render::surface::Surface;

/// Star marker radius in logical pixels before zoom.
pub const STAR_RADIUS: f64 = 25.0;
pub const STAR_COLOR: Rgba = Rgba::new(255, 200, 0, 255);
/// Orbit path polylines: dim translucent gray.
pub const ORBIT_PATH_COLOR: Rgba = Rgba::new(100, 100, 100, 120);

/// HUD control legend, drawn near the bottom-left corner.
pub const HELP_TEXT: &str = "arrows: tilt/rotate   +/-: zoom   WASD: pan   R: reset view";
const HELP_MARGIN_X: f64 = 10.0;
const HELP_MARGIN_Y: f64 = 50.0;

/// Render one frame of the scene.
///
/// Pure toward simulation state: reads the scene, writes only to the
/// surface. `fps` is host-measured frame metadata for the HUD readout
/// and feeds no logic.
pub fn render_frame(scene: &Scene, view: &ViewConfig, fps: f64, surface: &mut dyn Surface) {
    let camera = scene.camera;
    // Pan is applied to the star (and with it the whole system)
    // unscaled — zooming never moves the pan offset.
    let star = view.center() + DVec2::new(camera.pan_x, camera.pan_y);

    surface.fill_circle(star, STAR_RADIUS * camera.scale, STAR_COLOR);

    let mut host_screen: Option<DVec2> = None;
    for (index, body) in scene.bodies().iter().enumerate() {
        // Orbit path before the marker: back-to-front within the body.
        let mut path = OrbitPath::new(camera, star, body.orbit_radius);
        if let Some((_, first)) = path.next() {
            let mut prev = first;
            for (_, point) in path {
                surface.draw_line(prev, point, ORBIT_PATH_COLOR);
                prev = point;
            }
            surface.draw_line(prev, first, ORBIT_PATH_COLOR);
        }

        let pos = project(&camera, star, body.orbit_radius, body.angle);
        let depth = depth_factor(&camera, star, body.orbit_radius, pos.y);
        let radius = rendered_radius(body.base_radius, camera.scale, depth);
        surface.fill_circle(pos, radius, body.color);

        if scene
            .satellite()
            .is_some_and(|sat| sat.host == BodyId(index as u32))
        {
            host_screen = Some(pos);
        }
    }

    // The satellite offsets from its host's projected position rather
    // than being projected from the star.
    if let (Some(sat), Some(host)) = (scene.satellite(), host_screen) {
        let offset = DVec2::new(
            sat.orbit_radius * camera.scale * sat.angle.cos(),
            sat.orbit_radius * camera.scale * sat.angle.sin() * camera.tilt,
        );
        surface.fill_circle(host + offset, sat.radius * camera.scale, sat.color);
    }

    surface.draw_text(&format!("FPS: {fps:.2}"), DVec2::ZERO);
    surface.draw_text(
        HELP_TEXT,
        DVec2::new(HELP_MARGIN_X, view.height - HELP_MARGIN_Y),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::{Body, Satellite};
    use crate::render::surface::{CommandList, DrawCommand};

    /// Samples per orbit path at the default step (126 segments once closed).
    const PATH_SEGMENTS: usize = 126;

    fn scene_with_satellite() -> Scene {
        let mut scene = Scene::new();
        scene.register(Body::new("inner", 60.0).with_speed(0.04));
        let host = scene.register(Body::new("host", 160.0).with_speed(0.01));
        scene.set_satellite(Satellite::new("moon", host, 40.0));
        scene
    }

    #[test]
    fn frame_order_is_star_paths_markers_satellite_hud() {
        let scene = scene_with_satellite();
        let view = ViewConfig::default();
        let mut list = CommandList::new();
        render_frame(&scene, &view, 60.0, &mut list);

        let cmds = list.commands();
        // Star first.
        assert!(matches!(
            cmds[0],
            DrawCommand::Circle { color: STAR_COLOR, .. }
        ));
        // First body: path segments then marker.
        let body1_marker = 1 + PATH_SEGMENTS;
        for cmd in &cmds[1..body1_marker] {
            assert!(matches!(cmd, DrawCommand::Line { .. }));
        }
        assert!(matches!(cmds[body1_marker], DrawCommand::Circle { .. }));
        // Second body: same shape.
        let body2_marker = body1_marker + 1 + PATH_SEGMENTS;
        assert!(matches!(cmds[body2_marker], DrawCommand::Circle { .. }));
        // Satellite, then two HUD text commands, then nothing.
        assert!(matches!(cmds[body2_marker + 1], DrawCommand::Circle { .. }));
        assert!(matches!(cmds[body2_marker + 2], DrawCommand::Text { .. }));
        assert!(matches!(cmds[body2_marker + 3], DrawCommand::Text { .. }));
        assert_eq!(cmds.len(), body2_marker + 4);
    }

    #[test]
    fn star_follows_pan_unscaled() {
        let mut scene = Scene::new();
        scene.register(Body::new("b", 100.0));
        scene.camera.pan_x = 30.0;
        scene.camera.pan_y = -10.0;
        scene.camera.scale = 3.0;

        let view = ViewConfig::default();
        let mut list = CommandList::new();
        render_frame(&scene, &view, 0.0, &mut list);

        match list.commands()[0] {
            DrawCommand::Circle { center, radius, .. } => {
                assert_eq!(center, view.center() + DVec2::new(30.0, -10.0));
                assert_eq!(radius, STAR_RADIUS * 3.0);
            }
            _ => panic!("expected star circle first"),
        }
    }

    #[test]
    fn satellite_orbits_host_not_star() {
        let mut scene = scene_with_satellite();
        // Put the satellite at angle 0: offset is purely +x from the host.
        for _ in 0..5 {
            scene.advance();
        }
        let sat_angle = scene.satellite().unwrap().angle;
        let host = scene.get(BodyId(1)).unwrap();
        let cam = scene.camera;
        let view = ViewConfig::default();
        let star = view.center();
        let host_pos = project(&cam, star, host.orbit_radius, host.angle);
        let expected = host_pos
            + DVec2::new(
                40.0 * cam.scale * sat_angle.cos(),
                40.0 * cam.scale * sat_angle.sin() * cam.tilt,
            );

        let mut list = CommandList::new();
        render_frame(&scene, &view, 0.0, &mut list);
        // Satellite circle is the last circle before the HUD text.
        let sat_cmd = &list.commands()[list.len() - 3];
        match sat_cmd {
            DrawCommand::Circle { center, .. } => {
                assert!((*center - expected).length() < 1e-9);
            }
            _ => panic!("expected satellite circle"),
        }
    }

    #[test]
    fn hud_reports_fps() {
        let mut scene = Scene::new();
        scene.register(Body::new("b", 100.0));
        let mut list = CommandList::new();
        render_frame(&scene, &ViewConfig::default(), 59.94, &mut list);

        let texts: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["FPS: 59.94", HELP_TEXT]);
    }

    #[test]
    fn rendering_does_not_mutate_state() {
        let mut scene = scene_with_satellite();
        scene.advance();
        let angle_before = scene.bodies()[0].angle;
        let cam_before = scene.camera;

        let mut list = CommandList::new();
        render_frame(&scene, &ViewConfig::default(), 30.0, &mut list);

        assert_eq!(scene.bodies()[0].angle, angle_before);
        assert_eq!(scene.camera, cam_before);
    }
}
