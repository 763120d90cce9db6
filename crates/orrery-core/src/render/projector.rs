//! Pseudo-3D projection of circular orbits onto the screen.
//!
//! Pure math, no surface or scene dependencies. Uses f64 throughout —
//! angles accumulate for the life of the process, and cos/sin of large
//! accumulated values is where f32 would visibly drift.

use glam::DVec2;

use crate::core::camera::CameraState;

/// Angular step between orbit-path samples, radians (≈126 segments).
pub const ORBIT_SAMPLE_STEP: f64 = 0.05;

/// Fraction of the rendered radius gained/lost at the orbit's vertical
/// extremes — the linear pseudo-depth cue.
pub const DEPTH_GAIN: f64 = 0.3;

/// Project an orbital angle to screen space.
///
/// Orthographic projection of a circle tilted about the horizontal
/// screen axis: camera rotation offsets the angle, zoom scales the
/// radius, and tilt compresses the sine (vertical) component. At
/// tilt = 1 the orbit renders as a true circle of radius
/// `scale * orbit_radius` around `star_screen`.
pub fn project(camera: &CameraState, star_screen: DVec2, orbit_radius: f64, theta: f64) -> DVec2 {
    let t = theta + camera.rotation;
    DVec2::new(
        star_screen.x + camera.scale * orbit_radius * t.cos(),
        star_screen.y + camera.scale * orbit_radius * t.sin() * camera.tilt,
    )
}

/// Linear pseudo-depth multiplier for a projected point's marker size.
///
/// Exactly 1.0 where the orbit crosses the star's horizontal (the
/// equatorial crossing); smaller on the near side of the tilted orbit,
/// larger on the far side, per the screen's Y-down sign convention.
/// A degenerate orbit (`scale * orbit_radius ≈ 0`) has no depth to
/// speak of and maps to 1.0.
pub fn depth_factor(
    camera: &CameraState,
    star_screen: DVec2,
    orbit_radius: f64,
    screen_y: f64,
) -> f64 {
    let span = camera.scale * orbit_radius;
    if span.abs() < f64::EPSILON {
        return 1.0;
    }
    1.0 - DEPTH_GAIN * ((screen_y - star_screen.y) / span)
}

/// Apparent marker radius after zoom and depth scaling.
/// Clamped to ≥ 0: extreme tilt/scale combinations can drive the raw
/// formula negative, and a negative radius is never drawable.
pub fn rendered_radius(base_radius: f64, scale: f64, depth: f64) -> f64 {
    (base_radius * scale * depth).max(0.0)
}

/// Lazy, restartable sampler of an orbit's on-screen path.
///
/// Yields `(angle, screen_point)` pairs for angles 0, step, 2·step, …
/// strictly below 2π, each projected with the same formula as the live
/// body marker. Consumers connect consecutive points (and close the
/// loop) to draw the orbit as an approximate ellipse. The step is
/// swappable without touching the projection math.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    camera: CameraState,
    star_screen: DVec2,
    orbit_radius: f64,
    step: f64,
    next_angle: f64,
}

impl OrbitPath {
    pub fn new(camera: CameraState, star_screen: DVec2, orbit_radius: f64) -> Self {
        Self {
            camera,
            star_screen,
            orbit_radius,
            step: ORBIT_SAMPLE_STEP,
            next_angle: 0.0,
        }
    }

    /// Override the sample density.
    pub fn with_step(mut self, step: f64) -> Self {
        debug_assert!(step > 0.0, "sample step must be positive");
        self.step = step;
        self
    }
}

impl Iterator for OrbitPath {
    type Item = (f64, DVec2);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_angle >= std::f64::consts::TAU {
            return None;
        }
        let angle = self.next_angle;
        self.next_angle += self.step;
        let point = project(&self.camera, self.star_screen, self.orbit_radius, angle);
        Some((angle, point))
    }
}
