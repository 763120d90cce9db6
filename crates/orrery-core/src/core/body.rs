use crate::api::types::{BodyId, Rgba};

/// Default per-tick angular increment for a satellite.
pub const SATELLITE_STEP: f64 = 0.05;

/// A body on a circular orbit around the star.
///
/// Only `angle` mutates after construction; everything else is fixed
/// configuration. Orbits are circles in the unprojected plane — the
/// apparent ellipse comes entirely from the camera tilt.
#[derive(Debug, Clone)]
pub struct Body {
    /// Display name, also used to designate satellite hosts in rosters.
    pub name: String,
    pub color: Rgba,
    /// Marker radius in logical pixels before zoom and depth scaling.
    pub base_radius: f64,
    /// Orbit radius in logical pixels. Must be positive.
    pub orbit_radius: f64,
    /// Radians added to `angle` each tick.
    pub angular_speed: f64,
    /// Current orbital angle, radians. Accumulates without wrapping.
    pub angle: f64,
}

impl Body {
    /// Create a body on the given orbit.
    pub fn new(name: impl Into<String>, orbit_radius: f64) -> Self {
        debug_assert!(orbit_radius > 0.0, "orbit radius must be positive");
        Self {
            name: name.into(),
            color: Rgba::WHITE,
            base_radius: 5.0,
            orbit_radius,
            angular_speed: 0.0,
            angle: 0.0,
        }
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_radius(mut self, base_radius: f64) -> Self {
        self.base_radius = base_radius;
        self
    }

    pub fn with_speed(mut self, angular_speed: f64) -> Self {
        self.angular_speed = angular_speed;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// A single satellite orbiting a registered body (never the star).
///
/// Its screen position is derived from the host's already-projected
/// position plus its own orbital offset, so it follows the host through
/// every camera transform without being projected from the star.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub name: String,
    /// The body this satellite orbits.
    pub host: BodyId,
    pub color: Rgba,
    /// Marker radius in logical pixels before zoom scaling.
    pub radius: f64,
    /// Orbit radius around the host, logical pixels.
    pub orbit_radius: f64,
    /// Radians added to `angle` each tick, independent of the host's speed.
    pub step: f64,
    pub angle: f64,
}

impl Satellite {
    pub fn new(name: impl Into<String>, host: BodyId, orbit_radius: f64) -> Self {
        debug_assert!(orbit_radius > 0.0, "orbit radius must be positive");
        Self {
            name: name.into(),
            host,
            color: Rgba::rgb(180, 180, 180),
            radius: 5.0,
            orbit_radius,
            step: SATELLITE_STEP,
            angle: 0.0,
        }
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}
