//! Body rosters — the data that populates a scene.
//!
//! Rosters load from JSON at runtime or come from the stock
//! solar-system table. Visual radii and orbital speeds are exaggerated
//! for readability, not to scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::types::Rgba;
use crate::core::body::{Body, Satellite, SATELLITE_STEP};
use crate::core::scene::Scene;

/// One body in a roster definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDef {
    pub name: String,
    /// RGBA channels, 0-255.
    pub color: [u8; 4],
    /// Marker radius in logical pixels.
    pub radius: f64,
    /// Orbit radius in logical pixels. Must be positive.
    pub orbit: f64,
    /// Radians per tick.
    pub speed: f64,
    /// Starting orbital angle (default: 0).
    #[serde(default)]
    pub angle: f64,
}

/// The roster's satellite, orbiting one of the bodies by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteDef {
    pub name: String,
    /// Name of the host body.
    pub host: String,
    pub color: [u8; 4],
    pub radius: f64,
    pub orbit: f64,
    /// Radians per tick (default: 0.05).
    #[serde(default = "default_satellite_step")]
    pub speed: f64,
}

fn default_satellite_step() -> f64 {
    SATELLITE_STEP
}

/// A complete system definition, loadable from JSON.
/// Bodies should be listed with increasing orbit radii — list order is
/// draw order, and the fixed draw order only reads correctly when
/// orbits don't cross.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDef {
    pub bodies: Vec<BodyDef>,
    #[serde(default)]
    pub satellite: Option<SatelliteDef>,
}

/// Failure to load or validate a roster.
#[derive(Debug)]
pub enum RosterError {
    Parse(serde_json::Error),
    /// A body (or the satellite) declared a non-positive orbit radius.
    NonPositiveOrbit { name: String },
    /// The satellite names a host that isn't in the roster.
    UnknownHost { host: String },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Parse(err) => write!(f, "roster parse error: {err}"),
            RosterError::NonPositiveOrbit { name } => {
                write!(f, "body '{name}' has a non-positive orbit radius")
            }
            RosterError::UnknownHost { host } => {
                write!(f, "satellite host '{host}' is not in the roster")
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Parse(err)
    }
}

impl SystemDef {
    /// Parse a roster from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let def: SystemDef = serde_json::from_str(json)?;
        Ok(def)
    }

    /// Build a scene, validating the roster's invariants: positive
    /// orbit radii everywhere, and a resolvable satellite host.
    pub fn into_scene(self) -> Result<Scene, RosterError> {
        let mut scene = Scene::new();
        for def in &self.bodies {
            if def.orbit <= 0.0 {
                return Err(RosterError::NonPositiveOrbit {
                    name: def.name.clone(),
                });
            }
            let [r, g, b, a] = def.color;
            scene.register(
                Body::new(def.name.clone(), def.orbit)
                    .with_color(Rgba::new(r, g, b, a))
                    .with_radius(def.radius)
                    .with_speed(def.speed)
                    .with_angle(def.angle),
            );
        }
        if let Some(sat) = &self.satellite {
            if sat.orbit <= 0.0 {
                return Err(RosterError::NonPositiveOrbit {
                    name: sat.name.clone(),
                });
            }
            let (host, _) = scene.find_by_name(&sat.host).ok_or_else(|| {
                RosterError::UnknownHost {
                    host: sat.host.clone(),
                }
            })?;
            let [r, g, b, a] = sat.color;
            scene.set_satellite(
                Satellite::new(sat.name.clone(), host, sat.orbit)
                    .with_color(Rgba::new(r, g, b, a))
                    .with_radius(sat.radius)
                    .with_step(sat.speed),
            );
        }
        log::debug!("roster: built scene with {} bodies", scene.len());
        Ok(scene)
    }
}

/// The stock scene: eight planets plus the Moon around Earth.
/// Colors, radii, and speeds match the classic demo roster.
pub fn solar_system() -> Scene {
    let mut scene = Scene::new();
    let planets: [(&str, Rgba, f64, f64, f64); 8] = [
        ("Mercury", Rgba::rgb(200, 200, 200), 4.0, 60.0, 0.04),
        ("Venus", Rgba::rgb(255, 165, 0), 6.0, 100.0, 0.02),
        ("Earth", Rgba::rgb(0, 150, 255), 8.0, 160.0, 0.01),
        ("Mars", Rgba::rgb(255, 80, 80), 7.0, 220.0, 0.007),
        ("Jupiter", Rgba::rgb(230, 180, 100), 12.0, 300.0, 0.005),
        ("Saturn", Rgba::rgb(210, 180, 140), 10.0, 370.0, 0.003),
        ("Uranus", Rgba::rgb(173, 216, 230), 9.0, 430.0, 0.002),
        ("Neptune", Rgba::rgb(100, 149, 237), 9.0, 490.0, 0.001),
    ];
    let mut earth = None;
    for (name, color, radius, orbit, speed) in planets {
        let id = scene.register(
            Body::new(name, orbit)
                .with_color(color)
                .with_radius(radius)
                .with_speed(speed),
        );
        if name == "Earth" {
            earth = Some(id);
        }
    }
    if let Some(earth) = earth {
        scene.set_satellite(
            Satellite::new("Moon", earth, 40.0)
                .with_color(Rgba::rgb(180, 180, 180))
                .with_radius(5.0),
        );
    }
    scene
}
