use crate::api::types::BodyId;
use crate::core::body::{Body, Satellite};
use crate::core::camera::CameraState;
use crate::input::controls::ControlSet;

/// Authoritative simulation state: the ordered body list, the one
/// optional satellite, and the camera.
///
/// Registration order is draw order — back-to-front rendering relies on
/// orbit radii growing monotonically with registration, not on any
/// computed depth sort. The projector only ever reads a `&Scene`.
#[derive(Debug)]
pub struct Scene {
    bodies: Vec<Body>,
    satellite: Option<Satellite>,
    pub camera: CameraState,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            satellite: None,
            camera: CameraState::default(),
        }
    }

    /// Add a body. Its position in registration order becomes its ID
    /// and its slot in the draw order.
    pub fn register(&mut self, body: Body) -> BodyId {
        debug_assert!(body.orbit_radius > 0.0, "orbit radius must be positive");
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        id
    }

    /// Install the satellite. Replaces any previous one.
    pub fn set_satellite(&mut self, satellite: Satellite) {
        self.satellite = Some(satellite);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn satellite(&self) -> Option<&Satellite> {
        self.satellite.as_ref()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0 as usize)
    }

    /// Find a body by name. Names are unique in well-formed rosters but
    /// this returns the first match either way.
    pub fn find_by_name(&self, name: &str) -> Option<(BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .find(|(_, b)| b.name == name)
            .map(|(i, b)| (BodyId(i as u32), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance orbital motion by one tick: every body's angle grows by
    /// its angular speed, the satellite's by its own step. Angles
    /// accumulate linearly and are never wrapped.
    pub fn advance(&mut self) {
        for body in &mut self.bodies {
            body.angle += body.angular_speed;
        }
        if let Some(sat) = &mut self.satellite {
            sat.angle += sat.step;
        }
    }

    /// One full simulation tick: camera deltas first, then orbital
    /// motion. Completes before any projection reads the scene.
    pub fn tick(&mut self, controls: &ControlSet) {
        self.camera.apply(controls);
        self.advance();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
