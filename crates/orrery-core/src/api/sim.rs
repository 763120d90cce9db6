use glam::DVec2;

use crate::core::scene::Scene;
use crate::input::controls::ControlSet;
use crate::render::frame::render_frame;
use crate::render::surface::Surface;
use crate::roster;

/// Logical viewport, supplied once at startup by the host.
/// Defines the screen center the projection is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
        }
    }
}

impl ViewConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The host-facing driver: owns the scene and viewport, exposes the
/// per-tick contract.
///
/// One logical tick = `tick()` (state update) followed by `render()`
/// (pure read). The host loop supplies cadence, polled input, and the
/// measured FPS; the core performs no I/O and spawns no threads, so a
/// host that renders on another thread must hand it a snapshot.
pub struct Orrery {
    pub scene: Scene,
    view: ViewConfig,
}

impl Orrery {
    pub fn new(scene: Scene, view: ViewConfig) -> Self {
        Self { scene, view }
    }

    /// The stock eight-planet scene with the Moon, default viewport.
    pub fn solar_system() -> Self {
        let scene = roster::solar_system();
        log::info!("orrery: initialized with {} bodies", scene.len());
        Self::new(scene, ViewConfig::default())
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Advance one tick: apply this tick's held controls, then orbital
    /// motion. Must complete before `render` observes the state.
    pub fn tick(&mut self, controls: &ControlSet) {
        self.scene.tick(controls);
    }

    /// Emit one frame of draw commands. `fps` is the host-measured
    /// value for the HUD readout.
    pub fn render(&self, fps: f64, surface: &mut dyn Surface) {
        render_frame(&self.scene, &self.view, fps, surface);
    }
}
