use crate::input::controls::{Control, ControlSet};

/// Tilt bounds: 1.0 renders orbits face-on, 0.1 nearly edge-on.
pub const TILT_MIN: f64 = 0.1;
pub const TILT_MAX: f64 = 1.0;

/// Per-tick control deltas.
pub const TILT_STEP: f64 = 0.01;
pub const ROTATE_STEP: f64 = 0.02;
pub const ZOOM_IN_FACTOR: f64 = 1.02;
pub const ZOOM_OUT_FACTOR: f64 = 0.98;
/// Pan step in logical pixels, independent of zoom.
pub const PAN_STEP: f64 = 5.0;

/// Default camera, also what `reset` restores.
pub const DEFAULT_TILT: f64 = 0.5;

/// View parameters for the pseudo-3D projection.
///
/// `rotation` is unbounded and wraps naturally through cos/sin.
/// `scale` is multiplicative with no hard bounds: zooming out decays
/// toward (but never reaches) zero, zooming in compounds exponentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Vertical compression of projected orbits, clamped to [0.1, 1.0].
    pub tilt: f64,
    /// Rotation of the orbital plane, radians.
    pub rotation: f64,
    /// Zoom factor applied to orbit radii and marker sizes.
    pub scale: f64,
    /// Screen-space pan offset in logical pixels (not scaled by zoom).
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            tilt: DEFAULT_TILT,
            rotation: 0.0,
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl CameraState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick of control input.
    ///
    /// Every held control contributes exactly one delta; deltas are
    /// independent and commutative, so holding opposing controls
    /// cancels out. `Reset` hard-sets the defaults and therefore wins
    /// regardless of what else is held this tick.
    pub fn apply(&mut self, controls: &ControlSet) {
        if controls.is_held(Control::TiltUp) {
            self.tilt -= TILT_STEP;
        }
        if controls.is_held(Control::TiltDown) {
            self.tilt += TILT_STEP;
        }
        self.tilt = self.tilt.clamp(TILT_MIN, TILT_MAX);

        if controls.is_held(Control::RotateLeft) {
            self.rotation -= ROTATE_STEP;
        }
        if controls.is_held(Control::RotateRight) {
            self.rotation += ROTATE_STEP;
        }

        if controls.is_held(Control::ZoomIn) {
            self.scale *= ZOOM_IN_FACTOR;
        }
        if controls.is_held(Control::ZoomOut) {
            self.scale *= ZOOM_OUT_FACTOR;
        }

        if controls.is_held(Control::PanUp) {
            self.pan_y -= PAN_STEP;
        }
        if controls.is_held(Control::PanDown) {
            self.pan_y += PAN_STEP;
        }
        if controls.is_held(Control::PanLeft) {
            self.pan_x -= PAN_STEP;
        }
        if controls.is_held(Control::PanRight) {
            self.pan_x += PAN_STEP;
        }

        // Checked last so it overrides any delta applied above.
        if controls.is_held(Control::Reset) {
            self.reset();
        }
    }

    /// Restore the exact startup camera.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
