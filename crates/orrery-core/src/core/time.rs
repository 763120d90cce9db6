/// Smoothed frames-per-second estimate.
/// The host records each frame's wall-clock delta; the smoothed value
/// feeds the on-screen FPS readout and nothing else.
pub struct FpsMeter {
    /// Exponential moving average of instantaneous FPS.
    smoothed: f64,
    /// Blend weight for new samples.
    alpha: f64,
    primed: bool,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self {
            smoothed: 0.0,
            alpha: 0.1,
            primed: false,
        }
    }

    /// Record one frame delta in seconds. Zero or negative deltas are
    /// ignored rather than producing an infinite sample.
    pub fn record(&mut self, frame_dt: f64) {
        if frame_dt <= 0.0 {
            return;
        }
        let sample = 1.0 / frame_dt;
        if self.primed {
            self.smoothed += self.alpha * (sample - self.smoothed);
        } else {
            self.smoothed = sample;
            self.primed = true;
        }
    }

    /// Current smoothed FPS. Zero until the first frame is recorded.
    pub fn fps(&self) -> f64 {
        self.smoothed
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let meter = FpsMeter::new();
        assert_eq!(meter.fps(), 0.0);
    }

    #[test]
    fn constant_cadence_converges() {
        let mut meter = FpsMeter::new();
        for _ in 0..200 {
            meter.record(1.0 / 60.0);
        }
        assert!((meter.fps() - 60.0).abs() < 1e-6, "fps = {}", meter.fps());
    }

    #[test]
    fn ignores_degenerate_deltas() {
        let mut meter = FpsMeter::new();
        meter.record(1.0 / 30.0);
        meter.record(0.0);
        meter.record(-1.0);
        assert!((meter.fps() - 30.0).abs() < 1e-9);
    }
}
