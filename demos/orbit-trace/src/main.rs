//! Drives the orrery core without a window: a scripted control
//! sequence stands in for held keys, and frames are rendered into a
//! command list whose summary is printed instead of rasterized.

use anyhow::{bail, Result};
use orrery_core::{CommandList, Control, ControlSet, DrawCommand, FpsMeter, Orrery};

const TICKS: usize = 240;
const REPORT_EVERY: usize = 60;

/// Synthetic held-key state for a given tick.
fn scripted_controls(tick: usize) -> ControlSet {
    match tick {
        0..=59 => ControlSet::new().with(Control::ZoomIn),
        60..=119 => ControlSet::new().with(Control::RotateRight).with(Control::TiltUp),
        120..=179 => ControlSet::new().with(Control::PanRight).with(Control::PanDown),
        180 => ControlSet::new().with(Control::Reset),
        _ => ControlSet::new(),
    }
}

fn main() -> Result<()> {
    let mut orrery = Orrery::solar_system();
    let mut frame = CommandList::new();
    let mut fps = FpsMeter::new();

    for tick in 0..TICKS {
        orrery.tick(&scripted_controls(tick));
        // No real clock here — pretend the host holds a steady 60 Hz.
        fps.record(1.0 / 60.0);

        if (tick + 1) % REPORT_EVERY != 0 {
            continue;
        }

        frame.clear();
        orrery.render(fps.fps(), &mut frame);
        if frame.is_empty() {
            bail!("tick {tick}: frame produced no draw commands");
        }

        let mut circles = 0usize;
        let mut lines = 0usize;
        let mut texts = 0usize;
        for cmd in frame.commands() {
            match cmd {
                DrawCommand::Circle { .. } => circles += 1,
                DrawCommand::Line { .. } => lines += 1,
                DrawCommand::Text { .. } => texts += 1,
            }
        }

        let cam = &orrery.scene.camera;
        println!(
            "tick {:>3}: {} commands ({} circles, {} lines, {} texts) | tilt {:.2} rot {:.2} scale {:.4} pan ({:.0}, {:.0})",
            tick + 1,
            frame.len(),
            circles,
            lines,
            texts,
            cam.tilt,
            cam.rotation,
            cam.scale,
            cam.pan_x,
            cam.pan_y,
        );
    }

    Ok(())
}
