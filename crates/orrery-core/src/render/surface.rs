//! The drawing surface contract between the core and its host.
//!
//! The core is agnostic to rasterization: it emits filled circles,
//! line segments, and text overlays, and the host turns those into
//! pixels however it likes (canvas, GPU, terminal cells).

use glam::DVec2;

use crate::api::types::Rgba;

/// Receiver for one frame's draw commands, in draw order.
pub trait Surface {
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba);
    /// Text overlay at a logical-pixel position (HUD, not world space).
    fn draw_text(&mut self, text: &str, pos: DVec2);
}

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Rgba,
    },
    Text {
        text: String,
        pos: DVec2,
    },
}

/// Surface that records commands instead of rasterizing them.
/// The frame capture for hosts that replay commands elsewhere, and the
/// primary test double.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop the recorded frame. Called between frames by reusing hosts.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for CommandList {
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_text(&mut self, text: &str, pos: DVec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_draw_order() {
        let mut list = CommandList::new();
        list.fill_circle(DVec2::ZERO, 25.0, Rgba::WHITE);
        list.draw_line(DVec2::ZERO, DVec2::ONE, Rgba::BLACK);
        list.draw_text("FPS: 60.00", DVec2::ZERO);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Circle { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Line { .. }));
        assert!(matches!(list.commands()[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn clear_resets_frame() {
        let mut list = CommandList::new();
        list.fill_circle(DVec2::ZERO, 1.0, Rgba::WHITE);
        list.clear();
        assert!(list.is_empty());
    }
}
