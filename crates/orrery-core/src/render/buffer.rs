//! GPU-friendly flat buffers for the frame's draw commands.
//!
//! Hosts that upload to a GPU (or ship frames across a worker
//! boundary) don't want to walk an enum. `VertexSurface` flattens the
//! same commands the `CommandList` records into fixed-stride instance
//! and vertex buffers that cast directly to `&[f32]`.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use crate::api::types::Rgba;
use crate::render::surface::Surface;

/// Per-circle instance data. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// Padding to a 32-byte stride.
    pub _pad: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-vertex data for line rendering, two vertices per segment.
/// 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(p: DVec2, color: [f32; 4]) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
            r: color[0],
            g: color[1],
            b: color[2],
            a: color[3],
        }
    }
}

/// Surface that flattens draw commands into wire-format buffers.
///
/// Circles become instances, lines become a vertex list (line-list
/// topology, two vertices per segment), text stays on a side channel
/// since glyph rasterization is the host's business.
#[derive(Debug, Default)]
pub struct VertexSurface {
    circles: Vec<CircleInstance>,
    lines: Vec<LineVertex>,
    texts: Vec<(String, DVec2)>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self {
            circles: Vec::with_capacity(64),
            lines: Vec::with_capacity(2048),
            texts: Vec::new(),
        }
    }

    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.lines
    }

    pub fn texts(&self) -> &[(String, DVec2)] {
        &self.texts
    }

    /// Circle instances viewed as raw floats (upload-ready).
    pub fn circle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.circles)
    }

    /// Line vertices viewed as raw floats (upload-ready).
    pub fn line_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Reset all buffers. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.circles.clear();
        self.lines.clear();
        self.texts.clear();
    }
}

impl Surface for VertexSurface {
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        let c = color.to_f32();
        self.circles.push(CircleInstance {
            x: center.x as f32,
            y: center.y as f32,
            radius: radius as f32,
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
            _pad: 0.0,
        });
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba) {
        let c = color.to_f32();
        self.lines.push(LineVertex::new(from, c));
        self.lines.push(LineVertex::new(to, c));
    }

    fn draw_text(&mut self, text: &str, pos: DVec2) {
        self.texts.push((text.to_string(), pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn wire_strides_are_fixed() {
        assert_eq!(size_of::<CircleInstance>(), CircleInstance::STRIDE_BYTES);
        assert_eq!(size_of::<LineVertex>(), LineVertex::STRIDE_BYTES);
    }

    #[test]
    fn circle_flattens_position_and_color() {
        let mut surface = VertexSurface::new();
        surface.fill_circle(DVec2::new(500.0, 400.0), 25.0, Rgba::new(255, 200, 0, 255));

        let inst = surface.circles()[0];
        assert_eq!(inst.x, 500.0);
        assert_eq!(inst.y, 400.0);
        assert_eq!(inst.radius, 25.0);
        assert_eq!(inst.r, 1.0);
        assert_eq!(inst.a, 1.0);
        assert_eq!(surface.circle_floats().len(), CircleInstance::FLOATS);
    }

    #[test]
    fn line_produces_two_vertices() {
        let mut surface = VertexSurface::new();
        surface.draw_line(DVec2::ZERO, DVec2::new(10.0, 0.0), Rgba::new(100, 100, 100, 120));

        assert_eq!(surface.line_vertices().len(), 2);
        assert_eq!(surface.line_floats().len(), 2 * LineVertex::FLOATS);
        assert_eq!(surface.line_vertices()[1].x, 10.0);
    }

    #[test]
    fn clear_resets_all_channels() {
        let mut surface = VertexSurface::new();
        surface.fill_circle(DVec2::ZERO, 1.0, Rgba::WHITE);
        surface.draw_line(DVec2::ZERO, DVec2::ONE, Rgba::WHITE);
        surface.draw_text("hud", DVec2::ZERO);

        surface.clear();
        assert!(surface.circles().is_empty());
        assert!(surface.line_vertices().is_empty());
        assert!(surface.texts().is_empty());
    }
}
