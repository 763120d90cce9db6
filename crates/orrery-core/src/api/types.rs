/// Unique identifier for a registered body.
/// Assigned by the scene in registration order, which is also draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// RGBA color with 8-bit channels.
/// Matches the wire convention of most 2D surfaces; converted to
/// normalized floats only at the buffer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from RGBA components (0-255).
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized [r, g, b, a] floats (0.0 - 1.0) for GPU-style buffers.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn to_f32_normalizes() {
        let c = Rgba::new(255, 0, 128, 255);
        let f = c.to_f32();
        assert_eq!(f[0], 1.0);
        assert_eq!(f[1], 0.0);
        assert!((f[2] - 0.50196).abs() < 1e-4);
        assert_eq!(f[3], 1.0);
    }
}
