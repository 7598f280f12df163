use crate::foundation::math::{mul_div255_u8, unpremultiply_in_place};

pub use kurbo::{BezPath, Point, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const GRAY: Self = Self::opaque(0x88, 0x88, 0x88);
    pub const MAGENTA: Self = Self::opaque(0xff, 0x00, 0xff);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Multiply the color's own alpha by `opacity` (0..=255).
    pub fn with_opacity(self, opacity: u8) -> Self {
        Self {
            a: mul_div255_u8(u16::from(self.a), u16::from(opacity)),
            ..self
        }
    }

    pub fn premultiplied(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}

/// Pixel buffer produced by a render surface.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(idx..idx + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Pixel data with straight alpha, as image encoders expect it.
    pub fn into_straight_rgba8(self) -> Vec<u8> {
        let mut data = self.data;
        if self.premultiplied {
            unpremultiply_in_place(&mut data);
        }
        data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
