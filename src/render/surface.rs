use crate::foundation::{
    core::{BezPath, Point, Rgba8},
    error::LsysResult,
};

/// Stroke style for lines and paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    pub color: Rgba8,
    pub width: f64,
}

impl PaintStyle {
    pub fn new(color: Rgba8, width: f64) -> Self {
        Self { color, width }
    }

    pub fn with_opacity(self, opacity: u8) -> Self {
        Self {
            color: self.color.with_opacity(opacity),
            ..self
        }
    }
}

/// Host drawing target. One animation tick issues its calls between a single
/// frame acquisition and release, which the host owns.
pub trait RenderSurface {
    fn clear(&mut self, color: Rgba8) -> LsysResult<()>;

    fn draw_line(&mut self, from: Point, to: Point, paint: &PaintStyle) -> LsysResult<()>;

    fn draw_path(&mut self, path: &BezPath, paint: &PaintStyle) -> LsysResult<()>;
}
