use crate::{
    foundation::{
        core::{BezPath, FrameRGBA, Point, Rgba8},
        error::{LsysError, LsysResult},
    },
    render::surface::{PaintStyle, RenderSurface},
};

/// Offscreen [`RenderSurface`] rasterized with `vello_cpu`.
///
/// Calls since the last [`RenderSurface::clear`] form the current frame;
/// [`CpuSurface::snapshot`] rasterizes it.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    draw_calls: usize,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> LsysResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| LsysError::render("surface width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| LsysError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(LsysError::render("surface width/height must be non-zero"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            draw_calls: 0,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Number of line/path draws in the current frame.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Rasterize the current frame into premultiplied RGBA8.
    pub fn snapshot(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn stroke(&mut self, path: &vello_cpu::kurbo::BezPath, paint: &PaintStyle) {
        let c = paint.color;
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(paint.width));
        self.ctx.stroke_path(path);
        self.draw_calls += 1;
    }
}

impl RenderSurface for CpuSurface {
    fn clear(&mut self, color: Rgba8) -> LsysResult<()> {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.draw_calls = 0;
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &PaintStyle) -> LsysResult<()> {
        if paint.color.a == 0 {
            return Ok(());
        }
        let mut line = vello_cpu::kurbo::BezPath::new();
        line.move_to(point_to_cpu(from));
        line.line_to(point_to_cpu(to));
        self.stroke(&line, paint);
        Ok(())
    }

    fn draw_path(&mut self, path: &BezPath, paint: &PaintStyle) -> LsysResult<()> {
        if paint.color.a == 0 || path.elements().is_empty() {
            return Ok(());
        }
        let cpu_path = bezpath_to_cpu(path);
        self.stroke(&cpu_path, paint);
        Ok(())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
