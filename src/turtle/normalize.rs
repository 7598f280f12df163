use crate::{
    foundation::core::{Point, Vec2},
    grammar::command::DrawCommand,
    turtle::{pose::Pose, traverse::Turtle},
};

/// Square target region on the render surface.
///
/// The figure is fitted into a `side - margin` square whose top-left corner
/// sits at `offset`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub side: f64,
    pub margin: f64,
    pub offset: Vec2,
}

impl Viewport {
    pub const DEFAULT_MARGIN: f64 = 100.0;

    /// Fixed placement: 100 unit margin, figure anchored at (50, 200).
    pub fn reference(side: f64) -> Self {
        Self {
            side,
            margin: Self::DEFAULT_MARGIN,
            offset: Vec2::new(50.0, 200.0),
        }
    }

    /// Largest square centered on a `width x height` surface.
    pub fn centered(width: f64, height: f64, margin: f64) -> Self {
        let side = width.min(height);
        Self {
            side,
            margin,
            offset: Vec2::new((width - side + margin) * 0.5, (height - side + margin) * 0.5),
        }
    }

    pub fn drawable_side(&self) -> f64 {
        (self.side - self.margin).max(0.0)
    }
}

/// Extreme coordinates reached by a dry run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Side of the bounding square; the tighter axis is enlarged, never distorted.
    pub fn side(&self) -> f64 {
        self.width().max(self.height())
    }
}

/// Placement of a command sequence inside a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Layout {
    /// Start position of the live turtle, in surface coordinates.
    pub origin: Point,
    /// Multiplier applied to every move distance.
    pub scale: f64,
    pub bounds: Bounds,
}

impl Layout {
    pub fn start_pose(&self) -> Pose {
        Pose::at(self.origin)
    }
}

/// Walk the whole sequence from `(0, 0, 0)` and record its extremes.
pub fn dry_run(commands: &[DrawCommand]) -> Bounds {
    let mut turtle = Turtle::new(Pose::default());
    let mut bounds = Bounds::from_point(turtle.pose().point());
    while let Some(step) = turtle.next_step(commands, 1.0) {
        bounds.include(step.to);
    }
    bounds
}

/// Fit `commands` into `viewport`.
///
/// A sequence that never leaves its start point has no extent; it gets scale 1
/// and starts at the center of the drawable square.
#[tracing::instrument(skip(commands), fields(len = commands.len()))]
pub fn normalize(commands: &[DrawCommand], viewport: &Viewport) -> Layout {
    let bounds = dry_run(commands);
    let side = bounds.side();
    let drawable = viewport.drawable_side();

    if !(side.is_finite() && side > 0.0) {
        tracing::debug!(side, "degenerate bounds; using identity scale");
        let half = drawable * 0.5;
        return Layout {
            origin: Point::new(viewport.offset.x + half, viewport.offset.y + half),
            scale: 1.0,
            bounds,
        };
    }

    let origin_x = -bounds.min_x / side;
    let origin_y = -bounds.min_y / side;
    Layout {
        origin: Point::new(
            viewport.offset.x + origin_x * drawable,
            viewport.offset.y + origin_y * drawable,
        ),
        scale: drawable / side,
        bounds,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/turtle/normalize.rs"]
mod tests;
