use crate::foundation::core::Point;

/// Turtle position and heading (degrees). Copied, never shared, when pushed
/// onto a branch stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0)
    }

    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Pose after moving `distance * scale` along the current heading.
    pub fn advanced(self, distance: f64, scale: f64) -> Self {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let len = distance * scale;
        Self {
            x: self.x + cos * len,
            y: self.y + sin * len,
            angle: self.angle,
        }
    }
}
