mod arc;
mod line;

pub use arc::ArcSegment;
pub use line::LineSegment;

use crate::math::Point2;

/// Trait for bounded parametric curves in the plane.
///
/// Curves are parameterized over `t` in `[0, 1]` from [`Curve::start`]
/// to [`Curve::end`].
pub trait Curve {
    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    fn point_at(&self, t: f64) -> Point2;

    /// Returns the length of the curve.
    fn length(&self) -> f64;

    /// Returns the start point of the curve.
    fn start(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// Returns the end point of the curve.
    fn end(&self) -> Point2 {
        self.point_at(1.0)
    }
}
