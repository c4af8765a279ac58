use crate::math::distance_2d::point_dist;
use crate::math::Point2;

use super::Curve;

/// A straight line segment between two points.
///
/// The parametric form is: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new line segment. Zero-length segments are allowed.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns this segment with both endpoints scaled about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            start: Point2::from(self.start.coords * factor),
            end: Point2::from(self.end.coords * factor),
        }
    }
}

impl Curve for LineSegment {
    fn point_at(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    fn length(&self) -> f64 {
        point_dist(&self.start, &self.end)
    }

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }
}
