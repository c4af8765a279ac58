use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_dist;
use crate::math::intersect_2d::find_ring_self_intersection;
use crate::math::Point2;

/// An ordered, implicitly closed sequence of boundary points.
///
/// Consecutive duplicates are collapsed on construction, including a last
/// point that repeats the first, so the ring never stores its closing point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateRing {
    points: Vec<Point2>,
}

impl CoordinateRing {
    /// Creates a ring from points, collapsing consecutive duplicates.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        let mut deduped: Vec<Point2> = Vec::with_capacity(points.len());
        for p in points {
            if deduped.last() != Some(&p) {
                deduped.push(p);
            }
        }
        while deduped.len() > 1 && deduped.first() == deduped.last() {
            deduped.pop();
        }
        Self { points: deduped }
    }

    /// Returns the ring's points without the closing repeat.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the ring, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Returns the number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the ring has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the closed-ring perimeter: the sum of consecutive point
    /// distances including the closing edge.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| point_dist(&self.points[i], &self.points[(i + 1) % n]))
            .sum()
    }

    /// Checks that the ring describes a simple closed polygon boundary.
    ///
    /// The sequencer never calls this; callers that cannot vouch for their
    /// source path should.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedInput` if the ring has fewer than
    /// three points or two of its edges cross.
    pub fn validate(&self) -> Result<()> {
        if self.points.len() < 3 {
            return Err(GeometryError::MalformedInput(format!(
                "ring has {} distinct points, at least 3 required",
                self.points.len()
            ))
            .into());
        }
        if let Some((i, j)) = find_ring_self_intersection(&self.points) {
            return Err(GeometryError::MalformedInput(format!(
                "ring edges {i} and {j} intersect"
            ))
            .into());
        }
        Ok(())
    }
}
