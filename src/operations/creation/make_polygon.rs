use geo::{Coord, LineString, MultiPolygon, Polygon, RemoveRepeatedPoints};

use crate::error::{OperationError, Result};
use crate::geometry::{CoordinateRing, Shape};

/// Builds a single-polygon [`Shape`] from a coordinate ring.
///
/// The ring is closed automatically and repeated points are dropped. No
/// validity check is made beyond requiring three distinct points.
#[derive(Debug)]
pub struct MakePolygon<'a> {
    ring: &'a CoordinateRing,
}

impl<'a> MakePolygon<'a> {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(ring: &'a CoordinateRing) -> Self {
        Self { ring }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the ring has fewer than three
    /// points.
    pub fn execute(&self) -> Result<Shape> {
        if self.ring.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "polygon needs at least 3 points, ring has {}",
                self.ring.len()
            ))
            .into());
        }

        let exterior: LineString<f64> = self
            .ring
            .points()
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        let polygon = Polygon::new(exterior, Vec::new()).remove_repeated_points();
        Ok(MultiPolygon::new(vec![polygon]))
    }
}
