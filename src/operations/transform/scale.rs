use geo::{Coord, MapCoords};

use crate::geometry::Shape;

/// Scales a shape uniformly about the origin.
pub struct Scale<'a> {
    shape: &'a Shape,
    factor: f64,
}

impl<'a> Scale<'a> {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(shape: &'a Shape, factor: f64) -> Self {
        Self { shape, factor }
    }

    /// Executes the scaling, returning the scaled copy.
    #[must_use]
    pub fn execute(&self) -> Shape {
        let f = self.factor;
        self.shape.map_coords(|c| Coord {
            x: c.x * f,
            y: c.y * f,
        })
    }
}
