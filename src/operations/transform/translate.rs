use geo::Translate as _;

use crate::geometry::Shape;
use crate::math::Vector2;

/// Translates a shape by a displacement vector.
pub struct Translate<'a> {
    shape: &'a Shape,
    displacement: Vector2,
}

impl<'a> Translate<'a> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(shape: &'a Shape, displacement: Vector2) -> Self {
        Self {
            shape,
            displacement,
        }
    }

    /// Executes the translation, returning the moved copy.
    #[must_use]
    pub fn execute(&self) -> Shape {
        self.shape.translate(self.displacement.x, self.displacement.y)
    }
}
