use geo::{MultiPolygon, Simplify};
use geo_buf::{buffer_multi_polygon, buffer_multi_polygon_rounded};

use crate::error::{GeometryError, Result};
use crate::geometry::Shape;
use crate::math::TOLERANCE;

/// Default chord tolerance for simplifying a buffered boundary.
///
/// A round join adds arc vertices at every convex corner, so repeated
/// buffering of a finely sampled curve doubles its vertex count each step
/// unless the result is simplified.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1e-3;

/// How offset edges are joined at polygon vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStyle {
    /// Circular arcs around convex vertices; models uniform surface regression.
    #[default]
    Round,
    /// Offset edges extended until they meet.
    Mitre,
}

/// Style parameters for [`Buffer2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferStyle {
    pub join: JoinStyle,
    /// Largest distance a dropped vertex may lie from the simplified
    /// boundary. Zero disables simplification.
    pub simplify_tolerance: f64,
}

impl Default for BufferStyle {
    fn default() -> Self {
        Self::round()
    }
}

impl BufferStyle {
    /// Round-joined buffering.
    #[must_use]
    pub fn round() -> Self {
        Self {
            join: JoinStyle::Round,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }

    /// Mitre-joined buffering.
    #[must_use]
    pub fn mitre() -> Self {
        Self {
            join: JoinStyle::Mitre,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }

    /// Sets the simplification tolerance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the tolerance is
    /// negative or not finite.
    pub fn with_simplify_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "simplify_tolerance",
                value: tolerance,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }
        self.simplify_tolerance = tolerance;
        Ok(self)
    }
}

/// Offsets (buffers) a shape by a signed distance.
///
/// Positive distance grows the shape, negative distance shrinks it. Parts
/// that collapse under a negative offset disappear; an empty input gives an
/// empty output. The result is simplified with the style's tolerance, which
/// keeps the vertex count bounded across repeated offsets.
#[derive(Debug)]
pub struct Buffer2D<'a> {
    shape: &'a Shape,
    distance: f64,
    style: BufferStyle,
}

impl<'a> Buffer2D<'a> {
    /// Creates a new round-joined buffer operation.
    #[must_use]
    pub fn new(shape: &'a Shape, distance: f64) -> Self {
        Self {
            shape,
            distance,
            style: BufferStyle::round(),
        }
    }

    /// Sets the buffer style.
    #[must_use]
    pub fn with_style(mut self, style: BufferStyle) -> Self {
        self.style = style;
        self
    }

    /// Executes the buffer.
    #[must_use]
    pub fn execute(&self) -> Shape {
        if self.shape.0.is_empty() {
            return MultiPolygon::new(Vec::new());
        }
        if self.distance.abs() < TOLERANCE {
            return self.shape.clone();
        }
        let buffered = match self.style.join {
            JoinStyle::Round => buffer_multi_polygon_rounded(self.shape, self.distance),
            JoinStyle::Mitre => buffer_multi_polygon(self.shape, self.distance),
        };
        if self.style.simplify_tolerance > 0.0 {
            buffered.simplify(&self.style.simplify_tolerance)
        } else {
            buffered
        }
    }
}
