pub mod curve;
pub mod path;
pub mod ring;

pub use curve::{ArcSegment, Curve, LineSegment};
pub use path::{Path, PathPrimitive, Segment};
pub use ring::CoordinateRing;

/// The polygon value type handed to and returned by the geometry engine.
///
/// A multi-polygon so that clipped, split and fully burned (empty) shapes
/// share one representation.
pub type Shape = geo::MultiPolygon<f64>;
