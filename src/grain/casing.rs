use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::{ArcSegment, Path, Shape};
use crate::math::{Point2, Vector2};
use crate::operations::creation::MakePolygon;
use crate::operations::query::{exterior_coordinates, perimeter};
use crate::operations::sequence::SequenceBoundary;
use crate::tessellation::{TessellatePath, TessellationParams};

/// Inner wall radius of the reference motor casing, in millimetres.
pub const DEFAULT_CASING_RADIUS: f64 = 42.8625;

/// The fixed outer wall the grain cannot burn past.
///
/// Built once from an ellipse (upper and lower half arcs) pushed through the
/// same tessellation and sequencing as the grain profile, then never changed.
#[derive(Debug, Clone)]
pub struct CasingBoundary {
    center: Point2,
    radii: Vector2,
    shape: Shape,
    perimeter: f64,
    wall: Vec<Point2>,
}

impl CasingBoundary {
    /// Creates a casing with the default casing tessellation density.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is non-positive or the tessellated
    /// boundary is too coarse to form a polygon.
    pub fn new(radii: Vector2, center: Point2) -> Result<Self> {
        Self::with_params(radii, center, TessellationParams::casing())
    }

    /// Creates a circular casing of the reference radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary cannot be built.
    pub fn reference(center: Point2) -> Result<Self> {
        Self::new(Vector2::new(DEFAULT_CASING_RADIUS, DEFAULT_CASING_RADIUS), center)
    }

    /// Creates a casing with explicit tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is non-positive or the tessellated
    /// boundary is too coarse to form a polygon.
    pub fn with_params(radii: Vector2, center: Point2, params: TessellationParams) -> Result<Self> {
        let upper = ArcSegment::new(center, radii, 0.0, PI)?;
        let lower = ArcSegment::new(center, radii, PI, PI)?;
        let outline = Path::new(vec![upper.into(), lower.into()]);

        let segments = TessellatePath::new(&outline, params).execute();
        let ring = SequenceBoundary::new(segments).execute();
        let shape = MakePolygon::new(&ring).execute()?;

        let perimeter = perimeter(&shape);
        let wall = exterior_coordinates(&shape).into_iter().next().unwrap_or_default();
        Ok(Self {
            center,
            radii,
            shape,
            perimeter,
            wall,
        })
    }

    /// Returns the casing center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the casing radii along x and y.
    #[must_use]
    pub fn radii(&self) -> &Vector2 {
        &self.radii
    }

    /// Returns the casing region.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tessellated wall length.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Returns the tessellated wall points, without the closing repeat.
    #[must_use]
    pub fn wall(&self) -> &[Point2] {
        &self.wall
    }
}
