use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_from_endpoints, arc_length, arc_point_at};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::Curve;

/// An elliptical (or circular) arc in the plane.
///
/// Defined by a center, a radius pair along the x and y axes, a start angle
/// and a signed sweep (in radians). Positive sweep runs counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    center: Point2,
    radii: Vector2,
    start_angle: f64,
    sweep: f64,
}

impl ArcSegment {
    /// Creates a new elliptical arc.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive or any input is
    /// not finite.
    pub fn new(center: Point2, radii: Vector2, start_angle: f64, sweep: f64) -> Result<Self> {
        if radii.x < TOLERANCE || radii.y < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radii must be positive".into()).into());
        }
        if !(center.x.is_finite()
            && center.y.is_finite()
            && radii.x.is_finite()
            && radii.y.is_finite()
            && start_angle.is_finite()
            && sweep.is_finite())
        {
            return Err(GeometryError::Degenerate("arc parameters must be finite".into()).into());
        }
        Ok(Self {
            center,
            radii,
            start_angle,
            sweep,
        })
    }

    /// Creates a new circular arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn circular(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        Self::new(center, Vector2::new(radius, radius), start_angle, sweep)
    }

    /// Creates a circular arc through `start` and `end` using the SVG
    /// endpoint convention.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide or the radius is
    /// non-positive.
    pub fn from_endpoints(
        start: Point2,
        end: Point2,
        radius: f64,
        large_arc: bool,
        ccw: bool,
    ) -> Result<Self> {
        let (cx, cy, r, start_angle, sweep) =
            arc_from_endpoints(start.x, start.y, end.x, end.y, radius, large_arc, ccw)
                .ok_or_else(|| {
                    GeometryError::Degenerate(format!(
                        "no arc of radius {radius} between ({}, {}) and ({}, {})",
                        start.x, start.y, end.x, end.y
                    ))
                })?;
        Self::circular(Point2::new(cx, cy), r, start_angle, sweep)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radii along the x and y axes.
    #[must_use]
    pub fn radii(&self) -> &Vector2 {
        &self.radii
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns whether the arc runs counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.sweep > 0.0
    }

    /// Returns this arc scaled uniformly about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            center: Point2::from(self.center.coords * factor),
            radii: self.radii * factor,
            start_angle: self.start_angle,
            sweep: self.sweep,
        }
    }
}

impl Curve for ArcSegment {
    fn point_at(&self, t: f64) -> Point2 {
        let (x, y) = arc_point_at(
            self.center.x,
            self.center.y,
            self.radii.x,
            self.radii.y,
            self.start_angle,
            self.sweep,
            t,
        );
        Point2::new(x, y)
    }

    fn length(&self) -> f64 {
        arc_length(self.radii.x, self.radii.y, self.start_angle, self.sweep)
    }
}
