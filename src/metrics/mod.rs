//! Burn metrics of a clipped grain shape.
//!
//! The wetted perimeter excludes the part of the grain boundary that lies
//! on the casing wall. It is derived from three perimeters: the grain's, the
//! casing's and that of the largest gap between them (the sliver).

use tracing::warn;

use crate::error::{GeometryError, MetricError, Result};
use crate::geometry::Shape;
use crate::grain::CasingBoundary;
use crate::operations::boolean::SymmetricDifference;
use crate::operations::query::{self, clearance, contains, largest_part, polygon_perimeter};

/// Default snapping grid and wall-contact distance.
pub const DEFAULT_SLIVER_TOLERANCE: f64 = 1e-4;

/// Symmetric copies of the sliver around a centred grain; only the largest
/// one is measured.
const SLIVER_MULTIPLICITY: f64 = 4.0;

/// Metrics of one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnMetrics {
    pub area: f64,
    pub raw_perimeter: f64,
    pub wetted_perimeter: f64,
    /// `None` when the wetted perimeter vanishes.
    pub hydraulic_diameter: Option<f64>,
}

/// Computes burn metrics of shapes clipped to one casing.
#[derive(Debug, Clone, Copy)]
pub struct MetricExtractor<'a> {
    casing: &'a CasingBoundary,
    tolerance: f64,
}

impl<'a> MetricExtractor<'a> {
    /// Creates an extractor with the default tolerance.
    #[must_use]
    pub fn new(casing: &'a CasingBoundary) -> Self {
        Self {
            casing,
            tolerance: DEFAULT_SLIVER_TOLERANCE,
        }
    }

    /// Sets the snapping grid used for the sliver and the distance below
    /// which a grain counts as touching the wall.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` unless the tolerance is
    /// positive and finite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.tolerance = validate_tolerance(tolerance)?;
        Ok(self)
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn area(&self, shape: &Shape) -> f64 {
        query::area(shape)
    }

    /// Returns the full boundary length, wall contact included.
    #[must_use]
    pub fn raw_perimeter(&self, shape: &Shape) -> f64 {
        query::perimeter(shape)
    }

    /// Returns whether the casing contains `shape` without touching its wall.
    #[must_use]
    pub fn is_clear_of_wall(&self, shape: &Shape) -> bool {
        contains(self.casing.shape(), shape) && clearance(shape, self.casing.shape()) > self.tolerance
    }

    /// Returns the length of `shape`'s boundary lying on the casing wall.
    ///
    /// Zero while the grain is clear of the wall or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the symmetric difference cannot be computed.
    pub fn wall_contact_length(&self, shape: &Shape) -> Result<f64> {
        if shape.0.is_empty() || self.is_clear_of_wall(shape) {
            return Ok(0.0);
        }

        let casing = self.casing.perimeter();
        let grain = self.raw_perimeter(shape);
        let sliver = SymmetricDifference::new(shape, self.casing.shape())
            .with_grid_size(self.tolerance)
            .execute()?;
        let sliver_length = largest_part(&sliver).map_or(0.0, polygon_perimeter);

        let exposed_casing = (casing + SLIVER_MULTIPLICITY * sliver_length - grain) / 2.0;
        Ok((casing - exposed_casing).clamp(0.0, grain))
    }

    /// Returns the boundary length exposed to combustion.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall contact cannot be computed.
    pub fn wetted_perimeter(&self, shape: &Shape) -> Result<f64> {
        let contact = self.wall_contact_length(shape)?;
        Ok((self.raw_perimeter(shape) - contact).max(0.0))
    }

    /// Returns `4 * area / wetted_perimeter`.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::DegenerateMetric` if the wetted perimeter is
    /// not above the tolerance, including for an empty shape.
    pub fn hydraulic_diameter(&self, shape: &Shape) -> Result<f64> {
        let wetted = self.wetted_perimeter(shape)?;
        Ok(hydraulic_diameter(self.area(shape), wetted, self.tolerance)?)
    }

    /// Computes all metrics of `shape` in one pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall contact cannot be computed. A degenerate
    /// hydraulic diameter is reported as `None`, not as an error.
    pub fn measure(&self, shape: &Shape) -> Result<BurnMetrics> {
        let area = self.area(shape);
        let raw_perimeter = self.raw_perimeter(shape);
        let wetted_perimeter = self.wetted_perimeter(shape)?;
        let hydraulic_diameter = match hydraulic_diameter(area, wetted_perimeter, self.tolerance) {
            Ok(d) => Some(d),
            Err(MetricError::DegenerateMetric { area }) => {
                warn!(area, raw_perimeter, "hydraulic diameter undefined");
                None
            }
        };
        Ok(BurnMetrics {
            area,
            raw_perimeter,
            wetted_perimeter,
            hydraulic_diameter,
        })
    }
}

/// Checks a sliver tolerance: it is both a snapping grid and a distance,
/// so it must be positive and finite.
pub(crate) fn validate_tolerance(tolerance: f64) -> Result<f64> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "sliver_tolerance",
            value: tolerance,
            min: f64::MIN_POSITIVE,
            max: f64::MAX,
        }
        .into());
    }
    Ok(tolerance)
}

fn hydraulic_diameter(
    area: f64,
    wetted_perimeter: f64,
    tolerance: f64,
) -> std::result::Result<f64, MetricError> {
    if wetted_perimeter <= tolerance {
        return Err(MetricError::DegenerateMetric { area });
    }
    Ok(4.0 * area / wetted_perimeter)
}
