mod tessellate_path;

pub use tessellate_path::TessellatePath;

use crate::error::{GeometryError, Result};

/// Arc sampling density used for grain profiles.
pub const GRAIN_STEPS_PER_UNIT: f64 = 5.0;

/// Arc sampling density used for the casing boundary.
pub const CASING_STEPS_PER_UNIT: f64 = 1.0;

/// Parameters controlling path tessellation density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Number of arc samples emitted per unit of arc length.
    pub steps_per_unit_length: f64,
}

impl TessellationParams {
    /// Creates tessellation parameters with the given density.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not a positive finite number.
    pub fn new(steps_per_unit_length: f64) -> Result<Self> {
        if !(steps_per_unit_length.is_finite() && steps_per_unit_length > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "steps_per_unit_length",
                value: steps_per_unit_length,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self {
            steps_per_unit_length,
        })
    }

    /// Parameters for the casing boundary.
    #[must_use]
    pub fn casing() -> Self {
        Self {
            steps_per_unit_length: CASING_STEPS_PER_UNIT,
        }
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            steps_per_unit_length: GRAIN_STEPS_PER_UNIT,
        }
    }
}
