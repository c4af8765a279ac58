use crate::error::{GeometryError, Result};

/// Physical length of the scale bar drawn next to a grain profile.
pub const DEFAULT_REFERENCE_LENGTH: f64 = 10.0;

/// Conversion from source path units to physical units.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Creates a scale factor from its raw value.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` unless `value` is
    /// positive and finite.
    pub fn new(value: f64) -> Result<Self> {
        if !(value.is_finite() && value > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "scale",
                value,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Derives the factor mapping a reference segment of `segment_length`
    /// source units onto `reference_length` physical units.
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio is not positive and finite, e.g. for a
    /// zero-length reference segment.
    pub fn from_reference(reference_length: f64, segment_length: f64) -> Result<Self> {
        if !(segment_length.is_finite() && segment_length > 0.0) {
            return Err(GeometryError::Degenerate(format!(
                "reference segment length must be positive, got {segment_length}"
            ))
            .into());
        }
        Self::new(reference_length / segment_length)
    }

    /// The identity scale, for paths already in physical units.
    #[must_use]
    pub fn identity() -> Self {
        Self(1.0)
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::identity()
    }
}
