//! Simulation settings loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::grain::{CasingBoundary, DEFAULT_CASING_RADIUS, DEFAULT_REFERENCE_LENGTH};
use crate::math::{Point2, Vector2};
use crate::metrics::{MetricExtractor, DEFAULT_SLIVER_TOLERANCE};
use crate::operations::offset::{BufferStyle, DEFAULT_SIMPLIFY_TOLERANCE};
use crate::simulation::RegressionSimulator;
use crate::tessellation::{TessellationParams, CASING_STEPS_PER_UNIT, GRAIN_STEPS_PER_UNIT};

/// Settings for one simulation run. Every field is optional in the file.
///
/// ```toml
/// steps = 40
/// regression_per_step = 0.5
/// timestep = 0.05
/// casing_radii = [42.8625, 42.8625]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Arc samples per millimetre of grain profile.
    pub grain_steps_per_unit: f64,
    /// Arc samples per millimetre of casing wall.
    pub casing_steps_per_unit: f64,
    /// Casing radii along x and y.
    pub casing_radii: [f64; 2],
    /// Point the grain centroid and the casing are placed on.
    pub center: [f64; 2],
    /// Physical length of the drawing's scale bar.
    pub reference_length: f64,
    pub steps: usize,
    /// Signed offset per step; positive burns outward.
    pub regression_per_step: f64,
    pub timestep: f64,
    pub sliver_tolerance: f64,
    /// Chord tolerance for simplifying each offset boundary; zero keeps
    /// every vertex.
    pub simplify_tolerance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grain_steps_per_unit: GRAIN_STEPS_PER_UNIT,
            casing_steps_per_unit: CASING_STEPS_PER_UNIT,
            casing_radii: [DEFAULT_CASING_RADIUS, DEFAULT_CASING_RADIUS],
            center: [0.0, 0.0],
            reference_length: DEFAULT_REFERENCE_LENGTH,
            steps: 30,
            regression_per_step: 1.0,
            timestep: 1.0,
            sliver_tolerance: DEFAULT_SLIVER_TOLERANCE,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`SimulationConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&source)
    }

    /// Checks that every quantity is in range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        positive("grain_steps_per_unit", self.grain_steps_per_unit)?;
        positive("casing_steps_per_unit", self.casing_steps_per_unit)?;
        positive("casing_radii[0]", self.casing_radii[0])?;
        positive("casing_radii[1]", self.casing_radii[1])?;
        positive("reference_length", self.reference_length)?;
        positive("timestep", self.timestep)?;
        positive("sliver_tolerance", self.sliver_tolerance)?;
        if !(self.simplify_tolerance.is_finite() && self.simplify_tolerance >= 0.0) {
            return Err(invalid("simplify_tolerance", "must be non-negative"));
        }
        if !self.regression_per_step.is_finite() {
            return Err(invalid("regression_per_step", "must be finite"));
        }
        if !(self.center[0].is_finite() && self.center[1].is_finite()) {
            return Err(invalid("center", "must be finite"));
        }
        Ok(())
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.center[0], self.center[1])
    }

    /// Tessellation parameters for grain profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not positive.
    pub fn grain_params(&self) -> Result<TessellationParams> {
        TessellationParams::new(self.grain_steps_per_unit)
    }

    /// Builds the casing described by this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the radii or density are invalid.
    pub fn casing(&self) -> Result<CasingBoundary> {
        CasingBoundary::with_params(
            Vector2::new(self.casing_radii[0], self.casing_radii[1]),
            self.center(),
            TessellationParams::new(self.casing_steps_per_unit)?,
        )
    }

    /// Builds the simulator described by this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the step distance or timestep are invalid.
    pub fn simulator(&self) -> Result<RegressionSimulator> {
        RegressionSimulator::new(self.steps, self.regression_per_step, self.timestep)?
            .with_tolerance(self.sliver_tolerance)
    }

    /// Builds a metric extractor over `casing` with this config's tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not positive.
    pub fn extractor<'a>(&self, casing: &'a CasingBoundary) -> Result<MetricExtractor<'a>> {
        MetricExtractor::new(casing).with_tolerance(self.sliver_tolerance)
    }

    /// Round-join buffer style with this config's simplification tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative.
    pub fn buffer_style(&self) -> Result<BufferStyle> {
        BufferStyle::round().with_simplify_tolerance(self.simplify_tolerance)
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be positive, got {value}")))
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::GrainError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GrainError;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = SimulationConfig::from_toml_str(
            r"
            steps = 12
            regression_per_step = 0.25
            casing_radii = [30.0, 25.0]
            ",
        )
        .unwrap();
        assert_eq!(config.steps, 12);
        assert!((config.regression_per_step - 0.25).abs() < 1e-12);
        assert!((config.casing_radii[1] - 25.0).abs() < 1e-12);
        assert!((config.timestep - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_timestep() {
        let err = SimulationConfig::from_toml_str("timestep = 0.0").unwrap_err();
        assert!(matches!(
            err,
            GrainError::Config(ConfigError::Invalid { field: "timestep", .. })
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SimulationConfig::from_toml_str("steps = [").unwrap_err();
        assert!(matches!(err, GrainError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_path("/nonexistent/grainburn.toml").unwrap_err();
        assert!(matches!(err, GrainError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn builds_runtime_objects() {
        let config = SimulationConfig {
            steps: 3,
            timestep: 0.1,
            ..SimulationConfig::default()
        };
        let simulator = config.simulator().unwrap();
        assert_eq!(simulator.steps(), 3);
        let casing = config.casing().unwrap();
        assert!((casing.radii().x - DEFAULT_CASING_RADIUS).abs() < 1e-12);
        assert!((config.extractor(&casing).unwrap().tolerance() - DEFAULT_SLIVER_TOLERANCE).abs() < 1e-15);
        let style = config.buffer_style().unwrap();
        assert!((style.simplify_tolerance - DEFAULT_SIMPLIFY_TOLERANCE).abs() < 1e-15);
    }

    #[test]
    fn rejects_negative_simplify_tolerance() {
        let err = SimulationConfig::from_toml_str("simplify_tolerance = -0.5").unwrap_err();
        assert!(matches!(
            err,
            GrainError::Config(ConfigError::Invalid { field: "simplify_tolerance", .. })
        ));
    }
}
