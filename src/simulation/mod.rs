//! Stepwise burn regression of a grain.

use tracing::{debug, info};

use crate::error::{OperationError, Result};
use crate::grain::GrainShape;
use crate::metrics::{validate_tolerance, BurnMetrics, MetricExtractor, DEFAULT_SLIVER_TOLERANCE};

pub use crate::grain::ShapeHistory;

/// Metrics recorded after one regression step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMetrics {
    /// Step number, starting at 1.
    pub step: usize,
    /// Simulated time at the end of the step.
    pub time: f64,
    /// Offset distance applied in this step.
    pub distance: f64,
    pub area: f64,
    pub raw_perimeter: f64,
    pub wetted_perimeter: f64,
    pub hydraulic_diameter: Option<f64>,
}

impl StepMetrics {
    fn new(step: usize, time: f64, distance: f64, metrics: BurnMetrics) -> Self {
        Self {
            step,
            time,
            distance,
            area: metrics.area,
            raw_perimeter: metrics.raw_perimeter,
            wetted_perimeter: metrics.wetted_perimeter,
            hydraulic_diameter: metrics.hydraulic_diameter,
        }
    }
}

/// One row of a run's time series: `(time, area, wetted perimeter,
/// hydraulic diameter)`.
pub type SeriesRow = (f64, f64, f64, Option<f64>);

/// The shapes and metrics produced by one simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimulationRun {
    history: ShapeHistory,
    metrics: Vec<StepMetrics>,
}

impl SimulationRun {
    /// Returns the clipped shape of every step, in order. The entries are
    /// the ones the grain recorded, not copies.
    #[must_use]
    pub fn history(&self) -> &ShapeHistory {
        &self.history
    }

    /// Returns the metrics of every step, in order.
    #[must_use]
    pub fn metrics(&self) -> &[StepMetrics] {
        &self.metrics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Returns the scalar time series of the run.
    #[must_use]
    pub fn series(&self) -> Vec<SeriesRow> {
        self.metrics
            .iter()
            .map(|m| (m.time, m.area, m.wetted_perimeter, m.hydraulic_diameter))
            .collect()
    }

}

/// Drives a grain through a fixed number of offset steps.
///
/// Empty intersections are valid terminal states; the run continues through
/// them and reports zero area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionSimulator {
    steps: usize,
    distance_per_step: f64,
    timestep: f64,
    tolerance: f64,
}

impl RegressionSimulator {
    /// Creates a simulator.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the distance is not finite
    /// or the timestep is not positive and finite.
    pub fn new(steps: usize, distance_per_step: f64, timestep: f64) -> Result<Self> {
        if !distance_per_step.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "regression per step must be finite, got {distance_per_step}"
            ))
            .into());
        }
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "timestep must be positive, got {timestep}"
            ))
            .into());
        }
        Ok(Self {
            steps,
            distance_per_step,
            timestep,
            tolerance: DEFAULT_SLIVER_TOLERANCE,
        })
    }

    /// Sets the tolerance handed to the metric extractor.
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
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn distance_per_step(&self) -> f64 {
        self.distance_per_step
    }

    #[must_use]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Runs all steps at the fixed regression distance.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics of a step cannot be computed.
    pub fn run(&self, grain: &mut GrainShape) -> Result<SimulationRun> {
        let distance = self.distance_per_step;
        self.run_with(grain, |_| Some(distance))
    }

    /// Runs up to `steps` steps, asking `rate` for each step's distance.
    ///
    /// `rate` sees the metrics of the previous step (`None` before the
    /// first) and returns `None` to stop early.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics of a step cannot be computed.
    pub fn run_with<F>(&self, grain: &mut GrainShape, mut rate: F) -> Result<SimulationRun>
    where
        F: FnMut(Option<&StepMetrics>) -> Option<f64>,
    {
        info!(
            steps = self.steps,
            distance = self.distance_per_step,
            timestep = self.timestep,
            "starting regression"
        );
        let start = grain.history().len();
        let mut run = SimulationRun::default();

        for step in 1..=self.steps {
            let Some(distance) = rate(run.metrics.last()) else {
                info!(step, "regression stopped by rate");
                break;
            };

            let shape = grain.step(distance);
            let extractor = MetricExtractor::new(grain.casing()).with_tolerance(self.tolerance)?;
            let burn = extractor.measure(&shape)?;
            #[allow(clippy::cast_precision_loss)]
            let time = step as f64 * self.timestep;
            let metrics = StepMetrics::new(step, time, distance, burn);

            debug!(
                step,
                time,
                area = metrics.area,
                wetted = metrics.wetted_perimeter,
                "regression step"
            );
            run.metrics.push(metrics);
        }
        run.history = grain.history().since(start);

        info!(steps = run.len(), "regression finished");
        Ok(run)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod scenario_tests;
