//! The burning grain: its original profile, the casing it sits in, and the
//! regressed shape after each offset step.

mod casing;
mod history;
pub mod profile;
mod scale;

pub use casing::{CasingBoundary, DEFAULT_CASING_RADIUS};
pub use history::ShapeHistory;
pub use profile::GrainProfile;
pub use scale::{ScaleFactor, DEFAULT_REFERENCE_LENGTH};

use std::sync::Arc;

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{CoordinateRing, Path, Shape};
use crate::math::{Point2, TOLERANCE};
use crate::operations::boolean::Intersect;
use crate::operations::creation::MakePolygon;
use crate::operations::offset::{Buffer2D, BufferStyle};
use crate::operations::query::{area, centroid};
use crate::operations::sequence::SequenceBoundary;
use crate::operations::transform::{Scale, Translate};
use crate::tessellation::{TessellatePath, TessellationParams};

/// Grain state across a burn.
///
/// `original` is fixed at construction. Each offset replaces `current` with
/// a new buffered shape and `intersect` with `current` clipped to the casing;
/// every clipped shape is also appended to the history.
#[derive(Debug, Clone)]
pub struct GrainShape {
    original: Arc<Shape>,
    current: Arc<Shape>,
    intersect: Arc<Shape>,
    casing: CasingBoundary,
    scale: ScaleFactor,
    history: ShapeHistory,
    style: BufferStyle,
}

impl GrainShape {
    /// Builds a grain from a ring in source units.
    ///
    /// The ring is scaled about the origin by `scale`, then translated so its
    /// centroid lands on `center`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the ring has fewer than three
    /// points or encloses no area.
    pub fn new(
        ring: &CoordinateRing,
        scale: ScaleFactor,
        center: Point2,
        casing: CasingBoundary,
    ) -> Result<Self> {
        if ring.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "grain ring needs at least 3 points, got {}",
                ring.len()
            ))
            .into());
        }

        let polygon = MakePolygon::new(ring).execute()?;
        let scaled = Scale::new(&polygon, scale.value()).execute();
        if area(&scaled) <= TOLERANCE {
            return Err(GeometryError::Degenerate("grain ring encloses no area".into()).into());
        }
        let c = centroid(&scaled)
            .ok_or_else(|| GeometryError::Degenerate("grain polygon has no centroid".into()))?;
        let original = Arc::new(Translate::new(&scaled, center - c).execute());
        let intersect = Arc::new(Intersect::new(&original, casing.shape()).execute());

        debug!(
            points = ring.len(),
            scale = scale.value(),
            area = area(&original),
            "built grain"
        );
        Ok(Self {
            current: Arc::clone(&original),
            original,
            intersect,
            casing,
            scale,
            history: ShapeHistory::new(),
            style: BufferStyle::round(),
        })
    }

    /// Builds a grain from a path in source units.
    ///
    /// `params` gives the arc density in physical units; it is converted to
    /// source units with `scale` so the sampling is independent of the
    /// drawing's size.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is invalid or the sequenced ring is
    /// degenerate.
    pub fn from_path(
        path: &Path,
        params: TessellationParams,
        scale: ScaleFactor,
        center: Point2,
        casing: CasingBoundary,
    ) -> Result<Self> {
        let source_params = TessellationParams::new(params.steps_per_unit_length * scale.value())?;
        let segments = TessellatePath::new(path, source_params).execute();
        let ring = SequenceBoundary::new(segments).execute();
        Self::new(&ring, scale, center, casing)
    }

    /// Builds a grain from the inner boundary of a split drawing.
    ///
    /// # Errors
    ///
    /// See [`GrainShape::from_path`].
    pub fn from_profile(
        profile: &GrainProfile,
        params: TessellationParams,
        center: Point2,
        casing: CasingBoundary,
    ) -> Result<Self> {
        Self::from_path(profile.inner(), params, profile.scale(), center, casing)
    }

    /// Sets the buffer style used by subsequent offsets.
    #[must_use]
    pub fn with_buffer_style(mut self, style: BufferStyle) -> Self {
        self.style = style;
        self
    }

    /// Offsets the grain `count` times by `distance` and returns the clipped
    /// shape after each step.
    ///
    /// Positive distances burn outward. `current` is not reset between calls.
    pub fn offset(&mut self, count: usize, distance: f64) -> Vec<Arc<Shape>> {
        (0..count).map(|_| self.step(distance)).collect()
    }

    /// Performs one offset step.
    pub(crate) fn step(&mut self, distance: f64) -> Arc<Shape> {
        let next = Buffer2D::new(&self.current, distance)
            .with_style(self.style)
            .execute();
        self.current = Arc::new(next);
        self.intersect = Arc::new(Intersect::new(&self.current, self.casing.shape()).execute());
        self.history.push(Arc::clone(&self.intersect));
        Arc::clone(&self.intersect)
    }

    /// Restores the grain to its original shape. The history is kept.
    pub fn reset(&mut self) {
        self.current = Arc::clone(&self.original);
        self.intersect = Arc::new(Intersect::new(&self.original, self.casing.shape()).execute());
    }

    /// Returns the centred, scaled starting shape.
    #[must_use]
    pub fn original(&self) -> &Shape {
        &self.original
    }

    /// Returns the unclipped shape after the latest offset.
    #[must_use]
    pub fn current(&self) -> &Shape {
        &self.current
    }

    /// Returns the latest shape clipped to the casing.
    #[must_use]
    pub fn intersect(&self) -> &Arc<Shape> {
        &self.intersect
    }

    #[must_use]
    pub fn casing(&self) -> &CasingBoundary {
        &self.casing
    }

    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    #[must_use]
    pub fn history(&self) -> &ShapeHistory {
        &self.history
    }
}
