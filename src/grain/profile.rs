use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, Path, PathPrimitive};

use super::scale::ScaleFactor;

/// A grain drawing split into its parts.
///
/// The drawing convention: the two longest primitives are the halves of the
/// outer wall, the first remaining primitive is the scale bar, and every
/// primitive after that belongs to the inner grain boundary.
#[derive(Debug, Clone)]
pub struct GrainProfile {
    outer: Path,
    scale_bar: PathPrimitive,
    inner: Path,
    scale: ScaleFactor,
}

impl GrainProfile {
    /// Splits a decomposed drawing into outer wall, scale bar and inner
    /// boundary, deriving the scale from the bar's `reference_length`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedInput` if the drawing has fewer than
    /// four primitives, and an error if the scale bar has zero length.
    pub fn from_subpaths(drawing: &Path, reference_length: f64) -> Result<Self> {
        if drawing.len() < 4 {
            return Err(GeometryError::MalformedInput(format!(
                "grain drawing needs an outer wall, a scale bar and an inner boundary, got {} primitives",
                drawing.len()
            ))
            .into());
        }

        let mut rest = drawing.primitives.clone();
        let mut outer = Path::default();
        for _ in 0..2 {
            if let Some(idx) = longest_index(&rest) {
                outer.primitives.push(rest.remove(idx));
            }
        }
        let scale_bar = rest.remove(0);
        let inner = Path::new(rest);
        let scale = ScaleFactor::from_reference(reference_length, scale_bar.length())?;

        debug!(
            inner_primitives = inner.len(),
            scale = scale.value(),
            "split grain drawing"
        );
        Ok(Self {
            outer,
            scale_bar,
            inner,
            scale,
        })
    }

    /// Returns the outer wall in source units.
    #[must_use]
    pub fn outer(&self) -> &Path {
        &self.outer
    }

    /// Returns the inner grain boundary in source units.
    #[must_use]
    pub fn inner(&self) -> &Path {
        &self.inner
    }

    /// Returns the scale bar in source units.
    #[must_use]
    pub fn scale_bar(&self) -> &PathPrimitive {
        &self.scale_bar
    }

    /// Returns the source-to-physical scale factor.
    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Returns the outer wall in physical units.
    #[must_use]
    pub fn scaled_outer(&self) -> Path {
        self.outer.scaled(self.scale.value())
    }

    /// Returns the inner grain boundary in physical units.
    #[must_use]
    pub fn scaled_inner(&self) -> Path {
        self.inner.scaled(self.scale.value())
    }
}

/// Index of the first primitive of maximal length.
fn longest_index(primitives: &[PathPrimitive]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in primitives.iter().enumerate() {
        let len = p.length();
        if best.map_or(true, |(_, l)| len > l) {
            best = Some((i, len));
        }
    }
    best.map(|(i, _)| i)
}
