use tracing::debug;

use crate::geometry::{ArcSegment, Curve, Path, PathPrimitive, Segment};

use super::TessellationParams;

/// Lowers a mixed line/arc path into a flat list of segments.
///
/// Lines pass through unchanged. Each arc becomes
/// `ceil(arc_length * steps_per_unit_length)` zero-length segments placed at
/// parameters `k / steps` for `k` in `[0, steps)`: point markers rather than
/// chords, since the sequencer only consumes endpoint coordinates. The arc's
/// own end point is not emitted; the next primitive's start supplies it.
#[derive(Debug)]
pub struct TessellatePath<'a> {
    path: &'a Path,
    params: TessellationParams,
}

impl<'a> TessellatePath<'a> {
    /// Creates a new `TessellatePath` operation.
    #[must_use]
    pub fn new(path: &'a Path, params: TessellationParams) -> Self {
        Self { path, params }
    }

    /// Executes the tessellation, returning the unordered segment list.
    #[must_use]
    pub fn execute(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.path.len());
        for primitive in &self.path.primitives {
            match primitive {
                PathPrimitive::Line(line) => {
                    segments.push(Segment::new(line.start(), line.end()));
                }
                PathPrimitive::Arc(arc) => {
                    self.sample_arc(arc, &mut segments);
                }
            }
        }
        debug!(
            primitives = self.path.len(),
            segments = segments.len(),
            "tessellated path"
        );
        segments
    }

    fn sample_arc(&self, arc: &ArcSegment, out: &mut Vec<Segment>) {
        let steps = arc_step_count(arc.length(), self.params.steps_per_unit_length);
        out.extend((0..steps).map(|k| {
            let t = f64::from(k) / f64::from(steps);
            Segment::point(arc.point_at(t))
        }));
    }
}

/// Number of samples for an arc of the given length.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn arc_step_count(length: f64, steps_per_unit_length: f64) -> u32 {
    let steps = (length * steps_per_unit_length).ceil();
    if steps.is_finite() && steps > 0.0 {
        steps.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
