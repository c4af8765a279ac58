use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::geometry::{CoordinateRing, Segment};
use crate::math::distance_2d::point_dist;
use crate::math::Point2;

new_key_type! {
    /// Key of a segment still waiting to be chained.
    struct SegmentKey;
}

/// Segments held back from chaining; the ring closes over them implicitly.
const RESERVED_TAIL: usize = 3;

/// Orders an unordered bag of segments into one boundary ring by greedy
/// nearest-endpoint chaining.
///
/// # Algorithm
///
/// 1. The first segment seeds the chain: its end is emitted and its start
///    becomes the frontier.
/// 2. `remaining - 3` times: emit the frontier, scan every remaining segment
///    for the endpoint nearest the frontier, emit that near endpoint and make
///    the far endpoint the new frontier.
/// 3. The emitted points, with consecutive duplicates collapsed, form the ring.
///
/// The last three segments are never visited and the final frontier is never
/// emitted. For densely sampled closed curves this drops a short run of
/// points next to the seed, which the implicit closing edge bridges.
///
/// # Tie-breaking
///
/// Remaining segments are scanned in input order; the first segment reaching
/// the strict minimum distance wins. Within a segment the start is the near
/// end only when it is strictly closer than the end.
///
/// # Preconditions
///
/// The segments must sample a single simple closed curve. Disconnected or
/// self-crossing input yields an invalid ring without an error; use
/// [`CoordinateRing::validate`] when the source is untrusted.
#[derive(Debug)]
pub struct SequenceBoundary {
    segments: Vec<Segment>,
}

/// The nearest endpoint found during one scan.
struct Candidate {
    key: SegmentKey,
    near: Point2,
    far: Point2,
    distance: f64,
}

impl SequenceBoundary {
    /// Creates a new sequencing operation.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Executes the chaining, returning the ordered ring.
    #[must_use]
    pub fn execute(self) -> CoordinateRing {
        let mut segments = self.segments.into_iter();
        let Some(seed) = segments.next() else {
            return CoordinateRing::default();
        };

        let mut remaining: SlotMap<SegmentKey, Segment> = SlotMap::with_key();
        for segment in segments {
            remaining.insert(segment);
        }

        let iterations = remaining.len().saturating_sub(RESERVED_TAIL);
        let mut points = Vec::with_capacity(1 + 2 * iterations);
        points.push(seed.end);
        let mut frontier = seed.start;

        for _ in 0..iterations {
            points.push(frontier);
            let Some(best) = nearest_endpoint(&remaining, &frontier) else {
                break;
            };
            frontier = best.far;
            points.push(best.near);
            remaining.remove(best.key);
        }

        debug!(
            chained = iterations,
            unvisited = remaining.len(),
            "sequenced boundary"
        );
        CoordinateRing::from_points(points)
    }
}

/// Scans all remaining segments for the endpoint closest to `frontier`.
fn nearest_endpoint(remaining: &SlotMap<SegmentKey, Segment>, frontier: &Point2) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (key, segment) in remaining {
        let d_start = point_dist(frontier, &segment.start);
        let d_end = point_dist(frontier, &segment.end);
        let (distance, near, far) = if d_start < d_end {
            (d_start, segment.start, segment.end)
        } else {
            (d_end, segment.end, segment.start)
        };
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(Candidate {
                key,
                near,
                far,
                distance,
            });
        }
    }
    best
}
