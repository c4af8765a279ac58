use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel (including collinear) segments report no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Endpoints count as touching.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = a0 + da * t_clamped;
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Finds the first pair of non-adjacent edges of a closed ring that cross.
///
/// Returns the edge indices `(i, j)` with `i < j`, where edge `k` runs from
/// `ring[k]` to `ring[(k + 1) % n]`.
#[must_use]
pub fn find_ring_self_intersection(ring: &[Point2]) -> Option<(usize, usize)> {
    let n = ring.len();
    if n < 4 {
        return None;
    }
    for i in 0..n {
        for j in (i + 2)..n {
            // First and last edges share the closing vertex.
            if i == 0 && j == n - 1 {
                continue;
            }
            let hit = segment_segment_intersect_2d(
                &ring[i],
                &ring[(i + 1) % n],
                &ring[j],
                &ring[(j + 1) % n],
            );
            if hit.is_some() {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments() {
        let (pt, t, u) = segment_segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert!((pt.x - 1.0).abs() < 1e-12);
        assert!((pt.y - 1.0).abs() < 1e-12);
        assert!((t - 0.5).abs() < 1e-12);
        assert!((u - 0.5).abs() < 1e-12);
    }

    #[test]
    fn disjoint_segments() {
        let hit = segment_segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(1.0, 2.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn simple_square_has_no_self_intersection() {
        let ring = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(find_ring_self_intersection(&ring).is_none());
    }

    #[test]
    fn bowtie_self_intersects() {
        let ring = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(find_ring_self_intersection(&ring), Some((0, 2)));
    }
}
