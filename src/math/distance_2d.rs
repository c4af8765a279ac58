use super::Point2;

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn point_dist(a: &Point2, b: &Point2) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = ax + t * dx;
    let closest_y = ay + t * dy;

    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}

/// Returns the minimum distance from `point` to a closed ring of points.
///
/// The ring is treated as closed whether or not the last point repeats the
/// first. Returns `f64::INFINITY` for an empty ring.
#[must_use]
pub fn point_to_ring_dist(point: &Point2, ring: &[Point2]) -> f64 {
    match ring.len() {
        0 => f64::INFINITY,
        1 => point_dist(point, &ring[0]),
        n => (0..n)
            .map(|i| {
                let a = &ring[i];
                let b = &ring[(i + 1) % n];
                point_to_segment_dist(point.x, point.y, a.x, a.y, b.x, b.y)
            })
            .fold(f64::INFINITY, f64::min),
    }
}
