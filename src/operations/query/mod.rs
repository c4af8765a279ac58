//! Scalar and predicate queries over shapes.

use geo::{Area, Centroid, EuclideanLength, Polygon, Relate};

use crate::geometry::Shape;
use crate::math::distance_2d::point_to_ring_dist;
use crate::math::Point2;

/// Returns the unsigned area of a shape.
#[must_use]
pub fn area(shape: &Shape) -> f64 {
    shape.unsigned_area()
}

/// Returns the total boundary length of a shape: exterior and interior
/// rings of every part.
#[must_use]
pub fn perimeter(shape: &Shape) -> f64 {
    shape.0.iter().map(polygon_perimeter).sum()
}

/// Returns the boundary length of a single polygon.
#[must_use]
pub fn polygon_perimeter(polygon: &Polygon<f64>) -> f64 {
    polygon.exterior().euclidean_length()
        + polygon
            .interiors()
            .iter()
            .map(|ring| ring.euclidean_length())
            .sum::<f64>()
}

/// Returns the area centroid of a shape, or `None` if it is empty.
#[must_use]
pub fn centroid(shape: &Shape) -> Option<Point2> {
    shape.centroid().map(|c| Point2::new(c.x(), c.y()))
}

/// Returns whether `outer` contains `inner` (no point of `inner` outside
/// `outer`, and the interiors meet). An empty `inner` is never contained.
#[must_use]
pub fn contains(outer: &Shape, inner: &Shape) -> bool {
    if outer.0.is_empty() || inner.0.is_empty() {
        return false;
    }
    outer.relate(inner).is_contains()
}

/// Returns the smallest distance from any vertex of `shape` to the exterior
/// rings of `wall`.
///
/// Returns `f64::INFINITY` when either shape is empty.
#[must_use]
pub fn clearance(shape: &Shape, wall: &Shape) -> f64 {
    let wall_rings = exterior_coordinates(wall);
    let wall_rings = &wall_rings;
    exterior_coordinates(shape)
        .iter()
        .flatten()
        .flat_map(move |p| wall_rings.iter().map(move |ring| point_to_ring_dist(p, ring)))
        .fold(f64::INFINITY, f64::min)
}

/// Returns the exterior ring of each part, without the closing repeat.
#[must_use]
pub fn exterior_coordinates(shape: &Shape) -> Vec<Vec<Point2>> {
    shape
        .0
        .iter()
        .map(|polygon| {
            let coords = &polygon.exterior().0;
            let open_len = if coords.len() > 1 && coords.first() == coords.last() {
                coords.len() - 1
            } else {
                coords.len()
            };
            coords[..open_len]
                .iter()
                .map(|c| Point2::new(c.x, c.y))
                .collect()
        })
        .collect()
}

/// Returns the part with the largest area, if any.
#[must_use]
pub fn largest_part(shape: &Shape) -> Option<&Polygon<f64>> {
    shape
        .0
        .iter()
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use geo::{polygon, MultiPolygon};

    fn square(x0: f64, y0: f64, side: f64) -> Shape {
        MultiPolygon::new(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + side, y: y0),
            (x: x0 + side, y: y0 + side),
            (x: x0, y: y0 + side),
        ]])
    }

    #[test]
    fn square_area_perimeter_centroid() {
        let s = square(1.0, 1.0, 2.0);
        assert!((area(&s) - 4.0).abs() < 1e-12);
        assert!((perimeter(&s) - 8.0).abs() < 1e-12);
        let c = centroid(&s).unwrap();
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn perimeter_counts_holes() {
        let framed = MultiPolygon::new(vec![polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)]],
        )]);
        assert!((perimeter(&framed) - 24.0).abs() < 1e-12);
    }

    #[test]
    fn empty_shape_queries() {
        let empty = MultiPolygon::new(Vec::new());
        assert!(area(&empty).abs() < 1e-15);
        assert!(perimeter(&empty).abs() < 1e-15);
        assert!(centroid(&empty).is_none());
        assert!(!contains(&square(0.0, 0.0, 1.0), &empty));
    }

    #[test]
    fn containment() {
        let outer = square(0.0, 0.0, 10.0);
        assert!(contains(&outer, &square(2.0, 2.0, 3.0)));
        assert!(!contains(&outer, &square(8.0, 8.0, 3.0)));
    }

    #[test]
    fn clearance_to_wall() {
        let wall = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 3.0, 4.0);
        assert!((clearance(&inner, &wall) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn exterior_coordinates_drop_closing_point() {
        let rings = exterior_coordinates(&square(0.0, 0.0, 1.0));
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
    }

    #[test]
    fn largest_part_by_area() {
        let mut shape = square(0.0, 0.0, 1.0);
        shape.0.extend(square(5.0, 5.0, 3.0));
        let big = largest_part(&shape).unwrap();
        assert!((big.unsigned_area() - 9.0).abs() < 1e-12);
    }
}
