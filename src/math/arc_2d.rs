/// 2D arc math utilities.
///
/// Arcs are described in center form: center, radii `(rx, ry)`, a start
/// angle and a signed sweep.
/// - `sweep > 0`: counter-clockwise arc
/// - `sweep < 0`: clockwise arc
/// - `rx == ry`: circular arc
use std::f64::consts::{PI, TAU};

/// Minimum number of chords used when integrating an elliptical arc length.
const MIN_LENGTH_SAMPLES: u32 = 64;

/// Converts a circular arc given by its endpoints to center form.
///
/// Follows the SVG endpoint convention: of the four candidate arcs through
/// the two points, `large_arc` picks the one sweeping more than π and `ccw`
/// picks the direction. A radius too small to span the chord is scaled up
/// to half the chord length.
///
/// Returns `(cx, cy, radius, start_angle, sweep)`, or `None` for a
/// zero-length chord or a non-positive radius.
#[must_use]
pub fn arc_from_endpoints(
    x0: f64, y0: f64,
    x1: f64, y1: f64,
    radius: f64,
    large_arc: bool,
    ccw: bool,
) -> Option<(f64, f64, f64, f64, f64)> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let chord_len = (dx * dx + dy * dy).sqrt();

    if chord_len < 1e-12 || radius <= 0.0 {
        return None;
    }

    let half_chord = chord_len * 0.5;
    let radius = radius.max(half_chord);
    let h = (radius * radius - half_chord * half_chord).max(0.0).sqrt();

    // Left normal of the chord; the small CCW arc has its center on this side.
    let nx = -dy / chord_len;
    let ny = dx / chord_len;
    let side = if large_arc == ccw { -1.0 } else { 1.0 };

    let cx = (x0 + x1) * 0.5 + side * h * nx;
    let cy = (y0 + y1) * 0.5 + side * h * ny;

    let start_angle = (y0 - cy).atan2(x0 - cx);
    let end_angle = (y1 - cy).atan2(x1 - cx);

    let mut sweep = end_angle - start_angle;
    if ccw {
        if sweep <= 0.0 {
            sweep += TAU;
        }
    } else if sweep >= 0.0 {
        sweep -= TAU;
    }

    Some((cx, cy, radius, start_angle, sweep))
}

/// Evaluates a point on an (elliptical) arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(
    cx: f64, cy: f64,
    rx: f64, ry: f64,
    start_angle: f64,
    sweep: f64,
    t: f64,
) -> (f64, f64) {
    let angle = start_angle + sweep * t;
    (cx + rx * angle.cos(), cy + ry * angle.sin())
}

/// Computes the length of an (elliptical) arc.
///
/// Circular arcs use `r * |sweep|` directly. Elliptical arcs are integrated
/// by summing chords, with the chord count growing with the sweep.
#[must_use]
pub fn arc_length(rx: f64, ry: f64, start_angle: f64, sweep: f64) -> f64 {
    if (rx - ry).abs() < 1e-12 {
        return rx.abs() * sweep.abs();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let samples = ((sweep.abs() / PI * f64::from(MIN_LENGTH_SAMPLES)).ceil() as u32)
        .max(MIN_LENGTH_SAMPLES);

    let mut length = 0.0;
    let (mut px, mut py) = arc_point_at(0.0, 0.0, rx, ry, start_angle, sweep, 0.0);
    for k in 1..=samples {
        let t = f64::from(k) / f64::from(samples);
        let (x, y) = arc_point_at(0.0, 0.0, rx, ry, start_angle, sweep, t);
        length += ((x - px).powi(2) + (y - py).powi(2)).sqrt();
        px = x;
        py = y;
    }
    length
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn quarter_circle_small_ccw() {
        // (1,0) → (0,1), small CCW arc around the origin.
        let (cx, cy, r, sa, sw) = arc_from_endpoints(1.0, 0.0, 0.0, 1.0, 1.0, false, true).unwrap();
        assert!(cx.abs() < 1e-9, "cx={cx}");
        assert!(cy.abs() < 1e-9, "cy={cy}");
        assert!((r - 1.0).abs() < TOL, "r={r}");
        assert!(sa.abs() < 1e-9, "start={sa}");
        assert!((sw - PI / 2.0).abs() < 1e-9, "sweep={sw}");
    }

    #[test]
    fn quarter_circle_large_ccw_goes_the_long_way() {
        // Same endpoints, large CCW arc: center at (1,1), sweep 3π/2.
        let (cx, cy, _, _, sw) = arc_from_endpoints(1.0, 0.0, 0.0, 1.0, 1.0, true, true).unwrap();
        assert!((cx - 1.0).abs() < 1e-9, "cx={cx}");
        assert!((cy - 1.0).abs() < 1e-9, "cy={cy}");
        assert!((sw - 1.5 * PI).abs() < 1e-9, "sweep={sw}");
    }

    #[test]
    fn semicircle_cw_goes_through_bottom() {
        // CW half circle from (1,0) to (-1,0) passes (0,-1).
        let (cx, cy, r, sa, sw) = arc_from_endpoints(1.0, 0.0, -1.0, 0.0, 1.0, false, false).unwrap();
        assert!((sw + PI).abs() < 1e-9, "sweep={sw}");
        let (mx, my) = arc_point_at(cx, cy, r, r, sa, sw, 0.5);
        assert!(mx.abs() < 1e-9, "mx={mx}");
        assert!((my + 1.0).abs() < 1e-9, "my={my}");
    }

    #[test]
    fn radius_too_small_is_scaled_to_half_chord() {
        let (_, _, r, _, sw) = arc_from_endpoints(0.0, 0.0, 4.0, 0.0, 0.5, false, true).unwrap();
        assert!((r - 2.0).abs() < TOL, "r={r}");
        assert!((sw.abs() - PI).abs() < 1e-9, "sweep={sw}");
    }

    #[test]
    fn zero_chord_has_no_arc() {
        assert!(arc_from_endpoints(1.0, 1.0, 1.0, 1.0, 1.0, false, true).is_none());
        assert!(arc_from_endpoints(0.0, 0.0, 1.0, 0.0, 0.0, false, true).is_none());
    }

    #[test]
    fn arc_point_endpoints() {
        let (x, y) = arc_point_at(2.0, 3.0, 1.0, 1.0, 0.0, PI, 1.0);
        assert!((x - 1.0).abs() < TOL, "x={x}");
        assert!((y - 3.0).abs() < 1e-9, "y={y}");
    }

    #[test]
    fn circular_arc_length() {
        let len = arc_length(2.0, 2.0, 0.0, -PI);
        assert!((len - 2.0 * PI).abs() < TOL, "len={len}");
    }

    #[test]
    fn elliptical_arc_length_close_to_ramanujan() {
        let (a, b) = (3.0_f64, 2.0_f64);
        let h = ((a - b) / (a + b)).powi(2);
        let full = PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
        let len = arc_length(a, b, 0.0, TAU);
        assert!((len - full).abs() / full < 1e-3, "len={len}, expected={full}");
    }
}
