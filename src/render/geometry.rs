//! Rounded-rectangle clip shape

/// Signed distance from a tile-local point to a centred rounded rectangle
///
/// Negative inside, positive outside. The corner radius is clamped to half
/// the shorter side.
pub fn rounded_rect_distance(point: (f64, f64), half_width: f64, half_height: f64, radius: f64) -> f64 {
    let radius = radius.min(half_width).min(half_height).max(0.0);
    let qx = point.0.abs() - (half_width - radius);
    let qy = point.1.abs() - (half_height - radius);

    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Fraction of a pixel covered by a shape given the distance at its centre
pub fn edge_coverage(distance: f64) -> f64 {
    (0.5 - distance).clamp(0.0, 1.0)
}
