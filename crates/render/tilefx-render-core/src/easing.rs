//! Easing helpers: pure maps of normalized progress in [0, 1], used only to
//! shape alpha-blend curves.

/// Quadratic ease-out: fast start, decelerating into 1.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Cubic ease-in-out: accelerate below the midpoint, decelerate above it.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        (t - 1.0) * u * u + 1.0
    }
}
