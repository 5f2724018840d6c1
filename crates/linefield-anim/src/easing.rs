//! Easing curve for line segments.

/// Quadratic ease-in-out. Input is clamped to `[0, 1]`; the output is
/// monotonic with `ease(0) == 0` and `ease(1) == 1`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}
