//! Interpolation functions.

/// Shorthand for the `linear` function.
///
/// `t` is clamped between `0` and `1`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    linear(a, b, t)
}

/// Linearly interpolates between `a` and `b` based on the value of `t`.
///
/// `t` is clamped between `0` and `1`.
pub fn linear(a: f64, b: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return a;
    } else if t == 1.0 {
        return b;
    }

    t.mul_add(b - a, a)
}
