//! Scalar helpers shared by the 2D code.

/// One full turn in radians, `2π`.
pub const TAU: f64 = std::f64::consts::TAU;

/// Smallest magnitude treated as non-zero (see `geom2::vector::unit`).
pub const EPSILON: f64 = 1e-10;

/// Restrict `v` to `[min_value, max_value]`.
///
/// Applies `min` then `max` in that fixed order, so swapped bounds are not
/// validated: with `min_value > max_value` the result is always `min_value`.
#[inline]
pub fn clamp(v: f64, min_value: f64, max_value: f64) -> f64 {
    v.min(max_value).max(min_value)
}

/// Linear remap of `v` from the range `from` onto the range `to`.
///
/// Not a clamp: the output may fall outside `to`. A zero-length `from`
/// range divides by zero and yields `±inf` or NaN.
#[inline]
pub fn lerp(v: f64, from: [f64; 2], to: [f64; 2]) -> f64 {
    to[0] + (v - from[0]) * (to[1] - to[0]) / (from[1] - from[0])
}

/// Degrees → radians.
#[inline]
pub fn radians(a: f64) -> f64 {
    a * TAU / 360.0
}

/// Radians → degrees.
#[inline]
pub fn degrees(a: f64) -> f64 {
    a * 360.0 / TAU
}
