//! Shared numeric primitives
//!
//! Small free functions used by the kinematics model and its tests:
//! - [`wrap`]: generalized modulo into a half-open range
//! - [`approx_eq`]: epsilon comparison for path coordinates
//! - [`degrees_to_radians`]: conversion helper for heading math
//!
//! # Floored Division
//!
//! [`wrap`] uses floored (not truncated) division so that negative values
//! and negative ranges wrap correctly: `wrap(0, 360, -90)` is `270`, not
//! `-90`, and `wrap(-20, -10, -33)` is `-13`.

/// Wrap `val` into the half-open range `[start, stop)`.
///
/// Defined as `val - floor((val - start) / (stop - start)) * (stop - start)`.
/// Requires `stop > start`.
pub fn wrap(start: f64, stop: f64, val: f64) -> f64 {
    val - ((val - start) / (stop - start)).floor() * (stop - start)
}

/// Approximate equality: `|a - b| <= epsilon`.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Convert degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
