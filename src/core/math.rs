//! Angle helpers shared across the crate.
//!
//! All angles are in radians, counterclockwise positive.

use std::f32::consts::PI;

/// One full turn in radians.
pub const TWO_PI: f32 = 2.0 * PI;

/// Wraps an angle into the half-open interval [-π, π).
///
/// The top endpoint folds onto the bottom, so `PI` itself maps to `-PI`.
///
/// # Example
/// ```
/// use drishti_nav::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert_eq!(normalize_angle(PI), -PI);
/// assert!((normalize_angle(7.0 * PI / 3.0) - PI / 3.0).abs() < 1e-5);
/// assert!((normalize_angle(-PI / 3.0) + PI / 3.0).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut wrapped = angle % TWO_PI;
    if wrapped >= PI {
        wrapped -= TWO_PI;
    } else if wrapped < -PI {
        wrapped += TWO_PI;
    }
    wrapped
}

/// Signed shortest rotation taking `from` onto `to`, in [-π, π).
///
/// # Example
/// ```
/// use drishti_nav::core::math::angle_diff;
/// use std::f32::consts::PI;
///
/// assert!((angle_diff(PI / 6.0, -PI / 6.0) + PI / 3.0).abs() < 1e-6);
///
/// // Headings either side of ±π are a short hop apart, not a full turn
/// assert!((angle_diff(0.95 * PI, -0.95 * PI) - 0.1 * PI).abs() < 1e-5);
/// ```
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
