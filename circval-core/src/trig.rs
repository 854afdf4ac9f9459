//! Inverse trigonometric functions.
//!
//! An inverse function cannot know which domain its caller wants the angle in, so each one takes the destination
//! range as a type parameter. The principal value (in radians, measured from zero) is mapped onto the target range
//! through [`Circular::from_radians`], which also normalizes it.
//!
//! ```rust
//! use circval_core::{atan2, ranges::{SignedDeg, UnsignedDeg}};
//!
//! assert_eq!(atan2::<SignedDeg>(-1.0, 0.0).value(), -90.0);
//! assert_eq!(atan2::<UnsignedDeg>(-1.0, 0.0).value(), 270.0);
//! ```

use crate::math;
use crate::range::WrapRange;
use crate::Circular;

/// Arcsine of `x` in range `R`.
///
/// IEEE‑754 note: `|x| > 1` produces `NaN`.
#[inline]
pub fn asin<R: WrapRange>(x: f64) -> Circular<R> {
    Circular::from_radians(math::asin(x))
}

/// Arccosine of `x` in range `R`.
///
/// IEEE‑754 note: `|x| > 1` produces `NaN`.
#[inline]
pub fn acos<R: WrapRange>(x: f64) -> Circular<R> {
    Circular::from_radians(math::acos(x))
}

/// Arctangent of `x` in range `R`.
#[inline]
pub fn atan<R: WrapRange>(x: f64) -> Circular<R> {
    Circular::from_radians(math::atan(x))
}

/// Four-quadrant arctangent of `y / x` in range `R`.
#[inline]
pub fn atan2<R: WrapRange>(y: f64, x: f64) -> Circular<R> {
    Circular::from_radians(math::atan2(y, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use proptest::prelude::*;

    #[test]
    fn asin_lands_in_requested_range() {
        assert_abs_diff_eq!(asin::<SignedDeg>(-1.0).value(), -90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(asin::<UnsignedDeg>(-1.0).value(), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(asin::<UnsignedRad>(1.0).value(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(asin::<ClockHour>(0.5).value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn acos_and_atan() {
        assert_abs_diff_eq!(acos::<UnsignedDeg>(-1.0).value(), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(acos::<SignedDeg>(-1.0).value(), -180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan::<SignedRad>(1.0).value(), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(atan::<Turn>(-1.0).value(), 0.875, epsilon = 1e-12);
    }

    #[test]
    fn atan2_quadrants() {
        assert_abs_diff_eq!(atan2::<SignedDeg>(1.0, 1.0).value(), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan2::<SignedDeg>(1.0, -1.0).value(), 135.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan2::<SignedDeg>(-1.0, -1.0).value(), -135.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan2::<UnsignedDeg>(-1.0, -1.0).value(), 225.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan2::<UnsignedRad>(0.0, -1.0).value(), PI, epsilon = 1e-12);
    }

    #[test]
    fn inverse_is_measured_from_zero() {
        // zero of [3, 10) is 5.3, a quarter turn is 7/4
        assert_abs_diff_eq!(asin::<TestRange0>(0.0).value(), 5.3, epsilon = 1e-12);
        assert_abs_diff_eq!(asin::<TestRange0>(1.0).value(), 7.05, epsilon = 1e-12);
        assert_abs_diff_eq!(asin::<TestRange2>(0.0).value(), -2.3, epsilon = 1e-12);
    }

    #[test]
    fn asin_out_of_domain_is_nan() {
        assert!(asin::<UnsignedDeg>(2.0).value().is_nan());
        assert!(acos::<UnsignedDeg>(-1.5).value().is_nan());
    }

    proptest! {
        #[test]
        fn prop_atan2_inverts_sin_cos(raw in -1e3..1e3f64) {
            let a = Circular::<TestRange1>::new(raw);
            let (s, c) = a.sin_cos();
            let back = atan2::<TestRange1>(s, c);
            prop_assert!(a.sdist(back).abs() < 1e-9);
        }

        #[test]
        fn prop_asin_inverts_sin(x in -1.0..1.0f64) {
            prop_assert!((asin::<Gon>(x).sin() - x).abs() < 1e-12);
        }
    }
}
