//! Predefined range descriptors.
//!
//! Every descriptor is a zero-sized marker deriving [`WrapRange`](crate::WrapRange), paired with a
//! [`Circular`] alias named after what it measures:
//!
//! | Marker        | Domain         | Zero  | Alias              |
//! |---------------|----------------|-------|--------------------|
//! | [`SignedDeg`]   | `[-180, 180)`  | `0`   | [`SignedDegrees`]    |
//! | [`UnsignedDeg`] | `[0, 360)`     | `0`   | [`UnsignedDegrees`]  |
//! | [`SignedRad`]   | `[-π, π)`      | `0`   | [`SignedRadians`]    |
//! | [`UnsignedRad`] | `[0, 2π)`      | `0`   | [`UnsignedRadians`]  |
//! | [`Gon`]         | `[0, 400)`     | `0`   | [`Gradians`]         |
//! | [`Turn`]        | `[0, 1)`       | `0`   | [`Turns`]            |
//! | [`ClockHour`]   | `[0, 12)`      | `0`   | [`ClockHours`]       |
//!
//! The `TestRange*` markers exercise unusual domains (offset zero, negative-only bounds, wide spans). They are
//! public so downstream property tests can reuse them.
//!
//! All predefined ranges convert into each other through `From`/`Into`:
//!
//! ```rust
//! use circval_core::ranges::{SignedDegrees, UnsignedDegrees};
//!
//! let heading = UnsignedDegrees::new(350.0);
//! let signed: SignedDegrees = heading.into();
//! assert_eq!(signed.value(), -10.0);
//! ```

use crate::Circular;
use circval_derive::WrapRange;
use core::f64::consts::{PI, TAU};

/// Signed degrees, `[-180, 180)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "sdeg", lower = -180.0, upper = 180.0, zero = 0.0)]
pub struct SignedDeg;
/// Circular value in signed degrees.
pub type SignedDegrees = Circular<SignedDeg>;

/// Unsigned degrees, `[0, 360)`. Compass headings use this range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "deg", lower = 0.0, upper = 360.0, zero = 0.0)]
pub struct UnsignedDeg;
/// Circular value in unsigned degrees.
pub type UnsignedDegrees = Circular<UnsignedDeg>;

/// Signed radians, `[-π, π)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "srad", lower = -PI, upper = PI, zero = 0.0)]
pub struct SignedRad;
/// Circular value in signed radians.
pub type SignedRadians = Circular<SignedRad>;

/// Unsigned radians, `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "rad", lower = 0.0, upper = TAU, zero = 0.0)]
pub struct UnsignedRad;
/// Circular value in unsigned radians.
pub type UnsignedRadians = Circular<UnsignedRad>;

/// Gradians, `[0, 400)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "gon", lower = 0.0, upper = 400.0, zero = 0.0)]
pub struct Gon;
/// Circular value in gradians.
pub type Gradians = Circular<Gon>;

/// Fractions of a revolution, `[0, 1)`. Phases are usually expressed this way.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "turn", lower = 0.0, upper = 1.0, zero = 0.0)]
pub struct Turn;
/// Circular value in turns.
pub type Turns = Circular<Turn>;

/// Clock-face positions, `[0, 12)`, with `0` at twelve o'clock.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "h12", lower = 0.0, upper = 12.0, zero = 0.0)]
pub struct ClockHour;
/// Circular value on a twelve-hour clock face.
pub type ClockHours = Circular<ClockHour>;

/// Test domain `[3, 10)` whose zero (`5.3`) is not a bound.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "t0", lower = 3.0, upper = 10.0, zero = 5.3)]
pub struct TestRange0;

/// Test domain `[-3, 10)` straddling the origin.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "t1", lower = -3.0, upper = 10.0, zero = 5.3)]
pub struct TestRange1;

/// Test domain `[-3, -1)` that is negative throughout.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "t2", lower = -3.0, upper = -1.0, zero = -2.3)]
pub struct TestRange2;

/// Test domain `[-3, 0)` whose exclusive bound is the origin.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, WrapRange)]
#[range(symbol = "t3", lower = -3.0, upper = 0.0, zero = -2.3)]
pub struct TestRange3;

crate::impl_range_conversions!(
    SignedDeg,
    UnsignedDeg,
    SignedRad,
    UnsignedRad,
    Gon,
    Turn,
    ClockHour,
    TestRange0,
    TestRange1,
    TestRange2,
    TestRange3,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArcLength, CircArc, WrapRange};
    use approx::assert_abs_diff_eq;

    #[test]
    fn constants_match_table() {
        assert_eq!(SignedDeg::LOWER, -180.0);
        assert_eq!(SignedDeg::UPPER, 180.0);
        assert_eq!(UnsignedDeg::CIRCUMFERENCE, 360.0);
        assert_eq!(SignedRad::CIRCUMFERENCE, TAU);
        assert_eq!(UnsignedRad::CIRCUMFERENCE, TAU);
        assert_eq!(Gon::CIRCUMFERENCE, 400.0);
        assert_eq!(Turn::CIRCUMFERENCE, 1.0);
        assert_eq!(ClockHour::HALF_CIRCUMFERENCE, 6.0);
        assert_eq!(TestRange0::ZERO, 5.3);
        assert_eq!(TestRange2::CIRCUMFERENCE, 2.0);
        assert_eq!(TestRange3::UPPER, 0.0);
    }

    #[test]
    fn symbols_are_unique() {
        let symbols = [
            SignedDeg::SYMBOL,
            UnsignedDeg::SYMBOL,
            SignedRad::SYMBOL,
            UnsignedRad::SYMBOL,
            Gon::SYMBOL,
            Turn::SYMBOL,
            ClockHour::SYMBOL,
            TestRange0::SYMBOL,
            TestRange1::SYMBOL,
            TestRange2::SYMBOL,
            TestRange3::SYMBOL,
        ];
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn from_impls_for_values() {
        let d: UnsignedDegrees = SignedDegrees::new(-90.0).into();
        assert_eq!(d.value(), 270.0);

        let r: SignedRadians = UnsignedDegrees::new(180.0).into();
        assert_abs_diff_eq!(r.value(), -PI, epsilon = 1e-12);

        let h: ClockHours = UnsignedDegrees::new(90.0).into();
        assert_abs_diff_eq!(h.value(), 3.0, epsilon = 1e-12);

        let t: Turns = Gradians::new(100.0).into();
        assert_abs_diff_eq!(t.value(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn from_impls_for_lengths_and_arcs() {
        let half: ArcLength<UnsignedDeg> = ArcLength::<UnsignedRad>::new(PI).into();
        assert_abs_diff_eq!(half.value(), 180.0, epsilon = 1e-12);

        let full: ArcLength<Gon> = ArcLength::<SignedDeg>::full().into();
        assert!(full.is_full());

        let arc = CircArc::<UnsignedDeg>::from_raw(100.0, 100.0);
        let rad: CircArc<UnsignedRad> = arc.into();
        assert_abs_diff_eq!(rad.start().value(), 100.0_f64.to_radians(), epsilon = 1e-12);
        assert_abs_diff_eq!(rad.length().value(), 100.0_f64.to_radians(), epsilon = 1e-12);
    }
}
