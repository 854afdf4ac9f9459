//! Runtime range descriptors.
//!
//! [`WrapRange`] fixes a domain at compile time. When the domain is only known at runtime (read from a
//! configuration file, chosen by name) a [`RangeSpec`] carries the same three constants as a value, validated once
//! on construction. The free functions [`convert`] and [`convert_length`] reproduce the typed conversions exactly.
//!
//! ```rust
//! use circval_core::{convert, RangeSpec, ranges::{SignedDeg, UnsignedDeg}};
//!
//! let from = RangeSpec::of::<UnsignedDeg>();
//! let to = RangeSpec::of::<SignedDeg>();
//! assert_eq!(convert(270.0, from, to), -90.0);
//! ```

use crate::arc_length::ArcLength;
use crate::circular::{positive_distance, rescale, wrap_into, Circular};
use crate::error::RangeError;
use crate::range::WrapRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The constants of one circular domain `[lower, upper)`, held as a value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRangeSpec"))]
pub struct RangeSpec {
    lower: f64,
    upper: f64,
    zero: f64,
}

/// Unvalidated fields as they appear in configuration. `zero` defaults to `lower`.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Debug, Deserialize)]
pub(crate) struct RawRangeSpec {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    #[serde(default)]
    pub(crate) zero: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRangeSpec> for RangeSpec {
    type Error = RangeError;

    fn try_from(raw: RawRangeSpec) -> Result<Self, Self::Error> {
        RangeSpec::new(raw.lower, raw.upper, raw.zero.unwrap_or(raw.lower))
    }
}

impl RangeSpec {
    /// Validates and builds a descriptor.
    ///
    /// Fails when a bound is not finite, when `upper <= lower`, or when `zero` is outside `[lower, upper)`.
    pub fn new(lower: f64, upper: f64, zero: f64) -> Result<Self, RangeError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(RangeError::NonFinite { lower, upper });
        }
        if upper - lower <= 0.0 {
            return Err(RangeError::Empty { lower, upper });
        }
        if !(zero >= lower && zero < upper) {
            return Err(RangeError::ZeroOutOfDomain { lower, upper, zero });
        }
        Ok(Self { lower, upper, zero })
    }

    /// Descriptor of a compile-time range.
    #[inline]
    pub const fn of<R: WrapRange>() -> Self {
        let () = R::DESCRIPTOR_CHECK;
        Self {
            lower: R::LOWER,
            upper: R::UPPER,
            zero: R::ZERO,
        }
    }

    /// Inclusive lower bound.
    #[inline]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Exclusive upper bound.
    #[inline]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Zero representative.
    #[inline]
    pub const fn zero(&self) -> f64 {
        self.zero
    }

    /// `upper - lower`.
    #[inline]
    pub fn circumference(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `value` already lies in `[lower, upper)`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Wraps `raw` into the domain, exactly as [`Circular::new`] does.
    #[inline]
    pub fn wrap(&self, raw: f64) -> f64 {
        wrap_into(raw, self.lower, self.upper)
    }

    /// Clamps `raw` into `[0, circumference]`, exactly as [`ArcLength::new`] does.
    #[inline]
    pub fn clamp_length(&self, raw: f64) -> f64 {
        raw.clamp(0.0, self.circumference())
    }

    /// Positive distance from `from` to `to`, both wrapped first.
    #[inline]
    pub fn pdist(&self, from: f64, to: f64) -> f64 {
        positive_distance(self.wrap(from), self.wrap(to), self.circumference())
    }

    /// Shortest signed distance from `from` to `to`, both wrapped first. The antipodal tie is positive.
    pub fn sdist(&self, from: f64, to: f64) -> f64 {
        let r = self.circumference();
        let d = self.wrap(to) - self.wrap(from);
        if d > r * 0.5 {
            d - r
        } else if d <= -r * 0.5 {
            d + r
        } else {
            d
        }
    }
}

impl<R: WrapRange> From<Circular<R>> for RangeSpec {
    fn from(_: Circular<R>) -> Self {
        RangeSpec::of::<R>()
    }
}

impl<R: WrapRange> From<ArcLength<R>> for RangeSpec {
    fn from(_: ArcLength<R>) -> Self {
        RangeSpec::of::<R>()
    }
}

/// Re-expresses `value` (a position in `from`) as a position in `to`.
///
/// `value` is wrapped into `from` first. Equal descriptors return the wrapped value untouched.
pub fn convert(value: f64, from: RangeSpec, to: RangeSpec) -> f64 {
    let value = from.wrap(value);
    if from == to {
        return value;
    }
    to.wrap(rescale(
        value,
        from.zero,
        from.circumference(),
        to.zero,
        to.circumference(),
    ))
}

/// Re-expresses an arc length measured in `from` in the units of `to`.
///
/// `length` is clamped first. A full revolution maps exactly onto a full revolution.
pub fn convert_length(length: f64, from: RangeSpec, to: RangeSpec) -> f64 {
    let length = from.clamp_length(length);
    if from == to {
        return length;
    }
    if length == from.circumference() {
        return to.circumference();
    }
    to.clamp_length(length * (to.circumference() / from.circumference()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{PI, TAU};
    use proptest::prelude::*;

    #[test]
    fn new_validates() {
        assert!(RangeSpec::new(0.0, 360.0, 0.0).is_ok());
        assert!(RangeSpec::new(-3.0, -1.0, -2.3).is_ok());

        assert_eq!(
            RangeSpec::new(10.0, 3.0, 5.0),
            Err(RangeError::Empty {
                lower: 10.0,
                upper: 3.0
            })
        );
        assert_eq!(
            RangeSpec::new(0.0, 0.0, 0.0),
            Err(RangeError::Empty {
                lower: 0.0,
                upper: 0.0
            })
        );
        assert!(matches!(
            RangeSpec::new(f64::NAN, 1.0, 0.0),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            RangeSpec::new(0.0, f64::INFINITY, 0.0),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            RangeSpec::new(0.0, 1.0, 1.0),
            Err(RangeError::ZeroOutOfDomain { .. })
        ));
        assert!(matches!(
            RangeSpec::new(0.0, 1.0, f64::NAN),
            Err(RangeError::ZeroOutOfDomain { .. })
        ));
    }

    #[test]
    fn of_reads_trait_constants() {
        let s = RangeSpec::of::<TestRange1>();
        assert_eq!(s.lower(), -3.0);
        assert_eq!(s.upper(), 10.0);
        assert_eq!(s.zero(), 5.3);
        assert_eq!(s.circumference(), 13.0);
        assert_eq!(RangeSpec::from(SignedRadians::new(1.0)), RangeSpec::of::<SignedRad>());
        assert_eq!(RangeSpec::from(ArcLength::<Gon>::full()), RangeSpec::of::<Gon>());
    }

    #[test]
    fn wrap_and_clamp() {
        let s = RangeSpec::of::<SignedDeg>();
        assert_eq!(s.wrap(180.0), -180.0);
        assert_eq!(s.wrap(-190.0), 170.0);
        assert!(s.contains(-180.0));
        assert!(!s.contains(180.0));
        assert_eq!(s.clamp_length(400.0), 360.0);
        assert_eq!(s.clamp_length(-1.0), 0.0);
    }

    #[test]
    fn distances() {
        let s = RangeSpec::of::<UnsignedDeg>();
        assert_eq!(s.pdist(350.0, 10.0), 20.0);
        assert_eq!(s.pdist(10.0, 350.0), 340.0);
        assert_eq!(s.sdist(10.0, 350.0), -20.0);
        assert_eq!(s.sdist(0.0, 180.0), 180.0);
        assert_eq!(s.sdist(180.0, 0.0), 180.0);
        assert_eq!(s.sdist(-350.0, 370.0), 0.0);
    }

    #[test]
    fn convert_known_values() {
        let deg = RangeSpec::of::<UnsignedDeg>();
        let srad = RangeSpec::of::<SignedRad>();
        assert_abs_diff_eq!(convert(270.0, deg, srad), -PI / 2.0, epsilon = 1e-12);
        assert_eq!(convert(400.0, deg, deg), 40.0);
        assert_abs_diff_eq!(convert_length(180.0, deg, srad), PI, epsilon = 1e-12);
        assert_eq!(convert_length(360.0, deg, srad), TAU);
        assert_eq!(convert_length(1000.0, deg, deg), 360.0);
    }

    #[test]
    fn convert_full_circle_is_exact_for_awkward_ratios() {
        let t0 = RangeSpec::of::<TestRange0>();
        let t1 = RangeSpec::of::<TestRange1>();
        assert_eq!(convert_length(7.0, t0, t1), 13.0);
        assert_eq!(convert_length(13.0, t1, t0), 7.0);
    }

    proptest! {
        #[test]
        fn prop_convert_matches_typed(raw in -1e4..1e4f64) {
            let typed = Circular::<TestRange0>::new(raw).to::<TestRange3>().value();
            let runtime = convert(raw, RangeSpec::of::<TestRange0>(), RangeSpec::of::<TestRange3>());
            prop_assert_eq!(typed.to_bits(), runtime.to_bits());
        }

        #[test]
        fn prop_convert_length_matches_typed(raw in -10.0..400.0f64) {
            let typed = ArcLength::<UnsignedDeg>::new(raw).to::<SignedRad>().value();
            let runtime = convert_length(raw, RangeSpec::of::<UnsignedDeg>(), RangeSpec::of::<SignedRad>());
            prop_assert_eq!(typed.to_bits(), runtime.to_bits());
        }

        #[test]
        fn prop_wrap_matches_typed(raw in -1e6..1e6f64) {
            let typed = Circular::<TestRange2>::new(raw).value();
            prop_assert_eq!(typed.to_bits(), RangeSpec::of::<TestRange2>().wrap(raw).to_bits());
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn deserialize_validates() {
            let spec: RangeSpec =
                serde_json::from_str(r#"{"lower":0.0,"upper":12.0,"zero":3.0}"#).unwrap();
            assert_eq!(spec, RangeSpec::new(0.0, 12.0, 3.0).unwrap());

            let err = serde_json::from_str::<RangeSpec>(r#"{"lower":5.0,"upper":1.0}"#).unwrap_err();
            assert!(err.to_string().contains("must exceed"));
        }

        #[test]
        fn zero_defaults_to_lower() {
            let spec: RangeSpec = serde_json::from_str(r#"{"lower":-1.0,"upper":1.0}"#).unwrap();
            assert_eq!(spec.zero(), -1.0);
        }

        #[test]
        fn serialize_fields() {
            let json = serde_json::to_string(&RangeSpec::of::<Turn>()).unwrap();
            assert_eq!(json, r#"{"lower":0.0,"upper":1.0,"zero":0.0}"#);
        }
    }
}
