//! Circular value type and its implementations.

use crate::math;
use crate::range::{same_constants, WrapRange};
use core::f64::consts::TAU;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wraps `raw` into `[lower, upper)` using a true (non-negative) modulo.
///
/// Values already inside the interval are returned bit-exact. A remainder that rounds up to the modulus folds
/// back onto `lower`, so the upper bound is never produced.
#[inline]
pub(crate) fn wrap_into(raw: f64, lower: f64, upper: f64) -> f64 {
    if raw >= lower && raw < upper {
        return raw;
    }
    let wrapped = lower + math::rem_euclid(raw - lower, upper - lower);
    if wrapped >= upper {
        lower
    } else {
        wrapped
    }
}

/// Re-expresses an offset from one zero/circumference pair in another, before wrapping.
#[inline]
pub(crate) fn rescale(value: f64, from_zero: f64, from_circ: f64, to_zero: f64, to_circ: f64) -> f64 {
    (value - from_zero) * (to_circ / from_circ) + to_zero
}

/// Directed distance walking upward from `from` to `to` on a circle of circumference `circ`, in `[0, circ)`.
#[inline]
pub(crate) fn positive_distance(from: f64, to: f64, circ: f64) -> f64 {
    let d = if to >= from {
        to - from
    } else {
        circ - from + to
    };
    if d >= circ {
        d - circ
    } else {
        d
    }
}

/// A value on a circle, kept inside its range's domain `[R::LOWER, R::UPPER)`.
///
/// `Circular<R>` wraps an `f64` together with phantom information about its range `R`. Every constructor and
/// every operator re-normalizes, so code holding a `Circular` never observes a value at or past the wrap point.
///
/// # Examples
///
/// ```rust
/// use circval_core::ranges::UnsignedDegrees;
///
/// let heading = UnsignedDegrees::new(350.0);
/// let turned = heading + 20.0;
/// assert_eq!(turned.value(), 10.0);
/// assert_eq!(heading.sdist(turned), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Circular<R: WrapRange>(f64, PhantomData<R>);

impl<R: WrapRange> Circular<R> {
    /// Creates a circular value, wrapping `raw` into `[R::LOWER, R::UPPER)`.
    ///
    /// Out-of-domain inputs are never rejected. IEEE‑754 note: `NaN`/`±∞` inputs produce `NaN`.
    ///
    /// ```rust
    /// use circval_core::ranges::SignedDegrees;
    /// assert_eq!(SignedDegrees::new(190.0).value(), -170.0);
    /// assert_eq!(SignedDegrees::new(180.0).value(), -180.0);
    /// assert_eq!(SignedDegrees::new(-540.0).value(), -180.0);
    /// ```
    #[inline]
    pub fn new(raw: f64) -> Self {
        let () = R::DESCRIPTOR_CHECK;
        Self(wrap_into(raw, R::LOWER, R::UPPER), PhantomData)
    }

    /// The physical zero of the range (`R::ZERO`).
    #[inline]
    pub const fn zero() -> Self {
        let () = R::DESCRIPTOR_CHECK;
        Self(R::ZERO, PhantomData)
    }

    /// Returns the raw numeric value, always inside `[R::LOWER, R::UPPER)` for finite inputs.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts this value into another range, preserving the physical angle.
    ///
    /// The offset from `R::ZERO` is rescaled by the ratio of circumferences and re-anchored on `T::ZERO`.
    /// Ranges with identical constants relabel the value without arithmetic.
    ///
    /// ```rust
    /// use circval_core::ranges::{SignedDeg, UnsignedRad, UnsignedDegrees};
    ///
    /// let west = UnsignedDegrees::new(270.0);
    /// assert_eq!(west.to::<SignedDeg>().value(), -90.0);
    /// assert!((west.to::<UnsignedRad>().value() - 1.5 * core::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to<T: WrapRange>(self) -> Circular<T> {
        if same_constants::<R, T>() {
            let () = T::DESCRIPTOR_CHECK;
            return Circular(self.0, PhantomData);
        }
        Circular::<T>::new(rescale(
            self.0,
            R::ZERO,
            R::CIRCUMFERENCE,
            T::ZERO,
            T::CIRCUMFERENCE,
        ))
    }

    /// Positive distance: how far to walk from `self` to `to` in the increasing direction, in `[0, R)`.
    ///
    /// `a.pdist(a) == 0` and, for `a != b`, `a.pdist(b) + b.pdist(a) == R` (up to rounding).
    ///
    /// ```rust
    /// use circval_core::ranges::UnsignedDegrees;
    /// let a = UnsignedDegrees::new(350.0);
    /// let b = UnsignedDegrees::new(10.0);
    /// assert_eq!(a.pdist(b), 20.0);
    /// assert_eq!(b.pdist(a), 340.0);
    /// ```
    #[inline]
    pub fn pdist(self, to: Self) -> f64 {
        positive_distance(self.0, to.0, R::CIRCUMFERENCE)
    }

    /// Shortest signed distance from `self` to `to`, in `(-R/2, R/2]`.
    ///
    /// Positive means the increasing direction is shorter. At the antipodal tie both directions are equally short
    /// and the result is always `+R/2`, so `a.sdist(b) == -b.sdist(a)` holds everywhere except at the tie.
    ///
    /// ```rust
    /// use circval_core::ranges::UnsignedDegrees;
    /// let a = UnsignedDegrees::new(10.0);
    /// assert_eq!(a.sdist(UnsignedDegrees::new(350.0)), -20.0);
    /// assert_eq!(a.sdist(UnsignedDegrees::new(190.0)), 180.0);
    /// assert_eq!(UnsignedDegrees::new(190.0).sdist(a), 180.0);
    /// ```
    #[inline]
    pub fn sdist(self, to: Self) -> f64 {
        let d = to.0 - self.0;
        if d > R::HALF_CIRCUMFERENCE {
            d - R::CIRCUMFERENCE
        } else if d <= -R::HALF_CIRCUMFERENCE {
            d + R::CIRCUMFERENCE
        } else {
            d
        }
    }

    /// The antipodal point, half a revolution away.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::new(self.0 + R::HALF_CIRCUMFERENCE)
    }

    /// Offset from `R::ZERO` expressed in radians.
    ///
    /// This is the angle the trigonometric methods evaluate. The result is not wrapped; it lies in
    /// `[(L - Z)·k, (H - Z)·k)` with `k = 2π/R`.
    #[inline]
    pub fn to_radians(self) -> f64 {
        (self.0 - R::ZERO) * (TAU / R::CIRCUMFERENCE)
    }

    /// Builds a value from an angle in radians measured from `R::ZERO`.
    ///
    /// ```rust
    /// use circval_core::ranges::UnsignedDegrees;
    /// let v = UnsignedDegrees::from_radians(-core::f64::consts::FRAC_PI_2);
    /// assert!((v.value() - 270.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self::new(radians * (R::CIRCUMFERENCE / TAU) + R::ZERO)
    }

    /// Sine of the angle.
    ///
    /// IEEE‑754 note: `NaN` inputs produce `NaN`.
    #[inline]
    pub fn sin(self) -> f64 {
        math::sin(self.to_radians())
    }

    /// Cosine of the angle.
    ///
    /// IEEE‑754 note: `NaN` inputs produce `NaN`.
    #[inline]
    pub fn cos(self) -> f64 {
        math::cos(self.to_radians())
    }

    /// Tangent of the angle.
    ///
    /// IEEE‑754 note: `NaN` inputs produce `NaN`.
    #[inline]
    pub fn tan(self) -> f64 {
        math::tan(self.to_radians())
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        let x = self.to_radians();
        (math::sin(x), math::cos(x))
    }
}

impl<R: WrapRange> Default for Circular<R> {
    fn default() -> Self {
        Self::zero()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────
//
// Between two circular values `ZERO` is the additive identity: a + b is the
// sum of both offsets from zero, re-anchored on zero. A bare `f64` operand is
// a raw offset in the range's units.

impl<R: WrapRange> Add for Circular<R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + (rhs.0 - R::ZERO))
    }
}

impl<R: WrapRange> Add<f64> for Circular<R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl<R: WrapRange> AddAssign for Circular<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: WrapRange> AddAssign<f64> for Circular<R> {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl<R: WrapRange> Sub for Circular<R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - (rhs.0 - R::ZERO))
    }
}

impl<R: WrapRange> Sub<f64> for Circular<R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}

impl<R: WrapRange> SubAssign for Circular<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: WrapRange> SubAssign<f64> for Circular<R> {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl<R: WrapRange> Neg for Circular<R> {
    type Output = Self;
    /// Reflection about `R::ZERO`.
    #[inline]
    fn neg(self) -> Self {
        Self::new(R::ZERO - (self.0 - R::ZERO))
    }
}

impl<R: WrapRange> PartialEq<f64> for Circular<R> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<R: WrapRange> From<f64> for Circular<R> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<R: WrapRange> From<Circular<R>> for f64 {
    #[inline]
    fn from(value: Circular<R>) -> Self {
        value.0
    }
}

impl<R: WrapRange> Display for Circular<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.0, R::SYMBOL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<R: WrapRange> Serialize for Circular<R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: WrapRange> Deserialize<'de> for Circular<R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Circular::new(value))
    }
}

/// Serde helper module for serializing circular values together with their range symbol.
///
/// Use this with the `#[serde(with = "...")]` attribute when the serialized form must be self-describing.
/// Deserialization re-normalizes the value and rejects a mismatching symbol.
///
/// # Examples
///
/// ```rust
/// use circval_core::ranges::UnsignedDegrees;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Waypoint {
///     #[serde(with = "circval_core::serde_with_range")]
///     heading: UnsignedDegrees,   // {"value": 270.0, "range": "deg"}
///
///     bearing: UnsignedDegrees,   // 90.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_range {
    use super::*;
    use serde::de::Error;

    #[derive(Serialize)]
    struct TaggedRef<'a> {
        value: f64,
        range: &'a str,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Tagged {
        value: f64,
        #[serde(default)]
        range: Option<String>,
    }

    /// Serializes a `Circular<R>` as `{"value": .., "range": R::SYMBOL}`.
    pub fn serialize<R, S>(circular: &Circular<R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        R: WrapRange,
        S: Serializer,
    {
        TaggedRef {
            value: circular.value(),
            range: R::SYMBOL,
        }
        .serialize(serializer)
    }

    /// Deserializes a `Circular<R>` from `{"value": .., "range": ..}`.
    ///
    /// A missing `range` is accepted; a present one must equal `R::SYMBOL`.
    pub fn deserialize<'de, R, D>(deserializer: D) -> Result<Circular<R>, D::Error>
    where
        R: WrapRange,
        D: Deserializer<'de>,
    {
        let tagged = Tagged::deserialize(deserializer)?;
        match tagged.range.as_deref() {
            Some(symbol) if symbol != R::SYMBOL => Err(D::Error::custom(format_args!(
                "range mismatch: expected '{}', found '{}'",
                R::SYMBOL,
                symbol
            ))),
            _ => Ok(Circular::new(tagged.value)),
        }
    }
}
