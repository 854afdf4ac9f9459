//! Arc lengths measured in a range's units.

use crate::range::{same_constants, WrapRange};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative span along the circle, at most one full revolution.
///
/// Unlike [`Circular`](crate::Circular), an arc length does not wrap: the value `R::CIRCUMFERENCE` is meaningful
/// ("the whole circle") and distinct from `0` ("a single point"). Out-of-domain inputs are clamped into
/// `[0, R::CIRCUMFERENCE]`.
///
/// ```rust
/// use circval_core::{ArcLength, ranges::UnsignedDeg};
///
/// assert_eq!(ArcLength::<UnsignedDeg>::new(400.0).value(), 360.0);
/// assert_eq!(ArcLength::<UnsignedDeg>::new(-5.0).value(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ArcLength<R: WrapRange>(f64, PhantomData<R>);

impl<R: WrapRange> ArcLength<R> {
    /// Creates an arc length, clamping `raw` into `[0, R::CIRCUMFERENCE]`.
    ///
    /// IEEE‑754 note: `NaN` inputs produce `NaN`.
    #[inline]
    pub fn new(raw: f64) -> Self {
        let () = R::DESCRIPTOR_CHECK;
        Self(raw.clamp(0.0, R::CIRCUMFERENCE), PhantomData)
    }

    /// The empty length.
    #[inline]
    pub const fn zero() -> Self {
        let () = R::DESCRIPTOR_CHECK;
        Self(0.0, PhantomData)
    }

    /// One full revolution.
    #[inline]
    pub const fn full() -> Self {
        let () = R::DESCRIPTOR_CHECK;
        Self(R::CIRCUMFERENCE, PhantomData)
    }

    /// Raw length in the range's units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether this length covers the whole circle.
    #[inline]
    pub fn is_full(self) -> bool {
        self.0 == R::CIRCUMFERENCE
    }

    /// Rescales the length into another range's units.
    ///
    /// A full length stays exactly full, so `is_full` survives any chain of conversions.
    #[inline]
    pub fn to<T: WrapRange>(self) -> ArcLength<T> {
        if same_constants::<R, T>() {
            return ArcLength::<T>::new(self.0);
        }
        if self.is_full() {
            return ArcLength::<T>::full();
        }
        ArcLength::<T>::new(self.0 * (T::CIRCUMFERENCE / R::CIRCUMFERENCE))
    }
}

impl<R: WrapRange> Default for ArcLength<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: WrapRange> Add for ArcLength<R> {
    type Output = Self;
    /// Saturates at one full revolution.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<R: WrapRange> Sub for ArcLength<R> {
    type Output = Self;
    /// Saturates at zero.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<R: WrapRange> From<f64> for ArcLength<R> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<R: WrapRange> From<ArcLength<R>> for f64 {
    #[inline]
    fn from(value: ArcLength<R>) -> Self {
        value.0
    }
}

impl<R: WrapRange> PartialEq<f64> for ArcLength<R> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<R: WrapRange> Display for ArcLength<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.0, R::SYMBOL)
    }
}

#[cfg(feature = "serde")]
impl<R: WrapRange> Serialize for ArcLength<R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: WrapRange> Deserialize<'de> for ArcLength<R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(ArcLength::new(value))
    }
}
