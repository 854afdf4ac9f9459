//! Arcs: intervals on the circle.

use crate::{ArcLength, Circular, WrapRange};
use core::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An arc `[start, start + length]`, walked in the increasing direction.
///
/// The arc stores its start point, its end point and its length. The end point is derived once at construction
/// from whichever pair the caller supplied. Endpoints are included.
///
/// Two degenerate shapes share `start == end`:
///
/// * a **point arc** (`length == 0`) covers only its start point;
/// * a **full arc** (`length == R::CIRCUMFERENCE`) covers the whole circle. Its start point carries no meaning,
///   so all full arcs compare equal.
///
/// # Examples
///
/// ```rust
/// use circval_core::{CircArc, ranges::UnsignedDeg};
///
/// let a = CircArc::<UnsignedDeg>::from_raw(100.0, 100.0);
/// assert_eq!(a.end().value(), 200.0);
/// assert!(a.contains(150.0.into()));
/// assert!(a.contains(200.0.into()));
/// assert!(!a.contains(250.0.into()));
///
/// let b = CircArc::<UnsignedDeg>::from_raw(200.0, 100.0);
/// assert!(a.intersects(&b));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CircArc<R: WrapRange> {
    start: Circular<R>,
    end: Circular<R>,
    length: ArcLength<R>,
}

impl<R: WrapRange> CircArc<R> {
    /// Slack used by the geometric predicates so that boundary points survive rounding.
    ///
    /// Equality never uses it.
    pub const EPSILON: f64 = 1e-12;

    /// Creates an arc from its start point and length.
    ///
    /// The end point is `start` advanced by `length`. A full length yields a full arc whose end equals its start.
    pub fn new(start: Circular<R>, length: ArcLength<R>) -> Self {
        let end = if length.is_full() {
            start
        } else {
            start + length.value()
        };
        Self { start, end, length }
    }

    /// Creates an arc from a start point and a length expressed in any ranges.
    ///
    /// ```rust
    /// use circval_core::{ArcLength, CircArc, ranges::{SignedDegrees, UnsignedDeg, UnsignedRad}};
    ///
    /// let a = CircArc::<UnsignedDeg>::from_parts(
    ///     SignedDegrees::new(-90.0),
    ///     ArcLength::<UnsignedRad>::new(core::f64::consts::PI),
    /// );
    /// assert_eq!(a.start().value(), 270.0);
    /// assert!((a.end().value() - 90.0).abs() < 1e-9);
    /// ```
    pub fn from_parts<A: WrapRange, B: WrapRange>(start: Circular<A>, length: ArcLength<B>) -> Self {
        Self::new(start.to::<R>(), length.to::<R>())
    }

    /// Creates an arc from raw numbers: `start` is wrapped, `length` is clamped.
    pub fn from_raw(start: f64, length: f64) -> Self {
        Self::new(Circular::new(start), ArcLength::new(length))
    }

    /// Creates the arc walking upward from `start` to `end`.
    ///
    /// Coinciding endpoints give a **point** arc, never a full one.
    ///
    /// ```rust
    /// use circval_core::{CircArc, ranges::{UnsignedDeg, UnsignedDegrees}};
    ///
    /// let wrap = CircArc::<UnsignedDeg>::from_endpoints(UnsignedDegrees::new(350.0), UnsignedDegrees::new(10.0));
    /// assert_eq!(wrap.length().value(), 20.0);
    ///
    /// let point = CircArc::<UnsignedDeg>::from_endpoints(UnsignedDegrees::new(42.0), UnsignedDegrees::new(42.0));
    /// assert!(point.is_point());
    /// ```
    pub fn from_endpoints<A: WrapRange, B: WrapRange>(start: Circular<A>, end: Circular<B>) -> Self {
        let start = start.to::<R>();
        let end = end.to::<R>();
        Self {
            start,
            end,
            length: ArcLength::new(start.pdist(end)),
        }
    }

    /// The whole circle, anchored at `R::ZERO`.
    pub fn full() -> Self {
        Self::new(Circular::zero(), ArcLength::full())
    }

    /// Start point.
    #[inline]
    pub fn start(&self) -> Circular<R> {
        self.start
    }

    /// End point. Equal to the start for point and full arcs.
    #[inline]
    pub fn end(&self) -> Circular<R> {
        self.end
    }

    /// Length walked from start to end.
    #[inline]
    pub fn length(&self) -> ArcLength<R> {
        self.length
    }

    /// Whether the arc covers the whole circle.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.length.is_full()
    }

    /// Whether the arc is a single point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.length.value() == 0.0
    }

    /// Converts each component into range `T`.
    pub fn to<T: WrapRange>(self) -> CircArc<T> {
        CircArc {
            start: self.start.to::<T>(),
            end: self.end.to::<T>(),
            length: self.length.to::<T>(),
        }
    }

    /// Whether `point` lies on the arc, endpoints included.
    #[inline]
    pub fn contains(&self, point: Circular<R>) -> bool {
        self.length.value() - self.start.pdist(point) >= -Self::EPSILON
    }

    /// Whether `other` lies entirely on this arc.
    ///
    /// A full arc contains every arc; only a full arc contains a full arc. Otherwise both endpoints of `other`,
    /// walked from this arc's start, must appear in order and no further than this arc's length.
    pub fn contains_arc(&self, other: &Self) -> bool {
        if self.is_full() {
            return true;
        }
        if other.is_full() {
            return false;
        }

        let to_start = self.start.pdist(other.start);
        let to_end = self.start.pdist(other.end);
        to_end - to_start >= -Self::EPSILON && self.length.value() - to_end >= -Self::EPSILON
    }

    /// Whether the two arcs share at least one point. Touching endpoints count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }
}

impl<R: WrapRange> Default for CircArc<R> {
    /// A point arc at `R::ZERO`.
    fn default() -> Self {
        Self::new(Circular::zero(), ArcLength::zero())
    }
}

impl<R: WrapRange> PartialEq for CircArc<R> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_full() && other.is_full() {
            return true;
        }
        self.start == other.start && self.length == other.length
    }
}

impl<R: WrapRange> Display for CircArc<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "[{}, {}] (length {}) {}",
            self.start.value(),
            self.end.value(),
            self.length.value(),
            R::SYMBOL
        )
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ArcRepr {
    start: f64,
    length: f64,
}

#[cfg(feature = "serde")]
impl<R: WrapRange> Serialize for CircArc<R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ArcRepr {
            start: self.start.value(),
            length: self.length.value(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: WrapRange> Deserialize<'de> for CircArc<R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ArcRepr::deserialize(deserializer)?;
        Ok(CircArc::from_raw(repr.start, repr.length))
    }
}
