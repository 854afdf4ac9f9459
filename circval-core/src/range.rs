//! Range descriptor trait.

use core::fmt::Debug;

/// Trait implemented by every **range descriptor** type.
///
/// A range descriptor fixes, at compile time, the half-open domain `[LOWER, UPPER)` a circular value lives in.
///
/// * `LOWER` is the inclusive lower bound, `UPPER` the exclusive upper bound.
/// * `CIRCUMFERENCE` (`UPPER - LOWER`) is the length of one full revolution, expressed in the range's own units.
/// * `ZERO` is the physical zero of the domain. Conversions between ranges map one `ZERO` onto the other, so
///   `0°` in `[0, 360)` and `0 rad` in `[-π, π)` denote the same direction.
/// * `SYMBOL` is the printable tag shown by [`core::fmt::Display`] and used as a registry key.
///
/// Two descriptors with equal constants are still distinct types: values never move between them without an
/// explicit conversion.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `LOWER < UPPER`, both finite, and `LOWER <= ZERO < UPPER`.
///
/// The invariants are enforced at compile time through [`WrapRange::DESCRIPTOR_CHECK`], which every constructor in
/// this crate evaluates. A hand-written impl with `UPPER <= LOWER` fails to build as soon as it is used:
///
/// ```compile_fail
/// use circval_core::{Circular, WrapRange};
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// struct Backwards;
/// impl WrapRange for Backwards {
///     const LOWER: f64 = 10.0;
///     const UPPER: f64 = 3.0;
///     const ZERO: f64 = 5.0;
///     const SYMBOL: &'static str = "bad";
/// }
///
/// let _ = Circular::<Backwards>::new(1.0);
/// ```
pub trait WrapRange: Copy + PartialEq + Debug + 'static {
    /// Inclusive lower bound of the domain.
    const LOWER: f64;

    /// Exclusive upper bound of the domain.
    const UPPER: f64;

    /// Physical zero of the domain, inside `[LOWER, UPPER)`.
    const ZERO: f64;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Length of one full revolution.
    const CIRCUMFERENCE: f64 = Self::UPPER - Self::LOWER;

    /// Half a revolution; the largest magnitude [`crate::Circular::sdist`] returns.
    const HALF_CIRCUMFERENCE: f64 = (Self::UPPER - Self::LOWER) * 0.5;

    /// Compile-time descriptor validation. Evaluating it for a malformed range is a build error.
    #[doc(hidden)]
    const DESCRIPTOR_CHECK: () = {
        assert!(
            Self::UPPER - Self::LOWER > 0.0,
            "WrapRange: UPPER must be greater than LOWER"
        );
        assert!(
            Self::UPPER - Self::LOWER < f64::INFINITY && Self::LOWER > f64::NEG_INFINITY,
            "WrapRange: bounds must be finite"
        );
        assert!(
            Self::ZERO >= Self::LOWER && Self::ZERO < Self::UPPER,
            "WrapRange: ZERO must lie in [LOWER, UPPER)"
        );
    };
}

/// Returns `true` when two descriptors carry identical constants.
///
/// Conversions between such ranges are a pure relabelling and skip the affine rescale.
#[inline]
pub(crate) fn same_constants<A: WrapRange, B: WrapRange>() -> bool {
    A::LOWER == B::LOWER && A::UPPER == B::UPPER && A::ZERO == B::ZERO
}
