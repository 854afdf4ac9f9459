//! Core types for wraparound-safe circular values and arcs.
//!
//! `circval-core` models quantities that live on a circle (angles, phases, compass headings, clock positions):
//!
//! - A *range* is a zero-sized marker type implementing [`WrapRange`], fixing the half-open domain
//!   `[LOWER, UPPER)` and its physical zero at compile time.
//! - A position on the circle is a [`Circular<R>`], backed by an `f64` that is always wrapped into the domain.
//! - A span along the circle is an [`ArcLength<R>`], clamped into `[0, R]` where `R` is the circumference.
//! - An interval on the circle is a [`CircArc<R>`], with point containment, arc containment and intersection.
//!
//! Most users should depend on `circval` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Arithmetic that never leaves the domain: `350° + 20°` is `10°`, and the upper bound is never produced.
//! - Distances that understand the wrap point ([`Circular::pdist`], [`Circular::sdist`]).
//! - Conversions between domains that preserve the physical angle, including offset and negative-only domains.
//! - Arc predicates that treat touching endpoints as shared and the full circle as a single arc.
//!
//! # What this crate does not try to solve
//!
//! - Statistics over collections of circular values.
//! - Set algebra on arcs (union, intersection, difference).
//! - Anything two-dimensional.
//!
//! # Quick start
//!
//! ```rust
//! use circval_core::ranges::{SignedDeg, UnsignedDegrees};
//!
//! let heading = UnsignedDegrees::new(350.0);
//! let turned = heading + 20.0;
//! assert_eq!(turned.value(), 10.0);
//! assert_eq!(turned.to::<SignedDeg>().value(), 10.0);
//! assert_eq!(heading.to::<SignedDeg>().value(), -10.0);
//! ```
//!
//! Arcs:
//!
//! ```rust
//! use circval_core::{CircArc, ranges::UnsignedDeg};
//!
//! let a = CircArc::<UnsignedDeg>::from_raw(350.0, 20.0);
//! let b = CircArc::<UnsignedDeg>::from_raw(5.0, 5.0);
//! assert!(a.contains_arc(&b));
//! assert!(a.intersects(&b));
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `circval-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! circval-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`. The
//! [`RangeRegistry`] needs `std`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support and the named range registry.
//! - `serde`: `serde` support for values, lengths, arcs and [`RangeSpec`]; values serialize as the raw `f64`.
//! - `config`: TOML loading for [`RangeRegistry`].
//! - `parallel`: runs [`ArcTester`] sweeps on the `rayon` thread pool.
//!
//! # Panics and errors
//!
//! Circular arithmetic, conversions and arc predicates are total: out-of-domain inputs are wrapped or clamped, never
//! rejected, and NaN propagates according to IEEE-754. Only the runtime surfaces return `Result`: [`RangeSpec::new`]
//! ([`RangeError`]), the registry ([`RegistryError`]) and the sweep harness ([`SweepError`]).
//!
//! # Logging
//!
//! The registry and the sweep harness emit records through the `log` facade. No logger is installed.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod arc;
mod arc_length;
mod circular;
mod descriptor;
mod error;
mod macros;
mod math;
mod range;
mod tester;
mod trig;

#[cfg(feature = "std")]
mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use arc::CircArc;
pub use arc_length::ArcLength;
pub use circular::Circular;
pub use descriptor::{convert, convert_length, RangeSpec};
pub use error::{RangeError, SweepError, SweepResult, Violation};
pub use range::WrapRange;
pub use tester::{ArcTester, ExpectedCounts, SweepReport};
pub use trig::{acos, asin, atan, atan2};

#[cfg(feature = "std")]
pub use error::{RegistryError, RegistryResult};
#[cfg(feature = "std")]
pub use registry::RangeRegistry;

#[cfg(feature = "serde")]
pub use circular::serde_with_range;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined range markers and their `Circular` aliases.
///
/// These are defined in `circval-core` so the cross-range `From` impls don't run into Rust's orphan rules.
pub mod ranges;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // A hand-written range outside the predefined set
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Compass;
    impl WrapRange for Compass {
        const LOWER: f64 = 0.0;
        const UPPER: f64 = 32.0;
        const ZERO: f64 = 0.0;
        const SYMBOL: &'static str = "pt";
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Weekday;
    impl WrapRange for Weekday {
        const LOWER: f64 = 1.0;
        const UPPER: f64 = 8.0;
        const ZERO: f64 = 1.0;
        const SYMBOL: &'static str = "dow";
    }

    type Points = Circular<Compass>;
    type Days = Circular<Weekday>;

    #[test]
    fn custom_range_wraps() {
        assert_eq!(Points::new(33.0).value(), 1.0);
        assert_eq!(Days::new(8.0).value(), 1.0);
        assert_eq!((Days::new(6.0) + 3.0).value(), 2.0);
        assert_eq!(format!("{}", Days::new(3.0)), "3 dow");
    }

    #[test]
    fn custom_range_converts() {
        let east = Points::new(8.0);
        assert_eq!(east.to::<ranges::UnsignedDeg>().value(), 90.0);
        assert_abs_diff_eq!(
            ranges::UnsignedDegrees::new(180.0).to::<Compass>().value(),
            16.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(Days::new(4.5).to::<ranges::Turn>().value(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn custom_range_arcs() {
        let weekend = CircArc::<Weekday>::from_raw(6.0, 2.0);
        assert!(weekend.contains(Days::new(7.0)));
        assert!(weekend.contains(Days::new(1.0)));
        assert!(!weekend.contains(Days::new(2.0)));
        assert_eq!(weekend.end().value(), 1.0);
    }

    #[test]
    fn custom_range_sweep() {
        let report = ArcTester::<Weekday>::new(7).unwrap().run().unwrap();
        assert_eq!(report.identical, 98);
    }

    #[test]
    fn runtime_and_typed_views_agree() {
        let spec = RangeSpec::of::<Weekday>();
        assert_eq!(spec.wrap(9.5), Days::new(9.5).value());
        assert_eq!(
            convert(9.5, spec, RangeSpec::of::<Compass>()),
            Days::new(9.5).to::<Compass>().value()
        );
    }

    #[test]
    fn inverse_trig_needs_destination() {
        let a = atan2::<Compass>(1.0, 0.0);
        assert_abs_diff_eq!(a.value(), 8.0, epsilon = 1e-12);
        let d = asin::<Weekday>(0.0);
        assert_eq!(d.value(), 1.0);
    }
}
