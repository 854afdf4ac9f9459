//! Wraparound-safe circular values and arcs.
//!
//! `circval` is the user-facing crate in this workspace. It re-exports the full API from `circval-core` plus the
//! predefined ranges (signed/unsigned degrees and radians, gradians, turns, clock hours).
//!
//! The core idea is: a position on a circle is always a `Circular<R>`, where `R` is a zero-sized type describing the
//! domain `[LOWER, UPPER)`. Every construction and every operator wraps back into that domain, so boundary bugs at
//! the wrap point cannot happen.
//!
//! # What this crate solves
//!
//! - Arithmetic and distances across the wrap point (`350° → 10°` is `+20°`, not `-340°`).
//! - Explicit, type-checked conversion between domains (`to::<TargetRange>()`) that preserves the physical angle.
//! - Arcs with containment and intersection predicates, including the whole-circle arc.
//!
//! # What this crate does not try to solve
//!
//! - Circular statistics (means, medians) or random variates.
//! - Set algebra on arcs.
//! - Exact arithmetic: values are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use circval::{SignedDeg, UnsignedDegrees};
//!
//! let a = UnsignedDegrees::new(350.0);
//! let b = UnsignedDegrees::new(10.0);
//! assert_eq!(a.sdist(b), 20.0);
//! assert_eq!(a.pdist(b), 20.0);
//! assert_eq!(b.pdist(a), 340.0);
//! assert_eq!(a.to::<SignedDeg>().value(), -10.0);
//! ```
//!
//! Arcs:
//!
//! ```rust
//! use circval::{CircArc, SignedDeg};
//!
//! let a = CircArc::<SignedDeg>::from_raw(-170.0, 360.0);
//! let b = CircArc::<SignedDeg>::from_raw(-180.0, 360.0);
//! assert!(a.contains_arc(&b));
//! assert_eq!(a, b);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use circval::{SignedDegrees, UnsignedDegrees};
//!
//! let a = SignedDegrees::new(10.0);
//! let b = UnsignedDegrees::new(10.0);
//! let _ = a + b; // different domains need an explicit conversion
//! ```
//!
//! # Custom ranges
//!
//! Implement [`WrapRange`] on a zero-sized marker:
//!
//! ```rust
//! use circval::{Circular, WrapRange};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Weekday;
//! impl WrapRange for Weekday {
//!     const LOWER: f64 = 1.0;
//!     const UPPER: f64 = 8.0;
//!     const ZERO: f64 = 1.0;
//!     const SYMBOL: &'static str = "dow";
//! }
//!
//! let saturday = Circular::<Weekday>::new(6.0);
//! assert_eq!((saturday + 2.0).value(), 1.0);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `circval-core` and the named range registry.
//! - `serde`: `serde` support for values, lengths, arcs and range descriptors.
//! - `config`: TOML loading for [`RangeRegistry`].
//! - `parallel`: runs [`ArcTester`] sweeps on the `rayon` thread pool.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! circval = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Values, lengths and arcs are total: out-of-domain inputs are wrapped or clamped, never rejected, and NaN
//! propagates according to IEEE-754. Runtime descriptors, the registry and the sweep harness return `Result` with
//! [`RangeError`], `RegistryError` and [`SweepError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use circval_core::*;

/// Derive macro used by `circval-core` to define range marker types.
///
/// This macro expands in terms of `crate::WrapRange`, so it is intended for use inside `circval-core` (or crates
/// exposing the same crate-root API). Most users should implement [`WrapRange`] by hand.
pub use circval_derive::WrapRange;

pub use circval_core::ranges::*;
