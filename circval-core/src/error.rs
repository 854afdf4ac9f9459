//! Error types for the fallible surfaces of circval.
//!
//! Circular arithmetic itself is total and never returns these. They cover runtime range validation, the named
//! range registry and the arc invariant sweep.

use thiserror::Error;

/// A runtime range descriptor failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// A bound is `NaN` or infinite.
    #[error("range bounds must be finite, got [{lower}, {upper})")]
    NonFinite {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },

    /// `upper <= lower`, leaving no circumference.
    #[error("range upper bound {upper} must exceed lower bound {lower}")]
    Empty {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },

    /// The zero representative is not inside the domain.
    #[error("range zero {zero} lies outside [{lower}, {upper})")]
    ZeroOutOfDomain {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
        /// Requested zero.
        zero: f64,
    },
}

/// Which arc invariant a sweep found broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Two arcs compare equal but do not contain each other.
    EqualNotMutual,
    /// Two arcs contain each other but do not compare equal.
    MutualNotEqual,
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Violation::EqualNotMutual => f.write_str("equal arcs without mutual containment"),
            Violation::MutualNotEqual => f.write_str("mutual containment between unequal arcs"),
        }
    }
}

/// Result type for sweep operations
pub type SweepResult<T> = core::result::Result<T, SweepError>;

/// Errors reported by [`ArcTester`](crate::ArcTester).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// A sweep needs at least one step.
    #[error("arc sweep needs at least one step")]
    ZeroSteps,

    /// The grid is too fine for its arc count or closed-form counters to be represented.
    #[error("arc sweep with {0} steps overflows its counters")]
    TooManySteps(usize),

    /// An arc pair broke the equality/containment equivalence.
    #[error("{kind} for arcs (start {first_start}, length {first_length}) and (start {second_start}, length {second_length})")]
    InvariantViolated {
        /// The broken invariant.
        kind: Violation,
        /// Start of the first arc.
        first_start: f64,
        /// Length of the first arc.
        first_length: f64,
        /// Start of the second arc.
        second_start: f64,
        /// Length of the second arc.
        second_length: f64,
    },

    /// A counter disagreed with its closed form.
    #[error("{counter}: expected {expected}, counted {actual}")]
    CountMismatch {
        /// Name of the counter.
        counter: &'static str,
        /// Closed-form value.
        expected: u64,
        /// Value observed by the sweep.
        actual: u64,
    },
}

/// Result type for registry operations
#[cfg(feature = "std")]
pub type RegistryResult<T> = core::result::Result<T, RegistryError>;

/// Errors raised while building or querying a [`RangeRegistry`](crate::RangeRegistry).
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No range is registered under this name.
    #[error("unknown range: {0}")]
    UnknownRange(String),

    /// A named entry failed validation.
    #[error("invalid range '{name}': {source}")]
    InvalidRange {
        /// Name the entry was registered under.
        name: String,
        /// Why validation failed.
        #[source]
        source: RangeError,
    },

    /// The configuration file could not be read.
    #[cfg(feature = "config")]
    #[error("failed to read range config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid TOML for a range table.
    #[cfg(feature = "config")]
    #[error("failed to parse range config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_messages() {
        let e = RangeError::Empty {
            lower: 10.0,
            upper: 3.0,
        };
        assert_eq!(e.to_string(), "range upper bound 3 must exceed lower bound 10");

        let e = RangeError::ZeroOutOfDomain {
            lower: 0.0,
            upper: 1.0,
            zero: 1.0,
        };
        assert_eq!(e.to_string(), "range zero 1 lies outside [0, 1)");
    }

    #[test]
    fn sweep_error_messages() {
        let e = SweepError::CountMismatch {
            counter: "intersecting",
            expected: 10,
            actual: 9,
        };
        assert_eq!(e.to_string(), "intersecting: expected 10, counted 9");
        assert_eq!(
            SweepError::TooManySteps(70_000).to_string(),
            "arc sweep with 70000 steps overflows its counters"
        );

        let e = SweepError::InvariantViolated {
            kind: Violation::MutualNotEqual,
            first_start: 0.0,
            first_length: 1.0,
            second_start: 0.5,
            second_length: 1.0,
        };
        assert!(e.to_string().starts_with("mutual containment between unequal arcs"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn registry_error_keeps_source() {
        use std::error::Error as _;

        let e = RegistryError::InvalidRange {
            name: "compass".into(),
            source: RangeError::NonFinite {
                lower: f64::NAN,
                upper: 1.0,
            },
        };
        assert!(e.to_string().starts_with("invalid range 'compass'"));
        assert!(e.source().is_some());
    }
}
