//! Exhaustive invariant sweep over discretized arcs.
//!
//! [`ArcTester`] cuts the circle into `n` equal steps and builds every arc whose start is one of the `n` grid points
//! and whose length is one of the `n + 1` multiples `0, R/n, …, R` (the last one is exactly `R`, a full arc). Every
//! ordered pair of those `n(n + 1)` arcs is checked against the equivalence
//!
//! > `a == b` ⇔ `a.contains_arc(b) && b.contains_arc(a)`
//!
//! and the containment and intersection counters are compared against closed forms (see [`ExpectedCounts`]).
//!
//! ```rust
//! use circval_core::{ArcTester, ranges::TestRange2};
//!
//! let report = ArcTester::<TestRange2>::new(8)?.run()?;
//! assert_eq!(report.identical, 2 * 8 * 8);
//! # Ok::<(), circval_core::SweepError>(())
//! ```

use crate::error::{SweepError, SweepResult, Violation};
use crate::{CircArc, WrapRange};
use core::marker::PhantomData;
use core::ops::Add;
use log::{debug, error, trace};

/// Closed-form counters for a sweep with `n` steps.
///
/// Write `k` for the length index of an arc (length `k·R/n`, `0 <= k <= n`) and count ordered pairs `(a, b)`:
///
/// * **identical** `= 2n²`. Non-full arcs are equal only to themselves: `n·n` pairs. The `n` full arcs are all
///   equal to each other: another `n²` pairs.
/// * **containing** `= n²(n + 1)(n + 8)/6`, the same in both directions. A full `a` contains all `n(n + 1)` arcs,
///   giving `n²(n + 1)`. A non-full `a` of length `k` contains the non-full arcs starting `d` steps after it with
///   length at most `k - d`, i.e. `Σ_{d=0..k} (k - d + 1) = (k + 1)(k + 2)/2` arcs. Summing over `k < n` and the `n`
///   starts gives `n·n(n + 1)(n + 2)/6`. Adding both parts yields the formula.
/// * **intersecting** `= n²(n + 1)² - n²(n² - 1)/6`. Two arcs are disjoint only if neither is full and each ends
///   strictly before the other starts. With `a` starting `d` steps before `b` (`1 <= d < n`), `a` may have `d`
///   lengths (`0..d`) and `b` may have `n - d` lengths, for `n` choices of `a`'s start. Summing `d(n - d)·n` over `d`
///   gives `n²(n² - 1)/6` disjoint pairs out of `n²(n + 1)²`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpectedCounts {
    /// Arcs enumerated: `n(n + 1)`.
    pub arcs: u64,
    /// Ordered pairs: `arcs²`.
    pub pairs: u64,
    /// Pairs that compare equal.
    pub identical: u64,
    /// Pairs where the first arc contains the second (and, by symmetry, the reverse).
    pub containing: u64,
    /// Pairs that share at least one point.
    pub intersecting: u64,
}

impl ExpectedCounts {
    /// Evaluates the closed forms for `n` steps, or `None` when a counter does not fit in a `u64`.
    pub const fn for_steps(n: u64) -> Option<Self> {
        macro_rules! tri {
            ($e:expr) => {
                match $e {
                    Some(v) => v,
                    None => return None,
                }
            };
        }

        let n_plus_1 = tri!(n.checked_add(1));
        let arcs = tri!(n.checked_mul(n_plus_1));
        let pairs = tri!(arcs.checked_mul(arcs));
        let n2 = tri!(n.checked_mul(n));
        let containing = tri!(tri!(n2.checked_mul(n_plus_1)).checked_mul(tri!(n.checked_add(8)))) / 6;
        let disjoint = tri!(n2.checked_mul(n2.saturating_sub(1))) / 6;
        Some(Self {
            arcs,
            pairs,
            identical: tri!(n2.checked_mul(2)),
            containing,
            intersecting: pairs - disjoint,
        })
    }
}

/// Closed forms for [`ArcTester::DEFAULT_STEPS`].
const DEFAULT_EXPECTED: ExpectedCounts = match ExpectedCounts::for_steps(36) {
    Some(counts) => counts,
    None => panic!("default sweep counters overflow"),
};

/// Counters accumulated over a sweep.
///
/// Reports from disjoint slices of the enumeration combine with `+`. The first violation (in enumeration order) is
/// kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    /// Arcs enumerated.
    pub arcs: u64,
    /// Ordered pairs checked.
    pub pairs: u64,
    /// Pairs that compare equal.
    pub identical: u64,
    /// Pairs where the first arc contains the second.
    pub first_contains_second: u64,
    /// Pairs where the second arc contains the first.
    pub second_contains_first: u64,
    /// Pairs that intersect.
    pub intersecting: u64,
    /// Pairs breaking the equality/containment equivalence.
    pub violations: u64,
    /// The earliest violation found.
    pub first_violation: Option<SweepError>,
}

impl SweepReport {
    /// Whether no pair broke the equivalence.
    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

impl Add for SweepReport {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            arcs: self.arcs + rhs.arcs,
            pairs: self.pairs + rhs.pairs,
            identical: self.identical + rhs.identical,
            first_contains_second: self.first_contains_second + rhs.first_contains_second,
            second_contains_first: self.second_contains_first + rhs.second_contains_first,
            intersecting: self.intersecting + rhs.intersecting,
            violations: self.violations + rhs.violations,
            first_violation: self.first_violation.or(rhs.first_violation),
        }
    }
}

/// Brute-force checker of the arc invariants for range `R`.
#[derive(Clone, Copy, Debug)]
pub struct ArcTester<R: WrapRange> {
    steps: usize,
    expected: ExpectedCounts,
    _range: PhantomData<fn() -> R>,
}

impl<R: WrapRange> ArcTester<R> {
    /// Grid resolution used by [`Default`].
    pub const DEFAULT_STEPS: usize = 36;

    /// Creates a tester with `steps` grid points.
    ///
    /// Zero steps is rejected, as is any grid whose arc count or closed-form counters overflow.
    pub fn new(steps: usize) -> SweepResult<Self> {
        if steps == 0 {
            return Err(SweepError::ZeroSteps);
        }
        let fits_index = steps
            .checked_add(1)
            .and_then(|next| steps.checked_mul(next))
            .is_some();
        let expected = u64::try_from(steps)
            .ok()
            .filter(|_| fits_index)
            .and_then(ExpectedCounts::for_steps)
            .ok_or(SweepError::TooManySteps(steps))?;
        Ok(Self {
            steps,
            expected,
            _range: PhantomData,
        })
    }

    /// Grid resolution.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of distinct arcs on the grid, `n(n + 1)`.
    pub fn arc_count(&self) -> usize {
        self.steps * (self.steps + 1)
    }

    /// The `index`-th grid arc: start step `index / (n + 1)`, length step `index % (n + 1)`.
    ///
    /// Indices past [`arc_count`](Self::arc_count) wrap around.
    pub fn arc(&self, index: usize) -> CircArc<R> {
        let n = self.steps;
        let index = index % self.arc_count();
        let (start_step, length_step) = (index / (n + 1), index % (n + 1));
        let step = R::CIRCUMFERENCE / n as f64;
        let length = if length_step == n {
            R::CIRCUMFERENCE
        } else {
            length_step as f64 * step
        };
        CircArc::from_raw(R::LOWER + start_step as f64 * step, length)
    }

    /// Iterates the grid arcs in index order.
    pub fn arcs(&self) -> impl Iterator<Item = CircArc<R>> + '_ {
        (0..self.arc_count()).map(move |i| self.arc(i))
    }

    /// Closed-form counters for this grid.
    pub fn expected(&self) -> ExpectedCounts {
        self.expected
    }

    /// Checks one ordered pair and records the outcome.
    fn check_pair(first: &CircArc<R>, second: &CircArc<R>, report: &mut SweepReport) {
        let first_contains = first.contains_arc(second);
        let second_contains = second.contains_arc(first);

        report.pairs += 1;
        if first_contains {
            report.first_contains_second += 1;
        }
        if second_contains {
            report.second_contains_first += 1;
        }
        if first.intersects(second) {
            report.intersecting += 1;
        }

        let mutual = first_contains && second_contains;
        let kind = if first == second {
            report.identical += 1;
            (!mutual).then_some(Violation::EqualNotMutual)
        } else {
            mutual.then_some(Violation::MutualNotEqual)
        };

        if let Some(kind) = kind {
            report.violations += 1;
            if report.first_violation.is_none() {
                report.first_violation = Some(SweepError::InvariantViolated {
                    kind,
                    first_start: first.start().value(),
                    first_length: first.length().value(),
                    second_start: second.start().value(),
                    second_length: second.length().value(),
                });
            }
        }
    }

    /// Pairs the `index`-th arc with every grid arc.
    fn sweep_row(&self, index: usize) -> SweepReport {
        let first = self.arc(index);
        let mut report = SweepReport::default();
        for second in self.arcs() {
            Self::check_pair(&first, &second, &mut report);
        }
        trace!(
            "{} sweep row {}: {} contained, {} intersecting",
            R::SYMBOL,
            index,
            report.first_contains_second,
            report.intersecting
        );
        report
    }

    /// Checks every ordered pair of grid arcs and returns the raw counters.
    ///
    /// With the `parallel` feature the outer loop runs on the rayon thread pool. The result is identical either
    /// way.
    pub fn sweep(&self) -> SweepReport {
        #[cfg(feature = "parallel")]
        let mut report = {
            use rayon::prelude::*;
            (0..self.arc_count())
                .into_par_iter()
                .map(|i| self.sweep_row(i))
                .reduce(SweepReport::default, |a, b| a + b)
        };

        #[cfg(not(feature = "parallel"))]
        let mut report = (0..self.arc_count())
            .map(|i| self.sweep_row(i))
            .fold(SweepReport::default(), |a, b| a + b);

        report.arcs = self.arc_count() as u64;
        debug!(
            "{} sweep over {} steps: {} pairs, {} identical, {}/{} containing, {} intersecting, {} violations",
            R::SYMBOL,
            self.steps,
            report.pairs,
            report.identical,
            report.first_contains_second,
            report.second_contains_first,
            report.intersecting,
            report.violations
        );
        report
    }

    /// Compares a report against the closed forms for this grid.
    ///
    /// An invariant violation takes precedence over count mismatches.
    pub fn verify(&self, report: &SweepReport) -> SweepResult<()> {
        if let Some(violation) = &report.first_violation {
            error!(
                "{} sweep found {} invariant violations, first: {}",
                R::SYMBOL,
                report.violations,
                violation
            );
            return Err(violation.clone());
        }

        let expected = self.expected();
        let checks = [
            ("arcs", expected.arcs, report.arcs),
            ("pairs", expected.pairs, report.pairs),
            ("identical", expected.identical, report.identical),
            ("first contains second", expected.containing, report.first_contains_second),
            ("second contains first", expected.containing, report.second_contains_first),
            ("intersecting", expected.intersecting, report.intersecting),
        ];
        for (counter, expected, actual) in checks {
            if expected != actual {
                error!(
                    "{} sweep counter '{}' is {}, closed form gives {}",
                    R::SYMBOL,
                    counter,
                    actual,
                    expected
                );
                return Err(SweepError::CountMismatch {
                    counter,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Sweeps the grid and verifies the result.
    pub fn run(&self) -> SweepResult<SweepReport> {
        let report = self.sweep();
        self.verify(&report)?;
        Ok(report)
    }
}

impl<R: WrapRange> Default for ArcTester<R> {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
            expected: DEFAULT_EXPECTED,
            _range: PhantomData,
        }
    }
}
