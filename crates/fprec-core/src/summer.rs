//! Naive and compensated running sums.

use serde::{Deserialize, Serialize};

use crate::precision::{IeeeFloat, PrecisionClass};

/// Common surface of the running-sum accumulators.
pub trait Accumulator<F: IeeeFloat> {
    /// Folds one value into the sum.
    fn add(&mut self, x: F);

    /// Current value of the sum.
    fn value(&self) -> F;

    /// Folds every value of `values` into the sum, in iteration order.
    fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = F>,
        Self: Sized,
    {
        for x in values {
            self.add(x);
        }
    }
}

/// Plain left-to-right summation, kept as the baseline for comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NaiveSummer<F: IeeeFloat> {
    total: F,
}

impl<F: IeeeFloat> NaiveSummer<F> {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self { total: F::ZERO }
    }
}

impl<F: IeeeFloat> Accumulator<F> for NaiveSummer<F> {
    fn add(&mut self, x: F) {
        self.total = self.total + x;
    }

    fn value(&self) -> F {
        self.total
    }
}

/// Running total and recovered rounding residual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummationState<F> {
    /// Main accumulator.
    pub total: F,
    /// Sum of the low-order parts discarded by each addition into `total`.
    pub residual: F,
}

/// Read-only copy of a summer's state.
pub type Snapshot<F> = SummationState<F>;

/// Whether a summer has seen any input yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummerPhase {
    /// No `add` call has happened.
    Empty,
    /// At least one value has been added.
    Accumulating,
}

/// Intermediate quantities of a single compensated addition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTrace<F> {
    /// Value passed to `add`.
    pub input: F,
    /// State before the addition.
    pub before: Snapshot<F>,
    /// `total + input`, rounded.
    pub candidate_total: F,
    /// Portion of `input` actually absorbed by `candidate_total`.
    pub effective_added: F,
    /// Portion of `input` that rounding discarded.
    pub lost: F,
    /// State after the addition.
    pub after: Snapshot<F>,
}

/// Two-accumulator compensated summer.
///
/// Each addition recovers the part of the input that rounding dropped from
/// the running total and carries it in a separate residual, so the realised
/// error stays a small multiple of epsilon instead of growing with the number
/// of terms. The summer is confined to one owner: `add` takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct CompensatedSummer<F: IeeeFloat> {
    state: SummationState<F>,
    count: u64,
}

impl<F: IeeeFloat> CompensatedSummer<F> {
    /// Creates a summer with both accumulators at zero.
    pub fn new() -> Self {
        Self {
            state: SummationState {
                total: F::ZERO,
                residual: F::ZERO,
            },
            count: 0,
        }
    }

    /// Precision class of the accumulators.
    pub fn precision(&self) -> PrecisionClass {
        F::CLASS
    }

    /// Adds `x` and returns every intermediate of the update.
    ///
    /// The four operations run in a fixed order; reordering them changes
    /// which rounding error is captured.
    pub fn add_traced(&mut self, x: F) -> StepTrace<F> {
        let before = self.state;
        let candidate_total = before.total + x;
        let effective_added = candidate_total - before.total;
        let lost = x - effective_added;
        self.state = SummationState {
            total: candidate_total,
            residual: before.residual + lost,
        };
        self.count += 1;
        StepTrace {
            input: x,
            before,
            candidate_total,
            effective_added,
            lost,
            after: self.state,
        }
    }

    /// Adds `x` to the sum.
    #[inline]
    pub fn add(&mut self, x: F) {
        self.add_traced(x);
    }

    /// `total + residual`; repeated calls without `add` return identical bits.
    #[inline]
    pub fn value(&self) -> F {
        self.state.total + self.state.residual
    }

    /// Current internal state.
    pub fn snapshot(&self) -> Snapshot<F> {
        self.state
    }

    /// Number of values added so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Current phase of the summer.
    pub fn phase(&self) -> SummerPhase {
        if self.count == 0 {
            SummerPhase::Empty
        } else {
            SummerPhase::Accumulating
        }
    }
}

impl<F: IeeeFloat> Accumulator<F> for CompensatedSummer<F> {
    fn add(&mut self, x: F) {
        CompensatedSummer::add(self, x);
    }

    fn value(&self) -> F {
        CompensatedSummer::value(self)
    }
}

impl<F: IeeeFloat> Extend<F> for CompensatedSummer<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<F: IeeeFloat> FromIterator<F> for CompensatedSummer<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut summer = Self::new();
        summer.extend(iter);
        summer
    }
}
