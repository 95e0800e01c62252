//! Periodic BitView snapshots of a compensated summer.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bitview::describe;
use crate::precision::IeeeFloat;
use crate::summer::{CompensatedSummer, Snapshot, StepTrace};

/// Every `every`-th addition (1-based) is a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoints {
    /// Checkpoint period.
    pub every: NonZeroU64,
}

impl Checkpoints {
    /// Creates a schedule; `None` when `every` is zero.
    pub fn every(every: u64) -> Option<Self> {
        NonZeroU64::new(every).map(|every| Self { every })
    }

    /// Whether the 1-based `step` is a checkpoint.
    pub fn is_due(&self, step: u64) -> bool {
        step % self.every.get() == 0
    }
}

/// BitView text of both accumulators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSnapshot {
    /// Rendered running total.
    pub total: String,
    /// Rendered residual.
    pub residual: String,
}

impl<F: IeeeFloat> Snapshot<F> {
    /// Renders both accumulators through BitView.
    pub fn render(&self) -> RenderedSnapshot {
        RenderedSnapshot {
            total: describe(self.total),
            residual: describe(self.residual),
        }
    }
}

/// Rendered record of one traced addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// 1-based index of the addition.
    pub step: u64,
    /// Value added.
    pub input: String,
    /// Rounded `total + input`.
    pub candidate_total: String,
    /// Accumulators before the addition.
    pub before: RenderedSnapshot,
    /// Part of the input represented in the new total.
    pub effective_added: String,
    /// Part of the input discarded by rounding.
    pub lost: String,
    /// Accumulators after the addition.
    pub after: RenderedSnapshot,
}

impl TraceRecord {
    /// Labelled text lines, one per quantity.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("<i = {}>", self.step),
            format!("a         = {}", self.input),
            format!("w         = {}", self.candidate_total),
            format!("s(before) = {}", self.before.total),
            format!("t(before) = {}", self.before.residual),
            format!("tu        = {}", self.effective_added),
            format!("tl        = {}", self.lost),
            format!("s(after)  = {}", self.after.total),
            format!("t(after)  = {}", self.after.residual),
        ]
    }
}

impl<F: IeeeFloat> StepTrace<F> {
    /// Renders the trace for the given 1-based step number.
    pub fn record(&self, step: u64) -> TraceRecord {
        TraceRecord {
            step,
            input: describe(self.input),
            candidate_total: describe(self.candidate_total),
            before: self.before.render(),
            effective_added: describe(self.effective_added),
            lost: describe(self.lost),
            after: self.after.render(),
        }
    }
}

/// Sums `values` with a fresh summer, passing a [`TraceRecord`] to `sink` at
/// every checkpoint.
pub fn sum_with_checkpoints<F, I, S>(
    values: I,
    checkpoints: Option<Checkpoints>,
    mut sink: S,
) -> CompensatedSummer<F>
where
    F: IeeeFloat,
    I: IntoIterator<Item = F>,
    S: FnMut(TraceRecord),
{
    let mut summer = CompensatedSummer::new();
    for x in values {
        let trace = summer.add_traced(x);
        let step = summer.count();
        if let Some(schedule) = checkpoints {
            if schedule.is_due(step) {
                let record = trace.record(step);
                debug!(
                    step,
                    total = %record.after.total,
                    residual = %record.after.residual,
                    "summation checkpoint"
                );
                sink(record);
            }
        }
    }
    summer
}
