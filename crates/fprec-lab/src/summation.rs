//! Repeated addition of one value: naive single, compensated single and
//! naive double precision side by side.

use fprec_core::{
    describe, sum_with_checkpoints, Accumulator, Checkpoints, NaiveSummer, TraceRecord,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SummationConfig;

/// Signed deviations from the reference sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummationErrors {
    /// Naive single precision minus reference.
    pub naive_single: f64,
    /// Compensated single precision minus reference.
    pub compensated_single: f64,
    /// Naive double precision minus reference.
    pub naive_double: f64,
}

/// Outcome of the summation experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummationReport {
    /// Term actually added, after rounding to single precision.
    pub value: f32,
    /// Number of additions.
    pub count: u64,
    /// `value * count` evaluated in double precision.
    pub reference: f64,
    /// Plain single precision sum.
    pub naive_single: f32,
    /// Compensated single precision sum.
    pub compensated_single: f32,
    /// Plain double precision sum of the same single precision term.
    pub naive_double: f64,
    /// Deviations from `reference`.
    pub errors: SummationErrors,
    /// BitView rendering of the compensated result.
    pub compensated_bits: String,
    /// Checkpoint traces of the compensated run, one per `trace_every` additions.
    pub traces: Vec<TraceRecord>,
}

/// Runs the summation experiment.
pub fn run_summation(config: &SummationConfig) -> SummationReport {
    let value = config.value as f32;
    let count = config.count;
    info!(value = f64::from(value), count, "running summation experiment");

    let mut naive_single = NaiveSummer::<f32>::new();
    let mut naive_double = NaiveSummer::<f64>::new();
    for _ in 0..count {
        naive_single.add(value);
        naive_double.add(f64::from(value));
    }

    let mut traces = Vec::new();
    let compensated = sum_with_checkpoints(
        (0..count).map(|_| value),
        Checkpoints::every(config.trace_every),
        |record| traces.push(record),
    );

    let reference = f64::from(value) * count as f64;
    let compensated_single = compensated.value();
    SummationReport {
        value,
        count,
        reference,
        naive_single: naive_single.value(),
        compensated_single,
        naive_double: naive_double.value(),
        errors: SummationErrors {
            naive_single: f64::from(naive_single.value()) - reference,
            compensated_single: f64::from(compensated_single) - reference,
            naive_double: naive_double.value() - reference,
        },
        compensated_bits: describe(compensated_single),
        traces,
    }
}
