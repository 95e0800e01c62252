//! Powers of `(1 - sqrt 5) / 2` by direct multiplication and by the
//! Fibonacci-style recurrence, which amplifies rounding error.

use fprec_core::describe;
use serde::{Deserialize, Serialize};

use crate::config::RecurrenceConfig;

/// Term `i` of both sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceRow {
    /// Term index.
    pub index: usize,
    /// `f[i] = b * f[i-1]`, multiplied in double precision and stored as single.
    pub power: f32,
    /// `g[i] = g[i-1] + g[i-2]`.
    pub recurrence: f32,
    /// BitView of `power`.
    pub power_bits: String,
    /// BitView of `recurrence`.
    pub recurrence_bits: String,
}

/// Both sequences, term by term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceReport {
    /// Base `b` in double precision.
    pub base: f64,
    /// Rows `0..terms`.
    pub rows: Vec<RecurrenceRow>,
    /// First index where the sequences disagree in sign, if any.
    pub first_sign_flip: Option<usize>,
}

/// Generates `terms` rows of both sequences, stored in single precision.
///
/// `terms` below two yields only the seeds that fit; [`RecurrenceConfig::validate`]
/// rejects such configurations.
pub fn run_recurrence(config: &RecurrenceConfig) -> RecurrenceReport {
    let base = (1.0 - 5f64.sqrt()) / 2.0;
    let seeds = [1.0, base as f32];
    let terms = config.terms;
    let mut power = vec![0f32; terms];
    let mut recurrence = vec![0f32; terms];
    for (i, seed) in seeds.into_iter().take(terms).enumerate() {
        power[i] = seed;
        recurrence[i] = seed;
    }
    for i in 2..terms {
        power[i] = (base * f64::from(power[i - 1])) as f32;
        recurrence[i] = recurrence[i - 1] + recurrence[i - 2];
    }

    let rows: Vec<_> = power
        .iter()
        .zip(&recurrence)
        .enumerate()
        .map(|(index, (&p, &g))| RecurrenceRow {
            index,
            power: p,
            recurrence: g,
            power_bits: describe(p),
            recurrence_bits: describe(g),
        })
        .collect();
    let first_sign_flip = rows
        .iter()
        .find(|row| row.power.is_sign_negative() != row.recurrence.is_sign_negative())
        .map(|row| row.index);
    RecurrenceReport {
        base,
        rows,
        first_sign_flip,
    }
}
