//! Summation of one multiset in two orders.
//!
//! Compensated summation narrows the spread between orders but does not make
//! the result order independent; the report records whether the bits agree
//! without treating a mismatch as a failure.

use fprec_core::{Accumulator, CompensatedSummer, NaiveSummer};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::OrderConfig;

/// Sums of one ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderedSums {
    /// Plain single precision sum.
    pub naive: f32,
    /// Compensated single precision sum.
    pub compensated: f32,
}

/// Outcome of the order experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    /// Number of terms.
    pub terms: usize,
    /// Shuffle seed.
    pub seed: u64,
    /// Double precision sum of the terms in generation order.
    pub reference: f64,
    /// Terms in generation order.
    pub forward: OrderedSums,
    /// Terms in shuffled order.
    pub shuffled: OrderedSums,
    /// Whether both naive sums have identical bits.
    pub naive_bits_identical: bool,
    /// Whether both compensated sums have identical bits.
    pub compensated_bits_identical: bool,
}

/// Mixed-magnitude terms: large alternating values interleaved with small ones.
pub fn order_terms(terms: usize) -> Vec<f32> {
    (0..terms)
        .map(|i| match i % 4 {
            0 => 1.0e6 + i as f32,
            1 => 0.1 * (i as f32 + 1.0),
            2 => -1.0e6 + 0.5,
            _ => 1.0e-3 * i as f32,
        })
        .collect()
}

fn sums(values: &[f32]) -> OrderedSums {
    let mut naive = NaiveSummer::<f32>::new();
    naive.add_all(values.iter().copied());
    let compensated: CompensatedSummer<f32> = values.iter().copied().collect();
    OrderedSums {
        naive: naive.value(),
        compensated: compensated.value(),
    }
}

/// Sums the generated terms forward and after a seeded shuffle.
pub fn run_order(config: &OrderConfig) -> OrderReport {
    let values = order_terms(config.terms);
    let mut shuffled_values = values.clone();
    let mut rng = StdRng::seed_from_u64(config.seed);
    shuffled_values.shuffle(&mut rng);

    let forward = sums(&values);
    let shuffled = sums(&shuffled_values);
    OrderReport {
        terms: config.terms,
        seed: config.seed,
        reference: values.iter().map(|v| f64::from(*v)).sum(),
        forward,
        shuffled,
        naive_bits_identical: forward.naive.to_bits() == shuffled.naive.to_bits(),
        compensated_bits_identical: forward.compensated.to_bits()
            == shuffled.compensated.to_bits(),
    }
}
