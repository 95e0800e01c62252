//! Catastrophic cancellation in Cramer's rule for a nearly singular 2x2 system.

use fprec_core::describe;
use serde::{Deserialize, Serialize};

use crate::config::CancellationConfig;

/// One intermediate expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationStep {
    /// Expression label, e.g. `d*e-b*f`.
    pub expr: String,
    /// Single precision value.
    pub value: f32,
    /// BitView of `value`.
    pub bits: String,
}

/// Outcome of the cancellation experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationReport {
    /// Intermediates in evaluation order, ending with `x` and `y`.
    pub steps: Vec<CancellationStep>,
    /// Solution computed in single precision.
    pub x: f32,
    /// Solution computed in single precision.
    pub y: f32,
    /// Solution from the same coefficients in double precision.
    pub reference_x: f64,
    /// Solution from the same coefficients in double precision.
    pub reference_y: f64,
}

fn step(expr: &str, value: f32) -> CancellationStep {
    CancellationStep {
        expr: expr.to_string(),
        value,
        bits: describe(value),
    }
}

/// Solves `a x + b y = e`, `c x + d y = f` and records every product and difference.
pub fn run_cancellation(config: &CancellationConfig) -> CancellationReport {
    let CancellationConfig { a, b, c, d, e, f } = *config;
    let de = d * e;
    let bf = b * f;
    let ad = a * d;
    let bc = b * c;
    let numerator = de - bf;
    let determinant = ad - bc;
    let x = numerator / determinant;
    let y = (e - a * x) / b;

    let w = f64::from;
    let reference_x = (w(d) * w(e) - w(b) * w(f)) / (w(a) * w(d) - w(b) * w(c));
    let reference_y = (w(e) - w(a) * reference_x) / w(b);

    CancellationReport {
        steps: vec![
            step("d*e", de),
            step("b*f", bf),
            step("d*e-b*f", numerator),
            step("a*d", ad),
            step("b*c", bc),
            step("a*d-b*c", determinant),
            step("x", x),
            step("y", y),
        ],
        x,
        y,
        reference_x,
        reference_y,
    }
}
