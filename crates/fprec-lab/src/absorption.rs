//! Absorption of `+1` into large powers of ten.

use fprec_core::{describe, IeeeFloat, PrecisionClass};
use serde::{Deserialize, Serialize};

use crate::config::{AbsorptionConfig, ExponentRange};

/// One power of ten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionRow {
    /// Decimal exponent `n` of `a = 10^n`.
    pub power: i32,
    /// `a`, widened to double precision.
    pub a: f64,
    /// `a + 1`, widened to double precision.
    pub b: f64,
    /// Whether `a + 1 == a` in the working precision.
    pub absorbed: bool,
    /// BitView of `1`.
    pub one_bits: String,
    /// BitView of `a`.
    pub a_bits: String,
    /// BitView of `a + 1`.
    pub b_bits: String,
}

/// Rows for one precision class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionReport {
    /// Working precision.
    pub precision: PrecisionClass,
    /// One row per power of ten.
    pub rows: Vec<AbsorptionRow>,
    /// Smallest power at which `+1` is absorbed, if any.
    pub first_absorbed: Option<i32>,
}

/// Multiplies `10^begin` by ten until `10^end`, adding one at each power.
pub fn run_absorption<F: IeeeFloat>(range: ExponentRange) -> AbsorptionReport {
    let ten = F::from_f64(10.0);
    let mut a = F::from_f64(10f64.powi(range.begin));
    let mut rows = Vec::new();
    for power in (range.begin + 1)..=range.end {
        a = a * ten;
        let b = a + F::ONE;
        rows.push(AbsorptionRow {
            power,
            a: a.to_f64(),
            b: b.to_f64(),
            absorbed: a == b,
            one_bits: describe(F::ONE),
            a_bits: describe(a),
            b_bits: describe(b),
        });
    }
    let first_absorbed = rows.iter().find(|row| row.absorbed).map(|row| row.power);
    AbsorptionReport {
        precision: F::CLASS,
        rows,
        first_absorbed,
    }
}

/// Runs both configured ranges: single precision first, then double.
pub fn run_absorption_all(config: &AbsorptionConfig) -> Vec<AbsorptionReport> {
    vec![
        run_absorption::<f32>(config.single),
        run_absorption::<f64>(config.double),
    ]
}
