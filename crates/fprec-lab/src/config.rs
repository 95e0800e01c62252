use std::fs;
use std::path::Path;

use fprec_core::errors::{ErrorInfo, FprecError};
use fprec_core::PrecisionClass;
use serde::{Deserialize, Serialize};

use crate::serde::from_yaml_slice;

fn invalid(code: &str, message: &str, section: &str) -> FprecError {
    FprecError::Config(ErrorInfo::new(code, message).with_context("section", section))
}

/// Parameters of every experiment, loaded from YAML.
///
/// Each section is optional; a missing section falls back to the built-in
/// parameters of the corresponding experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LabConfig {
    /// Repeated addition of a single value.
    #[serde(default)]
    pub summation: SummationConfig,
    /// Absorption of `+1` into growing powers of ten.
    #[serde(default)]
    pub absorption: AbsorptionConfig,
    /// Cancellation in a 2x2 linear solve.
    #[serde(default)]
    pub cancellation: CancellationConfig,
    /// Stable versus unstable recurrences for powers of the golden ratio conjugate.
    #[serde(default)]
    pub recurrence: RecurrenceConfig,
    /// Euler integration of exponential decay.
    #[serde(default)]
    pub decay: DecayConfig,
    /// Semi-implicit Euler integration of a harmonic oscillator.
    #[serde(default)]
    pub oscillator: OscillatorConfig,
    /// Two-body orbit stepping.
    #[serde(default)]
    pub orbit: OrbitConfig,
    /// Order sensitivity of summation.
    #[serde(default)]
    pub order: OrderConfig,
}

impl LabConfig {
    /// Checks the ranges of every section.
    pub fn validate(&self) -> Result<(), FprecError> {
        self.summation.validate()?;
        self.absorption.validate()?;
        self.cancellation.validate()?;
        self.recurrence.validate()?;
        self.decay.validate()?;
        self.oscillator.validate()?;
        self.orbit.validate()?;
        self.order.validate()
    }
}

/// Loads and validates a YAML configuration file.
pub fn load_config(path: &Path) -> Result<LabConfig, FprecError> {
    let bytes = fs::read(path).map_err(|err| {
        FprecError::Io(
            ErrorInfo::new("config_read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let config: LabConfig = from_yaml_slice(&bytes)?;
    config.validate()?;
    Ok(config)
}

/// Repeatedly adds `value` (rounded to single precision) `count` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummationConfig {
    /// Term added at every step.
    #[serde(default = "default_summand")]
    pub value: f64,
    /// Number of additions.
    #[serde(default = "default_summation_count")]
    pub count: u64,
    /// Record a BitView trace every `trace_every` additions; 0 disables tracing.
    ///
    /// Traces are kept in memory, `count / trace_every` of them.
    #[serde(default)]
    pub trace_every: u64,
}

fn default_summand() -> f64 {
    0.1
}

fn default_summation_count() -> u64 {
    10_000
}

impl Default for SummationConfig {
    fn default() -> Self {
        Self {
            value: default_summand(),
            count: default_summation_count(),
            trace_every: 0,
        }
    }
}

impl SummationConfig {
    /// Rejects a non-finite summand.
    pub fn validate(&self) -> Result<(), FprecError> {
        if !self.value.is_finite() {
            return Err(invalid("summand_not_finite", "summand must be finite", "summation"));
        }
        Ok(())
    }
}

/// Inclusive range of decimal exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentRange {
    /// Starting power; the first reported row is `begin + 1`.
    pub begin: i32,
    /// Last reported power.
    pub end: i32,
}

/// Powers of ten scanned for each precision class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsorptionConfig {
    /// Range scanned in single precision.
    #[serde(default = "default_single_range")]
    pub single: ExponentRange,
    /// Range scanned in double precision.
    #[serde(default = "default_double_range")]
    pub double: ExponentRange,
}

fn default_single_range() -> ExponentRange {
    ExponentRange { begin: 5, end: 9 }
}

fn default_double_range() -> ExponentRange {
    ExponentRange { begin: 14, end: 17 }
}

impl Default for AbsorptionConfig {
    fn default() -> Self {
        Self {
            single: default_single_range(),
            double: default_double_range(),
        }
    }
}

impl AbsorptionConfig {
    /// Requires `0 <= begin < end` for both ranges.
    pub fn validate(&self) -> Result<(), FprecError> {
        for range in [self.single, self.double] {
            if range.begin >= range.end || range.begin < 0 {
                return Err(invalid(
                    "exponent_range",
                    "expected 0 <= begin < end",
                    "absorption",
                ));
            }
        }
        Ok(())
    }
}

/// Coefficients of `a x + b y = e`, `c x + d y = f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationConfig {
    /// Coefficient of x in the first equation.
    pub a: f32,
    /// Coefficient of y in the first equation.
    pub b: f32,
    /// Coefficient of x in the second equation.
    pub c: f32,
    /// Coefficient of y in the second equation.
    pub d: f32,
    /// Right-hand side of the first equation.
    pub e: f32,
    /// Right-hand side of the second equation.
    pub f: f32,
}

impl Default for CancellationConfig {
    fn default() -> Self {
        Self {
            a: 0.780,
            b: 0.563,
            c: 0.913,
            d: 0.659,
            e: 0.217,
            f: 0.254,
        }
    }
}

impl CancellationConfig {
    /// Rejects non-finite coefficients.
    pub fn validate(&self) -> Result<(), FprecError> {
        let coefficients = [self.a, self.b, self.c, self.d, self.e, self.f];
        if coefficients.iter().any(|value| !value.is_finite()) {
            return Err(invalid(
                "coefficient_not_finite",
                "coefficients must be finite",
                "cancellation",
            ));
        }
        Ok(())
    }
}

/// Number of recurrence terms to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceConfig {
    /// Rows in the report, including the two seeds.
    pub terms: usize,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self { terms: 50 }
    }
}

impl RecurrenceConfig {
    /// Requires at least the two seed terms.
    pub fn validate(&self) -> Result<(), FprecError> {
        if self.terms < 2 {
            return Err(invalid("too_few_terms", "need at least two terms", "recurrence"));
        }
        Ok(())
    }
}

/// Euler integration of `dx/dt = rate * x` over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Number of Euler steps.
    pub steps: u64,
    /// Decay rate `a`.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Initial value `x(0)`.
    #[serde(default = "default_initial")]
    pub initial: f64,
    /// Arithmetic used for the state.
    #[serde(default = "default_precision")]
    pub precision: PrecisionClass,
}

fn default_rate() -> f64 {
    -1.0
}

fn default_initial() -> f64 {
    1.0
}

fn default_precision() -> PrecisionClass {
    PrecisionClass::Single
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            rate: default_rate(),
            initial: default_initial(),
            precision: default_precision(),
        }
    }
}

impl DecayConfig {
    /// Requires a positive step count.
    pub fn validate(&self) -> Result<(), FprecError> {
        if self.steps == 0 {
            return Err(invalid("zero_steps", "steps must be positive", "decay"));
        }
        Ok(())
    }
}

/// Semi-implicit Euler integration of `x'' = rate * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorConfig {
    /// Length of the integration interval.
    pub time_limit: f64,
    /// Number of steps over the interval.
    pub steps: u64,
    /// Spring coefficient `a`.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Initial position.
    #[serde(default = "default_initial")]
    pub initial_position: f64,
    /// Initial velocity.
    #[serde(default)]
    pub initial_velocity: f64,
    /// Record a sample every `sample_every` steps; 0 keeps only the final state.
    #[serde(default)]
    pub sample_every: u64,
    /// Arithmetic used for the state.
    #[serde(default = "default_precision")]
    pub precision: PrecisionClass,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            time_limit: 10.0,
            steps: 1000,
            rate: default_rate(),
            initial_position: default_initial(),
            initial_velocity: 0.0,
            sample_every: 100,
            precision: default_precision(),
        }
    }
}

impl OscillatorConfig {
    /// Requires a positive step count and a positive, finite time limit.
    pub fn validate(&self) -> Result<(), FprecError> {
        if self.steps == 0 {
            return Err(invalid("zero_steps", "steps must be positive", "oscillator"));
        }
        if !(self.time_limit.is_finite() && self.time_limit > 0.0) {
            return Err(invalid(
                "time_limit",
                "time limit must be positive and finite",
                "oscillator",
            ));
        }
        Ok(())
    }
}

/// Two equal bodies released at `(±1, 0)` with velocities `(0, ±1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Length of the integration interval.
    pub time_limit: f64,
    /// Number of steps over the interval.
    pub steps: u64,
    /// Gravitational constant.
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Record positions every `sample_every` steps; 0 keeps only the final state.
    #[serde(default)]
    pub sample_every: u64,
    /// Arithmetic used for the state.
    #[serde(default = "default_precision")]
    pub precision: PrecisionClass,
}

fn default_gravity() -> f64 {
    4.0
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            time_limit: 10.0,
            steps: 10_000,
            gravity: default_gravity(),
            sample_every: 1000,
            precision: default_precision(),
        }
    }
}

impl OrbitConfig {
    /// Requires a positive step count and a positive, finite time limit.
    pub fn validate(&self) -> Result<(), FprecError> {
        if self.steps == 0 {
            return Err(invalid("zero_steps", "steps must be positive", "orbit"));
        }
        if !(self.time_limit.is_finite() && self.time_limit > 0.0) {
            return Err(invalid(
                "time_limit",
                "time limit must be positive and finite",
                "orbit",
            ));
        }
        Ok(())
    }
}

/// Multiset summed forward and in a seeded shuffled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Number of terms in the multiset.
    pub terms: usize,
    /// Seed of the shuffle.
    pub seed: u64,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            terms: 1000,
            seed: 2024,
        }
    }
}

impl OrderConfig {
    /// Requires a non-empty multiset.
    pub fn validate(&self) -> Result<(), FprecError> {
        if self.terms == 0 {
            return Err(invalid("zero_terms", "terms must be positive", "order"));
        }
        Ok(())
    }
}
