//! Explicit time stepping of linear ODEs.
//!
//! Both drivers advance the clock twice: once with plain addition of `dt`
//! and once through a [`CompensatedSummer`], so the report shows how far the
//! naive clock drifts from `steps * dt`.

use fprec_core::{describe, CompensatedSummer, IeeeFloat, PrecisionClass};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{DecayConfig, OscillatorConfig};

/// Clock value reached by naive and compensated accumulation of `dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockReport {
    /// Intended end time.
    pub target: f64,
    /// `t += dt` in the working precision.
    pub naive: f64,
    /// `dt` fed through a compensated summer.
    pub compensated: f64,
}

struct Clock<F: IeeeFloat> {
    dt: F,
    naive: F,
    compensated: CompensatedSummer<F>,
}

impl<F: IeeeFloat> Clock<F> {
    fn new(dt: F) -> Self {
        Self {
            dt,
            naive: F::ZERO,
            compensated: CompensatedSummer::new(),
        }
    }

    fn tick(&mut self) {
        self.naive = self.naive + self.dt;
        self.compensated.add(self.dt);
    }

    fn now(&self) -> F {
        self.compensated.value()
    }

    fn report(&self, target: f64) -> ClockReport {
        ClockReport {
            target,
            naive: self.naive.to_f64(),
            compensated: self.compensated.value().to_f64(),
        }
    }
}

/// Outcome of the exponential decay integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayReport {
    /// Working precision.
    pub precision: PrecisionClass,
    /// Number of Euler steps.
    pub steps: u64,
    /// Step size in the working precision.
    pub dt: f64,
    /// `x(1)` from the integrator.
    pub x: f64,
    /// BitView of `x(1)`.
    pub x_bits: String,
    /// `initial * exp(rate)`.
    pub exact: f64,
    /// `x - exact`.
    pub error: f64,
    /// Clock accumulation.
    pub clock: ClockReport,
}

/// Integrates `dx/dt = rate * x` over `[0, 1]` with explicit Euler.
pub fn run_decay<F: IeeeFloat>(config: &DecayConfig) -> DecayReport {
    let precision = F::CLASS;
    info!(steps = config.steps, %precision, "running decay integration");
    let rate = F::from_f64(config.rate);
    let dt = F::from_f64(1.0 / config.steps as f64);
    let mut x = F::from_f64(config.initial);
    let mut clock = Clock::new(dt);
    for _ in 0..config.steps {
        let v = rate * x * dt;
        x = x + v;
        clock.tick();
    }
    let exact = config.initial * config.rate.exp();
    DecayReport {
        precision,
        steps: config.steps,
        dt: dt.to_f64(),
        x: x.to_f64(),
        x_bits: describe(x),
        exact,
        error: x.to_f64() - exact,
        clock: clock.report(1.0),
    }
}

/// Dispatches [`run_decay`] on the configured precision.
pub fn run_decay_configured(config: &DecayConfig) -> DecayReport {
    match config.precision {
        PrecisionClass::Single => run_decay::<f32>(config),
        PrecisionClass::Double => run_decay::<f64>(config),
    }
}

/// State of the oscillator at one sampled step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSample {
    /// Step index (1-based).
    pub step: u64,
    /// Compensated clock value.
    pub t: f64,
    /// Position.
    pub x: f64,
    /// Velocity.
    pub v: f64,
    /// Closed-form position at `t`.
    pub exact: f64,
}

/// Outcome of the oscillator integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorReport {
    /// Working precision.
    pub precision: PrecisionClass,
    /// Step size in the working precision.
    pub dt: f64,
    /// Sampled states, ending with the final step.
    pub samples: Vec<OscillatorSample>,
    /// Largest `|x - exact|` among the samples.
    pub max_abs_error: f64,
    /// Clock accumulation.
    pub clock: ClockReport,
}

fn closed_form(config: &OscillatorConfig, t: f64) -> f64 {
    let omega = (-config.rate).sqrt();
    if omega.is_nan() || omega == 0.0 {
        // non-oscillatory coefficient: no closed form reported
        return f64::NAN;
    }
    config.initial_position * (omega * t).cos() + config.initial_velocity / omega * (omega * t).sin()
}

/// Integrates `x'' = rate * x` with semi-implicit Euler (`v` first, then `x`).
pub fn run_oscillator<F: IeeeFloat>(config: &OscillatorConfig) -> OscillatorReport {
    let precision = F::CLASS;
    info!(steps = config.steps, %precision, "running oscillator integration");
    let rate = F::from_f64(config.rate);
    let dt = F::from_f64(config.time_limit / config.steps as f64);
    let mut x = F::from_f64(config.initial_position);
    let mut v = F::from_f64(config.initial_velocity);
    let mut clock = Clock::new(dt);
    let mut samples = Vec::new();
    for step in 1..=config.steps {
        v = v + rate * x * dt;
        x = x + v * dt;
        clock.tick();
        let due = config.sample_every != 0 && step % config.sample_every == 0;
        if due || step == config.steps {
            let t = clock.now().to_f64();
            samples.push(OscillatorSample {
                step,
                t,
                x: x.to_f64(),
                v: v.to_f64(),
                exact: closed_form(config, t),
            });
        }
    }
    let max_abs_error = samples
        .iter()
        .map(|s| (s.x - s.exact).abs())
        .filter(|e| e.is_finite())
        .fold(0.0, f64::max);
    OscillatorReport {
        precision,
        dt: dt.to_f64(),
        samples,
        max_abs_error,
        clock: clock.report(config.time_limit),
    }
}

/// Dispatches [`run_oscillator`] on the configured precision.
pub fn run_oscillator_configured(config: &OscillatorConfig) -> OscillatorReport {
    match config.precision {
        PrecisionClass::Single => run_oscillator::<f32>(config),
        PrecisionClass::Double => run_oscillator::<f64>(config),
    }
}
