#![deny(missing_docs)]
#![doc = "Floating-point precision experiments: summation, absorption, cancellation, recurrences and time stepping."]

/// Absorption of `+1` into powers of ten.
pub mod absorption;
/// Cancellation in a 2x2 solve.
pub mod cancellation;
/// YAML configuration of every experiment.
pub mod config;
/// Exponential decay and harmonic oscillator integrators.
pub mod integrate;
/// Two-body orbit integrator.
pub mod orbit;
/// Order sensitivity of summation.
pub mod order;
/// Stable and unstable recurrences.
pub mod recurrence;
/// Provenance envelopes and hashing.
pub mod report;
/// Canonical JSON and YAML helpers.
pub mod serde;
/// Repeated-addition comparison.
pub mod summation;

pub use absorption::{run_absorption, run_absorption_all, AbsorptionReport, AbsorptionRow};
pub use cancellation::{run_cancellation, CancellationReport, CancellationStep};
pub use config::{
    load_config, AbsorptionConfig, CancellationConfig, DecayConfig, ExponentRange, LabConfig,
    OrbitConfig, OrderConfig, OscillatorConfig, RecurrenceConfig, SummationConfig,
};
pub use integrate::{
    run_decay, run_decay_configured, run_oscillator, run_oscillator_configured, ClockReport,
    DecayReport, OscillatorReport, OscillatorSample,
};
pub use orbit::{run_orbit, run_orbit_configured, OrbitReport, OrbitSample};
pub use order::{run_order, OrderReport, OrderedSums};
pub use recurrence::{run_recurrence, RecurrenceReport, RecurrenceRow};
pub use report::{envelope, stable_hash_string, Envelope, Provenance};
pub use summation::{run_summation, SummationErrors, SummationReport};
