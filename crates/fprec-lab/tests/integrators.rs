use fprec_core::PrecisionClass;
use fprec_lab::{
    run_decay, run_decay_configured, run_orbit, run_oscillator, DecayConfig, OrbitConfig,
    OscillatorConfig,
};

#[test]
fn decay_approaches_exponential() {
    let config = DecayConfig {
        steps: 1000,
        ..DecayConfig::default()
    };
    let report = run_decay::<f64>(&config);
    assert_eq!(report.precision, PrecisionClass::Double);
    // explicit Euler error is O(dt)
    assert!(report.error.abs() < 1e-3, "error {}", report.error);
    assert!(report.x < report.exact);
}

#[test]
fn compensated_clock_tracks_target() {
    let config = DecayConfig {
        steps: 100_000,
        precision: PrecisionClass::Single,
        ..DecayConfig::default()
    };
    let report = run_decay_configured(&config);
    let naive_drift = (report.clock.naive - report.clock.target).abs();
    let compensated_drift = (report.clock.compensated - report.clock.target).abs();
    assert!(compensated_drift < naive_drift);
    assert!(compensated_drift < 1e-4, "drift {compensated_drift}");
}

#[test]
fn oscillator_samples_end_at_final_step() {
    let config = OscillatorConfig {
        time_limit: 6.0,
        steps: 600,
        sample_every: 250,
        precision: PrecisionClass::Double,
        ..OscillatorConfig::default()
    };
    let report = run_oscillator::<f64>(&config);
    let steps: Vec<_> = report.samples.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![250, 500, 600]);
    let last = report.samples.last().unwrap();
    assert!((last.t - 6.0).abs() < 1e-9);
    assert!(report.max_abs_error < 0.05, "error {}", report.max_abs_error);
}

#[test]
fn orbit_conserves_energy_approximately() {
    let config = OrbitConfig {
        time_limit: 1.0,
        steps: 1000,
        sample_every: 0,
        ..OrbitConfig::default()
    };
    let report = run_orbit::<f64>(&config);
    assert_eq!(report.samples.len(), 1);
    assert!((report.initial_energy - (1.0 - 2.0)).abs() < 1e-12);
    assert!(report.energy_drift.abs() < 0.05, "drift {}", report.energy_drift);
    let last = report.samples[0];
    // equal masses: the centre of mass stays at the origin
    assert!((last.first[0] + last.second[0]).abs() < 1e-9);
    assert!((last.first[1] + last.second[1]).abs() < 1e-9);
}

#[test]
fn single_precision_orbit_runs() {
    let report = run_orbit::<f32>(&OrbitConfig {
        steps: 2000,
        sample_every: 500,
        ..OrbitConfig::default()
    });
    assert_eq!(report.precision, PrecisionClass::Single);
    assert_eq!(report.samples.len(), 4);
    assert!(report.final_energy.is_finite());
}
