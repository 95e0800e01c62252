use fprec_core::{
    sum_with_checkpoints, Accumulator, Checkpoints, CompensatedSummer, NaiveSummer, SummerPhase,
};

fn errors(value: f32, count: u32, exact: f64) -> (f64, f64) {
    let mut naive = NaiveSummer::<f32>::new();
    let mut compensated = CompensatedSummer::<f32>::new();
    for _ in 0..count {
        naive.add(value);
        compensated.add(value);
    }
    (
        (f64::from(naive.value()) - exact).abs(),
        (f64::from(compensated.value()) - exact).abs(),
    )
}

#[test]
fn compensated_beats_naive_for_ten_thousand_terms() {
    let (naive, compensated) = errors(0.1, 10_000, 1_000.0);
    assert!(naive > 0.0);
    assert!(compensated < naive, "compensated {compensated} vs naive {naive}");
    assert!(compensated < 1e-3, "compensated error {compensated}");
}

#[test]
fn compensated_no_worse_for_a_million_terms() {
    let (naive, compensated) = errors(0.1, 1_000_000, 100_000.0);
    assert!(compensated <= naive, "compensated {compensated} vs naive {naive}");
    assert!(compensated < naive);
}

#[test]
fn fresh_summer_is_zero() {
    let summer = CompensatedSummer::<f64>::new();
    assert_eq!(summer.value(), 0.0);
    assert_eq!(summer.phase(), SummerPhase::Empty);
    assert_eq!(summer.count(), 0);
    let snapshot = summer.snapshot();
    assert_eq!(snapshot.total, 0.0);
    assert_eq!(snapshot.residual, 0.0);
}

#[test]
fn value_is_idempotent() {
    let mut summer = CompensatedSummer::<f32>::new();
    for i in 0..1000 {
        summer.add(0.1 + i as f32 * 1e-3);
    }
    let first = summer.value();
    let second = summer.value();
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(summer.count(), 1000);
    assert_eq!(summer.phase(), SummerPhase::Accumulating);
}

#[test]
fn snapshot_does_not_mutate() {
    let mut summer: CompensatedSummer<f32> = [1.0e8f32, 1.0, 1.0].into_iter().collect();
    let before = summer.snapshot();
    let _ = summer.snapshot();
    assert_eq!(summer.snapshot(), before);
    summer.add(1.0);
    assert_ne!(summer.snapshot(), before);
}

#[test]
fn residual_recovers_absorbed_terms() {
    let mut summer = CompensatedSummer::<f32>::new();
    summer.add(1.0e8);
    let trace = summer.add_traced(1.0);
    assert_eq!(trace.candidate_total, 1.0e8);
    assert_eq!(trace.effective_added, 0.0);
    assert_eq!(trace.lost, 1.0);
    assert_eq!(trace.after.residual, 1.0);
    summer.add(-1.0e8);
    assert_eq!(summer.value(), 1.0);
}

#[test]
fn summation_order_may_change_the_bits() {
    let values = [1.0e8f32, 3.0, -1.0e8, 0.7, 1.0e-3, 5.5e7, -5.5e7];
    let forward: CompensatedSummer<f32> = values.iter().copied().collect();
    let backward: CompensatedSummer<f32> = values.iter().rev().copied().collect();
    let exact: f64 = values.iter().map(|v| f64::from(*v)).sum();
    // Equality is not required in either direction; both stay close to the exact sum.
    for result in [forward.value(), backward.value()] {
        assert!((f64::from(result) - exact).abs() <= 8.0, "result {result}");
    }
}

#[test]
fn non_finite_inputs_propagate() {
    let mut summer = CompensatedSummer::<f64>::new();
    summer.add(1.0);
    summer.add(f64::INFINITY);
    assert!(summer.value().is_nan() || summer.value().is_infinite());
    let mut summer = CompensatedSummer::<f64>::new();
    summer.add(f64::NAN);
    assert!(summer.value().is_nan());
}

#[test]
fn extend_matches_repeated_add() {
    let mut extended = CompensatedSummer::<f64>::new();
    extended.extend([0.1; 100]);
    let mut added = CompensatedSummer::<f64>::new();
    added.add_all([0.1; 100]);
    assert_eq!(extended.value().to_bits(), Accumulator::value(&added).to_bits());
}

#[test]
fn checkpoints_emit_records() {
    let mut records = Vec::new();
    let summer = sum_with_checkpoints(
        std::iter::repeat(0.1f32).take(350),
        Checkpoints::every(100),
        |record| records.push(record),
    );
    assert_eq!(summer.count(), 350);
    let steps: Vec<_> = records.iter().map(|r| r.step).collect();
    assert_eq!(steps, vec![100, 200, 300]);
    let lines = records[0].lines();
    assert_eq!(lines[0], "<i = 100>");
    assert!(lines[1].starts_with("a         = +1."));
    assert_eq!(lines.len(), 9);
}

#[test]
fn zero_period_disables_checkpoints() {
    assert!(Checkpoints::every(0).is_none());
    let mut seen = 0;
    let summer = sum_with_checkpoints([1.0f64, 2.0, 3.0], None, |_| seen += 1);
    assert_eq!(seen, 0);
    assert_eq!(summer.value(), 6.0);
}
