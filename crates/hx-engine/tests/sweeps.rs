//! Sweeps and the optimizer driven by the real engine.

use hx_engine::{
    ExchangerType, Objective, SimulationInput, SweepDefinition, SweepParameter, SweepSpacing,
    SimError, SimulationRequest, default_flow_sweep, execute_sweep, optimize, resolve, simulate,
};
use hx_fluids::FluidId;

fn oil_parallel() -> SimulationInput {
    SimulationInput {
        exchanger_type: ExchangerType::Parallel,
        fluid: FluidId::Oil,
        inlet_temp_c: 120.0,
        outlet_temp_c: 60.0,
        flow_rate_m3_s: 0.005,
        diameter_m: 0.03,
        length_m: 3.0,
    }
}

#[test]
fn length_sweep_raises_effectiveness() {
    let def = SweepDefinition::new(
        SweepParameter::Length,
        1.0,
        100.0,
        8,
        SweepSpacing::Logarithmic,
    )
    .unwrap();
    let sweep = execute_sweep(&oil_parallel(), &def);

    assert_eq!(sweep.num_failed, 0);
    let eps = sweep.effectiveness();
    assert_eq!(eps.len(), 8);
    // Longer pipes add surface faster than the entry-length Nu decays.
    assert!(eps.windows(2).all(|w| w[1] > w[0]), "{eps:?}");
}

#[test]
fn length_sweep_series_scale_as_expected() {
    let def = SweepDefinition::new(SweepParameter::Length, 1.0, 9.0, 5, SweepSpacing::Linear)
        .unwrap();
    let sweep = execute_sweep(&oil_parallel(), &def);

    let lengths = sweep.successful_independent_values();
    let eps = sweep.effectiveness();
    let heat = sweep.heat_transfer_rate_w();
    let dp = sweep.pressure_drop_pa();
    assert_eq!(heat.len(), 5);
    assert_eq!(dp.len(), 5);

    // Q = ε·Ċ·|ΔT| with Ċ and ΔT fixed; Darcy–Weisbach is linear in L.
    let q_per_eps = heat[0] / eps[0];
    let dp_per_m = dp[0] / lengths[0];
    for i in 1..5 {
        assert!((heat[i] / eps[i] - q_per_eps).abs() < 1e-9 * q_per_eps);
        assert!((dp[i] / lengths[i] - dp_per_m).abs() < 1e-9 * dp_per_m);
    }
}

#[test]
fn reversed_grid_with_unsafe_start_records_failures() {
    // Water's guard is 0.9 · 647.13 ≈ 582.4, so 700 and 600 fail.
    let request = SimulationRequest {
        exchanger_type: Some("counter".into()),
        fluid: Some("water".into()),
        inlet_temp: Some(700.0),
        outlet_temp: Some(40.0),
        flow_rate: Some(0.01),
        diameter: Some(0.05),
        length: Some(2.0),
    };
    let base = resolve(&request).unwrap();
    let def = SweepDefinition::new(
        SweepParameter::InletTemp,
        700.0,
        100.0,
        7,
        SweepSpacing::Linear,
    )
    .unwrap();
    let sweep = execute_sweep(&base, &def);

    assert_eq!(sweep.num_successful, 5);
    assert_eq!(sweep.num_failed, 2);
    let failed: Vec<usize> = sweep.failures.iter().map(|f| f.point_index).collect();
    assert_eq!(failed, vec![0, 1]);
    assert!(
        sweep
            .failures
            .iter()
            .all(|f| matches!(f.error, SimError::UnsafeTemperature { .. }))
    );
    assert_eq!(
        sweep.successful_independent_values(),
        vec![500.0, 400.0, 300.0, 200.0, 100.0]
    );
}

#[test]
fn sweep_results_follow_grid_order() {
    let def = SweepDefinition::new(
        SweepParameter::Diameter,
        0.01,
        0.1,
        16,
        SweepSpacing::Linear,
    )
    .unwrap();
    let base = oil_parallel();
    let sweep = execute_sweep(&base, &def);

    for (i, x) in sweep.independent_values.iter().enumerate() {
        let expected = simulate(&SweepParameter::Diameter.apply(&base, *x)).unwrap();
        assert_eq!(sweep.results[i], Some(expected), "point {i}");
    }
}

#[test]
fn sweep_is_deterministic() {
    let def = default_flow_sweep();
    let a = execute_sweep(&oil_parallel(), &def);
    let b = execute_sweep(&oil_parallel(), &def);
    assert_eq!(a, b);
}

#[test]
fn optimizer_report_is_deterministic() {
    let def = default_flow_sweep();
    let objective = Objective::default();
    let a = optimize(&oil_parallel(), &def, &objective);
    let b = optimize(&oil_parallel(), &def, &objective);
    assert_eq!(a, b);
}

#[test]
fn cost_penalty_favours_low_flow() {
    // Above Q = 5 the cost alone would exceed max_cost; at the top of the
    // default range the score is exactly zero.
    let report = optimize(&oil_parallel(), &default_flow_sweep(), &Objective::default());
    let last = report.points.last().unwrap();
    assert_eq!(last.value, 5.0);
    assert_eq!(last.score, 0.0);

    let best = report.best.unwrap();
    assert!(best.value < 5.0);
    assert!(best.score > 0.0);
}

#[test]
fn temperature_sweep_records_guard_failures() {
    let def = SweepDefinition::new(
        SweepParameter::InletTemp,
        100.0,
        700.0,
        7,
        SweepSpacing::Linear,
    )
    .unwrap();
    let sweep = execute_sweep(&oil_parallel(), &def);

    // Oil guard: 0.9 · 600 = 540; 600 and 700 fail.
    assert_eq!(sweep.num_successful, 5);
    assert_eq!(sweep.num_failed, 2);
    let failed: Vec<usize> = sweep.failures.iter().map(|f| f.point_index).collect();
    assert_eq!(failed, vec![5, 6]);
    assert_eq!(
        sweep.successful_independent_values(),
        vec![100.0, 200.0, 300.0, 400.0, 500.0]
    );
}
