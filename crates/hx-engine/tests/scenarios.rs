//! End-to-end scenarios through the public engine API.

use hx_core::nearly_equal;
use hx_core::numeric::Tolerances;
use hx_engine::{
    ExchangerType, FlowRegime, SimError, SimulationInput, SimulationRequest, run, simulate,
};
use hx_fluids::FluidId;

fn water_counter() -> SimulationRequest {
    SimulationRequest {
        exchanger_type: Some("counter".into()),
        fluid: Some("water".into()),
        inlet_temp: Some(80.0),
        outlet_temp: Some(40.0),
        flow_rate: Some(0.01),
        diameter: Some(0.05),
        length: Some(2.0),
    }
}

#[test]
fn water_counter_flow_reference_case() {
    let result = run(&water_counter()).unwrap();

    // A = π·0.025² ≈ 0.0019635 m²; v = Q/(ρA) keeps the flow laminar
    let area = std::f64::consts::PI * 0.025 * 0.025;
    assert!((area - 0.0019635).abs() < 1e-7);
    assert!(
        (result.reynolds - 254.648).abs() < 1e-2,
        "Re = {}",
        result.reynolds
    );
    assert_eq!(result.flow_regime, FlowRegime::Laminar);
    assert!((result.friction_factor - 64.0 / result.reynolds).abs() < 1e-15);
    assert!((result.nusselt - 5.643).abs() < 1e-2, "Nu = {}", result.nusselt);

    assert!(result.effectiveness > 0.0 && result.effectiveness < 1.0);
    assert_eq!(result.capacity_ratio, 1.0);

    let c = 997.0 * 0.01 * 4186.0;
    let expected_q = result.effectiveness * c * 40.0;
    assert!(nearly_equal(
        result.heat_transfer_rate_w,
        expected_q,
        Tolerances::default()
    ));
}

#[test]
fn air_above_the_guard_is_rejected() {
    let request = SimulationRequest {
        fluid: Some("air".into()),
        inlet_temp: Some(450.0),
        ..water_counter()
    };

    match run(&request) {
        Err(SimError::UnsafeTemperature {
            fluid,
            temperature,
            limit,
        }) => {
            assert_eq!(fluid, FluidId::Air);
            assert_eq!(temperature, 450.0);
            assert!((limit - 118.98).abs() < 1e-9);
        }
        other => panic!("expected UnsafeTemperature, got {other:?}"),
    }
}

#[test]
fn gases_reach_turbulent_flow() {
    // Re = Q·D/(A·μ) does not depend on density.
    let request = SimulationRequest {
        fluid: Some("air".into()),
        ..water_counter()
    };
    let result = run(&request).unwrap();
    assert_eq!(result.flow_regime, FlowRegime::Turbulent);
    assert!((result.reynolds - 14_069.0).abs() < 5.0, "Re = {}", result.reynolds);
    assert!(result.effectiveness > 0.0 && result.effectiveness < 1.0);
}

#[test]
fn unknown_exchanger_type_is_reported() {
    let request = SimulationRequest {
        exchanger_type: Some("shell-and-tube".into()),
        ..water_counter()
    };
    assert_eq!(
        run(&request),
        Err(SimError::InvalidExchangerType {
            value: "shell-and-tube".into()
        })
    );
}

#[test]
fn missing_field_is_reported_first() {
    let request = SimulationRequest {
        length: None,
        fluid: Some("unobtainium".into()),
        ..water_counter()
    };
    assert_eq!(
        run(&request),
        Err(SimError::MissingField { field: "length" })
    );
}

#[test]
fn identical_inputs_give_bit_identical_results() {
    for kind in ExchangerType::ALL {
        for fluid in [FluidId::Water, FluidId::Oil, FluidId::Steam, FluidId::Mercury] {
            let input = SimulationInput {
                exchanger_type: kind,
                fluid,
                inlet_temp_c: 80.0,
                outlet_temp_c: 40.0,
                flow_rate_m3_s: 0.01,
                diameter_m: 0.05,
                length_m: 2.0,
            };
            let a = simulate(&input).unwrap();
            let b = simulate(&input).unwrap();
            assert_eq!(a.effectiveness.to_bits(), b.effectiveness.to_bits());
            assert_eq!(
                a.heat_transfer_rate_w.to_bits(),
                b.heat_transfer_rate_w.to_bits()
            );
            assert_eq!(a.pressure_drop_pa.to_bits(), b.pressure_drop_pa.to_bits());
            assert_eq!(a, b);
        }
    }
}

#[test]
fn arrangement_ordering_at_equal_ntu() {
    let base = SimulationInput {
        exchanger_type: ExchangerType::Counter,
        fluid: FluidId::Mercury,
        inlet_temp_c: 80.0,
        outlet_temp_c: 40.0,
        flow_rate_m3_s: 0.001,
        diameter_m: 0.05,
        length_m: 20.0,
    };
    let eps = |kind| {
        simulate(&SimulationInput {
            exchanger_type: kind,
            ..base
        })
        .unwrap()
        .effectiveness
    };
    let counter = eps(ExchangerType::Counter);
    let parallel = eps(ExchangerType::Parallel);
    assert!(counter >= parallel);
    assert!(parallel <= 0.5);
}

#[test]
fn every_fluid_simulates_below_its_guard() {
    // The lowest guard is helium at 0.9 · 5.2 = 4.68.
    for fluid in FluidId::ALL {
        let input = SimulationInput {
            exchanger_type: ExchangerType::Cross,
            fluid,
            inlet_temp_c: 2.0,
            outlet_temp_c: 1.0,
            flow_rate_m3_s: 0.01,
            diameter_m: 0.05,
            length_m: 2.0,
        };
        let result = simulate(&input).unwrap();
        assert!(result.heat_transfer_rate_w.is_finite(), "{fluid}");
        assert!(result.pressure_drop_pa > 0.0, "{fluid}");
    }
}

#[test]
fn result_serializes_to_json() {
    let result = run(&water_counter()).unwrap();
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["flow_regime"], "laminar");
    assert_eq!(json["capacity_ratio"], 1.0);
    assert!(json["effectiveness"].as_f64().unwrap() > 0.0);
}
