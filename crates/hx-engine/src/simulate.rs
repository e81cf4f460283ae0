//! End-to-end evaluation: validator → flow → heat transfer → ε-NTU.

use crate::error::SimResult;
use crate::flow::{FlowRegime, FlowState};
use crate::heat_transfer::{convective_coefficient, nusselt_number};
use crate::input::{SimulationInput, SimulationRequest};
use crate::ntu::{
    CAPACITY_RATIO, capacity_rate, effectiveness, number_of_transfer_units, transfer_surface_area,
};
use crate::resistance::{Wall, overall_coefficient};
use crate::validate::{check_input, validate};
use hx_core::ensure_finite;
use hx_core::units::{HeatTransferCoeff, Power, Pressure, Velocity, mps, pa, w, wpm2k};
use serde::Serialize;
use tracing::debug;

/// Performance of the exchanger for one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Realized heat-transfer rate `ε·Ċ·|T_in − T_out|` [W]
    pub heat_transfer_rate_w: f64,
    pub effectiveness: f64,
    /// Darcy–Weisbach pressure drop [Pa]
    pub pressure_drop_pa: f64,
    pub reynolds: f64,
    pub nusselt: f64,
    /// Convective coefficient [W/(m²·K)]
    pub heat_transfer_coeff_w_m2_k: f64,
    /// Overall coefficient through the wall [W/(m²·K)]
    pub overall_coeff_w_m2_k: f64,
    pub friction_factor: f64,
    /// Pressure drop over dynamic pressure
    pub pressure_drop_ratio: f64,
    pub capacity_ratio: f64,
    pub ntu: f64,
    pub flow_regime: FlowRegime,
    pub velocity_m_s: f64,
}

impl SimulationResult {
    pub fn heat_transfer_rate(&self) -> Power {
        w(self.heat_transfer_rate_w)
    }

    pub fn pressure_drop(&self) -> Pressure {
        pa(self.pressure_drop_pa)
    }

    pub fn heat_transfer_coeff(&self) -> HeatTransferCoeff {
        wpm2k(self.heat_transfer_coeff_w_m2_k)
    }

    pub fn overall_coeff(&self) -> HeatTransferCoeff {
        wpm2k(self.overall_coeff_w_m2_k)
    }

    pub fn velocity(&self) -> Velocity {
        mps(self.velocity_m_s)
    }
}

/// Evaluate the exchanger for a complete input.
///
/// Pure and deterministic: identical inputs give bit-identical results.
/// The input is re-checked (domain and temperature guard) so that callers
/// building a [`SimulationInput`] directly get the same guarantees as
/// [`run`].
///
/// # Errors
///
/// Anything [`check_input`] reports, or [`SimError::Domain`](crate::SimError::Domain)
/// if a correlation yields a non-finite value.
pub fn simulate(input: &SimulationInput) -> SimResult<SimulationResult> {
    check_input(input)?;

    let fluid = input.fluid.properties();
    let d = input.diameter_m;
    let l = input.length_m;
    let q = input.flow_rate_m3_s;
    let rho = fluid.density_kg_m3;

    let flow = FlowState::evaluate(fluid, d, q)?;
    debug!(
        fluid = %input.fluid,
        reynolds = flow.reynolds,
        regime = %flow.regime,
        friction_factor = flow.friction_factor,
        "flow evaluated"
    );

    let nusselt = ensure_finite(
        nusselt_number(flow.reynolds, fluid.prandtl, d, l),
        "Nusselt number",
    )?;
    let h = ensure_finite(
        convective_coefficient(nusselt, fluid.thermal_conductivity_w_m_k, d),
        "heat transfer coefficient",
    )?;
    let u = ensure_finite(overall_coefficient(h, h, &Wall::DEFAULT), "overall coefficient")?;

    let c = capacity_rate(rho, q, fluid.specific_heat_j_kg_k);
    let ntu = ensure_finite(
        number_of_transfer_units(h, transfer_surface_area(d, l), c),
        "NTU",
    )?;
    let eps = ensure_finite(
        effectiveness(input.exchanger_type, ntu, CAPACITY_RATIO),
        "effectiveness",
    )?;
    debug!(nusselt, h, u, ntu, effectiveness = eps, "heat transfer evaluated");

    let q_max = c * (input.inlet_temp_c - input.outlet_temp_c).abs();
    let heat_transfer_rate_w = ensure_finite(eps * q_max, "heat transfer rate")?;

    let pressure_drop_pa = ensure_finite(flow.pressure_drop(rho, l, d), "pressure drop")?;
    let pressure_drop_ratio = ensure_finite(
        pressure_drop_pa / flow.dynamic_pressure(rho),
        "pressure drop ratio",
    )?;

    Ok(SimulationResult {
        heat_transfer_rate_w,
        effectiveness: eps,
        pressure_drop_pa,
        reynolds: flow.reynolds,
        nusselt,
        heat_transfer_coeff_w_m2_k: h,
        overall_coeff_w_m2_k: u,
        friction_factor: flow.friction_factor,
        pressure_drop_ratio,
        capacity_ratio: CAPACITY_RATIO,
        ntu,
        flow_regime: flow.regime,
        velocity_m_s: flow.velocity_m_s,
    })
}

/// Validate caller entry and evaluate it.
pub fn run(request: &SimulationRequest) -> SimResult<SimulationResult> {
    let input = validate(request)?;
    simulate(&input)
}
