//! Single-stream pipe heat-exchanger engine.
//!
//! Given an exchanger arrangement, a working fluid, two temperatures and the
//! pipe geometry, the engine derives the flow regime, the convective and
//! overall heat-transfer coefficients, NTU, effectiveness, the realized heat
//! rate and the pressure drop. Every evaluation is pure and synchronous.
//!
//! Pipeline: [`validate`] → [`flow`] → [`heat_transfer`] / [`resistance`] →
//! [`ntu`] → [`SimulationResult`]. [`sweep`] and [`optimize`] repeat the
//! pipeline over a parameter grid.

pub mod error;
pub mod flow;
pub mod heat_transfer;
pub mod input;
pub mod ntu;
pub mod optimize;
pub mod resistance;
pub mod simulate;
pub mod sweep;
pub mod validate;

pub use error::{SimError, SimResult};
pub use flow::{FlowRegime, FlowState};
pub use input::{ExchangerType, SimulationInput, SimulationRequest};
pub use ntu::effectiveness;
pub use optimize::{
    DEFAULT_FLOW_RANGE, Objective, OptimizationReport, ScoredPoint, default_flow_sweep, optimize,
};
pub use resistance::{
    InterfaceTemperature, ThermalResistance, Wall, heat_flow, interface_temperatures,
    overall_coefficient,
};
pub use simulate::{SimulationResult, run, simulate};
pub use sweep::{
    DEFAULT_SWEEP_POINTS, SweepDefinition, SweepError, SweepFailure, SweepParameter, SweepResult,
    SweepSpacing, execute_sweep,
};
pub use validate::{SAFE_CRITICAL_FRACTION, check_input, resolve, validate};
