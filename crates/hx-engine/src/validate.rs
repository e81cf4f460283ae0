//! Input validation.
//!
//! Order of checks: missing fields, exchanger type, fluid, numeric domain,
//! temperature guard. The first failure wins.

use crate::error::{SimError, SimResult};
use crate::input::{ExchangerType, SimulationInput, SimulationRequest};
use hx_fluids::FluidId;

/// Fraction of the critical temperature treated as the safe operating limit.
pub const SAFE_CRITICAL_FRACTION: f64 = 0.9;

/// Turn caller entry into a complete, checked [`SimulationInput`].
///
/// # Errors
///
/// - anything [`resolve`] reports
/// - anything [`check_input`] reports
pub fn validate(request: &SimulationRequest) -> SimResult<SimulationInput> {
    let input = resolve(request)?;
    check_input(&input)?;
    Ok(input)
}

/// Completeness and identifier parsing only; numeric values are not checked.
///
/// Sweeps start from this, since every grid point is checked again when
/// it is simulated.
///
/// # Errors
///
/// - [`SimError::MissingField`] if any of the seven fields is absent or blank
/// - [`SimError::InvalidExchangerType`] / [`SimError::UnknownFluid`] if an
///   identifier does not parse
pub fn resolve(request: &SimulationRequest) -> SimResult<SimulationInput> {
    let exchanger_type = require_text(request.exchanger_type.as_deref(), "exchanger_type")?;
    let fluid = require_text(request.fluid.as_deref(), "fluid")?;
    let inlet_temp_c = require(request.inlet_temp, "inlet_temp")?;
    let outlet_temp_c = require(request.outlet_temp, "outlet_temp")?;
    let flow_rate_m3_s = require(request.flow_rate, "flow_rate")?;
    let diameter_m = require(request.diameter, "diameter")?;
    let length_m = require(request.length, "length")?;

    Ok(SimulationInput {
        exchanger_type: exchanger_type.parse::<ExchangerType>()?,
        fluid: fluid.parse::<FluidId>()?,
        inlet_temp_c,
        outlet_temp_c,
        flow_rate_m3_s,
        diameter_m,
        length_m,
    })
}

/// Numeric domain and safety checks on an already-typed input.
///
/// The temperature guard compares Celsius inputs against the tabulated
/// critical temperature, which is in Kelvin. The comparison is kept literal:
/// it trips early for cryogenic gases (air, nitrogen, helium, ...).
///
/// # Errors
///
/// - [`SimError::InvalidValue`] for a non-finite number, or a flow rate,
///   diameter or length that is not strictly positive
/// - [`SimError::UnsafeTemperature`] when `max(|T_in|, |T_out|) > 0.9·T_c`
pub fn check_input(input: &SimulationInput) -> SimResult<()> {
    finite(input.inlet_temp_c, "inlet_temp")?;
    finite(input.outlet_temp_c, "outlet_temp")?;
    positive(input.flow_rate_m3_s, "flow_rate")?;
    positive(input.diameter_m, "diameter")?;
    positive(input.length_m, "length")?;

    let limit = SAFE_CRITICAL_FRACTION * input.fluid.properties().critical_temperature_k;
    let hottest = input.inlet_temp_c.abs().max(input.outlet_temp_c.abs());
    if hottest > limit {
        return Err(SimError::UnsafeTemperature {
            fluid: input.fluid,
            temperature: hottest,
            limit,
        });
    }

    Ok(())
}

fn require_text<'a>(value: Option<&'a str>, field: &'static str) -> SimResult<&'a str> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(SimError::MissingField { field }),
    }
}

fn require(value: Option<f64>, field: &'static str) -> SimResult<f64> {
    value.ok_or(SimError::MissingField { field })
}

fn finite(value: f64, field: &'static str) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidValue { field, value })
    }
}

fn positive(value: f64, field: &'static str) -> SimResult<f64> {
    let value = finite(value, field)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidValue { field, value })
    }
}
