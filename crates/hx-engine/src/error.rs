//! Error types for the simulation engine.

use hx_core::CoreError;
use hx_fluids::{FluidError, FluidId};
use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

/// Errors returned by validation and simulation.
///
/// Every variant except `Domain` describes a problem with the caller's input
/// and can be fixed by correcting it. `Domain` means a correlation produced a
/// non-finite value, which only a malformed property table can cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unknown fluid: {id}")]
    UnknownFluid { id: String },

    #[error(
        "Temperature {temperature} exceeds the maximum allowable temperature {limit} for {fluid}"
    )]
    UnsafeTemperature {
        fluid: FluidId,
        temperature: f64,
        limit: f64,
    },

    #[error("Invalid heat exchanger type: {value}")]
    InvalidExchangerType { value: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Domain error: {0}")]
    Domain(#[from] CoreError),
}

impl From<FluidError> for SimError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::UnknownFluid { id } => SimError::UnknownFluid { id },
        }
    }
}
