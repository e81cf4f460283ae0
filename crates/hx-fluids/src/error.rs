//! Fluid table errors.

use hx_core::CoreError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur when resolving fluid properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Identifier not present in the property table.
    #[error("Unknown fluid: {id}")]
    UnknownFluid { id: String },
}

impl From<FluidError> for CoreError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::UnknownFluid { .. } => CoreError::InvalidArg {
                what: "unknown fluid",
            },
        }
    }
}
