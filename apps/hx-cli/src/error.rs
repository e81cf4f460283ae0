//! Error type for the command-line front end.

use hx_engine::{SimError, SweepError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case file {path}: {message}")]
    CaseFileParse { path: PathBuf, message: String },

    #[error("Unsupported case file extension: {path} (expected .yaml, .yml or .json)")]
    CaseFileFormat { path: PathBuf },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Simulation(#[from] SimError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("No sweep point produced a result")]
    NoFeasiblePoint,
}

pub type CliResult<T> = Result<T, CliError>;
