//! Parameter sweeps over the simulation.
//!
//! A sweep varies one input across a grid and runs one independent
//! [`simulate`] per point. Points share nothing, so they are evaluated in
//! parallel; results always come back in grid order.

use crate::error::SimError;
use crate::input::SimulationInput;
use crate::simulate::{SimulationResult, simulate};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Grid size used when the caller does not ask for one.
pub const DEFAULT_SWEEP_POINTS: usize = 11;

/// Input being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    /// Volumetric flow rate [m³/s]
    FlowRate,
    /// Pipe diameter [m]
    Diameter,
    /// Pipe length [m]
    Length,
    /// Inlet temperature [°C]
    InletTemp,
    /// Outlet temperature [°C]
    OutletTemp,
}

impl SweepParameter {
    /// Copy of `base` with this parameter set to `value`.
    pub fn apply(&self, base: &SimulationInput, value: f64) -> SimulationInput {
        let mut input = *base;
        match self {
            Self::FlowRate => input.flow_rate_m3_s = value,
            Self::Diameter => input.diameter_m = value,
            Self::Length => input.length_m = value,
            Self::InletTemp => input.inlet_temp_c = value,
            Self::OutletTemp => input.outlet_temp_c = value,
        }
        input
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::FlowRate => "m³/s",
            Self::Diameter | Self::Length => "m",
            Self::InletTemp | Self::OutletTemp => "°C",
        }
    }
}

impl std::str::FromStr for SweepParameter {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "flow_rate" | "flow" => Ok(Self::FlowRate),
            "diameter" => Ok(Self::Diameter),
            "length" => Ok(Self::Length),
            "inlet_temp" | "inlet" => Ok(Self::InletTemp),
            "outlet_temp" | "outlet" => Ok(Self::OutletTemp),
            other => Err(SweepError::UnknownParameter(other.to_string())),
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FlowRate => "flow_rate",
            Self::Diameter => "diameter",
            Self::Length => "length",
            Self::InletTemp => "inlet_temp",
            Self::OutletTemp => "outlet_temp",
        };
        f.write_str(name)
    }
}

/// Spacing of the grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Rejected sweep configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Unknown sweep parameter: {0}")]
    UnknownParameter(String),

    #[error("Sweep must have at least 2 points (got {0})")]
    TooFewPoints(usize),

    #[error("Sweep bounds must be finite")]
    NonFiniteBound,

    #[error("Start and end values must be different")]
    IdenticalBounds,

    #[error("Invalid objective: {what}")]
    InvalidObjective { what: &'static str },
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub spacing: SweepSpacing,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::TooFewPoints(num_points));
        }

        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::NonFiniteBound);
        }

        if start == end {
            return Err(SweepError::IdenticalBounds);
        }

        Ok(SweepDefinition {
            parameter,
            start,
            end,
            num_points,
            spacing,
        })
    }

    /// Linear sweep with the default number of points.
    pub fn linear(parameter: SweepParameter, start: f64, end: f64) -> Result<Self, SweepError> {
        Self::new(
            parameter,
            start,
            end,
            DEFAULT_SWEEP_POINTS,
            SweepSpacing::Linear,
        )
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            SweepSpacing::Linear => self.generate_linear(),
            SweepSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points, {})",
            self.parameter,
            self.start,
            self.end,
            self.parameter.unit(),
            self.num_points,
            self.spacing
        )
    }
}

/// A grid point whose simulation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFailure {
    pub point_index: usize,
    pub value: f64,
    pub error: SimError,
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    /// Independent variable values (the grid)
    pub independent_values: Vec<f64>,
    /// One entry per grid point; `None` where the simulation failed
    pub results: Vec<Option<SimulationResult>>,
    pub failures: Vec<SweepFailure>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    /// Get effectiveness array (excluding failed points)
    pub fn effectiveness(&self) -> Vec<f64> {
        self.successful().map(|(_, r)| r.effectiveness).collect()
    }

    /// Get heat transfer rate array (excluding failed points)
    pub fn heat_transfer_rate_w(&self) -> Vec<f64> {
        self.successful().map(|(_, r)| r.heat_transfer_rate_w).collect()
    }

    /// Get pressure drop array (excluding failed points)
    pub fn pressure_drop_pa(&self) -> Vec<f64> {
        self.successful().map(|(_, r)| r.pressure_drop_pa).collect()
    }

    /// Get independent values corresponding to successful points
    pub fn successful_independent_values(&self) -> Vec<f64> {
        self.successful().map(|(x, _)| x).collect()
    }

    /// Successful `(value, result)` pairs in grid order.
    pub fn successful(&self) -> impl Iterator<Item = (f64, &SimulationResult)> + '_ {
        self.independent_values
            .iter()
            .zip(&self.results)
            .filter_map(|(x, r)| r.as_ref().map(|r| (*x, r)))
    }
}

/// Run `def` against `base`, one simulation per grid point.
///
/// Failed points never abort the sweep; they are recorded in
/// [`SweepResult::failures`].
pub fn execute_sweep(base: &SimulationInput, def: &SweepDefinition) -> SweepResult {
    let values = def.generate_points();
    debug!(sweep = %def, "executing sweep");

    let outcomes: Vec<Result<SimulationResult, SimError>> = values
        .par_iter()
        .map(|&value| simulate(&def.parameter.apply(base, value)))
        .collect();

    let mut results = Vec::with_capacity(values.len());
    let mut failures = Vec::new();
    for (point_index, (value, outcome)) in values.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(result) => results.push(Some(result)),
            Err(error) => {
                warn!(point_index, value, %error, "sweep point failed");
                failures.push(SweepFailure {
                    point_index,
                    value: *value,
                    error,
                });
                results.push(None);
            }
        }
    }

    let num_failed = failures.len();
    let num_successful = values.len() - num_failed;
    SweepResult {
        parameter: def.parameter,
        independent_values: values,
        results,
        failures,
        num_successful,
        num_failed,
    }
}
