//! Simulation inputs.
//!
//! [`SimulationRequest`] is what a caller (form, case file, command line)
//! hands over: every field optional, identifiers as text. The validator turns
//! it into a [`SimulationInput`], which is fully typed and complete.

use crate::error::SimError;
use hx_core::units::{Length, VolumeRate, m, m3ps};
use hx_fluids::FluidId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flow arrangement of the two streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ExchangerType {
    Counter,
    Parallel,
    Cross,
}

impl ExchangerType {
    pub const ALL: [ExchangerType; 3] = [
        ExchangerType::Counter,
        ExchangerType::Parallel,
        ExchangerType::Cross,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ExchangerType::Counter => "counter",
            ExchangerType::Parallel => "parallel",
            ExchangerType::Cross => "cross",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExchangerType::Counter => "Counter Flow",
            ExchangerType::Parallel => "Parallel Flow",
            ExchangerType::Cross => "Cross Flow",
        }
    }
}

impl std::str::FromStr for ExchangerType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "counter" => Ok(ExchangerType::Counter),
            "parallel" => Ok(ExchangerType::Parallel),
            "cross" => Ok(ExchangerType::Cross),
            other => Err(SimError::InvalidExchangerType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ExchangerType {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExchangerType> for &'static str {
    fn from(kind: ExchangerType) -> Self {
        kind.key()
    }
}

impl fmt::Display for ExchangerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete, typed input to [`simulate`](crate::simulate).
///
/// Temperatures are in degrees Celsius; everything else is SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationInput {
    pub exchanger_type: ExchangerType,
    pub fluid: FluidId,
    /// Inlet temperature [°C]
    pub inlet_temp_c: f64,
    /// Outlet temperature [°C]
    pub outlet_temp_c: f64,
    /// Volumetric flow rate [m³/s]
    pub flow_rate_m3_s: f64,
    /// Pipe inner diameter [m]
    pub diameter_m: f64,
    /// Pipe length [m]
    pub length_m: f64,
}

impl SimulationInput {
    pub fn flow_rate(&self) -> VolumeRate {
        m3ps(self.flow_rate_m3_s)
    }

    pub fn diameter(&self) -> Length {
        m(self.diameter_m)
    }

    pub fn length(&self) -> Length {
        m(self.length_m)
    }
}

/// Caller-entry form of a simulation input.
///
/// Any field may be absent; blank strings count as absent. Deserializes from
/// YAML or JSON case files:
///
/// ```yaml
/// exchanger_type: counter
/// fluid: water
/// inlet_temp: 80.0
/// outlet_temp: 40.0
/// flow_rate: 0.01
/// diameter: 0.05
/// length: 2.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationRequest {
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub exchanger_type: Option<String>,
    #[serde(alias = "fluid_type", skip_serializing_if = "Option::is_none")]
    pub fluid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlet_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl SimulationRequest {
    /// Fields set in `overrides` replace the ones in `self`.
    pub fn overlay(self, overrides: SimulationRequest) -> SimulationRequest {
        SimulationRequest {
            exchanger_type: overrides.exchanger_type.or(self.exchanger_type),
            fluid: overrides.fluid.or(self.fluid),
            inlet_temp: overrides.inlet_temp.or(self.inlet_temp),
            outlet_temp: overrides.outlet_temp.or(self.outlet_temp),
            flow_rate: overrides.flow_rate.or(self.flow_rate),
            diameter: overrides.diameter.or(self.diameter),
            length: overrides.length.or(self.length),
        }
    }
}

impl From<&SimulationInput> for SimulationRequest {
    fn from(input: &SimulationInput) -> Self {
        SimulationRequest {
            exchanger_type: Some(input.exchanger_type.key().to_string()),
            fluid: Some(input.fluid.key().to_string()),
            inlet_temp: Some(input.inlet_temp_c),
            outlet_temp: Some(input.outlet_temp_c),
            flow_rate: Some(input.flow_rate_m3_s),
            diameter: Some(input.diameter_m),
            length: Some(input.length_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchanger_type_parses_known_values() {
        assert_eq!("counter".parse::<ExchangerType>().unwrap(), ExchangerType::Counter);
        assert_eq!(
            " parallel ".parse::<ExchangerType>().unwrap(),
            ExchangerType::Parallel
        );
        for kind in ExchangerType::ALL {
            assert_eq!(kind.key().parse::<ExchangerType>().unwrap(), kind);
        }
    }

    #[test]
    fn exchanger_type_rejects_anything_else() {
        for value in [
            "shell-and-tube",
            "",
            "counter-parallel",
            "plate",
            "CROSS",
            "Counter Flow",
            "counterflow",
            "parallel_flow",
        ] {
            let err = value.parse::<ExchangerType>().unwrap_err();
            assert!(
                matches!(err, SimError::InvalidExchangerType { .. }),
                "{value:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn overlay_prefers_overrides() {
        let base = SimulationRequest {
            fluid: Some("water".into()),
            diameter: Some(0.05),
            length: Some(2.0),
            ..Default::default()
        };
        let overrides = SimulationRequest {
            fluid: Some("oil".into()),
            ..Default::default()
        };

        let merged = base.overlay(overrides);
        assert_eq!(merged.fluid.as_deref(), Some("oil"));
        assert_eq!(merged.diameter, Some(0.05));
        assert_eq!(merged.length, Some(2.0));
        assert_eq!(merged.inlet_temp, None);
    }

    #[test]
    fn request_round_trips_from_input() {
        let input = SimulationInput {
            exchanger_type: ExchangerType::Cross,
            fluid: FluidId::Nitrogen,
            inlet_temp_c: 20.0,
            outlet_temp_c: 10.0,
            flow_rate_m3_s: 0.2,
            diameter_m: 0.1,
            length_m: 3.0,
        };
        let request = SimulationRequest::from(&input);
        assert_eq!(request.exchanger_type.as_deref(), Some("cross"));
        assert_eq!(request.fluid.as_deref(), Some("nitrogen"));
        assert_eq!(request.flow_rate, Some(0.2));
    }

    #[test]
    fn typed_accessors() {
        let input = SimulationInput {
            exchanger_type: ExchangerType::Counter,
            fluid: FluidId::Water,
            inlet_temp_c: 80.0,
            outlet_temp_c: 40.0,
            flow_rate_m3_s: 0.01,
            diameter_m: 0.05,
            length_m: 2.0,
        };
        assert_eq!(input.diameter().value, 0.05);
        assert_eq!(input.length().value, 2.0);
        assert_eq!(input.flow_rate().value, 0.01);
    }
}
