//! Area-specific thermal resistance networks.
//!
//! Resistances are per unit area [m²·K/W], so the reciprocal of a series
//! network is an overall heat-transfer coefficient [W/(m²·K)].

use hx_core::{CoreError, CoreResult, ensure_positive};
use serde::Serialize;

/// One resistance in a network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalResistance {
    pub label: &'static str,
    /// Area-specific resistance [m²·K/W]
    pub value: f64,
}

impl ThermalResistance {
    /// Convective film `1/h`.
    pub fn convection(label: &'static str, h: f64) -> Self {
        Self {
            label,
            value: 1.0 / h,
        }
    }

    /// Plane-wall conduction `t/k`.
    pub fn conduction(label: &'static str, thickness: f64, conductivity: f64) -> Self {
        Self {
            label,
            value: thickness / conductivity,
        }
    }
}

/// Sum of resistances in series.
pub fn series(resistances: &[ThermalResistance]) -> f64 {
    resistances.iter().map(|r| r.value).sum()
}

/// Reciprocal of the summed conductances of parallel paths.
///
/// # Errors
///
/// Returns `CoreError::InvalidArg` for an empty network.
pub fn parallel(resistances: &[ThermalResistance]) -> CoreResult<f64> {
    if resistances.is_empty() {
        return Err(CoreError::InvalidArg {
            what: "parallel network needs at least one resistance",
        });
    }
    Ok(1.0 / resistances.iter().map(|r| 1.0 / r.value).sum::<f64>())
}

/// Heat flux through a series network driven by `delta_t` [W/m²].
pub fn heat_flow(network: &[ThermalResistance], delta_t: f64) -> f64 {
    delta_t / series(network)
}

/// Temperature on the cold side of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterfaceTemperature {
    /// Layer the heat has just crossed
    pub after: &'static str,
    pub temperature: f64,
}

/// Temperatures at the internal interfaces of a series network, hot side first.
///
/// Each layer drops `q·R` where `q` is the [`heat_flow`] for
/// `t_hot - t_cold`. The last layer ends at `t_cold`, so it has no entry.
pub fn interface_temperatures(
    network: &[ThermalResistance],
    t_hot: f64,
    t_cold: f64,
) -> Vec<InterfaceTemperature> {
    let q = heat_flow(network, t_hot - t_cold);
    let inner = network.len().saturating_sub(1);
    network[..inner]
        .iter()
        .scan(t_hot, |t, layer| {
            *t -= q * layer.value;
            Some(InterfaceTemperature {
                after: layer.label,
                temperature: *t,
            })
        })
        .collect()
}

/// Separating wall between the two streams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    pub thickness_m: f64,
    pub conductivity_w_m_k: f64,
}

impl Wall {
    /// 2 mm stainless steel.
    pub const DEFAULT: Wall = Wall {
        thickness_m: 0.002,
        conductivity_w_m_k: 50.0,
    };

    pub fn new(thickness_m: f64, conductivity_w_m_k: f64) -> CoreResult<Self> {
        Ok(Self {
            thickness_m: ensure_positive(thickness_m, "wall thickness")?,
            conductivity_w_m_k: ensure_positive(conductivity_w_m_k, "wall conductivity")?,
        })
    }

    pub fn resistance(&self) -> ThermalResistance {
        ThermalResistance::conduction("wall", self.thickness_m, self.conductivity_w_m_k)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The three-layer network between the streams: inner film, wall, outer film.
pub fn double_pipe_network(h_inner: f64, h_outer: f64, wall: &Wall) -> [ThermalResistance; 3] {
    [
        ThermalResistance::convection("inner film", h_inner),
        wall.resistance(),
        ThermalResistance::convection("outer film", h_outer),
    ]
}

/// Overall coefficient `U = 1 / (1/h_inner + t/k + 1/h_outer)` [W/(m²·K)].
pub fn overall_coefficient(h_inner: f64, h_outer: f64, wall: &Wall) -> f64 {
    1.0 / series(&double_pipe_network(h_inner, h_outer, wall))
}
