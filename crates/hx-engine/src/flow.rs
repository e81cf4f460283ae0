//! Pipe-flow kinematics: velocity, Reynolds number, Darcy friction factor.
//!
//! Two different regime splits live here on purpose. The friction factor
//! switches once, at `Re = 2300`. The [`FlowRegime`] label has three bands
//! (laminar, transition, turbulent) and only drives Nusselt correlation
//! selection in [`heat_transfer`](crate::heat_transfer).

use hx_core::units::{Area, Velocity, m2, mps};
use hx_core::{CoreResult, ensure_finite};
use hx_fluids::FluidSpec;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// Upper bound of laminar flow.
pub const LAMINAR_LIMIT_RE: f64 = 2300.0;
/// Lower bound of fully turbulent flow.
pub const TURBULENT_LIMIT_RE: f64 = 10_000.0;

/// Flow regime used to pick a Nusselt correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    /// `Re < 2300`
    Laminar,
    /// `2300 <= Re < 10000`
    Transition,
    /// `Re >= 10000`
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT_RE {
            FlowRegime::Laminar
        } else if reynolds < TURBULENT_LIMIT_RE {
            FlowRegime::Transition
        } else {
            FlowRegime::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "laminar"),
            Self::Transition => write!(f, "transition"),
            Self::Turbulent => write!(f, "turbulent"),
        }
    }
}

/// Circular cross-section area `π·(D/2)²` [m²].
pub fn flow_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Mean velocity `Q / (ρ·A)`.
pub fn mean_velocity(flow_rate: f64, density: f64, area: f64) -> f64 {
    flow_rate / (density * area)
}

/// Reynolds number `ρ·v·D / μ`.
pub fn reynolds_number(density: f64, velocity: f64, diameter: f64, viscosity: f64) -> f64 {
    density * velocity * diameter / viscosity
}

/// Petukhov smooth-pipe friction factor `(0.790·ln(Re) − 1.64)^-2`.
pub fn petukhov_friction_factor(reynolds: f64) -> f64 {
    (0.790 * reynolds.ln() - 1.64).powi(-2)
}

/// Darcy friction factor: `64/Re` below 2300, Petukhov at and above.
pub fn friction_factor(reynolds: f64) -> f64 {
    if reynolds < LAMINAR_LIMIT_RE {
        64.0 / reynolds
    } else {
        petukhov_friction_factor(reynolds)
    }
}

/// Kinematic state of the flow through the pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowState {
    pub area_m2: f64,
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub regime: FlowRegime,
}

impl FlowState {
    /// Evaluate the flow for a fluid, pipe diameter and volumetric flow rate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NonFinite` if the table entry makes the Reynolds
    /// number or friction factor undefined (zero density or viscosity).
    pub fn evaluate(fluid: &FluidSpec, diameter: f64, flow_rate: f64) -> CoreResult<Self> {
        let area_m2 = flow_area(diameter);
        let velocity_m_s = ensure_finite(
            mean_velocity(flow_rate, fluid.density_kg_m3, area_m2),
            "velocity",
        )?;
        let reynolds = ensure_finite(
            reynolds_number(
                fluid.density_kg_m3,
                velocity_m_s,
                diameter,
                fluid.viscosity_pa_s,
            ),
            "Reynolds number",
        )?;
        let friction_factor = ensure_finite(friction_factor(reynolds), "friction factor")?;

        Ok(Self {
            area_m2,
            velocity_m_s,
            reynolds,
            friction_factor,
            regime: FlowRegime::from_reynolds(reynolds),
        })
    }

    pub fn area(&self) -> Area {
        m2(self.area_m2)
    }

    pub fn velocity(&self) -> Velocity {
        mps(self.velocity_m_s)
    }

    /// Darcy–Weisbach pressure drop `f·L·ρ·v²/(2·D)` [Pa].
    pub fn pressure_drop(&self, density: f64, length: f64, diameter: f64) -> f64 {
        self.friction_factor * length * density * self.velocity_m_s.powi(2) / (2.0 * diameter)
    }

    /// Dynamic pressure `0.5·ρ·v²` [Pa].
    pub fn dynamic_pressure(&self, density: f64) -> f64 {
        0.5 * density * self.velocity_m_s.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_fluids::FluidId;

    #[test]
    fn area_of_fifty_mm_pipe() {
        let area = flow_area(0.05);
        assert!((area - 0.001_963_495).abs() < 1e-9);
    }

    #[test]
    fn friction_switches_at_2300_inclusive() {
        assert_eq!(friction_factor(2299.0), 64.0 / 2299.0);
        assert_eq!(friction_factor(2300.0), petukhov_friction_factor(2300.0));
        assert_ne!(friction_factor(2300.0), 64.0 / 2300.0);
    }

    #[test]
    fn friction_ignores_the_transition_band() {
        // Petukhov applies from 2300 on; there is no separate transition branch.
        for re in [2300.0, 5000.0, 9999.0, 10_000.0, 1e6] {
            assert_eq!(friction_factor(re), petukhov_friction_factor(re));
        }
    }

    #[test]
    fn petukhov_value_at_1e5() {
        // (0.790·ln(1e5) − 1.64)^-2 ≈ 0.01797
        let f = petukhov_friction_factor(1e5);
        assert!((f - 0.017_97).abs() < 1e-4, "f = {f}");
    }

    #[test]
    fn regime_bands() {
        assert_eq!(FlowRegime::from_reynolds(0.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2299.999), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2300.0), FlowRegime::Transition);
        assert_eq!(FlowRegime::from_reynolds(9999.999), FlowRegime::Transition);
        assert_eq!(FlowRegime::from_reynolds(10_000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn evaluate_water_pipe() {
        let water = FluidId::Water.properties();
        let state = FlowState::evaluate(water, 0.05, 0.01).unwrap();

        let area = flow_area(0.05);
        let velocity = 0.01 / (997.0 * area);
        assert_eq!(state.area_m2, area);
        assert_eq!(state.velocity_m_s, velocity);
        assert_eq!(state.reynolds, 997.0 * velocity * 0.05 / 0.001);
        assert_eq!(state.regime, FlowRegime::Laminar);
        assert_eq!(state.friction_factor, 64.0 / state.reynolds);
        assert_eq!(state.area().value, area);
        assert_eq!(state.velocity().value, velocity);
    }

    #[test]
    fn evaluate_rejects_degenerate_fluid() {
        let mut broken = *FluidId::Water.properties();
        broken.viscosity_pa_s = 0.0;
        assert!(FlowState::evaluate(&broken, 0.05, 0.01).is_err());
    }

    #[test]
    fn pressure_drop_ratio_is_f_l_over_d() {
        let air = FluidId::Air.properties();
        let state = FlowState::evaluate(air, 0.05, 0.001).unwrap();
        let dp = state.pressure_drop(air.density_kg_m3, 2.0, 0.05);
        let ratio = dp / state.dynamic_pressure(air.density_kg_m3);
        assert!((ratio - state.friction_factor * 2.0 / 0.05).abs() < 1e-9 * ratio);
    }
}
