//! Reference property table.
//!
//! One constant entry per [`FluidId`], evaluated at a single reference state.
//! Values are stored in SI base units so the correlations can read them
//! without conversion; typed accessors are provided for callers that want
//! `uom` quantities.

use crate::error::FluidResult;
use crate::fluid::FluidId;
use hx_core::units::{Density, DynVisc, SpecHeat, Temperature, ThermalCond};
use hx_core::units::{jpkgk, k, kgpm3, pa_s, wpmk};
use serde::Serialize;

/// Reference properties of a single-phase working fluid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidSpec {
    /// Density [kg/m³]
    pub density_kg_m3: f64,
    /// Specific heat [J/(kg·K)]
    pub specific_heat_j_kg_k: f64,
    /// Dynamic viscosity [Pa·s]
    pub viscosity_pa_s: f64,
    /// Thermal conductivity [W/(m·K)]
    pub thermal_conductivity_w_m_k: f64,
    /// Prandtl number [-]
    pub prandtl: f64,
    /// Critical temperature [K]
    pub critical_temperature_k: f64,
}

impl FluidSpec {
    const fn new(
        density_kg_m3: f64,
        specific_heat_j_kg_k: f64,
        viscosity_pa_s: f64,
        thermal_conductivity_w_m_k: f64,
        prandtl: f64,
        critical_temperature_k: f64,
    ) -> Self {
        Self {
            density_kg_m3,
            specific_heat_j_kg_k,
            viscosity_pa_s,
            thermal_conductivity_w_m_k,
            prandtl,
            critical_temperature_k,
        }
    }

    pub fn density(&self) -> Density {
        kgpm3(self.density_kg_m3)
    }

    pub fn specific_heat(&self) -> SpecHeat {
        jpkgk(self.specific_heat_j_kg_k)
    }

    pub fn viscosity(&self) -> DynVisc {
        pa_s(self.viscosity_pa_s)
    }

    pub fn thermal_conductivity(&self) -> ThermalCond {
        wpmk(self.thermal_conductivity_w_m_k)
    }

    pub fn critical_temperature(&self) -> Temperature {
        k(self.critical_temperature_k)
    }
}

const WATER: FluidSpec = FluidSpec::new(997.0, 4186.0, 0.001, 0.598, 7.01, 647.13);
const OIL: FluidSpec = FluidSpec::new(900.0, 1900.0, 0.03, 0.145, 394.48, 600.0);
const AIR: FluidSpec = FluidSpec::new(1.225, 1005.0, 0.0000181, 0.024, 0.76, 132.2);
const ETHYLENE_GLYCOL: FluidSpec = FluidSpec::new(1113.0, 2460.0, 0.0157, 0.258, 150.0, 500.0);
const STEAM: FluidSpec = FluidSpec::new(0.590, 2080.0, 0.0000134, 0.0248, 1.13, 647.13);
const R134A: FluidSpec = FluidSpec::new(1206.0, 1424.0, 0.000211, 0.0824, 3.64, 374.21);
const GLYCERIN: FluidSpec = FluidSpec::new(1261.0, 2427.0, 1.412, 0.285, 12022.0, 564.0);
const METHANOL: FluidSpec = FluidSpec::new(792.0, 2484.0, 0.00059, 0.203, 7.2, 512.6);
const AMMONIA: FluidSpec = FluidSpec::new(681.9, 4700.0, 0.00025, 0.52, 2.26, 405.5);
const HELIUM: FluidSpec = FluidSpec::new(0.1785, 5193.0, 0.0000186, 0.1513, 0.64, 5.2);
const NITROGEN: FluidSpec = FluidSpec::new(1.251, 1040.0, 0.0000179, 0.0259, 0.72, 126.2);
const HYDROGEN: FluidSpec = FluidSpec::new(0.0899, 14304.0, 0.0000087, 0.1805, 0.69, 33.2);
const OXYGEN: FluidSpec = FluidSpec::new(1.429, 919.0, 0.0000203, 0.0262, 0.71, 154.6);
const CARBON_DIOXIDE: FluidSpec = FluidSpec::new(1.98, 844.0, 0.0000147, 0.0146, 0.85, 304.2);
const MERCURY: FluidSpec = FluidSpec::new(13534.0, 139.0, 0.00152, 8.34, 0.025, 1750.0);
const ENGINE_OIL: FluidSpec = FluidSpec::new(885.0, 1909.0, 0.29, 0.145, 3800.0, 600.0);
const TRANSFORMER_OIL: FluidSpec = FluidSpec::new(880.0, 1860.0, 0.019, 0.12, 295.0, 600.0);
const ETHANOL: FluidSpec = FluidSpec::new(789.0, 2470.0, 0.0012, 0.171, 17.3, 514.0);
const PROPYLENE_GLYCOL: FluidSpec = FluidSpec::new(1036.0, 2510.0, 0.042, 0.2, 528.0, 500.0);

impl FluidId {
    /// Reference properties for this fluid.
    pub const fn properties(self) -> &'static FluidSpec {
        match self {
            FluidId::Water => &WATER,
            FluidId::Oil => &OIL,
            FluidId::Air => &AIR,
            FluidId::EthyleneGlycol => &ETHYLENE_GLYCOL,
            FluidId::Steam => &STEAM,
            FluidId::RefrigerantR134a => &R134A,
            FluidId::Glycerin => &GLYCERIN,
            FluidId::Methanol => &METHANOL,
            FluidId::Ammonia => &AMMONIA,
            FluidId::Helium => &HELIUM,
            FluidId::Nitrogen => &NITROGEN,
            FluidId::Hydrogen => &HYDROGEN,
            FluidId::Oxygen => &OXYGEN,
            FluidId::CarbonDioxide => &CARBON_DIOXIDE,
            FluidId::Mercury => &MERCURY,
            FluidId::EngineOil => &ENGINE_OIL,
            FluidId::TransformerOil => &TRANSFORMER_OIL,
            FluidId::Ethanol => &ETHANOL,
            FluidId::PropyleneGlycol => &PROPYLENE_GLYCOL,
        }
    }
}

/// Resolve a fluid identifier string to its reference properties.
///
/// # Errors
///
/// Returns [`FluidError::UnknownFluid`](crate::FluidError::UnknownFluid) if the
/// identifier does not name a tabulated fluid.
pub fn lookup(fluid_id: &str) -> FluidResult<&'static FluidSpec> {
    let id: FluidId = fluid_id.parse()?;
    Ok(id.properties())
}
