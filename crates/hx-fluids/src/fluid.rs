//! Working fluid identifiers.

use crate::error::FluidError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Working fluids with tabulated reference properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FluidId {
    /// Liquid water
    Water,
    /// Generic mineral oil
    Oil,
    /// Dry air
    Air,
    /// Ethylene glycol (MEG)
    EthyleneGlycol,
    /// Water vapor
    Steam,
    /// Refrigerant R134a (liquid)
    RefrigerantR134a,
    /// Glycerin
    Glycerin,
    /// Methanol
    Methanol,
    /// Ammonia (NH₃, liquid)
    Ammonia,
    /// Helium (He)
    Helium,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Oxygen (O₂)
    Oxygen,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Mercury (Hg)
    Mercury,
    /// Engine lubricating oil
    EngineOil,
    /// Transformer insulating oil
    TransformerOil,
    /// Ethanol
    Ethanol,
    /// Propylene glycol (MPG)
    PropyleneGlycol,
}

impl FluidId {
    pub const ALL: [FluidId; 19] = [
        FluidId::Water,
        FluidId::Oil,
        FluidId::Air,
        FluidId::EthyleneGlycol,
        FluidId::Steam,
        FluidId::RefrigerantR134a,
        FluidId::Glycerin,
        FluidId::Methanol,
        FluidId::Ammonia,
        FluidId::Helium,
        FluidId::Nitrogen,
        FluidId::Hydrogen,
        FluidId::Oxygen,
        FluidId::CarbonDioxide,
        FluidId::Mercury,
        FluidId::EngineOil,
        FluidId::TransformerOil,
        FluidId::Ethanol,
        FluidId::PropyleneGlycol,
    ];

    /// Canonical identifier used in case files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            FluidId::Water => "water",
            FluidId::Oil => "oil",
            FluidId::Air => "air",
            FluidId::EthyleneGlycol => "ethylene-glycol",
            FluidId::Steam => "steam",
            FluidId::RefrigerantR134a => "refrigerant-r134a",
            FluidId::Glycerin => "glycerin",
            FluidId::Methanol => "methanol",
            FluidId::Ammonia => "ammonia",
            FluidId::Helium => "helium",
            FluidId::Nitrogen => "nitrogen",
            FluidId::Hydrogen => "hydrogen",
            FluidId::Oxygen => "oxygen",
            FluidId::CarbonDioxide => "carbon-dioxide",
            FluidId::Mercury => "mercury",
            FluidId::EngineOil => "engine-oil",
            FluidId::TransformerOil => "transformer-oil",
            FluidId::Ethanol => "ethanol",
            FluidId::PropyleneGlycol => "propylene-glycol",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FluidId::Water => "Water",
            FluidId::Oil => "Oil",
            FluidId::Air => "Air",
            FluidId::EthyleneGlycol => "Ethylene Glycol",
            FluidId::Steam => "Steam",
            FluidId::RefrigerantR134a => "Refrigerant R134a",
            FluidId::Glycerin => "Glycerin",
            FluidId::Methanol => "Methanol",
            FluidId::Ammonia => "Ammonia",
            FluidId::Helium => "Helium",
            FluidId::Nitrogen => "Nitrogen",
            FluidId::Hydrogen => "Hydrogen",
            FluidId::Oxygen => "Oxygen",
            FluidId::CarbonDioxide => "Carbon Dioxide",
            FluidId::Mercury => "Mercury",
            FluidId::EngineOil => "Engine Oil",
            FluidId::TransformerOil => "Transformer Oil",
            FluidId::Ethanol => "Ethanol",
            FluidId::PropyleneGlycol => "Propylene Glycol",
        }
    }
}

impl std::str::FromStr for FluidId {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        FluidId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(query))
            .ok_or_else(|| FluidError::UnknownFluid {
                id: query.to_string(),
            })
    }
}

impl TryFrom<String> for FluidId {
    type Error = FluidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FluidId> for &'static str {
    fn from(id: FluidId) -> Self {
        id.key()
    }
}

impl fmt::Display for FluidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
