use crate::FluidId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidCategory {
    Liquid,
    Gas,
    Refrigerant,
    LiquidMetal,
    Oil,
}

impl fmt::Display for FluidCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::Refrigerant => "refrigerant",
            Self::LiquidMetal => "liquid metal",
            Self::Oil => "oil",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub id: FluidId,
    pub category: FluidCategory,
    pub aliases: &'static [&'static str],
}

impl FluidCatalogEntry {
    pub fn display_name(&self) -> &'static str {
        self.id.display_name()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.key().contains(&query)
            || self.display_name().to_ascii_lowercase().contains(&query)
            || self.category.to_string().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const FLUID_CATALOG: [FluidCatalogEntry; 19] = [
    FluidCatalogEntry {
        id: FluidId::Water,
        category: FluidCategory::Liquid,
        aliases: &["h2o"],
    },
    FluidCatalogEntry {
        id: FluidId::Oil,
        category: FluidCategory::Oil,
        aliases: &["mineral oil"],
    },
    FluidCatalogEntry {
        id: FluidId::Air,
        category: FluidCategory::Gas,
        aliases: &["atmosphere"],
    },
    FluidCatalogEntry {
        id: FluidId::EthyleneGlycol,
        category: FluidCategory::Liquid,
        aliases: &["meg", "antifreeze"],
    },
    FluidCatalogEntry {
        id: FluidId::Steam,
        category: FluidCategory::Gas,
        aliases: &["water vapor"],
    },
    FluidCatalogEntry {
        id: FluidId::RefrigerantR134a,
        category: FluidCategory::Refrigerant,
        aliases: &["r134a", "hfc-134a"],
    },
    FluidCatalogEntry {
        id: FluidId::Glycerin,
        category: FluidCategory::Liquid,
        aliases: &["glycerol"],
    },
    FluidCatalogEntry {
        id: FluidId::Methanol,
        category: FluidCategory::Liquid,
        aliases: &["methyl alcohol"],
    },
    FluidCatalogEntry {
        id: FluidId::Ammonia,
        category: FluidCategory::Refrigerant,
        aliases: &["nh3", "r717"],
    },
    FluidCatalogEntry {
        id: FluidId::Helium,
        category: FluidCategory::Gas,
        aliases: &["he"],
    },
    FluidCatalogEntry {
        id: FluidId::Nitrogen,
        category: FluidCategory::Gas,
        aliases: &["n2"],
    },
    FluidCatalogEntry {
        id: FluidId::Hydrogen,
        category: FluidCategory::Gas,
        aliases: &["h2"],
    },
    FluidCatalogEntry {
        id: FluidId::Oxygen,
        category: FluidCategory::Gas,
        aliases: &["o2"],
    },
    FluidCatalogEntry {
        id: FluidId::CarbonDioxide,
        category: FluidCategory::Gas,
        aliases: &["co2", "r744"],
    },
    FluidCatalogEntry {
        id: FluidId::Mercury,
        category: FluidCategory::LiquidMetal,
        aliases: &["hg"],
    },
    FluidCatalogEntry {
        id: FluidId::EngineOil,
        category: FluidCategory::Oil,
        aliases: &["lube oil"],
    },
    FluidCatalogEntry {
        id: FluidId::TransformerOil,
        category: FluidCategory::Oil,
        aliases: &["insulating oil"],
    },
    FluidCatalogEntry {
        id: FluidId::Ethanol,
        category: FluidCategory::Liquid,
        aliases: &["ethyl alcohol"],
    },
    FluidCatalogEntry {
        id: FluidId::PropyleneGlycol,
        category: FluidCategory::Liquid,
        aliases: &["mpg"],
    },
];

pub fn fluid_catalog() -> &'static [FluidCatalogEntry] {
    &FLUID_CATALOG
}

pub fn filter_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    fluid_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
