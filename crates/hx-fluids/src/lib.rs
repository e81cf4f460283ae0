//! hx-fluids: working-fluid reference data for hxsim.
//!
//! Provides:
//! - `FluidId`, the closed set of supported fluids
//! - `FluidSpec`, a constant property table (one entry per fluid)
//! - A searchable catalog with categories and aliases
//!
//! The table is plain `const` data: it is never mutated and needs no
//! synchronization when shared between threads.
//!
//! # Example
//!
//! ```
//! use hx_fluids::{FluidId, lookup};
//!
//! let water = lookup("water").unwrap();
//! assert_eq!(water.density_kg_m3, 997.0);
//! assert_eq!(FluidId::Air.properties().critical_temperature_k, 132.2);
//! ```

pub mod catalog;
pub mod error;
pub mod fluid;
pub mod properties;

// Re-exports for ergonomics
pub use catalog::{FluidCatalogEntry, FluidCategory, filter_catalog, fluid_catalog};
pub use error::{FluidError, FluidResult};
pub use fluid::FluidId;
pub use properties::{FluidSpec, lookup};
