//! sr-minerals: mineral and rock collaborators for seisrock.
//!
//! Provides:
//! - Thermodynamic state representation (pressure, temperature)
//! - `Mineral` trait for equation-of-state outputs at a given state
//! - A closed-form Murnaghan mineral model and a catalog of lower-mantle phases
//! - Rock composites (ordered mineral + molar fraction phases)
//! - Pressure/temperature paths and sweep generation
//!
//! # Architecture
//!
//! The rock holds no thermodynamic state of its own. Every evaluation point is an
//! explicit [`ThermoState`] handed to each mineral, so the same rock can be evaluated
//! at many points (or from many threads) without a hidden "current state".
//!
//! # Example
//!
//! ```
//! use sr_minerals::{MineralSpecies, Rock, ThermoState, Mineral};
//! use sr_core::units::{gpa, k};
//!
//! let rock = Rock::from_fractions(
//!     "pyrolite-ish",
//!     vec![
//!         (MineralSpecies::MgPerovskite.shared(), 0.8),
//!         (MineralSpecies::Periclase.shared(), 0.2),
//!     ],
//! )
//! .unwrap();
//!
//! let state = ThermoState::from_pt(gpa(50.0), k(2000.0)).unwrap();
//! let pack = rock.phases()[0].mineral().property_pack(&state).unwrap();
//! assert!(pack.density().unwrap() > 4000.0);
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod murnaghan;
pub mod path;
pub mod rock;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use catalog::{MineralCatalogEntry, filter_catalog, lookup_mineral, mineral_catalog};
pub use error::{MineralError, MineralResult};
pub use model::{Mineral, MineralPropertyPack, Modulus, MolarMass, MolarVolume};
pub use murnaghan::{MurnaghanMineral, MurnaghanParams};
pub use path::{SweepDefinition, SweepType, ThermoPath};
pub use rock::{Phase, Rock};
pub use species::MineralSpecies;
pub use state::ThermoState;
