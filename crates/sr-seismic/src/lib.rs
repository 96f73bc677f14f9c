//! sr-seismic: seismic velocities of mineral assemblages.
//!
//! The pipeline runs strictly forward:
//!
//! ```text
//! Rock + ThermoPath ──calculate_moduli──▶ per-phase ElasticPropertySets
//!                   ──average_moduli────▶ bulk ElasticPropertySet
//!                   ──compute_velocities▶ Vp, Vs, Vphi
//!                   ──apply_attenuation_correction (optional)
//!                   ──compare_l2 / compare_chifactor against a reference profile
//! ```
//!
//! `velocities_from_rock` composes the first three steps. Every step either succeeds
//! at every evaluation point or fails with an error naming the offending quantity
//! and index; no partial results and no NaN placeholders are produced.
//!
//! # Example
//!
//! ```
//! use sr_minerals::{MineralSpecies, Rock, ThermoPath};
//! use sr_seismic::velocities_from_rock;
//!
//! let rock = Rock::from_fractions(
//!     "pv-pc",
//!     vec![
//!         (MineralSpecies::MgPerovskite.shared(), 0.8),
//!         (MineralSpecies::Periclase.shared(), 0.2),
//!     ],
//! )
//! .unwrap();
//! let path = ThermoPath::linear_geotherm(&[30e9, 60e9, 90e9, 120e9], 1900.0, 2400.0).unwrap();
//!
//! let profile = velocities_from_rock(&rock, &path, None).unwrap();
//! assert_eq!(profile.len(), 4);
//! assert!(profile.vp.iter().zip(&profile.vs).all(|(vp, vs)| vp > vs));
//! ```

pub mod attenuation;
pub mod averaging;
pub mod elastic;
pub mod error;
pub mod misfit;
pub mod moduli;
pub mod pipeline;
pub mod reference;
pub mod velocity;

// Re-exports for ergonomics
pub use attenuation::{
    AttenuationModel, MatasAttenuation, apply_attenuation_correction,
    apply_attenuation_correction_default,
};
pub use averaging::average_moduli;
pub use elastic::{ElasticPoint, ElasticPropertySet};
pub use error::{SeismicError, SeismicResult};
pub use misfit::{
    ChiFactorOptions, MisfitScores, ProfileTriple, chi_factor, chi_factor_with, compare_chifactor,
    compare_chifactor_with, compare_l2, l2,
};
pub use moduli::{calculate_moduli, calculate_moduli_parallel, calculate_moduli_pt};
pub use pipeline::{
    RockProfile, velocities_from_rock, velocities_from_rock_parallel, velocities_from_rock_pt,
};
pub use reference::{SeismicModel, SeismicProfile, TabulatedSeismicModel};
pub use velocity::{Velocities, compute_velocities};
