//! sr-averaging: mixing rules for composite elastic moduli.
//!
//! Provides:
//! - `AveragingScheme` trait: bulk modulus, shear modulus and density of a composite
//!   from per-phase volume fractions and properties
//! - Voigt, Reuss and Voigt-Reuss-Hill averages
//! - Hashin-Shtrikman upper and lower bounds
//! - `AveragingSchemeKind`, a serializable selector for the built-in schemes
//!
//! Any type implementing `AveragingScheme` can be handed to the bulk averager, so
//! user-defined mixing rules plug in without touching the pipeline.
//!
//! # Example
//!
//! ```
//! use sr_averaging::{AveragingScheme, Voigt, Reuss, VoigtReussHill};
//!
//! let f = [0.5, 0.5];
//! let k = [200e9, 100e9];
//! let g = [100e9, 50e9];
//!
//! let kv = Voigt.average_bulk_moduli(&f, &k, &g).unwrap();
//! let kr = Reuss.average_bulk_moduli(&f, &k, &g).unwrap();
//! let kvrh = VoigtReussHill.average_bulk_moduli(&f, &k, &g).unwrap();
//! assert!(kr <= kvrh && kvrh <= kv);
//! ```

pub mod hashin_shtrikman;
pub mod kind;
pub mod scheme;
pub mod voigt_reuss;

// Re-exports for ergonomics
pub use hashin_shtrikman::{HashinShtrikmanLower, HashinShtrikmanUpper};
pub use kind::AveragingSchemeKind;
pub use scheme::{AveragingScheme, check_inputs};
pub use voigt_reuss::{Reuss, Voigt, VoigtReussHill};
