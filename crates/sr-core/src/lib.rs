//! sr-core: stable foundation for seisrock.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float/sequence helpers)
//! - error (shared domain/shape error taxonomy)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SrError, SrResult};
pub use numeric::*;
pub use units::*;
