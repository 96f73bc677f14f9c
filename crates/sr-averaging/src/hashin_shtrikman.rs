//! Hashin-Shtrikman bounds.
//!
//! Written in Walpole's form, which also covers composites that are not well ordered
//! (the stiffest phase in bulk need not be the stiffest in shear):
//!
//! ```text
//! Λ(z) = [Σ fᵢ / (Kᵢ + 4z/3)]⁻¹ - 4z/3
//! Γ(z) = [Σ fᵢ / (Gᵢ + z)]⁻¹ - z
//! ζ(K, G) = G/6 · (9K + 8G) / (K + 2G)
//!
//! K_upper = Λ(G_max)            K_lower = Λ(G_min)
//! G_upper = Γ(ζ(K_max, G_max))  G_lower = Γ(ζ(K_min, G_min))
//! ```
//!
//! Extremes are taken over the phases actually present (non-zero volume fraction).
//! With `z = 0` both forms reduce to the Reuss average, and they approach Voigt as
//! `z` grows, so the bounds always sit inside the Voigt-Reuss interval.

use crate::scheme::{AveragingScheme, check_inputs, shifted_harmonic};
use sr_core::SrResult;

/// Upper Hashin-Shtrikman bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashinShtrikmanUpper;

/// Lower Hashin-Shtrikman bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashinShtrikmanLower;

#[derive(Clone, Copy)]
enum Bound {
    Upper,
    Lower,
}

fn extreme(fractions: &[f64], values: &[f64], bound: Bound) -> f64 {
    let present = fractions
        .iter()
        .zip(values)
        .filter(|(f, _)| **f > 0.0)
        .map(|(_, v)| *v);
    match bound {
        Bound::Upper => present.fold(f64::NEG_INFINITY, f64::max),
        Bound::Lower => present.fold(f64::INFINITY, f64::min),
    }
}

fn zeta(k: f64, g: f64) -> f64 {
    let denom = k + 2.0 * g;
    if denom == 0.0 {
        return 0.0;
    }
    g / 6.0 * (9.0 * k + 8.0 * g) / denom
}

fn bulk_bound(f: &[f64], k: &[f64], g: &[f64], bound: Bound) -> SrResult<f64> {
    check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
    let g_ext = extreme(f, g, bound);
    shifted_harmonic(f, k, 4.0 * g_ext / 3.0)
}

fn shear_bound(f: &[f64], k: &[f64], g: &[f64], bound: Bound) -> SrResult<f64> {
    check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
    let k_ext = extreme(f, k, bound);
    let g_ext = extreme(f, g, bound);
    shifted_harmonic(f, g, zeta(k_ext, g_ext))
}

impl AveragingScheme for HashinShtrikmanUpper {
    fn name(&self) -> &str {
        "Hashin-Shtrikman upper"
    }

    fn average_bulk_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        bulk_bound(f, k, g, Bound::Upper)
    }

    fn average_shear_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        shear_bound(f, k, g, Bound::Upper)
    }
}

impl AveragingScheme for HashinShtrikmanLower {
    fn name(&self) -> &str {
        "Hashin-Shtrikman lower"
    }

    fn average_bulk_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        bulk_bound(f, k, g, Bound::Lower)
    }

    fn average_shear_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        shear_bound(f, k, g, Bound::Lower)
    }
}
