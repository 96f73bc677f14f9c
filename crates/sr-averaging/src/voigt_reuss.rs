//! Voigt, Reuss and Voigt-Reuss-Hill averages.

use crate::scheme::{AveragingScheme, arithmetic, check_inputs, shifted_harmonic};
use sr_core::SrResult;

/// Iso-strain (arithmetic) average; upper bound on composite moduli.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Voigt;

/// Iso-stress (harmonic) average; lower bound on composite moduli.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reuss;

/// Arithmetic mean of the Voigt and Reuss averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoigtReussHill;

impl Voigt {
    pub(crate) fn modulus(fractions: &[f64], moduli: &[f64]) -> f64 {
        arithmetic(fractions, moduli)
    }
}

impl Reuss {
    pub(crate) fn modulus(fractions: &[f64], moduli: &[f64]) -> SrResult<f64> {
        shifted_harmonic(fractions, moduli, 0.0)
    }
}

impl AveragingScheme for Voigt {
    fn name(&self) -> &str {
        "Voigt"
    }

    fn average_bulk_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
        Ok(Voigt::modulus(f, k))
    }

    fn average_shear_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
        Ok(Voigt::modulus(f, g))
    }
}

impl AveragingScheme for Reuss {
    fn name(&self) -> &str {
        "Reuss"
    }

    fn average_bulk_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
        Reuss::modulus(f, k)
    }

    fn average_shear_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
        Reuss::modulus(f, g)
    }
}

impl AveragingScheme for VoigtReussHill {
    fn name(&self) -> &str {
        "Voigt-Reuss-Hill"
    }

    fn average_bulk_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
        Ok(0.5 * (Voigt::modulus(f, k) + Reuss::modulus(f, k)?))
    }

    fn average_shear_moduli(&self, f: &[f64], k: &[f64], g: &[f64]) -> SrResult<f64> {
        check_inputs(f, &[("bulk moduli", k), ("shear moduli", g)])?;
        Ok(0.5 * (Voigt::modulus(f, g) + Reuss::modulus(f, g)?))
    }
}
