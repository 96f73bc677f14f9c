//! Averaging scheme trait and shared helpers.

use sr_core::numeric::{ensure_all_finite, ensure_len, ensure_non_empty};
use sr_core::{SrError, SrResult};
use std::fmt;

/// A mixing rule combining per-phase properties into composite values.
///
/// Schemes are stateless. `volume_fractions` are the normalized volume fractions of
/// the phases; every per-phase slice is aligned with it and must have the same length.
pub trait AveragingScheme: Send + Sync + fmt::Debug {
    /// Scheme name (for logging and reports).
    fn name(&self) -> &str;

    /// Composite bulk modulus [Pa].
    fn average_bulk_moduli(
        &self,
        volume_fractions: &[f64],
        bulk_moduli: &[f64],
        shear_moduli: &[f64],
    ) -> SrResult<f64>;

    /// Composite shear modulus [Pa].
    fn average_shear_moduli(
        &self,
        volume_fractions: &[f64],
        bulk_moduli: &[f64],
        shear_moduli: &[f64],
    ) -> SrResult<f64>;

    /// Composite density [kg/m³].
    ///
    /// Density is additive in volume, so every built-in scheme uses the
    /// volume-weighted arithmetic mean.
    fn average_density(&self, volume_fractions: &[f64], densities: &[f64]) -> SrResult<f64> {
        check_inputs(volume_fractions, &[("densities", densities)])?;
        if let Some((index, &value)) = densities.iter().enumerate().find(|(_, d)| **d <= 0.0) {
            return Err(SrError::Domain {
                what: "densities",
                index,
                value,
            });
        }
        Ok(arithmetic(volume_fractions, densities))
    }
}

/// Validate that the fractions are non-empty, finite and non-negative with a positive
/// sum, and that every property column has matching length and finite, non-negative
/// values.
pub fn check_inputs(
    volume_fractions: &[f64],
    columns: &[(&'static str, &[f64])],
) -> SrResult<()> {
    ensure_non_empty(volume_fractions, "volume fractions")?;
    ensure_all_finite(volume_fractions, "volume fraction")?;

    if let Some((index, &f)) = volume_fractions.iter().enumerate().find(|(_, f)| **f < 0.0) {
        return Err(SrError::Domain {
            what: "volume fraction",
            index,
            value: f,
        });
    }
    let total: f64 = volume_fractions.iter().sum();
    if total <= 0.0 {
        return Err(SrError::Domain {
            what: "volume fraction sum",
            index: volume_fractions.len() - 1,
            value: total,
        });
    }

    for &(what, values) in columns {
        ensure_len(values, volume_fractions.len(), what)?;
        ensure_all_finite(values, what)?;
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
            return Err(SrError::Domain { what, index, value });
        }
    }
    Ok(())
}

/// Volume-weighted arithmetic mean.
pub(crate) fn arithmetic(fractions: &[f64], values: &[f64]) -> f64 {
    fractions.iter().zip(values).map(|(f, v)| f * v).sum()
}

/// `[Σ fᵢ / (vᵢ + offset)]⁻¹ - offset`.
///
/// With `offset = 0` this is the Reuss (harmonic) mean. A phase that is present with
/// a vanishing denominator pins the result to `-offset`. The sum must be positive.
pub(crate) fn shifted_harmonic(fractions: &[f64], values: &[f64], offset: f64) -> SrResult<f64> {
    let mut sum = 0.0;
    for (&f, &v) in fractions.iter().zip(values) {
        if f == 0.0 {
            continue;
        }
        let denom = v + offset;
        if denom == 0.0 {
            return Ok(-offset);
        }
        sum += f / denom;
    }
    if !(sum.is_finite() && sum > 0.0) {
        return Err(SrError::Domain {
            what: "harmonic mean denominator",
            index: fractions.len().saturating_sub(1),
            value: sum,
        });
    }
    Ok(1.0 / sum - offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Voigt;

    #[test]
    fn check_inputs_rejects_length_mismatch() {
        let err = check_inputs(&[0.5, 0.5], &[("bulk moduli", &[1.0])]).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn check_inputs_rejects_empty() {
        let err = check_inputs(&[], &[]).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn check_inputs_rejects_negative_fraction() {
        let err = check_inputs(&[1.5, -0.5], &[]).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn check_inputs_rejects_nan_property() {
        let err =
            check_inputs(&[0.5, 0.5], &[("densities", &[3000.0, f64::NAN])]).unwrap_err();
        assert!(matches!(
            err,
            SrError::Domain {
                what: "densities",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn check_inputs_rejects_negative_modulus() {
        let err = check_inputs(&[0.5, 0.5], &[("bulk moduli", &[-100e9, 100e9])]).unwrap_err();
        assert_eq!(
            err,
            SrError::Domain {
                what: "bulk moduli",
                index: 0,
                value: -100e9
            }
        );
    }

    #[test]
    fn check_inputs_rejects_all_zero_fractions() {
        let err = check_inputs(&[0.0, 0.0], &[]).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn density_must_be_positive() {
        let err = Voigt.average_density(&[0.5, 0.5], &[-3000.0, 9000.0]).unwrap_err();
        assert!(matches!(
            err,
            SrError::Domain {
                what: "densities",
                index: 0,
                ..
            }
        ));
        assert!(Voigt.average_density(&[0.5, 0.5], &[0.0, 9000.0]).is_err());
    }

    #[test]
    fn harmonic_with_zero_value_is_zero() {
        assert_eq!(shifted_harmonic(&[0.5, 0.5], &[0.0, 10.0], 0.0).unwrap(), 0.0);
    }

    #[test]
    fn harmonic_ignores_absent_phases() {
        let h = shifted_harmonic(&[1.0, 0.0], &[10.0, 0.0], 0.0).unwrap();
        assert!((h - 10.0).abs() < 1e-12);
    }

    #[test]
    fn harmonic_with_no_weight_is_error() {
        let err = shifted_harmonic(&[0.0, 0.0], &[10.0, 20.0], 0.0).unwrap_err();
        assert!(err.is_domain());
    }
}
