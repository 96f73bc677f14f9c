//! Anelastic (attenuation) correction of elastic velocities.

use std::f64::consts::PI;
use std::fmt;

use sr_core::SrError;
use sr_core::numeric::ensure_len;

use crate::error::SeismicResult;
use crate::velocity::Velocities;

/// A pure velocity correction for finite quality factors.
pub trait AttenuationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Corrected `(vp, vs, vphi)` for one point.
    fn correct(&self, vp: f64, vs: f64, vphi: f64, qs: f64, qphi: f64) -> (f64, f64, f64);
}

/// Frequency-dependent correction of Matas et al. (2007).
///
/// `Qp = 3/4 (vp/vs)² Qs` and every velocity is scaled by `1 - cot(βπ/2) / (2Q)`.
/// An infinite quality factor means no attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatasAttenuation {
    /// Frequency exponent of Q
    pub beta: f64,
}

impl Default for MatasAttenuation {
    fn default() -> Self {
        Self { beta: 0.3 }
    }
}

impl MatasAttenuation {
    fn cot(&self) -> f64 {
        1.0 / (self.beta * PI / 2.0).tan()
    }

    fn factor(cot: f64, q: f64) -> f64 {
        if q.is_infinite() {
            1.0
        } else {
            1.0 - cot / (2.0 * q)
        }
    }
}

impl AttenuationModel for MatasAttenuation {
    fn name(&self) -> &str {
        "Matas"
    }

    fn correct(&self, vp: f64, vs: f64, vphi: f64, qs: f64, qphi: f64) -> (f64, f64, f64) {
        let cot = self.cot();
        // Without a shear wave there is nothing to scale Qp from.
        let qp = if vs > 0.0 {
            0.75 * (vp / vs).powi(2) * qs
        } else {
            f64::INFINITY
        };
        (
            vp * Self::factor(cot, qp),
            vs * Self::factor(cot, qs),
            vphi * Self::factor(cot, qphi),
        )
    }
}

/// Apply `model` pointwise. Quality factors must be positive (infinity allowed).
///
/// A corrected velocity that is negative or non-finite (Q too small for the model)
/// is a domain error.
pub fn apply_attenuation_correction(
    vp: &[f64],
    vs: &[f64],
    vphi: &[f64],
    qs: f64,
    qphi: f64,
    model: &dyn AttenuationModel,
) -> SeismicResult<Velocities> {
    ensure_len(vs, vp.len(), "vs")?;
    ensure_len(vphi, vp.len(), "vphi")?;
    if qs.is_nan() || qs <= 0.0 {
        return Err(SrError::InvalidArg {
            what: "qs must be positive",
        }
        .into());
    }
    if qphi.is_nan() || qphi <= 0.0 {
        return Err(SrError::InvalidArg {
            what: "qphi must be positive",
        }
        .into());
    }

    let n = vp.len();
    let mut corrected = Velocities {
        vp: Vec::with_capacity(n),
        vs: Vec::with_capacity(n),
        vphi: Vec::with_capacity(n),
    };
    for index in 0..n {
        let (p, s, phi) = model.correct(vp[index], vs[index], vphi[index], qs, qphi);
        for (what, value) in [("corrected vp", p), ("corrected vs", s), ("corrected vphi", phi)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SrError::Domain { what, index, value }.into());
            }
        }
        corrected.vp.push(p);
        corrected.vs.push(s);
        corrected.vphi.push(phi);
    }
    Ok(corrected)
}

/// [`apply_attenuation_correction`] with [`MatasAttenuation::default`].
pub fn apply_attenuation_correction_default(
    vp: &[f64],
    vs: &[f64],
    vphi: &[f64],
    qs: f64,
    qphi: f64,
) -> SeismicResult<Velocities> {
    apply_attenuation_correction(vp, vs, vphi, qs, qphi, &MatasAttenuation::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeismicError;

    fn matas(
        vp: &[f64],
        vs: &[f64],
        vphi: &[f64],
        qs: f64,
        qphi: f64,
    ) -> SeismicResult<Velocities> {
        apply_attenuation_correction_default(vp, vs, vphi, qs, qphi)
    }

    #[test]
    fn matas_reduces_velocities() {
        let v = matas(&[13000.0], &[7000.0], &[10000.0], 300.0, 10000.0).unwrap();
        let cot = 1.0 / (0.3 * PI / 2.0).tan();
        let qp = 0.75 * (13000.0_f64 / 7000.0).powi(2) * 300.0;

        assert!((v.vs[0] - 7000.0 * (1.0 - cot / 600.0)).abs() < 1e-9);
        assert!((v.vp[0] - 13000.0 * (1.0 - cot / (2.0 * qp))).abs() < 1e-9);
        assert!((v.vphi[0] - 10000.0 * (1.0 - cot / 20000.0)).abs() < 1e-9);
        assert!(v.vs[0] < 7000.0 && v.vp[0] < 13000.0);
    }

    #[test]
    fn infinite_q_leaves_velocities_unchanged() {
        let (vp, vs, vphi) = (vec![11000.0, 12000.0], vec![6000.0, 6500.0], vec![8500.0, 9000.0]);
        let v = matas(&vp, &vs, &vphi, f64::INFINITY, f64::INFINITY).unwrap();
        assert_eq!(v.vp, vp);
        assert_eq!(v.vs, vs);
        assert_eq!(v.vphi, vphi);
    }

    #[test]
    fn non_positive_q_is_invalid() {
        for q in [0.0, -10.0, f64::NAN] {
            assert!(matas(&[1.0], &[1.0], &[1.0], q, 100.0).is_err());
            assert!(matas(&[1.0], &[1.0], &[1.0], 100.0, q).is_err());
        }
    }

    #[test]
    fn small_q_giving_negative_velocity_is_domain_error() {
        // cot(0.15 pi) / 2 is about 0.98, so Qs = 0.5 flips the sign of vs
        let err = matas(&[10000.0], &[5000.0], &[8000.0], 0.5, 0.5).unwrap_err();
        assert!(err.is_domain());
        assert!(matches!(
            err,
            SeismicError::Core(SrError::Domain {
                what: "corrected vs",
                index: 0,
                ..
            })
        ));

        let err = matas(&[10000.0], &[5000.0], &[8000.0], f64::INFINITY, 0.5).unwrap_err();
        assert!(matches!(
            err,
            SeismicError::Core(SrError::Domain {
                what: "corrected vphi",
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn lengths_must_match() {
        let err = matas(&[1.0, 2.0], &[1.0], &[1.0, 2.0], 100.0, 100.0).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn zero_shear_velocity_keeps_vp() {
        let v = matas(&[8000.0], &[0.0], &[8000.0], 100.0, f64::INFINITY).unwrap();
        assert_eq!(v.vp[0], 8000.0);
        assert_eq!(v.vs[0], 0.0);
    }
}
