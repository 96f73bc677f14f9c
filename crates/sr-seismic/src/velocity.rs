//! Seismic velocities from bulk elastic properties.

use sr_core::numeric::{ensure_len, ensure_non_empty};
use sr_core::{SrError, SrResult};

use crate::elastic::ElasticPropertySet;
use crate::error::SeismicResult;

/// Compressional, shear and bulk-sound velocities [m/s], aligned by evaluation index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Velocities {
    pub vp: Vec<f64>,
    pub vs: Vec<f64>,
    pub vphi: Vec<f64>,
}

impl Velocities {
    pub fn new(vp: Vec<f64>, vs: Vec<f64>, vphi: Vec<f64>) -> SrResult<Self> {
        ensure_len(&vs, vp.len(), "vs")?;
        ensure_len(&vphi, vp.len(), "vphi")?;
        Ok(Self { vp, vs, vphi })
    }

    pub fn len(&self) -> usize {
        self.vp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vp.is_empty()
    }
}

/// `Vs = √(G/ρ)`, `Vp = √((K + 4G/3)/ρ)`, `Vphi = √(K/ρ)` at every point.
///
/// Density must be strictly positive and both moduli non-negative; anything else is a
/// domain error naming the quantity and the evaluation index.
pub fn compute_velocities(moduli: &ElasticPropertySet) -> SeismicResult<Velocities> {
    ensure_non_empty(moduli.points(), "evaluation points")?;

    let n = moduli.len();
    let mut vp = Vec::with_capacity(n);
    let mut vs = Vec::with_capacity(n);
    let mut vphi = Vec::with_capacity(n);

    for (index, point) in moduli.iter().enumerate() {
        let rho = point.density;
        if !(rho.is_finite() && rho > 0.0) {
            return Err(domain("density", index, rho));
        }
        let k = point.bulk_modulus;
        if !(k.is_finite() && k >= 0.0) {
            return Err(domain("bulk modulus", index, k));
        }
        let g = point.shear_modulus;
        if !(g.is_finite() && g >= 0.0) {
            return Err(domain("shear modulus", index, g));
        }

        vs.push(root(g / rho, "vs", index)?);
        vp.push(root((k + 4.0 / 3.0 * g) / rho, "vp", index)?);
        vphi.push(root(k / rho, "vphi", index)?);
    }

    Ok(Velocities { vp, vs, vphi })
}

fn root(radicand: f64, what: &'static str, index: usize) -> SeismicResult<f64> {
    if radicand.is_finite() && radicand >= 0.0 {
        Ok(radicand.sqrt())
    } else {
        Err(domain(what, index, radicand))
    }
}

fn domain(what: &'static str, index: usize, value: f64) -> crate::SeismicError {
    SrError::Domain { what, index, value }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elastic::ElasticPoint;

    fn bulk(points: &[(f64, f64, f64)]) -> ElasticPropertySet {
        ElasticPropertySet::from_points(
            points
                .iter()
                .map(|&(density, bulk_modulus, shear_modulus)| ElasticPoint {
                    volume: 1e-5,
                    density,
                    bulk_modulus,
                    shear_modulus,
                    fraction: 1.0,
                })
                .collect(),
        )
    }

    #[test]
    fn velocities_follow_moduli() {
        let v = compute_velocities(&bulk(&[(4000.0, 250e9, 150e9)])).unwrap();
        assert!((v.vs[0] - (150e9_f64 / 4000.0).sqrt()).abs() < 1e-6);
        assert!((v.vp[0] - ((250e9 + 200e9) / 4000.0_f64).sqrt()).abs() < 1e-6);
        assert!((v.vphi[0] - (250e9_f64 / 4000.0).sqrt()).abs() < 1e-6);
        assert!(v.vp[0] > v.vphi[0] && v.vphi[0] > 0.0);
    }

    #[test]
    fn zero_moduli_give_zero_velocities() {
        let v = compute_velocities(&bulk(&[(3000.0, 0.0, 0.0)])).unwrap();
        assert_eq!(v.vp, vec![0.0]);
        assert_eq!(v.vs, vec![0.0]);
        assert_eq!(v.vphi, vec![0.0]);
    }

    #[test]
    fn bad_inputs_name_quantity_and_index() {
        let err = compute_velocities(&bulk(&[(3000.0, 1e9, 1e9), (0.0, 1e9, 1e9)])).unwrap_err();
        assert!(matches!(
            err,
            crate::SeismicError::Core(SrError::Domain {
                what: "density",
                index: 1,
                ..
            })
        ));

        let err = compute_velocities(&bulk(&[(3000.0, 1e9, -1.0)])).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("shear modulus"));
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = compute_velocities(&ElasticPropertySet::default()).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn velocities_new_checks_lengths() {
        assert!(Velocities::new(vec![1.0], vec![1.0, 2.0], vec![1.0]).is_err());
    }
}
