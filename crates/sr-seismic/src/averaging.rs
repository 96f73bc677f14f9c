//! Bulk elastic properties from per-phase properties.

use sr_averaging::AveragingScheme;
use sr_core::SrError;
use sr_core::numeric::{ensure_len, ensure_non_empty};
use tracing::debug;

use crate::elastic::{ElasticPoint, ElasticPropertySet};
use crate::error::{SeismicError, SeismicResult};

/// Combine per-phase property sets into one bulk set using `scheme`.
///
/// At every evaluation index the phase weights `V × fraction` are normalized into
/// volume fractions, then handed to the scheme for K, G and density. The bulk
/// volume is the sum of the weights and the bulk fraction is 1.0.
pub fn average_moduli(
    moduli: &[ElasticPropertySet],
    scheme: &dyn AveragingScheme,
) -> SeismicResult<ElasticPropertySet> {
    ensure_non_empty(moduli, "phase property sets")?;
    let n = moduli[0].len();
    ensure_non_empty(moduli[0].points(), "evaluation points")?;
    for set in &moduli[1..] {
        ensure_len(set.points(), n, "phase property set")?;
    }
    debug!(
        scheme = scheme.name(),
        phases = moduli.len(),
        points = n,
        "Averaging phase moduli"
    );

    let phases = moduli.len();
    let mut v_frac = vec![0.0; phases];
    let mut bulk_moduli = vec![0.0; phases];
    let mut shear_moduli = vec![0.0; phases];
    let mut densities = vec![0.0; phases];

    let mut bulk = ElasticPropertySet::with_capacity(n);
    for index in 0..n {
        let mut total = 0.0;
        for (p, set) in moduli.iter().enumerate() {
            let point = &set.points()[index];
            v_frac[p] = point.volume * point.fraction;
            bulk_moduli[p] = point.bulk_modulus;
            shear_moduli[p] = point.shear_modulus;
            densities[p] = point.density;
            total += v_frac[p];
        }

        if !(total.is_finite() && total > 0.0) {
            return Err(SrError::Domain {
                what: "total phase volume",
                index,
                value: total,
            }
            .into());
        }
        for f in v_frac.iter_mut() {
            *f /= total;
        }

        let wrap = |source: SrError| SeismicError::Averaging {
            scheme: scheme.name().to_string(),
            index,
            source,
        };
        let bulk_modulus = scheme
            .average_bulk_moduli(&v_frac, &bulk_moduli, &shear_moduli)
            .map_err(wrap)?;
        let shear_modulus = scheme
            .average_shear_moduli(&v_frac, &bulk_moduli, &shear_moduli)
            .map_err(wrap)?;
        let density = scheme.average_density(&v_frac, &densities).map_err(wrap)?;

        bulk.push(ElasticPoint {
            volume: total,
            density,
            bulk_modulus,
            shear_modulus,
            fraction: 1.0,
        });
    }
    Ok(bulk)
}
