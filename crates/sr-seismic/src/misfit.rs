//! Misfit between a computed and an observed profile.

use sr_core::SrError;
use sr_core::numeric::{ensure_all_finite, ensure_len, ensure_non_empty, mean, trapezoid};

use crate::error::SeismicResult;

/// Borrowed density, bulk-sound and shear-velocity columns of one profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileTriple<'a> {
    pub density: &'a [f64],
    pub vphi: &'a [f64],
    pub vs: &'a [f64],
}

/// Per-quantity misfit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MisfitScores {
    pub density: f64,
    pub vphi: f64,
    pub vs: f64,
}

impl MisfitScores {
    pub fn total(&self) -> f64 {
        self.density + self.vphi + self.vs
    }
}

/// Settings for [`chi_factor_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiFactorOptions {
    /// Assumed uncertainty as a fraction of the mean observed value
    pub relative_uncertainty: f64,
}

impl Default for ChiFactorOptions {
    fn default() -> Self {
        Self {
            relative_uncertainty: 0.01,
        }
    }
}

/// Depth-normalized L2 misfit: `∫ (calc - obs)² dz / (z_last - z_first)`.
///
/// Depth must be non-decreasing (repeated depths mark discontinuities) with a
/// positive span. Both profiles must be finite.
pub fn l2(depth: &[f64], calc: &[f64], obs: &[f64]) -> SeismicResult<f64> {
    if depth.len() < 2 {
        return Err(SrError::Shape {
            what: "depth (at least two points)",
            expected: 2,
            found: depth.len(),
        }
        .into());
    }
    ensure_len(calc, depth.len(), "computed profile")?;
    ensure_len(obs, depth.len(), "observed profile")?;
    ensure_all_finite(calc, "computed profile")?;
    ensure_all_finite(obs, "observed profile")?;

    for (index, pair) in depth.windows(2).enumerate() {
        if pair[1] < pair[0] || !pair[1].is_finite() {
            return Err(SrError::Domain {
                what: "depth must be finite and non-decreasing",
                index: index + 1,
                value: pair[1],
            }
            .into());
        }
    }
    let last = depth.len() - 1;
    let span = depth[last] - depth[0];
    if !(span.is_finite() && span > 0.0) {
        return Err(SrError::Domain {
            what: "depth span",
            index: last,
            value: span,
        }
        .into());
    }

    let squared: Vec<f64> = calc.iter().zip(obs).map(|(c, o)| (c - o).powi(2)).collect();
    Ok(trapezoid(depth, &squared)? / span)
}

/// [`l2`] for density, Vphi and Vs.
pub fn compare_l2(
    depth: &[f64],
    computed: ProfileTriple<'_>,
    observed: ProfileTriple<'_>,
) -> SeismicResult<MisfitScores> {
    Ok(MisfitScores {
        density: l2(depth, computed.density, observed.density)?,
        vphi: l2(depth, computed.vphi, observed.vphi)?,
        vs: l2(depth, computed.vs, observed.vs)?,
    })
}

/// Chi factor with a 1 % uncertainty on the observations.
pub fn chi_factor(calc: &[f64], obs: &[f64]) -> SeismicResult<f64> {
    chi_factor_with(calc, obs, ChiFactorOptions::default())
}

/// `mean[((calc - obs) / (u · mean(obs)))²]` with `u = options.relative_uncertainty`.
pub fn chi_factor_with(
    calc: &[f64],
    obs: &[f64],
    options: ChiFactorOptions,
) -> SeismicResult<f64> {
    ensure_non_empty(obs, "observed profile")?;
    ensure_len(calc, obs.len(), "computed profile")?;
    ensure_all_finite(calc, "computed profile")?;
    ensure_all_finite(obs, "observed profile")?;

    let u = options.relative_uncertainty;
    if !(u.is_finite() && u > 0.0) {
        return Err(SrError::InvalidArg {
            what: "relative uncertainty must be positive and finite",
        }
        .into());
    }

    let obs_mean = mean(obs, "observed profile")?;
    let sigma = u * obs_mean;
    if !(sigma.is_finite() && sigma != 0.0) {
        return Err(SrError::Domain {
            what: "mean of observed profile",
            index: 0,
            value: obs_mean,
        }
        .into());
    }

    let terms: Vec<f64> = calc
        .iter()
        .zip(obs)
        .map(|(c, o)| ((c - o) / sigma).powi(2))
        .collect();
    Ok(mean(&terms, "chi terms")?)
}

/// [`chi_factor`] for density, Vphi and Vs.
pub fn compare_chifactor(
    computed: ProfileTriple<'_>,
    observed: ProfileTriple<'_>,
) -> SeismicResult<MisfitScores> {
    compare_chifactor_with(computed, observed, ChiFactorOptions::default())
}

pub fn compare_chifactor_with(
    computed: ProfileTriple<'_>,
    observed: ProfileTriple<'_>,
    options: ChiFactorOptions,
) -> SeismicResult<MisfitScores> {
    Ok(MisfitScores {
        density: chi_factor_with(computed.density, observed.density, options)?,
        vphi: chi_factor_with(computed.vphi, observed.vphi, options)?,
        vs: chi_factor_with(computed.vs, observed.vs, options)?,
    })
}
