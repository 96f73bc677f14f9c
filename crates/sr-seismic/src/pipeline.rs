//! Rock and path in, velocity profile out.

use sr_averaging::{AveragingScheme, VoigtReussHill};
use sr_minerals::{Rock, ThermoPath};
use tracing::debug;

use crate::averaging::average_moduli;
use crate::error::SeismicResult;
use crate::misfit::ProfileTriple;
use crate::moduli::{calculate_moduli, calculate_moduli_parallel};
use crate::velocity::{Velocities, compute_velocities};

/// Bulk properties and velocities of a rock along an evaluation path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RockProfile {
    /// kg/m³
    pub density: Vec<f64>,
    /// m/s
    pub vp: Vec<f64>,
    pub vs: Vec<f64>,
    pub vphi: Vec<f64>,
    /// Pa
    pub bulk_modulus: Vec<f64>,
    pub shear_modulus: Vec<f64>,
}

impl RockProfile {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    pub fn velocities(&self) -> Velocities {
        Velocities {
            vp: self.vp.clone(),
            vs: self.vs.clone(),
            vphi: self.vphi.clone(),
        }
    }

    /// Density, Vphi and Vs for misfit scoring.
    pub fn as_triple(&self) -> ProfileTriple<'_> {
        ProfileTriple {
            density: &self.density,
            vphi: &self.vphi,
            vs: &self.vs,
        }
    }
}

/// Moduli, averaging and velocities in one call. `scheme` defaults to
/// Voigt-Reuss-Hill.
pub fn velocities_from_rock(
    rock: &Rock,
    path: &ThermoPath,
    scheme: Option<&dyn AveragingScheme>,
) -> SeismicResult<RockProfile> {
    run(rock, path, scheme, false)
}

/// [`velocities_from_rock`] with the path given as pressure [Pa] and temperature [K]
/// slices.
pub fn velocities_from_rock_pt(
    rock: &Rock,
    pressures: &[f64],
    temperatures: &[f64],
    scheme: Option<&dyn AveragingScheme>,
) -> SeismicResult<RockProfile> {
    let path = ThermoPath::new(pressures, temperatures)?;
    run(rock, &path, scheme, false)
}

/// [`velocities_from_rock`] with the per-phase evaluation spread over rayon's pool.
pub fn velocities_from_rock_parallel(
    rock: &Rock,
    path: &ThermoPath,
    scheme: Option<&dyn AveragingScheme>,
) -> SeismicResult<RockProfile> {
    run(rock, path, scheme, true)
}

fn run(
    rock: &Rock,
    path: &ThermoPath,
    scheme: Option<&dyn AveragingScheme>,
    parallel: bool,
) -> SeismicResult<RockProfile> {
    let default_scheme = VoigtReussHill;
    let scheme: &dyn AveragingScheme = match scheme {
        Some(scheme) => scheme,
        None => &default_scheme,
    };
    debug!(rock = rock.name(), scheme = scheme.name(), parallel, "Computing velocity profile");

    let phase_moduli = if parallel {
        calculate_moduli_parallel(rock, path)?
    } else {
        calculate_moduli(rock, path)?
    };
    let bulk = average_moduli(&phase_moduli, scheme)?;
    let velocities = compute_velocities(&bulk)?;

    Ok(RockProfile {
        density: bulk.densities(),
        vp: velocities.vp,
        vs: velocities.vs,
        vphi: velocities.vphi,
        bulk_modulus: bulk.bulk_moduli(),
        shear_modulus: bulk.shear_moduli(),
    })
}
