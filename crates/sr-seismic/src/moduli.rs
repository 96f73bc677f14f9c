//! Per-phase elastic properties along an evaluation path.

use rayon::prelude::*;
use sr_core::numeric::ensure_non_empty;
use sr_minerals::{MineralResult, Phase, Rock, ThermoPath, ThermoState};
use tracing::debug;

use crate::elastic::{ElasticPoint, ElasticPropertySet};
use crate::error::{SeismicError, SeismicResult};

/// Evaluate every phase of `rock` at every state of `path`.
///
/// Returns one [`ElasticPropertySet`] per phase, in rock order, each holding one point
/// per evaluation state. Each point carries `volume = fraction × molar volume`,
/// `density = molar mass / molar volume`, the adiabatic bulk modulus, the shear
/// modulus and the input fraction.
///
/// Mineral failures (including a vanishing molar volume) are reported as
/// [`SeismicError::PhaseEvaluation`] with the phase and evaluation indices.
pub fn calculate_moduli(rock: &Rock, path: &ThermoPath) -> SeismicResult<Vec<ElasticPropertySet>> {
    check_sizes(rock, path)?;
    debug!(
        rock = rock.name(),
        phases = rock.len(),
        points = path.len(),
        "Evaluating phase moduli"
    );

    let mut moduli = empty_sets(rock, path);
    for (index, state) in path.iter().enumerate() {
        let points = evaluate_point(rock, state, index)?;
        for (set, point) in moduli.iter_mut().zip(points) {
            set.push(point);
        }
    }
    Ok(moduli)
}

/// [`calculate_moduli`] with the path given as pressure [Pa] and temperature [K] slices.
pub fn calculate_moduli_pt(
    rock: &Rock,
    pressures: &[f64],
    temperatures: &[f64],
) -> SeismicResult<Vec<ElasticPropertySet>> {
    let path = ThermoPath::new(pressures, temperatures)?;
    calculate_moduli(rock, &path)
}

/// Rayon-backed [`calculate_moduli`].
///
/// Evaluation points are independent (each owns its `ThermoState`), so the result is
/// identical to the sequential evaluator. When several points fail, the error returned
/// is one of them, not necessarily the lowest index.
pub fn calculate_moduli_parallel(
    rock: &Rock,
    path: &ThermoPath,
) -> SeismicResult<Vec<ElasticPropertySet>> {
    check_sizes(rock, path)?;
    debug!(
        rock = rock.name(),
        phases = rock.len(),
        points = path.len(),
        threads = rayon::current_num_threads(),
        "Evaluating phase moduli in parallel"
    );

    let rows: Vec<Vec<ElasticPoint>> = path
        .states()
        .par_iter()
        .enumerate()
        .map(|(index, state)| evaluate_point(rock, state, index))
        .collect::<SeismicResult<_>>()?;

    let mut moduli = empty_sets(rock, path);
    for row in rows {
        for (set, point) in moduli.iter_mut().zip(row) {
            set.push(point);
        }
    }
    Ok(moduli)
}

fn check_sizes(rock: &Rock, path: &ThermoPath) -> SeismicResult<()> {
    ensure_non_empty(rock.phases(), "rock phases")?;
    ensure_non_empty(path.states(), "evaluation points")?;
    Ok(())
}

fn empty_sets(rock: &Rock, path: &ThermoPath) -> Vec<ElasticPropertySet> {
    (0..rock.len())
        .map(|_| ElasticPropertySet::with_capacity(path.len()))
        .collect()
}

/// All phases at one state, in rock order.
fn evaluate_point(
    rock: &Rock,
    state: &ThermoState,
    index: usize,
) -> SeismicResult<Vec<ElasticPoint>> {
    rock.phases()
        .iter()
        .enumerate()
        .map(|(phase_index, phase)| {
            phase_point(phase, state).map_err(|source| SeismicError::PhaseEvaluation {
                phase: phase_index,
                mineral: phase.mineral().name().to_string(),
                index,
                source,
            })
        })
        .collect()
}

fn phase_point(phase: &Phase, state: &ThermoState) -> MineralResult<ElasticPoint> {
    let pack = phase.mineral().property_pack(state)?;
    let density = pack.density()?;
    Ok(ElasticPoint {
        volume: phase.fraction() * pack.molar_volume,
        density,
        bulk_modulus: pack.bulk_modulus,
        shear_modulus: pack.shear_modulus,
        fraction: phase.fraction(),
    })
}
