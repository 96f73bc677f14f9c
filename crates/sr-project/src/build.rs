//! Scenario definitions to runtime objects.

use std::sync::Arc;

use sr_minerals::{Mineral, MurnaghanMineral, Phase, Rock, ThermoPath, lookup_mineral};
use sr_seismic::{SeismicModel, TabulatedSeismicModel};

use crate::ProjectResult;
use crate::schema::{MineralDef, PathDef, Scenario};

pub fn build_mineral(def: &MineralDef) -> ProjectResult<Arc<dyn Mineral>> {
    match def {
        MineralDef::Catalog { name } => Ok(lookup_mineral(name)?.shared()),
        MineralDef::Murnaghan(params) => Ok(Arc::new(MurnaghanMineral::new(params.clone())?)),
    }
}

pub fn build_rock(scenario: &Scenario) -> ProjectResult<Rock> {
    let phases = scenario
        .rock
        .iter()
        .map(|phase| -> ProjectResult<Phase> {
            Ok(Phase::new(build_mineral(&phase.mineral)?, phase.fraction)?)
        })
        .collect::<ProjectResult<Vec<_>>>()?;
    Ok(Rock::new(scenario.name.clone(), phases)?)
}

pub fn build_reference(scenario: &Scenario) -> ProjectResult<Option<TabulatedSeismicModel>> {
    let Some(reference) = &scenario.reference else {
        return Ok(None);
    };
    let model = TabulatedSeismicModel::new(
        reference.name.clone(),
        reference.depth_m.clone(),
        reference.pressure_pa.clone(),
        reference.density_kg_m3.clone(),
        reference.vp_m_s.clone(),
        reference.vs_m_s.clone(),
    )?;
    Ok(Some(model))
}

/// Evaluation path of the scenario. `from_reference` paths need the built reference.
pub fn build_path(
    scenario: &Scenario,
    reference: Option<&TabulatedSeismicModel>,
) -> ProjectResult<ThermoPath> {
    let path = match &scenario.path {
        PathDef::Explicit {
            pressures_pa,
            temperatures_k,
        } => ThermoPath::new(pressures_pa, temperatures_k)?,
        PathDef::Sweep {
            pressure_pa,
            temperature_start_k,
            temperature_end_k,
        } => ThermoPath::from_sweep(pressure_pa, *temperature_start_k, *temperature_end_k)?,
        PathDef::FromReference {
            temperature_start_k,
            temperature_end_k,
        } => {
            let Some(reference) = reference else {
                return Err(crate::ValidationError::MissingReference {
                    id: "reference".to_string(),
                    context: "path type from_reference".to_string(),
                }
                .into());
            };
            let pressures = reference.pressure(reference.depths())?;
            ThermoPath::linear_geotherm(&pressures, *temperature_start_k, *temperature_end_k)?
        }
    };
    Ok(path)
}
