//! Running a scenario end to end.

use sr_minerals::ThermoPath;
use sr_seismic::{
    ChiFactorOptions, MatasAttenuation, MisfitScores, ProfileTriple, RockProfile, SeismicModel,
    Velocities, apply_attenuation_correction, compare_chifactor_with, compare_l2,
    velocities_from_rock, velocities_from_rock_parallel,
};
use tracing::{debug, info};

use crate::ProjectResult;
use crate::build::{build_path, build_reference, build_rock};
use crate::schema::Scenario;
use crate::validate::validate_scenario;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Evaluate phases with rayon
    pub parallel: bool,
}

/// Everything a scenario run produces, aligned by evaluation index.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub name: String,
    pub scheme: String,
    pub pressures: Vec<f64>,
    pub temperatures: Vec<f64>,
    /// Present when the path came from a reference model
    pub depths: Option<Vec<f64>>,
    pub profile: RockProfile,
    /// Attenuation-corrected velocities
    pub corrected: Option<Velocities>,
    pub l2: Option<MisfitScores>,
    pub chi: Option<MisfitScores>,
}

impl ScenarioReport {
    pub fn len(&self) -> usize {
        self.pressures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressures.is_empty()
    }
}

pub fn run_scenario(scenario: &Scenario, options: RunOptions) -> ProjectResult<ScenarioReport> {
    validate_scenario(scenario)?;

    let rock = build_rock(scenario)?;
    let reference = build_reference(scenario)?;
    let path: ThermoPath = build_path(scenario, reference.as_ref())?;
    let scheme = scenario.averaging.build();
    debug!(
        scenario = %scenario.name,
        phases = rock.len(),
        points = path.len(),
        scheme = scheme.name(),
        "Running scenario"
    );

    let profile = if options.parallel {
        velocities_from_rock_parallel(&rock, &path, Some(scheme.as_ref()))?
    } else {
        velocities_from_rock(&rock, &path, Some(scheme.as_ref()))?
    };

    let corrected = match &scenario.attenuation {
        Some(def) => Some(apply_attenuation_correction(
            &profile.vp,
            &profile.vs,
            &profile.vphi,
            def.qs,
            def.qphi,
            &MatasAttenuation { beta: def.beta },
        )?),
        None => None,
    };

    let mut depths = None;
    let mut l2 = None;
    let mut chi = None;
    if let Some(model) = &reference {
        let observed = model.evaluate(model.depths())?;
        // Attenuation, when given, applies before comparison.
        let (vphi, vs) = match &corrected {
            Some(v) => (&v.vphi, &v.vs),
            None => (&profile.vphi, &profile.vs),
        };
        let computed = ProfileTriple {
            density: &profile.density,
            vphi,
            vs,
        };
        let l2_scores = compare_l2(&observed.depth, computed, observed.as_triple())?;
        let chi_scores = compare_chifactor_with(
            computed,
            observed.as_triple(),
            ChiFactorOptions {
                relative_uncertainty: scenario.chi_uncertainty,
            },
        )?;
        info!(
            scenario = %scenario.name,
            reference = model.name(),
            l2 = l2_scores.total(),
            chi = chi_scores.total(),
            "Scenario misfit"
        );
        l2 = Some(l2_scores);
        chi = Some(chi_scores);
        depths = Some(observed.depth);
    }

    info!(scenario = %scenario.name, points = path.len(), "Scenario complete");

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        scheme: scheme.name().to_string(),
        pressures: path.pressures(),
        temperatures: path.temperatures(),
        depths,
        profile,
        corrected,
        l2,
        chi,
    })
}

/// Render a report as CSV, one row per evaluation point.
pub fn report_csv(report: &ScenarioReport) -> String {
    let mut header = vec!["pressure_pa", "temperature_k"];
    if report.depths.is_some() {
        header.push("depth_m");
    }
    header.extend([
        "density_kg_m3",
        "vp_m_s",
        "vs_m_s",
        "vphi_m_s",
        "bulk_modulus_pa",
        "shear_modulus_pa",
    ]);
    if report.corrected.is_some() {
        header.extend(["vp_corrected_m_s", "vs_corrected_m_s", "vphi_corrected_m_s"]);
    }

    let mut out = header.join(",");
    out.push('\n');

    let profile = &report.profile;
    for i in 0..report.len() {
        let mut row = vec![report.pressures[i], report.temperatures[i]];
        if let Some(depths) = &report.depths {
            row.push(depths[i]);
        }
        row.extend([
            profile.density[i],
            profile.vp[i],
            profile.vs[i],
            profile.vphi[i],
            profile.bulk_modulus[i],
            profile.shear_modulus[i],
        ]);
        if let Some(v) = &report.corrected {
            row.extend([v.vp[i], v.vs[i], v.vphi[i]]);
        }

        let cells: Vec<String> = row.iter().map(f64::to_string).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
