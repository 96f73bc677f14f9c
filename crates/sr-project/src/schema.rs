//! Scenario file schema.

use serde::{Deserialize, Serialize};
use sr_averaging::AveragingSchemeKind;
use sr_minerals::{MurnaghanParams, SweepDefinition};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub averaging: AveragingSchemeKind,
    pub rock: Vec<PhaseDef>,
    pub path: PathDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attenuation: Option<AttenuationDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceDef>,
    /// Relative uncertainty of the observations used by the chi factor
    #[serde(default = "default_chi_uncertainty")]
    pub chi_uncertainty: f64,
}

pub fn default_chi_uncertainty() -> f64 {
    0.01
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseDef {
    pub mineral: MineralDef,
    /// Molar fraction
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MineralDef {
    /// Catalog mineral by id, display name, formula or alias.
    Catalog { name: String },
    /// Inline Murnaghan parameters.
    Murnaghan(MurnaghanParams),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathDef {
    Explicit {
        pressures_pa: Vec<f64>,
        temperatures_k: Vec<f64>,
    },
    /// Pressure sweep with a temperature profile linear in pressure.
    Sweep {
        pressure_pa: SweepDefinition,
        temperature_start_k: f64,
        temperature_end_k: f64,
    },
    /// Evaluate at the reference table rows, using their pressures.
    FromReference {
        temperature_start_k: f64,
        temperature_end_k: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttenuationDef {
    pub qs: f64,
    pub qphi: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
}

fn default_beta() -> f64 {
    0.3
}

/// Tabulated reference Earth model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceDef {
    pub name: String,
    pub depth_m: Vec<f64>,
    pub pressure_pa: Vec<f64>,
    pub density_kg_m3: Vec<f64>,
    pub vp_m_s: Vec<f64>,
    pub vs_m_s: Vec<f64>,
}
