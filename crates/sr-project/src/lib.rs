//! sr-project: scenario file format, validation and execution.
//!
//! A scenario names a rock (catalog or inline minerals with molar fractions), an
//! evaluation path, an averaging scheme and optionally an attenuation model and a
//! tabulated reference Earth model to score against.

pub mod build;
pub mod migrate;
pub mod run;
pub mod schema;
pub mod validate;

pub use build::{build_mineral, build_path, build_reference, build_rock};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use run::{RunOptions, ScenarioReport, report_csv, run_scenario};
pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

use sr_minerals::MineralError;
use sr_seismic::SeismicError;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Mineral error: {0}")]
    Mineral(#[from] MineralError),

    #[error("Seismic error: {0}")]
    Seismic(#[from] SeismicError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let mut scenario: Scenario = serde_yaml::from_str(&content)?;
    scenario = migrate_to_latest(scenario)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let mut scenario: Scenario = serde_json::from_str(&content)?;
    scenario = migrate_to_latest(scenario)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_json(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario, picking JSON for a `.json` extension and YAML otherwise.
pub fn load_scenario(path: &std::path::Path) -> ProjectResult<Scenario> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json { load_json(path) } else { load_yaml(path) }
}
