//! Scenario version migration.

use crate::ProjectError;
use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ProjectError> {
    match scenario.version {
        0 => migrate_v0_to_v1(scenario),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// Version 0 files predate the configurable chi uncertainty, which serde already
// defaults, so only the version number moves.
fn migrate_v0_to_v1(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    scenario.version = 1;
    Ok(scenario)
}
