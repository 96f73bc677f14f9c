//! Scenario validation logic.

use crate::schema::{AttenuationDef, MineralDef, PathDef, PhaseDef, ReferenceDef, Scenario};
use sr_minerals::lookup_mineral;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Length mismatch: {field} has {found} entries, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(invalid("name", "", "must not be empty"));
    }

    validate_rock(&scenario.rock)?;
    validate_path(&scenario.path, scenario.reference.as_ref())?;

    if let Some(reference) = &scenario.reference {
        validate_reference(reference)?;
    }
    if let Some(attenuation) = &scenario.attenuation {
        validate_attenuation(attenuation)?;
    }

    let u = scenario.chi_uncertainty;
    if !(u.is_finite() && u > 0.0) {
        return Err(invalid("chi_uncertainty", u, "must be positive and finite"));
    }

    Ok(())
}

fn validate_rock(rock: &[PhaseDef]) -> Result<(), ValidationError> {
    if rock.is_empty() {
        return Err(invalid("rock", "[]", "at least one phase is required"));
    }

    let mut total = 0.0;
    for (idx, phase) in rock.iter().enumerate() {
        if !(phase.fraction.is_finite() && phase.fraction >= 0.0) {
            return Err(invalid(
                format!("rock[{idx}].fraction"),
                phase.fraction,
                "must be non-negative and finite",
            ));
        }
        total += phase.fraction;

        match &phase.mineral {
            MineralDef::Catalog { name } => {
                if lookup_mineral(name).is_err() {
                    return Err(ValidationError::MissingReference {
                        id: name.clone(),
                        context: format!("rock[{idx}] mineral catalog"),
                    });
                }
            }
            MineralDef::Murnaghan(params) => {
                if let Err(e) = params.validate() {
                    return Err(invalid(format!("rock[{idx}].mineral"), &params.name, e));
                }
            }
        }
    }

    if total <= 0.0 {
        return Err(invalid("rock fractions", total, "must sum to a positive value"));
    }
    Ok(())
}

fn validate_path(path: &PathDef, reference: Option<&ReferenceDef>) -> Result<(), ValidationError> {
    match path {
        PathDef::Explicit {
            pressures_pa,
            temperatures_k,
        } => {
            if pressures_pa.is_empty() {
                return Err(invalid("path.pressures_pa", "[]", "at least one point is required"));
            }
            if temperatures_k.len() != pressures_pa.len() {
                return Err(ValidationError::LengthMismatch {
                    field: "path.temperatures_k".to_string(),
                    expected: pressures_pa.len(),
                    found: temperatures_k.len(),
                });
            }
            for (idx, &p) in pressures_pa.iter().enumerate() {
                check_pressure(format!("path.pressures_pa[{idx}]"), p)?;
            }
            for (idx, &t) in temperatures_k.iter().enumerate() {
                check_temperature(format!("path.temperatures_k[{idx}]"), t)?;
            }
        }
        PathDef::Sweep {
            pressure_pa,
            temperature_start_k,
            temperature_end_k,
        } => {
            if let Err(e) = pressure_pa.validate() {
                return Err(invalid("path.pressure_pa", pressure_pa, e));
            }
            check_pressure("path.pressure_pa.start".to_string(), pressure_pa.start)?;
            check_pressure("path.pressure_pa.end".to_string(), pressure_pa.end)?;
            check_temperature("path.temperature_start_k".to_string(), *temperature_start_k)?;
            check_temperature("path.temperature_end_k".to_string(), *temperature_end_k)?;
        }
        PathDef::FromReference {
            temperature_start_k,
            temperature_end_k,
        } => {
            if reference.is_none() {
                return Err(ValidationError::MissingReference {
                    id: "reference".to_string(),
                    context: "path type from_reference".to_string(),
                });
            }
            check_temperature("path.temperature_start_k".to_string(), *temperature_start_k)?;
            check_temperature("path.temperature_end_k".to_string(), *temperature_end_k)?;
        }
    }

    if reference.is_some() && !matches!(path, PathDef::FromReference { .. }) {
        return Err(ValidationError::Unsupported {
            feature: "reference".to_string(),
            reason: "misfit scoring needs path type from_reference".to_string(),
        });
    }
    Ok(())
}

fn validate_reference(reference: &ReferenceDef) -> Result<(), ValidationError> {
    let n = reference.depth_m.len();
    if n < 2 {
        return Err(invalid("reference.depth_m", n, "at least two rows are required"));
    }

    for (field, column) in [
        ("reference.pressure_pa", &reference.pressure_pa),
        ("reference.density_kg_m3", &reference.density_kg_m3),
        ("reference.vp_m_s", &reference.vp_m_s),
        ("reference.vs_m_s", &reference.vs_m_s),
    ] {
        if column.len() != n {
            return Err(ValidationError::LengthMismatch {
                field: field.to_string(),
                expected: n,
                found: column.len(),
            });
        }
    }

    for (idx, pair) in reference.depth_m.windows(2).enumerate() {
        if pair[1].is_nan() || pair[1] <= pair[0] {
            return Err(invalid(
                format!("reference.depth_m[{}]", idx + 1),
                pair[1],
                "depth must be strictly increasing",
            ));
        }
    }
    for (idx, &p) in reference.pressure_pa.iter().enumerate() {
        check_pressure(format!("reference.pressure_pa[{idx}]"), p)?;
    }
    for (idx, &rho) in reference.density_kg_m3.iter().enumerate() {
        if !(rho.is_finite() && rho > 0.0) {
            return Err(invalid(
                format!("reference.density_kg_m3[{idx}]"),
                rho,
                "must be positive and finite",
            ));
        }
    }
    Ok(())
}

fn validate_attenuation(attenuation: &AttenuationDef) -> Result<(), ValidationError> {
    for (field, q) in [("attenuation.qs", attenuation.qs), ("attenuation.qphi", attenuation.qphi)] {
        if q.is_nan() || q <= 0.0 {
            return Err(invalid(field, q, "quality factor must be positive"));
        }
    }
    let beta = attenuation.beta;
    if !(beta > 0.0 && beta < 1.0) {
        return Err(invalid("attenuation.beta", beta, "must lie in (0, 1)"));
    }
    Ok(())
}

fn check_pressure(field: String, p: f64) -> Result<(), ValidationError> {
    if p.is_finite() && p >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, p, "pressure must be non-negative and finite"))
    }
}

fn check_temperature(field: String, t: f64) -> Result<(), ValidationError> {
    if t.is_finite() && t > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, t, "temperature must be positive and finite"))
    }
}

fn invalid(
    field: impl Into<String>,
    value: impl std::fmt::Display,
    reason: impl std::fmt::Display,
) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_averaging::AveragingSchemeKind;

    fn scenario() -> Scenario {
        Scenario {
            version: 1,
            name: "pc".to_string(),
            averaging: AveragingSchemeKind::VoigtReussHill,
            rock: vec![PhaseDef {
                mineral: MineralDef::Catalog {
                    name: "periclase".to_string(),
                },
                fraction: 1.0,
            }],
            path: PathDef::Explicit {
                pressures_pa: vec![0.0, 10e9],
                temperatures_k: vec![300.0, 300.0],
            },
            attenuation: None,
            reference: None,
            chi_uncertainty: 0.01,
        }
    }

    #[test]
    fn minimal_scenario_is_valid() {
        validate_scenario(&scenario()).unwrap();
    }

    #[test]
    fn unknown_mineral_is_missing_reference() {
        let mut s = scenario();
        s.rock[0].mineral = MineralDef::Catalog {
            name: "unobtainium".to_string(),
        };
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::MissingReference { .. })
        ));
    }

    #[test]
    fn ragged_explicit_path() {
        let mut s = scenario();
        s.path = PathDef::Explicit {
            pressures_pa: vec![0.0, 10e9],
            temperatures_k: vec![300.0],
        };
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::LengthMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn from_reference_requires_table() {
        let mut s = scenario();
        s.path = PathDef::FromReference {
            temperature_start_k: 1900.0,
            temperature_end_k: 2500.0,
        };
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn bad_scalars_are_rejected() {
        let mut s = scenario();
        s.chi_uncertainty = 0.0;
        assert!(validate_scenario(&s).is_err());

        let mut s = scenario();
        s.attenuation = Some(AttenuationDef {
            qs: -1.0,
            qphi: 100.0,
            beta: 0.3,
        });
        assert!(validate_scenario(&s).is_err());

        let mut s = scenario();
        s.rock[0].fraction = 0.0;
        assert!(validate_scenario(&s).is_err());

        let mut s = scenario();
        s.version = 99;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }
}
