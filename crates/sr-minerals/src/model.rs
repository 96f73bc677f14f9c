//! Mineral model trait and validation helpers.

use crate::error::{MineralError, MineralResult};
use crate::state::ThermoState;
use sr_core::units::{Pressure, Temperature};
use std::fmt;

/// Molar volume [m³/mol].
pub type MolarVolume = f64;

/// Molar mass [kg/mol].
pub type MolarMass = f64;

/// Elastic modulus [Pa].
pub type Modulus = f64;

/// Equation-of-state outputs of one mineral at a single state.
///
/// Batches the four reads the moduli evaluator needs so a backend can compute them
/// together.
#[derive(Clone, Debug, PartialEq)]
pub struct MineralPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Temperature [K]
    pub t: Temperature,

    /// Molar volume [m³/mol]
    pub molar_volume: MolarVolume,

    /// Molar mass [kg/mol]
    pub molar_mass: MolarMass,

    /// Adiabatic bulk modulus [Pa]
    pub bulk_modulus: Modulus,

    /// Shear modulus [Pa]
    pub shear_modulus: Modulus,
}

impl MineralPropertyPack {
    /// Density [kg/m³] = molar mass / molar volume.
    pub fn density(&self) -> MineralResult<f64> {
        validation::validate_molar_volume(self.molar_volume)?;
        Ok(self.molar_mass / self.molar_volume)
    }
}

/// Trait for mineral equation-of-state models.
///
/// Implementations must be thread-safe (Send + Sync) so a rock can be evaluated at
/// independent states in parallel. Every state-dependent method receives the state
/// explicitly.
pub trait Mineral: Send + Sync + fmt::Debug {
    /// Get the mineral name (for debugging/logging).
    fn name(&self) -> &str;

    /// Molar mass [kg/mol]; independent of state.
    fn molar_mass(&self) -> MolarMass;

    /// Molar volume [m³/mol] at the given state.
    fn molar_volume(&self, state: &ThermoState) -> MineralResult<MolarVolume>;

    /// Adiabatic bulk modulus [Pa] at the given state.
    fn adiabatic_bulk_modulus(&self, state: &ThermoState) -> MineralResult<Modulus>;

    /// Shear modulus [Pa] at the given state.
    fn shear_modulus(&self, state: &ThermoState) -> MineralResult<Modulus>;

    /// Compute all outputs at one state, validating each of them.
    fn property_pack(&self, state: &ThermoState) -> MineralResult<MineralPropertyPack> {
        let molar_volume = self.molar_volume(state)?;
        validation::validate_molar_volume(molar_volume)?;

        let molar_mass = self.molar_mass();
        validation::validate_molar_mass(molar_mass)?;

        let bulk_modulus = self.adiabatic_bulk_modulus(state)?;
        validation::validate_modulus(bulk_modulus, "bulk modulus must be non-negative and finite")?;

        let shear_modulus = self.shear_modulus(state)?;
        validation::validate_modulus(
            shear_modulus,
            "shear modulus must be non-negative and finite",
        )?;

        Ok(MineralPropertyPack {
            p: state.pressure(),
            t: state.temperature(),
            molar_volume,
            molar_mass,
            bulk_modulus,
            shear_modulus,
        })
    }
}

/// Validation helpers for mineral outputs.
pub mod validation {
    use super::*;

    /// Molar volumes at or below this magnitude signal an invalid EOS state [m³/mol].
    pub const MIN_MOLAR_VOLUME: f64 = 1e-30;

    /// Ensure molar volume is positive, finite, and not vanishingly small.
    pub fn validate_molar_volume(v: MolarVolume) -> MineralResult<()> {
        if !v.is_finite() || v <= MIN_MOLAR_VOLUME {
            return Err(MineralError::NonPhysical {
                what: "molar volume must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure molar mass is positive and finite.
    pub fn validate_molar_mass(m: MolarMass) -> MineralResult<()> {
        if !m.is_finite() || m <= 0.0 {
            return Err(MineralError::NonPhysical {
                what: "molar mass must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure an elastic modulus is non-negative and finite.
    pub fn validate_modulus(value: Modulus, what: &'static str) -> MineralResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(MineralError::NonPhysical { what });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[derive(Debug)]
    struct Fixed {
        v: f64,
        k: f64,
        g: f64,
    }

    impl Mineral for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn molar_mass(&self) -> MolarMass {
            0.04
        }
        fn molar_volume(&self, _state: &ThermoState) -> MineralResult<MolarVolume> {
            Ok(self.v)
        }
        fn adiabatic_bulk_modulus(&self, _state: &ThermoState) -> MineralResult<Modulus> {
            Ok(self.k)
        }
        fn shear_modulus(&self, _state: &ThermoState) -> MineralResult<Modulus> {
            Ok(self.g)
        }
    }

    fn surface() -> ThermoState {
        ThermoState::from_si(0.0, 300.0).unwrap()
    }

    #[test]
    fn validate_molar_volume_positive() {
        assert!(validate_molar_volume(1.0e-5).is_ok());
        assert!(validate_molar_volume(0.0).is_err());
        assert!(validate_molar_volume(1e-40).is_err());
        assert!(validate_molar_volume(-1.0e-5).is_err());
        assert!(validate_molar_volume(f64::NAN).is_err());
    }

    #[test]
    fn validate_modulus_non_negative() {
        assert!(validate_modulus(0.0, "g").is_ok());
        assert!(validate_modulus(100.0e9, "g").is_ok());
        assert!(validate_modulus(-1.0, "g").is_err());
        assert!(validate_modulus(f64::INFINITY, "g").is_err());
    }

    #[test]
    fn pack_density_is_mass_over_volume() {
        let m = Fixed {
            v: 1.0e-5,
            k: 100.0e9,
            g: 50.0e9,
        };
        let pack = m.property_pack(&surface()).unwrap();
        assert!((pack.density().unwrap() - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn pack_rejects_zero_volume() {
        let m = Fixed {
            v: 0.0,
            k: 100.0e9,
            g: 50.0e9,
        };
        let err = m.property_pack(&surface()).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn pack_rejects_negative_shear() {
        let m = Fixed {
            v: 1.0e-5,
            k: 100.0e9,
            g: -1.0,
        };
        assert!(m.property_pack(&surface()).is_err());
    }
}
