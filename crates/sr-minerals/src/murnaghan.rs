//! Closed-form Murnaghan mineral model.
//!
//! A compact equation of state good enough to drive the velocity pipeline across
//! mantle pressures:
//!
//! ```text
//! V(P, T) = V0 · (1 + K0'·P / K0)^(-1/K0') · exp(α·(T - Tref))
//! K(P, T) = K0 + K0'·P + dK/dT·(T - Tref)
//! G(P, T) = G0 + G0'·P + dG/dT·(T - Tref)
//! ```
//!
//! Parameters are taken as given; this model does not fit anything.

use crate::error::{MineralError, MineralResult};
use crate::model::{Mineral, Modulus, MolarMass, MolarVolume};
use crate::state::ThermoState;
use serde::{Deserialize, Serialize};
use sr_core::units::constants::T_REF_K;

/// Reference parameters of a Murnaghan mineral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MurnaghanParams {
    pub name: String,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Reference molar volume [m³/mol]
    pub v0: f64,
    /// Reference bulk modulus [Pa]
    pub k0: f64,
    /// Pressure derivative of the bulk modulus [-]
    pub k0_prime: f64,
    /// Reference shear modulus [Pa]
    pub g0: f64,
    /// Pressure derivative of the shear modulus [-]
    pub g0_prime: f64,
    /// Reference temperature [K]
    #[serde(default = "default_t_ref")]
    pub t_ref: f64,
    /// Volumetric thermal expansivity [1/K]
    #[serde(default)]
    pub thermal_expansivity: f64,
    /// Temperature derivative of the bulk modulus [Pa/K]
    #[serde(default)]
    pub dk_dt: f64,
    /// Temperature derivative of the shear modulus [Pa/K]
    #[serde(default)]
    pub dg_dt: f64,
}

fn default_t_ref() -> f64 {
    T_REF_K
}

impl MurnaghanParams {
    pub fn validate(&self) -> MineralResult<()> {
        if self.name.trim().is_empty() {
            return Err(MineralError::InvalidArg {
                what: "mineral name must not be empty",
            });
        }
        let positive = [
            (self.molar_mass, "molar mass must be positive and finite"),
            (self.v0, "reference volume must be positive and finite"),
            (self.k0, "reference bulk modulus must be positive and finite"),
            (self.t_ref, "reference temperature must be positive and finite"),
        ];
        for (value, what) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MineralError::NonPhysical { what });
            }
        }
        if !self.g0.is_finite() || self.g0 < 0.0 {
            return Err(MineralError::NonPhysical {
                what: "reference shear modulus must be non-negative and finite",
            });
        }
        let finite = [
            self.k0_prime,
            self.g0_prime,
            self.thermal_expansivity,
            self.dk_dt,
            self.dg_dt,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(MineralError::NonPhysical {
                what: "derivative parameters must be finite",
            });
        }
        Ok(())
    }
}

/// Mineral evaluated from [`MurnaghanParams`].
#[derive(Debug, Clone, PartialEq)]
pub struct MurnaghanMineral {
    params: MurnaghanParams,
}

impl MurnaghanMineral {
    pub fn new(params: MurnaghanParams) -> MineralResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub(crate) fn from_validated(params: MurnaghanParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MurnaghanParams {
        &self.params
    }

    fn delta_t(&self, state: &ThermoState) -> f64 {
        state.temperature_k() - self.params.t_ref
    }
}

impl Mineral for MurnaghanMineral {
    fn name(&self) -> &str {
        &self.params.name
    }

    fn molar_mass(&self) -> MolarMass {
        self.params.molar_mass
    }

    fn molar_volume(&self, state: &ThermoState) -> MineralResult<MolarVolume> {
        let p = state.pressure_pa();
        let (v0, k0, k0_prime) = (self.params.v0, self.params.k0, self.params.k0_prime);

        let compression = if k0_prime.abs() < 1e-12 {
            // K' -> 0 limit of the Murnaghan form
            (-p / k0).exp()
        } else {
            let base = 1.0 + k0_prime * p / k0;
            if base <= 0.0 {
                return Err(MineralError::OutOfRange {
                    what: "pressure outside Murnaghan validity",
                });
            }
            base.powf(-1.0 / k0_prime)
        };
        let thermal = (self.params.thermal_expansivity * self.delta_t(state)).exp();

        let v = v0 * compression * thermal;
        if !v.is_finite() || v <= 0.0 {
            return Err(MineralError::NonPhysical {
                what: "molar volume must be positive and finite",
            });
        }
        Ok(v)
    }

    fn adiabatic_bulk_modulus(&self, state: &ThermoState) -> MineralResult<Modulus> {
        let k = self.params.k0
            + self.params.k0_prime * state.pressure_pa()
            + self.params.dk_dt * self.delta_t(state);
        if !k.is_finite() || k < 0.0 {
            return Err(MineralError::NonPhysical {
                what: "bulk modulus must be non-negative and finite",
            });
        }
        Ok(k)
    }

    fn shear_modulus(&self, state: &ThermoState) -> MineralResult<Modulus> {
        let g = self.params.g0
            + self.params.g0_prime * state.pressure_pa()
            + self.params.dg_dt * self.delta_t(state);
        if !g.is_finite() || g < 0.0 {
            return Err(MineralError::NonPhysical {
                what: "shear modulus must be non-negative and finite",
            });
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::numeric::{Tolerances, nearly_equal};

    fn params() -> MurnaghanParams {
        MurnaghanParams {
            name: "test".to_string(),
            molar_mass: 0.04,
            v0: 1.0e-5,
            k0: 160.0e9,
            k0_prime: 4.0,
            g0: 130.0e9,
            g0_prime: 2.0,
            t_ref: 300.0,
            thermal_expansivity: 3.0e-5,
            dk_dt: -1.5e7,
            dg_dt: -2.0e7,
        }
    }

    #[test]
    fn reference_state_reproduces_reference_values() {
        let m = MurnaghanMineral::new(params()).unwrap();
        let s = ThermoState::from_si(0.0, 300.0).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(m.molar_volume(&s).unwrap(), 1.0e-5, tol));
        assert!(nearly_equal(m.adiabatic_bulk_modulus(&s).unwrap(), 160.0e9, tol));
        assert!(nearly_equal(m.shear_modulus(&s).unwrap(), 130.0e9, tol));
    }

    #[test]
    fn compression_reduces_volume_and_stiffens() {
        let m = MurnaghanMineral::new(params()).unwrap();
        let low = ThermoState::from_si(1.0e9, 300.0).unwrap();
        let high = ThermoState::from_si(100.0e9, 300.0).unwrap();
        assert!(m.molar_volume(&high).unwrap() < m.molar_volume(&low).unwrap());
        assert!(
            m.adiabatic_bulk_modulus(&high).unwrap() > m.adiabatic_bulk_modulus(&low).unwrap()
        );
    }

    #[test]
    fn heating_expands() {
        let m = MurnaghanMineral::new(params()).unwrap();
        let cold = ThermoState::from_si(10.0e9, 300.0).unwrap();
        let hot = ThermoState::from_si(10.0e9, 2000.0).unwrap();
        assert!(m.molar_volume(&hot).unwrap() > m.molar_volume(&cold).unwrap());
        assert!(m.shear_modulus(&hot).unwrap() < m.shear_modulus(&cold).unwrap());
    }

    #[test]
    fn zero_k_prime_uses_exponential_limit() {
        let mut p = params();
        p.k0_prime = 0.0;
        p.thermal_expansivity = 0.0;
        let m = MurnaghanMineral::new(p).unwrap();
        let s = ThermoState::from_si(160.0e9, 300.0).unwrap();
        let expected = 1.0e-5 * (-1.0_f64).exp();
        assert!(nearly_equal(m.molar_volume(&s).unwrap(), expected, Tolerances::default()));
    }

    #[test]
    fn shear_softening_below_zero_is_non_physical() {
        let mut p = params();
        p.g0 = 1.0e9;
        p.g0_prime = 0.0;
        let m = MurnaghanMineral::new(p).unwrap();
        let hot = ThermoState::from_si(0.0, 4000.0).unwrap();
        let err = m.shear_modulus(&hot).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn invalid_params_rejected() {
        let mut p = params();
        p.v0 = 0.0;
        assert!(MurnaghanMineral::new(p).is_err());

        let mut p = params();
        p.name = "  ".to_string();
        assert!(MurnaghanMineral::new(p).is_err());

        let mut p = params();
        p.dk_dt = f64::NAN;
        assert!(MurnaghanMineral::new(p).is_err());
    }
}
