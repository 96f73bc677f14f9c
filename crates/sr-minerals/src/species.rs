//! Mineral species with reference Murnaghan parameters.

use crate::model::Mineral;
use crate::murnaghan::{MurnaghanMineral, MurnaghanParams};
use sr_core::units::constants::T_REF_K;
use std::fmt;
use std::sync::Arc;

/// Common lower-mantle mineral end-members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MineralSpecies {
    /// Periclase (MgO)
    Periclase,
    /// Wüstite (FeO)
    Wuestite,
    /// Bridgmanite, Mg end-member (MgSiO₃ perovskite)
    MgPerovskite,
    /// Bridgmanite, Fe end-member (FeSiO₃ perovskite)
    FePerovskite,
    /// Calcium perovskite (CaSiO₃)
    CaPerovskite,
}

impl MineralSpecies {
    pub const ALL: [MineralSpecies; 5] = [
        MineralSpecies::Periclase,
        MineralSpecies::Wuestite,
        MineralSpecies::MgPerovskite,
        MineralSpecies::FePerovskite,
        MineralSpecies::CaPerovskite,
    ];

    /// Stable identifier used in scenario files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Periclase => "periclase",
            Self::Wuestite => "wuestite",
            Self::MgPerovskite => "mg_perovskite",
            Self::FePerovskite => "fe_perovskite",
            Self::CaPerovskite => "ca_perovskite",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Self::Periclase => "MgO",
            Self::Wuestite => "FeO",
            Self::MgPerovskite => "MgSiO3",
            Self::FePerovskite => "FeSiO3",
            Self::CaPerovskite => "CaSiO3",
        }
    }

    /// Reference parameters (ambient conditions).
    pub fn params(self) -> MurnaghanParams {
        // (molar mass, V0, K0, K0', G0, G0', alpha, dK/dT, dG/dT)
        let (molar_mass, v0, k0, k0_prime, g0, g0_prime, alpha, dk_dt, dg_dt) = match self {
            Self::Periclase => (
                0.040304, 11.24e-6, 161.0e9, 3.8, 131.0e9, 2.1, 3.1e-5, -1.5e7, -2.2e7,
            ),
            Self::Wuestite => (
                0.071844, 12.26e-6, 179.0e9, 4.9, 59.0e9, 1.4, 3.2e-5, -1.5e7, -1.0e7,
            ),
            Self::MgPerovskite => (
                0.100389, 24.45e-6, 251.0e9, 4.1, 175.0e9, 1.7, 2.0e-5, -2.1e7, -2.8e7,
            ),
            Self::FePerovskite => (
                0.131931, 25.48e-6, 272.0e9, 4.1, 133.0e9, 1.4, 2.0e-5, -2.1e7, -2.3e7,
            ),
            Self::CaPerovskite => (
                0.116164, 27.45e-6, 236.0e9, 3.9, 157.0e9, 2.2, 2.0e-5, -2.0e7, -2.5e7,
            ),
        };

        MurnaghanParams {
            name: self.key().to_string(),
            molar_mass,
            v0,
            k0,
            k0_prime,
            g0,
            g0_prime,
            t_ref: T_REF_K,
            thermal_expansivity: alpha,
            dk_dt,
            dg_dt,
        }
    }

    pub fn mineral(self) -> MurnaghanMineral {
        // catalog constants are checked by `catalog_params_are_valid`
        MurnaghanMineral::from_validated(self.params())
    }

    /// The mineral as a shareable trait object, ready for a rock phase.
    pub fn shared(self) -> Arc<dyn Mineral> {
        Arc::new(self.mineral())
    }
}

impl fmt::Display for MineralSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key(), self.formula())
    }
}
