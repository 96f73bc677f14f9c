//! Thermodynamic state definitions.

use crate::error::{MineralError, MineralResult};
use sr_core::units::{Pressure, Temperature, k, pa};

/// Thermodynamic state: pressure and temperature.
///
/// Minerals derive every state-dependent property (volume, moduli) from this value,
/// so a state is passed explicitly to each evaluation instead of being stored on the
/// rock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoState {
    p: Pressure,
    t: Temperature,
}

impl ThermoState {
    /// Create a state from pressure and temperature.
    ///
    /// Pressure must be finite and non-negative, temperature finite and positive.
    pub fn from_pt(p: Pressure, t: Temperature) -> MineralResult<Self> {
        let p_val = p.value;
        if !p_val.is_finite() || p_val < 0.0 {
            return Err(MineralError::NonPhysical {
                what: "pressure must be non-negative and finite",
            });
        }

        let t_val = t.value;
        if !t_val.is_finite() || t_val <= 0.0 {
            return Err(MineralError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }

        Ok(Self { p, t })
    }

    /// Create a state from raw SI values (Pa, K).
    pub fn from_si(pressure_pa: f64, temperature_k: f64) -> MineralResult<Self> {
        Self::from_pt(pa(pressure_pa), k(temperature_k))
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Pressure in Pa.
    pub fn pressure_pa(&self) -> f64 {
        self.p.value
    }

    /// Temperature in K.
    pub fn temperature_k(&self) -> f64 {
        self.t.value
    }
}
