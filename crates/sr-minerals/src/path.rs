//! Pressure/temperature paths (the evaluation points of a run) and sweep generation.

use crate::error::{MineralError, MineralResult};
use crate::state::ThermoState;
use serde::{Deserialize, Serialize};
use sr_core::SrError;
use sr_core::numeric::{ensure_len, ensure_non_empty};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep, in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    #[serde(default)]
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> MineralResult<Self> {
        let sweep = Self {
            start,
            end,
            num_points,
            sweep_type,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> MineralResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(MineralError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        if self.num_points < 2 {
            return Err(MineralError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if (self.start - self.end).abs() < 1e-12 {
            return Err(MineralError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        if self.sweep_type == SweepType::Logarithmic && (self.start <= 0.0 || self.end <= 0.0) {
            return Err(MineralError::InvalidArg {
                what: "logarithmic sweep bounds must be positive",
            });
        }
        Ok(())
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        if n <= 1 {
            return vec![self.start];
        }

        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepType::Logarithmic => {
                let log_start = self.start.ln();
                let log_delta = (self.end.ln() - log_start) / (n - 1) as f64;
                (0..n)
                    .map(|i| (log_start + i as f64 * log_delta).exp())
                    .collect()
            }
        };

        // Ensure exact endpoint
        points[n - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// Ordered, non-empty sequence of evaluation states.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoPath {
    states: Vec<ThermoState>,
}

impl ThermoPath {
    /// Build a path from equal-length pressure [Pa] and temperature [K] sequences.
    pub fn new(pressures: &[f64], temperatures: &[f64]) -> MineralResult<Self> {
        ensure_non_empty(pressures, "pressures")?;
        ensure_len(temperatures, pressures.len(), "temperatures")?;

        let states = pressures
            .iter()
            .zip(temperatures)
            .enumerate()
            .map(|(index, (&p, &t))| {
                if !p.is_finite() || p < 0.0 {
                    return Err(SrError::Domain {
                        what: "pressure",
                        index,
                        value: p,
                    }
                    .into());
                }
                if !t.is_finite() || t <= 0.0 {
                    return Err(SrError::Domain {
                        what: "temperature",
                        index,
                        value: t,
                    }
                    .into());
                }
                ThermoState::from_si(p, t)
            })
            .collect::<MineralResult<Vec<_>>>()?;

        Ok(Self { states })
    }

    pub fn from_states(states: Vec<ThermoState>) -> MineralResult<Self> {
        ensure_non_empty(&states, "thermodynamic states")?;
        Ok(Self { states })
    }

    /// Constant temperature along the given pressures.
    pub fn isothermal(pressures: &[f64], temperature_k: f64) -> MineralResult<Self> {
        let temperatures = vec![temperature_k; pressures.len()];
        Self::new(pressures, &temperatures)
    }

    /// Temperature interpolated linearly in pressure between the first and last point.
    pub fn linear_geotherm(pressures: &[f64], t_start_k: f64, t_end_k: f64) -> MineralResult<Self> {
        ensure_non_empty(pressures, "pressures")?;
        let p0 = pressures[0];
        let span = pressures[pressures.len() - 1] - p0;

        let temperatures: Vec<f64> = if span.abs() < f64::EPSILON {
            vec![t_start_k; pressures.len()]
        } else {
            pressures
                .iter()
                .map(|p| t_start_k + (t_end_k - t_start_k) * (p - p0) / span)
                .collect()
        };
        Self::new(pressures, &temperatures)
    }

    /// Pressure sweep with a linear geotherm between the two temperatures.
    pub fn from_sweep(
        sweep: &SweepDefinition,
        t_start_k: f64,
        t_end_k: f64,
    ) -> MineralResult<Self> {
        sweep.validate()?;
        Self::linear_geotherm(&sweep.generate_points(), t_start_k, t_end_k)
    }

    pub fn states(&self) -> &[ThermoState] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThermoState> + '_ {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a constructed path.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.states.iter().map(ThermoState::pressure_pa).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.states.iter().map(ThermoState::temperature_k).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::new(300.0, 400.0, 5, SweepType::Linear).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 300.0).abs() < 1e-9);
        assert!((points[2] - 350.0).abs() < 1e-9);
        assert!((points[4] - 400.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(1e5, 1e6, 3, SweepType::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[0] - 1e5).abs() < 1e-9);
        assert!((points[2] - 1e6).abs() < 1e-9);
        let expected_mid = (1e5_f64 * 1e6_f64).sqrt();
        assert!((points[1] - expected_mid).abs() / expected_mid < 1e-6);
    }

    #[test]
    fn reject_invalid_sweeps() {
        assert!(SweepDefinition::new(1.0, 2.0, 1, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(1.0, 1.0, 5, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(0.0, 1e9, 5, SweepType::Logarithmic).is_err());
    }

    #[test]
    fn path_from_equal_sequences() {
        let path = ThermoPath::new(&[25e9, 50e9], &[2000.0, 2500.0]).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.pressures(), vec![25e9, 50e9]);
        assert_eq!(path.temperatures(), vec![2000.0, 2500.0]);
    }

    #[test]
    fn path_rejects_mismatched_lengths() {
        let err = ThermoPath::new(&[25e9, 50e9], &[2000.0]).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn path_rejects_empty() {
        let err = ThermoPath::new(&[], &[]).unwrap_err();
        assert!(err.is_shape());
        assert!(ThermoPath::from_states(vec![]).is_err());
    }

    #[test]
    fn path_reports_offending_index() {
        let err = ThermoPath::new(&[25e9, 50e9, 75e9], &[2000.0, -1.0, 2500.0]).unwrap_err();
        assert_eq!(
            err,
            MineralError::Core(SrError::Domain {
                what: "temperature",
                index: 1,
                value: -1.0
            })
        );
    }

    #[test]
    fn linear_geotherm_interpolates_in_pressure() {
        let path = ThermoPath::linear_geotherm(&[0.0, 50e9, 100e9], 1000.0, 3000.0).unwrap();
        assert_eq!(path.temperatures(), vec![1000.0, 2000.0, 3000.0]);
    }

    #[test]
    fn sweep_path() {
        let sweep = SweepDefinition::new(25e9, 125e9, 5, SweepType::Linear).unwrap();
        let path = ThermoPath::from_sweep(&sweep, 2000.0, 2500.0).unwrap();
        assert_eq!(path.len(), 5);
        assert!((path.temperatures()[2] - 2250.0).abs() < 1e-9);
    }
}
