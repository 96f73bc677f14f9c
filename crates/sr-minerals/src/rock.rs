//! Rock composites: ordered mineral phases with molar fractions.

use crate::error::{MineralError, MineralResult};
use crate::model::Mineral;
use sr_core::SrError;
use sr_core::numeric::{Tolerances, nearly_equal};
use std::sync::Arc;

/// One phase of a rock: a mineral and its molar fraction.
#[derive(Debug, Clone)]
pub struct Phase {
    mineral: Arc<dyn Mineral>,
    fraction: f64,
}

impl Phase {
    /// Fractions must be finite and non-negative.
    pub fn new(mineral: Arc<dyn Mineral>, fraction: f64) -> MineralResult<Self> {
        if !fraction.is_finite() {
            return Err(MineralError::NonPhysical {
                what: "non-finite molar fraction",
            });
        }
        if fraction < 0.0 {
            return Err(MineralError::NonPhysical {
                what: "negative molar fraction",
            });
        }
        Ok(Self { mineral, fraction })
    }

    pub fn mineral(&self) -> &dyn Mineral {
        self.mineral.as_ref()
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

/// An ordered, non-empty collection of phases.
///
/// Fractions are kept as given. They are molar fractions, and the bulk averager
/// converts them to volume fractions at every evaluation point, so no normalization
/// happens here.
#[derive(Debug, Clone)]
pub struct Rock {
    name: String,
    phases: Vec<Phase>,
}

impl Rock {
    pub fn new(name: impl Into<String>, phases: Vec<Phase>) -> MineralResult<Self> {
        if phases.is_empty() {
            return Err(SrError::Empty { what: "rock phases" }.into());
        }

        let total: f64 = phases.iter().map(Phase::fraction).sum();
        if total <= 0.0 {
            return Err(MineralError::NonPhysical {
                what: "molar fractions sum to zero",
            });
        }

        let name = name.into();
        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-6,
        };
        if !nearly_equal(total, 1.0, tol) {
            tracing::warn!(rock = %name, total, "molar fractions do not sum to one");
        }

        Ok(Self { name, phases })
    }

    /// Build a rock from (mineral, fraction) pairs.
    pub fn from_fractions(
        name: impl Into<String>,
        fractions: Vec<(Arc<dyn Mineral>, f64)>,
    ) -> MineralResult<Self> {
        let phases = fractions
            .into_iter()
            .map(|(mineral, fraction)| Phase::new(mineral, fraction))
            .collect::<MineralResult<Vec<_>>>()?;
        Self::new(name, phases)
    }

    /// A rock made of a single mineral (fraction 1.0).
    pub fn single(mineral: Arc<dyn Mineral>) -> Self {
        let name = mineral.name().to_string();
        Self {
            name,
            phases: vec![Phase {
                mineral,
                fraction: 1.0,
            }],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always false for a constructed rock.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn total_fraction(&self) -> f64 {
        self.phases.iter().map(Phase::fraction).sum()
    }
}
