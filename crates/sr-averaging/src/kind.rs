//! Selector for the built-in averaging schemes.

use crate::hashin_shtrikman::{HashinShtrikmanLower, HashinShtrikmanUpper};
use crate::scheme::AveragingScheme;
use crate::voigt_reuss::{Reuss, Voigt, VoigtReussHill};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in averaging schemes, as named in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AveragingSchemeKind {
    Voigt,
    Reuss,
    #[default]
    VoigtReussHill,
    HashinShtrikmanUpper,
    HashinShtrikmanLower,
}

impl AveragingSchemeKind {
    pub const ALL: [AveragingSchemeKind; 5] = [
        AveragingSchemeKind::Voigt,
        AveragingSchemeKind::Reuss,
        AveragingSchemeKind::VoigtReussHill,
        AveragingSchemeKind::HashinShtrikmanUpper,
        AveragingSchemeKind::HashinShtrikmanLower,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Voigt => "voigt",
            Self::Reuss => "reuss",
            Self::VoigtReussHill => "voigt_reuss_hill",
            Self::HashinShtrikmanUpper => "hashin_shtrikman_upper",
            Self::HashinShtrikmanLower => "hashin_shtrikman_lower",
        }
    }

    /// Instantiate the scheme. Schemes are stateless, so this is cheap.
    pub fn build(self) -> Box<dyn AveragingScheme> {
        match self {
            Self::Voigt => Box::new(Voigt),
            Self::Reuss => Box::new(Reuss),
            Self::VoigtReussHill => Box::new(VoigtReussHill),
            Self::HashinShtrikmanUpper => Box::new(HashinShtrikmanUpper),
            Self::HashinShtrikmanLower => Box::new(HashinShtrikmanLower),
        }
    }
}

impl fmt::Display for AveragingSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AveragingSchemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "voigt" => Ok(Self::Voigt),
            "reuss" => Ok(Self::Reuss),
            "voigt_reuss_hill" | "vrh" | "hill" => Ok(Self::VoigtReussHill),
            "hashin_shtrikman_upper" | "hs_upper" => Ok(Self::HashinShtrikmanUpper),
            "hashin_shtrikman_lower" | "hs_lower" => Ok(Self::HashinShtrikmanLower),
            _ => Err(format!("unknown averaging scheme: {s}")),
        }
    }
}
