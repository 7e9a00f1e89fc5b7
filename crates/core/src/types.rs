//! Domain types for the radrisk mission dose estimator.

use crate::error::{RadriskError, RadriskResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// ---------------------------------------------------------------------------
// Flux
// ---------------------------------------------------------------------------

/// Solar proton flux in protons·cm⁻²·s⁻¹·sr⁻¹.
///
/// Always finite and non-negative once constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ProtonFlux(f64);

impl ProtonFlux {
    /// Substitute reading when the live feed cannot be used.
    pub const FALLBACK: Self = Self(100.0);

    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> RadriskResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RadriskError::InvalidInput(format!(
                "proton flux must be a finite non-negative number, got {value}"
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Where a [`ProtonFlux`] reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FluxSource {
    Live,
    Fallback,
}

/// Flux value plus the live/fallback flag surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluxReading {
    pub flux: ProtonFlux,
    pub source: FluxSource,
}

impl FluxReading {
    pub fn live(flux: ProtonFlux) -> Self {
        Self {
            flux,
            source: FluxSource::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            flux: ProtonFlux::FALLBACK,
            source: FluxSource::Fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == FluxSource::Live
    }
}

// ---------------------------------------------------------------------------
// Mission inputs
// ---------------------------------------------------------------------------

/// Mission length in whole days, `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MissionDuration(u16);

impl MissionDuration {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 1000;
    pub const DEFAULT: Self = Self(180);

    pub fn new(days: u16) -> RadriskResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(RadriskError::InvalidInput(format!(
                "mission duration must be between {} and {} days, got {days}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(days))
    }

    #[inline]
    pub fn days(self) -> u16 {
        self.0
    }
}

impl Default for MissionDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for MissionDuration {
    type Err = RadriskError;

    fn from_str(s: &str) -> RadriskResult<Self> {
        let days: u16 = s
            .trim()
            .parse()
            .map_err(|_| RadriskError::InvalidInput(format!("not a day count: {s:?}")))?;
        Self::new(days)
    }
}

/// Hull shielding choice. Each material attenuates dose by a fixed factor.
///
/// Names parse case-insensitively: `"aluminum"`, `"Polyethylene"`, `"NONE"`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ShieldingMaterial {
    #[default]
    None,
    Aluminum,
    Polyethylene,
}

impl ShieldingMaterial {
    /// Multiplicative dose attenuation for this material.
    pub const fn shield_factor(self) -> f64 {
        match self {
            ShieldingMaterial::None => 1.0,
            ShieldingMaterial::Aluminum => 0.7,
            ShieldingMaterial::Polyethylene => 0.5,
        }
    }

    /// Parse a user-supplied material name.
    pub fn from_name(name: &str) -> RadriskResult<Self> {
        name.trim().parse().map_err(|_| {
            RadriskError::InvalidInput(format!(
                "unknown shielding material {name:?} (expected none, aluminum or polyethylene)"
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Cumulative dose equivalent in mSv.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DoseEstimate(pub f64);

impl DoseEstimate {
    #[inline]
    pub fn msv(self) -> f64 {
        self.0
    }
}

/// Excess cancer risk in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RiskEstimate(pub f64);

impl RiskEstimate {
    #[inline]
    pub fn percent(self) -> f64 {
        self.0
    }
}

/// One evaluation: inputs plus the intermediate daily dose and both outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub flux: ProtonFlux,
    pub days: MissionDuration,
    pub material: ShieldingMaterial,
    pub daily_dose_msv: f64,
    pub dose: DoseEstimate,
    pub risk: RiskEstimate,
}
