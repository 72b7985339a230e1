//! Types for planetary condition analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

/// Direction-of-motion classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionState {
    Direct,
    Retrograde,
    /// Near-zero speed about to turn (or turning) retrograde.
    StationaryRetrograde,
    /// Near-zero speed turning direct.
    StationaryDirect,
    /// Rahu and Ketu.
    PerpetualRetrograde,
}

impl MotionState {
    /// Retrograde for combustion-orb purposes.
    pub const fn is_retrograde(self) -> bool {
        matches!(self, Self::Retrograde | Self::StationaryRetrograde)
    }

    /// Multiplier applied to the strength factor.
    ///
    /// Only stationary and plain retrograde states modify strength.
    pub const fn strength_multiplier(self) -> f64 {
        match self {
            Self::StationaryRetrograde => 1.5,
            Self::StationaryDirect => 1.25,
            Self::Retrograde => 1.25,
            Self::Direct | Self::PerpetualRetrograde => 1.0,
        }
    }
}

/// Seven-way speed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedClass {
    VeryFast,
    Fast,
    Normal,
    Slow,
    VerySlow,
    Stationary,
    RetrogradeMotion,
}

impl SpeedClass {
    pub const fn strength_factor(self) -> f64 {
        match self {
            Self::VeryFast => 1.1,
            Self::Fast => 1.05,
            Self::Normal => 1.0,
            Self::Slow => 0.95,
            Self::VerySlow => 0.9,
            Self::Stationary | Self::RetrogradeMotion => 1.0,
        }
    }

    pub const fn is_slow(self) -> bool {
        matches!(self, Self::Slow | Self::VerySlow)
    }
}

/// Combustion classification relative to the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombustionState {
    NotCombust,
    /// Outside the orb but closing in.
    Approaching,
    Combust,
    /// Within half the orb.
    DeepCombust,
    /// Heart of the Sun; strengthens instead of weakening.
    Cazimi,
    /// Outside the orb and moving away.
    Separating,
}

impl CombustionState {
    pub const fn strength_factor(self) -> f64 {
        match self {
            Self::NotCombust => 1.0,
            Self::Approaching => 0.9,
            Self::Separating => 0.95,
            Self::Combust => 0.5,
            Self::DeepCombust => 0.25,
            Self::Cazimi => 1.5,
        }
    }
}

/// Tie-break that decided a planetary war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarRule {
    NorthernLatitude,
    Brightness,
    /// Northern and brighter.
    Combined,
    /// Greater raw longitude; arbitrary but deterministic.
    Indeterminate,
}

/// Result of graha yuddha between two war-capable grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryWar {
    /// Participants in `Graha::index()` order.
    pub grahas: (Graha, Graha),
    pub separation_deg: f64,
    /// Latitudes matching `grahas`.
    pub latitudes: (Option<f64>, Option<f64>),
    pub winner: Graha,
    pub loser: Graha,
    pub rule: WarRule,
    /// `1 - separation/orb`, in [0, 1].
    pub intensity: f64,
}

impl PlanetaryWar {
    pub fn involves(&self, graha: Graha) -> bool {
        self.grahas.0 == graha || self.grahas.1 == graha
    }

    /// Won or Lost for a participant, `None` otherwise.
    pub fn outcome_for(&self, graha: Graha) -> Option<WarOutcome> {
        if graha == self.winner {
            Some(WarOutcome::Won)
        } else if graha == self.loser {
            Some(WarOutcome::Lost)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarOutcome {
    Won,
    Lost,
}

impl WarOutcome {
    pub const fn strength_factor(self) -> f64 {
        match self {
            Self::Won => 1.1,
            Self::Lost => 0.5,
        }
    }
}

/// A graha's link into the chart's war list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarParticipation {
    /// Index into [`ChartConditions::wars`].
    pub war_index: usize,
    pub outcome: WarOutcome,
}

/// Per-graha condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryCondition {
    pub graha: Graha,
    pub motion: MotionState,
    pub combustion: CombustionState,
    pub speed: SpeedClass,
    /// Distance from the Sun, when the Sun is in the chart.
    pub sun_distance_deg: Option<f64>,
    pub war: Option<WarParticipation>,
    /// Product of the per-classification factors, in [0.05, 2.5].
    pub strength_factor: f64,
}

/// Whole-chart analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConditions {
    pub conditions: BTreeMap<Graha, PlanetaryCondition>,
    pub wars: Vec<PlanetaryWar>,
    /// Aggregate affliction score, in [0, 1].
    pub malefic_pressure: f64,
}

impl ChartConditions {
    pub fn get(&self, graha: Graha) -> Option<&PlanetaryCondition> {
        self.conditions.get(&graha)
    }

    /// The war a graha took part in, if any.
    pub fn war_of(&self, graha: Graha) -> Option<&PlanetaryWar> {
        self.get(graha)
            .and_then(|c| c.war)
            .and_then(|w| self.wars.get(w.war_index))
    }
}

/// Natural brightness ranks used to settle wars. Higher is brighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessRanks {
    pub shukra: u8,
    pub guru: u8,
    pub mangal: u8,
    pub buddh: u8,
    pub shani: u8,
}

impl Default for BrightnessRanks {
    /// Venus > Jupiter > Mars > Mercury > Saturn.
    fn default() -> Self {
        Self {
            shukra: 5,
            guru: 4,
            mangal: 3,
            buddh: 2,
            shani: 1,
        }
    }
}

impl BrightnessRanks {
    /// Rank of a war-capable graha, `None` for everything else.
    pub const fn rank(&self, graha: Graha) -> Option<u8> {
        match graha {
            Graha::Shukra => Some(self.shukra),
            Graha::Guru => Some(self.guru),
            Graha::Mangal => Some(self.mangal),
            Graha::Buddh => Some(self.buddh),
            Graha::Shani => Some(self.shani),
            _ => None,
        }
    }
}

/// Tunable constants of the condition analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionConfig {
    /// Cazimi orb in degrees (default 17 arc-minutes).
    pub cazimi_orb_deg: f64,
    /// Maximum separation for a planetary war (default 1.0).
    pub war_orb_deg: f64,
    /// Latitudes must differ by more than this to decide a war (default 0.05).
    pub war_latitude_margin_deg: f64,
    /// Approaching/separating band as a multiple of the combustion orb (default 1.4).
    pub approach_factor: f64,
    pub brightness: BrightnessRanks,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            cazimi_orb_deg: 17.0 / 60.0,
            war_orb_deg: 1.0,
            war_latitude_margin_deg: 0.05,
            approach_factor: 1.4,
            brightness: BrightnessRanks::default(),
        }
    }
}

impl ConditionConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.cazimi_orb_deg.is_finite() || self.cazimi_orb_deg < 0.0 {
            return Err("cazimi_orb_deg must be finite and non-negative");
        }
        if !self.war_orb_deg.is_finite() || self.war_orb_deg <= 0.0 {
            return Err("war_orb_deg must be positive");
        }
        if !self.war_latitude_margin_deg.is_finite() || self.war_latitude_margin_deg < 0.0 {
            return Err("war_latitude_margin_deg must be finite and non-negative");
        }
        if !self.approach_factor.is_finite() || self.approach_factor < 1.0 {
            return Err("approach_factor must be at least 1.0");
        }
        Ok(())
    }

    /// `self` if valid, for configs loaded from outside the crate.
    pub fn checked(self) -> Result<Self, VedicError> {
        self.validate().map_err(VedicError::InvalidConfig)?;
        Ok(self)
    }
}
