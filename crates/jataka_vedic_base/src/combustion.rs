//! Combustion (asta) classification relative to the Sun.
//!
//! Orbs follow the classical per-graha table, tighter for retrograde
//! Mercury and Venus. Inside the Cazimi orb a graha is strengthened
//! instead. Just outside the orb it is approaching or separating,
//! depending on whether it gains on the Sun.

use crate::condition_types::{CombustionState, ConditionConfig};
use crate::graha::Graha;
use crate::util::angular_distance;

/// Combustion orb (degrees from the Sun).
///
/// `None` for the Sun, the nodes and the outer bodies.
pub const fn combustion_orb(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(if is_retrograde { 12.0 } else { 14.0 }),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(if is_retrograde { 8.0 } else { 10.0 }),
        Graha::Shani => Some(15.0),
        _ => None,
    }
}

/// Sun-relative inputs for one graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunRelative {
    pub graha_lon: f64,
    pub graha_speed: f64,
    pub sun_lon: f64,
    pub sun_speed: f64,
    /// Retrograde or stationary-retrograde.
    pub is_retrograde: bool,
}

/// Classify combustion. Boundaries are inclusive.
///
/// Order: Cazimi, DeepCombust (orb/2), Combust (orb), then
/// Approaching/Separating within `approach_factor * orb`.
pub fn classify_combustion(
    graha: Graha,
    rel: &SunRelative,
    cfg: &ConditionConfig,
) -> CombustionState {
    let Some(orb) = combustion_orb(graha, rel.is_retrograde) else {
        return CombustionState::NotCombust;
    };
    let d = angular_distance(rel.graha_lon, rel.sun_lon);
    if d <= cfg.cazimi_orb_deg {
        CombustionState::Cazimi
    } else if d <= orb / 2.0 {
        CombustionState::DeepCombust
    } else if d <= orb {
        CombustionState::Combust
    } else if d <= orb * cfg.approach_factor {
        if rel.graha_speed - rel.sun_speed > 0.0 {
            CombustionState::Approaching
        } else {
            CombustionState::Separating
        }
    } else {
        CombustionState::NotCombust
    }
}
