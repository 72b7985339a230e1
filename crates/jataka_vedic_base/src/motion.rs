//! Motion (retrograde/stationary) and speed classification.

use crate::condition_types::{MotionState, SpeedClass};
use crate::graha::Graha;

/// Speed magnitude (deg/day) at or below which a graha counts as stationary.
///
/// `None` for Sun, Moon and the nodes, which are never classified stationary.
pub const fn stationary_threshold(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Buddh => Some(0.08),
        Graha::Shukra => Some(0.05),
        Graha::Mangal => Some(0.03),
        Graha::Guru => Some(0.01),
        Graha::Shani => Some(0.006),
        Graha::Uranus => Some(0.003),
        Graha::Neptune | Graha::Pluto => Some(0.002),
        Graha::Surya | Graha::Chandra | Graha::Rahu | Graha::Ketu => None,
    }
}

/// Mean daily motion in degrees (magnitude).
pub const fn mean_daily_motion(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 0.9856,
        Graha::Chandra => 13.176,
        Graha::Buddh => 1.383,
        Graha::Shukra => 1.2,
        Graha::Mangal => 0.524,
        Graha::Guru => 0.083,
        Graha::Shani => 0.0335,
        Graha::Uranus => 0.0117,
        Graha::Neptune => 0.006,
        Graha::Pluto => 0.004,
        Graha::Rahu | Graha::Ketu => 0.0529,
    }
}

/// Classify direction of motion from signed daily speed.
pub fn classify_motion(graha: Graha, speed_deg_per_day: f64) -> MotionState {
    if graha.is_node() {
        return MotionState::PerpetualRetrograde;
    }
    let Some(threshold) = stationary_threshold(graha) else {
        return MotionState::Direct;
    };
    let v = speed_deg_per_day;
    if v.abs() <= threshold {
        if v <= 0.0 {
            MotionState::StationaryRetrograde
        } else {
            MotionState::StationaryDirect
        }
    } else if v < 0.0 {
        MotionState::Retrograde
    } else {
        MotionState::Direct
    }
}

/// Classify speed against the graha's mean daily motion.
pub fn classify_speed(graha: Graha, speed_deg_per_day: f64) -> SpeedClass {
    let Some(threshold) = stationary_threshold(graha) else {
        return SpeedClass::Normal;
    };
    let v = speed_deg_per_day;
    if v.abs() <= threshold {
        return SpeedClass::Stationary;
    }
    if v < 0.0 {
        return SpeedClass::RetrogradeMotion;
    }
    let ratio = v.abs() / mean_daily_motion(graha);
    if ratio >= 1.25 {
        SpeedClass::VeryFast
    } else if ratio >= 1.08 {
        SpeedClass::Fast
    } else if ratio >= 0.92 {
        SpeedClass::Normal
    } else if ratio >= 0.75 {
        SpeedClass::Slow
    } else {
        SpeedClass::VerySlow
    }
}
