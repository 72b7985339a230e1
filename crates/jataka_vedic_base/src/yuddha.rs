//! Graha yuddha (planetary war) detection and resolution.
//!
//! Only Mars, Mercury, Jupiter, Venus and Saturn fight. Every unordered
//! pair within the war orb produces one war. The winner is settled by, in
//! order: clearly greater northern latitude, natural brightness, and
//! finally the greater raw longitude.

use log::debug;

use crate::condition_types::{ConditionConfig, PlanetaryWar, WarRule};
use crate::position::BodyPosition;
use crate::util::angular_distance;

/// Decide the war between two positions already known to be within the orb.
///
/// `a` and `b` may come in any order; the result is identical.
pub fn resolve_war(a: &BodyPosition, b: &BodyPosition, cfg: &ConditionConfig) -> PlanetaryWar {
    let (a, b) = if a.graha().index() <= b.graha().index() {
        (a, b)
    } else {
        (b, a)
    };
    let separation_deg = angular_distance(a.longitude_deg(), b.longitude_deg());
    let rank_a = cfg.brightness.rank(a.graha()).unwrap_or(0);
    let rank_b = cfg.brightness.rank(b.graha()).unwrap_or(0);

    let by_latitude = match (a.latitude_deg(), b.latitude_deg()) {
        (Some(la), Some(lb)) if (la - lb).abs() > cfg.war_latitude_margin_deg => {
            Some(if la > lb { (a, b) } else { (b, a) })
        }
        _ => None,
    };

    let ((winner, loser), rule) = if let Some((w, l)) = by_latitude {
        let brighter = cfg.brightness.rank(w.graha()) > cfg.brightness.rank(l.graha());
        let rule = if brighter {
            WarRule::Combined
        } else {
            WarRule::NorthernLatitude
        };
        ((w, l), rule)
    } else if rank_a != rank_b {
        let pair = if rank_a > rank_b { (a, b) } else { (b, a) };
        (pair, WarRule::Brightness)
    } else {
        let pair = if a.longitude_deg() >= b.longitude_deg() {
            (a, b)
        } else {
            (b, a)
        };
        (pair, WarRule::Indeterminate)
    };

    PlanetaryWar {
        grahas: (a.graha(), b.graha()),
        separation_deg,
        latitudes: (a.latitude_deg(), b.latitude_deg()),
        winner: winner.graha(),
        loser: loser.graha(),
        rule,
        intensity: (1.0 - separation_deg / cfg.war_orb_deg).clamp(0.0, 1.0),
    }
}

/// All wars among the war-capable positions, in pair order.
///
/// Positions with a non-finite longitude are skipped.
pub fn detect_wars(positions: &[BodyPosition], cfg: &ConditionConfig) -> Vec<PlanetaryWar> {
    let mut fighters: Vec<&BodyPosition> = positions
        .iter()
        .filter(|p| p.graha().is_war_capable() && p.longitude_deg().is_finite())
        .collect();
    fighters.sort_by_key(|p| p.graha().index());

    let mut wars = Vec::new();
    for (i, a) in fighters.iter().enumerate() {
        for b in &fighters[i + 1..] {
            if angular_distance(a.longitude_deg(), b.longitude_deg()) <= cfg.war_orb_deg {
                wars.push(resolve_war(a, b, cfg));
            }
        }
    }
    if !wars.is_empty() {
        debug!("detected {} planetary war(s)", wars.len());
    }
    wars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition_types::BrightnessRanks;
    use crate::graha::Graha;
    use crate::position::EclipticState;

    fn pos(graha: Graha, lon: f64, lat: Option<f64>) -> BodyPosition {
        let mut s = EclipticState::new(lon, 0.5);
        s.latitude_deg = lat;
        BodyPosition::new(graha, &s, 0)
    }

    #[test]
    fn northern_latitude_wins() {
        // Shani north of Shukra: latitude decides, Shani dimmer -> NorthernLatitude
        let a = pos(Graha::Shukra, 100.0, Some(-1.0));
        let b = pos(Graha::Shani, 100.5, Some(1.0));
        let w = resolve_war(&a, &b, &ConditionConfig::default());
        assert_eq!(w.winner, Graha::Shani);
        assert_eq!(w.rule, WarRule::NorthernLatitude);
        assert!((w.intensity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn northern_and_brighter_is_combined() {
        let a = pos(Graha::Guru, 50.0, Some(1.2));
        let b = pos(Graha::Mangal, 50.2, Some(0.1));
        let w = resolve_war(&a, &b, &ConditionConfig::default());
        assert_eq!(w.winner, Graha::Guru);
        assert_eq!(w.loser, Graha::Mangal);
        assert_eq!(w.rule, WarRule::Combined);
    }

    #[test]
    fn close_latitudes_fall_back_to_brightness() {
        // 0.03 apart, below the 0.05 margin
        let a = pos(Graha::Buddh, 10.0, Some(0.53));
        let b = pos(Graha::Mangal, 10.4, Some(0.50));
        let w = resolve_war(&a, &b, &ConditionConfig::default());
        assert_eq!(w.winner, Graha::Mangal);
        assert_eq!(w.rule, WarRule::Brightness);
    }

    #[test]
    fn equal_brightness_uses_raw_longitude() {
        let cfg = ConditionConfig {
            brightness: BrightnessRanks {
                mangal: 3,
                buddh: 3,
                ..BrightnessRanks::default()
            },
            ..ConditionConfig::default()
        };
        let a = pos(Graha::Mangal, 200.3, None);
        let b = pos(Graha::Buddh, 200.9, None);
        for _ in 0..3 {
            let w1 = resolve_war(&a, &b, &cfg);
            let w2 = resolve_war(&b, &a, &cfg);
            assert_eq!(w1, w2);
            assert_eq!(w1.winner, Graha::Buddh);
            assert_eq!(w1.rule, WarRule::Indeterminate);
        }
    }

    #[test]
    fn detection_respects_orb_and_capability() {
        let positions = [
            pos(Graha::Surya, 10.0, None),
            pos(Graha::Buddh, 10.5, None),
            pos(Graha::Shukra, 10.9, None),
            pos(Graha::Shani, 12.0, None),
            pos(Graha::Rahu, 10.2, None),
        ];
        let wars = detect_wars(&positions, &ConditionConfig::default());
        // Buddh-Shukra 0.4 fights; Shukra-Shani 1.1 and Buddh-Shani 1.5 do not
        assert_eq!(wars.len(), 1);
        assert_eq!(wars[0].grahas, (Graha::Buddh, Graha::Shukra));
        assert_eq!(wars[0].winner, Graha::Shukra);
    }

    #[test]
    fn war_across_zero_degrees() {
        let positions = [pos(Graha::Guru, 359.8, None), pos(Graha::Shani, 0.3, None)];
        let wars = detect_wars(&positions, &ConditionConfig::default());
        assert_eq!(wars.len(), 1);
        assert!((wars[0].separation_deg - 0.5).abs() < 1e-9);
    }
}
