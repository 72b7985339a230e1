//! Whole-chart planetary condition analysis.
//!
//! Two pure passes: [`classify_all`] builds per-graha conditions from motion,
//! speed and Sun distance, then [`attach_wars`] links the results of
//! [`detect_wars`] into them and re-derives strength. [`analyze_chart`]
//! composes both and adds the chart-level malefic pressure.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::combustion::{SunRelative, classify_combustion};
use crate::condition_types::{
    ChartConditions, CombustionState, ConditionConfig, MotionState, PlanetaryCondition,
    PlanetaryWar, SpeedClass, WarOutcome, WarParticipation,
};
use crate::graha::Graha;
use crate::motion::{classify_motion, classify_speed, mean_daily_motion};
use crate::position::{BodyPosition, NatalChart};
use crate::util::angular_distance;
use crate::yuddha::detect_wars;

/// Lower bound of the combined strength factor.
pub const MIN_STRENGTH_FACTOR: f64 = 0.05;
/// Upper bound of the combined strength factor.
pub const MAX_STRENGTH_FACTOR: f64 = 2.5;

const PRESSURE_DEEP_COMBUST: f64 = 0.25;
const PRESSURE_COMBUST: f64 = 0.15;
const PRESSURE_WAR_LOSER: f64 = 0.2;
const PRESSURE_SLOW: f64 = 0.05;

/// Combined strength factor, clamped to [0.05, 2.5].
pub fn strength_factor(
    motion: MotionState,
    combustion: CombustionState,
    speed: SpeedClass,
    war: Option<WarOutcome>,
) -> f64 {
    let war_factor = war.map_or(1.0, WarOutcome::strength_factor);
    (combustion.strength_factor()
        * speed.strength_factor()
        * motion.strength_multiplier()
        * war_factor)
        .clamp(MIN_STRENGTH_FACTOR, MAX_STRENGTH_FACTOR)
}

/// Condition of one body, without war data.
///
/// `sun` is `None` when the chart has no Sun; combustion then degrades to
/// NotCombust. A non-finite speed degrades the body to Direct/Normal/NotCombust.
pub fn classify_condition(
    pos: &BodyPosition,
    sun: Option<&BodyPosition>,
    cfg: &ConditionConfig,
) -> PlanetaryCondition {
    let graha = pos.graha();
    let v = pos.speed_deg_per_day();
    let sun = sun.filter(|_| graha != Graha::Surya);
    let sun_distance_deg = sun.map(|s| angular_distance(pos.longitude_deg(), s.longitude_deg()));

    let (motion, speed, combustion) = if !v.is_finite() {
        warn!("non-finite speed for {}, using neutral condition", graha.name());
        (
            MotionState::Direct,
            SpeedClass::Normal,
            CombustionState::NotCombust,
        )
    } else {
        let motion = classify_motion(graha, v);
        let combustion = match sun {
            Some(s) => {
                let sun_speed = s.speed_deg_per_day();
                let rel = SunRelative {
                    graha_lon: pos.longitude_deg(),
                    graha_speed: v,
                    sun_lon: s.longitude_deg(),
                    sun_speed: if sun_speed.is_finite() {
                        sun_speed
                    } else {
                        mean_daily_motion(Graha::Surya)
                    },
                    is_retrograde: motion.is_retrograde(),
                };
                classify_combustion(graha, &rel, cfg)
            }
            None => CombustionState::NotCombust,
        };
        (motion, classify_speed(graha, v), combustion)
    };

    PlanetaryCondition {
        graha,
        motion,
        combustion,
        speed,
        sun_distance_deg,
        war: None,
        strength_factor: strength_factor(motion, combustion, speed, None),
    }
}

/// First pass: one condition per body present in the chart.
pub fn classify_all(
    chart: &NatalChart,
    cfg: &ConditionConfig,
) -> BTreeMap<Graha, PlanetaryCondition> {
    let sun = chart.position(Graha::Surya);
    if sun.is_none() {
        warn!("chart has no Sun position, combustion disabled");
    }
    chart
        .positions()
        .iter()
        .map(|p| (p.graha(), classify_condition(p, sun, cfg)))
        .collect()
}

/// Second pass: link each participant to its war and re-derive strength.
///
/// A graha fighting several wars keeps the most intense one (first on ties).
/// Input conditions are not modified.
pub fn attach_wars(
    conditions: &BTreeMap<Graha, PlanetaryCondition>,
    wars: &[PlanetaryWar],
) -> BTreeMap<Graha, PlanetaryCondition> {
    let mut chosen: BTreeMap<Graha, (usize, WarOutcome)> = BTreeMap::new();
    for (i, war) in wars.iter().enumerate() {
        for graha in [war.grahas.0, war.grahas.1] {
            let Some(outcome) = war.outcome_for(graha) else {
                continue;
            };
            let replace = match chosen.get(&graha) {
                Some(&(j, _)) => war.intensity > wars[j].intensity,
                None => true,
            };
            if replace {
                chosen.insert(graha, (i, outcome));
            }
        }
    }

    conditions
        .iter()
        .map(|(&graha, c)| {
            let updated = match chosen.get(&graha) {
                Some(&(war_index, outcome)) => PlanetaryCondition {
                    war: Some(WarParticipation {
                        war_index,
                        outcome,
                    }),
                    strength_factor: strength_factor(
                        c.motion,
                        c.combustion,
                        c.speed,
                        Some(outcome),
                    ),
                    ..*c
                },
                None => *c,
            };
            (graha, updated)
        })
        .collect()
}

/// Aggregate affliction of the chart, clamped to [0, 1].
///
/// DeepCombust +0.25, Combust +0.15, Slow/VerySlow +0.05 per body, and
/// +0.2 per body that lost at least one war.
pub fn malefic_pressure(
    conditions: &BTreeMap<Graha, PlanetaryCondition>,
    wars: &[PlanetaryWar],
) -> f64 {
    let per_body: f64 = conditions
        .values()
        .map(|c| {
            let combust = match c.combustion {
                CombustionState::DeepCombust => PRESSURE_DEEP_COMBUST,
                CombustionState::Combust => PRESSURE_COMBUST,
                _ => 0.0,
            };
            let slow = if c.speed.is_slow() { PRESSURE_SLOW } else { 0.0 };
            combust + slow
        })
        .sum();
    let losers: BTreeSet<Graha> = wars.iter().map(|w| w.loser).collect();
    let war_losses = losers.len() as f64 * PRESSURE_WAR_LOSER;
    (per_body + war_losses).clamp(0.0, 1.0)
}

/// Full analysis: classify, detect and attach wars, aggregate pressure.
pub fn analyze_chart(chart: &NatalChart, cfg: &ConditionConfig) -> ChartConditions {
    let base = classify_all(chart, cfg);
    let wars = detect_wars(chart.positions(), cfg);
    let conditions = attach_wars(&base, &wars);
    let malefic_pressure = malefic_pressure(&conditions, &wars);
    debug!(
        "analyzed {} bodies: {} war(s), malefic pressure {:.3}",
        conditions.len(),
        wars.len(),
        malefic_pressure
    );
    ChartConditions {
        conditions,
        wars,
        malefic_pressure,
    }
}
