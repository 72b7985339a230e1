//! Deterministic Vedic chart calculations over sidereal longitudes.
//!
//! This crate provides:
//! - Angle, rashi and nakshatra utilities
//! - Dignity, relationship, house and aspect tables
//! - The sixteen shodashavarga divisional schemes and divisional charts
//! - Planetary condition analysis (motion, speed, combustion, war)
//! - Yogini dasha and Ashtakoota compatibility
//!
//! Everything here is pure and synchronous. Longitudes come from an
//! external ephemeris; see the `jataka_search` crate for that seam.

pub mod amsha;
pub mod bhava;
pub mod combustion;
pub mod condition;
pub mod condition_types;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod milan;
pub mod motion;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod util;
pub mod varga;
pub mod yuddha;

pub use amsha::{
    Amsha, AmshaPosition, AmshaRule, SHODASHAVARGA, amsha_from_rashi_position, amsha_longitude,
    amsha_longitudes, amsha_position, amsha_rashi_info, amsha_rashi_infos,
};
pub use bhava::{HouseClass, aspected_houses, aspects, house_classes, house_from_rashi};
pub use combustion::{SunRelative, classify_combustion, combustion_orb};
pub use condition::{
    MAX_STRENGTH_FACTOR, MIN_STRENGTH_FACTOR, analyze_chart, attach_wars, classify_all,
    classify_condition, malefic_pressure, strength_factor,
};
pub use condition_types::{
    BrightnessRanks, ChartConditions, CombustionState, ConditionConfig, MotionState,
    PlanetaryCondition, PlanetaryWar, SpeedClass, WarOutcome, WarParticipation, WarRule,
};
pub use dasha::{
    ALL_YOGINIS, DAYS_PER_YEAR, DashaLevel, DashaPeriod, Yogini, YoginiSnapshot, active_period,
    birth_balance_days, yogini_antardashas, yogini_mahadashas, yogini_periods, yogini_snapshot,
};
pub use dignity::{
    BeneficNature, Dignity, NaisargikaMaitri, PanchadhaMaitri, TatkalikaMaitri,
    debilitation_degree, dignity_in_rashi, dignity_in_rashi_with_positions, exaltation_degree,
    moolatrikona_range, naisargika_maitri, natural_benefic_malefic, own_signs, panchadha_maitri,
    tatkalika_maitri,
};
pub use error::VedicError;
pub use graha::{
    ALL_BODIES, ALL_GRAHAS, Graha, OUTER_GRAHAS, SAPTA_GRAHAS, WAR_GRAHAS, rashi_lord,
    rashi_lord_by_index,
};
pub use milan::{
    ALL_KOOTAS, Koota, KootaScore, MAX_GUNA_POINTS, MilanResult, MoonSign, guna_milan,
};
pub use motion::{classify_motion, classify_speed, mean_daily_motion, stationary_threshold};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use position::{
    BodyPosition, ChartMeta, EclipticState, HouseSystem, NatalChart, whole_sign_cusps,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_index_of,
};
pub use util::{angular_distance, normalize_360, normalize_to_pm180};
pub use varga::{
    DivisionalChart, divisional_chart, is_vargottama, shodashavarga_charts, vargottama_grahas,
};
pub use yuddha::{detect_wars, resolve_war};
