//! Natal chart assembly from an ephemeris oracle.

use log::debug;

use jataka_vedic_base::{ChartMeta, EclipticState, Graha, NatalChart, normalize_360};

use crate::ephemeris::{Ephemeris, body_state};
use crate::error::SearchError;

/// Ketu mirrors Rahu: opposite longitude, negated latitude, same speed.
pub fn ketu_from_rahu(rahu: &EclipticState) -> EclipticState {
    EclipticState {
        longitude_deg: normalize_360(rahu.longitude_deg + 180.0),
        latitude_deg: rahu.latitude_deg.map(|b| -b),
        distance_au: rahu.distance_au,
        speed_deg_per_day: rahu.speed_deg_per_day,
    }
}

/// State of one graha, deriving Ketu from Rahu.
pub fn graha_state<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_ut: f64,
) -> Result<EclipticState, SearchError> {
    match graha {
        Graha::Ketu => body_state(eph, Graha::Rahu, jd_ut).map(|r| ketu_from_rahu(&r)),
        _ => body_state(eph, graha, jd_ut),
    }
}

/// Query every requested graha at `jd_ut` and build a validated chart.
///
/// `meta.jd_ut` is overwritten with `jd_ut`. The oracle is never asked
/// for Ketu.
pub fn natal_chart_from_ephemeris<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    ascendant_deg: f64,
    grahas: &[Graha],
    meta: ChartMeta,
) -> Result<NatalChart, SearchError> {
    let states = grahas
        .iter()
        .map(|&g| graha_state(eph, g, jd_ut).map(|s| (g, s)))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("assembled {} body states at JD {jd_ut}", states.len());
    let meta = ChartMeta { jd_ut, ..meta };
    Ok(NatalChart::new(ascendant_deg, &states, None, meta)?)
}
