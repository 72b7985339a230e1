//! Stationary point search.
//!
//! Finds when a graha's sidereal longitude speed crosses zero (station
//! retrograde / station direct). Coarse scan for a sign change in speed,
//! then bisection on f(t) = speed(t).

use log::trace;

use jataka_vedic_base::Graha;

use crate::ephemeris::{CancelFlag, Ephemeris, moving_state};
use crate::error::SearchError;
use crate::search_util::{SearchDirection, bisect_zero};
use crate::stationary_types::{StationType, StationaryConfig, StationaryEvent};

/// Maximum scan range in days (~800 days covers all synodic periods).
const MAX_SCAN_DAYS: f64 = 800.0;

/// Sun and Moon never station; the nodes move retrograde throughout.
fn validate_stationary_graha(graha: Graha) -> Result<(), SearchError> {
    if graha.is_luminary() || graha.is_node() {
        Err(SearchError::InvalidConfig(
            "Sun, Moon, Rahu and Ketu do not have stationary points",
        ))
    } else {
        Ok(())
    }
}

fn speed_at<E: Ephemeris + ?Sized>(eph: &E, graha: Graha, t: f64) -> Result<f64, SearchError> {
    Ok(moving_state(eph, graha, t)?.speed_deg_per_day)
}

/// Refine a bracketed station and build the event.
///
/// `(t_a, v_a)` must be the earlier end of the bracket.
fn refine_station<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    t_a: f64,
    v_a: f64,
    t_b: f64,
    config: &StationaryConfig,
) -> Result<StationaryEvent, SearchError> {
    trace!("{} station bracketed in [{t_a}, {t_b}]", graha.name());
    let f = |t: f64| speed_at(eph, graha, t);
    let t_station = bisect_zero(
        t_a,
        v_a,
        t_b,
        config.max_iterations,
        config.convergence_days,
        &f,
    )?;
    let state = moving_state(eph, graha, t_station)?;

    // positive -> negative starts retrograde
    let station_type = if v_a > 0.0 {
        StationType::StationRetrograde
    } else {
        StationType::StationDirect
    };

    Ok(StationaryEvent {
        jd_ut: t_station,
        graha,
        longitude_deg: state.longitude_deg,
        latitude_deg: state.latitude_deg,
        station_type,
    })
}

fn find_stationary_event<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_start: f64,
    direction: SearchDirection,
    config: &StationaryConfig,
    cancel: &CancelFlag,
) -> Result<Option<StationaryEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_stationary_graha(graha)?;

    let step = direction.signed_step(config.step_size_days);
    let max_steps = (MAX_SCAN_DAYS / config.step_size_days).ceil() as usize;

    let mut v_prev = speed_at(eph, graha, jd_start)?;
    let mut t_prev = jd_start;

    for _ in 0..max_steps {
        cancel.check()?;
        let t_curr = t_prev + step;
        let v_curr = speed_at(eph, graha, t_curr)?;

        if v_prev * v_curr < 0.0 {
            let (t_a, v_a, t_b) = if t_prev < t_curr {
                (t_prev, v_prev, t_curr)
            } else {
                (t_curr, v_curr, t_prev)
            };
            return refine_station(eph, graha, t_a, v_a, t_b, config).map(Some);
        }

        t_prev = t_curr;
        v_prev = v_curr;
    }

    Ok(None)
}

/// Find the next stationary point after `jd_ut`.
pub fn next_stationary<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_ut: f64,
    config: &StationaryConfig,
    cancel: &CancelFlag,
) -> Result<Option<StationaryEvent>, SearchError> {
    find_stationary_event(eph, graha, jd_ut, SearchDirection::Forward, config, cancel)
}

/// Find the previous stationary point before `jd_ut`.
pub fn prev_stationary<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_ut: f64,
    config: &StationaryConfig,
    cancel: &CancelFlag,
) -> Result<Option<StationaryEvent>, SearchError> {
    find_stationary_event(eph, graha, jd_ut, SearchDirection::Backward, config, cancel)
}

/// Search for all stationary points in `[jd_start, jd_end]`, in time order.
pub fn search_stationary<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_start: f64,
    jd_end: f64,
    config: &StationaryConfig,
    cancel: &CancelFlag,
) -> Result<Vec<StationaryEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_stationary_graha(graha)?;

    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let mut events = Vec::new();
    let mut v_prev = speed_at(eph, graha, jd_start)?;
    let mut t_prev = jd_start;

    loop {
        cancel.check()?;
        let t_curr = (t_prev + config.step_size_days).min(jd_end);
        let v_curr = speed_at(eph, graha, t_curr)?;

        if v_prev * v_curr < 0.0 {
            let event = refine_station(eph, graha, t_prev, v_prev, t_curr, config)?;
            if event.jd_ut >= jd_start && event.jd_ut <= jd_end {
                events.push(event);
            }
        }

        if t_curr >= jd_end {
            break;
        }

        t_prev = t_curr;
        v_prev = v_curr;
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::FnEphemeris;
    use jataka_vedic_base::EclipticState;
    use std::f64::consts::TAU;

    const T0: f64 = 2_451_545.0;
    const PERIOD: f64 = 100.0;

    // Mean motion 1 deg/day plus an epicycle of speed amplitude 2:
    // v = 1 + 2 cos(w dt), zero at dt = P/3 and 2P/3 (mod P).
    fn epicycle() -> impl Ephemeris {
        FnEphemeris::new(|_, jd| {
            let w = TAU / PERIOD;
            let dt = jd - T0;
            let amp = 2.0 / w;
            Ok(EclipticState::new(
                dt + amp * (w * dt).sin(),
                1.0 + 2.0 * (w * dt).cos(),
            ))
        })
    }

    #[test]
    fn next_station_is_retrograde() {
        let ev = next_stationary(
            &epicycle(),
            Graha::Buddh,
            T0,
            &StationaryConfig::inner_planet(),
            &CancelFlag::new(),
        )
        .unwrap()
        .unwrap();
        assert!((ev.jd_ut - (T0 + PERIOD / 3.0)).abs() < 1e-6);
        assert_eq!(ev.station_type, StationType::StationRetrograde);
    }

    #[test]
    fn prev_station_is_direct() {
        let ev = prev_stationary(
            &epicycle(),
            Graha::Buddh,
            T0,
            &StationaryConfig::inner_planet(),
            &CancelFlag::new(),
        )
        .unwrap()
        .unwrap();
        assert!((ev.jd_ut - (T0 - PERIOD / 3.0)).abs() < 1e-6);
        assert_eq!(ev.station_type, StationType::StationDirect);
    }

    #[test]
    fn range_search_alternates() {
        let events = search_stationary(
            &epicycle(),
            Graha::Shukra,
            T0,
            T0 + 200.0,
            &StationaryConfig::inner_planet(),
            &CancelFlag::new(),
        )
        .unwrap();
        assert_eq!(events.len(), 4);
        let expected = [33.333_333, 66.666_667, 133.333_333, 166.666_667];
        for (ev, dt) in events.iter().zip(expected) {
            assert!((ev.jd_ut - T0 - dt).abs() < 1e-5);
        }
        assert_eq!(events[0].station_type, StationType::StationRetrograde);
        assert_eq!(events[1].station_type, StationType::StationDirect);
    }

    #[test]
    fn luminaries_and_nodes_rejected() {
        for g in [Graha::Surya, Graha::Chandra, Graha::Rahu, Graha::Ketu] {
            let r = next_stationary(
                &epicycle(),
                g,
                T0,
                &StationaryConfig::inner_planet(),
                &CancelFlag::new(),
            );
            assert!(matches!(r, Err(SearchError::InvalidConfig(_))), "{g:?}");
        }
    }

    #[test]
    fn cancelled_scan_stops() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let r = search_stationary(
            &epicycle(),
            Graha::Mangal,
            T0,
            T0 + 100.0,
            &StationaryConfig::inner_planet(),
            &cancel,
        );
        assert_eq!(r, Err(SearchError::Cancelled));
    }

    #[test]
    fn empty_range_rejected() {
        let r = search_stationary(
            &epicycle(),
            Graha::Mangal,
            T0,
            T0,
            &StationaryConfig::inner_planet(),
            &CancelFlag::new(),
        );
        assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
    }
}
