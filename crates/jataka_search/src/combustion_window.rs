//! Combustion window search.
//!
//! A window is a maximal interval where a graha sits within its combustion
//! orb of the Sun. The orb follows the graha's retrograde status at each
//! instant, so Mercury and Venus windows tighten while they are retrograde.

use log::{debug, trace};

use jataka_vedic_base::{Graha, angular_distance, classify_motion, combustion_orb};

use crate::ephemeris::{CancelFlag, Ephemeris, moving_state};
use crate::error::SearchError;
use crate::search_util::{bisect_zero, golden_minimum};

/// Configuration for combustion window scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionSearchConfig {
    /// Coarse scan step size in days.
    pub step_size_days: f64,
    /// Maximum refinement iterations.
    pub max_iterations: u32,
    /// Convergence threshold in days.
    pub convergence_days: f64,
}

impl Default for CombustionSearchConfig {
    fn default() -> Self {
        Self {
            step_size_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-6,
        }
    }
}

impl CombustionSearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

/// One combustion interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionWindow {
    pub graha: Graha,
    /// Entry into the orb, or the scan start when already combust there.
    pub start_jd: f64,
    /// Exit from the orb, or the scan end when still combust there.
    pub end_jd: f64,
    /// Instant of least Sun distance inside the window.
    pub closest_jd: f64,
    pub closest_distance_deg: f64,
}

impl CombustionWindow {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

fn require_orb(graha: Graha) -> Result<(), SearchError> {
    if combustion_orb(graha, false).is_none() {
        Err(SearchError::InvalidConfig("graha has no combustion orb"))
    } else {
        Ok(())
    }
}

fn sun_distance<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    t: f64,
) -> Result<f64, SearchError> {
    let sun = moving_state(eph, Graha::Surya, t)?;
    let body = moving_state(eph, graha, t)?;
    Ok(angular_distance(body.longitude_deg, sun.longitude_deg))
}

/// Sun distance minus the orb; negative inside the window.
fn orb_margin<E: Ephemeris + ?Sized>(eph: &E, graha: Graha, t: f64) -> Result<f64, SearchError> {
    let sun = moving_state(eph, Graha::Surya, t)?;
    let body = moving_state(eph, graha, t)?;
    let retro = classify_motion(graha, body.speed_deg_per_day).is_retrograde();
    let orb = combustion_orb(graha, retro)
        .ok_or(SearchError::InvalidConfig("graha has no combustion orb"))?;
    Ok(angular_distance(body.longitude_deg, sun.longitude_deg) - orb)
}

fn close_window<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    start_jd: f64,
    end_jd: f64,
    config: &CombustionSearchConfig,
) -> Result<CombustionWindow, SearchError> {
    let f = |t: f64| sun_distance(eph, graha, t);
    let (closest_jd, closest_distance_deg) = golden_minimum(
        start_jd,
        end_jd,
        config.max_iterations,
        config.convergence_days,
        &f,
    )?;
    trace!(
        "{} combust [{start_jd}, {end_jd}], closest {closest_distance_deg:.6} deg",
        graha.name()
    );
    Ok(CombustionWindow {
        graha,
        start_jd,
        end_jd,
        closest_jd,
        closest_distance_deg,
    })
}

/// All combustion windows overlapping `[jd_start, jd_end]`, clipped to it.
pub fn search_combustion_windows<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_start: f64,
    jd_end: f64,
    config: &CombustionSearchConfig,
    cancel: &CancelFlag,
) -> Result<Vec<CombustionWindow>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    require_orb(graha)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let f = |t: f64| orb_margin(eph, graha, t);
    let refine = |t_a: f64, f_a: f64, t_b: f64| {
        bisect_zero(
            t_a,
            f_a,
            t_b,
            config.max_iterations,
            config.convergence_days,
            &f,
        )
    };

    let mut windows = Vec::new();
    let mut t_prev = jd_start;
    let mut f_prev = f(jd_start)?;
    let mut open = (f_prev <= 0.0).then_some(jd_start);

    while t_prev < jd_end {
        cancel.check()?;
        let t_curr = (t_prev + config.step_size_days).min(jd_end);
        let f_curr = f(t_curr)?;

        match open {
            None if f_curr <= 0.0 => {
                open = Some(refine(t_prev, f_prev, t_curr)?);
            }
            Some(start) if f_curr > 0.0 => {
                let end = refine(t_prev, f_prev, t_curr)?;
                windows.push(close_window(eph, graha, start, end, config)?);
                open = None;
            }
            _ => {}
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    if let Some(start) = open {
        windows.push(close_window(eph, graha, start, jd_end, config)?);
    }

    debug!(
        "{} combustion window(s) for {} in [{jd_start}, {jd_end}]",
        windows.len(),
        graha.name()
    );
    Ok(windows)
}

/// First combustion window ending after `jd_ut`, scanning at most
/// `max_days` ahead.
pub fn next_combustion_window<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_ut: f64,
    max_days: f64,
    config: &CombustionSearchConfig,
    cancel: &CancelFlag,
) -> Result<Option<CombustionWindow>, SearchError> {
    let windows = search_combustion_windows(eph, graha, jd_ut, jd_ut + max_days, config, cancel)?;
    Ok(windows.into_iter().next())
}
