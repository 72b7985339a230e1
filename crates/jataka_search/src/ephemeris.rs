//! The ephemeris oracle seam and scan cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use jataka_vedic_base::{EclipticState, Graha, normalize_360};

use crate::error::SearchError;

/// Source of sidereal ecliptic states.
///
/// Implementations may return un-normalized longitudes; [`body_state`]
/// normalizes them. Each call is treated as pure for a given
/// `(graha, jd_ut)`.
pub trait Ephemeris {
    fn ecliptic_state(&self, graha: Graha, jd_ut: f64) -> Result<EclipticState, SearchError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn ecliptic_state(&self, graha: Graha, jd_ut: f64) -> Result<EclipticState, SearchError> {
        (**self).ecliptic_state(graha, jd_ut)
    }
}

/// Adapter turning a closure into an [`Ephemeris`].
#[derive(Debug, Clone, Copy)]
pub struct FnEphemeris<F>(pub F);

impl<F> FnEphemeris<F>
where
    F: Fn(Graha, f64) -> Result<EclipticState, SearchError>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Ephemeris for FnEphemeris<F>
where
    F: Fn(Graha, f64) -> Result<EclipticState, SearchError>,
{
    fn ecliptic_state(&self, graha: Graha, jd_ut: f64) -> Result<EclipticState, SearchError> {
        (self.0)(graha, jd_ut)
    }
}

/// Query the oracle and normalize the longitude to [0, 360).
///
/// A non-finite longitude is an ephemeris error. A non-finite speed is
/// passed through; condition analysis degrades that body on its own.
pub fn body_state<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_ut: f64,
) -> Result<EclipticState, SearchError> {
    let mut state = eph.ecliptic_state(graha, jd_ut)?;
    if !state.longitude_deg.is_finite() {
        return Err(SearchError::Ephemeris(format!(
            "non-finite longitude for {} at JD {jd_ut}",
            graha.name()
        )));
    }
    state.longitude_deg = normalize_360(state.longitude_deg);
    Ok(state)
}

/// Like [`body_state`], but the speed must be finite too.
///
/// Scans bisect on speed-dependent functions and cannot degrade.
pub(crate) fn moving_state<E: Ephemeris + ?Sized>(
    eph: &E,
    graha: Graha,
    jd_ut: f64,
) -> Result<EclipticState, SearchError> {
    let state = body_state(eph, graha, jd_ut)?;
    if !state.speed_deg_per_day.is_finite() {
        return Err(SearchError::Ephemeris(format!(
            "non-finite speed for {} at JD {jd_ut}",
            graha.name()
        )));
    }
    Ok(state)
}

/// Shared cancellation flag for long scans.
///
/// Clones observe the same flag. Scans poll it once per iteration and
/// return [`SearchError::Cancelled`] as soon as it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` once the flag is set.
    pub fn check(&self) -> Result<(), SearchError> {
        if self.is_cancelled() {
            Err(SearchError::Cancelled)
        } else {
            Ok(())
        }
    }
}
