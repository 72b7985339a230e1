//! Parallel batch searches over several grahas or amshas.
//!
//! Each item is independent, so the work fans out over rayon's global
//! pool. Results are keyed in `BTreeMap`s for deterministic ordering.
//! The first error (including cancellation) aborts the batch.

use std::collections::BTreeMap;

use rayon::prelude::*;

use jataka_vedic_base::{Amsha, DivisionalChart, Graha, NatalChart, SHODASHAVARGA, divisional_chart};

use crate::combustion_window::{CombustionSearchConfig, CombustionWindow, search_combustion_windows};
use crate::ephemeris::{CancelFlag, Ephemeris};
use crate::error::SearchError;
use crate::stationary::search_stationary;
use crate::stationary_types::{StationaryConfig, StationaryEvent};

/// Stations of every graha in `[jd_start, jd_end]`, each with the step
/// size from [`StationaryConfig::for_graha`].
pub fn stationary_batch<E: Ephemeris + Sync + ?Sized>(
    eph: &E,
    grahas: &[Graha],
    jd_start: f64,
    jd_end: f64,
    cancel: &CancelFlag,
) -> Result<BTreeMap<Graha, Vec<StationaryEvent>>, SearchError> {
    grahas
        .par_iter()
        .map(|&g| {
            let cfg = StationaryConfig::for_graha(g);
            search_stationary(eph, g, jd_start, jd_end, &cfg, cancel).map(|ev| (g, ev))
        })
        .collect()
}

/// Combustion windows of every graha in `[jd_start, jd_end]`.
pub fn combustion_batch<E: Ephemeris + Sync + ?Sized>(
    eph: &E,
    grahas: &[Graha],
    jd_start: f64,
    jd_end: f64,
    config: &CombustionSearchConfig,
    cancel: &CancelFlag,
) -> Result<BTreeMap<Graha, Vec<CombustionWindow>>, SearchError> {
    grahas
        .par_iter()
        .map(|&g| {
            search_combustion_windows(eph, g, jd_start, jd_end, config, cancel).map(|w| (g, w))
        })
        .collect()
}

/// All sixteen divisional charts, computed in parallel.
pub fn shodashavarga_batch(chart: &NatalChart) -> BTreeMap<Amsha, DivisionalChart> {
    SHODASHAVARGA
        .par_iter()
        .map(|&a| (a, divisional_chart(chart, a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_vedic_base::{ChartMeta, EclipticState, shodashavarga_charts};

    #[test]
    fn shodashavarga_batch_matches_sequential() {
        let states = [
            (Graha::Surya, EclipticState::new(123.4, 1.0)),
            (Graha::Chandra, EclipticState::new(7.9, 13.2)),
            (Graha::Shani, EclipticState::new(301.25, 0.03)),
        ];
        let chart = NatalChart::new(15.0, &states, None, ChartMeta::default()).unwrap();
        let batch = shodashavarga_batch(&chart);
        let seq = shodashavarga_charts(&chart);
        assert_eq!(batch.len(), 16);
        for d in seq {
            assert_eq!(batch[&d.amsha], d);
        }
    }
}
