//! Ephemeris-driven searches for Vedic charts.
//!
//! The ephemeris itself is external: callers supply an [`Ephemeris`]
//! implementation returning sidereal ecliptic states. On top of it this
//! crate provides:
//! - Natal chart assembly with Ketu derived from Rahu
//! - Stationary point (station retrograde/direct) search
//! - Combustion window search
//! - Rayon batches over several grahas or all sixteen amshas
//!
//! Scans poll a [`CancelFlag`] once per coarse step.

pub mod batch;
pub mod chart;
pub mod combustion_window;
pub mod ephemeris;
pub mod error;
pub(crate) mod search_util;
pub mod stationary;
pub mod stationary_types;

pub use batch::{combustion_batch, shodashavarga_batch, stationary_batch};
pub use chart::{graha_state, ketu_from_rahu, natal_chart_from_ephemeris};
pub use combustion_window::{
    CombustionSearchConfig, CombustionWindow, next_combustion_window, search_combustion_windows,
};
pub use ephemeris::{CancelFlag, Ephemeris, FnEphemeris, body_state};
pub use error::SearchError;
pub use search_util::SearchDirection;
pub use stationary::{next_stationary, prev_stationary, search_stationary};
pub use stationary_types::{StationType, StationaryConfig, StationaryEvent};
