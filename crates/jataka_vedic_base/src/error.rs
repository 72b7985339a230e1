//! Error types for chart construction and divisional lookups.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from Vedic base calculations.
///
/// Only caller-contract violations surface here. Missing or degenerate
/// per-graha data degrades that graha's result instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Division count that is not one of the 16 supported vargas.
    #[error("unsupported division count: D{0}")]
    UnsupportedDivision(u16),
    /// A chart was given two positions for the same graha.
    #[error("duplicate position for {}", .0.name())]
    DuplicateGraha(Graha),
    /// Ascendant or body longitude was NaN or infinite.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(&'static str),
    /// House cusps disagree with the ascendant under the chosen house system.
    #[error("house cusps are inconsistent with the ascendant")]
    InconsistentCusps,
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
