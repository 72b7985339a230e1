//! Error type for ephemeris-driven searches.

use jataka_vedic_base::VedicError;
use thiserror::Error;

/// Errors from chart assembly and window searches.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The ephemeris oracle failed for a body/instant.
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
    /// Chart assembly rejected the oracle output.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Invalid search configuration or body for this search.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Bisection did not bracket or converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// The caller cancelled the scan.
    #[error("search cancelled")]
    Cancelled,
}
