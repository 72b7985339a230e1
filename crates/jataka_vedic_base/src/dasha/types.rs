//! Core types for dasha period calculations.

use serde::Serialize;

use super::yogini_data::Yogini;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The yogini ruling this period.
    pub yogini: Yogini,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Active periods at a specific instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YoginiSnapshot {
    /// The queried JD UT.
    pub query_jd: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_child() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Antardasha.child_level(), None);
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod {
            yogini: Yogini::Mangala,
            start_jd: 10.0,
            end_jd: 20.0,
            level: DashaLevel::Mahadasha,
            order: 1,
        };
        assert!(p.contains(10.0));
        assert!(!p.contains(20.0));
        assert!((p.duration_days() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn days_per_year_constant() {
        assert!((DAYS_PER_YEAR - 365.25).abs() < 1e-15);
    }
}
