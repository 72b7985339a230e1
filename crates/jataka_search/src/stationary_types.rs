//! Types for stationary point search.

use jataka_vedic_base::Graha;

/// Station type: retrograde or direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationType {
    /// Longitude speed crosses from positive to negative (starts retrograde).
    StationRetrograde,
    /// Longitude speed crosses from negative to positive (ends retrograde).
    StationDirect,
}

/// A stationary point event (sidereal longitude speed crosses zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryEvent {
    /// Event time as Julian Day (UT).
    pub jd_ut: f64,
    pub graha: Graha,
    /// Sidereal longitude at station, [0, 360).
    pub longitude_deg: f64,
    /// Latitude at station, when the oracle reports one.
    pub latitude_deg: Option<f64>,
    pub station_type: StationType,
}

/// Configuration for stationary searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryConfig {
    /// Coarse scan step size in days.
    pub step_size_days: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-8, ~0.86 ms).
    pub convergence_days: f64,
}

impl StationaryConfig {
    /// Mercury, Venus, Mars: 1-day step.
    pub fn inner_planet() -> Self {
        Self {
            step_size_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-8,
        }
    }

    /// Jupiter, Saturn and the outer bodies: 2-day step.
    pub fn outer_planet() -> Self {
        Self {
            step_size_days: 2.0,
            ..Self::inner_planet()
        }
    }

    /// Step size suited to the graha's speed.
    pub fn for_graha(graha: Graha) -> Self {
        match graha {
            Graha::Buddh | Graha::Shukra | Graha::Mangal => Self::inner_planet(),
            _ => Self::outer_planet(),
        }
    }

    /// Validate the configuration.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_planet_defaults() {
        let c = StationaryConfig::inner_planet();
        assert!((c.step_size_days - 1.0).abs() < 1e-10);
        assert_eq!(c.max_iterations, 50);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn outer_planet_defaults() {
        let c = StationaryConfig::outer_planet();
        assert!((c.step_size_days - 2.0).abs() < 1e-10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn per_graha_choice() {
        assert_eq!(
            StationaryConfig::for_graha(Graha::Buddh),
            StationaryConfig::inner_planet()
        );
        assert_eq!(
            StationaryConfig::for_graha(Graha::Shani),
            StationaryConfig::outer_planet()
        );
    }

    #[test]
    fn rejects_bad_values() {
        let mut c = StationaryConfig::inner_planet();
        c.step_size_days = -1.0;
        assert!(c.validate().is_err());
        let mut c = StationaryConfig::inner_planet();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
        let mut c = StationaryConfig::inner_planet();
        c.convergence_days = 0.0;
        assert!(c.validate().is_err());
    }
}
