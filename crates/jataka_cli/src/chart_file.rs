//! JSON chart files and TOML condition configs.
//!
//! ```json
//! {
//!   "ascendant_deg": 15.0,
//!   "bodies": [
//!     { "graha": "surya", "longitude_deg": 123.4, "speed_deg_per_day": 1.0 },
//!     { "graha": "shukra", "longitude_deg": 110.2, "latitude_deg": -1.1,
//!       "speed_deg_per_day": 1.2 }
//!   ],
//!   "meta": { "jd_ut": 2451545.0, "house_system": "whole_sign" }
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use jataka_vedic_base::{ChartMeta, ConditionConfig, EclipticState, Graha, NatalChart};

#[derive(Debug, Deserialize)]
pub struct BodyEntry {
    pub graha: Graha,
    #[serde(flatten)]
    pub state: EclipticState,
}

#[derive(Debug, Deserialize)]
pub struct ChartFile {
    pub ascendant_deg: f64,
    pub bodies: Vec<BodyEntry>,
    #[serde(default)]
    pub cusps_deg: Option<[f64; 12]>,
    #[serde(default)]
    pub meta: ChartMeta,
}

impl ChartFile {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed chart JSON")
    }

    pub fn into_chart(self) -> Result<NatalChart> {
        let states: Vec<(Graha, EclipticState)> =
            self.bodies.into_iter().map(|b| (b.graha, b.state)).collect();
        Ok(NatalChart::new(
            self.ascendant_deg,
            &states,
            self.cusps_deg,
            self.meta,
        )?)
    }
}

pub fn load_chart(path: &Path) -> Result<NatalChart> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartFile::parse(&text)?
        .into_chart()
        .with_context(|| format!("invalid chart in {}", path.display()))
}

/// Missing keys keep their defaults.
pub fn parse_condition_config(text: &str) -> Result<ConditionConfig> {
    let cfg: ConditionConfig = toml::from_str(text).context("malformed condition config")?;
    Ok(cfg.checked()?)
}

pub fn load_condition_config(path: Option<&Path>) -> Result<ConditionConfig> {
    match path {
        None => Ok(ConditionConfig::default()),
        Some(p) => {
            let text =
                fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            parse_condition_config(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_vedic_base::{HouseSystem, VedicError};

    const SAMPLE: &str = r#"{
        "ascendant_deg": 15.0,
        "bodies": [
            { "graha": "surya", "longitude_deg": 123.4, "speed_deg_per_day": 1.0 },
            { "graha": "venus", "longitude_deg": 370.0, "latitude_deg": -1.1,
              "speed_deg_per_day": 1.2 }
        ],
        "meta": { "jd_ut": 2451545.0, "house_system": "equal" }
    }"#;

    #[test]
    fn parses_sample_chart() {
        let chart = ChartFile::parse(SAMPLE).unwrap().into_chart().unwrap();
        assert_eq!(chart.positions().len(), 2);
        let shukra = chart.position(Graha::Shukra).unwrap();
        // 370 -> 10, Mesha; ascendant Mesha -> house 1
        assert!((shukra.longitude_deg() - 10.0).abs() < 1e-12);
        assert_eq!(shukra.house(), 1);
        assert_eq!(shukra.latitude_deg(), Some(-1.1));
        assert_eq!(chart.meta().house_system, HouseSystem::Equal);
    }

    #[test]
    fn duplicate_body_rejected() {
        let text = r#"{ "ascendant_deg": 0.0, "bodies": [
            { "graha": "guru", "longitude_deg": 1.0 },
            { "graha": "jupiter", "longitude_deg": 2.0 }
        ] }"#;
        assert!(ChartFile::parse(text).unwrap().into_chart().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = parse_condition_config("war_orb_deg = 1.5\n[brightness]\nshani = 6\n").unwrap();
        assert_eq!(cfg.war_orb_deg, 1.5);
        assert_eq!(cfg.brightness.shani, 6);
        assert_eq!(cfg.brightness.shukra, 5);
        assert_eq!(cfg.approach_factor, ConditionConfig::default().approach_factor);
    }

    #[test]
    fn invalid_toml_values_rejected() {
        let err = parse_condition_config("approach_factor = 0.5").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VedicError>(),
            Some(VedicError::InvalidConfig(_))
        ));
    }
}
