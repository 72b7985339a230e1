//! Body positions and the natal chart they belong to.
//!
//! A [`BodyPosition`] keeps its sign, nakshatra and house private and
//! derives them from the longitude at construction, so they can never drift
//! apart. Relocating a body (as divisional charts do) yields a new value.

use serde::{Deserialize, Serialize};

use crate::bhava::house_from_rashi;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::{degrees_in_rashi, rashi_index_of};
use crate::util::{angular_distance, normalize_360};

/// Raw per-body state as returned by an ephemeris.
///
/// Longitude is sidereal and may be un-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticState {
    pub longitude_deg: f64,
    #[serde(default)]
    pub latitude_deg: Option<f64>,
    #[serde(default)]
    pub distance_au: Option<f64>,
    /// Signed daily motion; negative means apparent retrograde.
    #[serde(default)]
    pub speed_deg_per_day: f64,
}

impl EclipticState {
    /// State with longitude and speed only.
    pub fn new(longitude_deg: f64, speed_deg_per_day: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg: None,
            distance_au: None,
            speed_deg_per_day,
        }
    }

    pub fn with_latitude(mut self, latitude_deg: f64) -> Self {
        self.latitude_deg = Some(latitude_deg);
        self
    }
}

/// One body's snapshot with its derived sign, nakshatra and house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    graha: Graha,
    longitude_deg: f64,
    latitude_deg: Option<f64>,
    distance_au: Option<f64>,
    speed_deg_per_day: f64,
    rashi_index: u8,
    degrees_in_rashi: f64,
    nakshatra_index: u8,
    pada: u8,
    house: u8,
}

impl BodyPosition {
    /// Build a position and derive all fields relative to `asc_rashi`.
    pub fn new(graha: Graha, state: &EclipticState, asc_rashi: u8) -> Self {
        let longitude_deg = normalize_360(state.longitude_deg);
        let rashi_index = rashi_index_of(longitude_deg);
        let nak = nakshatra_from_longitude(longitude_deg);
        Self {
            graha,
            longitude_deg,
            latitude_deg: state.latitude_deg,
            distance_au: state.distance_au,
            speed_deg_per_day: state.speed_deg_per_day,
            rashi_index,
            degrees_in_rashi: degrees_in_rashi(longitude_deg),
            nakshatra_index: nak.nakshatra_index,
            pada: nak.pada,
            house: house_from_rashi(rashi_index, asc_rashi),
        }
    }

    /// Same body at a new longitude and ascendant sign, with all fields re-derived.
    ///
    /// Latitude, distance and speed carry over unchanged.
    pub fn relocated(&self, longitude_deg: f64, asc_rashi: u8) -> Self {
        let state = EclipticState {
            longitude_deg,
            latitude_deg: self.latitude_deg,
            distance_au: self.distance_au,
            speed_deg_per_day: self.speed_deg_per_day,
        };
        Self::new(self.graha, &state, asc_rashi)
    }

    pub fn graha(&self) -> Graha {
        self.graha
    }

    /// Sidereal longitude in [0, 360).
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_deg(&self) -> Option<f64> {
        self.latitude_deg
    }

    pub fn distance_au(&self) -> Option<f64> {
        self.distance_au
    }

    pub fn speed_deg_per_day(&self) -> f64 {
        self.speed_deg_per_day
    }

    pub fn rashi_index(&self) -> u8 {
        self.rashi_index
    }

    pub fn degrees_in_rashi(&self) -> f64 {
        self.degrees_in_rashi
    }

    pub fn nakshatra_index(&self) -> u8 {
        self.nakshatra_index
    }

    /// Pada 1-4.
    pub fn pada(&self) -> u8 {
        self.pada
    }

    /// Whole-sign house 1-12.
    pub fn house(&self) -> u8 {
        self.house
    }
}

/// House system the cusps were computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    WholeSign,
    Equal,
    Placidus,
    Sripati,
}

/// Instant, location and house system of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMeta {
    /// Julian Day (UT) of the chart instant.
    pub jd_ut: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub house_system: HouseSystem,
}

/// Tolerance for the first cusp coinciding with the ascendant.
const CUSP_TOLERANCE_DEG: f64 = 1e-6;

/// Ascendant, one position per body, 12 cusps and metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    ascendant_deg: f64,
    positions: Vec<BodyPosition>,
    house_cusps_deg: [f64; 12],
    meta: ChartMeta,
}

/// Whole-sign cusps: the start of each sign from the ascendant's sign.
pub fn whole_sign_cusps(ascendant_deg: f64) -> [f64; 12] {
    let asc_rashi = rashi_index_of(ascendant_deg);
    std::array::from_fn(|i| ((asc_rashi as usize + i) % 12) as f64 * 30.0)
}

impl NatalChart {
    /// Validate and assemble a chart.
    ///
    /// Bodies keep the order given. `cusps = None` derives whole-sign cusps.
    pub fn new(
        ascendant_deg: f64,
        states: &[(Graha, EclipticState)],
        cusps: Option<[f64; 12]>,
        meta: ChartMeta,
    ) -> Result<Self, VedicError> {
        if !ascendant_deg.is_finite() {
            return Err(VedicError::InvalidLongitude("ascendant"));
        }
        let ascendant_deg = normalize_360(ascendant_deg);
        let asc_rashi = rashi_index_of(ascendant_deg);

        let mut positions: Vec<BodyPosition> = Vec::with_capacity(states.len());
        for (graha, state) in states {
            if !state.longitude_deg.is_finite() {
                return Err(VedicError::InvalidLongitude(graha.name()));
            }
            if positions.iter().any(|p| p.graha == *graha) {
                return Err(VedicError::DuplicateGraha(*graha));
            }
            positions.push(BodyPosition::new(*graha, state, asc_rashi));
        }

        let derived = whole_sign_cusps(ascendant_deg);
        let house_cusps_deg = match cusps {
            None => derived,
            Some(c) => {
                let c = c.map(normalize_360);
                let consistent = match meta.house_system {
                    HouseSystem::WholeSign => c
                        .iter()
                        .zip(derived.iter())
                        .all(|(a, b)| angular_distance(*a, *b) <= CUSP_TOLERANCE_DEG),
                    _ => angular_distance(c[0], ascendant_deg) <= CUSP_TOLERANCE_DEG,
                };
                if !consistent {
                    return Err(VedicError::InconsistentCusps);
                }
                c
            }
        };

        Ok(Self {
            ascendant_deg,
            positions,
            house_cusps_deg,
            meta,
        })
    }

    /// Ascendant longitude in [0, 360).
    pub fn ascendant_deg(&self) -> f64 {
        self.ascendant_deg
    }

    pub fn ascendant_rashi(&self) -> u8 {
        rashi_index_of(self.ascendant_deg)
    }

    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    pub fn position(&self, graha: Graha) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }

    pub fn house_cusps_deg(&self) -> &[f64; 12] {
        &self.house_cusps_deg
    }

    pub fn meta(&self) -> &ChartMeta {
        &self.meta
    }
}
