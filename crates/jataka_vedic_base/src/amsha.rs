//! Amsha (divisional chart) longitude mapping for the 16 Shodashavarga schemes.
//!
//! Each scheme splits the 30-degree rashi into parts, sends each part to a
//! target rashi, and rescales the position inside the part back to 0-30
//! degrees in that target. Fourteen schemes use N equal parts with a
//! starting-sign rule. Hora (D2) and Trimshamsha (D30) use explicit
//! per-parity interval tables. Both paths share [`rescale_in_part`].

use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{
    Modality, RashiElement, RashiInfo, is_odd_rashi, rashi_element, rashi_from_longitude,
    rashi_index_of, rashi_modality, rashi_position_to_longitude,
};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Amsha enum
// ---------------------------------------------------------------------------

/// The 16 supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Amsha {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// Shodashavarga: all 16 schemes in ascending division order.
pub const SHODASHAVARGA: [Amsha; 16] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D7,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D27,
    Amsha::D30,
    Amsha::D40,
    Amsha::D45,
    Amsha::D60,
];

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Stable identifier ("d9").
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "d1",
            Self::D2 => "d2",
            Self::D3 => "d3",
            Self::D4 => "d4",
            Self::D7 => "d7",
            Self::D9 => "d9",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D16 => "d16",
            Self::D20 => "d20",
            Self::D24 => "d24",
            Self::D27 => "d27",
            Self::D30 => "d30",
            Self::D40 => "d40",
            Self::D45 => "d45",
            Self::D60 => "d60",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Saptavimshamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// 0-based index into [`SHODASHAVARGA`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Reverse lookup from the division count.
    ///
    /// Any other count is a caller error.
    pub fn from_code(code: u16) -> Result<Amsha, VedicError> {
        SHODASHAVARGA
            .into_iter()
            .find(|a| a.divisions() == code)
            .ok_or(VedicError::UnsupportedDivision(code))
    }

    /// Mapping rule for this scheme.
    pub const fn rule(self) -> AmshaRule {
        use SignStart::{Absolute as Abs, Relative as Rel};
        match self {
            Self::D1 => AmshaRule::Identity,
            Self::D2 => AmshaRule::Segments(&HORA_SEGMENTS),
            Self::D3 => AmshaRule::Stepped { step: 4 },
            Self::D4 => AmshaRule::Stepped { step: 3 },
            Self::D7 => AmshaRule::ByParity {
                odd: Rel(0),
                even: Rel(6),
            },
            Self::D9 => AmshaRule::ByModality([Rel(0), Rel(8), Rel(4)]),
            Self::D10 => AmshaRule::ByParity {
                odd: Rel(0),
                even: Rel(8),
            },
            Self::D12 => AmshaRule::Stepped { step: 1 },
            Self::D16 => AmshaRule::ByModality([Abs(0), Abs(4), Abs(8)]),
            Self::D20 => AmshaRule::ByModality([Abs(0), Abs(8), Abs(4)]),
            Self::D24 => AmshaRule::ByParity {
                odd: Abs(4),
                even: Abs(3),
            },
            Self::D27 => AmshaRule::ByElement([Abs(0), Abs(3), Abs(6), Abs(9)]),
            Self::D30 => AmshaRule::Segments(&TRIMSHAMSHA_SEGMENTS),
            Self::D40 => AmshaRule::ByParity {
                odd: Abs(0),
                even: Abs(6),
            },
            Self::D45 => AmshaRule::ByModality([Abs(0), Abs(4), Abs(8)]),
            Self::D60 => AmshaRule::ByParity {
                odd: Rel(0),
                even: Rel(6),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Where the first part of a sign lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignStart {
    /// Natal sign plus an offset.
    Relative(u8),
    /// A fixed rashi index regardless of the natal sign.
    Absolute(u8),
}

impl SignStart {
    const fn resolve(self, rashi_index: u8) -> u8 {
        match self {
            Self::Relative(offset) => (rashi_index + offset) % 12,
            Self::Absolute(sign) => sign % 12,
        }
    }
}

/// One unequal part of a sign: `[start_deg, end_deg)` maps to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_deg: f64,
    pub end_deg: f64,
    pub target: u8,
}

const fn seg(start_deg: f64, end_deg: f64, target: u8) -> Segment {
    Segment {
        start_deg,
        end_deg,
        target,
    }
}

/// Ordered interval tables for odd and even signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentTable {
    pub odd: &'static [Segment],
    pub even: &'static [Segment],
}

/// Hora: only Simha (Sun hora) and Karka (Moon hora) are reachable.
pub const HORA_SEGMENTS: SegmentTable = SegmentTable {
    odd: &[seg(0.0, 15.0, 4), seg(15.0, 30.0, 3)],
    even: &[seg(0.0, 15.0, 3), seg(15.0, 30.0, 4)],
};

/// Trimshamsha: odd signs Mars, Saturn, Jupiter, Mercury, Venus;
/// even signs in the mirrored order.
pub const TRIMSHAMSHA_SEGMENTS: SegmentTable = SegmentTable {
    odd: &[
        seg(0.0, 5.0, 0),
        seg(5.0, 10.0, 10),
        seg(10.0, 18.0, 8),
        seg(18.0, 25.0, 2),
        seg(25.0, 30.0, 1),
    ],
    even: &[
        seg(0.0, 5.0, 1),
        seg(5.0, 12.0, 5),
        seg(12.0, 20.0, 11),
        seg(20.0, 25.0, 9),
        seg(25.0, 30.0, 7),
    ],
};

/// Target-sign rule of a scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmshaRule {
    /// No remapping.
    Identity,
    /// `sign + step * part`.
    Stepped { step: u8 },
    /// Start by sign parity, then `start + part`.
    ByParity { odd: SignStart, even: SignStart },
    /// Start by movable/fixed/dual, then `start + part`.
    ByModality([SignStart; 3]),
    /// Start by fire/earth/air/water, then `start + part`.
    ByElement([SignStart; 4]),
    /// Unequal interval table.
    Segments(&'static SegmentTable),
}

// ---------------------------------------------------------------------------
// Core mapping
// ---------------------------------------------------------------------------

/// Position of a longitude inside an amsha chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmshaPosition {
    /// Target rashi index.
    pub rashi_index: u8,
    /// Rescaled degrees in the target rashi, [0, 30).
    pub degrees_in_rashi: f64,
    /// 0-based part (or segment) the natal degree fell into.
    pub part_index: u16,
}

impl AmshaPosition {
    /// Absolute longitude in the amsha chart, [0, 360).
    pub fn longitude(&self) -> f64 {
        rashi_position_to_longitude(self.rashi_index, self.degrees_in_rashi)
    }
}

/// Map a position inside a part of width `width` starting at `start` onto 0-30.
pub fn rescale_in_part(deg_in_rashi: f64, start: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    ((deg_in_rashi - start) / width * 30.0).clamp(0.0, MAX_DEG_IN_RASHI)
}

// Largest representable degree strictly below a sign boundary after rescaling.
const MAX_DEG_IN_RASHI: f64 = 30.0 - 1e-12;

fn segment_for(segments: &[Segment], deg_in_rashi: f64) -> (usize, Segment) {
    let last = segments.len().saturating_sub(1);
    let idx = segments
        .iter()
        .position(|s| deg_in_rashi < s.end_deg)
        .unwrap_or(last);
    (idx, segments[idx])
}

fn start_sign(rule: AmshaRule, rashi_index: u8) -> u8 {
    match rule {
        AmshaRule::ByParity { odd, even } => {
            if is_odd_rashi(rashi_index) {
                odd.resolve(rashi_index)
            } else {
                even.resolve(rashi_index)
            }
        }
        AmshaRule::ByModality(starts) => {
            let m = match rashi_modality(rashi_index) {
                Modality::Movable => 0,
                Modality::Fixed => 1,
                Modality::Dual => 2,
            };
            starts[m].resolve(rashi_index)
        }
        AmshaRule::ByElement(starts) => {
            let e = match rashi_element(rashi_index) {
                RashiElement::Fire => 0,
                RashiElement::Earth => 1,
                RashiElement::Air => 2,
                RashiElement::Water => 3,
            };
            starts[e].resolve(rashi_index)
        }
        AmshaRule::Identity | AmshaRule::Stepped { .. } | AmshaRule::Segments(_) => rashi_index,
    }
}

/// Full amsha position of a sidereal longitude.
pub fn amsha_position(sidereal_lon: f64, amsha: Amsha) -> AmshaPosition {
    let lon = normalize_360(sidereal_lon);
    let rashi_idx = rashi_index_of(lon);
    let deg = (lon - rashi_idx as f64 * 30.0).clamp(0.0, MAX_DEG_IN_RASHI);
    let rule = amsha.rule();

    match rule {
        AmshaRule::Identity => AmshaPosition {
            rashi_index: rashi_idx,
            degrees_in_rashi: deg,
            part_index: 0,
        },
        AmshaRule::Segments(table) => {
            let segments = if is_odd_rashi(rashi_idx) {
                table.odd
            } else {
                table.even
            };
            let (idx, s) = segment_for(segments, deg);
            AmshaPosition {
                rashi_index: s.target % 12,
                degrees_in_rashi: rescale_in_part(deg, s.start_deg, s.end_deg - s.start_deg),
                part_index: idx as u16,
            }
        }
        _ => {
            let n = amsha.divisions();
            let part_size = 30.0 / n as f64;
            let part = ((deg / part_size).floor() as u16).min(n - 1);
            let target = match rule {
                AmshaRule::Stepped { step } => (rashi_idx as u16 + step as u16 * part) % 12,
                _ => (start_sign(rule, rashi_idx) as u16 + part) % 12,
            };
            AmshaPosition {
                rashi_index: target as u8,
                degrees_in_rashi: rescale_in_part(deg, part as f64 * part_size, part_size),
                part_index: part,
            }
        }
    }
}

/// Transform a sidereal longitude through an amsha. Result in [0, 360).
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha) -> f64 {
    amsha_position(sidereal_lon, amsha).longitude()
}

/// Transform and return the full rashi breakdown.
pub fn amsha_rashi_info(sidereal_lon: f64, amsha: Amsha) -> RashiInfo {
    rashi_from_longitude(amsha_longitude(sidereal_lon, amsha))
}

/// Transform from a rashi position instead of an absolute longitude.
pub fn amsha_from_rashi_position(
    rashi_index: u8,
    degrees_in_rashi: f64,
    amsha: Amsha,
) -> RashiInfo {
    amsha_rashi_info(
        rashi_position_to_longitude(rashi_index, degrees_in_rashi),
        amsha,
    )
}

/// Batch: one longitude through several amshas.
pub fn amsha_longitudes(sidereal_lon: f64, amshas: &[Amsha]) -> Vec<f64> {
    amshas
        .iter()
        .map(|&a| amsha_longitude(sidereal_lon, a))
        .collect()
}

/// Batch: one longitude through several amshas, as rashi breakdowns.
pub fn amsha_rashi_infos(sidereal_lon: f64, amshas: &[Amsha]) -> Vec<RashiInfo> {
    amshas
        .iter()
        .map(|&a| amsha_rashi_info(sidereal_lon, a))
        .collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
