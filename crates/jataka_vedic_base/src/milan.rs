//! Guna Milan (Ashtakoota) compatibility from two Moon positions.
//!
//! Eight kootas scored from the bride's and groom's Moon rashi and
//! nakshatra, 36 points in all. Every koota is a lookup into a table keyed
//! by rashi or nakshatra index; directional kootas (Varna, Gana) read the
//! groom first.

use serde::Serialize;

use crate::dignity::{NaisargikaMaitri, naisargika_maitri};
use crate::error::VedicError;
use crate::graha::rashi_lord_by_index;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};

/// The eight kootas, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

/// Highest attainable total.
pub const MAX_GUNA_POINTS: f64 = 36.0;

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Points this koota is worth (Varna 1 .. Nadi 8).
    pub const fn max_points(self) -> f64 {
        (self as u8 + 1) as f64
    }
}

// ---------------------------------------------------------------------------
// Classifications
// ---------------------------------------------------------------------------

/// Varna of the Moon sign, ranked low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

/// Water signs Brahmin, fire Kshatriya, earth Vaishya, air Shudra.
pub const fn varna_of(rashi_index: u8) -> Varna {
    match rashi_index % 4 {
        0 => Varna::Kshatriya,
        1 => Varna::Vaishya,
        2 => Varna::Shudra,
        _ => Varna::Brahmin,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VashyaClass {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

/// Vashya class of a Moon position.
///
/// Dhanu and Makara change class at 15 degrees.
pub fn vashya_of(rashi_index: u8, degrees_in_rashi: f64) -> VashyaClass {
    let first_half = degrees_in_rashi < 15.0;
    match rashi_index % 12 {
        0 | 1 => VashyaClass::Chatushpada,
        2 | 5 | 6 | 10 => VashyaClass::Manava,
        3 | 11 => VashyaClass::Jalachara,
        4 => VashyaClass::Vanachara,
        7 => VashyaClass::Keeta,
        8 if first_half => VashyaClass::Manava,
        8 => VashyaClass::Chatushpada,
        _ if first_half => VashyaClass::Chatushpada,
        _ => VashyaClass::Jalachara,
    }
}

// Symmetric, indexed by VashyaClass order.
const VASHYA_POINTS: [[f64; 5]; 5] = [
    [2.0, 1.0, 1.0, 0.5, 1.0],
    [1.0, 2.0, 0.5, 0.0, 1.0],
    [1.0, 0.5, 2.0, 1.0, 1.0],
    [0.5, 0.0, 1.0, 2.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 2.0],
];

/// Animal (yoni) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

const NAKSHATRA_YONI: [Yoni; 27] = [
    Yoni::Horse,    // Ashwini
    Yoni::Elephant, // Bharani
    Yoni::Sheep,    // Krittika
    Yoni::Serpent,  // Rohini
    Yoni::Serpent,  // Mrigashira
    Yoni::Dog,      // Ardra
    Yoni::Cat,      // Punarvasu
    Yoni::Sheep,    // Pushya
    Yoni::Cat,      // Ashlesha
    Yoni::Rat,      // Magha
    Yoni::Rat,      // Purva Phalguni
    Yoni::Cow,      // Uttara Phalguni
    Yoni::Buffalo,  // Hasta
    Yoni::Tiger,    // Chitra
    Yoni::Buffalo,  // Swati
    Yoni::Tiger,    // Vishakha
    Yoni::Deer,     // Anuradha
    Yoni::Deer,     // Jyeshtha
    Yoni::Dog,      // Mula
    Yoni::Monkey,   // Purva Ashadha
    Yoni::Mongoose, // Uttara Ashadha
    Yoni::Monkey,   // Shravana
    Yoni::Lion,     // Dhanishtha
    Yoni::Horse,    // Shatabhisha
    Yoni::Lion,     // Purva Bhadrapada
    Yoni::Cow,      // Uttara Bhadrapada
    Yoni::Elephant, // Revati
];

// Symmetric, indexed by Yoni order. Zeros are the sworn-enemy pairs.
const YONI_POINTS: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1],
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1],
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4],
];

pub const fn yoni_of(nakshatra_index: u8) -> Yoni {
    NAKSHATRA_YONI[(nakshatra_index % 27) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

const NAKSHATRA_GANA: [Gana; 27] = {
    use Gana::{Deva as D, Manushya as M, Rakshasa as R};
    [
        D, M, R, M, D, M, D, D, R, R, M, M, D, R, D, R, D, R, R, M, M, D, R, R, M, M, D,
    ]
};

// [groom][bride]
const GANA_POINTS: [[f64; 3]; 3] = [[6.0, 5.0, 1.0], [6.0, 6.0, 0.0], [1.0, 0.0, 6.0]];

pub const fn gana_of(nakshatra_index: u8) -> Gana {
    NAKSHATRA_GANA[(nakshatra_index % 27) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Nadi zig-zags through the nakshatras with period 6.
pub const fn nadi_of(nakshatra_index: u8) -> Nadi {
    match nakshatra_index % 27 % 6 {
        0 | 5 => Nadi::Adi,
        1 | 4 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

// ---------------------------------------------------------------------------
// Per-koota scores
// ---------------------------------------------------------------------------

/// 1 when the groom's varna is not lower than the bride's.
pub fn varna_points(bride_rashi: u8, groom_rashi: u8) -> f64 {
    if varna_of(groom_rashi) >= varna_of(bride_rashi) {
        1.0
    } else {
        0.0
    }
}

pub fn vashya_points(bride: VashyaClass, groom: VashyaClass) -> f64 {
    VASHYA_POINTS[groom as usize][bride as usize]
}

/// Tara (1..=9) counted inclusively from `from` to `to`.
pub const fn tara_number(from_nakshatra: u8, to_nakshatra: u8) -> u8 {
    let count = (to_nakshatra % 27 + 27 - from_nakshatra % 27) % 27;
    count % 9 + 1
}

/// Vipat (3), Pratyari (5) and Naidhana (7) are inauspicious.
pub const fn is_auspicious_tara(tara: u8) -> bool {
    !matches!(tara, 3 | 5 | 7)
}

/// 1.5 for each direction that lands on an auspicious tara.
pub fn tara_points(bride_nakshatra: u8, groom_nakshatra: u8) -> f64 {
    [
        tara_number(bride_nakshatra, groom_nakshatra),
        tara_number(groom_nakshatra, bride_nakshatra),
    ]
    .into_iter()
    .filter(|&t| is_auspicious_tara(t))
    .count() as f64
        * 1.5
}

pub fn yoni_points(bride_nakshatra: u8, groom_nakshatra: u8) -> f64 {
    YONI_POINTS[yoni_of(groom_nakshatra) as usize][yoni_of(bride_nakshatra) as usize] as f64
}

/// Natural friendship of the two Moon-sign lords, read both ways.
pub fn graha_maitri_points(bride_rashi: u8, groom_rashi: u8) -> f64 {
    let (Some(b), Some(g)) = (
        rashi_lord_by_index(bride_rashi % 12),
        rashi_lord_by_index(groom_rashi % 12),
    ) else {
        return 0.0;
    };
    if b == g {
        return 5.0;
    }
    use NaisargikaMaitri::{Enemy, Friend, Neutral};
    match (naisargika_maitri(g, b), naisargika_maitri(b, g)) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    }
}

pub fn gana_points(bride_nakshatra: u8, groom_nakshatra: u8) -> f64 {
    GANA_POINTS[gana_of(groom_nakshatra) as usize][gana_of(bride_nakshatra) as usize]
}

/// 2/12, 5/9 and 6/8 sign relationships between the Moons.
pub const fn is_bhakoot_dosha(bride_rashi: u8, groom_rashi: u8) -> bool {
    let offset = (groom_rashi % 12 + 12 - bride_rashi % 12) % 12;
    matches!(offset, 1 | 11 | 4 | 8 | 5 | 7)
}

pub fn bhakoot_points(bride_rashi: u8, groom_rashi: u8) -> f64 {
    if is_bhakoot_dosha(bride_rashi, groom_rashi) {
        0.0
    } else {
        7.0
    }
}

pub const fn is_nadi_dosha(bride_nakshatra: u8, groom_nakshatra: u8) -> bool {
    nadi_of(bride_nakshatra) as u8 == nadi_of(groom_nakshatra) as u8
}

pub fn nadi_points(bride_nakshatra: u8, groom_nakshatra: u8) -> f64 {
    if is_nadi_dosha(bride_nakshatra, groom_nakshatra) {
        0.0
    } else {
        8.0
    }
}

// ---------------------------------------------------------------------------
// Full match
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KootaScore {
    pub koota: Koota,
    pub points: f64,
    pub max_points: f64,
}

/// Moon placement used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonSign {
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilanResult {
    pub bride: MoonSign,
    pub groom: MoonSign,
    /// One entry per koota in [`ALL_KOOTAS`] order.
    pub kootas: [KootaScore; 8],
    pub total_points: f64,
    pub nadi_dosha: bool,
    pub bhakoot_dosha: bool,
}

impl MilanResult {
    pub fn score(&self, koota: Koota) -> f64 {
        self.kootas[koota as usize].points
    }
}

/// Ashtakoota match from the bride's and groom's sidereal Moon longitudes.
pub fn guna_milan(bride_moon_lon: f64, groom_moon_lon: f64) -> Result<MilanResult, VedicError> {
    if !bride_moon_lon.is_finite() {
        return Err(VedicError::InvalidLongitude("bride Moon longitude"));
    }
    if !groom_moon_lon.is_finite() {
        return Err(VedicError::InvalidLongitude("groom Moon longitude"));
    }
    let (br, gr) = (
        rashi_from_longitude(bride_moon_lon),
        rashi_from_longitude(groom_moon_lon),
    );
    let (bn, gn) = (
        nakshatra_from_longitude(bride_moon_lon),
        nakshatra_from_longitude(groom_moon_lon),
    );
    let (b_rashi, g_rashi) = (br.rashi_index, gr.rashi_index);
    let (b_nak, g_nak) = (bn.nakshatra_index, gn.nakshatra_index);

    let points = [
        varna_points(b_rashi, g_rashi),
        vashya_points(
            vashya_of(b_rashi, br.degrees_in_rashi),
            vashya_of(g_rashi, gr.degrees_in_rashi),
        ),
        tara_points(b_nak, g_nak),
        yoni_points(b_nak, g_nak),
        graha_maitri_points(b_rashi, g_rashi),
        gana_points(b_nak, g_nak),
        bhakoot_points(b_rashi, g_rashi),
        nadi_points(b_nak, g_nak),
    ];
    let kootas = ALL_KOOTAS.map(|koota| KootaScore {
        koota,
        points: points[koota as usize],
        max_points: koota.max_points(),
    });

    Ok(MilanResult {
        bride: MoonSign {
            rashi: br.rashi,
            nakshatra: bn.nakshatra,
            pada: bn.pada,
        },
        groom: MoonSign {
            rashi: gr.rashi,
            nakshatra: gn.nakshatra,
            pada: gn.pada,
        },
        kootas,
        total_points: points.iter().sum(),
        nadi_dosha: is_nadi_dosha(b_nak, g_nak),
        bhakoot_dosha: is_bhakoot_dosha(b_rashi, g_rashi),
    })
}
