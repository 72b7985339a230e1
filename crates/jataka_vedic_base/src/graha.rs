//! Graha (body) identifiers and rashi lordship.
//!
//! The nine classical grahas drive every calculation in this crate. The three
//! outer bodies are accepted in charts and divisional mapping, but carry no
//! lordship, combustion orb or war participation.

use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};

/// Bodies a chart may contain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Graha {
    #[serde(alias = "sun")]
    Surya,
    #[serde(alias = "moon")]
    Chandra,
    #[serde(alias = "mars")]
    Mangal,
    #[serde(alias = "mercury")]
    Buddh,
    #[serde(alias = "jupiter")]
    Guru,
    #[serde(alias = "venus")]
    Shukra,
    #[serde(alias = "saturn")]
    Shani,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
}

/// The 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Modern outer bodies.
pub const OUTER_GRAHAS: [Graha; 3] = [Graha::Uranus, Graha::Neptune, Graha::Pluto];

/// Every supported body, navagraha first.
pub const ALL_BODIES: [Graha; 12] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
    Graha::Uranus,
    Graha::Neptune,
    Graha::Pluto,
];

/// Grahas that can take part in a planetary war (graha yuddha).
pub const WAR_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Stable identifier, also used as the serde name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "surya",
            Self::Chandra => "chandra",
            Self::Mangal => "mangal",
            Self::Buddh => "buddh",
            Self::Guru => "guru",
            Self::Shukra => "shukra",
            Self::Shani => "shani",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
            Self::Uranus => 9,
            Self::Neptune => 10,
            Self::Pluto => 11,
        }
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Sun or Moon.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Surya | Self::Chandra)
    }

    /// Uranus, Neptune or Pluto.
    pub const fn is_outer(self) -> bool {
        matches!(self, Self::Uranus | Self::Neptune | Self::Pluto)
    }

    /// Whether the graha participates in graha yuddha.
    pub const fn is_war_capable(self) -> bool {
        matches!(
            self,
            Self::Mangal | Self::Buddh | Self::Guru | Self::Shukra | Self::Shani
        )
    }

    /// Parse a stable identifier or English name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Graha> {
        let lower = name.trim().to_ascii_lowercase();
        ALL_BODIES
            .into_iter()
            .find(|g| g.name() == lower || g.english_name().eq_ignore_ascii_case(&lower))
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Lord of a rashi by 0-based index. Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    ALL_RASHIS.get(rashi_index as usize).map(|&r| rashi_lord(r))
}

/// Compute the n-th rashi from a given rashi (0-based index, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 12)` = 11.
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_indices_sequential() {
        for (i, g) in ALL_BODIES.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn war_grahas_match_predicate() {
        for g in ALL_BODIES {
            assert_eq!(g.is_war_capable(), WAR_GRAHAS.contains(&g), "{g:?}");
        }
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_index_bounds() {
        assert_eq!(rashi_lord_by_index(4), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_index(11), Some(Graha::Guru));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn nth_rashi_wrap() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(0, 12), 11);
        // 8th from Mesha is Vrischika
        assert_eq!(nth_rashi_from(0, 8), 7);
    }

    #[test]
    fn from_name_accepts_both_forms() {
        assert_eq!(Graha::from_name("Mars"), Some(Graha::Mangal));
        assert_eq!(Graha::from_name("shukra"), Some(Graha::Shukra));
        assert_eq!(Graha::from_name(" PLUTO "), Some(Graha::Pluto));
        assert_eq!(Graha::from_name("vulcan"), None);
    }

    #[test]
    fn serde_identifiers_are_stable() {
        let json = serde_json::to_string(&Graha::Buddh).unwrap();
        assert_eq!(json, "\"buddh\"");
        let back: Graha = serde_json::from_str("\"mercury\"").unwrap();
        assert_eq!(back, Graha::Buddh);
    }
}
