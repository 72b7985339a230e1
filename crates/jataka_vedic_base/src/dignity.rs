//! Dignity and relationship tables for the sapta grahas.
//!
//! Exaltation, moolatrikona and own-sign data live in one table keyed by
//! graha, as do the natural friend and enemy sets. Rahu, Ketu and the outer
//! bodies have no entry and resolve to neutral results everywhere.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_index_of};
use crate::util::normalize_360;

/// Static dignity data for one classical graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DignityEntry {
    /// Exact exaltation point, sidereal degrees.
    pub exaltation_deg: f64,
    /// Moolatrikona sign with its `[start, end)` degree range inside that sign.
    pub moolatrikona: (Rashi, f64, f64),
    /// Signs the graha rules.
    pub own_signs: &'static [Rashi],
    /// Natural friends.
    pub friends: &'static [Graha],
    /// Natural enemies. Everything else is neutral.
    pub enemies: &'static [Graha],
}

// Indexed by Graha::index() for the seven classical grahas.
const DIGNITY_TABLE: [DignityEntry; 7] = [
    // Surya: exalted 10 Mesha, MT 0-20 Simha
    DignityEntry {
        exaltation_deg: 10.0,
        moolatrikona: (Rashi::Simha, 0.0, 20.0),
        own_signs: &[Rashi::Simha],
        friends: &[Graha::Chandra, Graha::Mangal, Graha::Guru],
        enemies: &[Graha::Shukra, Graha::Shani],
    },
    // Chandra: exalted 3 Vrishabha, MT 4-20 Vrishabha
    DignityEntry {
        exaltation_deg: 33.0,
        moolatrikona: (Rashi::Vrishabha, 4.0, 20.0),
        own_signs: &[Rashi::Karka],
        friends: &[Graha::Surya, Graha::Buddh],
        enemies: &[],
    },
    // Mangal: exalted 28 Makara, MT 0-12 Mesha
    DignityEntry {
        exaltation_deg: 298.0,
        moolatrikona: (Rashi::Mesha, 0.0, 12.0),
        own_signs: &[Rashi::Mesha, Rashi::Vrischika],
        friends: &[Graha::Surya, Graha::Chandra, Graha::Guru],
        enemies: &[Graha::Buddh],
    },
    // Buddh: exalted 15 Kanya, MT 16-20 Kanya
    DignityEntry {
        exaltation_deg: 165.0,
        moolatrikona: (Rashi::Kanya, 16.0, 20.0),
        own_signs: &[Rashi::Mithuna, Rashi::Kanya],
        friends: &[Graha::Surya, Graha::Shukra],
        enemies: &[Graha::Chandra],
    },
    // Guru: exalted 5 Karka, MT 0-10 Dhanu
    DignityEntry {
        exaltation_deg: 95.0,
        moolatrikona: (Rashi::Dhanu, 0.0, 10.0),
        own_signs: &[Rashi::Dhanu, Rashi::Meena],
        friends: &[Graha::Surya, Graha::Chandra, Graha::Mangal],
        enemies: &[Graha::Buddh, Graha::Shukra],
    },
    // Shukra: exalted 27 Meena, MT 0-15 Tula
    DignityEntry {
        exaltation_deg: 357.0,
        moolatrikona: (Rashi::Tula, 0.0, 15.0),
        own_signs: &[Rashi::Vrishabha, Rashi::Tula],
        friends: &[Graha::Buddh, Graha::Shani],
        enemies: &[Graha::Surya, Graha::Chandra],
    },
    // Shani: exalted 20 Tula, MT 0-20 Kumbha
    DignityEntry {
        exaltation_deg: 200.0,
        moolatrikona: (Rashi::Kumbha, 0.0, 20.0),
        own_signs: &[Rashi::Makara, Rashi::Kumbha],
        friends: &[Graha::Buddh, Graha::Shukra],
        enemies: &[Graha::Surya, Graha::Chandra, Graha::Mangal],
    },
];

/// Dignity data for a classical graha, `None` for nodes and outer bodies.
pub fn dignity_entry(graha: Graha) -> Option<&'static DignityEntry> {
    if graha.is_node() || graha.is_outer() {
        return None;
    }
    DIGNITY_TABLE.get(graha.index() as usize)
}

/// Exaltation degree (sidereal). `None` for Rahu, Ketu and outer bodies.
pub fn exaltation_degree(graha: Graha) -> Option<f64> {
    dignity_entry(graha).map(|e| e.exaltation_deg)
}

/// Debilitation degree, always opposite the exaltation point.
pub fn debilitation_degree(graha: Graha) -> Option<f64> {
    exaltation_degree(graha).map(|e| normalize_360(e + 180.0))
}

/// Moolatrikona sign and `[start, end)` degrees within it.
pub fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    dignity_entry(graha).map(|e| e.moolatrikona)
}

/// Signs ruled by the graha. Empty for nodes and outer bodies.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    dignity_entry(graha).map_or(&[], |e| e.own_signs)
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

/// Natural (naisargika) relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural friendship of `graha` toward `other`. Not symmetric.
pub fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    let Some(entry) = dignity_entry(graha) else {
        return NaisargikaMaitri::Neutral;
    };
    if entry.friends.contains(&other) {
        NaisargikaMaitri::Friend
    } else if entry.enemies.contains(&other) {
        NaisargikaMaitri::Enemy
    } else {
        NaisargikaMaitri::Neutral
    }
}

/// Temporal (tatkalika) relationship from current sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TatkalikaMaitri {
    Friend,
    Enemy,
}

/// Friend if `other` sits 2nd, 3rd, 4th, 10th, 11th or 12th from `graha`.
pub fn tatkalika_maitri(graha_rashi_idx: u8, other_rashi_idx: u8) -> TatkalikaMaitri {
    let offset = (other_rashi_idx % 12 + 12 - graha_rashi_idx % 12) % 12;
    match offset {
        1 | 2 | 3 | 9 | 10 | 11 => TatkalikaMaitri::Friend,
        _ => TatkalikaMaitri::Enemy,
    }
}

/// Five-fold compound (panchadha) relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanchadhaMaitri {
    AdhiShatru,
    Shatru,
    Sama,
    Mitra,
    AdhiMitra,
}

pub const fn panchadha_maitri(
    naisargika: NaisargikaMaitri,
    tatkalika: TatkalikaMaitri,
) -> PanchadhaMaitri {
    use NaisargikaMaitri as N;
    use PanchadhaMaitri as P;
    use TatkalikaMaitri as T;

    match (naisargika, tatkalika) {
        (N::Friend, T::Friend) => P::AdhiMitra,
        (N::Friend, T::Enemy) | (N::Enemy, T::Friend) => P::Sama,
        (N::Neutral, T::Friend) => P::Mitra,
        (N::Neutral, T::Enemy) => P::Shatru,
        (N::Enemy, T::Enemy) => P::AdhiShatru,
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Dignity of a graha at a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
    Debilitated,
}

impl From<PanchadhaMaitri> for Dignity {
    fn from(p: PanchadhaMaitri) -> Self {
        match p {
            PanchadhaMaitri::AdhiMitra => Dignity::AdhiMitra,
            PanchadhaMaitri::Mitra => Dignity::Mitra,
            PanchadhaMaitri::Sama => Dignity::Sama,
            PanchadhaMaitri::Shatru => Dignity::Shatru,
            PanchadhaMaitri::AdhiShatru => Dignity::AdhiShatru,
        }
    }
}

/// Sign-level dignity that does not depend on relationships.
fn fixed_dignity(entry: &DignityEntry, lon: f64) -> Option<Dignity> {
    let rashi = rashi_index_of(lon);
    let exalt_rashi = rashi_index_of(entry.exaltation_deg);
    if rashi == exalt_rashi {
        return Some(Dignity::Exalted);
    }
    if rashi == (exalt_rashi + 6) % 12 {
        return Some(Dignity::Debilitated);
    }
    let (mt_rashi, start, end) = entry.moolatrikona;
    let deg = normalize_360(lon) - rashi as f64 * 30.0;
    if rashi == mt_rashi.index() && deg >= start && deg < end {
        return Some(Dignity::Moolatrikona);
    }
    if entry.own_signs.iter().any(|r| r.index() == rashi) {
        return Some(Dignity::OwnSign);
    }
    None
}

/// Natural-only dignity.
///
/// Priority: exalted > debilitated > moolatrikona > own sign > natural
/// relationship with the sign lord. Nodes and outer bodies are always Sama.
pub fn dignity_in_rashi(graha: Graha, sidereal_lon: f64) -> Dignity {
    let Some(entry) = dignity_entry(graha) else {
        return Dignity::Sama;
    };
    if let Some(d) = fixed_dignity(entry, sidereal_lon) {
        return d;
    }
    let lord = rashi_lord(Rashi::from_index(rashi_index_of(sidereal_lon)));
    match naisargika_maitri(graha, lord) {
        NaisargikaMaitri::Friend => Dignity::Mitra,
        NaisargikaMaitri::Enemy => Dignity::Shatru,
        NaisargikaMaitri::Neutral => Dignity::Sama,
    }
}

/// Compound dignity using the current signs of the seven classical grahas.
///
/// `sapta_rashis` is indexed by `Graha::index()` (Surya..Shani).
pub fn dignity_in_rashi_with_positions(
    graha: Graha,
    sidereal_lon: f64,
    sapta_rashis: &[u8; 7],
) -> Dignity {
    let Some(entry) = dignity_entry(graha) else {
        return Dignity::Sama;
    };
    if let Some(d) = fixed_dignity(entry, sidereal_lon) {
        return d;
    }
    let lord = rashi_lord(Rashi::from_index(rashi_index_of(sidereal_lon)));
    let nais = naisargika_maitri(graha, lord);
    let tatk = tatkalika_maitri(
        sapta_rashis[graha.index() as usize],
        sapta_rashis[lord.index() as usize],
    );
    panchadha_maitri(nais, tatk).into()
}

// ---------------------------------------------------------------------------
// Benefic / malefic
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Moon, Mercury, Jupiter and Venus are benefic; everything else malefic.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        _ => BeneficNature::Malefic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_BODIES, SAPTA_GRAHAS};

    #[test]
    fn table_order_matches_graha_index() {
        // Each graha rules the sign it holds as moolatrikona
        for g in SAPTA_GRAHAS {
            let e = dignity_entry(g).unwrap();
            let mt = e.moolatrikona.0;
            assert!(
                e.own_signs.contains(&mt) || g == Graha::Chandra,
                "{g:?}"
            );
        }
        assert_eq!(exaltation_degree(Graha::Surya), Some(10.0));
        assert_eq!(exaltation_degree(Graha::Buddh), Some(165.0));
        assert_eq!(exaltation_degree(Graha::Shani), Some(200.0));
    }

    #[test]
    fn nodes_and_outers_have_no_entry() {
        for g in [Graha::Rahu, Graha::Ketu, Graha::Uranus, Graha::Pluto] {
            assert!(dignity_entry(g).is_none());
            assert!(own_signs(g).is_empty());
            assert_eq!(dignity_in_rashi(g, 10.0), Dignity::Sama);
        }
    }

    #[test]
    fn debilitation_wraps() {
        // Shukra 357 + 180 = 537 -> 177
        assert_eq!(debilitation_degree(Graha::Shukra), Some(177.0));
        assert_eq!(debilitation_degree(Graha::Surya), Some(190.0));
    }

    #[test]
    fn natural_friendship_is_asymmetric() {
        // Chandra has no enemies but Buddh treats Chandra as enemy
        assert_eq!(
            naisargika_maitri(Graha::Chandra, Graha::Buddh),
            NaisargikaMaitri::Friend
        );
        assert_eq!(
            naisargika_maitri(Graha::Buddh, Graha::Chandra),
            NaisargikaMaitri::Enemy
        );
        for g in SAPTA_GRAHAS {
            assert_ne!(naisargika_maitri(Graha::Chandra, g), NaisargikaMaitri::Enemy);
        }
    }

    #[test]
    fn tatkalika_offsets() {
        assert_eq!(tatkalika_maitri(0, 1), TatkalikaMaitri::Friend); // 2nd
        assert_eq!(tatkalika_maitri(0, 0), TatkalikaMaitri::Enemy); // same sign
        assert_eq!(tatkalika_maitri(0, 6), TatkalikaMaitri::Enemy); // 7th
        assert_eq!(tatkalika_maitri(5, 2), TatkalikaMaitri::Friend); // 10th
        assert_eq!(tatkalika_maitri(11, 0), TatkalikaMaitri::Friend); // 2nd, wrapped
    }

    #[test]
    fn dignity_priority() {
        // Surya at 10 Mesha: exalted
        assert_eq!(dignity_in_rashi(Graha::Surya, 10.0), Dignity::Exalted);
        // Surya in Tula: debilitated
        assert_eq!(dignity_in_rashi(Graha::Surya, 195.0), Dignity::Debilitated);
        // Surya at 10 Simha: moolatrikona beats own sign
        assert_eq!(dignity_in_rashi(Graha::Surya, 130.0), Dignity::Moolatrikona);
        // Surya at 25 Simha: own sign
        assert_eq!(dignity_in_rashi(Graha::Surya, 145.0), Dignity::OwnSign);
        // Surya in Karka (Chandra's sign): friend
        assert_eq!(dignity_in_rashi(Graha::Surya, 100.0), Dignity::Mitra);
        // Surya in Makara (Shani's sign): enemy
        assert_eq!(dignity_in_rashi(Graha::Surya, 280.0), Dignity::Shatru);
    }

    #[test]
    fn compound_dignity_uses_temporal_context() {
        // Surya in Karka, lord Chandra. Naisargika: friend.
        // Chandra 2nd from Surya -> temporal friend -> AdhiMitra.
        let mut rashis = [3u8; 7];
        rashis[Graha::Chandra.index() as usize] = 4;
        assert_eq!(
            dignity_in_rashi_with_positions(Graha::Surya, 100.0, &rashis),
            Dignity::AdhiMitra
        );
        // Chandra in same sign -> temporal enemy -> Sama
        rashis[Graha::Chandra.index() as usize] = 3;
        assert_eq!(
            dignity_in_rashi_with_positions(Graha::Surya, 100.0, &rashis),
            Dignity::Sama
        );
    }

    #[test]
    fn benefic_split() {
        let benefics: Vec<_> = ALL_BODIES
            .into_iter()
            .filter(|&g| natural_benefic_malefic(g) == BeneficNature::Benefic)
            .collect();
        assert_eq!(
            benefics,
            vec![Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra]
        );
    }
}
