//! Whole-sign houses, house classes and graha drishti offsets.

use serde::Serialize;

use crate::graha::Graha;

/// House of a body in whole-sign houses, 1-12.
///
/// The ascendant's own sign is always house 1.
pub const fn house_from_rashi(body_rashi: u8, asc_rashi: u8) -> u8 {
    (body_rashi % 12 + 12 - asc_rashi % 12) % 12 + 1
}

/// Classical house groupings. A house may belong to several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseClass {
    Kendra,
    Trikona,
    Dusthana,
    Upachaya,
}

const KENDRA: [u8; 4] = [1, 4, 7, 10];
const TRIKONA: [u8; 3] = [1, 5, 9];
const DUSTHANA: [u8; 3] = [6, 8, 12];
const UPACHAYA: [u8; 4] = [3, 6, 10, 11];

pub fn is_kendra(house: u8) -> bool {
    KENDRA.contains(&house)
}

pub fn is_trikona(house: u8) -> bool {
    TRIKONA.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA.contains(&house)
}

pub fn is_upachaya(house: u8) -> bool {
    UPACHAYA.contains(&house)
}

/// All classes a house belongs to, in declaration order.
pub fn house_classes(house: u8) -> Vec<HouseClass> {
    [
        (HouseClass::Kendra, is_kendra(house)),
        (HouseClass::Trikona, is_trikona(house)),
        (HouseClass::Dusthana, is_dusthana(house)),
        (HouseClass::Upachaya, is_upachaya(house)),
    ]
    .into_iter()
    .filter_map(|(c, hit)| hit.then_some(c))
    .collect()
}

/// House offsets a graha aspects, counted inclusively from its own house.
///
/// Every graha casts the 7th. Mangal adds 4th/8th, Guru 5th/9th, Shani
/// 3rd/10th, and the nodes 5th/9th.
pub const fn aspect_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru | Graha::Rahu | Graha::Ketu => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        _ => &[7],
    }
}

/// Houses aspected by a graha sitting in `from_house`, ascending offset order.
pub fn aspected_houses(graha: Graha, from_house: u8) -> Vec<u8> {
    aspect_offsets(graha)
        .iter()
        .map(|&n| (from_house.saturating_sub(1) % 12 + n - 1) % 12 + 1)
        .collect()
}

/// Whether a graha in `from_house` aspects `to_house`.
pub fn aspects(graha: Graha, from_house: u8, to_house: u8) -> bool {
    aspected_houses(graha, from_house).contains(&to_house)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_is_first_house() {
        for asc in 0..12 {
            assert_eq!(house_from_rashi(asc, asc), 1);
            assert_eq!(house_from_rashi((asc + 6) % 12, asc), 7);
        }
    }

    #[test]
    fn house_wraps_behind_ascendant() {
        // body in Meena (11), asc Mesha (0) -> 12th
        assert_eq!(house_from_rashi(11, 0), 12);
        // body in Mesha, asc Meena -> 2nd
        assert_eq!(house_from_rashi(0, 11), 2);
    }

    #[test]
    fn classes_overlap() {
        assert_eq!(
            house_classes(1),
            vec![HouseClass::Kendra, HouseClass::Trikona]
        );
        assert_eq!(
            house_classes(6),
            vec![HouseClass::Dusthana, HouseClass::Upachaya]
        );
        assert!(house_classes(2).is_empty());
        assert_eq!(house_classes(10), vec![HouseClass::Kendra, HouseClass::Upachaya]);
    }

    #[test]
    fn special_aspects() {
        // Mangal in 1st: 4th, 7th, 8th
        assert_eq!(aspected_houses(Graha::Mangal, 1), vec![4, 7, 8]);
        // Shani in 10th: 12th, 4th, 7th
        assert_eq!(aspected_houses(Graha::Shani, 10), vec![12, 4, 7]);
        // Guru in 9th: 1st, 3rd, 5th
        assert_eq!(aspected_houses(Graha::Guru, 9), vec![1, 3, 5]);
        assert_eq!(aspected_houses(Graha::Surya, 7), vec![1]);
    }

    #[test]
    fn aspect_membership() {
        assert!(aspects(Graha::Rahu, 2, 6));
        assert!(!aspects(Graha::Chandra, 2, 6));
        assert!(aspects(Graha::Chandra, 2, 8));
    }
}
