//! Yogini names, lords and periods.
//!
//! 8 Yoginis, 36-year total cycle.

use serde::Serialize;

use crate::graha::Graha;

use super::types::DAYS_PER_YEAR;

/// The eight yoginis, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Yogini {
    Mangala,
    Pingala,
    Dhanya,
    Bhramari,
    Bhadrika,
    Ulka,
    Siddha,
    Sankata,
}

/// All yoginis in cycle order.
pub const ALL_YOGINIS: [Yogini; 8] = [
    Yogini::Mangala,
    Yogini::Pingala,
    Yogini::Dhanya,
    Yogini::Bhramari,
    Yogini::Bhadrika,
    Yogini::Ulka,
    Yogini::Siddha,
    Yogini::Sankata,
];

/// Length of one full cycle in years (1 + 2 + ... + 8).
pub const YOGINI_CYCLE_YEARS: f64 = 36.0;

impl Yogini {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangala => "Mangala",
            Self::Pingala => "Pingala",
            Self::Dhanya => "Dhanya",
            Self::Bhramari => "Bhramari",
            Self::Bhadrika => "Bhadrika",
            Self::Ulka => "Ulka",
            Self::Siddha => "Siddha",
            Self::Sankata => "Sankata",
        }
    }

    /// 0-based position in the cycle.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Yogini {
        ALL_YOGINIS[(index % 8) as usize]
    }

    /// Ruling graha.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mangala => Graha::Chandra,
            Self::Pingala => Graha::Surya,
            Self::Dhanya => Graha::Guru,
            Self::Bhramari => Graha::Mangal,
            Self::Bhadrika => Graha::Buddh,
            Self::Ulka => Graha::Shani,
            Self::Siddha => Graha::Shukra,
            Self::Sankata => Graha::Rahu,
        }
    }

    /// Full period in years (Mangala 1 .. Sankata 8).
    pub const fn years(self) -> f64 {
        (self.index() + 1) as f64
    }

    pub fn period_days(self) -> f64 {
        self.years() * DAYS_PER_YEAR
    }

    /// Next yogini in the cycle.
    pub const fn next(self) -> Yogini {
        Self::from_index(self.index() + 1)
    }
}

/// Starting yogini for a 0-based nakshatra index.
///
/// `r = (nakshatra_1_indexed + 3) % 8`, where 0 maps to the eighth yogini.
/// The pattern repeats every 8 nakshatras starting from Ardra = Mangala.
pub const fn starting_yogini(nakshatra_index: u8) -> Yogini {
    let nak_1 = if nakshatra_index > 26 { 27 } else { nakshatra_index + 1 };
    let r = (nak_1 + 3) % 8;
    if r == 0 {
        Yogini::Sankata
    } else {
        Yogini::from_index(r - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_36_years() {
        let total: f64 = ALL_YOGINIS.iter().map(|y| y.years()).sum();
        assert!((total - YOGINI_CYCLE_YEARS).abs() < 1e-12);
    }

    #[test]
    fn ardra_maps_to_mangala() {
        assert_eq!(starting_yogini(5), Yogini::Mangala);
    }

    #[test]
    fn ashwini_maps_to_bhramari() {
        // (1 + 3) % 8 = 4 -> fourth yogini
        assert_eq!(starting_yogini(0), Yogini::Bhramari);
    }

    #[test]
    fn mrigashira_maps_to_sankata() {
        // (5 + 3) % 8 = 0 -> eighth
        assert_eq!(starting_yogini(4), Yogini::Sankata);
    }

    #[test]
    fn revati_wraps() {
        // (27 + 3) % 8 = 6 -> Ulka
        assert_eq!(starting_yogini(26), Yogini::Ulka);
    }

    #[test]
    fn lords_and_cycle() {
        assert_eq!(Yogini::Mangala.lord(), Graha::Chandra);
        assert_eq!(Yogini::Sankata.lord(), Graha::Rahu);
        assert_eq!(Yogini::Sankata.next(), Yogini::Mangala);
        assert_eq!(Yogini::Siddha.name(), "Siddha");
    }
}
