//! Divisional (varga) charts derived from a natal chart.

use log::debug;
use serde::Serialize;

use crate::amsha::{Amsha, SHODASHAVARGA, amsha_longitude};
use crate::graha::Graha;
use crate::position::{BodyPosition, NatalChart};
use crate::rashi::rashi_index_of;

/// A natal chart remapped through one amsha.
///
/// Every body's house is recomputed against the divisional ascendant sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub amsha: Amsha,
    /// Remapped ascendant, [0, 360).
    pub ascendant_deg: f64,
    pub ascendant_rashi: u8,
    pub positions: Vec<BodyPosition>,
}

impl DivisionalChart {
    pub fn position(&self, graha: Graha) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.graha() == graha)
    }
}

/// Remap a natal chart through `amsha`.
pub fn divisional_chart(chart: &NatalChart, amsha: Amsha) -> DivisionalChart {
    let ascendant_deg = amsha_longitude(chart.ascendant_deg(), amsha);
    let ascendant_rashi = rashi_index_of(ascendant_deg);
    let positions = chart
        .positions()
        .iter()
        .map(|p| p.relocated(amsha_longitude(p.longitude_deg(), amsha), ascendant_rashi))
        .collect();
    DivisionalChart {
        amsha,
        ascendant_deg,
        ascendant_rashi,
        positions,
    }
}

/// All 16 divisional charts, in [`SHODASHAVARGA`] order.
pub fn shodashavarga_charts(chart: &NatalChart) -> Vec<DivisionalChart> {
    debug!(
        "deriving shodashavarga for {} bodies",
        chart.positions().len()
    );
    SHODASHAVARGA
        .iter()
        .map(|&a| divisional_chart(chart, a))
        .collect()
}

/// Navamsha sign equals rashi sign.
pub fn is_vargottama(sidereal_lon: f64) -> bool {
    rashi_index_of(amsha_longitude(sidereal_lon, Amsha::D9)) == rashi_index_of(sidereal_lon)
}

/// Bodies of the chart that are vargottama, in chart order.
pub fn vargottama_grahas(chart: &NatalChart) -> Vec<Graha> {
    chart
        .positions()
        .iter()
        .filter(|p| is_vargottama(p.longitude_deg()))
        .map(|p| p.graha())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{ChartMeta, EclipticState};

    fn chart(asc: f64, bodies: &[(Graha, f64)]) -> NatalChart {
        let states: Vec<_> = bodies
            .iter()
            .map(|&(g, lon)| (g, EclipticState::new(lon, 1.0)))
            .collect();
        NatalChart::new(asc, &states, None, ChartMeta::default()).unwrap()
    }

    #[test]
    fn d1_is_identity() {
        let c = chart(95.0, &[(Graha::Surya, 12.3), (Graha::Shani, 301.7)]);
        let d1 = divisional_chart(&c, Amsha::D1);
        assert!((d1.ascendant_deg - 95.0).abs() < 1e-12);
        for (a, b) in d1.positions.iter().zip(c.positions()) {
            assert!((a.longitude_deg() - b.longitude_deg()).abs() < 1e-12);
            assert_eq!(a.house(), b.house());
        }
    }

    #[test]
    fn houses_follow_divisional_ascendant() {
        // Asc Mesha 1 deg -> D9 Mesha. Surya Mesha 15 -> D9 Simha -> house 5
        let c = chart(1.0, &[(Graha::Surya, 15.0)]);
        let d9 = divisional_chart(&c, Amsha::D9);
        assert_eq!(d9.ascendant_rashi, 0);
        let s = d9.position(Graha::Surya).unwrap();
        assert_eq!(s.rashi_index(), 4);
        assert_eq!(s.house(), 5);
    }

    #[test]
    fn shodashavarga_has_sixteen_in_order() {
        let c = chart(200.0, &[(Graha::Chandra, 77.7)]);
        let all = shodashavarga_charts(&c);
        assert_eq!(all.len(), 16);
        for (d, a) in all.iter().zip(SHODASHAVARGA) {
            assert_eq!(d.amsha, a);
            assert_eq!(d.positions.len(), 1);
        }
    }

    #[test]
    fn vargottama_first_navamsha_of_movable_sign() {
        // Mesha 1 deg: part 0, start Mesha -> Mesha
        assert!(is_vargottama(1.0));
        // Mesha 15 deg -> Simha
        assert!(!is_vargottama(15.0));
        let c = chart(0.0, &[(Graha::Surya, 1.0), (Graha::Chandra, 15.0)]);
        assert_eq!(vargottama_grahas(&c), vec![Graha::Surya]);
    }
}
