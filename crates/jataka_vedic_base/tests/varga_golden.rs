//! Golden tests for the divisional engine and divisional charts.
//!
//! Pure-math tests (no ephemeris needed).

use jataka_vedic_base::{
    Amsha, ChartMeta, EclipticState, Graha, NatalChart, SHODASHAVARGA, amsha_longitude,
    amsha_position, divisional_chart, is_vargottama, normalize_360, shodashavarga_charts,
    vargottama_grahas,
};

fn assert_lon(amsha: Amsha, lon: f64, expected: f64) {
    let got = amsha_longitude(lon, amsha);
    assert!(
        (got - expected).abs() < 1e-9,
        "{} of {lon}: got {got}, expected {expected}",
        amsha.name()
    );
}

// ---------------------------------------------------------------------------
// Per-scheme goldens
// ---------------------------------------------------------------------------

#[test]
fn rashi_is_identity() {
    for lon in [0.0, 29.999, 123.456, 359.5, -10.0, 725.0] {
        assert_eq!(amsha_longitude(lon, Amsha::D1), normalize_360(lon));
    }
}

#[test]
fn hora_halves() {
    // Mesha 10: odd, first half -> Simha, 10/15 * 30 = 20
    assert_lon(Amsha::D2, 10.0, 140.0);
    // Vrishabha 20: even, second half -> Simha, 5/15 * 30 = 10
    assert_lon(Amsha::D2, 50.0, 130.0);
    // Vrishabha 5: even, first half -> Karka
    assert_lon(Amsha::D2, 35.0, 100.0);
}

#[test]
fn drekkana_steps_by_trine() {
    // Simha 25: third part -> Simha + 8 = Mesha, (25 - 20)/10 * 30 = 15
    assert_lon(Amsha::D3, 145.0, 15.0);
}

#[test]
fn navamsha_karka() {
    // Karka 12: movable, part 3 -> Tula, (12 - 10)/3.333 * 30 = 18
    assert_lon(Amsha::D9, 102.0, 198.0);
}

#[test]
fn dashamsha_even_sign_starts_ninth() {
    // Vrishabha 4: start Makara, part 1 -> Kumbha, (4 - 3)/3 * 30 = 10
    assert_lon(Amsha::D10, 34.0, 310.0);
}

#[test]
fn dwadashamsha_counts_from_sign() {
    // Mesha 8.75: part 3 -> Karka, (8.75 - 7.5)/2.5 * 30 = 15
    assert_lon(Amsha::D12, 8.75, 105.0);
}

#[test]
fn trimshamsha_unequal_segments() {
    // Mesha 7: odd, 5-10 -> Kumbha, 2/5 * 30 = 12
    assert_lon(Amsha::D30, 7.0, 312.0);
    // Vrishabha 15: even, 12-20 -> Meena, 3/8 * 30 = 11.25
    assert_lon(Amsha::D30, 45.0, 341.25);
}

#[test]
fn saptamsha_by_parity() {
    // Mesha (odd) 10 deg: part 2 of 30/7 -> Mithuna, 1/3 through -> 70
    assert_lon(Amsha::D7, 10.0, 70.0);
    // Vrishabha (even) 5 deg: part 1, start 1+6 = Vrischika, +1 = Dhanu,
    // 1/6 through -> 245
    assert_lon(Amsha::D7, 35.0, 245.0);
    assert_eq!(amsha_position(35.0, Amsha::D7).rashi_index, 8);
}

#[test]
fn shodashamsha_by_modality() {
    // Simha (fixed) 0.5 deg: part 0 of 1.875, start Simha -> 128
    assert_lon(Amsha::D16, 120.5, 128.0);
    assert_eq!(amsha_position(120.5, Amsha::D16).rashi_index, 4);
    // Dhanu (dual) 5 deg: part 2, start Dhanu(8)+2 = Kumbha, 2/3 through -> 320
    assert_lon(Amsha::D16, 245.0, 320.0);
    // Mesha (movable) starts at Mesha
    assert_lon(Amsha::D16, 0.5, 8.0);
}

#[test]
fn vimshamsha_by_modality() {
    // Simha (fixed) 0.5 deg: part 0 of 1.5, start Dhanu(8) -> 250
    assert_lon(Amsha::D20, 120.5, 250.0);
    assert_eq!(amsha_position(120.5, Amsha::D20).rashi_index, 8);
    // Dhanu (dual) 5 deg: part 3, start Simha(4)+3 = Tula, 1/3 through -> 220
    assert_lon(Amsha::D20, 245.0, 220.0);
}

#[test]
fn akshavedamsha_dual_starts_dhanu() {
    // Dhanu 0.1 deg: part 0 of 2/3, start Dhanu(8), 0.15 through -> 244.5
    let got = amsha_longitude(240.1, Amsha::D45);
    assert!((got - 244.5).abs() < 1e-9, "got {got}");
    assert_eq!(amsha_position(240.1, Amsha::D45).rashi_index, 8);
}

#[test]
fn shashtyamsha_first_part() {
    // Mesha 0.25: part 0 of width 0.5 -> Mesha 15
    assert_lon(Amsha::D60, 0.25, 15.0);
}

#[test]
fn sign_end_stays_in_last_part() {
    for &a in &SHODASHAVARGA {
        let p = amsha_position(30.0 - 1e-13, a);
        assert!(p.part_index < a.divisions(), "{}", a.name());
        assert!(p.degrees_in_rashi < 30.0);
    }
}

// ---------------------------------------------------------------------------
// Vargottama
// ---------------------------------------------------------------------------

/// Navamsha start offset from the natal sign: movable 0, fixed 8, dual 4.
fn navamsha_start(rashi: u8) -> u8 {
    match rashi % 3 {
        0 => rashi,
        1 => (rashi + 8) % 12,
        _ => (rashi + 4) % 12,
    }
}

#[test]
fn fifteen_mesha_is_not_vargottama() {
    // part floor(15 / 3.333) = 4 -> Simha, not Mesha
    assert_eq!(amsha_position(15.0, Amsha::D9).rashi_index, 4);
    assert!(!is_vargottama(15.0));
}

#[test]
fn vargottama_derived_from_navamsha_table() {
    let part = 30.0 / 9.0;
    let mut hits = 0;
    for rashi in 0..12u8 {
        for p in 0..9u8 {
            let lon = rashi as f64 * 30.0 + (p as f64 + 0.5) * part;
            let expected = (navamsha_start(rashi) + p) % 12 == rashi;
            assert_eq!(is_vargottama(lon), expected, "rashi {rashi} part {p}");
            hits += usize::from(expected);
        }
    }
    // exactly one navamsha per sign
    assert_eq!(hits, 12);
}

#[test]
fn vargottama_examples() {
    // Mesha part 0, Vrishabha part 4, Mithuna part 8
    assert!(is_vargottama(1.0));
    assert!(is_vargottama(45.0));
    assert!(is_vargottama(88.0));
    assert!(!is_vargottama(31.0));
}

// ---------------------------------------------------------------------------
// Divisional charts
// ---------------------------------------------------------------------------

fn sample_chart() -> NatalChart {
    let states = [
        (Graha::Surya, EclipticState::new(102.0, 0.98)),
        (Graha::Chandra, EclipticState::new(1.0, 13.0)),
        (Graha::Mangal, EclipticState::new(200.0, 0.6)),
        (Graha::Guru, EclipticState::new(45.0, 0.1)),
    ];
    NatalChart::new(15.0, &states, None, ChartMeta::default()).unwrap()
}

#[test]
fn navamsha_chart_rehouses_bodies() {
    let d9 = divisional_chart(&sample_chart(), Amsha::D9);
    // Ascendant Mesha 15 -> Simha
    assert_eq!(d9.ascendant_rashi, 4);
    let sun = d9.position(Graha::Surya).unwrap();
    assert_eq!(sun.rashi_index(), 6);
    // Tula counted from Simha
    assert_eq!(sun.house(), 3);
}

#[test]
fn shodashavarga_has_all_schemes_in_order() {
    let chart = sample_chart();
    let charts = shodashavarga_charts(&chart);
    assert_eq!(charts.len(), 16);
    for (c, a) in charts.iter().zip(SHODASHAVARGA) {
        assert_eq!(c.amsha, a);
        assert_eq!(c.positions.len(), chart.positions().len());
    }
    let d1 = &charts[0];
    for (p, q) in d1.positions.iter().zip(chart.positions()) {
        assert_eq!(p.longitude_deg(), q.longitude_deg());
        assert_eq!(p.house(), q.house());
    }
}

#[test]
fn chart_vargottama_list() {
    // Chandra at Mesha 1 and Guru at Vrishabha 15 are vargottama
    assert_eq!(
        vargottama_grahas(&sample_chart()),
        vec![Graha::Chandra, Graha::Guru]
    );
}
