//! Yogini dasha engine (8 yoginis, 36-year cycle).

use crate::nakshatra::nakshatra_from_longitude;

use super::types::{DashaLevel, DashaPeriod, YoginiSnapshot};
use super::yogini_data::{YOGINI_CYCLE_YEARS, Yogini, starting_yogini};

/// Starting yogini and the days of its period left at birth.
///
/// Balance = remaining fraction of the Moon's nakshatra x entry period.
pub fn birth_balance_days(moon_sidereal_lon: f64) -> (Yogini, f64) {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let yogini = starting_yogini(nak.nakshatra_index);
    (yogini, nak.remaining_fraction() * yogini.period_days())
}

/// Unbounded chain of mahadashas from birth.
///
/// The first period is the birth balance, every later one is a full period.
pub fn yogini_periods(
    birth_jd: f64,
    moon_sidereal_lon: f64,
) -> impl Iterator<Item = DashaPeriod> {
    let (mut yogini, balance_days) = birth_balance_days(moon_sidereal_lon);
    let mut cursor = birth_jd;
    (1..=u16::MAX).map(move |order| {
        let duration = if order == 1 {
            balance_days
        } else {
            yogini.period_days()
        };
        let period = DashaPeriod {
            yogini,
            start_jd: cursor,
            end_jd: cursor + duration,
            level: DashaLevel::Mahadasha,
            order,
        };
        cursor = period.end_jd;
        yogini = yogini.next();
        period
    })
}

/// Mahadashas covering `cycles` full rounds of eight yoginis.
pub fn yogini_mahadashas(birth_jd: f64, moon_sidereal_lon: f64, cycles: u8) -> Vec<DashaPeriod> {
    yogini_periods(birth_jd, moon_sidereal_lon)
        .take(8 * cycles as usize)
        .collect()
}

/// Antardashas of a mahadasha, proportional to each yogini's years.
///
/// The sequence starts with the parent's own yogini. The last child ends
/// exactly at the parent's end. Empty for periods with no child level.
pub fn yogini_antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(8);
    let mut cursor = parent.start_jd;
    let mut yogini = parent.yogini;

    for order in 1..=8u16 {
        let end = cursor + yogini.years() / YOGINI_CYCLE_YEARS * parent_duration;
        children.push(DashaPeriod {
            yogini,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order,
        });
        cursor = end;
        yogini = yogini.next();
    }

    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

/// The period containing `jd` in a contiguous, time-ordered slice.
pub fn active_period(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    let idx = periods.partition_point(|p| p.start_jd <= jd);
    let candidate = periods.get(idx.checked_sub(1)?)?;
    candidate.contains(jd).then_some(candidate)
}

/// Active mahadasha and antardasha at `query_jd`.
///
/// `None` before birth or for a non-finite query.
pub fn yogini_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
) -> Option<YoginiSnapshot> {
    if !query_jd.is_finite() || query_jd < birth_jd {
        return None;
    }
    let mahadasha = yogini_periods(birth_jd, moon_sidereal_lon)
        .take_while(|p| p.start_jd <= query_jd)
        .find(|p| p.contains(query_jd))?;
    let antardashas = yogini_antardashas(&mahadasha);
    let antardasha = *active_period(&antardashas, query_jd)?;
    Some(YoginiSnapshot {
        query_jd,
        mahadasha,
        antardasha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DAYS_PER_YEAR;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    const BIRTH_JD: f64 = 2_451_545.0;

    // Halfway through Ardra (index 5)
    fn mid_ardra() -> f64 {
        5.0 * NAKSHATRA_SPAN_27 + NAKSHATRA_SPAN_27 / 2.0
    }

    #[test]
    fn balance_is_half_of_mangala() {
        let (y, days) = birth_balance_days(mid_ardra());
        assert_eq!(y, Yogini::Mangala);
        // 0.5 * 1 * 365.25
        assert!((days - 182.625).abs() < 1e-9);
    }

    #[test]
    fn mahadashas_chain_contiguously() {
        let periods = yogini_mahadashas(BIRTH_JD, mid_ardra(), 2);
        assert_eq!(periods.len(), 16);
        assert_eq!(periods[0].start_jd, BIRTH_JD);
        assert_eq!(periods[1].yogini, Yogini::Pingala);
        assert!((periods[1].duration_days() - 2.0 * DAYS_PER_YEAR).abs() < 1e-9);
        assert_eq!(periods[8].yogini, Yogini::Mangala);
        for w in periods.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
        // first cycle: balance + 35 full years
        let first_cycle = periods[7].end_jd - BIRTH_JD;
        assert!((first_cycle - (182.625 + 35.0 * DAYS_PER_YEAR)).abs() < 1e-6);
    }

    #[test]
    fn zero_cycles_is_empty() {
        assert!(yogini_mahadashas(BIRTH_JD, 10.0, 0).is_empty());
    }

    #[test]
    fn antardashas_start_with_parent() {
        let periods = yogini_mahadashas(BIRTH_JD, mid_ardra(), 1);
        let parent = periods[1];
        let subs = yogini_antardashas(&parent);
        assert_eq!(subs.len(), 8);
        assert_eq!(subs[0].yogini, Yogini::Pingala);
        assert_eq!(subs[7].yogini, Yogini::Mangala);
        assert_eq!(subs[0].start_jd, parent.start_jd);
        assert_eq!(subs[7].end_jd, parent.end_jd);
        // 2/36 of 730.5 days
        assert!((subs[0].duration_days() - 40.583_333_333).abs() < 1e-6);
        assert!(subs.iter().all(|s| s.level == DashaLevel::Antardasha));
        assert!(yogini_antardashas(&subs[0]).is_empty());
    }

    #[test]
    fn active_period_lookup() {
        let periods = yogini_mahadashas(BIRTH_JD, mid_ardra(), 1);
        assert_eq!(active_period(&periods, BIRTH_JD - 1.0), None);
        assert_eq!(active_period(&periods, BIRTH_JD).map(|p| p.order), Some(1));
        let jd = periods[3].start_jd + 1.0;
        assert_eq!(active_period(&periods, jd).map(|p| p.order), Some(4));
        assert_eq!(active_period(&periods, periods[7].end_jd), None);
    }

    #[test]
    fn snapshot_at_birth_and_later() {
        let snap = yogini_snapshot(BIRTH_JD, mid_ardra(), BIRTH_JD).unwrap();
        assert_eq!(snap.mahadasha.yogini, Yogini::Mangala);
        assert_eq!(snap.antardasha.yogini, Yogini::Mangala);

        // 50 years on: balance 0.5 + 35 = 35.5 years per first cycle,
        // then Mangala 1 + Pingala 2 + Dhanya 3 + Bhramari 4 = 45.5 -> Bhadrika
        let jd = BIRTH_JD + 50.0 * DAYS_PER_YEAR;
        let snap = yogini_snapshot(BIRTH_JD, mid_ardra(), jd).unwrap();
        assert_eq!(snap.mahadasha.yogini, Yogini::Bhadrika);
        assert!(snap.mahadasha.contains(jd));
        assert!(snap.antardasha.contains(jd));
    }

    #[test]
    fn snapshot_before_birth_is_none() {
        assert!(yogini_snapshot(BIRTH_JD, 10.0, BIRTH_JD - 0.5).is_none());
        assert!(yogini_snapshot(BIRTH_JD, 10.0, f64::NAN).is_none());
    }
}
