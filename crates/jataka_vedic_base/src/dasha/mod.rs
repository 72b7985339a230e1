//! Yogini dasha (planetary periods) for Vedic charts.
//!
//! Eight yoginis rule a 36-year cycle. The starting yogini and the balance
//! of its first period come from the Moon's nakshatra at birth.

pub mod types;
pub mod yogini;
pub mod yogini_data;

pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, YoginiSnapshot};
pub use yogini::{
    active_period, birth_balance_days, yogini_antardashas, yogini_mahadashas, yogini_periods,
    yogini_snapshot,
};
pub use yogini_data::{ALL_YOGINIS, YOGINI_CYCLE_YEARS, Yogini, starting_yogini};
