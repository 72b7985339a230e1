//! Shared numerical helpers for the scan engines.

use crate::error::SearchError;

/// Scan direction for next/previous searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub(crate) fn signed_step(self, step: f64) -> f64 {
        match self {
            Self::Forward => step,
            Self::Backward => -step,
        }
    }
}

/// Bisect to the zero crossing of `f_at` between `t_a` and `t_b`.
///
/// `f_a` is `f_at(t_a)`; the caller guarantees a sign change on the interval.
pub(crate) fn bisect_zero<F>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}

/// Golden-section search for the minimum of a unimodal `f_at` on `[t_a, t_b]`.
pub(crate) fn golden_minimum<F>(
    mut t_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> Result<(f64, f64), SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    const INV_PHI: f64 = 0.618_033_988_749_894_9;
    let mut t_c = t_b - INV_PHI * (t_b - t_a);
    let mut t_d = t_a + INV_PHI * (t_b - t_a);
    let mut f_c = f_at(t_c)?;
    let mut f_d = f_at(t_d)?;

    for _ in 0..max_iter {
        if (t_b - t_a).abs() < convergence_days {
            break;
        }
        if f_c < f_d {
            t_b = t_d;
            t_d = t_c;
            f_d = f_c;
            t_c = t_b - INV_PHI * (t_b - t_a);
            f_c = f_at(t_c)?;
        } else {
            t_a = t_c;
            t_c = t_d;
            f_c = f_d;
            t_d = t_a + INV_PHI * (t_b - t_a);
            f_d = f_at(t_d)?;
        }
    }

    let t = 0.5 * (t_a + t_b);
    Ok((t, f_at(t)?))
}
