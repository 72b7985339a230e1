//! Shared angle helpers for every chart calculation.

/// Normalize an angle to [0, 360) degrees.
///
/// `-0.0` and values that round up to exactly 360.0 after the remainder
/// both collapse to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 || r == 0.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = normalize_360(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Shortest arc between two ecliptic longitudes, in [0, 180].
///
/// The circle wraps: `angular_distance(359.0, 1.0) == 2.0`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_360((a - b).abs());
    if diff > 180.0 { 360.0 - diff } else { diff }
}
