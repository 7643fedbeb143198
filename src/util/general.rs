//! General-purpose utility functions.

/// Calculates amplitude in decibels from a linear power level.
#[inline]
pub fn level_to_db(level: f64) -> f64 {
    20.0 * level.log10()
}

/// Calculates the linear power level from amplitude as decibels.
#[inline]
pub fn db_to_level(db_value: f64) -> f64 {
    10.0f64.powf(db_value / 20.0)
}

/// Returns the absolute peak level of `signal`, or `0.0` for an empty
/// signal.
#[inline]
pub fn peak_level(signal: &[f64]) -> f64 {
    signal.iter().fold(0.0f64, |acc, x| acc.max(x.abs()))
}

/// Returns the absolute peak of `signal` in decibels.
///
/// A silent signal yields [`MINUS_INFINITY_DB`](crate::prelude::MINUS_INFINITY_DB).
pub fn peak_db(signal: &[f64]) -> f64 {
    let peak = peak_level(signal);

    if peak > 0.0 {
        level_to_db(peak)
    } else {
        crate::prelude::MINUS_INFINITY_DB
    }
}

/// Scales `signal` so that its absolute peak sits at `target_db` dBFS.
///
/// A silent signal is returned unchanged, as it has no peak to scale.
pub fn normalize_peak(signal: &[f64], target_db: f64) -> Vec<f64> {
    let peak = peak_level(signal);

    if peak <= 0.0 {
        return signal.to_vec();
    }

    let gain = db_to_level(target_db) / peak;
    signal.iter().map(|x| x * gain).collect()
}

/// Returns whether `value` is within `tolerance` of `target`.
#[inline]
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}
