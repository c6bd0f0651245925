//! Display rounding for coefficients.

/// Round to two decimals, ties to even (`0.125 → 0.12`, `0.135 → 0.14`).
///
/// Idempotent: rounding an already rounded value returns it unchanged.
/// `NaN` passes through.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
