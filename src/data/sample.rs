//! Seeded synthetic tables.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Normal, Uniform};

use crate::domain::NumericTable;
use crate::error::{InvalidInput, MatrixError};

/// Independent `U(0, 1)` columns, one per name.
pub fn uniform_table(names: &[&str], rows: usize, seed: u64) -> Result<NumericTable, MatrixError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let unit = Uniform::new(0.0f64, 1.0);

    let columns: Vec<(&str, Vec<f64>)> = names
        .iter()
        .map(|&name| (name, (0..rows).map(|_| unit.sample(&mut rng)).collect()))
        .collect();
    NumericTable::from_columns(columns)
}

/// Four columns with known relationships:
///
/// - `x`: standard normal
/// - `y`: `2x + ε`, `ε ~ N(0, noise)` (linear)
/// - `z`: `U(0, 1)` independent of the rest
/// - `w`: `x³` (monotonic but not linear; Spearman 1, Pearson < 1)
pub fn correlated_table(rows: usize, noise: f64, seed: u64) -> Result<NumericTable, MatrixError> {
    if !(noise.is_finite() && noise >= 0.0) {
        return Err(InvalidInput::InvalidParameter(format!(
            "noise must be finite and >= 0, got {noise}"
        ))
        .into());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| InvalidInput::InvalidParameter(format!("noise distribution: {e}")))?;
    let unit = Uniform::new(0.0f64, 1.0);

    let mut x = Vec::with_capacity(rows);
    let mut y = Vec::with_capacity(rows);
    let mut z = Vec::with_capacity(rows);
    let mut w = Vec::with_capacity(rows);

    for _ in 0..rows {
        let xi: f64 = normal.sample(&mut rng);
        let eps: f64 = normal.sample(&mut rng) * noise;
        x.push(xi);
        y.push(2.0 * xi + eps);
        z.push(unit.sample(&mut rng));
        w.push(xi.powi(3));
    }

    NumericTable::from_columns(vec![("x", x), ("y", y), ("z", z), ("w", w)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{pearson, spearman};

    #[test]
    fn uniform_table_is_deterministic_and_bounded() {
        let a = uniform_table(&["A", "B", "C"], 100, 7).unwrap();
        let b = uniform_table(&["A", "B", "C"], 100, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.width(), 3);
        assert_eq!(a.rows(), 100);
        assert!(a.columns().iter().all(|c| c.values().iter().all(|v| (0.0..1.0).contains(v))));

        let c = uniform_table(&["A", "B", "C"], 100, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn correlated_table_has_expected_relationships() {
        let t = correlated_table(500, 0.1, 42).unwrap();
        let x = t.column(0).values();
        let y = t.column(1).values();
        let z = t.column(2).values();
        let w = t.column(3).values();

        assert!(pearson(x, y) > 0.99, "x/y should be nearly linear");
        assert!(pearson(x, z).abs() < 0.2, "z should be independent of x");
        assert!((spearman(x, w) - 1.0).abs() < 1e-12);
        assert!(pearson(x, w) < 0.95);
    }

    #[test]
    fn noiseless_pair_is_exactly_linear() {
        let t = correlated_table(20, 0.0, 1).unwrap();
        assert!((pearson(t.column(0).values(), t.column(1).values()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_noise_and_short_tables() {
        assert!(correlated_table(10, -1.0, 0).unwrap_err().is_invalid_input());
        assert!(correlated_table(1, 0.1, 0).unwrap_err().is_invalid_input());
        assert!(uniform_table(&[], 10, 0).unwrap_err().is_invalid_input());
    }
}
