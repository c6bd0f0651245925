//! Pearson and Spearman correlation.
//!
//! The raw functions (`pearson`, `spearman`) return `NaN` when either input
//! has zero variance. `correlate` is the strict, column-aware variant: it
//! reports the offending column as `MatrixError::DegenerateInput` instead.

use log::warn;

use crate::domain::{CorrelationMethod, NumericColumn, NumericTable};
use crate::error::MatrixError;

/// Product-moment correlation of two equal-length samples.
///
/// Returns `NaN` for fewer than two pairs or a zero-variance input. The
/// result is clamped to `[-1, 1]` to absorb rounding overshoot.
///
/// Samples are divided by their largest magnitude first, so sums of squares
/// stay finite for values near `f64::MAX` and nonzero for subnormal ones.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let (sx, sy) = (max_abs(x), max_abs(y));
    if sx == 0.0 || sy == 0.0 {
        return f64::NAN;
    }

    let nf = n as f64;
    let mean_x = x.iter().map(|v| v / sx).sum::<f64>() / nf;
    let mean_y = y.iter().map(|v| v / sy).sum::<f64>() / nf;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a / sx - mean_x;
        let dy = b / sy - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0f64, |m, v| m.max(v.abs()))
}

/// Pearson correlation of the average ranks of `x` and `y`.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    pearson(&average_ranks(x), &average_ranks(y))
}

/// 1-based ranks; tied values share the mean of the ranks they span.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end (0-based) hold ranks start+1..=end.
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}

/// Coefficient by `method`, with no variance check.
pub fn coefficient(method: CorrelationMethod, x: &[f64], y: &[f64]) -> f64 {
    match method {
        CorrelationMethod::Pearson => pearson(x, y),
        CorrelationMethod::Spearman => spearman(x, y),
    }
}

/// Strict coefficient between two columns.
///
/// Fails with `DegenerateInput` naming the first zero-variance column.
pub fn correlate(
    method: CorrelationMethod,
    a: &NumericColumn,
    b: &NumericColumn,
) -> Result<f64, MatrixError> {
    for col in [a, b] {
        if has_zero_variance(col.values()) {
            return Err(MatrixError::DegenerateInput {
                column: col.name().to_string(),
            });
        }
    }
    Ok(coefficient(method, a.values(), b.values()))
}

fn has_zero_variance(values: &[f64]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| v == first),
        None => true,
    }
}

/// Symmetric N×N coefficient matrix.
///
/// Degenerate pairs hold `NaN`; they are flagged, never coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    method: CorrelationMethod,
    n: usize,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn compute(table: &NumericTable, method: CorrelationMethod) -> Self {
        let n = table.width();
        let mut values = vec![f64::NAN; n * n];

        for i in 0..n {
            for j in i..n {
                let r = match correlate(method, table.column(i), table.column(j)) {
                    Ok(r) => r,
                    Err(err) => {
                        if i != j {
                            warn!(
                                "{method} correlation of '{}' vs '{}' flagged: {err}",
                                table.column(i).name(),
                                table.column(j).name()
                            );
                        }
                        f64::NAN
                    }
                };
                values[i * n + j] = r;
                values[j * n + i] = r;
            }
        }

        Self { method, n, values }
    }

    pub fn method(&self) -> CorrelationMethod {
        self.method
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}
