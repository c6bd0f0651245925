//! Least squares solver and the degree-1 trend line built on it.
//!
//! A lower-triangle cell overlays the ordinary least squares line
//!
//! ```text
//! minimize Σ (y_i - (a + b x_i))^2
//! ```
//!
//! through its scatter. We solve it as a tall `R × 2` system with SVD, which
//! also yields the minimum-norm solution when `x` is constant and the design
//! matrix is rank deficient. Both columns are scaled by their largest
//! magnitude first so that values near `f64::MAX` do not overflow inside the
//! decomposition.

use nalgebra::{DMatrix, DVector};

/// Number of points used to draw a fitted line across the x range.
pub const LINE_SAMPLES: usize = 100;

/// Iteration cap for the SVD; non-convergence is treated as unsolvable.
const SVD_MAX_ITER: usize = 1000;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().try_svd(true, true, f64::EPSILON, SVD_MAX_ITER)?;

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fitted `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Legend-style equation, e.g. `y = 2.00x + 0.50`.
    pub fn equation(&self) -> String {
        format!("y = {:.2}x + {:.2}", self.slope, self.intercept)
    }

    /// Sample the line at `n` evenly spaced x values over `[x_min, x_max]`.
    pub fn sample(&self, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
        linspace(x_min, x_max, n)
            .into_iter()
            .map(|x| (x, self.predict(x)))
            .collect()
    }
}

/// Fit a degree-1 polynomial to paired samples.
///
/// Returns `None` for fewer than two pairs or an unsolvable system.
pub fn fit_line(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }

    let (x, y) = (&x[..n], &y[..n]);
    let sx = scale_of(x);
    let sy = scale_of(y);

    let mut design = DMatrix::<f64>::zeros(n, 2);
    for (row, &xi) in x.iter().enumerate() {
        design[(row, 0)] = xi / sx;
        design[(row, 1)] = 1.0;
    }
    let target = DVector::from_iterator(n, y.iter().map(|&yi| yi / sy));

    let beta = solve_least_squares(&design, &target)?;
    let fit = LinearFit {
        slope: beta[0] / sx * sy,
        intercept: beta[1] * sy,
    };
    (fit.slope.is_finite() && fit.intercept.is_finite()).then_some(fit)
}

/// Largest magnitude in `values`, or 1 for an all-zero sample.
fn scale_of(values: &[f64]) -> f64 {
    let m = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if m > 0.0 { m } else { 1.0 }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i + 1 == n {
                        end
                    } else {
                        let t = i as f64 / last;
                        start * (1.0 - t) + end * t
                    }
                })
                .collect()
        }
    }
}
