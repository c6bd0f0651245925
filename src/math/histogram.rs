//! Fixed-bin density histograms for the diagonal cells.
//!
//! Binning rules:
//! - `bins` equal-width bins spanning `[min, max]`
//! - every bin is half-open except the last, which also includes `max`
//! - a constant sample spans `[v - 0.5, v + 0.5]` instead
//! - heights are densities: `count / (n * width)`, so the bar areas sum to 1

/// Bin count used by every diagonal cell.
pub const HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` monotonically increasing edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub density: Vec<f64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// `(left, right, height)` per bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.density)
            .map(|(w, &h)| (w[0], w[1], h))
    }

    /// Σ density × width; 1 for any non-empty sample.
    pub fn area(&self) -> f64 {
        self.bars().map(|(l, r, h)| (r - l) * h).sum()
    }

    pub fn max_density(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Strictly increasing edges and a finite density in every bin.
    fn is_resolved(&self) -> bool {
        self.edges.windows(2).all(|w| w[0] < w[1]) && self.density.iter().all(|d| d.is_finite())
    }
}

/// Density histogram of `values` with `bins` equal-width bins.
///
/// `values` must be non-empty and finite (guaranteed for table columns). A
/// range too narrow to split into `bins` distinct, finite-density bins
/// (constant or subnormal spans) is replaced by a window around its center.
pub fn density_histogram(values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !(lo.is_finite() && hi.is_finite()) {
        lo = 0.0;
        hi = 1.0;
    }

    if lo < hi {
        let histogram = bin_values(values, split_range(lo, hi, bins));
        if histogram.is_resolved() {
            return histogram;
        }
    }

    let (lo, hi) = center_window(lo, hi);
    bin_values(values, split_range(lo, hi, bins))
}

/// `bins + 1` edges from `lo` to `hi`, interpolated so that `hi - lo` is
/// never formed and cannot overflow.
fn split_range(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    (0..=bins)
        .map(|k| {
            if k == bins {
                hi
            } else {
                let t = k as f64 / bins as f64;
                lo * (1.0 - t) + hi * t
            }
        })
        .collect()
}

/// Unit window around the center of `[lo, hi]`, widened for large magnitudes
/// so that its edges stay distinct.
fn center_window(lo: f64, hi: f64) -> (f64, f64) {
    let center = lo / 2.0 + hi / 2.0;
    let half = (center.abs() * 1e-9).max(0.5);
    ((center - half).max(f64::MIN), (center + half).min(f64::MAX))
}

fn bin_values(values: &[f64], edges: Vec<f64>) -> Histogram {
    let bins = edges.len() - 1;
    let mut counts = vec![0usize; bins];
    for &v in values {
        counts[bin_index(v, &edges)] += 1;
    }

    let n = values.len().max(1) as f64;
    let density = counts
        .iter()
        .zip(edges.windows(2))
        .map(|(&c, w)| c as f64 / n / (w[1] - w[0]))
        .collect();

    Histogram {
        edges,
        counts,
        density,
    }
}

/// Index of the half-open bin holding `v`; values at or past the last edge
/// fall in the last bin.
fn bin_index(v: f64, edges: &[f64]) -> usize {
    let inner = &edges[1..edges.len() - 1];
    inner.partition_point(|&e| e <= v)
}
