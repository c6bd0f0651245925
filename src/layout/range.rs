//! Axis ranges with a small margin around the data.

/// Fraction of the span added on each side of a data range.
pub const RANGE_PAD: f64 = 0.05;

/// Closed axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Padded range enclosing `values`; `[0, 1]` when nothing finite is given.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if !(min.is_finite() && max.is_finite()) {
            return Self { min: 0.0, max: 1.0 };
        }
        pad_range(min, max, RANGE_PAD)
    }

    /// `max - min`; `inf` when the range is wider than `f64::MAX`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Point at fraction `t` of the way from `min` to `max`.
    pub fn at(&self, t: f64) -> f64 {
        self.min * (1.0 - t) + self.max * t
    }

    pub fn as_range(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }
}

/// Widen `[min, max]` by `frac` of its span on both sides.
///
/// A zero span is widened by a fixed amount so the range is never empty. The
/// result is clamped to finite values.
pub fn pad_range(min: f64, max: f64, frac: f64) -> AxisRange {
    let half_span = (max / 2.0 - min / 2.0).abs();
    let pad = if half_span == 0.0 {
        (min.abs() * frac).max(0.5)
    } else {
        half_span * (2.0 * frac)
    };
    AxisRange {
        min: (min - pad).max(f64::MIN),
        max: (max + pad).min(f64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_both_sides() {
        let r = AxisRange::from_values([0.0, 10.0, 5.0]);
        assert!((r.min + 0.5).abs() < 1e-12);
        assert!((r.max - 10.5).abs() < 1e-12);
    }

    #[test]
    fn zero_span_is_widened() {
        let r = AxisRange::from_values([2.0, 2.0]);
        assert!(r.span() > 0.0);
        assert!(r.min < 2.0 && r.max > 2.0);
    }

    #[test]
    fn no_finite_values_falls_back_to_unit() {
        let r = AxisRange::from_values([f64::NAN]);
        assert_eq!(r, AxisRange { min: 0.0, max: 1.0 });
    }

    #[test]
    fn extreme_values_stay_finite() {
        let r = AxisRange::from_values([-1e308, 0.0, 1e308]);
        assert!(r.min.is_finite() && r.max.is_finite(), "{r:?}");
        assert!(r.min < -1e308 && r.max > 1e308);
        assert_eq!(r.at(0.5), 0.0);

        let r = AxisRange::from_values([f64::MIN, f64::MAX]);
        assert_eq!(r.min, f64::MIN);
        assert_eq!(r.max, f64::MAX);
    }

    #[test]
    fn at_interpolates() {
        let r = AxisRange { min: 2.0, max: 4.0 };
        assert_eq!(r.at(0.0), 2.0);
        assert_eq!(r.at(0.5), 3.0);
        assert_eq!(r.at(1.0), 4.0);
    }
}
