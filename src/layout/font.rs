//! Font sizing for coefficient and label text.
//!
//! Size grows linearly with `|r|` between two pixel bounds:
//!
//! ```text
//! size(m) = min_px + (max_px - min_px) * clamp(|m|, 0, 1)
//! ```
//!
//! `max_px` is a quarter of the cell extent, so a perfect correlation fills a
//! good share of its cell. A `NaN` magnitude maps to `min_px`.

/// Smallest font used for any coefficient, in pixels.
pub const MIN_FONT_PX: f64 = 8.0;

/// Linear `magnitude -> font size` mapping with fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub min_px: f64,
    pub max_px: f64,
}

impl FontScale {
    /// Scale for coefficient text in a cell of the given extent (pixels).
    pub fn for_coefficient(cell_extent: f64) -> Self {
        Self {
            min_px: MIN_FONT_PX,
            max_px: (cell_extent / 4.0).max(MIN_FONT_PX),
        }
    }

    /// Scale for the column-name label on the diagonal: half the coefficient maximum.
    pub fn for_label(cell_extent: f64) -> Self {
        Self {
            min_px: MIN_FONT_PX,
            max_px: (cell_extent / 8.0).max(MIN_FONT_PX),
        }
    }

    pub fn size_for(&self, magnitude: f64) -> f64 {
        let m = if magnitude.is_nan() {
            0.0
        } else {
            magnitude.abs().min(1.0)
        };
        self.min_px + (self.max_px - self.min_px) * m
    }
}
