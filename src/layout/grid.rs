//! Subplot geometry.
//!
//! The figure keeps a 1 % margin on every side and separates cells by 3 % of
//! the mean cell extent, in both directions:
//!
//! ```text
//! cell_w = usable_w / (n + (n - 1) * wspace)
//! gap_w  = cell_w * wspace
//! ```

use crate::domain::FigureSize;

pub const MARGIN_LEFT: f64 = 0.01;
pub const MARGIN_RIGHT: f64 = 0.99;
pub const MARGIN_BOTTOM: f64 = 0.01;
pub const MARGIN_TOP: f64 = 0.99;
pub const WSPACE: f64 = 0.03;
pub const HSPACE: f64 = 0.03;

/// Pixel rectangle of one cell; origin at the figure's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    /// Mean of width and height; drives marker and font scaling.
    pub fn extent(&self) -> f64 {
        (self.width + self.height) / 2.0
    }
}

/// Rectangles for every cell of an `n × n` grid, row-major.
pub fn cell_rects(size: &FigureSize, n: usize) -> Vec<CellRect> {
    let (w_px, h_px) = size.pixels();
    let (w_px, h_px) = (w_px as f64, h_px as f64);
    let n = n.max(1);
    let nf = n as f64;

    let usable_w = w_px * (MARGIN_RIGHT - MARGIN_LEFT);
    let usable_h = h_px * (MARGIN_TOP - MARGIN_BOTTOM);
    let cell_w = usable_w / (nf + (nf - 1.0) * WSPACE);
    let cell_h = usable_h / (nf + (nf - 1.0) * HSPACE);
    let gap_w = cell_w * WSPACE;
    let gap_h = cell_h * HSPACE;

    let left = w_px * MARGIN_LEFT;
    let top = h_px * (1.0 - MARGIN_TOP);

    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            out.push(CellRect {
                x: left + j as f64 * (cell_w + gap_w),
                y: top + i as f64 * (cell_h + gap_h),
                width: cell_w,
                height: cell_h,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_fills_margins() {
        let rects = cell_rects(&FigureSize::default(), 1);
        assert_eq!(rects.len(), 1);
        let r = rects[0];
        assert!((r.x - 15.0).abs() < 1e-9);
        assert!((r.y - 15.0).abs() < 1e-9);
        assert!((r.width - 1470.0).abs() < 1e-9);
        assert!((r.height - 1470.0).abs() < 1e-9);
    }

    #[test]
    fn cells_tile_usable_area_with_gaps() {
        let size = FigureSize::new(8.0, 6.0).unwrap();
        let n = 3;
        let rects = cell_rects(&size, n);
        assert_eq!(rects.len(), n * n);

        let last = rects[n * n - 1];
        assert!((last.x + last.width - 800.0 * MARGIN_RIGHT).abs() < 1e-6);
        assert!((last.y + last.height - 600.0 * MARGIN_TOP).abs() < 1e-6);

        let gap = rects[1].x - (rects[0].x + rects[0].width);
        assert!((gap - rects[0].width * WSPACE).abs() < 1e-9);
        assert!(rects[3].y > rects[0].y + rects[0].height);
    }
}
