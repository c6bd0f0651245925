//! Alternating tick placement.
//!
//! Only the outer ring of cells shows tick labels, and adjacent cells alternate
//! which side (or whether) they show them, so labels of neighbours never
//! collide:
//!
//! - x axis: first row shows odd columns on top, last row shows even columns
//!   at the bottom, every other row hides x ticks
//! - y axis: first column shows odd rows on the left, last column shows even
//!   rows on the right, every other column hides y ticks
//!
//! The first-row/first-column rule takes precedence when `n == 1`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XTicks {
    Hidden,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YTicks {
    Hidden,
    Left,
    Right,
}

/// Tick placement for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPlacement {
    pub x: XTicks,
    pub y: YTicks,
}

impl TickPlacement {
    pub fn for_cell(row: usize, col: usize, n: usize) -> Self {
        let last = n.saturating_sub(1);

        let x = match (row == 0, row == last, col % 2 == 1) {
            (true, _, true) => XTicks::Top,
            (false, true, false) => XTicks::Bottom,
            _ => XTicks::Hidden,
        };

        let y = match (col == 0, col == last, row % 2 == 1) {
            (true, _, true) => YTicks::Left,
            (false, true, false) => YTicks::Right,
            _ => YTicks::Hidden,
        };

        Self { x, y }
    }

    pub fn is_hidden(&self) -> bool {
        self.x == XTicks::Hidden && self.y == YTicks::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_hides_everything() {
        assert!(TickPlacement::for_cell(0, 0, 1).is_hidden());
    }

    #[test]
    fn four_by_four_alternates_outer_ring() {
        let n = 4;
        let xs: Vec<XTicks> = (0..n).map(|j| TickPlacement::for_cell(0, j, n).x).collect();
        assert_eq!(xs, vec![XTicks::Hidden, XTicks::Top, XTicks::Hidden, XTicks::Top]);

        let xs: Vec<XTicks> = (0..n).map(|j| TickPlacement::for_cell(n - 1, j, n).x).collect();
        assert_eq!(xs, vec![XTicks::Bottom, XTicks::Hidden, XTicks::Bottom, XTicks::Hidden]);

        let ys: Vec<YTicks> = (0..n).map(|i| TickPlacement::for_cell(i, 0, n).y).collect();
        assert_eq!(ys, vec![YTicks::Hidden, YTicks::Left, YTicks::Hidden, YTicks::Left]);

        let ys: Vec<YTicks> = (0..n).map(|i| TickPlacement::for_cell(i, n - 1, n).y).collect();
        assert_eq!(ys, vec![YTicks::Right, YTicks::Hidden, YTicks::Right, YTicks::Hidden]);

        assert!(TickPlacement::for_cell(1, 1, n).is_hidden());
        assert!(TickPlacement::for_cell(2, 2, n).is_hidden());
    }
}
