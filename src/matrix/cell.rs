//! The cell model: what each grid position shows, independent of any backend.

use plotters::style::RGBColor;

use crate::layout::{AxisRange, CellRect, TickPlacement};
use crate::math::{Histogram, LinearFit};

/// Position of a cell relative to the main diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Diagonal,
    Lower,
    Upper,
}

impl CellKind {
    pub fn of(row: usize, col: usize) -> Self {
        match row.cmp(&col) {
            std::cmp::Ordering::Equal => CellKind::Diagonal,
            std::cmp::Ordering::Greater => CellKind::Lower,
            std::cmp::Ordering::Less => CellKind::Upper,
        }
    }
}

/// A rounded coefficient and the font size it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    /// Two-decimal value; `NaN` when either column is degenerate.
    pub value: f64,
    pub font_px: f64,
}

impl Coefficient {
    /// Undefined correlation (zero-variance input).
    pub fn is_flagged(&self) -> bool {
        self.value.is_nan()
    }

    /// Text drawn in the cell: the value to two decimals, or `n/a`.
    pub fn label(&self) -> String {
        if self.is_flagged() {
            return "n/a".to_string();
        }
        // Avoid printing "-0.00".
        let v = if self.value == 0.0 { 0.0 } else { self.value };
        format!("{v:.2}")
    }
}

/// Scatter points plus the optional least squares trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub points: Vec<(f64, f64)>,
    pub marker_px: f64,
    pub fit: Option<LinearFit>,
    /// The fit sampled across the observed x range; empty without a fit.
    pub line: Vec<(f64, f64)>,
}

impl Scatter {
    pub fn equation(&self) -> Option<String> {
        self.fit.map(|f| f.equation())
    }
}

/// Column-name label drawn on a diagonal cell.
#[derive(Debug, Clone, PartialEq)]
pub struct NameLabel {
    pub text: String,
    pub font_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Histogram {
        histogram: Histogram,
        label: NameLabel,
    },
    Scatter(Scatter),
    Coefficient(Coefficient),
}

/// Colors a caller may override per cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub series: RGBColor,
    pub line: RGBColor,
    pub text: RGBColor,
    pub frame: RGBColor,
    pub background: RGBColor,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            series: RGBColor(31, 119, 180),
            line: RGBColor(0, 0, 0),
            text: RGBColor(0, 0, 0),
            frame: RGBColor(0, 0, 0),
            background: RGBColor(255, 255, 255),
        }
    }
}

/// One subplot of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub rect: CellRect,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub ticks: TickPlacement,
    pub content: CellContent,
    pub style: CellStyle,
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        CellKind::of(self.row, self.col)
    }

    pub fn histogram(&self) -> Option<&Histogram> {
        match &self.content {
            CellContent::Histogram { histogram, .. } => Some(histogram),
            _ => None,
        }
    }

    pub fn scatter(&self) -> Option<&Scatter> {
        match &self.content {
            CellContent::Scatter(s) => Some(s),
            _ => None,
        }
    }

    pub fn coefficient(&self) -> Option<&Coefficient> {
        match &self.content {
            CellContent::Coefficient(c) => Some(c),
            _ => None,
        }
    }
}

/// Index of a cell inside a [`super::Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle {
    pub row: usize,
    pub col: usize,
}

/// `n × n` array of handles, row-major, returned alongside the figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    n: usize,
    handles: Vec<CellHandle>,
}

impl CellGrid {
    pub fn new(n: usize) -> Self {
        let handles = (0..n)
            .flat_map(|row| (0..n).map(move |col| CellHandle { row, col }))
            .collect();
        Self { n, handles }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellHandle> {
        if row < self.n && col < self.n {
            Some(self.handles[row * self.n + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[CellHandle] {
        &self.handles[row * self.n..(row + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellHandle]> {
        self.handles.chunks(self.n.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = CellHandle> + '_ {
        self.handles.iter().copied()
    }
}
