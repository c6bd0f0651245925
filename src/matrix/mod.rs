//! The association matrix: cell model, figure and the `render` entry point.

pub mod cell;
pub mod render;

use std::ops::{Index, IndexMut};

pub use cell::*;
pub use render::*;

use crate::domain::{CorrelationMethod, FigureSize};
use crate::math::CorrelationMatrix;

/// A fully computed matrix, ready to draw.
///
/// Cells are stored row-major; use the [`CellGrid`] handles returned by
/// [`render`] (or [`Figure::cell`]) to reach individual cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub(crate) size: FigureSize,
    pub(crate) columns: Vec<String>,
    pub(crate) correlations: CorrelationMatrix,
    pub(crate) cells: Vec<Cell>,
}

impl Figure {
    pub fn size(&self) -> FigureSize {
        self.size
    }

    pub fn method(&self) -> CorrelationMethod {
        self.correlations.method()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Unrounded coefficients for every column pair.
    pub fn correlations(&self) -> &CorrelationMatrix {
        &self.correlations
    }

    /// Grid dimension (N).
    pub fn n(&self) -> usize {
        self.columns.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.n() && col < self.n() {
            Some(&self.cells[row * self.n() + col])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.kind() == kind)
    }
}

impl Index<CellHandle> for Figure {
    type Output = Cell;

    fn index(&self, handle: CellHandle) -> &Cell {
        &self.cells[handle.row * self.n() + handle.col]
    }
}

impl IndexMut<CellHandle> for Figure {
    fn index_mut(&mut self, handle: CellHandle) -> &mut Cell {
        let n = self.n();
        &mut self.cells[handle.row * n + handle.col]
    }
}
