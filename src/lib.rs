//! `assoc-matrix` library crate.
//!
//! Builds an association matrix for the numeric columns of a table:
//!
//! - diagonal cells: density histogram of each column (10 bins)
//! - lower cells: scatter of column `j` against column `i` with a least squares line
//! - upper cells: Pearson or Spearman coefficient, two decimals, sized by magnitude
//!
//! ```no_run
//! use assoc_matrix::{MatrixConfig, data::uniform_table, render_table};
//!
//! let table = uniform_table(&["A", "B", "C"], 100, 42)?;
//! let (figure, cells) = render_table(&table, &MatrixConfig::default())?;
//! let svg = figure.to_svg()?;
//! # let _ = (cells, svg);
//! # Ok::<(), assoc_matrix::MatrixError>(())
//! ```

pub mod data;
pub mod domain;
pub mod error;
pub mod layout;
pub mod math;
pub mod matrix;
pub mod plot;

pub use domain::{CorrelationMethod, FigureSize, MatrixConfig, NumericTable, RawColumn, Value};
pub use error::{InvalidInput, MatrixError};
pub use matrix::{
    Cell, CellContent, CellGrid, CellHandle, CellKind, Figure, render, render_table, render_with,
};
