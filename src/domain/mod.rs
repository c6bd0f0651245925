//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run configuration (`CorrelationMethod`, `FigureSize`, `MatrixConfig`)
//! - raw caller input (`RawColumn`, `Value`)
//! - the validated, homogeneous table every statistic runs on (`NumericTable`)

pub mod table;
pub mod types;

pub use table::*;
pub use types::*;
