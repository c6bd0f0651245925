//! Plotters drawing of a computed [`Figure`](crate::matrix::Figure).
//!
//! The figure never touches global plotting state: every draw call receives
//! the drawing area it paints on, and the area is borrowed for the duration
//! of the call only.
//!
//! - any backend: [`Figure::draw`](crate::matrix::Figure::draw)
//! - in-memory SVG: [`Figure::to_svg`](crate::matrix::Figure::to_svg)

pub mod cell_chart;

pub use cell_chart::*;
