//! Backend-independent geometry for the matrix.
//!
//! - subplot rectangles and spacing (`grid`)
//! - per-cell tick placement (`ticks`)
//! - coefficient/label font sizing (`font`)
//! - padded data ranges (`range`)

pub mod font;
pub mod grid;
pub mod range;
pub mod ticks;

pub use font::*;
pub use grid::*;
pub use range::*;
pub use ticks::*;
