//! Mathematical utilities: least squares, correlation, histograms, rounding.

pub mod correlation;
pub mod histogram;
pub mod ols;
pub mod rounding;

pub use correlation::*;
pub use histogram::*;
pub use ols::*;
pub use rounding::*;
