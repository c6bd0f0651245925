//! Synthetic demo tables.
//!
//! The library never loads data itself; these seeded generators exist so
//! examples and tests have realistic input without fixtures.

pub mod sample;

pub use sample::*;
