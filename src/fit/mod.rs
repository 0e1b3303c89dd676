//! Complexity fitting.
//!
//! Responsibilities:
//!
//! - validate a size/time series against the fitting contract
//! - fit a requested curve, or search the curve family for `Auto`

pub mod fitter;

pub use fitter::*;
