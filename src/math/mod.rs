//! Mathematical utilities: least squares through the origin and weighted statistics.

pub mod ols;
pub mod stat;

pub use ols::*;
pub use stat::*;
