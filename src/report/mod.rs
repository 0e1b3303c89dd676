//! Reporting: console tables for aggregated runs.
//!
//! JSON export lives in `io::runs`; this module only renders text.

pub mod format;

pub use format::*;
