//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - complexity request / fitted curve enums (`GrowthClass`, `Curve`)
//! - the harness run record (`RunRecord`) and its time unit
//! - fit inputs/outputs (`SizeTimeSample`, `FitResult`)

pub mod types;

pub use types::*;
