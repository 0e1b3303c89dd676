//! Data sources.
//!
//! - `sample`: deterministic synthetic complexity series

pub mod sample;

pub use sample::*;
