//! `bench-bigo` library crate.
//!
//! Post-processing for micro-benchmark runs: repetitions of one benchmark are
//! summarized into mean/stddev runs, and a family measured over input sizes is
//! fitted against the standard growth curves to report an asymptotic class.
//!
//! The binary (`bigo`) only parses arguments and prints; everything it does is
//! reachable from here.

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
