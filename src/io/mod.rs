//! Input/output helpers.
//!
//! - run record ingest (`runs::read_runs`)
//! - report export (`runs::write_report_json`)

pub mod runs;

pub use runs::*;
