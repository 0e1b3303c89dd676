//! Run aggregation.
//!
//! Two passes turn raw runs into synthetic summary runs:
//!
//! - `repetition`: repeats of one configuration -> `_mean` / `_stddev`
//! - `complexity`: one run per input size -> `_BigO` / `_RMS`
//!
//! `family` groups a full run list and drives both passes.

pub mod complexity;
pub mod family;
pub mod repetition;

pub use complexity::*;
pub use family::*;
pub use repetition::*;

use crate::domain::RunRecord;

/// The label shared by every run, or an empty label if any run differs.
pub fn common_label<'a>(runs: impl IntoIterator<Item = &'a RunRecord>) -> String {
    let mut runs = runs.into_iter();
    let Some(first) = runs.next() else {
        return String::new();
    };
    if runs.all(|r| r.report_label == first.report_label) {
        first.report_label.clone()
    } else {
        String::new()
    }
}
