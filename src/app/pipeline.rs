//! Shared aggregation pipeline used by every command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! runs -> family grouping -> repetition stats + complexity fits -> report
//!
//! The commands can then focus on where runs come from and where reports go.

use tracing::{debug, warn};

use crate::aggregate::{FamilyReport, aggregate_runs};
use crate::domain::{AggregateConfig, RunRecord};
use crate::error::AppError;

/// All computed outputs of a single aggregation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub families: Vec<FamilyReport>,
    /// Number of input runs flagged as errored.
    pub errored_runs: usize,
}

impl RunOutput {
    /// The synthesized records only, in report order.
    pub fn aggregates(&self) -> Vec<&RunRecord> {
        self.families.iter().flat_map(|f| f.aggregates()).collect()
    }
}

/// Aggregate `runs` according to `config`.
pub fn run_pipeline(runs: &[RunRecord], config: &AggregateConfig) -> Result<RunOutput, AppError> {
    if runs.is_empty() {
        return Err(AppError::invalid_input("No run records to aggregate."));
    }

    let errored_runs = runs.iter().filter(|r| r.error_occurred).count();
    if errored_runs > 0 {
        warn!(errored_runs, "some runs reported errors and are excluded from statistics");
    }

    let families = aggregate_runs(runs, config)?;
    debug!(
        families = families.len(),
        runs = runs.len(),
        "aggregation finished"
    );

    Ok(RunOutput {
        families,
        errored_runs,
    })
}
