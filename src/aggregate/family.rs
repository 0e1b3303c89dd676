//! Group a flat run list into benchmark families and aggregate each one.
//!
//! A family is every run sharing the name prefix before the first `/`
//! (`BM_Insert/8`, `BM_Insert/64`, ...). Within a family, runs with the same
//! full name are repetitions of one configuration.
//!
//! Families are independent, so they are aggregated in parallel. Output order
//! follows first appearance in the input.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{aggregate_complexity_as, aggregate_repeats};
use crate::domain::{AggregateConfig, GrowthClass, RunRecord};
use crate::error::AppError;

/// Runs of one configuration and their `_mean` / `_stddev` summary (if any).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepetitionGroup {
    pub name: String,
    pub runs: Vec<RunRecord>,
    pub summary: Vec<RunRecord>,
}

/// Aggregated view of one benchmark family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyReport {
    pub family: String,
    pub groups: Vec<RepetitionGroup>,
    /// `_BigO` / `_RMS` records, empty when no complexity was fitted.
    pub complexity: Vec<RunRecord>,
}

impl FamilyReport {
    /// Every record in report order: each configuration's runs followed by
    /// its summary, then the complexity summary.
    pub fn records(&self) -> impl Iterator<Item = &RunRecord> {
        self.groups
            .iter()
            .flat_map(|g| g.runs.iter().chain(g.summary.iter()))
            .chain(self.complexity.iter())
    }

    /// Only the synthesized records.
    pub fn aggregates(&self) -> impl Iterator<Item = &RunRecord> {
        self.groups
            .iter()
            .flat_map(|g| g.summary.iter())
            .chain(self.complexity.iter())
    }
}

/// Aggregate a harness run list.
///
/// Records that are already summaries (`_mean`, `_BigO`, ...) are ignored, so
/// a previously written report can be fed back in.
pub fn aggregate_runs(
    runs: &[RunRecord],
    config: &AggregateConfig,
) -> Result<Vec<FamilyReport>, AppError> {
    let raw: Vec<&RunRecord> = runs
        .iter()
        .filter(|r| {
            let keep = !r.is_aggregate();
            if !keep {
                debug!(benchmark = %r.benchmark_name, "ignoring existing summary record");
            }
            keep
        })
        .collect();

    let families = group_ordered(raw, |r| r.family_name().to_string());

    families
        .into_par_iter()
        .map(|(family, members)| aggregate_family(family, members, config))
        .collect()
}

fn aggregate_family(
    family: String,
    members: Vec<&RunRecord>,
    config: &AggregateConfig,
) -> Result<FamilyReport, AppError> {
    let by_name = group_ordered(members.clone(), |r| r.benchmark_name.clone());

    let mut groups = Vec::with_capacity(by_name.len());
    for (name, group_runs) in by_name {
        let runs: Vec<RunRecord> = group_runs.into_iter().cloned().collect();
        let summary = if config.repetitions && runs.len() > 1 {
            aggregate_repeats(&runs)?
        } else {
            Vec::new()
        };
        groups.push(RepetitionGroup {
            name,
            runs,
            summary,
        });
    }

    let mut complexity = Vec::new();
    if config.complexity {
        let series: Vec<RunRecord> = members
            .iter()
            .filter(|r| !r.error_occurred)
            .map(|r| (*r).clone())
            .collect();
        // Errored records are often sparse, so the request comes from a usable run.
        let requested = config
            .complexity_override
            .or_else(|| series.first().map(|r| r.complexity))
            .unwrap_or(GrowthClass::None);
        match requested {
            GrowthClass::None => {}
            _ if distinct_sizes(&series) >= 2 => {
                complexity = aggregate_complexity_as(&series, requested)?;
            }
            _ => debug!(%family, "complexity requested but fewer than 2 input sizes"),
        }
    }

    Ok(FamilyReport {
        family,
        groups,
        complexity,
    })
}

fn distinct_sizes(runs: &[RunRecord]) -> usize {
    let mut sizes: Vec<u64> = runs.iter().map(|r| r.complexity_n).collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes.len()
}

/// Group items by key, keeping groups (and items within them) in first-seen order.
fn group_ordered<'a>(
    runs: Vec<&'a RunRecord>,
    key: impl Fn(&RunRecord) -> String,
) -> Vec<(String, Vec<&'a RunRecord>)> {
    let mut groups: Vec<(String, Vec<&'a RunRecord>)> = Vec::new();
    for run in runs {
        let k = key(run);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(run),
            None => groups.push((k, vec![run])),
        }
    }
    groups
}
