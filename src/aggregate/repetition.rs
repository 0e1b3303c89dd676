//! Mean / standard deviation across repetitions of one benchmark.

use tracing::debug;

use crate::aggregate::common_label;
use crate::domain::{GrowthClass, RunRecord};
use crate::error::AppError;
use crate::math::WeightedStat;

/// Summarize repeated runs of the same benchmark into `_mean` and `_stddev` runs.
///
/// Errored runs are skipped when accumulating but still count as repetitions.
/// Fewer than two successful runs yield no summary. Each run contributes with
/// weight equal to its iteration count.
///
/// The `_mean` run keeps the common iteration count and stores
/// `mean * iterations` as accumulated time, so per-iteration division by a
/// reporter gives back the mean. The `_stddev` run has zero iterations and
/// stores the raw standard deviations.
///
/// # Errors
/// Contract violation if the runs disagree on name or iteration count, or
/// report zero iterations.
pub fn aggregate_repeats(runs: &[RunRecord]) -> Result<Vec<RunRecord>, AppError> {
    let Some(first) = runs.first() else {
        return Ok(Vec::new());
    };

    // All repetitions run with the same iteration count, so the first run speaks for all.
    let run_iterations = first.iterations;
    for run in runs {
        if run.benchmark_name != first.benchmark_name {
            return Err(AppError::contract(format!(
                "Repetitions mix benchmarks '{}' and '{}'.",
                first.benchmark_name, run.benchmark_name
            )));
        }
        if run.iterations != run_iterations {
            return Err(AppError::contract(format!(
                "Repetitions of '{}' ran {} and {} iterations.",
                first.benchmark_name, run_iterations, run.iterations
            )));
        }
    }

    let error_count = runs.iter().filter(|r| r.error_occurred).count();
    if runs.len() - error_count < 2 {
        debug!(
            benchmark = %first.benchmark_name,
            runs = runs.len(),
            errors = error_count,
            "not enough successful repetitions to aggregate"
        );
        return Ok(Vec::new());
    }
    if run_iterations == 0 {
        return Err(AppError::contract(format!(
            "Repetitions of '{}' report zero iterations.",
            first.benchmark_name
        )));
    }

    let mut real_time = WeightedStat::new();
    let mut cpu_time = WeightedStat::new();
    let mut bytes_per_second = WeightedStat::new();
    let mut items_per_second = WeightedStat::new();

    for run in runs {
        if run.error_occurred {
            debug!(benchmark = %run.benchmark_name, "excluding errored repetition");
            continue;
        }
        let weight = run.iterations as f64;
        real_time.observe(run.real_time_per_iteration(), weight);
        cpu_time.observe(run.cpu_time_per_iteration(), weight);
        bytes_per_second.observe(run.bytes_per_second, weight);
        items_per_second.observe(run.items_per_second, weight);
    }

    let label = common_label(runs);
    let iterations = run_iterations as f64;

    let mean = RunRecord {
        benchmark_name: format!("{}_mean", first.benchmark_name),
        report_label: label.clone(),
        iterations: run_iterations,
        real_accumulated_time: real_time.mean() * iterations,
        cpu_accumulated_time: cpu_time.mean() * iterations,
        bytes_per_second: bytes_per_second.mean(),
        items_per_second: items_per_second.mean(),
        complexity_n: first.complexity_n,
        complexity: GrowthClass::None,
        time_unit: first.time_unit,
        ..RunRecord::default()
    };

    let stddev = RunRecord {
        benchmark_name: format!("{}_stddev", first.benchmark_name),
        report_label: label,
        iterations: 0,
        real_accumulated_time: real_time.stddev(),
        cpu_accumulated_time: cpu_time.stddev(),
        bytes_per_second: bytes_per_second.stddev(),
        items_per_second: items_per_second.stddev(),
        complexity_n: first.complexity_n,
        complexity: GrowthClass::None,
        time_unit: first.time_unit,
        ..RunRecord::default()
    };

    Ok(vec![mean, stddev])
}
