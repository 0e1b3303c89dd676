//! Big-O and RMS summaries across input sizes.

use tracing::debug;

use crate::aggregate::common_label;
use crate::domain::{GrowthClass, RunRecord};
use crate::error::AppError;
use crate::fit::{select_best_fit, zip_samples};

/// Fit a complexity series using the class requested on its first successful run.
///
/// See [`aggregate_complexity_as`].
pub fn aggregate_complexity(runs: &[RunRecord]) -> Result<Vec<RunRecord>, AppError> {
    let Some(first) = runs.iter().find(|r| !r.error_occurred) else {
        return Ok(Vec::new());
    };
    aggregate_complexity_as(runs, first.complexity)
}

/// Fit a complexity series (one run per input size) against `requested`.
///
/// CPU time is fitted first. The curve it selects is then imposed on the real
/// time series instead of searching again, so both summaries make the same
/// asymptotic claim even when noise would tilt an `Auto` search differently.
///
/// Emits `<family>_BigO` (coefficients as times, fitted class as complexity)
/// and `<family>_RMS` (normalized RMS divided by the time unit multiplier).
/// Errored runs are left out of both the fit and the label; fewer than two
/// usable runs yield no summary.
///
/// # Errors
/// Contract violation for zero-iteration runs or a `None` request, plus any
/// fitting failure from [`select_best_fit`].
pub fn aggregate_complexity_as(
    runs: &[RunRecord],
    requested: GrowthClass,
) -> Result<Vec<RunRecord>, AppError> {
    let usable: Vec<&RunRecord> = runs.iter().filter(|r| !r.error_occurred).collect();
    let Some(first) = usable.first() else {
        return Ok(Vec::new());
    };
    if usable.len() < 2 {
        debug!(
            benchmark = %first.benchmark_name,
            runs = usable.len(),
            "not enough input sizes to fit complexity"
        );
        return Ok(Vec::new());
    }

    let mut sizes = Vec::with_capacity(usable.len());
    let mut real_time = Vec::with_capacity(usable.len());
    let mut cpu_time = Vec::with_capacity(usable.len());
    for run in &usable {
        if run.iterations == 0 {
            return Err(AppError::contract(format!(
                "Run '{}' reports zero iterations.",
                run.benchmark_name
            )));
        }
        sizes.push(run.complexity_n);
        real_time.push(run.real_time_per_iteration());
        cpu_time.push(run.cpu_time_per_iteration());
    }

    let result_cpu = select_best_fit(&zip_samples(&sizes, &cpu_time)?, requested)?;
    let chosen = GrowthClass::from(result_cpu.curve);
    let result_real = select_best_fit(&zip_samples(&sizes, &real_time)?, chosen)?;

    let family = first.family_name();
    let label = common_label(usable.iter().copied());
    let time_unit = first.time_unit;
    let multiplier = time_unit.multiplier();

    debug!(
        family,
        curve = result_cpu.curve.name(),
        cpu_rms = result_cpu.normalized_rms,
        real_rms = result_real.normalized_rms,
        "complexity fitted"
    );

    let big_o = RunRecord {
        benchmark_name: format!("{family}_BigO"),
        report_label: label.clone(),
        iterations: 0,
        real_accumulated_time: result_real.coefficient,
        cpu_accumulated_time: result_cpu.coefficient,
        complexity: chosen,
        time_unit,
        report_big_o: true,
        ..RunRecord::default()
    };

    let rms = RunRecord {
        benchmark_name: format!("{family}_RMS"),
        report_label: label,
        iterations: 0,
        real_accumulated_time: result_real.normalized_rms / multiplier,
        cpu_accumulated_time: result_cpu.normalized_rms / multiplier,
        complexity: chosen,
        time_unit,
        report_rms: true,
        ..RunRecord::default()
    };

    Ok(vec![big_o, rms])
}
