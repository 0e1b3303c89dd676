//! Best-curve selection for one size/time series.
//!
//! Given:
//! - input sizes `n_i`
//! - observed times per iteration `t_i`
//! - a requested `GrowthClass`
//!
//! we either fit the one requested curve, or (for `Auto`) fit every curve in
//! `Curve::AUTO_CANDIDATES` and keep the lowest normalized RMS.

use tracing::{debug, trace};

use crate::domain::{Curve, FitResult, GrowthClass, SizeTimeSample};
use crate::error::AppError;
use crate::math::fit_curve;

/// Pair parallel size and time sequences into samples.
///
/// # Errors
/// Contract violation if the sequences differ in length.
pub fn zip_samples(sizes: &[u64], times: &[f64]) -> Result<Vec<SizeTimeSample>, AppError> {
    if sizes.len() != times.len() {
        return Err(AppError::contract(format!(
            "Size and time sequences differ in length ({} vs {}).",
            sizes.len(),
            times.len()
        )));
    }
    Ok(sizes
        .iter()
        .zip(times)
        .map(|(&n, &time)| SizeTimeSample::new(n, time))
        .collect())
}

/// Fit `samples` against the requested complexity.
///
/// A concrete request fits exactly that curve. `Auto` starts from `Constant` as
/// the incumbent and replaces it only when a later candidate has a strictly
/// lower normalized RMS, so ties keep the lower-order curve. Candidates whose
/// shape is undefined or degenerate for these sizes are skipped.
///
/// # Errors
/// - contract violation for fewer than 2 samples or a `None` request
/// - whatever `fit_curve` reports for the requested curve (or for the
///   `Constant` baseline under `Auto`)
pub fn select_best_fit(
    samples: &[SizeTimeSample],
    requested: GrowthClass,
) -> Result<FitResult, AppError> {
    if samples.len() < 2 {
        return Err(AppError::contract(format!(
            "Complexity fitting needs at least 2 runs, got {}.",
            samples.len()
        )));
    }

    match requested {
        GrowthClass::None => Err(AppError::contract(
            "Complexity fitting was invoked without a requested complexity.",
        )),
        GrowthClass::Auto => select_auto(samples),
        fixed => {
            let curve = fixed.to_curve().ok_or_else(|| {
                AppError::contract(format!("No curve for requested complexity {fixed:?}."))
            })?;
            fit_one(samples, curve)
        }
    }
}

fn fit_one(samples: &[SizeTimeSample], curve: Curve) -> Result<FitResult, AppError> {
    let fit = fit_curve(samples, curve)?;
    Ok(FitResult {
        curve,
        coefficient: fit.coefficient,
        normalized_rms: fit.normalized_rms,
    })
}

fn select_auto(samples: &[SizeTimeSample]) -> Result<FitResult, AppError> {
    let (baseline, rest) = Curve::AUTO_CANDIDATES.split_first().ok_or_else(|| {
        AppError::contract("Auto complexity has no candidate curves.")
    })?;

    // The baseline must fit: its failures (zero mean time) hold for every curve.
    let mut best = fit_one(samples, *baseline)?;
    trace!(curve = best.curve.name(), rms = best.normalized_rms, "baseline fit");

    for &curve in rest {
        if !curve.is_defined_for(samples.iter().map(|s| s.n)) {
            debug!(curve = curve.name(), "skipping curve undefined at n = 0");
            continue;
        }
        let fit = match fit_one(samples, curve) {
            Ok(fit) => fit,
            Err(err) => {
                debug!(curve = curve.name(), %err, "skipping candidate");
                continue;
            }
        };
        trace!(curve = curve.name(), rms = fit.normalized_rms, "candidate fit");
        if fit.normalized_rms < best.normalized_rms {
            best = fit;
        }
    }

    debug!(
        curve = best.curve.name(),
        coefficient = best.coefficient,
        rms = best.normalized_rms,
        "auto complexity selected"
    );
    Ok(best)
}
