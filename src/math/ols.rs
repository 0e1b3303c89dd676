//! One-parameter least squares through the origin.
//!
//! For a fixed shape `f` we solve:
//!
//! ```text
//! minimize Σ (time_i - c * f(n_i))^2
//! ```
//!
//! which has the closed form `c = Σ time_i f(n_i) / Σ f(n_i)^2`. The shape is
//! fixed, so this is a linear regression in `f(n)`-space with no intercept.
//!
//! Goodness of fit is reported as the RMS residual divided by the mean observed
//! time. Dividing by the mean makes the error scale-free, so fits of different
//! curves (and of series measured in different units) compare directly.

use nalgebra::DVector;

use crate::domain::{Curve, SizeTimeSample};
use crate::error::AppError;

/// Coefficient and normalized error of one curve against one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSq {
    pub coefficient: f64,
    pub normalized_rms: f64,
}

/// Fit `curve` to `samples`.
///
/// # Errors
/// - contract violation if fewer than 2 samples are given, or a `log2` shape
///   is asked to evaluate `n = 0`
/// - numeric failure if the mean time is zero (or non-finite) or the shape
///   is identically zero over the sizes
pub fn fit_curve(samples: &[SizeTimeSample], curve: Curve) -> Result<LeastSq, AppError> {
    let count = samples.len();
    if count < 2 {
        return Err(AppError::contract(format!(
            "Least squares needs at least 2 points, got {count}."
        )));
    }
    if !curve.is_defined_for(samples.iter().map(|s| s.n)) {
        return Err(AppError::contract(format!(
            "Curve {} is undefined for input size 0.",
            curve.name()
        )));
    }

    let gn = DVector::from_iterator(count, samples.iter().map(|s| curve.eval(s.n)));
    let time = DVector::from_iterator(count, samples.iter().map(|s| s.time));

    let mean = time.mean();
    if !mean.is_finite() || mean == 0.0 {
        return Err(AppError::numeric(format!(
            "Cannot normalize fit error: mean time is {mean}."
        )));
    }

    let sigma_gn_squared = gn.norm_squared();
    if sigma_gn_squared == 0.0 {
        return Err(AppError::numeric(format!(
            "Curve {} is zero at every input size.",
            curve.name()
        )));
    }

    let coefficient = time.dot(&gn) / sigma_gn_squared;
    let residuals = &time - gn.scale(coefficient);
    let rms = (residuals.norm_squared() / count as f64).sqrt();
    let normalized_rms = rms / mean;

    if !(coefficient.is_finite() && normalized_rms.is_finite()) {
        return Err(AppError::numeric(format!(
            "Non-finite fit for curve {} (coefficient={coefficient}, rms={normalized_rms}).",
            curve.name()
        )));
    }

    Ok(LeastSq {
        coefficient,
        normalized_rms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(sizes: &[u64], f: impl Fn(u64) -> f64) -> Vec<SizeTimeSample> {
        sizes.iter().map(|&n| SizeTimeSample::new(n, f(n))).collect()
    }

    #[test]
    fn exact_linear_series_recovers_coefficient() {
        let samples = series(&[8, 64, 512, 4096], |n| 3.5e-9 * n as f64);
        let fit = fit_curve(&samples, Curve::N).unwrap();
        assert!((fit.coefficient - 3.5e-9).abs() < 1e-20, "coef={}", fit.coefficient);
        assert!(fit.normalized_rms < 1e-12, "rms={}", fit.normalized_rms);
    }

    #[test]
    fn constant_fit_is_the_mean() {
        // With f = 1 the coefficient is Σt / count.
        let samples = vec![
            SizeTimeSample::new(1, 2.0),
            SizeTimeSample::new(2, 4.0),
            SizeTimeSample::new(3, 6.0),
        ];
        let fit = fit_curve(&samples, Curve::Constant).unwrap();
        assert!((fit.coefficient - 4.0).abs() < 1e-12);

        // Residuals are [-2, 0, 2]: rms = sqrt(8/3), normalized by mean 4.
        let expected = (8.0_f64 / 3.0).sqrt() / 4.0;
        assert!((fit.normalized_rms - expected).abs() < 1e-12);
    }

    #[test]
    fn single_point_is_a_contract_violation() {
        let err = fit_curve(&[SizeTimeSample::new(4, 1.0)], Curve::N).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn zero_mean_time_is_rejected() {
        let samples = series(&[1, 2, 4], |_| 0.0);
        let err = fit_curve(&samples, Curve::Constant).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_NUMERIC);
    }

    #[test]
    fn log_shape_rejects_zero_size() {
        let samples = series(&[0, 2, 4], |n| n as f64 + 1.0);
        let err = fit_curve(&samples, Curve::NLogN).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn degenerate_shape_is_rejected() {
        // log2(1) = 0 at every point.
        let samples = series(&[1, 1], |_| 1.0);
        let err = fit_curve(&samples, Curve::LogN).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_NUMERIC);
    }
}
