//! Synthetic complexity series.
//!
//! Generates run records for a benchmark family whose per-iteration CPU time
//! follows `coefficient * curve(n)` with multiplicative log-normal noise. Useful
//! for demos and for exercising the aggregation passes without a timer.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Curve, GrowthClass, RunRecord, TimeUnit};
use crate::error::AppError;

/// Wall time runs this fraction above CPU time, plus jitter of the same size.
const REAL_TIME_OVERHEAD: f64 = 0.02;

#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub family: String,
    /// Curve the times are generated from.
    pub curve: Curve,
    /// Complexity stamped on each record (what the harness would request).
    pub request: GrowthClass,
    pub sizes: Vec<u64>,
    pub repetitions: usize,
    pub iterations: u64,
    /// Seconds per unit of `curve(n)`.
    pub coefficient: f64,
    /// Standard deviation of the log-noise (0 for exact data).
    pub noise: f64,
    pub seed: u64,
    pub time_unit: TimeUnit,
}

impl Default for SeriesSpec {
    fn default() -> Self {
        Self {
            family: "BM_Synthetic".to_string(),
            curve: Curve::N,
            request: GrowthClass::Auto,
            sizes: vec![8, 64, 512, 4096],
            repetitions: 1,
            iterations: 1000,
            coefficient: 2.5e-9,
            noise: 0.0,
            seed: 42,
            time_unit: TimeUnit::Ns,
        }
    }
}

/// Generate the run records described by `spec`, ordered by size then repetition.
pub fn generate_series(spec: &SeriesSpec) -> Result<Vec<RunRecord>, AppError> {
    if spec.sizes.is_empty() {
        return Err(AppError::invalid_input("At least one input size is required."));
    }
    if spec.repetitions == 0 || spec.iterations == 0 {
        return Err(AppError::invalid_input("Repetitions and iterations must be > 0."));
    }
    if !(spec.coefficient.is_finite() && spec.coefficient > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Invalid coefficient {} (must be finite and > 0).",
            spec.coefficient
        )));
    }
    if !(spec.noise.is_finite() && spec.noise >= 0.0) {
        return Err(AppError::invalid_input(format!(
            "Invalid noise {} (must be finite and >= 0).",
            spec.noise
        )));
    }
    if !spec.curve.is_defined_for(spec.sizes.iter().copied()) {
        return Err(AppError::invalid_input(format!(
            "Curve {} is undefined for input size 0.",
            spec.curve.name()
        )));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::numeric(format!("Noise distribution error: {e}")))?;

    // E[exp(σz - σ²/2)] = 1, so noise does not bias the coefficient.
    let mean_correction = 0.5 * spec.noise * spec.noise;
    let iterations = spec.iterations as f64;

    let mut runs = Vec::with_capacity(spec.sizes.len() * spec.repetitions);
    for &n in &spec.sizes {
        let base = spec.coefficient * spec.curve.eval(n);
        for _ in 0..spec.repetitions {
            let z: f64 = normal.sample(&mut rng);
            let cpu = base * (spec.noise * z - mean_correction).exp();
            let jitter: f64 = rng.gen_range(0.0..1.0);
            let real = cpu * (1.0 + REAL_TIME_OVERHEAD * (1.0 + jitter));

            let items_per_second = if cpu > 0.0 { n as f64 / cpu } else { 0.0 };

            runs.push(RunRecord {
                benchmark_name: format!("{}/{n}", spec.family),
                iterations: spec.iterations,
                real_accumulated_time: real * iterations,
                cpu_accumulated_time: cpu * iterations,
                items_per_second,
                complexity_n: n,
                complexity: spec.request,
                time_unit: spec.time_unit,
                ..RunRecord::default()
            });
        }
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noiseless_series_is_exact() {
        let spec = SeriesSpec {
            curve: Curve::NSquared,
            ..SeriesSpec::default()
        };
        let runs = generate_series(&spec).unwrap();
        assert_eq!(runs.len(), 4);
        for run in &runs {
            let expected = 2.5e-9 * (run.complexity_n as f64).powi(2);
            let got = run.cpu_time_per_iteration();
            assert!((got - expected).abs() <= expected * 1e-12, "n={}", run.complexity_n);
            assert!(run.real_time_per_iteration() > got);
        }
        assert_eq!(runs[2].benchmark_name, "BM_Synthetic/512");
    }

    #[test]
    fn same_seed_same_series() {
        let spec = SeriesSpec {
            noise: 0.1,
            repetitions: 3,
            ..SeriesSpec::default()
        };
        let a = generate_series(&spec).unwrap();
        let b = generate_series(&spec).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);

        let other = generate_series(&SeriesSpec { seed: 7, ..spec }).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn invalid_specs_are_rejected() {
        let bad = [
            SeriesSpec { sizes: vec![], ..SeriesSpec::default() },
            SeriesSpec { repetitions: 0, ..SeriesSpec::default() },
            SeriesSpec { coefficient: 0.0, ..SeriesSpec::default() },
            SeriesSpec { noise: -1.0, ..SeriesSpec::default() },
            SeriesSpec { curve: Curve::LogN, sizes: vec![0, 8], ..SeriesSpec::default() },
        ];
        for spec in &bad {
            let err = generate_series(spec).unwrap_err();
            assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_INPUT, "{spec:?}");
        }
    }
}
