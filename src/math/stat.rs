//! Weighted streaming mean / standard deviation.
//!
//! Repetitions of one benchmark are combined with each run weighted by its
//! iteration count. We use West's weighted form of Welford's update, which
//! avoids the cancellation of the `Σw x² - (Σw x)²` formulation when the values
//! are tiny (per-iteration seconds) and close together.
//!
//! The variance is the population variance over the total weight, matching a
//! plain mean / standard deviation when every weight is equal.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedStat {
    weight_sum: f64,
    mean: f64,
    m2: f64,
}

impl WeightedStat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` with weight `weight`. Non-positive or non-finite weights are ignored.
    pub fn observe(&mut self, value: f64, weight: f64) {
        if !(weight.is_finite() && weight > 0.0) {
            return;
        }
        let weight_sum = self.weight_sum + weight;
        let delta = value - self.mean;
        self.mean += delta * weight / weight_sum;
        self.m2 += weight * delta * (value - self.mean);
        self.weight_sum = weight_sum;
    }

    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    /// Weighted mean, or `0.0` before any observation.
    pub fn mean(&self) -> f64 {
        if self.weight_sum > 0.0 { self.mean } else { 0.0 }
    }

    pub fn variance(&self) -> f64 {
        if self.weight_sum > 0.0 {
            (self.m2 / self.weight_sum).max(0.0)
        } else {
            0.0
        }
    }

    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}
