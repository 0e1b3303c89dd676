//! Shape functions for the fixed growth-curve family.
//!
//! The solver and the fitter only need one primitive: evaluate `f(n)` for a
//! concrete curve. The coefficient is fitted separately.

use crate::domain::Curve;

impl Curve {
    /// Evaluate the shape `f(n)` (the curve without its fitted coefficient).
    ///
    /// `LogN` and `NLogN` are undefined at `n = 0` and yield `-inf` / `NaN`;
    /// callers check `requires_positive_n` before evaluating.
    pub fn eval(self, n: u64) -> f64 {
        let n = n as f64;
        match self {
            Curve::Constant => 1.0,
            Curve::LogN => n.log2(),
            Curve::N => n,
            Curve::NLogN => n * n.log2(),
            Curve::NSquared => n * n,
            Curve::NCubed => n * n * n,
        }
    }

    /// Whether the shape is finite at every size in `sizes`.
    pub fn is_defined_for(self, sizes: impl IntoIterator<Item = u64>) -> bool {
        !self.requires_positive_n() || sizes.into_iter().all(|n| n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_match_closed_forms() {
        assert_eq!(Curve::Constant.eval(12345), 1.0);
        assert_eq!(Curve::N.eval(64), 64.0);
        assert_eq!(Curve::NSquared.eval(8), 64.0);
        assert_eq!(Curve::NCubed.eval(4), 64.0);
        assert!((Curve::LogN.eval(1024) - 10.0).abs() < 1e-12);
        assert!((Curve::NLogN.eval(8) - 24.0).abs() < 1e-12);
    }

    #[test]
    fn log_shapes_need_positive_sizes() {
        assert!(Curve::N.is_defined_for([0, 1, 2]));
        assert!(!Curve::LogN.is_defined_for([0, 1, 2]));
        assert!(Curve::NLogN.is_defined_for([1, 2]));
        assert!(!Curve::LogN.eval(0).is_finite());
    }
}
