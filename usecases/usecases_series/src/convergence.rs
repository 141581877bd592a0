//! Convergence Detection Module
//!
//! A series is considered converged once two successive partial sums are
//! exactly equal. At fixed precision, a term smaller than half an ulp of the
//! running sum no longer changes it, so the sums repeat digit for digit.
//! There is deliberately no tolerance band.

use std::fmt::Display;

use tracing::debug;

/// Exact-equality convergence check
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvergenceDetector;

impl ConvergenceDetector {
    /// Create a detector
    pub fn new() -> Self {
        Self
    }

    /// True iff `current` and `last` are exactly equal
    pub fn has_converged<T: PartialEq + Display>(&self, current: &T, last: &T) -> bool {
        if current == last {
            debug!(value = %current, "expansion has converged");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numerics::Decimal50;

    #[test]
    fn test_equal_values_converge() {
        let detector = ConvergenceDetector::new();
        assert!(detector.has_converged(&3i64, &3i64));
        assert!(!detector.has_converged(&3i64, &4i64));
    }

    #[test]
    fn test_no_tolerance() {
        let detector = ConvergenceDetector::new();
        let a: Decimal50 = "1.0000000000000000000000000000000000000000000000001".parse().unwrap();
        let b = Decimal50::one();
        assert!(!detector.has_converged(&a, &b));
        assert!(!detector.has_converged(&1.0f64, &(1.0 + f64::EPSILON)));
    }

    #[test]
    fn test_equal_decimals_with_different_spelling() {
        let detector = ConvergenceDetector::new();
        let a: Decimal50 = "2.50".parse().unwrap();
        let b: Decimal50 = "2.5".parse().unwrap();
        assert!(detector.has_converged(&a, &b));
    }
}
