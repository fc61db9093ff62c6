//! Threshold-based step activation.

use super::ActivationFunction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An activation function with two possible outputs and a threshold.
///
/// If the sum of the inputs is strictly greater than the threshold, `high_value` is returned.
/// Otherwise `low_value` is. The names are labels for the two branches: `low_value` does not
/// have to be numerically smaller than `high_value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryStepFunction {
    low_value: f64,
    high_value: f64,
    threshold: f64,
}

impl BinaryStepFunction {
    /// Creates a step function returning `high_value` when the inputs sum to more than
    /// `threshold`, and `low_value` otherwise.
    pub fn new(low_value: f64, high_value: f64, threshold: f64) -> Self {
        Self {
            low_value,
            high_value,
            threshold,
        }
    }

    /// Returns the value produced when the sum does not exceed the threshold.
    pub fn low_value(&self) -> f64 {
        self.low_value
    }

    /// Returns the value produced when the sum exceeds the threshold.
    pub fn high_value(&self) -> f64 {
        self.high_value
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for BinaryStepFunction {
    /// Fires 1.0 when the inputs sum to more than 0.5, and 0.0 otherwise.
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.5)
    }
}

impl ActivationFunction for BinaryStepFunction {
    fn compute(&self, values: &[f64]) -> f64 {
        let sum: f64 = values.iter().sum();

        if sum > self.threshold {
            self.high_value
        } else {
            self.low_value
        }
    }
}

impl fmt::Display for BinaryStepFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryStepFunction(low: {}, high: {}, threshold: {})",
            self.low_value, self.high_value, self.threshold
        )
    }
}
