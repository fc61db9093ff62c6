//! Rectified linear activation.

use super::ActivationFunction;
use std::fmt;

/// Rectified Linear Unit of the summed inputs: f(x) = max(0, x)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectifiedLinearFunction;

impl ActivationFunction for RectifiedLinearFunction {
    fn compute(&self, values: &[f64]) -> f64 {
        let sum: f64 = values.iter().sum();
        sum.max(0.0)
    }
}

impl fmt::Display for RectifiedLinearFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RectifiedLinearFunction")
    }
}
