//! Logistic activation.

use super::ActivationFunction;
use std::fmt;

/// Sigmoid of the summed inputs: f(x) = 1 / (1 + exp(-x))
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SigmoidFunction;

impl ActivationFunction for SigmoidFunction {
    fn compute(&self, values: &[f64]) -> f64 {
        let sum: f64 = values.iter().sum();
        1.0 / (1.0 + (-sum).exp())
    }
}

impl fmt::Display for SigmoidFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigmoidFunction")
    }
}
