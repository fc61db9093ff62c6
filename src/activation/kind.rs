//! Declarative description of an activation function.

use super::{ActivationFunction, BinaryStepFunction, RectifiedLinearFunction, SigmoidFunction};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported activation functions, as they appear in configuration documents.
///
/// Serialized with a `type` tag, for example
/// `{"type": "BINARY_STEP", "low": 0.0, "high": 1.0, "threshold": 0.5}` or `{"type": "RELU"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationKind {
    /// Step function: `high` if the sum exceeds `threshold`, else `low`.
    BinaryStep { low: f64, high: f64, threshold: f64 },
    /// Sigmoid of the sum: f(x) = 1 / (1 + exp(-x))
    Sigmoid,
    /// Rectified Linear Unit of the sum: f(x) = max(0, x)
    Relu,
}

impl Default for ActivationKind {
    /// The activation every builder starts with: a step firing 1.0 above 0.5, else 0.0.
    fn default() -> Self {
        let step = BinaryStepFunction::default();
        ActivationKind::BinaryStep {
            low: step.low_value(),
            high: step.high_value(),
            threshold: step.threshold(),
        }
    }
}

impl ActivationKind {
    /// Creates an ActivationKind from a string name.
    ///
    /// `BINARY_STEP` resolves to the default step parameters.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "BINARY_STEP" | "BINARYSTEP" | "STEP" => Some(ActivationKind::default()),
            "SIGMOID" => Some(ActivationKind::Sigmoid),
            "RELU" => Some(ActivationKind::Relu),
            _ => None,
        }
    }

    /// Returns the string name used in configuration documents.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::BinaryStep { .. } => "BINARY_STEP",
            ActivationKind::Sigmoid => "SIGMOID",
            ActivationKind::Relu => "RELU",
        }
    }

    /// Builds a shareable activation function for this kind.
    pub fn build(&self) -> Arc<dyn ActivationFunction> {
        match *self {
            ActivationKind::BinaryStep {
                low,
                high,
                threshold,
            } => Arc::new(BinaryStepFunction::new(low, high, threshold)),
            ActivationKind::Sigmoid => Arc::new(SigmoidFunction),
            ActivationKind::Relu => Arc::new(RectifiedLinearFunction),
        }
    }
}
