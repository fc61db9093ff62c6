//! Activation functions for artificial neurons.
//!
//! An activation function turns the weighted inputs of a neuron (plus its bias, appended as a
//! trailing value) into a single output signal. Neurons hold their activation function as a
//! shared trait object, so new variants can be added without touching the neuron itself.

mod binary_step;
mod kind;
mod relu;
mod sigmoid;

use std::fmt;

pub use binary_step::BinaryStepFunction;
pub use kind::ActivationKind;
pub use relu::RectifiedLinearFunction;
pub use sigmoid::SigmoidFunction;

/// Computes an output value from a sequence of weighted input values.
///
/// Implementations must be pure: the same values always produce the same output and no state
/// is modified. The `Display` rendering is used when neurons and layers are printed.
pub trait ActivationFunction: fmt::Debug + fmt::Display + Send + Sync {
    /// Computes the output of this function for the given values.
    ///
    /// An empty slice is valid input.
    fn compute(&self, values: &[f64]) -> f64;
}
