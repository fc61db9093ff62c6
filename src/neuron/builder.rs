//! Validated construction of artificial neurons.

use super::ArtificialNeuron;
use super::weights::{random_weights, time_seeded_rng};
use crate::activation::{ActivationFunction, BinaryStepFunction};
use crate::errors::NeuronError;
use rand::Rng;
use std::sync::Arc;

/// Builder for [`ArtificialNeuron`].
///
/// Starts from defaults (random weights in (-1.0, 1.0), a [`BinaryStepFunction`] firing 1.0
/// above 0.5, and a bias of 1.0) and lets each field be overridden. Every setter validates
/// its argument, so [`build`](Self::build) cannot fail.
#[derive(Debug, Clone)]
pub struct NeuronBuilder {
    input_weights: Vec<f64>,
    activation_function: Arc<dyn ActivationFunction>,
    bias: f64,
}

impl NeuronBuilder {
    /// Bias given to neurons that do not override it.
    pub const DEFAULT_BIAS: f64 = 1.0;

    /// Creates a builder with `number_of_weights` random weights.
    ///
    /// Weights are drawn from a generator seeded with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::InvalidWeightCount`] if `number_of_weights` is zero.
    pub fn new(number_of_weights: usize) -> Result<Self, NeuronError> {
        Self::with_rng(number_of_weights, &mut time_seeded_rng())
    }

    /// Creates a builder with `number_of_weights` weights drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::InvalidWeightCount`] if `number_of_weights` is zero.
    pub fn with_rng<R: Rng + ?Sized>(
        number_of_weights: usize,
        rng: &mut R,
    ) -> Result<Self, NeuronError> {
        if number_of_weights < 1 {
            return Err(NeuronError::InvalidWeightCount {
                requested: number_of_weights,
            });
        }

        Ok(Self {
            input_weights: random_weights(number_of_weights, rng),
            activation_function: Arc::new(BinaryStepFunction::default()),
            bias: Self::DEFAULT_BIAS,
        })
    }

    /// Overrides the input weights.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::EmptyWeights`] if `input_weights` is empty.
    pub fn input_weights(mut self, input_weights: Vec<f64>) -> Result<Self, NeuronError> {
        if input_weights.is_empty() {
            return Err(NeuronError::EmptyWeights);
        }

        self.input_weights = input_weights;
        Ok(self)
    }

    /// Overrides the activation function.
    pub fn activation_function<F: ActivationFunction + 'static>(self, function: F) -> Self {
        self.shared_activation_function(Arc::new(function))
    }

    /// Overrides the activation function with one that may be shared between neurons.
    pub fn shared_activation_function(mut self, function: Arc<dyn ActivationFunction>) -> Self {
        self.activation_function = function;
        self
    }

    /// Overrides the bias.
    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Returns the weights currently configured.
    pub fn configured_weights(&self) -> &[f64] {
        &self.input_weights
    }

    /// Builds a neuron from the current configuration.
    ///
    /// The weights are copied, so the builder can keep being configured and built again
    /// without affecting neurons it already produced.
    pub fn build(&self) -> ArtificialNeuron {
        ArtificialNeuron::from_validated(
            self.input_weights.clone(),
            Arc::clone(&self.activation_function),
            self.bias,
        )
    }
}
