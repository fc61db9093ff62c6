//! The artificial neuron.

use super::NeuronBuilder;
use crate::activation::ActivationFunction;
use crate::errors::NeuronError;
use std::fmt;
use std::iter;
use std::sync::Arc;

/// A mathematical abstraction of a biological neuron.
///
/// The neuron receives one or more inputs, weighs each one, adds its bias as one extra input,
/// and passes the result through its activation function to produce an output.
///
/// There is no public constructor: use [`ArtificialNeuron::builder`].
#[derive(Debug, Clone)]
pub struct ArtificialNeuron {
    input_weights: Vec<f64>,
    activation_function: Arc<dyn ActivationFunction>,
    bias: f64,
}

impl ArtificialNeuron {
    /// Starts building a neuron with `number_of_weights` random weights.
    ///
    /// See [`NeuronBuilder::new`].
    pub fn builder(number_of_weights: usize) -> Result<NeuronBuilder, NeuronError> {
        NeuronBuilder::new(number_of_weights)
    }

    /// Assembles a neuron from fields the builder has already validated.
    pub(super) fn from_validated(
        input_weights: Vec<f64>,
        activation_function: Arc<dyn ActivationFunction>,
        bias: f64,
    ) -> Self {
        debug_assert!(!input_weights.is_empty());
        Self {
            input_weights,
            activation_function,
            bias,
        }
    }

    /// Feeds the inputs to this neuron and returns its activation level.
    ///
    /// Each input is multiplied by its weight, the bias is appended as a trailing value, and
    /// the whole sequence is handed to the activation function.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::InputLengthMismatch`] if the number of inputs does not match the
    /// number of weights.
    pub fn feed(&self, inputs: &[f64]) -> Result<f64, NeuronError> {
        if inputs.len() != self.input_weights.len() {
            return Err(NeuronError::InputLengthMismatch {
                inputs: inputs.len(),
                weights: self.input_weights.len(),
            });
        }

        let weighted_inputs: Vec<f64> = inputs
            .iter()
            .zip(&self.input_weights)
            .map(|(input, weight)| input * weight)
            .chain(iter::once(self.bias))
            .collect();

        let activation = self.activation_function.compute(&weighted_inputs);
        log::trace!(
            "Neuron fed {} inputs, activation = {}",
            inputs.len(),
            activation
        );
        Ok(activation)
    }

    /// Replaces the input weights.
    ///
    /// The new weights may have a different length than the old ones; the length is only
    /// checked against inputs when the neuron is fed.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::EmptyWeights`] if `input_weights` is empty.
    pub fn set_input_weights(&mut self, input_weights: Vec<f64>) -> Result<(), NeuronError> {
        if input_weights.is_empty() {
            return Err(NeuronError::EmptyWeights);
        }

        self.input_weights = input_weights;
        Ok(())
    }

    /// Returns the input weights.
    pub fn input_weights(&self) -> &[f64] {
        &self.input_weights
    }

    /// Returns the number of inputs this neuron expects.
    pub fn input_count(&self) -> usize {
        self.input_weights.len()
    }

    /// Returns the bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Returns the activation function.
    pub fn activation_function(&self) -> &dyn ActivationFunction {
        self.activation_function.as_ref()
    }
}

impl fmt::Display for ArtificialNeuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ArtificialNeuron: (Weights: {:?}), (Bias: {}), (ActivationFunction: {})]",
            self.input_weights, self.bias, self.activation_function
        )
    }
}
