//! Layer configuration.

use crate::activation::ActivationKind;
use crate::errors::NeuronError;
use crate::neuron::NeuronBuilder;
use serde::{Deserialize, Serialize};

/// Configuration for a populated layer.
///
/// Every neuron in the layer gets `inputs_per_neuron` random weights, the same bias, and its
/// own instance of the configured activation function. Missing fields in a JSON document
/// take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Number of neurons in the layer.
    pub neurons: usize,
    /// Number of input weights for each neuron.
    pub inputs_per_neuron: usize,
    /// Bias of each neuron.
    pub bias: f64,
    /// Activation function of each neuron.
    pub activation: ActivationKind,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            neurons: 0,
            inputs_per_neuron: 1,
            bias: NeuronBuilder::DEFAULT_BIAS,
            activation: ActivationKind::default(),
        }
    }
}

impl LayerConfig {
    /// Creates a new LayerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::Config`] if the document is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, NeuronError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the number of neurons.
    pub fn neurons(mut self, neurons: usize) -> Self {
        self.neurons = neurons;
        self
    }

    /// Sets the number of input weights per neuron.
    pub fn inputs_per_neuron(mut self, inputs: usize) -> Self {
        self.inputs_per_neuron = inputs;
        self
    }

    /// Sets the bias.
    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Sets the activation function.
    pub fn activation(mut self, activation: ActivationKind) -> Self {
        self.activation = activation;
        self
    }
}
