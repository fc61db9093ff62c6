//! Neuron and layer error types.

use thiserror::Error;

/// Errors that can occur while building, feeding, or configuring neurons and layers.
///
/// Every variant is an invalid-argument condition: the caller passed data that violates a
/// precondition, and nothing was changed.
#[derive(Debug, Error)]
pub enum NeuronError {
    #[error("Number of inputs {inputs} does not match number of weights {weights}")]
    InputLengthMismatch { inputs: usize, weights: usize },

    #[error("Must have at least one weight")]
    EmptyWeights,

    #[error("A neuron requires at least one weight, {requested} requested")]
    InvalidWeightCount { requested: usize },

    #[error(
        "Number of input weight vectors ({supplied}) is too great for number of neurons in this layer ({neurons})"
    )]
    TooManyWeightVectors { supplied: usize, neurons: usize },

    #[error(
        "Number of input weight vectors ({supplied}) is insufficient for number of neurons in this layer ({neurons})"
    )]
    TooFewWeightVectors { supplied: usize, neurons: usize },

    #[error("Input weight vector at position {index} is empty")]
    EmptyWeightVector { index: usize },

    #[error("Invalid layer configuration: {0}")]
    Config(#[from] serde_json::Error),
}
