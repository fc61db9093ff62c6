//! Error types shared by neurons, builders, and layers.

mod neuron_error;

pub use neuron_error::NeuronError;
