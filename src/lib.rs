//! # neurolayer
//!
//! A small library of artificial neurons and layers for neural-network experiments.
//!
//! A neuron weighs its inputs, adds its bias as one extra input, and passes the result through
//! a pluggable activation function. Neurons are only created through a validating builder, so
//! every neuron in existence has at least one weight and an activation function. Layers group
//! neurons in order and can assign weights to all of them at once.
//!
//! ## Features
//!
//! - **Validated construction**: [`NeuronBuilder`] checks each field as it is set.
//! - **Pluggable activation**: anything implementing [`ActivationFunction`] can drive a neuron;
//!   [`BinaryStepFunction`], [`SigmoidFunction`] and [`RectifiedLinearFunction`] are provided.
//! - **Injectable randomness**: random weights come from any [`rand::Rng`], so tests can use a
//!   seeded generator.
//! - **Configuration**: layers can be described with [`LayerConfig`], loadable from JSON.
//!
//! There is no training, no forward pass across layers and no persistence.
//!
//! ## Example
//!
//! ```
//! use neurolayer::prelude::*;
//!
//! let mut layer = ArtificialNeuralNetLayer::with_neurons(2, 3)?;
//!
//! let weights = vec![0.25, 0.5, 0.75];
//! layer.set_input_weights_for_all(vec![weights.clone(), weights])?;
//!
//! // 0.25 + 0.5 + 0.75 + bias 1.0 = 2.5 > 0.5, so the default step function fires
//! assert_eq!(layer[0].feed(&[1.0, 1.0, 1.0])?, 1.0);
//! # Ok::<(), NeuronError>(())
//! ```

pub mod activation;
pub mod errors;
pub mod layers;
pub mod neuron;

// Re-exports for convenience
pub use activation::{
    ActivationFunction, ActivationKind, BinaryStepFunction, RectifiedLinearFunction,
    SigmoidFunction,
};
pub use errors::NeuronError;
pub use layers::{ArtificialNeuralNetLayer, LayerConfig};
pub use neuron::{ArtificialNeuron, NeuronBuilder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::activation::{
        ActivationFunction, ActivationKind, BinaryStepFunction, RectifiedLinearFunction,
        SigmoidFunction,
    };
    pub use crate::errors::NeuronError;
    pub use crate::layers::{ArtificialNeuralNetLayer, LayerConfig};
    pub use crate::neuron::{ArtificialNeuron, NeuronBuilder};
}
