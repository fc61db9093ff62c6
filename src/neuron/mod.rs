//! Artificial neurons and their validated construction.
//!
//! Neurons can only be created through a [`NeuronBuilder`], which checks every field before a
//! neuron exists, so a neuron always has at least one weight and an activation function.
//!
//! # Example
//!
//! ```
//! use neurolayer::activation::BinaryStepFunction;
//! use neurolayer::neuron::ArtificialNeuron;
//!
//! let neuron = ArtificialNeuron::builder(2)?
//!     .input_weights(vec![1.0 / 3.0, 2.0 / 3.0])?
//!     .activation_function(BinaryStepFunction::new(1.0, 5.0, 1.3))
//!     .bias(1.0)
//!     .build();
//!
//! assert_eq!(neuron.feed(&[1.0, 0.5])?, 5.0);
//! # Ok::<(), neurolayer::NeuronError>(())
//! ```

mod artificial_neuron;
mod builder;
pub(crate) mod weights;

pub use artificial_neuron::ArtificialNeuron;
pub use builder::NeuronBuilder;
