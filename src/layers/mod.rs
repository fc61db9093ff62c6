//! Layers of artificial neurons.
//!
//! A layer groups neurons in order so they can be configured together. Layers share no
//! parameters between neurons and do not compose into a forward pass.

mod config;
mod layer;

pub use config::LayerConfig;
pub use layer::ArtificialNeuralNetLayer;
