//! Ordered layer of artificial neurons.

use super::LayerConfig;
use crate::errors::NeuronError;
use crate::neuron::weights::time_seeded_rng;
use crate::neuron::{ArtificialNeuron, NeuronBuilder};
use rand::Rng;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

/// An ordered, index-addressable group of neurons.
///
/// The layer owns its neurons and allows duplicates. Apart from the usual sequence
/// operations it can assign a new weight vector to every neuron at once with
/// [`set_input_weights_for_all`](Self::set_input_weights_for_all).
#[derive(Debug, Clone, Default)]
pub struct ArtificialNeuralNetLayer {
    neurons: Vec<ArtificialNeuron>,
}

impl ArtificialNeuralNetLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a layer of `number_of_neurons` default neurons, each with
    /// `number_of_input_weights_per_neuron` random weights in (-1.0, 1.0).
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::InvalidWeightCount`] if at least one neuron is requested with
    /// zero weights.
    pub fn with_neurons(
        number_of_neurons: usize,
        number_of_input_weights_per_neuron: usize,
    ) -> Result<Self, NeuronError> {
        Self::with_neurons_from_rng(
            number_of_neurons,
            number_of_input_weights_per_neuron,
            &mut time_seeded_rng(),
        )
    }

    /// Like [`with_neurons`](Self::with_neurons), drawing weights from `rng`.
    pub fn with_neurons_from_rng<R: Rng + ?Sized>(
        number_of_neurons: usize,
        number_of_input_weights_per_neuron: usize,
        rng: &mut R,
    ) -> Result<Self, NeuronError> {
        let neurons = (0..number_of_neurons)
            .map(|_| {
                NeuronBuilder::with_rng(number_of_input_weights_per_neuron, &mut *rng)
                    .map(|builder| builder.build())
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Created layer of {} neurons with {} input weights each",
            number_of_neurons,
            number_of_input_weights_per_neuron
        );
        Ok(Self { neurons })
    }

    /// Creates a layer as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::InvalidWeightCount`] if the configuration asks for neurons with
    /// zero input weights.
    pub fn from_config(config: &LayerConfig) -> Result<Self, NeuronError> {
        Self::from_config_with_rng(config, &mut time_seeded_rng())
    }

    /// Like [`from_config`](Self::from_config), drawing weights from `rng`.
    pub fn from_config_with_rng<R: Rng + ?Sized>(
        config: &LayerConfig,
        rng: &mut R,
    ) -> Result<Self, NeuronError> {
        let neurons = (0..config.neurons)
            .map(|_| {
                NeuronBuilder::with_rng(config.inputs_per_neuron, &mut *rng).map(|builder| {
                    builder
                        .shared_activation_function(config.activation.build())
                        .bias(config.bias)
                        .build()
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Created layer of {} {} neurons with {} input weights each",
            config.neurons,
            config.activation.name(),
            config.inputs_per_neuron
        );
        Ok(Self { neurons })
    }

    /// Assigns `layer_input_weights[i]` to the `i`-th neuron, for every neuron.
    ///
    /// All weight vectors are checked before any neuron is changed, so on error the layer is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`NeuronError::TooManyWeightVectors`] if there are more vectors than neurons.
    /// - [`NeuronError::TooFewWeightVectors`] if there are fewer vectors than neurons.
    /// - [`NeuronError::EmptyWeightVector`] if any vector is empty.
    pub fn set_input_weights_for_all(
        &mut self,
        layer_input_weights: Vec<Vec<f64>>,
    ) -> Result<(), NeuronError> {
        let supplied = layer_input_weights.len();
        let neurons = self.neurons.len();

        if supplied > neurons {
            return Err(NeuronError::TooManyWeightVectors { supplied, neurons });
        } else if supplied < neurons {
            return Err(NeuronError::TooFewWeightVectors { supplied, neurons });
        }

        if let Some(index) = layer_input_weights.iter().position(|w| w.is_empty()) {
            return Err(NeuronError::EmptyWeightVector { index });
        }

        for (neuron, input_weights) in self.neurons.iter_mut().zip(layer_input_weights) {
            neuron.set_input_weights(input_weights)?;
        }

        log::debug!("Assigned input weights to {} neurons", neurons);
        Ok(())
    }

    /// Appends a neuron to the end of the layer.
    pub fn push(&mut self, neuron: ArtificialNeuron) {
        self.neurons.push(neuron);
    }

    /// Inserts a neuron at `index`, shifting later neurons back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, neuron: ArtificialNeuron) {
        self.neurons.insert(index, neuron);
    }

    /// Removes and returns the neuron at `index`, shifting later neurons forward.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> ArtificialNeuron {
        self.neurons.remove(index)
    }

    /// Replaces the neuron at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, neuron: ArtificialNeuron) -> ArtificialNeuron {
        std::mem::replace(&mut self.neurons[index], neuron)
    }

    /// Returns the neuron at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ArtificialNeuron> {
        self.neurons.get(index)
    }

    /// Returns a mutable reference to the neuron at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ArtificialNeuron> {
        self.neurons.get_mut(index)
    }

    /// Returns the number of neurons.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Returns true if the layer has no neurons.
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Removes every neuron.
    pub fn clear(&mut self) {
        self.neurons.clear();
    }

    /// Returns the neurons as a slice; sub-ranges can be taken from it.
    pub fn as_slice(&self) -> &[ArtificialNeuron] {
        &self.neurons
    }

    /// Iterates over the neurons in order.
    pub fn iter(&self) -> slice::Iter<'_, ArtificialNeuron> {
        self.neurons.iter()
    }

    /// Iterates mutably over the neurons in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, ArtificialNeuron> {
        self.neurons.iter_mut()
    }
}

impl Index<usize> for ArtificialNeuralNetLayer {
    type Output = ArtificialNeuron;

    fn index(&self, index: usize) -> &Self::Output {
        &self.neurons[index]
    }
}

impl IndexMut<usize> for ArtificialNeuralNetLayer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.neurons[index]
    }
}

impl IntoIterator for ArtificialNeuralNetLayer {
    type Item = ArtificialNeuron;
    type IntoIter = vec::IntoIter<ArtificialNeuron>;

    fn into_iter(self) -> Self::IntoIter {
        self.neurons.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArtificialNeuralNetLayer {
    type Item = &'a ArtificialNeuron;
    type IntoIter = slice::Iter<'a, ArtificialNeuron>;

    fn into_iter(self) -> Self::IntoIter {
        self.neurons.iter()
    }
}

impl<'a> IntoIterator for &'a mut ArtificialNeuralNetLayer {
    type Item = &'a mut ArtificialNeuron;
    type IntoIter = slice::IterMut<'a, ArtificialNeuron>;

    fn into_iter(self) -> Self::IntoIter {
        self.neurons.iter_mut()
    }
}

impl FromIterator<ArtificialNeuron> for ArtificialNeuralNetLayer {
    fn from_iter<I: IntoIterator<Item = ArtificialNeuron>>(iter: I) -> Self {
        Self {
            neurons: iter.into_iter().collect(),
        }
    }
}

impl Extend<ArtificialNeuron> for ArtificialNeuralNetLayer {
    fn extend<I: IntoIterator<Item = ArtificialNeuron>>(&mut self, iter: I) {
        self.neurons.extend(iter);
    }
}

impl fmt::Display for ArtificialNeuralNetLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for neuron in &self.neurons {
            writeln!(f, "{}", neuron)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::{ActivationKind, BinaryStepFunction};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn neuron_with(weights: Vec<f64>) -> ArtificialNeuron {
        NeuronBuilder::new(5)
            .unwrap()
            .input_weights(weights)
            .unwrap()
            .activation_function(BinaryStepFunction::new(1.0, 5.0, 1.3))
            .bias(1.0)
            .build()
    }

    fn two_neuron_layer() -> ArtificialNeuralNetLayer {
        let mut layer = ArtificialNeuralNetLayer::new();
        layer.push(neuron_with(vec![1.0 / 3.0, 2.0 / 3.0]));
        layer.push(neuron_with(vec![1.0 / 3.0, 2.0 / 3.0]));
        layer
    }

    #[test]
    fn test_empty_layer() {
        let layer = ArtificialNeuralNetLayer::new();
        assert!(layer.is_empty());
        assert_eq!(layer.len(), 0);
        assert_eq!(layer.to_string(), "");
    }

    #[test]
    fn test_populated_layer() {
        let layer = ArtificialNeuralNetLayer::with_neurons(4, 3).unwrap();

        assert_eq!(layer.len(), 4);
        for neuron in &layer {
            assert_eq!(neuron.input_count(), 3);
            assert_eq!(neuron.bias(), 1.0);
            assert!(neuron.input_weights().iter().all(|w| (-1.0..=1.0).contains(w)));
        }
    }

    #[test]
    fn test_populated_layer_zero_neurons() {
        // No neuron is built, so a zero weight count is not an error here
        let layer = ArtificialNeuralNetLayer::with_neurons(0, 0).unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_populated_layer_zero_weights() {
        let err = ArtificialNeuralNetLayer::with_neurons(2, 0).unwrap_err();
        assert!(matches!(err, NeuronError::InvalidWeightCount { requested: 0 }));
    }

    #[test]
    fn test_populated_layer_from_seeded_rng() {
        let a = ArtificialNeuralNetLayer::with_neurons_from_rng(3, 2, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = ArtificialNeuralNetLayer::with_neurons_from_rng(3, 2, &mut StdRng::seed_from_u64(5))
            .unwrap();

        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.input_weights(), y.input_weights());
        }
        // one generator across the layer, so neurons differ from each other
        assert_ne!(a[0].input_weights(), a[1].input_weights());
    }

    #[test]
    fn test_from_config() {
        let config = LayerConfig::new()
            .neurons(3)
            .inputs_per_neuron(2)
            .bias(-0.25)
            .activation(ActivationKind::Relu);
        let layer = ArtificialNeuralNetLayer::from_config(&config).unwrap();

        assert_eq!(layer.len(), 3);
        for neuron in &layer {
            assert_eq!(neuron.input_count(), 2);
            assert_eq!(neuron.bias(), -0.25);
            assert_eq!(neuron.activation_function().to_string(), "RectifiedLinearFunction");
        }
    }

    #[test]
    fn test_set_input_weights_for_all() {
        let mut layer = two_neuron_layer();
        let new_weights = vec![1.0 / 4.0, 2.0 / 4.0, 3.0 / 4.0];

        layer
            .set_input_weights_for_all(vec![new_weights.clone(), new_weights])
            .unwrap();

        assert_eq!(layer[0].input_weights(), layer[1].input_weights());
        assert_eq!(layer[0].input_weights().len(), 3);
        assert_eq!(layer[0].input_weights(), &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_set_input_weights_for_all_too_many() {
        let mut layer = two_neuron_layer();
        let err = layer
            .set_input_weights_for_all(vec![vec![1.0]; 3])
            .unwrap_err();

        assert!(matches!(
            err,
            NeuronError::TooManyWeightVectors {
                supplied: 3,
                neurons: 2
            }
        ));
    }

    #[test]
    fn test_set_input_weights_for_all_too_few() {
        let mut layer = two_neuron_layer();
        let err = layer
            .set_input_weights_for_all(vec![vec![1.0]])
            .unwrap_err();

        assert!(matches!(
            err,
            NeuronError::TooFewWeightVectors {
                supplied: 1,
                neurons: 2
            }
        ));
    }

    #[test]
    fn test_set_input_weights_for_all_is_atomic() {
        let mut layer = two_neuron_layer();
        let err = layer
            .set_input_weights_for_all(vec![vec![0.5, 0.5], Vec::new()])
            .unwrap_err();

        assert!(matches!(err, NeuronError::EmptyWeightVector { index: 1 }));
        for neuron in &layer {
            assert_eq!(neuron.input_weights(), &[1.0 / 3.0, 2.0 / 3.0]);
        }
    }

    #[test]
    fn test_empty_layer_accepts_no_weights() {
        let mut layer = ArtificialNeuralNetLayer::new();
        assert!(layer.set_input_weights_for_all(Vec::new()).is_ok());
    }

    #[test]
    fn test_sequence_operations() {
        let mut layer = two_neuron_layer();
        layer.insert(1, neuron_with(vec![0.9]));
        assert_eq!(layer.len(), 3);
        assert_eq!(layer[1].input_weights(), &[0.9]);

        let old = layer.replace(1, neuron_with(vec![0.8, 0.7]));
        assert_eq!(old.input_weights(), &[0.9]);
        assert_eq!(layer[1].input_weights(), &[0.8, 0.7]);

        let removed = layer.remove(0);
        assert_eq!(removed.input_count(), 2);
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.as_slice()[..1][0].input_weights(), &[0.8, 0.7]);

        layer.get_mut(1).unwrap().set_input_weights(vec![0.1]).unwrap();
        assert_eq!(layer.get(1).unwrap().input_weights(), &[0.1]);
        assert!(layer.get(2).is_none());

        let reversed: Vec<usize> = layer.iter().rev().map(|n| n.input_count()).collect();
        assert_eq!(reversed, vec![1, 2]);

        layer.clear();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_duplicates_and_collect() {
        let neuron = neuron_with(vec![0.5]);
        let mut layer: ArtificialNeuralNetLayer = vec![neuron.clone(), neuron.clone()]
            .into_iter()
            .collect();
        layer.extend(std::iter::once(neuron));

        assert_eq!(layer.len(), 3);
        for neuron in &mut layer {
            neuron.set_input_weights(vec![0.0, 0.0]).unwrap();
        }
        let counts: Vec<usize> = layer.into_iter().map(|n| n.input_count()).collect();
        assert_eq!(counts, vec![2, 2, 2]);
    }

    #[test]
    fn test_display_lists_each_neuron() {
        let layer = two_neuron_layer();
        let rendered = layer.to_string();

        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.ends_with('\n'));
        assert_eq!(rendered.lines().next().unwrap(), layer[0].to_string());
    }
}
