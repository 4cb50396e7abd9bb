use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::NetworkConfig;
use crate::error::{MathError, Result};
use crate::nn::layer::{Layer, SimpleLayer};

/// Ordered stack of layers where each layer's input size equals the previous
/// layer's output size.
#[derive(Default)]
pub struct NeuralNetwork {
    layers: Vec<Box<dyn Layer>>,
}

impl NeuralNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network of [`SimpleLayer`]s from a configuration.
    ///
    /// Weights are drawn from a generator seeded with `config.seed`, or from
    /// entropy when no seed is set.
    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_config_with_rng(config, &mut rng)
    }

    pub fn from_config_with_rng<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Self> {
        let mut network = Self::new();
        for layer in &config.layers {
            network.add_layer(SimpleLayer::new(layer, rng))?;
        }
        log::debug!(
            "built network with {} layers ({:?} -> {:?})",
            network.len(),
            network.input_size(),
            network.output_size()
        );
        Ok(network)
    }

    pub fn add_layer<L: Layer + 'static>(&mut self, layer: L) -> Result<()> {
        self.add_boxed_layer(Box::new(layer))
    }

    /// Append a layer; rejected when its input size differs from the current
    /// output size.
    pub fn add_boxed_layer(&mut self, layer: Box<dyn Layer>) -> Result<()> {
        if let Some(last) = self.layers.last() {
            if layer.input_size() != last.output_size() {
                return Err(MathError::LayerMismatch {
                    expected: last.output_size(),
                    found: layer.input_size(),
                });
            }
        }
        log::trace!(
            "adding {} layer {} -> {}",
            layer.name(),
            layer.input_size(),
            layer.output_size()
        );
        self.layers.push(layer);
        Ok(())
    }

    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn input_size(&self) -> Option<usize> {
        self.layers.first().map(|l| l.input_size())
    }

    pub fn output_size(&self) -> Option<usize> {
        self.layers.last().map(|l| l.output_size())
    }

    /// Run `input` through every layer in order. An empty network returns
    /// the input unchanged.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut values = input.to_vec();
        for (index, layer) in self.layers.iter().enumerate() {
            values = layer.compute(&values).map_err(|e| MathError::Layer {
                index,
                source: Box::new(e),
            })?;
        }
        Ok(values)
    }
}
