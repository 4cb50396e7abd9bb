use rand::Rng;

use crate::config::{Activation, LayerConfig};
use crate::error::{MathError, Result};
use crate::math::Matrix;

/// A single network layer mapping `input_size` values to `output_size` values.
pub trait Layer {
    fn input_size(&self) -> usize;

    fn output_size(&self) -> usize;

    /// Forward pass for one input vector.
    fn compute(&self, input: &[f64]) -> Result<Vec<f64>>;

    /// Optional human readable name for the layer
    fn name(&self) -> &str {
        "layer"
    }
}

/// Fully connected layer.
///
/// `weights` is `output_size x input_size` and `bias` is `output_size x 1`,
/// so the input is treated as an `input_size x 1` column.
#[derive(Clone, Debug)]
pub struct SimpleLayer {
    weights: Matrix<f64>,
    bias: Matrix<f64>,
    activation: Activation,
}

impl SimpleLayer {
    /// Layer with weights and bias drawn uniformly from `[-1, 1]`.
    pub fn new<R: Rng + ?Sized>(config: &LayerConfig, rng: &mut R) -> Self {
        Self {
            weights: Matrix::random(config.output_size, config.input_size, rng),
            bias: Matrix::random(config.output_size, 1, rng),
            activation: config.activation,
        }
    }

    pub fn from_parts(weights: Matrix<f64>, bias: Matrix<f64>, activation: Activation) -> Result<Self> {
        if bias.shape() != (weights.width(), 1) {
            return Err(MathError::DimensionMismatch {
                op: "layer bias",
                left: weights.shape(),
                right: bias.shape(),
            });
        }
        Ok(Self {
            weights,
            bias,
            activation,
        })
    }

    pub fn weights(&self) -> &Matrix<f64> {
        &self.weights
    }

    pub fn bias(&self) -> &Matrix<f64> {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Layer for SimpleLayer {
    fn input_size(&self) -> usize {
        self.weights.height()
    }

    fn output_size(&self) -> usize {
        self.weights.width()
    }

    fn compute(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(MathError::InputSizeMismatch {
                expected: self.input_size(),
                found: input.len(),
            });
        }
        let column = Matrix::from_flat(input.len(), 1, input.to_vec())?;
        let mut output = self.weights.matmul(&column)?;
        output.add_mut(&self.bias)?;
        let activation = self.activation;
        output.apply_mut(|v, _, _| activation.apply(v));
        Ok(output.as_slice().to_vec())
    }

    fn name(&self) -> &str {
        self.activation.name()
    }
}
