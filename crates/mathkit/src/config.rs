use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Element-wise activation applied to a layer's output.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Sigmoid,
    Tanh,
    Relu,
    Identity,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
            Activation::Identity => x,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Identity => "identity",
        }
    }
}

impl FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "identity" | "linear" => Ok(Activation::Identity),
            _ => Err(format!(
                "Unknown activation: {}. Expected one of sigmoid, tanh, relu, identity",
                s
            )),
        }
    }
}

/// Sizes and activation of one fully connected layer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LayerConfig {
    pub input_size: usize,
    pub output_size: usize,

    #[serde(default)]
    pub activation: Activation,
}

impl LayerConfig {
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            activation: Activation::default(),
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }
}

/// Layer stack of a feed-forward network, first layer first.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NetworkConfig {
    pub layers: Vec<LayerConfig>,
    /// Seed for weight initialisation; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse network config")
    }
}

/// Load a network configuration from a JSON file.
pub fn load_network_config<P: AsRef<Path>>(path: P) -> Result<NetworkConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: NetworkConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
