//! Minimal feed-forward network evaluated with [`crate::math::Matrix`].
//!
//! Each layer computes `activation(weights x input + bias)`; a network chains
//! layers whose sizes line up. Only the forward pass is provided.
pub mod layer;
pub mod network;

pub use layer::{Layer, SimpleLayer};
pub use network::NeuralNetwork;
