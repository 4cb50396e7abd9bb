//! mathkit: small numerical containers and a feed-forward network.
//!
//! The crate provides a shape-validated N-dimensional array (`ShapedArray`)
//! with conversion to and from nested data, a dense 2D `Matrix` with
//! arithmetic and matrix products, a `Vec2D` value type, and a minimal
//! neural network whose layers are evaluated with `Matrix`.
//!
//! All containers are plain owned values; every operation is synchronous and
//! in-memory. Fallible operations return [`error::MathError`].
pub mod config;
pub mod error;
pub mod math;
pub mod nn;
pub mod random;
pub mod utils;

pub use error::MathError;
pub use math::{Matrix, NestedData, Shape, ShapedArray, Vec2D};
