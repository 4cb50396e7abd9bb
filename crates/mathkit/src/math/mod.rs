//! Numeric containers used throughout the crate.
//!
//! `ShapedArray` is a rank-N container over a flat buffer, `Matrix` the
//! rank-2 case with linear-algebra operations, and `Vec2D` a small value
//! type for planar vectors.
pub mod matrix;
pub mod nested;
pub mod shape;
pub mod shaped_array;
pub mod vector;

pub use matrix::Matrix;
pub use nested::NestedData;
pub use shape::Shape;
pub use shaped_array::ShapedArray;
pub use vector::Vec2D;
