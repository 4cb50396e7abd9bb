use std::fmt;
use std::ops::Index;

use crate::error::{MathError, Result};

/// N-dimensional shape descriptor: a non-empty list of positive dimension sizes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.is_empty() || dims.iter().any(|&d| d == 0) {
            return Err(MathError::InvalidShape { dims });
        }
        // element count must fit in usize
        if dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d)).is_none() {
            return Err(MathError::InvalidShape { dims });
        }
        Ok(Self { dims })
    }

    pub fn from_slice(dims: &[usize]) -> Result<Self> {
        Self::new(dims.to_vec())
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of elements (product of all dimensions).
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of flat positions spanned by one step along `axis`.
    ///
    /// Equals the product of all dimensions after `axis`; the innermost axis
    /// has stride 1.
    pub fn stride(&self, axis: usize) -> usize {
        assert!(axis < self.rank(), "axis out of range");
        self.dims[axis + 1..].iter().product()
    }

    /// Contiguous row-major strides for every axis.
    pub fn strides(&self) -> Vec<usize> {
        let n = self.dims.len();
        let mut strides = vec![1usize; n];
        for i in (0..n - 1).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }

    /// Row-major flat offset of `coords`, or `IndexOutOfRange` when the
    /// coordinate count differs from the rank or a coordinate exceeds its axis.
    pub fn offset(&self, coords: &[usize]) -> Result<usize> {
        if coords.len() != self.rank() || coords.iter().zip(&self.dims).any(|(c, d)| c >= d) {
            return Err(MathError::IndexOutOfRange {
                index: coords.to_vec(),
                bounds: self.dims.clone(),
            });
        }
        Ok(coords
            .iter()
            .zip(self.strides())
            .map(|(c, stride)| c * stride)
            .sum())
    }
}

impl Index<usize> for Shape {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.dims[axis]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, dim) in self.dims.iter().enumerate() {
            write!(f, "{}", dim)?;
            if idx + 1 != self.dims.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}
