use std::error::Error;
use std::fmt;

/// Error type shared by the array, matrix and network modules.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// A shape was empty or contained a zero-sized dimension.
    InvalidShape { dims: Vec<usize> },
    /// Nested data does not match the declared shape.
    ShapeMismatch { expected: Vec<usize>, reason: String },
    /// Two operands (or an operand and its initializer) have incompatible sizes.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    IndexOutOfRange { index: Vec<usize>, bounds: Vec<usize> },
    DivisionByZero,
    InputSizeMismatch { expected: usize, found: usize },
    /// A layer's input size does not match the previous layer's output size.
    LayerMismatch { expected: usize, found: usize },
    /// Failure inside the layer at `index` of a network.
    Layer { index: usize, source: Box<MathError> },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidShape { dims } => {
                write!(f, "invalid shape {:?}: dimensions must be non-empty and positive", dims)
            }
            MathError::ShapeMismatch { expected, reason } => {
                write!(f, "data does not fit shape {:?}: {}", expected, reason)
            }
            MathError::DimensionMismatch { op, left, right } => write!(
                f,
                "{}: incompatible dimensions {}x{} and {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            MathError::IndexOutOfRange { index, bounds } => {
                write!(f, "index {:?} out of range for bounds {:?}", index, bounds)
            }
            MathError::DivisionByZero => write!(f, "division by zero"),
            MathError::InputSizeMismatch { expected, found } => {
                write!(f, "wrong input size: expected {}, got {}", expected, found)
            }
            MathError::LayerMismatch { expected, found } => write!(
                f,
                "layer input size {} doesn't match the previous layer output size {}",
                found, expected
            ),
            MathError::Layer { index, source } => write!(f, "error in layer {}: {}", index, source),
        }
    }
}

impl Error for MathError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MathError::Layer { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
