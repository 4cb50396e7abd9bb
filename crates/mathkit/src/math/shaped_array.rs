use crate::error::{MathError, Result};
use crate::math::nested::NestedData;
use crate::math::shape::Shape;

/// N-dimensional array stored as one flat row-major buffer.
///
/// The buffer length always equals `shape.len()`. The only bulk mutation is
/// [`ShapedArray::set_data`], which either replaces the whole buffer or leaves
/// it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedArray<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> ShapedArray<T> {
    /// Create an array whose elements are all `T::default()`.
    pub fn new(shape: Shape) -> Self
    where
        T: Clone + Default,
    {
        let data = vec![T::default(); shape.len()];
        Self { shape, data }
    }

    /// Create an array seeded from nested data, which must fit `shape`.
    pub fn with_data(shape: Shape, initial: &NestedData<T>) -> Result<Self>
    where
        T: Clone,
    {
        let data = flatten_checked(&shape, initial)?;
        Ok(Self { shape, data })
    }

    /// Wrap an existing flat buffer.
    ///
    /// Meant for buffers that already came out of a container of the same
    /// shape; only the length is checked.
    pub fn from_flat(shape: Shape, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(MathError::ShapeMismatch {
                expected: shape.dims().to_vec(),
                reason: format!(
                    "flat buffer has {} elements, shape needs {}",
                    data.len(),
                    shape.len()
                ),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `candidate` has exactly this array's nested structure.
    pub fn fits_shape(&self, candidate: &NestedData<T>) -> bool {
        check_shape(self.shape.dims(), candidate, 0).is_ok()
    }

    /// Replace the contents with `candidate`, flattened depth-first.
    ///
    /// On a shape mismatch the current contents are kept.
    pub fn set_data(&mut self, candidate: &NestedData<T>) -> Result<()>
    where
        T: Clone,
    {
        self.data = flatten_checked(&self.shape, candidate)?;
        Ok(())
    }

    /// Nested view of the contents, rebuilt from the flat buffer.
    pub fn data(&self) -> NestedData<T>
    where
        T: Clone,
    {
        self.unflatten(&self.data, 0)
    }

    fn unflatten(&self, chunk: &[T], depth: usize) -> NestedData<T>
    where
        T: Clone,
    {
        if depth + 1 == self.shape.rank() {
            return chunk.iter().cloned().map(NestedData::Scalar).collect();
        }
        let stride = self.shape.stride(depth);
        chunk
            .chunks(stride)
            .take(self.shape[depth])
            .map(|sub| self.unflatten(sub, depth + 1))
            .collect()
    }

    pub fn flat_data(&self) -> &[T] {
        &self.data
    }

    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    /// Element at `coords`, using the row-major index
    /// `sum(coord[i] * stride(i))`.
    pub fn get(&self, coords: &[usize]) -> Result<T>
    where
        T: Clone,
    {
        let offset = self.shape.offset(coords)?;
        Ok(self.data[offset].clone())
    }

    pub fn set(&mut self, coords: &[usize], value: T) -> Result<()> {
        let offset = self.shape.offset(coords)?;
        self.data[offset] = value;
        Ok(())
    }
}

fn flatten_checked<T: Clone>(shape: &Shape, candidate: &NestedData<T>) -> Result<Vec<T>> {
    if let Err(reason) = check_shape(shape.dims(), candidate, 0) {
        log::debug!("rejected data for shape {}: {}", shape, reason);
        return Err(MathError::ShapeMismatch {
            expected: shape.dims().to_vec(),
            reason,
        });
    }
    let mut flat = Vec::with_capacity(shape.len());
    candidate.flatten_into(&mut flat);
    Ok(flat)
}

/// Depth-by-depth structural check; stops at the first offending element.
fn check_shape<T>(
    dims: &[usize],
    candidate: &NestedData<T>,
    depth: usize,
) -> std::result::Result<(), String> {
    let items = match candidate.as_sequence() {
        Some(items) => items,
        None => return Err(format!("expected a sequence at depth {}, found a scalar", depth)),
    };
    if items.len() != dims[depth] {
        return Err(format!(
            "expected length {} at depth {}, found {}",
            dims[depth],
            depth,
            items.len()
        ));
    }
    if depth + 1 == dims.len() {
        return match items.iter().position(|item| !item.is_scalar()) {
            Some(pos) => Err(format!(
                "expected a scalar at depth {} position {}, found a sequence",
                depth + 1,
                pos
            )),
            None => Ok(()),
        };
    }
    for item in items {
        check_shape(dims, item, depth + 1)?;
    }
    Ok(())
}
