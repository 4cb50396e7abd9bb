use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{Num, Zero};
use rand::Rng;

use crate::error::{MathError, Result};
use crate::math::nested::NestedData;

/// Dense `width x height` matrix.
///
/// `width` is the number of rows and `height` the number of columns: cell
/// `(x, y)` is row `x`, column `y`. Cells are stored row-major in one flat
/// buffer whose length is always `width * height`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Matrix<T> {
    /// Zero-filled matrix.
    ///
    /// Panics when `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self
    where
        T: Clone + Zero,
    {
        Self {
            data: vec![T::zero(); expect_cell_count(width, height)],
            width,
            height,
        }
    }

    pub fn zeros(width: usize, height: usize) -> Self
    where
        T: Clone + Zero,
    {
        Self::new(width, height)
    }

    pub fn from_flat(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if cell_count(width, height) != Some(data.len()) {
            return Err(MathError::DimensionMismatch {
                op: "from_flat",
                left: (width, height),
                right: (data.len(), 1),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build from `width` rows of `height` values each.
    pub fn from_rows(width: usize, height: usize, rows: Vec<Vec<T>>) -> Result<Self> {
        let mismatch = |found: (usize, usize)| MathError::DimensionMismatch {
            op: "from_rows",
            left: (width, height),
            right: found,
        };
        if rows.len() != width {
            return Err(mismatch((rows.len(), height)));
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != height) {
            return Err(mismatch((width, bad.len())));
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Build from nested data shaped as `width` sequences of `height` scalars.
    pub fn from_nested(width: usize, height: usize, nested: &NestedData<T>) -> Result<Self>
    where
        T: Clone,
    {
        let mismatch = |found: (usize, usize)| MathError::DimensionMismatch {
            op: "from_nested",
            left: (width, height),
            right: found,
        };
        let rows = nested.as_sequence().ok_or_else(|| mismatch((0, 0)))?;
        if rows.len() != width {
            return Err(mismatch((rows.len(), height)));
        }
        let capacity = cell_count(width, height).ok_or_else(|| mismatch((width, height)))?;
        let mut data = Vec::with_capacity(capacity);
        for row in rows {
            let cells = row.as_sequence().ok_or_else(|| mismatch((width, 0)))?;
            if cells.len() != height {
                return Err(mismatch((width, cells.len())));
            }
            for cell in cells {
                let value = cell.as_scalar().ok_or_else(|| mismatch((width, height)))?;
                data.push(value.clone());
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(MathError::IndexOutOfRange {
                index: vec![x, y],
                bounds: vec![self.width, self.height],
            });
        }
        Ok(self.offset(x, y))
    }

    pub fn row_slice(&self, x: usize) -> &[T] {
        let start = self.offset(x, 0);
        &self.data[start..start + self.height]
    }

    /// Owned copy of the rows.
    pub fn rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.width).map(|x| self.row_slice(x).to_vec()).collect()
    }

    pub fn to_nested(&self) -> NestedData<T>
    where
        T: Clone,
    {
        NestedData::from_rows(self.rows())
    }

    pub fn get(&self, x: usize, y: usize) -> Result<T>
    where
        T: Copy,
    {
        let offset = self.check_bounds(x, y)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let offset = self.check_bounds(x, y)?;
        self.data[offset] = value;
        Ok(())
    }

    /// New matrix with every cell replaced by `f(value, x, y)`.
    pub fn apply<F>(&self, mut f: F) -> Matrix<T>
    where
        T: Copy,
        F: FnMut(T, usize, usize) -> T,
    {
        let height = self.height;
        Matrix {
            data: self
                .data
                .iter()
                .enumerate()
                .map(|(i, &v)| f(v, i / height, i % height))
                .collect(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn apply_mut<F>(&mut self, mut f: F)
    where
        T: Copy,
        F: FnMut(T, usize, usize) -> T,
    {
        let height = self.height;
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = f(*v, i / height, i % height);
        }
    }

    /// Combine cell-wise with `other` through `f(a, b, x, y)`.
    ///
    /// `other` must be at least as large as `self` in both dimensions; cells
    /// of `other` beyond `self`'s bounds are ignored.
    pub fn merge<F>(&self, other: &Matrix<T>, mut f: F) -> Result<Matrix<T>>
    where
        T: Copy,
        F: FnMut(T, T, usize, usize) -> T,
    {
        self.check_merge(other)?;
        Ok(self.apply(|a, x, y| f(a, other[(x, y)], x, y)))
    }

    pub fn merge_mut<F>(&mut self, other: &Matrix<T>, mut f: F) -> Result<()>
    where
        T: Copy,
        F: FnMut(T, T, usize, usize) -> T,
    {
        self.check_merge(other)?;
        self.apply_mut(|a, x, y| f(a, other[(x, y)], x, y));
        Ok(())
    }

    fn check_merge(&self, other: &Matrix<T>) -> Result<()> {
        if other.width < self.width || other.height < self.height {
            return Err(MathError::DimensionMismatch {
                op: "merge",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix<T>, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MathError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<T>
    where
        T: Copy,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..self.height {
            for x in 0..self.width {
                data.push(self[(x, y)]);
            }
        }
        Matrix {
            data,
            width: self.height,
            height: self.width,
        }
    }
}

impl<T> Matrix<T>
where
    T: Copy + Num,
{
    /// Cell-wise sum; both matrices must have the same dimensions.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other, "add")?;
        self.merge(other, |a, b, _, _| a + b)
    }

    pub fn add_mut(&mut self, other: &Matrix<T>) -> Result<()> {
        self.check_same_shape(other, "add")?;
        self.merge_mut(other, |a, b, _, _| a + b)
    }

    /// Cell-wise difference; both matrices must have the same dimensions.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other, "sub")?;
        self.merge(other, |a, b, _, _| a - b)
    }

    pub fn sub_mut(&mut self, other: &Matrix<T>) -> Result<()> {
        self.check_same_shape(other, "sub")?;
        self.merge_mut(other, |a, b, _, _| a - b)
    }

    /// Multiply every cell by `scalar`.
    pub fn scale(&self, scalar: T) -> Matrix<T> {
        self.apply(|v, _, _| v * scalar)
    }

    pub fn scale_mut(&mut self, scalar: T) {
        self.apply_mut(|v, _, _| v * scalar)
    }

    /// Divide every cell by `scalar`. A zero divisor is rejected rather than
    /// producing infinities (or panicking for integer cells).
    pub fn div(&self, scalar: T) -> Result<Matrix<T>> {
        if scalar.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.apply(|v, _, _| v / scalar))
    }

    pub fn div_mut(&mut self, scalar: T) -> Result<()> {
        if scalar.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        self.apply_mut(|v, _, _| v / scalar);
        Ok(())
    }

    /// Matrix product `self x other`.
    ///
    /// Requires `self.height == other.width`; the result is
    /// `self.width x other.height`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.height != other.width {
            return Err(MathError::DimensionMismatch {
                op: "matmul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        log::trace!(
            "matmul {}x{} * {}x{}",
            self.width,
            self.height,
            other.width,
            other.height
        );
        let mut out = Matrix::new(self.width, other.height);
        for x in 0..self.width {
            let row = self.row_slice(x);
            for y in 0..other.height {
                let mut acc = T::zero();
                for (k, &a) in row.iter().enumerate() {
                    acc = acc + a * other[(k, y)];
                }
                out[(x, y)] = acc;
            }
        }
        Ok(out)
    }
}

impl Matrix<f64> {
    /// Matrix with cells drawn uniformly from `[-1, 1]`.
    ///
    /// Panics when `width * height` overflows `usize`.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        Self {
            data: (0..expect_cell_count(width, height))
                .map(|_| rng.gen_range(-1.0..=1.0))
                .collect(),
            width,
            height,
        }
    }
}

fn cell_count(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)
}

fn expect_cell_count(width: usize, height: usize) -> usize {
    match cell_count(width, height) {
        Some(count) => count,
        None => panic!("matrix dimensions {}x{} overflow usize", width, height),
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.width && index.1 < self.height,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.width && index.1 < self.height,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for x in 0..self.width {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(x).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.height {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if x + 1 != self.width {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
