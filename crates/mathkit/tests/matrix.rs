//! Integration tests for `Matrix`.
//!
//! Convention: `width` is the row count and `height` the column count, so
//! `Matrix::from_rows(2, 3, ..)` takes two rows of three values.

use mathkit::math::{Matrix, NestedData};
use mathkit::{nested, MathError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn m(width: usize, height: usize, rows: Vec<Vec<f64>>) -> Matrix<f64> {
    Matrix::from_rows(width, height, rows).unwrap()
}

fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!((x - y).abs() < 1e-9, "{} != {}", a, b);
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_rows_keeps_data() {
    let a = m(2, 2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(a.rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(a.width(), 2);
    assert_eq!(a.height(), 2);
}

#[test]
fn new_is_zero_filled() {
    let b: Matrix<f64> = Matrix::new(3, 4);
    assert_eq!(b.shape(), (3, 4));
    assert_eq!(b.rows(), vec![vec![0.0; 4]; 3]);
}

#[test]
fn from_rows_rejects_wrong_row_count() {
    let result = Matrix::from_rows(2, 2, vec![vec![1.0, 2.0, 3.0]]);
    assert!(matches!(result, Err(MathError::DimensionMismatch { .. })));
}

#[test]
fn from_rows_rejects_wrong_row_length() {
    let result = Matrix::from_rows(2, 2, vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(matches!(result, Err(MathError::DimensionMismatch { .. })));
}

#[test]
fn from_nested_rejects_non_numeric_cells() {
    let data: NestedData<f64> = nested![[1.0, [2.0]], [3.0, 4.0]];
    let result = Matrix::from_nested(2, 2, &data);
    assert!(matches!(result, Err(MathError::DimensionMismatch { .. })));

    let ok = Matrix::from_nested(2, 2, &nested![[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(ok.to_nested(), nested![[1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn from_nested_rejects_wrong_outer_length() {
    let result = Matrix::from_nested(3, 1, &nested![[1.0], [2.0]]);
    assert!(matches!(result, Err(MathError::DimensionMismatch { .. })));
    assert!(Matrix::from_nested(1, 1, &NestedData::Scalar(1.0)).is_err());
}

#[test]
fn random_cells_are_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(5);
    let r = Matrix::random(4, 3, &mut rng);
    assert_eq!(r.shape(), (4, 3));
    assert!(r.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_are_bounds_checked() {
    let mut a: Matrix<f64> = Matrix::new(2, 3);
    a.set(1, 2, 5.0).unwrap();
    assert_eq!(a.get(1, 2).unwrap(), 5.0);
    assert_eq!(a[(1, 2)], 5.0);
    assert!(matches!(a.get(2, 0), Err(MathError::IndexOutOfRange { .. })));
    assert!(matches!(a.set(0, 3, 1.0), Err(MathError::IndexOutOfRange { .. })));
}

#[test]
fn rows_are_owned_copies() {
    let a = m(1, 2, vec![vec![1.0, 2.0]]);
    let mut rows = a.rows();
    rows[0][0] = 100.0;
    assert_eq!(a[(0, 0)], 1.0);
}

// ---------------------------------------------------------------------------
// apply / merge
// ---------------------------------------------------------------------------

#[test]
fn apply_uses_coordinates() {
    let a: Matrix<f64> = Matrix::new(5, 5);
    let b = a.apply(|_, x, y| (x * 10 + y) as f64);
    assert_eq!(b.row_slice(2), &[20.0, 21.0, 22.0, 23.0, 24.0]);
    // the source matrix is left unchanged
    assert!(a.as_slice().iter().all(|v| *v == 0.0));

    let mut c = a.clone();
    c.apply_mut(|v, x, _| v + x as f64);
    assert_eq!(c.row_slice(4), &[4.0; 5]);
}

#[test]
fn merge_with_smaller_matrix_fails() {
    let a = m(2, 2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = m(1, 1, vec![vec![1.0]]);
    let result = a.merge(&b, |x, y, _, _| x + y);
    assert!(matches!(
        result,
        Err(MathError::DimensionMismatch { op: "merge", .. })
    ));
}

#[test]
fn merge_with_larger_matrix_ignores_excess() {
    let a = m(1, 2, vec![vec![1.0, 2.0]]);
    let b = m(2, 3, vec![vec![10.0, 20.0, 30.0], vec![40.0, 50.0, 60.0]]);
    let merged = a.merge(&b, |x, y, _, _| x + y).unwrap();
    assert_eq!(merged.rows(), vec![vec![11.0, 22.0]]);

    let mut c = a.clone();
    c.merge_mut(&b, |x, y, i, j| x * y + (i + j) as f64).unwrap();
    assert_eq!(c.rows(), vec![vec![10.0, 41.0]]);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_then_sub_restores_original() {
    let a = m(2, 3, vec![vec![1.5, -2.0, 3.25], vec![0.1, 0.2, 0.3]]);
    let b = m(2, 3, vec![vec![7.0, 8.0, -9.0], vec![1e3, -1e-3, 0.0]]);
    let sum = a.add(&b).unwrap();
    let back = sum.sub(&b).unwrap();
    assert_close(&back, &a);
}

#[test]
fn add_and_sub_require_equal_dimensions() {
    let a: Matrix<f64> = Matrix::new(2, 2);
    let b: Matrix<f64> = Matrix::new(2, 3);
    assert!(matches!(a.add(&b), Err(MathError::DimensionMismatch { op: "add", .. })));
    assert!(matches!(a.sub(&b), Err(MathError::DimensionMismatch { op: "sub", .. })));
    // larger-in-both would pass merge's check but not add's
    let c: Matrix<f64> = Matrix::new(3, 3);
    assert!(a.add(&c).is_err());
}

#[test]
fn in_place_add_and_sub() {
    let mut a = m(1, 2, vec![vec![1.0, 2.0]]);
    let b = m(1, 2, vec![vec![3.0, 5.0]]);
    a.add_mut(&b).unwrap();
    assert_eq!(a.rows(), vec![vec![4.0, 7.0]]);
    a.sub_mut(&b).unwrap();
    assert_eq!(a.rows(), vec![vec![1.0, 2.0]]);
}

#[test]
fn scale_identities() {
    let a = m(2, 2, vec![vec![1.0, -2.0], vec![3.5, 4.0]]);
    assert_eq!(a.scale(1.0), a);
    assert_eq!(a.scale(0.0), Matrix::new(2, 2));

    let mut b = a.clone();
    b.scale_mut(2.0);
    assert_eq!(b.rows(), vec![vec![2.0, -4.0], vec![7.0, 8.0]]);
}

#[test]
fn div_divides_every_cell() {
    let a = m(1, 3, vec![vec![2.0, 4.0, 6.0]]);
    assert_eq!(a.div(2.0).unwrap().rows(), vec![vec![1.0, 2.0, 3.0]]);

    let mut b = a.clone();
    b.div_mut(4.0).unwrap();
    assert_eq!(b.rows(), vec![vec![0.5, 1.0, 1.5]]);
}

#[test]
fn div_by_zero_is_an_error() {
    let mut a = m(1, 1, vec![vec![1.0]]);
    assert_eq!(a.div(0.0), Err(MathError::DivisionByZero));
    assert_eq!(a.div_mut(0.0), Err(MathError::DivisionByZero));
    assert_eq!(a[(0, 0)], 1.0);

    let ints = Matrix::from_rows(1, 1, vec![vec![3i64]]).unwrap();
    assert_eq!(ints.div(0), Err(MathError::DivisionByZero));
}

// ---------------------------------------------------------------------------
// Matrix product
// ---------------------------------------------------------------------------

#[test]
fn matmul_two_by_two() {
    // rows [1 2; 0 1] times rows [2 5; 6 7]
    let a = m(2, 2, vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
    let b = m(2, 2, vec![vec![2.0, 5.0], vec![6.0, 7.0]]);
    let c = a.matmul(&b).unwrap();
    assert_eq!(c.rows(), vec![vec![14.0, 19.0], vec![6.0, 7.0]]);
}

#[test]
fn matmul_result_dimensions() {
    let a: Matrix<f64> = Matrix::new(3, 4);
    let b: Matrix<f64> = Matrix::new(4, 2);
    assert_eq!(a.matmul(&b).unwrap().shape(), (3, 2));

    let column = m(2, 1, vec![vec![1.0], vec![2.0]]);
    let row = m(1, 2, vec![vec![3.0, 4.0]]);
    assert_eq!(row.matmul(&column).unwrap().rows(), vec![vec![11.0]]);
    assert_eq!(
        column.matmul(&row).unwrap().rows(),
        vec![vec![3.0, 4.0], vec![6.0, 8.0]]
    );
}

#[test]
fn matmul_rejects_mismatched_inner_dimension() {
    let a: Matrix<f64> = Matrix::new(3, 4);
    let b: Matrix<f64> = Matrix::new(3, 4);
    match a.matmul(&b) {
        Err(MathError::DimensionMismatch { op, left, right }) => {
            assert_eq!(op, "matmul");
            assert_eq!(left, (3, 4));
            assert_eq!(right, (3, 4));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn matmul_with_identity() {
    let a = m(2, 3, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let identity = Matrix::<f64>::new(3, 3).apply(|_, x, y| if x == y { 1.0 } else { 0.0 });
    assert_eq!(a.matmul(&identity).unwrap(), a);
}

// ---------------------------------------------------------------------------
// Zero-sized matrices
// ---------------------------------------------------------------------------

#[test]
fn zero_row_matrix_operations() {
    let a: Matrix<f64> = Matrix::new(0, 3);
    assert_eq!(a.shape(), (0, 3));
    assert!(a.as_slice().is_empty());
    assert_eq!(a.apply(|v, _, _| v + 1.0).shape(), (0, 3));
    assert_eq!(a.to_string(), "[]");

    // 0x3 times 3x2 is an empty 0x2 matrix
    let b: Matrix<f64> = Matrix::new(3, 2);
    assert_eq!(a.matmul(&b).unwrap().shape(), (0, 2));
}

#[test]
fn zero_column_matrix_operations() {
    let a: Matrix<f64> = Matrix::new(3, 0);
    assert_eq!(a.shape(), (3, 0));
    assert_eq!(a.apply(|v, _, _| v * 2.0), a);
    assert_eq!(a.to_string(), "[[], [], []]");
    assert_eq!(a.rows(), vec![Vec::<f64>::new(); 3]);

    // 3x0 times 0x2 sums over an empty inner dimension
    let b: Matrix<f64> = Matrix::new(0, 2);
    let c = a.matmul(&b).unwrap();
    assert_eq!(c.shape(), (3, 2));
    assert!(c.as_slice().iter().all(|v| *v == 0.0));
}

#[test]
fn from_flat_rejects_dimensions_whose_product_overflows() {
    let result = Matrix::<f64>::from_flat(1 << 32, 1 << 32, vec![]);
    assert!(matches!(result, Err(MathError::DimensionMismatch { .. })));
}
