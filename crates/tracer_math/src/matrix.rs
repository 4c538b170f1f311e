//! Square matrices of size 2, 3 and 4.
//!
//! Matrices are fixed-size, array-backed and row-major. The size is part of
//! the type, so products and transforms of mismatched sizes do not compile;
//! only dynamically sized input ([`Matrix::try_from_slice`]) can fail with
//! [`MathError::DimensionMismatch`].
//!
//! Determinants are computed by cofactor expansion and cached on first use,
//! since a matrix is never mutated after construction.

use std::sync::OnceLock;

use glam::{DMat2, DMat3, DMat4, DVec4};

use crate::{approx_eq, MathError, MathResult, Vector4};

/// An `N`×`N` matrix of reals.
#[derive(Debug, Clone)]
pub struct Matrix<const N: usize> {
    data: [[f64; N]; N],
    determinant: OnceLock<f64>,
}

pub type Matrix2 = Matrix<2>;
pub type Matrix3 = Matrix<3>;
pub type Matrix4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    /// Create a matrix from its rows.
    pub fn new(rows: [[f64; N]; N]) -> Self {
        Self {
            data: rows,
            determinant: OnceLock::new(),
        }
    }

    /// The identity matrix. Every call returns an independent value.
    pub fn identity() -> Self {
        let mut rows = [[0.0; N]; N];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self::new(rows)
    }

    /// Build a matrix from `N * N` values in row-major order.
    pub fn try_from_slice(values: &[f64]) -> MathResult<Self> {
        if values.len() != N * N {
            return Err(MathError::DimensionMismatch {
                expected: N * N,
                found: values.len(),
            });
        }
        let mut rows = [[0.0; N]; N];
        for (i, value) in values.iter().enumerate() {
            rows[i / N][i % N] = *value;
        }
        Ok(Self::new(rows))
    }

    /// Number of rows (and columns).
    pub const fn size(&self) -> usize {
        N
    }

    /// Value at `row`, `column`. Panics when out of range.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row][column]
    }

    pub fn row(&self, row: usize) -> [f64; N] {
        self.data[row]
    }

    pub fn column(&self, column: usize) -> [f64; N] {
        let mut out = [0.0; N];
        for (r, value) in out.iter_mut().enumerate() {
            *value = self.data[r][column];
        }
        out
    }

    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; N]; N];
        for (r, row) in rows.iter_mut().enumerate() {
            *row = self.column(r);
        }
        Self::new(rows)
    }
}

// glam stores columns, so loading our rows gives the transpose:
// Bᵀ·Aᵀ = (A·B)ᵀ, read back by columns, is A·B by rows.
macro_rules! glam_product {
    ($n:literal, $glam:ty) => {
        impl Matrix<$n> {
            /// Matrix product `self * other`.
            pub fn multiply(&self, other: &Matrix<$n>) -> Matrix<$n> {
                let lhs = <$glam>::from_cols_array_2d(&self.data);
                let rhs = <$glam>::from_cols_array_2d(&other.data);
                Matrix::new((rhs * lhs).to_cols_array_2d())
            }
        }
    };
}

glam_product!(2, DMat2);
glam_product!(3, DMat3);
glam_product!(4, DMat4);

/// Cofactor expansion shared by every supported matrix size.
pub trait SquareMatrix {
    /// Determinant of the submatrix with `row` and `column` removed.
    fn minor(&self, row: usize, column: usize) -> f64;

    fn determinant(&self) -> f64;

    /// Minor with the checkerboard sign applied.
    ///
    /// Panics when `row` or `column` is out of range, like [`Matrix::get`].
    fn cofactor(&self, row: usize, column: usize) -> f64 {
        let minor = self.minor(row, column);
        if (row + column) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }
}

impl SquareMatrix for Matrix<2> {
    fn minor(&self, row: usize, column: usize) -> f64 {
        check_index::<2>(row, column);
        self.data[1 - row][1 - column]
    }

    fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.data;
        a * d - b * c
    }
}

impl Matrix<3> {
    /// Copy of this matrix with `row` and `column` removed. Panics when
    /// either index is out of range.
    pub fn submatrix(&self, row: usize, column: usize) -> Matrix<2> {
        Matrix::new(submatrix_rows(&self.data, row, column))
    }
}

impl SquareMatrix for Matrix<3> {
    fn minor(&self, row: usize, column: usize) -> f64 {
        self.submatrix(row, column).determinant()
    }

    fn determinant(&self) -> f64 {
        expand_first_row(self)
    }
}

impl Matrix<4> {
    /// Copy of this matrix with `row` and `column` removed. Panics when
    /// either index is out of range.
    pub fn submatrix(&self, row: usize, column: usize) -> Matrix<3> {
        Matrix::new(submatrix_rows(&self.data, row, column))
    }

    /// Multiply a tuple by this matrix.
    #[inline]
    pub fn transform(&self, tuple: Vector4) -> Vector4 {
        let matrix = DMat4::from_cols_array_2d(&self.data).transpose();
        Vector4::from(matrix * DVec4::from(tuple))
    }
}

impl SquareMatrix for Matrix<4> {
    fn minor(&self, row: usize, column: usize) -> f64 {
        self.submatrix(row, column).determinant()
    }

    fn determinant(&self) -> f64 {
        expand_first_row(self)
    }
}

impl<const N: usize> Matrix<N>
where
    Self: SquareMatrix,
{
    fn cached_determinant(&self) -> f64 {
        *self
            .determinant
            .get_or_init(|| SquareMatrix::determinant(self))
    }

    /// Whether the determinant is non-zero.
    pub fn invertible(&self) -> bool {
        self.cached_determinant() != 0.0
    }

    /// Inverse via the adjugate: transposed cofactors over the determinant.
    pub fn inverse(&self) -> MathResult<Self> {
        let determinant = self.cached_determinant();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix);
        }

        let mut rows = [[0.0; N]; N];
        for r in 0..N {
            for (c, row) in rows.iter_mut().enumerate() {
                row[r] = self.cofactor(r, c) / determinant;
            }
        }
        Ok(Self::new(rows))
    }
}

impl<const N: usize> PartialEq for Matrix<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

fn expand_first_row<const N: usize>(m: &Matrix<N>) -> f64
where
    Matrix<N>: SquareMatrix,
{
    (0..N).map(|c| m.data[0][c] * m.cofactor(0, c)).sum()
}

fn check_index<const N: usize>(row: usize, column: usize) {
    assert!(
        row < N && column < N,
        "index ({}, {}) out of range for a {}x{} matrix",
        row,
        column,
        N,
        N
    );
}

/// Drop one row and one column. `M` must be `N - 1`.
fn submatrix_rows<const N: usize, const M: usize>(
    data: &[[f64; N]; N],
    row: usize,
    column: usize,
) -> [[f64; M]; M] {
    debug_assert_eq!(M + 1, N);
    check_index::<N>(row, column);
    let mut out = [[0.0; M]; M];
    let kept_rows = data.iter().enumerate().filter(|(r, _)| *r != row);
    for (dst, (_, src)) in out.iter_mut().zip(kept_rows) {
        let kept = src.iter().enumerate().filter(|(c, _)| *c != column);
        for (value, (_, v)) in dst.iter_mut().zip(kept) {
            *value = *v;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample4() -> Matrix4 {
        Matrix::new([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ])
    }

    #[test]
    fn test_indexing() {
        let m = Matrix::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.5, 6.5, 7.5, 8.5],
            [9.0, 10.0, 11.0, 12.0],
            [13.5, 14.5, 15.5, 16.5],
        ]);

        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m.get(1, 0), 5.5);
        assert_eq!(m.get(3, 2), 15.5);
        assert_eq!(m.row(2), [9.0, 10.0, 11.0, 12.0]);
        assert_eq!(m.column(1), [2.0, 6.5, 10.0, 14.5]);
    }

    #[test]
    fn test_try_from_slice() {
        let m = Matrix2::try_from_slice(&[-3.0, 5.0, 1.0, -2.0]).unwrap();
        assert_eq!(m, Matrix::new([[-3.0, 5.0], [1.0, -2.0]]));

        let err = Matrix3::try_from_slice(&[1.0; 4]).unwrap_err();
        assert_eq!(err, MathError::DimensionMismatch { expected: 9, found: 4 });
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 8.0, 7.0, 6.0],
            [5.0, 4.0, 3.0, 2.0],
        ]);
        let b = Matrix::new([
            [-2.0, 1.0, 2.0, 3.0],
            [3.0, 2.0, 1.0, -1.0],
            [4.0, 3.0, 6.0, 5.0],
            [1.0, 2.0, 7.0, 8.0],
        ]);

        let expected = Matrix::new([
            [20.0, 22.0, 50.0, 48.0],
            [44.0, 54.0, 114.0, 108.0],
            [40.0, 58.0, 110.0, 102.0],
            [16.0, 26.0, 46.0, 42.0],
        ]);
        assert_eq!(a.multiply(&b), expected);
        assert_eq!(a.multiply(&Matrix4::identity()), a);
    }

    #[test]
    fn test_multiply_small_sizes() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(a.multiply(&b), Matrix::new([[2.0, 1.0], [4.0, 3.0]]));
        assert_eq!(b.multiply(&a), Matrix::new([[3.0, 4.0], [1.0, 2.0]]));

        let a = Matrix::new([[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]]);
        let b = Matrix::new([[2.0, 0.0, 1.0], [1.0, 1.0, 0.0], [0.0, 3.0, 1.0]]);
        let expected = Matrix::new([[4.0, 2.0, 1.0], [1.0, 10.0, 3.0], [8.0, 3.0, 5.0]]);
        assert_eq!(a.multiply(&b), expected);
        assert_eq!(a.multiply(&Matrix3::identity()), a);
    }

    #[test]
    fn test_transform_tuple() {
        let m = Matrix::new([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 4.0, 2.0],
            [8.0, 6.0, 4.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let t = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m.transform(t), Vector4::new(18.0, 24.0, 33.0, 1.0));
        assert_eq!(Matrix4::identity().transform(t), t);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::new([
            [0.0, 9.0, 3.0, 0.0],
            [9.0, 8.0, 0.0, 8.0],
            [1.0, 8.0, 5.0, 3.0],
            [0.0, 0.0, 5.0, 8.0],
        ]);
        let expected = Matrix::new([
            [0.0, 9.0, 1.0, 0.0],
            [9.0, 8.0, 8.0, 0.0],
            [3.0, 0.0, 5.0, 5.0],
            [0.0, 8.0, 3.0, 8.0],
        ]);
        assert_eq!(m.transpose(), expected);
        assert_eq!(Matrix4::identity().transpose(), Matrix4::identity());
    }

    #[test]
    fn test_determinant_2x2() {
        let m = Matrix::new([[1.0, 5.0], [-3.0, 2.0]]);
        assert_eq!(m.determinant(), 17.0);
    }

    #[test]
    fn test_submatrix() {
        let m = Matrix::new([[1.0, 5.0, 0.0], [-3.0, 2.0, 7.0], [0.0, 6.0, -3.0]]);
        assert_eq!(m.submatrix(0, 2), Matrix::new([[-3.0, 2.0], [0.0, 6.0]]));

        let m = Matrix::new([
            [-6.0, 1.0, 1.0, 6.0],
            [-8.0, 5.0, 8.0, 6.0],
            [-1.0, 0.0, 8.0, 2.0],
            [-7.0, 1.0, -1.0, 1.0],
        ]);
        let expected = Matrix::new([[-6.0, 1.0, 6.0], [-8.0, 8.0, 6.0], [-7.0, -1.0, 1.0]]);
        assert_eq!(m.submatrix(2, 1), expected);
    }

    #[test]
    fn test_minor_and_cofactor_3x3() {
        let m = Matrix::new([[3.0, 5.0, 0.0], [2.0, -1.0, -7.0], [6.0, -1.0, 5.0]]);

        assert_eq!(m.minor(1, 0), 25.0);
        assert_eq!(m.minor(0, 0), -12.0);
        assert_eq!(m.cofactor(0, 0), -12.0);
        assert_eq!(m.cofactor(1, 0), -25.0);
    }

    #[test]
    fn test_determinant_3x3_and_4x4() {
        let m = Matrix::new([[1.0, 2.0, 6.0], [-5.0, 8.0, -4.0], [2.0, 6.0, 4.0]]);
        assert_eq!(m.cofactor(0, 0), 56.0);
        assert_eq!(m.cofactor(0, 1), 12.0);
        assert_eq!(m.cofactor(0, 2), -46.0);
        assert_eq!(m.determinant(), -196.0);

        let m = Matrix::new([
            [-2.0, -8.0, 3.0, 5.0],
            [-3.0, 1.0, 7.0, 3.0],
            [1.0, 2.0, -9.0, 6.0],
            [-6.0, 7.0, 7.0, -9.0],
        ]);
        assert_eq!(m.cofactor(0, 0), 690.0);
        assert_eq!(m.cofactor(0, 1), 447.0);
        assert_eq!(m.cofactor(0, 2), 210.0);
        assert_eq!(m.cofactor(0, 3), 51.0);
        assert_eq!(m.determinant(), -4071.0);
    }

    #[test]
    fn test_invertible() {
        let m = Matrix::new([
            [6.0, 4.0, 4.0, 4.0],
            [5.0, 5.0, 7.0, 6.0],
            [4.0, -9.0, 3.0, -7.0],
            [9.0, 1.0, 7.0, -6.0],
        ]);
        assert!(m.invertible());

        let singular = Matrix::new([
            [-4.0, 2.0, -2.0, -3.0],
            [9.0, 6.0, 2.0, 6.0],
            [0.0, -5.0, 1.0, -5.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(!singular.invertible());
        assert_eq!(singular.inverse().unwrap_err(), MathError::SingularMatrix);
    }

    #[test]
    fn test_inverse_4x4() {
        let m = sample4();
        let inverse = m.inverse().unwrap();

        assert_eq!(m.determinant(), 532.0);
        assert_eq!(m.cofactor(2, 3), -160.0);
        assert!(approx_eq(inverse.get(3, 2), -160.0 / 532.0));
        assert_eq!(m.cofactor(3, 2), 105.0);
        assert!(approx_eq(inverse.get(2, 3), 105.0 / 532.0));

        let expected = Matrix::new([
            [0.21805, 0.45113, 0.24060, -0.04511],
            [-0.80827, -1.45677, -0.44361, 0.52068],
            [-0.07895, -0.22368, -0.05263, 0.19737],
            [-0.52256, -0.81391, -0.30075, 0.30639],
        ]);
        assert_eq!(inverse, expected);
    }

    #[test]
    fn test_inverse_2x2() {
        let m = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
        let inverse = m.inverse().unwrap();
        assert_eq!(inverse, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
    }

    #[test]
    fn test_product_times_inverse_recovers_operand() {
        let a = Matrix::new([
            [3.0, -9.0, 7.0, 3.0],
            [3.0, -8.0, 2.0, -9.0],
            [-4.0, 4.0, 4.0, 1.0],
            [-6.0, 5.0, -1.0, 1.0],
        ]);
        let b = Matrix::new([
            [8.0, 2.0, 2.0, 2.0],
            [3.0, -1.0, 7.0, 0.0],
            [7.0, 0.0, 5.0, 4.0],
            [6.0, -2.0, 0.0, 5.0],
        ]);
        let c = a.multiply(&b);
        assert_eq!(c.multiply(&b.inverse().unwrap()), a);
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let m = sample4();
        let inverse = m.inverse().unwrap();

        for v in [
            Vector4::point(1.0, 2.0, 3.0),
            Vector4::vector(-4.0, 0.5, 9.0),
            Vector4::new(0.25, -7.0, 3.5, 2.0),
        ] {
            assert_eq!(inverse.transform(m.transform(v)), v);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_minor_2x2_out_of_range_panics() {
        let m = Matrix::new([[1.0, 5.0], [-3.0, 2.0]]);
        m.minor(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_minor_3x3_out_of_range_panics() {
        let m = Matrix::new([[3.0, 5.0, 0.0], [2.0, -1.0, -7.0], [6.0, -1.0, 5.0]]);
        m.minor(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_submatrix_out_of_range_panics() {
        sample4().submatrix(0, 4);
    }

    #[test]
    fn test_identity_default_is_independent() {
        let a = Matrix4::default();
        let b = a.transpose();
        assert_eq!(a, Matrix4::identity());
        assert_eq!(b, Matrix4::identity());
        assert!(a.invertible());
    }
}
