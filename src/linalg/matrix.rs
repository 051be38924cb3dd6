// src/linalg/matrix.rs

use crate::core::{LinalgError, TOLERANCE};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// A dense complex matrix stored row-major.
///
/// Matrices are never empty: construction rejects zero rows or zero columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl ComplexMatrix {
    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    /// * `LinalgError::Empty` if there are no rows or the rows are empty.
    /// * `LinalgError::Ragged` if the rows differ in length.
    pub fn new(rows: Vec<Vec<Complex64>>) -> Result<Self, LinalgError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(LinalgError::Empty);
        }
        if rows.iter().any(|row| row.len() != cols) {
            return Err(LinalgError::Ragged);
        }
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a matrix with purely real entries.
    pub fn from_real(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(|re| Complex64::new(re, 0.0)).collect())
                .collect(),
        )
    }

    /// An `n x n` identity. `n` must be non-zero.
    pub fn identity(n: usize) -> Result<Self, LinalgError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = Complex64::one();
        }
        Ok(m)
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![Complex64::zero(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Side length of a square matrix, i.e. the gate dimension.
    pub fn dimension(&self) -> Result<usize, LinalgError> {
        if self.is_square() {
            Ok(self.rows)
        } else {
            Err(LinalgError::NotSquare { rows: self.rows, cols: self.cols })
        }
    }

    /// Entry at `(r, c)`. Panics if out of bounds, like slice indexing.
    pub fn get(&self, r: usize, c: usize) -> Complex64 {
        assert!(r < self.rows && c < self.cols, "matrix index ({r}, {c}) out of bounds");
        self.data[r * self.cols + c]
    }

    pub fn row(&self, r: usize) -> Result<&[Complex64], LinalgError> {
        if r >= self.rows {
            return Err(LinalgError::IndexOutOfRange { index: r, len: self.rows });
        }
        Ok(&self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn column(&self, c: usize) -> Result<Vec<Complex64>, LinalgError> {
        if c >= self.cols {
            return Err(LinalgError::IndexOutOfRange { index: c, len: self.cols });
        }
        Ok((0..self.rows).map(|r| self.data[r * self.cols + c]).collect())
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    /// `LinalgError::DimensionMismatch` when `self.cols != other.rows`.
    pub fn multiply(&self, other: &ComplexMatrix) -> Result<ComplexMatrix, LinalgError> {
        if self.cols != other.rows {
            return Err(self.mismatch(other));
        }
        let mut data = vec![Complex64::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a.is_zero() {
                    continue;
                }
                for j in 0..other.cols {
                    data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(ComplexMatrix { rows: self.rows, cols: other.cols, data })
    }

    /// Entry-wise sum.
    pub fn add(&self, other: &ComplexMatrix) -> Result<ComplexMatrix, LinalgError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(other));
        }
        Ok(ComplexMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&other.data).map(|(a, b)| *a + *b).collect(),
        })
    }

    /// Multiplies every entry by `scalar`.
    pub fn scale(&self, scalar: Complex64) -> ComplexMatrix {
        ComplexMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|a| *a * scalar).collect(),
        }
    }

    /// Kronecker product `self ⊗ other`. Always defined.
    pub fn tensor(&self, other: &ComplexMatrix) -> ComplexMatrix {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut data = vec![Complex64::zero(); rows * cols];
        for r1 in 0..self.rows {
            for c1 in 0..self.cols {
                let a = self.data[r1 * self.cols + c1];
                for r2 in 0..other.rows {
                    for c2 in 0..other.cols {
                        let r = r1 * other.rows + r2;
                        let c = c1 * other.cols + c2;
                        data[r * cols + c] = a * other.data[r2 * other.cols + c2];
                    }
                }
            }
        }
        ComplexMatrix { rows, cols, data }
    }

    pub fn transpose(&self) -> ComplexMatrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        ComplexMatrix { rows: self.cols, cols: self.rows, data }
    }

    pub fn conjugate(&self) -> ComplexMatrix {
        ComplexMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(Complex64::conj).collect(),
        }
    }

    /// Conjugate transpose. Equals the inverse for unitary matrices.
    pub fn adjoint(&self) -> ComplexMatrix {
        self.transpose().conjugate()
    }

    /// Matrix-vector product `self * v`.
    pub fn apply(&self, v: &[Complex64]) -> Result<Vec<Complex64>, LinalgError> {
        if self.cols != v.len() {
            return Err(LinalgError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: v.len(),
                right_cols: 1,
            });
        }
        Ok((0..self.rows)
            .map(|r| {
                self.data[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .zip(v)
                    .map(|(a, b)| *a * *b)
                    .sum()
            })
            .collect())
    }

    /// Entry-wise comparison within `tolerance` (per real and imaginary part).
    pub fn approx_eq(&self, other: &ComplexMatrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a.re - b.re).abs() <= tolerance && (a.im - b.im).abs() <= tolerance)
    }

    /// `U * U^dagger == I` within the default tolerance.
    pub fn is_unitary(&self) -> bool {
        self.is_unitary_within(TOLERANCE)
    }

    pub(crate) fn is_unitary_within(&self, tolerance: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        match (self.multiply(&self.adjoint()), Self::identity(self.rows)) {
            (Ok(product), Ok(identity)) => product.approx_eq(&identity, tolerance),
            _ => false,
        }
    }

    /// `M == M^dagger` within the default tolerance.
    pub fn is_hermitian(&self) -> bool {
        self.is_hermitian_within(TOLERANCE)
    }

    pub(crate) fn is_hermitian_within(&self, tolerance: f64) -> bool {
        self.is_square() && self.approx_eq(&self.adjoint(), tolerance)
    }

    /// Square with every off-diagonal entry zero.
    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|r| {
                (0..self.cols).all(|c| r == c || self.data[r * self.cols + c].norm_sqr() <= TOLERANCE * TOLERANCE)
            })
    }

    fn mismatch(&self, other: &ComplexMatrix) -> LinalgError {
        LinalgError::DimensionMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            write!(f, "[")?;
            for c in 0..self.cols {
                write!(f, "{}{:.4}", if c > 0 { ", " } else { "" }, self.data[r * self.cols + c])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn hadamard() -> ComplexMatrix {
        ComplexMatrix::from_real(vec![
            vec![FRAC_1_SQRT_2, FRAC_1_SQRT_2],
            vec![FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_and_ragged_rows() {
        assert_eq!(ComplexMatrix::new(vec![]), Err(LinalgError::Empty));
        assert_eq!(ComplexMatrix::new(vec![vec![]]), Err(LinalgError::Empty));
        assert_eq!(
            ComplexMatrix::from_real(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(LinalgError::Ragged)
        );
    }

    #[test]
    fn multiply_checks_inner_dimension() {
        let a = ComplexMatrix::identity(2).unwrap();
        let b = ComplexMatrix::identity(4).unwrap();
        assert!(matches!(a.multiply(&b), Err(LinalgError::DimensionMismatch { .. })));

        let m = ComplexMatrix::from_real(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let product = m.multiply(&m).unwrap();
        let expected = ComplexMatrix::from_real(vec![vec![7.0, 10.0], vec![15.0, 22.0]]).unwrap();
        assert_eq!(product, expected);
    }

    #[test]
    fn hadamard_squared_is_identity() {
        let h = hadamard();
        let product = h.multiply(&h).unwrap();
        assert!(product.approx_eq(&ComplexMatrix::identity(2).unwrap(), 1e-12));
        assert!(h.is_unitary());
        assert!(h.is_hermitian());
        assert!(!h.is_diagonal());
    }

    #[test]
    fn tensor_product_layout() {
        let a = ComplexMatrix::from_real(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = ComplexMatrix::from_real(vec![vec![0.0, 5.0], vec![6.0, 7.0]]).unwrap();
        let expected = ComplexMatrix::from_real(vec![
            vec![0.0, 5.0, 0.0, 10.0],
            vec![6.0, 7.0, 12.0, 14.0],
            vec![0.0, 15.0, 0.0, 20.0],
            vec![18.0, 21.0, 24.0, 28.0],
        ])
        .unwrap();
        assert_eq!(a.tensor(&b), expected);

        let row = ComplexMatrix::from_real(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let t = row.tensor(&a);
        assert_eq!((t.rows(), t.cols()), (2, 6));
    }

    #[test]
    fn adjoint_conjugates_and_transposes() {
        let m = ComplexMatrix::new(vec![vec![c(1.0, 2.0), c(3.0, -1.0)], vec![c(0.0, 1.0), c(5.0, 0.0)]]).unwrap();
        let adj = m.adjoint();
        assert_eq!(adj.get(0, 0), c(1.0, -2.0));
        assert_eq!(adj.get(0, 1), c(0.0, -1.0));
        assert_eq!(adj.get(1, 0), c(3.0, 1.0));
        assert_eq!(adj.adjoint(), m);
    }

    #[test]
    fn apply_to_vector() {
        let h = hadamard();
        let out = h.apply(&[c(1.0, 0.0), c(0.0, 0.0)]).unwrap();
        assert!((out[0].re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((out[1].re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!(h.apply(&[c(1.0, 0.0)]).is_err());
    }

    #[test]
    fn non_square_predicates() {
        let m = ComplexMatrix::from_real(vec![vec![1.0, 0.0, 0.0]]).unwrap();
        assert!(!m.is_unitary());
        assert!(!m.is_hermitian());
        assert!(!m.is_diagonal());
        assert_eq!(m.dimension(), Err(LinalgError::NotSquare { rows: 1, cols: 3 }));
        assert_eq!(m.column(1).unwrap(), vec![c(0.0, 0.0)]);
        assert!(m.row(1).is_err());
    }
}
