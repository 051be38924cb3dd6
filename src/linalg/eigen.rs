// src/linalg/eigen.rs

//! Eigenvalues and eigenvectors for the two cases the toolkit needs:
//! 2x2 matrices (closed form) and diagonal matrices of any size.

use super::{vector, ComplexMatrix};
use crate::core::{LinalgError, TOLERANCE};
use num_complex::Complex64;
use num_traits::{One, Zero};

fn check_supported(m: &ComplexMatrix) -> Result<usize, LinalgError> {
    let size = m.dimension()?;
    if size == 2 || m.is_diagonal() {
        Ok(size)
    } else {
        Err(LinalgError::UnsupportedEigenProblem)
    }
}

/// Eigenvalues of a 2x2 or diagonal matrix.
///
/// For a 2x2 matrix the two roots of `λ² - tr·λ + det` are returned, the
/// `+√` root first. Diagonal entries are returned in order.
pub fn eigenvalues(m: &ComplexMatrix) -> Result<Vec<Complex64>, LinalgError> {
    let size = check_supported(m)?;
    if m.is_diagonal() {
        return Ok((0..size).map(|i| m.get(i, i)).collect());
    }
    let (a, b, c, d) = (m.get(0, 0), m.get(0, 1), m.get(1, 0), m.get(1, 1));
    let trace = a + d;
    let determinant = a * d - b * c;
    let root = (trace * trace - determinant * 4.0).sqrt();
    Ok(vec![(trace + root) / 2.0, (trace - root) / 2.0])
}

/// Unit eigenvectors matching the order of [`eigenvalues`].
pub fn eigenvectors(m: &ComplexMatrix) -> Result<Vec<Vec<Complex64>>, LinalgError> {
    let size = check_supported(m)?;
    if m.is_diagonal() {
        return Ok((0..size)
            .map(|i| {
                let mut v = vec![Complex64::zero(); size];
                v[i] = Complex64::one();
                v
            })
            .collect());
    }
    let (a, b, c, d) = (m.get(0, 0), m.get(0, 1), m.get(1, 0), m.get(1, 1));
    eigenvalues(m)?
        .into_iter()
        .map(|lambda| {
            // Solve (M - λI)v = 0 from whichever off-diagonal entry is non-zero.
            let v = if b.norm() > TOLERANCE {
                vec![b, lambda - a]
            } else {
                vec![lambda - d, c]
            };
            vector::normalize(&v)
        })
        .collect()
}
