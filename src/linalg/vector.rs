// src/linalg/vector.rs

//! Operations on complex vectors represented as slices of `Complex64`.

use crate::core::LinalgError;
use num_complex::Complex64;

fn check_lengths(a: &[Complex64], b: &[Complex64]) -> Result<(), LinalgError> {
    if a.len() != b.len() {
        return Err(LinalgError::LengthMismatch { left: a.len(), right: b.len() });
    }
    Ok(())
}

/// Sum of squared moduli.
pub fn norm_squared(v: &[Complex64]) -> f64 {
    v.iter().map(|c| c.norm_sqr()).sum()
}

/// Euclidean norm.
pub fn norm(v: &[Complex64]) -> f64 {
    norm_squared(v).sqrt()
}

/// `<a|b> = Σ conj(a_i) · b_i`, conjugate-linear in the first argument.
pub fn inner_product(a: &[Complex64], b: &[Complex64]) -> Result<Complex64, LinalgError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x.conj() * *y).sum())
}

pub fn add(a: &[Complex64], b: &[Complex64]) -> Result<Vec<Complex64>, LinalgError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| *x + *y).collect())
}

pub fn scale(v: &[Complex64], scalar: Complex64) -> Vec<Complex64> {
    v.iter().map(|x| *x * scalar).collect()
}

/// Returns `v / ‖v‖`.
///
/// # Errors
/// `LinalgError::ZeroNorm` if every entry is zero.
pub fn normalize(v: &[Complex64]) -> Result<Vec<Complex64>, LinalgError> {
    let n = norm(v);
    if n == 0.0 {
        return Err(LinalgError::ZeroNorm);
    }
    Ok(v.iter().map(|x| *x / n).collect())
}
