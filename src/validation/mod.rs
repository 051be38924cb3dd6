// src/validation/mod.rs

//! Provides functions to validate register states and gate matrices.

use crate::core::{StateVector, ValidationError, TOLERANCE};
use crate::linalg::ComplexMatrix;

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = TOLERANCE;
const DEFAULT_MATRIX_TOLERANCE: f64 = 1e-9;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// Registers are not required to be normalized; this is an opt-in check for
/// callers that want physical states.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(ValidationError::NotNormalized)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), ValidationError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_squared = state.norm_squared();
    if (norm_squared - 1.0).abs() > effective_tolerance {
        Err(ValidationError::NotNormalized { norm_squared, tolerance: effective_tolerance })
    } else {
        Ok(())
    }
}

/// Checks `U * U^dagger ≈ I` entry-wise.
pub fn check_unitary(matrix: &ComplexMatrix, tolerance: Option<f64>) -> Result<(), ValidationError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_MATRIX_TOLERANCE);
    if matrix.is_unitary_within(effective_tolerance) {
        Ok(())
    } else {
        Err(ValidationError::NotUnitary(effective_tolerance))
    }
}

/// Checks `M ≈ M^dagger` entry-wise.
pub fn check_hermitian(matrix: &ComplexMatrix, tolerance: Option<f64>) -> Result<(), ValidationError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_MATRIX_TOLERANCE);
    if matrix.is_hermitian_within(effective_tolerance) {
        Ok(())
    } else {
        Err(ValidationError::NotHermitian(effective_tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn normalization() {
        let good = StateVector::from_amplitudes(vec![Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)]);
        assert!(check_normalization(&good, None).is_ok());

        let bad = StateVector::from_amplitudes(vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)]);
        assert!(matches!(
            check_normalization(&bad, None),
            Err(ValidationError::NotNormalized { norm_squared, .. }) if (norm_squared - 2.0).abs() < 1e-12
        ));
        assert!(check_normalization(&bad, Some(1.5)).is_ok());
    }

    #[test]
    fn unitary_and_hermitian() {
        let y = ComplexMatrix::new(vec![
            vec![Complex64::new(0.0, 0.0), Complex64::new(0.0, -1.0)],
            vec![Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)],
        ])
        .unwrap();
        assert!(check_unitary(&y, None).is_ok());
        assert!(check_hermitian(&y, None).is_ok());

        let s = ComplexMatrix::new(vec![
            vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            vec![Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0)],
        ])
        .unwrap();
        assert!(check_unitary(&s, None).is_ok());
        assert_eq!(check_hermitian(&s, None), Err(ValidationError::NotHermitian(1e-9)));

        let scaled = s.scale(Complex64::new(2.0, 0.0));
        assert_eq!(check_unitary(&scaled, None), Err(ValidationError::NotUnitary(1e-9)));
    }
}
