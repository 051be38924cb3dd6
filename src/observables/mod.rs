// src/observables/mod.rs

//! Probabilities, transition amplitudes and observable statistics for
//! state vectors (kets).

use crate::core::LinalgError;
use crate::linalg::{vector, ComplexMatrix};
use num_complex::Complex64;

/// Probability of finding `ket` in basis state `index`: `|c_i|² / ‖ket‖²`.
pub fn state_probability(ket: &[Complex64], index: usize) -> Result<f64, LinalgError> {
    let amplitude = ket
        .get(index)
        .ok_or(LinalgError::IndexOutOfRange { index, len: ket.len() })?;
    let norm_squared = vector::norm_squared(ket);
    if norm_squared == 0.0 {
        return Err(LinalgError::ZeroNorm);
    }
    Ok(amplitude.norm_sqr() / norm_squared)
}

/// Normalized transition amplitude `<to|from> / (‖from‖ ‖to‖)`.
pub fn transition_amplitude(from: &[Complex64], to: &[Complex64]) -> Result<Complex64, LinalgError> {
    let inner = vector::inner_product(to, from)?;
    let norms = vector::norm(from) * vector::norm(to);
    if norms == 0.0 {
        return Err(LinalgError::ZeroNorm);
    }
    Ok(inner / norms)
}

fn check_observable(matrix: &ComplexMatrix, ket: &[Complex64]) -> Result<(), LinalgError> {
    if !matrix.is_hermitian() {
        return Err(LinalgError::NotHermitian);
    }
    if matrix.rows() != ket.len() {
        return Err(LinalgError::LengthMismatch { left: matrix.rows(), right: ket.len() });
    }
    Ok(())
}

/// Expected value `<ψ|Ω|ψ>` of the hermitian observable `matrix`.
pub fn observable_mean(matrix: &ComplexMatrix, ket: &[Complex64]) -> Result<Complex64, LinalgError> {
    check_observable(matrix, ket)?;
    let omega_ket = matrix.apply(ket)?;
    vector::inner_product(ket, &omega_ket)
}

/// Variance `<ψ|(Ω - μI)²|ψ>` where `μ` is [`observable_mean`].
pub fn observable_variance(matrix: &ComplexMatrix, ket: &[Complex64]) -> Result<Complex64, LinalgError> {
    let mean = observable_mean(matrix, ket)?;
    let shift = ComplexMatrix::identity(ket.len())?.scale(-mean);
    let delta = matrix.add(&shift)?;
    let delta_squared = delta.multiply(&delta)?;
    observable_mean(&delta_squared, ket)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn probability_uses_relative_weight() {
        let ket = [c(-3.0, -1.0), c(0.0, -2.0), c(0.0, 1.0), c(2.0, 0.0)];
        let p = state_probability(&ket, 2).unwrap();
        assert!((p - 1.0 / 19.0).abs() < 1e-12);
        assert_eq!(
            state_probability(&ket, 4),
            Err(LinalgError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn transition_between_orthogonal_and_equal_states() {
        let zero = [c(1.0, 0.0), c(0.0, 0.0)];
        let one = [c(0.0, 0.0), c(1.0, 0.0)];
        assert_eq!(transition_amplitude(&zero, &one).unwrap(), c(0.0, 0.0));
        let scaled = [c(0.0, 2.0), c(0.0, 0.0)];
        let amp = transition_amplitude(&zero, &scaled).unwrap();
        assert!((amp.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_and_variance_of_spin_observable() {
        // Ω = [[1, -i], [i, 2]], ψ = (√2/2)[1, i]
        let omega = ComplexMatrix::new(vec![vec![c(1.0, 0.0), c(0.0, -1.0)], vec![c(0.0, 1.0), c(2.0, 0.0)]])
            .unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let ket = [c(h, 0.0), c(0.0, h)];
        let mean = observable_mean(&omega, &ket).unwrap();
        assert!((mean - c(2.5, 0.0)).norm() < 1e-9);
        let variance = observable_variance(&omega, &ket).unwrap();
        assert!((variance - c(0.25, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn mean_requires_hermitian() {
        let m = ComplexMatrix::from_real(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(
            observable_mean(&m, &[c(1.0, 0.0), c(0.0, 0.0)]),
            Err(LinalgError::NotHermitian)
        );
    }
}
