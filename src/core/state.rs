// src/core/state.rs

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// The amplitudes of a named qubit register.
///
/// Length is always a power of two (`2^qubit_count`). Normalization is not
/// enforced: measurement weighs outcomes by their relative squared moduli, so
/// any non-zero vector can be sampled.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Creates the basis state `|index>` over `qubit_count` qubits.
    ///
    /// Callers guarantee `index < 2^qubit_count` and that the shift does not
    /// overflow; the register store bounds `qubit_count` beforehand.
    pub(crate) fn basis(qubit_count: u32, index: usize) -> Self {
        let dim = 1usize << qubit_count;
        let mut amplitudes = vec![Complex64::zero(); dim];
        amplitudes[index] = Complex64::one();
        Self { amplitudes }
    }

    /// Wraps an arbitrary amplitude vector. Used by tests and by callers that
    /// already hold a power-of-two length vector.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Replaces the amplitudes after a gate application.
    pub(crate) fn replace(&mut self, amplitudes: Vec<Complex64>) {
        self.amplitudes = amplitudes;
    }

    /// Number of amplitudes (basis states).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// log2 of the dimension.
    pub fn qubit_count(&self) -> u32 {
        self.amplitudes.len().trailing_zeros()
    }

    /// Sum of squared moduli of all amplitudes.
    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
