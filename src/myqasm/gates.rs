// src/myqasm/gates.rs

//! Builtin gate families and the table of user-defined gates.

use super::registers::RegisterStore;
use crate::core::{FRAC_1_SQRT_2, LinalgError, MAX_GATE_DIMENSION, PI, QasmError};
use crate::linalg::ComplexMatrix;
use log::debug;
use num_complex::Complex64;
use std::collections::HashMap;

/// A builtin gate name, decoded from its spelling.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Builtin<'a> {
    /// `H`
    Hadamard,
    /// `CNOT`
    Cnot,
    /// `I<n>`: digits of `n`, the matrix dimension
    Identity(&'a str),
    /// `R<angle>`: the decimal angle in units of π
    Phase(&'a str),
}

impl<'a> Builtin<'a> {
    fn parse(name: &'a str) -> Option<Self> {
        match name {
            "H" => return Some(Builtin::Hadamard),
            "CNOT" => return Some(Builtin::Cnot),
            _ => {}
        }
        if let Some(digits) = name.strip_prefix('I') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Some(Builtin::Identity(digits));
            }
        } else if let Some(angle) = name.strip_prefix('R') {
            let dots = angle.bytes().filter(|&b| b == b'.').count();
            let all_decimal = angle.bytes().all(|b| b.is_ascii_digit() || b == b'.');
            if all_decimal && dots <= 1 && angle.bytes().any(|b| b.is_ascii_digit()) {
                return Some(Builtin::Phase(angle));
            }
        }
        None
    }

    fn matrix(self, name: &str) -> Result<ComplexMatrix, QasmError> {
        let matrix = match self {
            Builtin::Hadamard => ComplexMatrix::from_real(vec![
                vec![FRAC_1_SQRT_2, FRAC_1_SQRT_2],
                vec![FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
            ])?,
            Builtin::Cnot => ComplexMatrix::from_real(vec![
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 1.0],
                vec![0.0, 0.0, 1.0, 0.0],
            ])?,
            Builtin::Identity(digits) => {
                let n = digits.parse::<usize>().unwrap_or(usize::MAX);
                if n > MAX_GATE_DIMENSION {
                    return Err(QasmError::GateTooLarge { dimension: n, max: MAX_GATE_DIMENSION });
                }
                ComplexMatrix::identity(n).map_err(|err| match err {
                    LinalgError::Empty => QasmError::GateDoesNotExist(name.to_string()),
                    other => other.into(),
                })?
            }
            Builtin::Phase(angle) => {
                let angle: f64 = angle
                    .parse()
                    .map_err(|_| QasmError::GateDoesNotExist(name.to_string()))?;
                let zero = Complex64::new(0.0, 0.0);
                ComplexMatrix::new(vec![
                    vec![Complex64::new(1.0, 0.0), zero],
                    vec![zero, Complex64::from_polar(1.0, PI * angle)],
                ])?
            }
        };
        Ok(matrix)
    }
}

/// Resolves gate names to matrices and stores user-defined gates.
#[derive(Debug, Clone, Default)]
pub struct GateRegistry {
    user_gates: HashMap<String, ComplexMatrix>,
}

impl GateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True for `H`, `CNOT`, `I` followed by digits, and `R` followed by a
    /// decimal with at most one `.`.
    pub fn is_builtin(name: &str) -> bool {
        Builtin::parse(name).is_some()
    }

    pub fn is_user_defined(&self, name: &str) -> bool {
        self.user_gates.contains_key(name)
    }

    /// True if `name` is a builtin name or a user-defined gate.
    pub fn exists(&self, name: &str) -> bool {
        Self::is_builtin(name) || self.is_user_defined(name)
    }

    /// Matrix for `name`.
    ///
    /// # Errors
    /// * `GateDoesNotExist` if `name` is neither builtin nor user-defined (or is `I0`).
    /// * `GateTooLarge` for an identity above the dimension limit.
    pub fn resolve(&self, name: &str) -> Result<ComplexMatrix, QasmError> {
        if let Some(builtin) = Builtin::parse(name) {
            return builtin.matrix(name);
        }
        self.user_gates
            .get(name)
            .cloned()
            .ok_or_else(|| QasmError::GateDoesNotExist(name.to_string()))
    }

    /// Fails if `name` may not be bound to a new gate.
    pub fn check_definable(&self, name: &str, registers: &RegisterStore) -> Result<(), QasmError> {
        if Self::is_builtin(name) {
            return Err(QasmError::RedefineBuiltinGate(name.to_string()));
        }
        if registers.contains(name) {
            return Err(QasmError::RedefineRegister(name.to_string()));
        }
        if self.is_user_defined(name) {
            return Err(QasmError::RedefineUserGate(name.to_string()));
        }
        Ok(())
    }

    /// Binds `name` to `matrix` after [`check_definable`](Self::check_definable).
    pub fn define(&mut self, name: &str, matrix: ComplexMatrix, registers: &RegisterStore) -> Result<(), QasmError> {
        self.check_definable(name, registers)?;
        debug!("defining gate `{}` ({}x{})", name, matrix.rows(), matrix.cols());
        self.user_gates.insert(name.to_string(), matrix);
        Ok(())
    }

    /// `resolve(left) * resolve(right)`.
    ///
    /// # Errors
    /// `ConcatDifferentSizeGates` when the dimensions differ.
    pub fn concat(&self, left: &str, right: &str) -> Result<ComplexMatrix, QasmError> {
        let a = self.resolve(left)?;
        let b = self.resolve(right)?;
        a.multiply(&b).map_err(|err| match err {
            LinalgError::DimensionMismatch { .. } => QasmError::ConcatDifferentSizeGates {
                left: a.rows(),
                right: b.rows(),
            },
            other => other.into(),
        })
    }

    /// `resolve(left) ⊗ resolve(right)`.
    ///
    /// # Errors
    /// `GateTooLarge` if the product would exceed the dimension limit.
    pub fn tensor(&self, left: &str, right: &str) -> Result<ComplexMatrix, QasmError> {
        let a = self.resolve(left)?;
        let b = self.resolve(right)?;
        let dimension = a.rows().saturating_mul(b.rows());
        if dimension > MAX_GATE_DIMENSION {
            return Err(QasmError::GateTooLarge { dimension, max: MAX_GATE_DIMENSION });
        }
        Ok(a.tensor(&b))
    }

    /// Adjoint of `resolve(gate)`; the inverse of a unitary gate.
    pub fn inverse(&self, gate: &str) -> Result<ComplexMatrix, QasmError> {
        Ok(self.resolve(gate)?.adjoint())
    }

    /// Read view of the user-defined gates.
    pub fn user_gates(&self) -> &HashMap<String, ComplexMatrix> {
        &self.user_gates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn builtin_names() {
        for name in ["H", "CNOT", "I1", "I2", "I12", "R1", "R0.5", "R.5", "R3."] {
            assert!(GateRegistry::is_builtin(name), "{name} should be builtin");
        }
        for name in ["h", "I", "R", "R.", "R1.2.3", "Ix", "R-1", "CNOT2", "HH", "U"] {
            assert!(!GateRegistry::is_builtin(name), "{name} should not be builtin");
        }
    }

    #[test]
    fn resolves_identity_of_any_size() {
        let gates = GateRegistry::new();
        let i3 = gates.resolve("I3").unwrap();
        assert_eq!(i3, ComplexMatrix::identity(3).unwrap());
        assert_eq!(gates.resolve("I0"), Err(QasmError::GateDoesNotExist("I0".to_string())));
        assert!(matches!(gates.resolve("I99999"), Err(QasmError::GateTooLarge { .. })));
    }

    #[test]
    fn phase_gate_uses_units_of_pi() {
        let gates = GateRegistry::new();
        let r_half = gates.resolve("R0.5").unwrap();
        let expected = ComplexMatrix::new(vec![
            vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            vec![Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0)],
        ])
        .unwrap();
        assert!(r_half.approx_eq(&expected, TOL));

        let z = gates.resolve("R1").unwrap();
        assert!(z.approx_eq(&ComplexMatrix::from_real(vec![vec![1.0, 0.0], vec![0.0, -1.0]]).unwrap(), TOL));
    }

    #[test]
    fn cnot_swaps_last_two_basis_states() {
        let cnot = GateRegistry::new().resolve("CNOT").unwrap();
        let one = Complex64::new(1.0, 0.0);
        assert_eq!(cnot.get(0, 0), one);
        assert_eq!(cnot.get(1, 1), one);
        assert_eq!(cnot.get(2, 3), one);
        assert_eq!(cnot.get(3, 2), one);
        assert!(cnot.is_unitary());
    }

    #[test]
    fn compositions() {
        let gates = GateRegistry::new();
        assert!(gates.concat("H", "H").unwrap().approx_eq(&ComplexMatrix::identity(2).unwrap(), TOL));
        assert_eq!(
            gates.concat("H", "CNOT"),
            Err(QasmError::ConcatDifferentSizeGates { left: 2, right: 4 })
        );
        assert_eq!(gates.tensor("I2", "CNOT").unwrap().rows(), 8);
        assert!(matches!(gates.tensor("I1024", "H"), Err(QasmError::GateTooLarge { dimension: 2048, .. })));
        assert_eq!(gates.inverse("U"), Err(QasmError::GateDoesNotExist("U".to_string())));
    }

    #[test]
    fn define_rejects_every_collision() {
        let mut gates = GateRegistry::new();
        let mut registers = RegisterStore::new();
        registers.create("REG", 1, None, &gates).unwrap();
        let id = ComplexMatrix::identity(2).unwrap();

        assert_eq!(
            gates.define("R2", id.clone(), &registers),
            Err(QasmError::RedefineBuiltinGate("R2".to_string()))
        );
        assert_eq!(
            gates.define("REG", id.clone(), &registers),
            Err(QasmError::RedefineRegister("REG".to_string()))
        );
        gates.define("A", id.clone(), &registers).unwrap();
        assert_eq!(gates.define("A", id, &registers), Err(QasmError::RedefineUserGate("A".to_string())));
        assert_eq!(gates.user_gates().len(), 1);
    }
}
