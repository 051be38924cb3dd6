// src/myqasm/registers.rs

//! Named qubit registers and their state vectors.

use super::gates::GateRegistry;
use crate::core::{MAX_QUBITS, QasmError, StateVector};
use log::trace;
use rand::Rng;
use std::collections::HashMap;

/// Maps register names to state vectors of length `2^qubits`.
#[derive(Debug, Clone, Default)]
pub struct RegisterStore {
    registers: HashMap<String, StateVector>,
}

impl RegisterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StateVector> {
        self.registers.get(name)
    }

    /// Read view of every register.
    pub fn registers(&self) -> &HashMap<String, StateVector> {
        &self.registers
    }

    /// Creates `name` as the basis state `|initial_bits>` (or `|0...0>`).
    ///
    /// An existing register of the same name is overwritten.
    ///
    /// # Errors
    /// * `RedefineBuiltinGate` / `RedefineUserGate` if `name` is a gate.
    /// * `QubitCountOutOfRange` unless `1 <= qubit_count <= MAX_QUBITS`.
    /// * `InvalidSyntax` if `initial_bits` is not `qubit_count` binary digits.
    pub fn create(
        &mut self,
        name: &str,
        qubit_count: u64,
        initial_bits: Option<&str>,
        gates: &GateRegistry,
    ) -> Result<(), QasmError> {
        if GateRegistry::is_builtin(name) {
            return Err(QasmError::RedefineBuiltinGate(name.to_string()));
        }
        if gates.is_user_defined(name) {
            return Err(QasmError::RedefineUserGate(name.to_string()));
        }
        let qubits = u32::try_from(qubit_count)
            .ok()
            .filter(|q| (1..=MAX_QUBITS).contains(q))
            .ok_or(QasmError::QubitCountOutOfRange { count: qubit_count, max: MAX_QUBITS })?;

        let index = match initial_bits {
            None => 0,
            Some(bits) => {
                if bits.len() != qubits as usize {
                    return Err(QasmError::InvalidSyntax(format!(
                        "initial state `{bits}` does not have {qubits} bits"
                    )));
                }
                usize::from_str_radix(bits, 2)
                    .map_err(|_| QasmError::InvalidSyntax(format!("initial state `{bits}` is not binary")))?
            }
        };

        self.registers.insert(name.to_string(), StateVector::basis(qubits, index));
        Ok(())
    }

    /// Replaces the register's vector with `gate * vector`.
    ///
    /// # Errors
    /// `RegisterDoesNotExist`, `GateDoesNotExist` and
    /// `GateAndRegisterSizeMismatch`, checked in that order.
    pub fn apply(&mut self, gate_name: &str, register_name: &str, gates: &GateRegistry) -> Result<(), QasmError> {
        let state = self
            .registers
            .get_mut(register_name)
            .ok_or_else(|| QasmError::RegisterDoesNotExist(register_name.to_string()))?;
        let gate = gates.resolve(gate_name)?;
        if !gate.is_square() || gate.rows() != state.dim() {
            return Err(QasmError::GateAndRegisterSizeMismatch {
                gate_dimension: gate.rows(),
                register_length: state.dim(),
            });
        }
        let next = gate.apply(state.vector())?;
        state.replace(next);
        Ok(())
    }

    /// Samples a basis state with probability `|a_i|² / Σ|a_j|²`.
    ///
    /// Returns the outcome index as bits, most significant first, one per
    /// qubit. The stored vector is left untouched, so repeated measurements
    /// sample the same distribution.
    ///
    /// # Errors
    /// `RegisterDoesNotExist`, or `ZeroNormRegister` for an all-zero vector.
    pub fn measure<R: Rng>(&self, register_name: &str, rng: &mut R) -> Result<Vec<u8>, QasmError> {
        let state = self
            .registers
            .get(register_name)
            .ok_or_else(|| QasmError::RegisterDoesNotExist(register_name.to_string()))?;

        let total = state.norm_squared();
        if !(total > 0.0) {
            return Err(QasmError::ZeroNormRegister(register_name.to_string()));
        }

        let sample: f64 = rng.random::<f64>() * total; // Sample in [0, total)
        let mut cumulative = 0.0;
        // Floating point residue can leave `sample` just above the final sum;
        // fall back to the last outcome with non-zero weight.
        let mut chosen = state
            .vector()
            .iter()
            .rposition(|a| a.norm_sqr() > 0.0)
            .unwrap_or(0);
        for (index, amplitude) in state.vector().iter().enumerate() {
            let weight = amplitude.norm_sqr();
            if weight == 0.0 {
                continue;
            }
            cumulative += weight;
            if sample < cumulative {
                chosen = index;
                break;
            }
        }
        trace!("measured `{}`: sample {:.6} of {:.6} -> {}", register_name, sample, total, chosen);

        let width = state.qubit_count();
        Ok((0..width).rev().map(|bit| ((chosen >> bit) & 1) as u8).collect())
    }
}
