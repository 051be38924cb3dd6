// src/myqasm/interpreter.rs

//! Defines the MYQASM interpreter.

use super::gates::GateRegistry;
use super::program::Instruction;
use super::registers::RegisterStore;
use crate::core::{QasmError, ScriptError, StateVector};
use crate::linalg::ComplexMatrix;
use crate::validation::check_unitary;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::num::IntErrorKind;

/// The MYQASM interpreter.
///
/// Owns a gate registry, a register store and the random source used for
/// measurement. Instructions are executed one at a time to completion; an
/// instruction that fails leaves both stores exactly as they were.
///
/// # Examples
///
/// ```
/// use qtoolkit::Interpreter;
///
/// let mut qasm = Interpreter::with_seed(42);
/// qasm.execute("INITIALIZE Q 2").unwrap();
/// qasm.execute("HI TENSOR H I2").unwrap();
/// qasm.execute("APPLY HI Q").unwrap();
/// qasm.execute("APPLY CNOT Q").unwrap();
///
/// // A Bell pair always measures as 00 or 11.
/// let bits = qasm.execute("MEASURE Q").unwrap().unwrap();
/// assert!(bits == vec![0, 0] || bits == vec![1, 1]);
/// ```
#[derive(Debug)]
pub struct Interpreter {
    /// Builtin and user-defined gates.
    gates: GateRegistry,
    /// Named registers.
    registers: RegisterStore,
    /// Source of randomness for MEASURE.
    rng: StdRng,
}

impl Interpreter {
    /// Creates an empty interpreter whose measurements are seeded from the OS.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates an empty interpreter with reproducible measurements.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            gates: GateRegistry::new(),
            registers: RegisterStore::new(),
            rng,
        }
    }

    /// Lexes, parses and executes one instruction line.
    ///
    /// # Returns
    /// * `Ok(Some(bits))` for `MEASURE`, most significant qubit first.
    /// * `Ok(None)` for every other instruction.
    /// * `Err(QasmError)` for the first violated check.
    pub fn execute(&mut self, line: &str) -> Result<Option<Vec<u8>>, QasmError> {
        let instruction = Instruction::parse(line)?;
        self.run(&instruction)
    }

    /// Executes an already parsed instruction.
    pub fn run(&mut self, instruction: &Instruction) -> Result<Option<Vec<u8>>, QasmError> {
        debug!("executing `{}`", instruction);
        match instruction {
            Instruction::Initialize { register, qubits, initial_state } => {
                let qubit_count = parse_qubit_count(qubits)?;
                self.registers
                    .create(register, qubit_count, initial_state.as_deref(), &self.gates)?;
                debug!("register `{}` initialized with {} qubits", register, qubit_count);
                Ok(None)
            }
            Instruction::Concat { name, left, right } => {
                self.require_gate(left)?;
                self.require_gate(right)?;
                self.gates.check_definable(name, &self.registers)?;
                let matrix = self.gates.concat(left, right)?;
                self.define(name, matrix)?;
                Ok(None)
            }
            Instruction::Tensor { name, left, right } => {
                self.require_gate(left)?;
                self.require_gate(right)?;
                self.gates.check_definable(name, &self.registers)?;
                let matrix = self.gates.tensor(left, right)?;
                self.define(name, matrix)?;
                Ok(None)
            }
            Instruction::Inverse { name, gate } => {
                self.require_gate(gate)?;
                self.gates.check_definable(name, &self.registers)?;
                let matrix = self.gates.inverse(gate)?;
                self.define(name, matrix)?;
                Ok(None)
            }
            Instruction::Apply { gate, register } => {
                self.registers.apply(gate, register, &self.gates)?;
                Ok(None)
            }
            Instruction::Measure { register } => {
                let bits = self.registers.measure(register, &mut self.rng)?;
                debug!("register `{}` measured as {:?}", register, bits);
                Ok(Some(bits))
            }
            Instruction::Select { .. } => Err(QasmError::SelectNotSupported),
        }
    }

    /// Runs every line of `source` in order, skipping blank lines and lines
    /// starting with `#`. Stops at the first failing line.
    ///
    /// # Returns
    /// The outcomes of all `MEASURE` instructions, in execution order.
    pub fn run_script(&mut self, source: &str) -> Result<Vec<Vec<u8>>, ScriptError> {
        let mut outcomes = Vec::new();
        self.run_script_with(source, |bits| outcomes.push(bits))?;
        Ok(outcomes)
    }

    /// Like [`run_script`](Self::run_script), but hands each `MEASURE`
    /// outcome to `on_measure` as soon as it is sampled.
    pub fn run_script_with<F>(&mut self, source: &str, mut on_measure: F) -> Result<(), ScriptError>
    where
        F: FnMut(Vec<u8>),
    {
        for (index, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match self.execute(trimmed) {
                Ok(Some(bits)) => on_measure(bits),
                Ok(None) => {}
                Err(source) => return Err(ScriptError { line: index + 1, source }),
            }
        }
        Ok(())
    }

    fn require_gate(&self, name: &str) -> Result<(), QasmError> {
        if self.gates.exists(name) {
            Ok(())
        } else {
            Err(QasmError::GateDoesNotExist(name.to_string()))
        }
    }

    fn define(&mut self, name: &str, matrix: ComplexMatrix) -> Result<(), QasmError> {
        if let Err(err) = check_unitary(&matrix, None) {
            warn!("gate `{}` is not unitary: {}", name, err);
        }
        self.gates.define(name, matrix, &self.registers)
    }

    /// Read view of every register's state vector.
    pub fn registers(&self) -> &HashMap<String, StateVector> {
        self.registers.registers()
    }

    /// Read view of the user-defined gates.
    pub fn user_defined_gates(&self) -> &HashMap<String, ComplexMatrix> {
        self.gates.user_gates()
    }

    /// The gate registry, for resolving builtin gates.
    pub fn gates(&self) -> &GateRegistry {
        &self.gates
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_qubit_count(literal: &str) -> Result<u64, QasmError> {
    match literal.parse::<u64>() {
        Ok(count) => Ok(count),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        Err(_) => Err(QasmError::InvalidSyntax(format!("`{literal}` is not a qubit count"))),
    }
}
