// src/lib.rs

//! `qtoolkit` - A small symbolic toolkit for quantum information
//!
//! The centrepiece is an interpreter for MYQASM, a line-oriented quantum
//! assembly language: registers are initialized to basis states, gates are
//! composed by matrix product, tensor product and adjoint, applied to
//! registers and sampled by measurement. Around it sit the dense complex
//! linear algebra it runs on, quantum observables, and Shannon and von
//! Neumann entropy.

pub mod core;
pub mod entropy;
pub mod linalg;
pub mod myqasm;
pub mod observables;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{LinalgError, QasmError, ScriptError, StateVector};
pub use linalg::ComplexMatrix;
pub use myqasm::{lex, Instruction, Interpreter, Keyword, Token};
pub use validation::{check_hermitian, check_normalization, check_unitary};

// Example 1: Building an X gate out of H and a phase flip
// H * R1 * H maps |0> to |1>, so every measurement reads 1.
/// ```
/// use qtoolkit::{Interpreter, QasmError};
///
/// fn main() -> Result<(), QasmError> {
///     let mut qasm = Interpreter::with_seed(7);
///     qasm.execute("INITIALIZE Q 1")?;
///     qasm.execute("HZ CONCAT H R1")?;
///     qasm.execute("X CONCAT HZ H")?;
///     qasm.execute("APPLY X Q")?;
///
///     for _ in 0..10 {
///         assert_eq!(qasm.execute("MEASURE Q")?, Some(vec![1]));
///     }
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Running a script
// Blank lines and `#` comments are skipped; failures carry the line number.
/// ```
/// use qtoolkit::{Interpreter, QasmError};
///
/// let script = "
/// ## two qubits in |10>
/// INITIALIZE R 2 [10]
/// MEASURE R
/// APPLY CNOT R
/// MEASURE R
/// APPLY H R
/// ";
///
/// let mut qasm = Interpreter::with_seed(1);
/// let err = qasm.run_script(script).unwrap_err();
/// assert_eq!(err.line, 7);
/// assert_eq!(
///     err.source,
///     QasmError::GateAndRegisterSizeMismatch { gate_dimension: 2, register_length: 4 }
/// );
/// // Lines before the failure have already run.
/// assert_eq!(qasm.registers()["R"].vector()[3].re, 1.0);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
