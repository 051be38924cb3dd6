// src/core/mod.rs

//! Core data structures and types

pub mod constants;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qtoolkit::core::TypeName`
pub use constants::{FRAC_1_SQRT_2, MAX_GATE_DIMENSION, MAX_QUBITS, PI, TOLERANCE};
pub use error::{EntropyError, LinalgError, QasmError, ScriptError, ValidationError};
pub use state::StateVector;
