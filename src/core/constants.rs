//! Numeric constants and limits shared across the toolkit.

/// Tolerance used when comparing floating point amplitudes and matrix entries.
pub const TOLERANCE: f64 = 1e-9;

/// Largest register size, in qubits, that `INITIALIZE` accepts.
/// A 20 qubit register holds 2^20 amplitudes (16 MiB).
pub const MAX_QUBITS: u32 = 20;

/// Largest gate dimension the interpreter will materialize as a dense matrix.
pub const MAX_GATE_DIMENSION: usize = 1 << 10;

/// Used for phase angles (`e^(iπ·angle)`) of the builtin `R` gates.
pub const PI: f64 = std::f64::consts::PI;

/// Entry magnitude of the Hadamard gate.
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
