//! Error handling logic

use thiserror::Error;

/// Failures raised by the dense complex linear algebra in [`crate::linalg`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A matrix was built from no rows, or from rows of length zero.
    #[error("a matrix needs at least one row and one column")]
    Empty,

    /// A matrix was built from rows of different lengths.
    #[error("matrix rows must all have the same length")]
    Ragged,

    /// The operation is only defined for square matrices.
    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// The inner dimensions of a product (or the shapes of a sum) disagree.
    #[error("cannot combine a {left_rows}x{left_cols} matrix with a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        /// Rows of the left operand
        left_rows: usize,
        /// Columns of the left operand
        left_cols: usize,
        /// Rows of the right operand
        right_rows: usize,
        /// Columns of the right operand
        right_cols: usize,
    },

    /// Two vectors that must agree in length do not.
    #[error("vector lengths differ ({left} and {right})")]
    LengthMismatch {
        /// Length of the first vector
        left: usize,
        /// Length of the second vector
        right: usize,
    },

    /// An index points past the end of a vector or matrix.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the indexed dimension
        len: usize,
    },

    /// The vector has zero norm and cannot be normalized or divided by.
    #[error("vector has zero norm")]
    ZeroNorm,

    /// The matrix was required to be hermitian.
    #[error("matrix is not hermitian")]
    NotHermitian,

    /// Eigen-decomposition is only available for 2x2 or diagonal matrices.
    #[error("eigen-decomposition is only supported for 2x2 or diagonal matrices")]
    UnsupportedEigenProblem,
}

/// Failures raised while lexing or executing a MYQASM instruction.
///
/// Every variant aborts the whole instruction; the interpreter's stores are
/// untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QasmError {
    /// Lexical or grammatical violation: bad identifier, bad literal,
    /// wrong field count or malformed bracket expression.
    #[error("invalid MYQASM syntax: {0}")]
    InvalidSyntax(String),

    /// CONCAT, TENSOR, INVERSE or APPLY referenced an unresolvable gate.
    #[error("gate `{0}` does not exist")]
    GateDoesNotExist(String),

    /// APPLY or MEASURE referenced an unknown register.
    #[error("register `{0}` does not exist")]
    RegisterDoesNotExist(String),

    /// The name is reserved by a builtin gate pattern.
    #[error("`{0}` is a builtin gate and cannot be redefined")]
    RedefineBuiltinGate(String),

    /// A gate definition reused the name of a register.
    #[error("`{0}` is already a register")]
    RedefineRegister(String),

    /// A register or gate definition reused the name of a user-defined gate.
    #[error("`{0}` is already a user-defined gate")]
    RedefineUserGate(String),

    /// CONCAT operands cannot be multiplied.
    #[error("cannot CONCAT gates of different sizes ({left} and {right})")]
    ConcatDifferentSizeGates {
        /// Dimension of the left gate
        left: usize,
        /// Dimension of the right gate
        right: usize,
    },

    /// APPLY gate dimension differs from the register length.
    #[error("gate of dimension {gate_dimension} cannot act on a register of length {register_length}")]
    GateAndRegisterSizeMismatch {
        /// Dimension of the applied gate
        gate_dimension: usize,
        /// Length of the register's state vector
        register_length: usize,
    },

    /// SELECT is lexed but has no execution semantics yet.
    #[error("SELECT is not supported yet")]
    SelectNotSupported,

    /// INITIALIZE asked for zero qubits or more than the interpreter allows.
    #[error("qubit count {count} is out of range (1..={max})")]
    QubitCountOutOfRange {
        /// Requested qubit count
        count: u64,
        /// Largest accepted qubit count
        max: u32,
    },

    /// A gate would exceed the largest matrix the interpreter builds.
    #[error("gate of dimension {dimension} exceeds the maximum of {max}")]
    GateTooLarge {
        /// Dimension the gate would have
        dimension: usize,
        /// Largest accepted dimension
        max: usize,
    },

    /// Every amplitude of the register is zero, so no outcome can be sampled.
    #[error("register `{0}` has zero norm and cannot be measured")]
    ZeroNormRegister(String),

    /// Any other numeric failure reported by the linear algebra layer.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

/// Failures raised by [`crate::entropy`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntropyError {
    /// The probabilities of a distribution must add up to one.
    #[error("probabilities sum to {0}, expected 1")]
    ProbabilitiesDoNotSumToOne(f64),

    /// Each symbol may appear once per distribution.
    #[error("symbol `{0}` appears more than once")]
    RepeatedSymbol(String),

    /// A qubit in a quantum distribution is not a unit vector.
    #[error("qubit for symbol `{0}` is not normalized")]
    QubitNotNormalized(String),

    /// Numeric failure while building or decomposing the density operator.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

/// Failures raised by the checks in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Sum of squared amplitudes is not one within tolerance.
    #[error("state vector normalization failed: sum(|c_i|^2) = {norm_squared} (deviation > {tolerance})")]
    NotNormalized {
        /// Observed squared norm
        norm_squared: f64,
        /// Tolerance that was exceeded
        tolerance: f64,
    },

    /// `U * U^dagger` differs from the identity.
    #[error("matrix is not unitary within tolerance {0}")]
    NotUnitary(f64),

    /// The matrix differs from its adjoint.
    #[error("matrix is not hermitian within tolerance {0}")]
    NotHermitian(f64),
}

/// A failure while running a multi-line MYQASM script, tagged with the
/// 1-based line number of the offending instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    /// 1-based line number within the script
    pub line: usize,
    /// The instruction's failure
    pub source: QasmError,
}
