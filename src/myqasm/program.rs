// src/myqasm/program.rs

//! The MYQASM instruction set.

use super::lexer::{lex, Keyword, Token};
use crate::core::QasmError;
use std::fmt;

/// A single, syntactically valid MYQASM instruction.
///
/// Built from a lexed token stream by [`Instruction::from_tokens`]; the
/// interpreter matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `INITIALIZE <register> <qubits> [<bits>]`
    ///
    /// Creates (or overwrites) `register` as a `qubits`-qubit basis state.
    Initialize {
        /// Name of the register to create.
        register: String,
        /// Declared qubit count, kept as written; range checks happen at execution.
        qubits: String,
        /// Optional initial basis state, most significant qubit first.
        initial_state: Option<String>,
    },
    /// `SELECT <target> <source> <start> <length>`
    ///
    /// Reserved. Lexed and parsed but rejected at execution.
    Select {
        /// Name the selection would be bound to.
        target: String,
        /// Register the selection would be taken from.
        source: String,
        /// First qubit of the selection.
        start: String,
        /// Number of qubits in the selection.
        length: String,
    },
    /// `<name> CONCAT <left> <right>`: `name = left * right`.
    Concat {
        /// The gate to define.
        name: String,
        /// Left factor.
        left: String,
        /// Right factor.
        right: String,
    },
    /// `<name> TENSOR <left> <right>`: `name = left ⊗ right`.
    Tensor {
        /// The gate to define.
        name: String,
        /// Left factor.
        left: String,
        /// Right factor.
        right: String,
    },
    /// `<name> INVERSE <gate>`: `name = gate^dagger`.
    Inverse {
        /// The gate to define.
        name: String,
        /// The gate being inverted.
        gate: String,
    },
    /// `APPLY <gate> <register>`
    Apply {
        /// The gate to apply.
        gate: String,
        /// The register it acts on.
        register: String,
    },
    /// `MEASURE <register>`
    Measure {
        /// The register to sample.
        register: String,
    },
}

fn text(token: Option<&Token>) -> Result<String, QasmError> {
    match token {
        Some(Token::Identifier(s)) | Some(Token::Literal(s)) => Ok(s.clone()),
        other => Err(QasmError::InvalidSyntax(format!("unexpected token {other:?}"))),
    }
}

impl Instruction {
    /// Lexes `line` and folds the tokens into an instruction.
    pub fn parse(line: &str) -> Result<Self, QasmError> {
        Self::from_tokens(&lex(line)?)
    }

    /// Folds a token stream as produced by [`lex`] into an instruction.
    ///
    /// # Errors
    /// `QasmError::InvalidSyntax` if the tokens are not in one of the shapes
    /// the lexer emits.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, QasmError> {
        let mut it = tokens.iter();
        let instruction = match (tokens.first(), tokens.get(1)) {
            (Some(Token::Keyword(keyword)), _) => {
                it.next();
                match keyword {
                    Keyword::Initialize => {
                        let register = text(it.next())?;
                        let qubits = text(it.next())?;
                        let initial_state = match it.next() {
                            None => None,
                            Some(Token::Separator('[')) => {
                                let bits = text(it.next())?;
                                match it.next() {
                                    Some(Token::Separator(']')) => Some(bits),
                                    other => {
                                        return Err(QasmError::InvalidSyntax(format!(
                                            "expected `]`, found {other:?}"
                                        )));
                                    }
                                }
                            }
                            Some(other) => {
                                return Err(QasmError::InvalidSyntax(format!("expected `[`, found {other:?}")));
                            }
                        };
                        Instruction::Initialize { register, qubits, initial_state }
                    }
                    Keyword::Select => Instruction::Select {
                        target: text(it.next())?,
                        source: text(it.next())?,
                        start: text(it.next())?,
                        length: text(it.next())?,
                    },
                    Keyword::Apply => Instruction::Apply {
                        gate: text(it.next())?,
                        register: text(it.next())?,
                    },
                    Keyword::Measure => Instruction::Measure { register: text(it.next())? },
                    Keyword::Concat | Keyword::Tensor | Keyword::Inverse => {
                        return Err(QasmError::InvalidSyntax(format!(
                            "{keyword} must follow the name of the gate being defined"
                        )));
                    }
                }
            }
            (Some(Token::Identifier(name)), Some(Token::Keyword(keyword))) => {
                it.next();
                it.next();
                let name = name.clone();
                match keyword {
                    Keyword::Concat => Instruction::Concat {
                        name,
                        left: text(it.next())?,
                        right: text(it.next())?,
                    },
                    Keyword::Tensor => Instruction::Tensor {
                        name,
                        left: text(it.next())?,
                        right: text(it.next())?,
                    },
                    Keyword::Inverse => Instruction::Inverse { name, gate: text(it.next())? },
                    other => {
                        return Err(QasmError::InvalidSyntax(format!(
                            "invalid keyword `{other}` following an identifier"
                        )));
                    }
                }
            }
            _ => return Err(QasmError::InvalidSyntax("empty or malformed token stream".to_string())),
        };

        if let Some(extra) = it.next() {
            return Err(QasmError::InvalidSyntax(format!("unexpected trailing token {extra:?}")));
        }
        Ok(instruction)
    }

    /// The keyword that selects this instruction's semantics.
    pub fn keyword(&self) -> Keyword {
        match self {
            Instruction::Initialize { .. } => Keyword::Initialize,
            Instruction::Select { .. } => Keyword::Select,
            Instruction::Concat { .. } => Keyword::Concat,
            Instruction::Tensor { .. } => Keyword::Tensor,
            Instruction::Inverse { .. } => Keyword::Inverse,
            Instruction::Apply { .. } => Keyword::Apply,
            Instruction::Measure { .. } => Keyword::Measure,
        }
    }
}

/// Renders the canonical source line, which lexes back to the same tokens.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Initialize { register, qubits, initial_state } => {
                write!(f, "INITIALIZE {register} {qubits}")?;
                if let Some(bits) = initial_state {
                    write!(f, " [{bits}]")?;
                }
                Ok(())
            }
            Instruction::Select { target, source, start, length } => {
                write!(f, "SELECT {target} {source} {start} {length}")
            }
            Instruction::Concat { name, left, right } => write!(f, "{name} CONCAT {left} {right}"),
            Instruction::Tensor { name, left, right } => write!(f, "{name} TENSOR {left} {right}"),
            Instruction::Inverse { name, gate } => write!(f, "{name} INVERSE {gate}"),
            Instruction::Apply { gate, register } => write!(f, "APPLY {gate} {register}"),
            Instruction::Measure { register } => write!(f, "MEASURE {register}"),
        }
    }
}
