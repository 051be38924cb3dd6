// src/myqasm/mod.rs

//! MYQASM: a line-oriented language for building gates and driving qubit
//! registers.
//!
//! ```text
//! INITIALIZE <id> <qubitCount> [<bitstring>]
//! SELECT <id1> <id2> <n1> <n2>
//! APPLY <gateId> <registerId>
//! MEASURE <registerId>
//! <newGateId> CONCAT <gateId1> <gateId2>
//! <newGateId> TENSOR <gateId1> <gateId2>
//! <newGateId> INVERSE <gateId1>
//! ```

pub mod gates;
pub mod lexer;
pub mod registers;
mod interpreter;
mod program;

pub use gates::GateRegistry;
pub use interpreter::Interpreter;
pub use lexer::{lex, Keyword, Token, TokenKind};
pub use program::Instruction;
pub use registers::RegisterStore;
