// src/myqasm/lexer.rs

//! Tokenizer for single MYQASM instruction lines.
//!
//! The lexer only checks surface syntax. Whether an identifier names an
//! existing register or gate is decided by the interpreter.

use crate::core::QasmError;
use std::fmt;

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Initialize,
    Select,
    Concat,
    Tensor,
    Inverse,
    Apply,
    Measure,
}

impl Keyword {
    /// Source spelling of the keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Initialize => "INITIALIZE",
            Keyword::Select => "SELECT",
            Keyword::Concat => "CONCAT",
            Keyword::Tensor => "TENSOR",
            Keyword::Inverse => "INVERSE",
            Keyword::Apply => "APPLY",
            Keyword::Measure => "MEASURE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Separator,
}

/// A lexed token: its kind together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Keyword(Keyword),
    Identifier(String),
    Literal(String),
    Separator(char),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Literal(_) => TokenKind::Literal,
            Token::Separator(_) => TokenKind::Separator,
        }
    }
}

fn syntax(message: impl Into<String>) -> QasmError {
    QasmError::InvalidSyntax(message.into())
}

/// Identifiers are non-empty and made of Unicode alphanumerics, `-`, `_` and `.`.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}

fn identifier(field: &str) -> Result<Token, QasmError> {
    if is_valid_identifier(field) {
        Ok(Token::Identifier(field.to_string()))
    } else {
        Err(syntax(format!("invalid identifier name `{field}`")))
    }
}

fn number(field: &str, message: impl FnOnce() -> String) -> Result<Token, QasmError> {
    if !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Token::Literal(field.to_string()))
    } else {
        Err(syntax(message()))
    }
}

/// Splits `line` on single spaces and tokenizes it.
///
/// # Errors
/// `QasmError::InvalidSyntax` describing the first violation found.
pub fn lex(line: &str) -> Result<Vec<Token>, QasmError> {
    let fields: Vec<&str> = line.split(' ').collect();
    let mut tokens = Vec::with_capacity(6);

    match fields[0] {
        "INITIALIZE" => {
            tokens.push(Token::Keyword(Keyword::Initialize));
            if !matches!(fields.len(), 3 | 4) {
                return Err(syntax("INITIALIZE must be followed by 2 or 3 fields"));
            }
            let name = fields[1];
            tokens.push(identifier(name)?);
            let qubits = fields[2];
            tokens.push(number(qubits, || format!("`INITIALIZE {name}` must be followed by a number"))?);

            if let Some(state) = fields.get(3) {
                let bits = state
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .ok_or_else(|| syntax("register's initial state must be wrapped in `[` and `]`"))?;
                if bits.chars().any(|ch| ch != '0' && ch != '1') {
                    return Err(syntax("each qubit's initial state must be either 0 or 1"));
                }
                // `qubits` is all digits, so a failed parse only means it is too large to match.
                if qubits.parse::<usize>().ok() != Some(bits.len()) {
                    return Err(syntax("register's initial state length must match the number of qubits"));
                }
                tokens.push(Token::Separator('['));
                tokens.push(Token::Literal(bits.to_string()));
                tokens.push(Token::Separator(']'));
            }
        }
        "SELECT" => {
            tokens.push(Token::Keyword(Keyword::Select));
            if fields.len() != 5 {
                return Err(syntax("SELECT must be followed by 4 fields"));
            }
            let (first, second) = (fields[1], fields[2]);
            tokens.push(identifier(first)?);
            tokens.push(identifier(second)?);
            let message = || format!("`SELECT {first} {second}` must be followed by two numbers");
            tokens.push(number(fields[3], message)?);
            tokens.push(number(fields[4], message)?);
        }
        "APPLY" => {
            tokens.push(Token::Keyword(Keyword::Apply));
            if fields.len() != 3 {
                return Err(syntax("APPLY must be followed by 2 fields"));
            }
            tokens.push(identifier(fields[1])?);
            tokens.push(identifier(fields[2])?);
        }
        "MEASURE" => {
            tokens.push(Token::Keyword(Keyword::Measure));
            if fields.len() != 2 {
                return Err(syntax("MEASURE must be followed by 1 field"));
            }
            tokens.push(identifier(fields[1])?);
        }
        name => {
            tokens.push(identifier(name)?);
            if fields.len() < 2 {
                return Err(syntax("cannot have an identifier by itself"));
            }
            let (keyword, operands) = match fields[1] {
                "CONCAT" => (Keyword::Concat, 2),
                "TENSOR" => (Keyword::Tensor, 2),
                "INVERSE" => (Keyword::Inverse, 1),
                other => return Err(syntax(format!("invalid keyword `{other}` following an identifier"))),
            };
            tokens.push(Token::Keyword(keyword));
            if fields.len() != 2 + operands {
                let noun = if operands == 1 { "identifier" } else { "identifiers" };
                return Err(syntax(format!("`{name} {keyword}` must be followed by {operands} {noun}")));
            }
            for field in &fields[2..] {
                tokens.push(identifier(field)?);
            }
        }
    }

    Ok(tokens)
}
