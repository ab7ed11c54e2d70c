//! Error type shared by parsing and evaluation.

use std::fmt;

use crate::symbol::{Connective, Symbol};

/// What the tokenizer found where it did not expect it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Unexpected {
    Variable,
    Constant,
    BinaryOperation(char),
    Negation,
    LeftBracket,
    RightBracket,
    EndOfLine,
    /// A character outside the grammar.
    Unknown(char),
}

impl From<Symbol> for Unexpected {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Binary(op) => Unexpected::BinaryOperation(op.sign()),
            Symbol::Neg => Unexpected::Negation,
            Symbol::LeftBracket => Unexpected::LeftBracket,
            Symbol::RightBracket => Unexpected::RightBracket,
            Symbol::Variable(_) => Unexpected::Variable,
            Symbol::Const(_) => Unexpected::Constant,
        }
    }
}

impl fmt::Display for Unexpected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unexpected::Variable => write!(f, "variable"),
            Unexpected::Constant => write!(f, "constant"),
            Unexpected::BinaryOperation(c) => write!(f, "binary operation '{}'", c),
            Unexpected::Negation => write!(f, "'~'"),
            Unexpected::LeftBracket => write!(f, "'('"),
            Unexpected::RightBracket => write!(f, "')'"),
            Unexpected::EndOfLine => write!(f, "end of line"),
            Unexpected::Unknown(c) => write!(f, "symbol {:?}", c),
        }
    }
}

/// Error type for parsing and evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Input rejected by the tokenizer.
    Syntax(Unexpected),
    /// Parser reduction without enough operands.
    Structural(&'static str),
    /// Operation node with fewer than two children.
    Arity { connective: Connective, children: usize },
    /// Failure reported by a value source.
    Source(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(what) => write!(f, "Syntax error: unexpected {}", what),
            Error::Structural(msg) => write!(f, "Structural error: {}", msg),
            Error::Arity { connective, children } => write!(
                f,
                "Arity error: operation '{}' needs at least 2 children, got {}",
                connective, children
            ),
            Error::Source(msg) => write!(f, "Value source error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Unexpected> for Error {
    fn from(what: Unexpected) -> Self {
        Error::Syntax(what)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
