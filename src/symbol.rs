//! Operator table: connectives, their truth functions, display signs and precedence.

use std::fmt;

use crate::types::Var;

/// One of the eight binary connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    And,
    Or,
    Impl,
    RevImpl,
    Xor,
    Eq,
    Nand,
    Nor,
}

impl Connective {
    pub const ALL: [Connective; 8] = [
        Connective::And,
        Connective::Or,
        Connective::Impl,
        Connective::RevImpl,
        Connective::Xor,
        Connective::Eq,
        Connective::Nand,
        Connective::Nor,
    ];

    /// Looks up the connective written as `c`.
    pub fn from_sign(c: char) -> Option<Self> {
        Connective::ALL.into_iter().find(|op| op.sign() == c)
    }

    /// Sign used both in the input grammar and in rendering.
    pub const fn sign(self) -> char {
        match self {
            Connective::And => '&',
            Connective::Or => 'V',
            Connective::Impl => '>',
            Connective::RevImpl => '<',
            Connective::Xor => '+',
            Connective::Eq => '=',
            Connective::Nand => '|',
            Connective::Nor => '^',
        }
    }

    /// Precedence rank, higher binds tighter.
    pub const fn priority(self) -> u8 {
        match self {
            Connective::And => 4,
            Connective::Xor => 3,
            Connective::Or => 2,
            Connective::Impl | Connective::RevImpl | Connective::Eq | Connective::Nand | Connective::Nor => 1,
        }
    }

    /// Truth function `f(p, q)`.
    pub const fn apply(self, p: bool, q: bool) -> bool {
        match self {
            Connective::And => p && q,
            Connective::Or => p || q,
            Connective::Impl => !p || q,
            Connective::RevImpl => p || !q,
            Connective::Xor => p ^ q,
            Connective::Eq => p == q,
            Connective::Nand => !(p && q),
            Connective::Nor => !(p || q),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// Classified input symbol.
///
/// Symbols drive the tokenizer's state machine and live on the parser's operator stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Symbol {
    Binary(Connective),
    Neg,
    LeftBracket,
    RightBracket,
    Variable(Var),
    Const(bool),
}

impl Symbol {
    pub const NEG_SIGN: char = '~';

    /// Classifies a single non-whitespace character.
    pub fn classify(c: char) -> Option<Self> {
        match c {
            '(' => Some(Symbol::LeftBracket),
            ')' => Some(Symbol::RightBracket),
            Symbol::NEG_SIGN => Some(Symbol::Neg),
            '0' => Some(Symbol::Const(false)),
            '1' => Some(Symbol::Const(true)),
            c if c.is_ascii_lowercase() => Some(Symbol::Variable(Var::new(c))),
            c => Connective::from_sign(c).map(Symbol::Binary),
        }
    }

    /// Precedence rank on the operator stack. Brackets rank lowest, so no binary
    /// operator ever reduces past them.
    pub const fn priority(self) -> u8 {
        match self {
            Symbol::Neg => 5,
            Symbol::Binary(op) => op.priority(),
            Symbol::LeftBracket | Symbol::RightBracket => 0,
            Symbol::Variable(_) | Symbol::Const(_) => u8::MAX,
        }
    }
}
