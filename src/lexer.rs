//! Tokenizer and validator.
//!
//! [`Lexer`] walks the input character by character, skipping whitespace, and classifies
//! each character into a [`Symbol`]. It also validates the sequence with a tiny state
//! machine, so everything it yields is guaranteed to be a well-formed formula:
//!
//! - `expect_operand` starts `true`;
//! - a variable or constant requires it and clears it;
//! - a binary operator or `)` requires it to be clear; an operator sets it again;
//! - `(` and `~` require it and leave it set;
//! - brackets are counted, the depth never goes negative and must end at zero;
//! - at the end of input `expect_operand` must be clear.
//!
//! After the first error the lexer is exhausted.

use std::str::Chars;

use crate::error::{Result, Unexpected};
use crate::symbol::Symbol;

pub struct Lexer<'a> {
    chars: Chars<'a>,
    expect_operand: bool,
    depth: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            expect_operand: true,
            depth: 0,
            done: false,
        }
    }

    fn accept(&mut self, symbol: Symbol) -> std::result::Result<(), Unexpected> {
        match symbol {
            Symbol::Variable(_) | Symbol::Const(_) => {
                if !self.expect_operand {
                    return Err(symbol.into());
                }
                self.expect_operand = false;
            }
            Symbol::Binary(_) => {
                if self.expect_operand {
                    return Err(symbol.into());
                }
                self.expect_operand = true;
            }
            Symbol::RightBracket => {
                if self.expect_operand || self.depth == 0 {
                    return Err(symbol.into());
                }
                self.depth -= 1;
            }
            Symbol::LeftBracket | Symbol::Neg => {
                if !self.expect_operand {
                    return Err(symbol.into());
                }
                if symbol == Symbol::LeftBracket {
                    self.depth += 1;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> std::result::Result<(), Unexpected> {
        if self.expect_operand || self.depth != 0 {
            Err(Unexpected::EndOfLine)
        } else {
            Ok(())
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = loop {
            let Some(c) = self.chars.next() else {
                self.done = true;
                return self.finish().err().map(|what| Err(what.into()));
            };
            if c.is_whitespace() {
                continue;
            }
            break match Symbol::classify(c) {
                Some(symbol) => self.accept(symbol).map(|()| symbol),
                None => Err(Unexpected::Unknown(c)),
            };
        };
        if step.is_err() {
            self.done = true;
        }
        Some(step.map_err(Into::into))
    }
}

/// Tokenizes and validates the whole input.
pub fn tokenize(input: &str) -> Result<Vec<Symbol>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::Error;
    use crate::symbol::Connective;
    use crate::types::Var;

    fn syntax(input: &str) -> Unexpected {
        match tokenize(input) {
            Err(Error::Syntax(what)) => what,
            other => panic!("expected syntax error for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_tokenize_simple() {
        let tokens = tokenize(" a &~( b V 1 ) ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Symbol::Variable(Var::new('a')),
                Symbol::Binary(Connective::And),
                Symbol::Neg,
                Symbol::LeftBracket,
                Symbol::Variable(Var::new('b')),
                Symbol::Binary(Connective::Or),
                Symbol::Const(true),
                Symbol::RightBracket,
            ]
        );
    }

    #[test]
    fn test_tokenize_constant() {
        assert_eq!(tokenize("0").unwrap(), vec![Symbol::Const(false)]);
    }

    #[test]
    fn test_two_operands_in_a_row() {
        assert_eq!(syntax("a b"), Unexpected::Variable);
        assert_eq!(syntax("a 1"), Unexpected::Constant);
        assert_eq!(syntax("(a)b"), Unexpected::Variable);
    }

    #[test]
    fn test_operator_without_left_operand() {
        assert_eq!(syntax("&a"), Unexpected::BinaryOperation('&'));
        assert_eq!(syntax("(>a)"), Unexpected::BinaryOperation('>'));
        assert_eq!(syntax("a & & b"), Unexpected::BinaryOperation('&'));
    }

    #[test]
    fn test_brackets() {
        assert_eq!(syntax("(a"), Unexpected::EndOfLine);
        assert_eq!(syntax("a)"), Unexpected::RightBracket);
        assert_eq!(syntax(")("), Unexpected::RightBracket);
        assert_eq!(syntax("()"), Unexpected::RightBracket);
        assert_eq!(syntax("a("), Unexpected::LeftBracket);
    }

    #[test]
    fn test_negation_placement() {
        assert_eq!(syntax("a~b"), Unexpected::Negation);
        assert!(tokenize("~~a").is_ok());
        assert_eq!(syntax("a & ~"), Unexpected::EndOfLine);
    }

    #[test]
    fn test_end_of_line() {
        assert_eq!(syntax(""), Unexpected::EndOfLine);
        assert_eq!(syntax("   "), Unexpected::EndOfLine);
        assert_eq!(syntax("a &"), Unexpected::EndOfLine);
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(syntax("a ! b"), Unexpected::Unknown('!'));
        assert_eq!(syntax("A"), Unexpected::Unknown('A'));
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new("a b c");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }
}
