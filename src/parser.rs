//! Operator-precedence parser.
//!
//! The validated symbol stream from [`Lexer`] is consumed with the classic two-stack
//! (shunting-yard) algorithm: operands go to the node stack, operators and brackets
//! to the symbol stack. A binary operator first reduces every stacked operator that
//! binds at least as tightly, so operators of one precedence tier group left to right.
//!
//! Reducing a binary operator whose left operand is already an operation node with
//! the same connective does not nest: the right operand is prepended to the existing
//! node's children. Hence `a & b & c` becomes one node with children `[c, b, a]`.
//!
//! A `~` directly on top of another pending `~` cancels it.

use log::debug;

use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::node::Node;
use crate::symbol::{Connective, Symbol};

/// Parses `input` into an expression tree.
pub fn parse(input: &str) -> Result<Node> {
    let mut parser = Parser::default();
    for symbol in Lexer::new(input) {
        parser.push(symbol?)?;
    }
    parser.finish()
}

#[derive(Debug, Default)]
struct Parser {
    nodes: Vec<Node>,
    symbols: Vec<Symbol>,
}

impl Parser {
    fn push(&mut self, symbol: Symbol) -> Result<()> {
        match symbol {
            Symbol::Const(value) => self.nodes.push(Node::constant(value)),
            Symbol::Variable(var) => self.nodes.push(Node::var(var)),
            Symbol::LeftBracket => self.symbols.push(symbol),
            Symbol::RightBracket => loop {
                match self.symbols.last() {
                    Some(Symbol::LeftBracket) => {
                        self.symbols.pop();
                        break;
                    }
                    Some(_) => self.reduce()?,
                    None => return Err(Error::Structural("unmatched closing bracket")),
                }
            },
            Symbol::Neg => {
                if self.symbols.last() == Some(&Symbol::Neg) {
                    debug!("double negation cancelled");
                    self.symbols.pop();
                } else {
                    self.symbols.push(symbol);
                }
            }
            Symbol::Binary(op) => {
                while let Some(top) = self.symbols.last() {
                    if top.priority() < op.priority() {
                        break;
                    }
                    self.reduce()?;
                }
                self.symbols.push(symbol);
            }
        }
        Ok(())
    }

    fn pop_node(&mut self) -> Result<Node> {
        self.nodes.pop().ok_or(Error::Structural("not enough operands"))
    }

    /// Pops one operator and applies it to the top of the node stack.
    fn reduce(&mut self) -> Result<()> {
        let symbol = self.symbols.pop().ok_or(Error::Structural("no operator to reduce"))?;
        let node = match symbol {
            Symbol::Neg => Node::not(self.pop_node()?),
            Symbol::Binary(op) => {
                let b = self.pop_node()?;
                let a = self.pop_node()?;
                combine(op, a, b)
            }
            _ => return Err(Error::Structural("unbalanced brackets")),
        };
        debug!("reduce {:?} => {}", symbol, node);
        self.nodes.push(node);
        Ok(())
    }

    fn finish(mut self) -> Result<Node> {
        while !self.symbols.is_empty() {
            self.reduce()?;
        }
        let root = self.pop_node()?;
        if !self.nodes.is_empty() {
            return Err(Error::Structural("more than one operand left"));
        }
        Ok(root)
    }
}

/// Applies `op` to the left operand `a` and the right operand `b`.
fn combine(op: Connective, a: Node, b: Node) -> Node {
    match a {
        Node::Op(a_op, mut children) if a_op == op => {
            debug!("flatten into {}-ary '{}'", children.len() + 1, op);
            children.insert(0, b);
            Node::Op(op, children)
        }
        a => Node::Op(op, vec![b, a]),
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::Unexpected;
    use crate::types::Var;

    fn v(id: char) -> Node {
        Node::var(Var::new(id))
    }

    fn parsed(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn test_parse_leaves() {
        assert_eq!(parse("a").unwrap(), v('a'));
        assert_eq!(parse(" 1 ").unwrap(), Node::constant(true));
        assert_eq!(parse("((0))").unwrap(), Node::constant(false));
    }

    #[test]
    fn test_parse_binary_stored_order() {
        assert_eq!(
            parse("a > b").unwrap(),
            Node::Op(Connective::Impl, vec![v('b'), v('a')])
        );
        assert_eq!(parsed("a > b"), "(b > a)");
    }

    #[test]
    fn test_flattening() {
        let node = parse("a & b & c").unwrap();
        assert_eq!(node, Node::Op(Connective::And, vec![v('c'), v('b'), v('a')]));
        assert_eq!(node.to_string(), "(c & b & a)");
    }

    #[test]
    fn test_flattening_left_bracketed() {
        assert_eq!(parsed("(a V b) V c"), "(c V b V a)");
    }

    #[test]
    fn test_no_flattening_on_right() {
        assert_eq!(parsed("a & (b & c)"), "((c & b) & a)");
    }

    #[test]
    fn test_no_flattening_across_connectives() {
        assert_eq!(parsed("a & b V c"), "(c V (b & a))");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parsed("a V b & c"), "((c & b) V a)");
        assert_eq!(parsed("a + b & c"), "((c & b) + a)");
        assert_eq!(parsed("a V b + c"), "((c + b) V a)");
        assert_eq!(parsed("a > b V c"), "((c V b) > a)");
        assert_eq!(parsed("~a & b"), "(b & ~a)");
    }

    #[test]
    fn test_lowest_tier_is_left_to_right() {
        // ((a > b) = c)
        assert_eq!(parsed("a > b = c"), "(c = (b > a))");
        // ((a | b) ^ c)
        assert_eq!(parsed("a | b ^ c"), "(c ^ (b | a))");
        assert_eq!(parsed("a < b < c"), "(c < b < a)");
    }

    #[test]
    fn test_brackets_override() {
        assert_eq!(parsed("(a V b) & c"), "(c & (b V a))");
        assert_eq!(parsed("~(a & b)"), "~(b & a)");
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(parse("~~a").unwrap(), v('a'));
        assert_eq!(parse("~~~a").unwrap(), Node::not(v('a')));
        assert_eq!(parse("~ ~ ~ ~a").unwrap(), v('a'));
        // Brackets hide the pending negation.
        assert_eq!(parse("~(~a)").unwrap(), Node::not(Node::not(v('a'))));
    }

    #[test]
    fn test_negation_in_chain() {
        assert_eq!(parsed("a & ~b & c"), "(c & ~b & a)");
    }

    #[test]
    fn test_syntax_errors() {
        for input in ["a b", "&a", "(a", "a)", "", "a &", ")(", "a ~ b", "a $ b"] {
            assert!(
                matches!(parse(input), Err(Error::Syntax(_))),
                "expected syntax error for {:?}",
                input
            );
        }
        assert_eq!(parse("a &"), Err(Error::Syntax(Unexpected::EndOfLine)));
    }

    #[test]
    fn test_structural_errors() {
        let mut parser = Parser::default();
        parser.push(Symbol::Binary(Connective::And)).unwrap();
        assert!(matches!(parser.finish(), Err(Error::Structural(_))));

        let mut parser = Parser::default();
        parser.push(Symbol::Variable(Var::new('a'))).unwrap();
        parser.push(Symbol::Variable(Var::new('b'))).unwrap();
        assert!(matches!(parser.finish(), Err(Error::Structural(_))));

        let parser = Parser::default();
        assert!(matches!(parser.finish(), Err(Error::Structural(_))));

        let mut parser = Parser::default();
        assert!(matches!(parser.push(Symbol::RightBracket), Err(Error::Structural(_))));
    }
}
