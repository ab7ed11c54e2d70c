//! Evaluation of expression trees.
//!
//! Variables missing from the environment are resolved through a [`ValueSource`],
//! asked at most once per variable per evaluation: the answer is recorded in the
//! environment and reused.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use log::trace;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::types::Var;

/// Variable assignment used during evaluation.
pub type Env = HashMap<Var, bool>;

/// Supplier of values for unbound variables.
pub trait ValueSource {
    fn value_of(&mut self, var: Var) -> std::result::Result<bool, String>;
}

impl<F> ValueSource for F
where
    F: FnMut(Var) -> bool,
{
    fn value_of(&mut self, var: Var) -> std::result::Result<bool, String> {
        Ok(self(var))
    }
}

/// Answers every question with the same value.
#[derive(Debug, Copy, Clone)]
pub struct Constant(pub bool);

impl ValueSource for Constant {
    fn value_of(&mut self, _var: Var) -> std::result::Result<bool, String> {
        Ok(self.0)
    }
}

/// Looks variables up in a fixed map, falling back to `default`.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    pub values: HashMap<Var, bool>,
    pub default: bool,
}

impl MapSource {
    pub fn new(values: HashMap<Var, bool>) -> Self {
        Self { values, default: false }
    }
}

impl ValueSource for MapSource {
    fn value_of(&mut self, var: Var) -> std::result::Result<bool, String> {
        Ok(self.values.get(&var).copied().unwrap_or(self.default))
    }
}

/// Never expects to be asked; every question is an error.
#[derive(Debug, Copy, Clone, Default)]
pub struct Unbound;

impl ValueSource for Unbound {
    fn value_of(&mut self, var: Var) -> std::result::Result<bool, String> {
        Err(format!("variable {} is not bound", var))
    }
}

/// Asks for each value interactively: writes `Variable <id>: ` to `output` and reads
/// one answer line (`0`, `1`, `true` or `false`) from `input`.
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ValueSource for PromptSource<R, W> {
    fn value_of(&mut self, var: Var) -> std::result::Result<bool, String> {
        write!(self.output, "Variable {}: \t", var).map_err(|e| format!("I/O error: {}", e))?;
        self.output.flush().map_err(|e| format!("I/O error: {}", e))?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| format!("I/O error: {}", e))?;
        if read == 0 {
            return Err(format!("no value given for variable {}", var));
        }
        match line.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            other => Err(format!("invalid value {:?} for variable {}", other, var)),
        }
    }
}

impl Node {
    /// Evaluates the tree under `env`, asking `source` for unbound variables.
    ///
    /// Children of an operation node are folded from the last one backwards:
    /// the accumulator starts at the last child and each earlier child `c`
    /// updates it to `f(c, acc)`.
    pub fn eval<S>(&self, env: &mut Env, source: &mut S) -> Result<bool>
    where
        S: ValueSource + ?Sized,
    {
        match self {
            Node::Const(value) => Ok(*value),
            Node::Var(var) => {
                if let Some(&value) = env.get(var) {
                    return Ok(value);
                }
                trace!("asking value source for {}", var);
                let value = source.value_of(*var).map_err(Error::Source)?;
                env.insert(*var, value);
                Ok(value)
            }
            Node::Not(child) => Ok(!child.eval(env, source)?),
            Node::Op(op, children) => {
                let Some((last, rest)) = children.split_last().filter(|_| children.len() >= 2) else {
                    return Err(Error::Arity {
                        connective: *op,
                        children: children.len(),
                    });
                };
                let mut acc = last.eval(env, source)?;
                for child in rest.iter().rev() {
                    acc = op.apply(child.eval(env, source)?, acc);
                }
                Ok(acc)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_log::test;

    use super::*;
    use crate::symbol::Connective;

    fn v(id: char) -> Node {
        Node::var(Var::new(id))
    }

    fn env(pairs: &[(char, bool)]) -> Env {
        pairs.iter().map(|&(id, value)| (Var::new(id), value)).collect()
    }

    #[test]
    fn test_eval_const_and_not() {
        let mut e = Env::new();
        assert!(Node::constant(true).eval(&mut e, &mut Unbound).unwrap());
        assert!(Node::not(Node::constant(false)).eval(&mut e, &mut Unbound).unwrap());
    }

    #[test]
    fn test_eval_bound_variable() {
        let mut e = env(&[('a', true)]);
        assert!(v('a').eval(&mut e, &mut Unbound).unwrap());
        assert!(!Node::not(v('a')).eval(&mut e, &mut Unbound).unwrap());
    }

    #[test]
    fn test_fold_order() {
        // Stored [b, a]: acc = a, then f(b, a).
        let node = Node::Op(Connective::Impl, vec![v('b'), v('a')]);
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut e = env(&[('a', a), ('b', b)]);
            assert_eq!(node.eval(&mut e, &mut Unbound).unwrap(), !b || a);
        }
    }

    #[test]
    fn test_fold_three_children() {
        // f(c, f(b, a)) with f = RevImpl.
        let node = Node::Op(Connective::RevImpl, vec![v('c'), v('b'), v('a')]);
        let mut e = env(&[('a', true), ('b', false), ('c', false)]);
        // f(b, a) = b | !a = false; f(c, false) = c | true = true
        assert!(node.eval(&mut e, &mut Unbound).unwrap());
    }

    #[test]
    fn test_source_asked_once_per_variable() {
        let node = Node::Op(Connective::And, vec![v('x'), v('y'), v('x')]);
        let mut asked = Vec::new();
        let mut source = |var: Var| {
            asked.push(var.id());
            true
        };
        let mut e = Env::new();
        assert!(node.eval(&mut e, &mut source).unwrap());
        assert_eq!(asked, vec!['x', 'y']);
        assert_eq!(e.get(&Var::new('x')), Some(&true));
    }

    #[test]
    fn test_source_not_asked_when_bound() {
        let node = Node::Op(Connective::Or, vec![v('p'), v('q')]);
        let mut e = env(&[('p', false), ('q', true)]);
        assert!(node.eval(&mut e, &mut Unbound).unwrap());
    }

    #[test]
    fn test_unbound_is_error() {
        let mut e = Env::new();
        assert!(matches!(v('a').eval(&mut e, &mut Unbound), Err(Error::Source(_))));
    }

    #[test]
    fn test_arity_error() {
        let node = Node::Op(Connective::Nand, vec![v('a')]);
        let mut e = env(&[('a', true)]);
        assert_eq!(
            node.eval(&mut e, &mut Unbound),
            Err(Error::Arity {
                connective: Connective::Nand,
                children: 1
            })
        );
    }

    #[test]
    fn test_map_and_constant_sources() {
        let node = Node::Op(Connective::Xor, vec![v('a'), v('b')]);
        let mut source = MapSource::new(env(&[('a', true)]));
        assert!(node.eval(&mut Env::new(), &mut source).unwrap());
        assert!(!node.eval(&mut Env::new(), &mut Constant(true)).unwrap());
    }

    #[test]
    fn test_prompt_source() {
        let node = Node::Op(Connective::Eq, vec![v('a'), v('b')]);
        let mut output = Vec::new();
        let mut source = PromptSource::new(Cursor::new("1\nfalse\n"), &mut output);
        let mut e = Env::new();
        assert!(!node.eval(&mut e, &mut source).unwrap());
        drop(source);
        let prompts = String::from_utf8(output).unwrap();
        assert_eq!(prompts, "Variable b: \tVariable a: \t");
    }

    #[test]
    fn test_prompt_source_rejects_garbage() {
        let mut source = PromptSource::new(Cursor::new("maybe\n"), std::io::sink());
        assert!(source.value_of(Var::new('a')).is_err());
        let mut empty = PromptSource::new(Cursor::new(""), std::io::sink());
        assert!(empty.value_of(Var::new('a')).is_err());
    }
}
