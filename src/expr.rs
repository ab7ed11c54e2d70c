//! Parsed formula with lazily derived artifacts.
//!
//! An [`Expression`] wraps an immutable tree and computes, on first request and at most
//! once, its canonical string, its sorted variable list, its truth table and its
//! Zhegalkin coefficients. Clones share the tree and copy whatever was already computed.
//!
//! ```
//! use boolcalc::expr::Expression;
//!
//! let f: Expression = "a & b".parse().unwrap();
//! assert_eq!(f.to_string(), "(b & a)");
//! assert_eq!(f.dnf().unwrap().to_string(), "(b & a)");
//! assert_eq!(f.zhegalkin().unwrap().to_string(), "(a & b)");
//! ```

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::eval::{Env, ValueSource};
use crate::node::Node;
use crate::normal;
use crate::parser::parse;
use crate::table::TruthTable;
use crate::types::Var;

#[derive(Debug, Clone)]
pub struct Expression {
    root: Rc<Node>,
    string: OnceCell<String>,
    variables: OnceCell<Vec<Var>>,
    truth_table: OnceCell<TruthTable>,
    zhegalkin: OnceCell<Vec<bool>>,
}

impl Expression {
    /// Parses a formula.
    pub fn parse(input: &str) -> Result<Self> {
        parse(input).map(Self::from_node)
    }

    /// Wraps an already built tree.
    pub fn from_node(root: Node) -> Self {
        Self {
            root: Rc::new(root),
            string: OnceCell::new(),
            variables: OnceCell::new(),
            truth_table: OnceCell::new(),
            zhegalkin: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Canonical string: fully parenthesized, children in stored order.
    pub fn as_str(&self) -> &str {
        self.string.get_or_init(|| {
            debug!("rendering expression");
            self.root.to_string()
        })
    }

    /// Distinct variables in ascending order.
    pub fn variables(&self) -> &[Var] {
        self.variables.get_or_init(|| self.root.variables())
    }

    pub fn truth_table(&self) -> Result<&TruthTable> {
        if let Some(table) = self.truth_table.get() {
            return Ok(table);
        }
        debug!("computing truth table of {}", self.as_str());
        let table = TruthTable::build_over(&self.root, self.variables().to_vec())?;
        Ok(self.truth_table.get_or_init(|| table))
    }

    /// Zhegalkin coefficients, indexed by monomial mask over [`variables`][Self::variables].
    pub fn zhegalkin_coefficients(&self) -> Result<&[bool]> {
        if let Some(coefficients) = self.zhegalkin.get() {
            return Ok(coefficients);
        }
        let coefficients = normal::zhegalkin_coefficients(self.truth_table()?.values());
        debug!("computed {} zhegalkin coefficients of {}", coefficients.len(), self.as_str());
        Ok(self.zhegalkin.get_or_init(|| coefficients))
    }

    pub fn cnf(&self) -> Result<Expression> {
        Ok(Self::from_node(normal::cnf(self.truth_table()?)))
    }

    pub fn dnf(&self) -> Result<Expression> {
        Ok(Self::from_node(normal::dnf(self.truth_table()?)))
    }

    pub fn zhegalkin(&self) -> Result<Expression> {
        let coefficients = self.zhegalkin_coefficients()?;
        Ok(Self::from_node(normal::zhegalkin(self.variables(), coefficients)))
    }

    /// Evaluates under `env`; unbound variables are asked from `source` once each and
    /// recorded into `env`.
    pub fn evaluate<S>(&self, env: &mut Env, source: &mut S) -> Result<bool>
    where
        S: ValueSource + ?Sized,
    {
        self.root.eval(env, source)
    }

    /// Evaluates with every variable coming from `source`.
    pub fn evaluate_with<S>(&self, source: &mut S) -> Result<bool>
    where
        S: ValueSource + ?Sized,
    {
        self.evaluate(&mut Env::new(), source)
    }
}

impl From<Node> for Expression {
    fn from(root: Node) -> Self {
        Self::from_node(root)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
