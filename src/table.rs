//! Truth tables.
//!
//! For `k` variables the table has `2^k` rows. Row `i` assigns variable `j` (in
//! ascending variable order) the value of bit `j` of `i`, so the first variable
//! flips fastest.
//!
//! # Examples
//!
//! ```
//! use boolcalc::parser::parse;
//! use boolcalc::table::TruthTable;
//!
//! let node = parse("a & b").unwrap();
//! let table = TruthTable::build(&node).unwrap();
//! assert_eq!(table.values(), &[false, false, false, true]);
//! println!("{}", table);
//! ```

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::eval::{Env, Unbound};
use crate::node::Node;
use crate::types::Var;

/// Configuration options for rendering a truth table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Extra width added to every column (default: 2)
    pub padding: usize,
    /// Cell text for true (default: "1")
    pub true_symbol: &'static str,
    /// Cell text for false (default: "0")
    pub false_symbol: &'static str,
    /// Whether to print the header line (default: true)
    pub show_header: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            padding: 2,
            true_symbol: "1",
            false_symbol: "0",
            show_header: true,
        }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub index: usize,
    /// Values of the variables, in table variable order.
    pub assignment: Vec<bool>,
    pub value: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    title: String,
    variables: Vec<Var>,
    values: Vec<bool>,
}

impl TruthTable {
    /// Enumerates all assignments of the variables of `node`.
    pub fn build(node: &Node) -> Result<Self> {
        Self::build_over(node, node.variables())
    }

    /// Enumerates all assignments of `variables`, which must cover every variable of `node`.
    pub fn build_over(node: &Node, variables: Vec<Var>) -> Result<Self> {
        let size = 1usize << variables.len();
        debug!("truth table of {} over {} variables ({} rows)", node, variables.len(), size);
        let mut env = Env::with_capacity(variables.len());
        let mut values = Vec::with_capacity(size);
        for i in 0..size {
            for (j, var) in variables.iter().enumerate() {
                env.insert(*var, (i >> j) & 1 == 1);
            }
            values.push(node.eval(&mut env, &mut Unbound)?);
        }
        Ok(Self {
            title: node.to_string(),
            variables,
            values,
        })
    }

    /// Builds a table from precomputed values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != 2^variables.len()`.
    pub fn from_values(title: impl Into<String>, variables: Vec<Var>, values: Vec<bool>) -> Self {
        assert_eq!(
            values.len(),
            1 << variables.len(),
            "Expected {} values for {} variables",
            1usize << variables.len(),
            variables.len()
        );
        Self {
            title: title.into(),
            variables,
            values,
        }
    }
}

impl TruthTable {
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }
    pub fn values(&self) -> &[bool] {
        &self.values
    }
    pub fn into_values(self) -> Vec<bool> {
        self.values
    }

    /// Number of rows, `2^k`.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_at(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    /// Variable values of row `index`.
    pub fn assignment(&self, index: usize) -> Vec<bool> {
        (0..self.variables.len()).map(|j| (index >> j) & 1 == 1).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.values.iter().enumerate().map(move |(index, &value)| Row {
            index,
            assignment: self.assignment(index),
            value,
        })
    }

    pub fn is_tautology(&self) -> bool {
        self.values.iter().all(|&v| v)
    }
    pub fn is_contradiction(&self) -> bool {
        self.values.iter().all(|&v| !v)
    }
}

impl TruthTable {
    /// Renders the table with the default configuration.
    pub fn render(&self) -> std::result::Result<String, fmt::Error> {
        self.render_with_config(&TableConfig::default())
    }

    /// Renders the table: a header with the variable names and the formula, then one
    /// line per row. All columns are right-aligned.
    pub fn render_with_config(&self, config: &TableConfig) -> std::result::Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_table(&mut out, config)?;
        Ok(out)
    }

    fn write_table<W: fmt::Write>(&self, out: &mut W, config: &TableConfig) -> fmt::Result {
        let cell = config.true_symbol.len().max(config.false_symbol.len());
        let var_width = cell.max(1) + config.padding;
        let value_width = cell.max(self.title.len()) + config.padding;
        let symbol = |value: bool| if value { config.true_symbol } else { config.false_symbol };

        if config.show_header {
            for var in &self.variables {
                write!(out, "{:>width$}", var.id(), width = var_width)?;
            }
            writeln!(out, "{:>width$}", self.title, width = value_width)?;
        }
        for row in self.rows() {
            for &value in &row.assignment {
                write!(out, "{:>width$}", symbol(value), width = var_width)?;
            }
            writeln!(out, "{:>width$}", symbol(row.value), width = value_width)?;
        }
        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, &TableConfig::default())
    }
}
