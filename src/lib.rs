//! # boolcalc: Boolean formula calculator
//!
//! **`boolcalc`** parses textual Boolean formulas over single-letter variables and derives
//! their canonical representations: truth table, conjunctive normal form (CNF), disjunctive
//! normal form (DNF) and the Zhegalkin (XOR/AND) polynomial.
//!
//! ## Syntax
//!
//! | Symbol | Meaning | Precedence |
//! |--------|---------|------------|
//! | `~` | negation (prefix) | tightest |
//! | `&` | AND | |
//! | `+` | XOR | |
//! | `V` | OR | |
//! | `>` `<` `=` `\|` `^` | implication, reverse implication, equivalence, NAND, NOR | loosest |
//!
//! Variables are `a`..`z`, constants are `0` and `1`, parentheses group, spaces are ignored.
//! Operators of the same precedence group left to right.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolcalc::expr::Expression;
//!
//! let f = Expression::parse("a V b & ~c").unwrap();
//!
//! // Truth table: row i assigns variable j the bit j of i.
//! let table = f.truth_table().unwrap();
//! assert_eq!(table.len(), 8);
//!
//! // Canonical forms are expressions too, and compute the same function.
//! let cnf = f.cnf().unwrap();
//! assert_eq!(cnf.truth_table().unwrap().values(), table.values());
//!
//! println!("{}", table);
//! println!("CNF: {}", cnf);
//! println!("DNF: {}", f.dnf().unwrap());
//! println!("Zhegalkin: {}", f.zhegalkin().unwrap());
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: tokenization ([`lexer`]) and operator-precedence tree construction.
//! - **[`node`]** and **[`eval`]**: the expression tree and its evaluation, with unbound
//!   variables supplied by a [`ValueSource`][crate::eval::ValueSource].
//! - **[`table`]** and **[`normal`]**: truth tables and the canonical forms built from them.
//! - **[`expr`]**: the [`Expression`][crate::expr::Expression] facade caching all of the above.

pub mod error;
pub mod eval;
pub mod expr;
pub mod lexer;
pub mod node;
pub mod normal;
pub mod parser;
pub mod symbol;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use expr::Expression;
