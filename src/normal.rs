//! Canonical forms derived from a truth table: CNF, DNF and the Zhegalkin polynomial.
//!
//! Each builder returns a fresh tree. Aggregates with a single term collapse to that
//! term, and empty aggregates become the neutral constant.
//!
//! Clauses and minterms list the variables in descending order, and the terms of
//! each form are collected last row first. Zhegalkin monomials list the variables in
//! ascending order.

use log::debug;

use crate::node::Node;
use crate::symbol::Connective;
use crate::table::TruthTable;
use crate::types::Var;

/// Literal of `var` that is true exactly when the variable equals `value`.
fn literal(var: Var, value: bool) -> Node {
    if value {
        Node::var(var)
    } else {
        Node::not(Node::var(var))
    }
}

/// Conjunction of maxterms, one per false row.
///
/// The clause for row `i` is false exactly at assignment `i`.
pub fn cnf(table: &TruthTable) -> Node {
    let vars = table.variables();
    let clauses: Vec<Node> = table
        .rows()
        .filter(|row| !row.value)
        .map(|row| {
            let literals = (0..vars.len()).rev().map(|j| literal(vars[j], !row.assignment[j])).collect();
            Node::aggregate(Connective::Or, literals).unwrap_or(Node::constant(false))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    debug!("cnf: {} clauses over {} variables", clauses.len(), vars.len());
    Node::aggregate(Connective::And, clauses).unwrap_or(Node::constant(true))
}

/// Disjunction of minterms, one per true row.
///
/// The minterm for row `i` is true exactly at assignment `i`.
pub fn dnf(table: &TruthTable) -> Node {
    let vars = table.variables();
    let minterms: Vec<Node> = table
        .rows()
        .filter(|row| row.value)
        .map(|row| {
            let literals = (0..vars.len()).rev().map(|j| literal(vars[j], row.assignment[j])).collect();
            Node::aggregate(Connective::And, literals).unwrap_or(Node::constant(true))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    debug!("dnf: {} minterms over {} variables", minterms.len(), vars.len());
    Node::aggregate(Connective::Or, minterms).unwrap_or(Node::constant(false))
}

/// Zhegalkin coefficients of a function given by its truth table values.
///
/// Applies the finite difference along each dimension of the Boolean cube in turn.
/// Afterwards index `m` holds the coefficient of the monomial made of the variables
/// whose bits are set in `m`.
///
/// # Panics
///
/// Panics if `values.len()` is not a power of two.
pub fn zhegalkin_coefficients(values: &[bool]) -> Vec<bool> {
    assert!(values.len().is_power_of_two(), "Truth table size must be a power of two");
    let mut coefficients = values.to_vec();
    let k = values.len().trailing_zeros();
    for i in 0..k {
        let step = 1usize << i;
        for j in 0..coefficients.len() {
            if j & step != 0 {
                coefficients[j] ^= coefficients[j - step];
            }
        }
    }
    coefficients
}

/// XOR-sum of the monomials whose coefficient is set.
pub fn zhegalkin(variables: &[Var], coefficients: &[bool]) -> Node {
    let monomials: Vec<Node> = coefficients
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, &c)| c)
        .map(|(m, _)| {
            let factors = (0..variables.len())
                .filter(|&j| (m >> j) & 1 == 1)
                .map(|j| Node::var(variables[j]))
                .collect();
            Node::aggregate(Connective::And, factors).unwrap_or(Node::constant(true))
        })
        .collect();
    debug!("zhegalkin: {} monomials over {} variables", monomials.len(), variables.len());
    Node::aggregate(Connective::Xor, monomials).unwrap_or(Node::constant(false))
}
