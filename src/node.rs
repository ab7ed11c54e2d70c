//! Expression tree.
//!
//! A [`Node`] owns its children outright; trees are never shared or mutated after
//! construction. Operation nodes are n-ary: a chain of the same connective is stored
//! as one node whose children are combined by a fold (see [`Node::eval`][crate::eval]).

use std::collections::BTreeSet;
use std::fmt;

use crate::symbol::Connective;
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Const(bool),
    Var(Var),
    Not(Box<Node>),
    /// Connective applied to at least two children.
    Op(Connective, Vec<Node>),
}

// Constructors
impl Node {
    pub fn constant(value: bool) -> Node {
        Node::Const(value)
    }

    pub fn var(var: Var) -> Node {
        Node::Var(var)
    }

    pub fn not(child: Node) -> Node {
        Node::Not(Box::new(child))
    }

    /// Builds an aggregate over `children`.
    ///
    /// A single child is returned as is and no children yield `None`, so an
    /// operation node with fewer than two children is never produced.
    pub fn aggregate(connective: Connective, mut children: Vec<Node>) -> Option<Node> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Node::Op(connective, children)),
        }
    }
}

// Getters
impl Node {
    /// Connective of an operation node.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Node::Op(op, _) => Some(*op),
            _ => None,
        }
    }

    /// Children in stored order.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Const(_) | Node::Var(_) => &[],
            Node::Not(child) => std::slice::from_ref(child.as_ref()),
            Node::Op(_, children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Const(_) | Node::Var(_))
    }

    /// Collects every variable of the tree into `vars`.
    pub fn collect_variables(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Node::Const(_) => {}
            Node::Var(var) => {
                vars.insert(*var);
            }
            Node::Not(child) => child.collect_variables(vars),
            Node::Op(_, children) => {
                for child in children {
                    child.collect_variables(vars);
                }
            }
        }
    }

    /// Distinct variables of the tree in ascending order.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars.into_iter().collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Const(value) => write!(f, "{}", u8::from(*value)),
            Node::Var(var) => write!(f, "{}", var),
            Node::Not(child) => write!(f, "~{}", child),
            Node::Op(op, children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op)?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
