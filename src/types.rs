//! Type-safe wrapper for formula variables.
//!
//! Variables in a formula are single lowercase ASCII letters. The [`Var`] newtype
//! guarantees this at construction, so the rest of the crate never has to re-check.
use std::fmt;

/// A variable identifier (`a`..=`z`).
///
/// Variables are ordered by their letter, which fixes the canonical variable
/// order used by truth tables and normal forms.
///
/// # Invariants
///
/// - The wrapped character is always in the range `'a'..='z'`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(char);

impl Var {
    /// Creates a new variable with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a lowercase ASCII letter.
    pub fn new(id: char) -> Self {
        assert!(id.is_ascii_lowercase(), "Variable must be a lowercase letter, got {:?}", id);
        Var(id)
    }

    /// Creates a variable if `id` is a valid identifier.
    pub fn try_new(id: char) -> Option<Self> {
        if id.is_ascii_lowercase() {
            Some(Var(id))
        } else {
            None
        }
    }

    /// Returns the identifier character.
    pub fn id(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

impl TryFrom<char> for Var {
    type Error = char;

    fn try_from(id: char) -> Result<Self, Self::Error> {
        Var::try_new(id).ok_or(id)
    }
}
