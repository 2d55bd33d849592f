//! Type-safe wrappers for formula variables.
//!
//! A formula over lowercase letters has at most [`MAX_VARS`] distinct
//! variables. Each one gets a [`Var`] index in order of first occurrence, and
//! that index is what both the expression tree and the per-row
//! [`Assignment`][crate::eval::Assignment] are keyed by.

use std::fmt;

/// Maximum number of distinct variables (one per lowercase letter).
pub const MAX_VARS: usize = 26;

/// A variable identifier (0-indexed, in order of first occurrence).
///
/// # Invariants
///
/// - `index < MAX_VARS`
/// - Indices are dense: a formula with `n` variables uses exactly `0..n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_VARS`.
    pub fn new(index: usize) -> Self {
        assert!(index < MAX_VARS, "Variable index must be < {}", MAX_VARS);
        Var(index as u32)
    }

    /// Returns the variable index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Check whether `ch` may name a variable.
pub fn is_var_name(ch: char) -> bool {
    ch.is_ascii_lowercase()
}
