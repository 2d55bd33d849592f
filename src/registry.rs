//! Variable registry: one shared atom per variable name.

use log::debug;

use crate::ast::{Expr, ExprArena, Idx};
use crate::types::{is_var_name, Var, MAX_VARS};

/// Maps variable names to [`Var`] indices and their atom nodes.
///
/// Variables are numbered in order of first registration, which during
/// parsing is the order of first occurrence in the formula, left to right.
#[derive(Debug, Default, Clone)]
pub struct VarRegistry {
    /// Names in registration order; `names[v.index()]` is the name of `v`.
    names: Vec<char>,
    /// Atom node of each variable, parallel to `names`.
    atoms: Vec<Idx>,
    /// Direct lookup by letter: `slots[ch - 'a']`.
    slots: [Option<Var>; MAX_VARS],
}

impl VarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(name: char) -> usize {
        assert!(is_var_name(name), "'{}' is not a variable name", name);
        (name as u8 - b'a') as usize
    }

    /// Look up an existing variable.
    pub fn get(&self, name: char) -> Option<Var> {
        if !is_var_name(name) {
            return None;
        }
        self.slots[Self::slot(name)]
    }

    /// Return the atom node for `name`, allocating it in `arena` on first use.
    ///
    /// Every call with the same name returns the same node.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a lowercase ASCII letter.
    pub fn atom(&mut self, name: char, arena: &mut ExprArena) -> Idx {
        let slot = Self::slot(name);
        if let Some(var) = self.slots[slot] {
            return self.atoms[var.index()];
        }
        let var = Var::new(self.names.len());
        let idx = arena.push(Expr::Atom(var));
        debug!("registry: new variable '{}' = {} at {}", name, var, idx);
        self.slots[slot] = Some(var);
        self.names.push(name);
        self.atoms.push(idx);
        idx
    }

    /// Name of a registered variable.
    pub fn name(&self, var: Var) -> char {
        self.names[var.index()]
    }

    /// Atom node of a registered variable.
    pub fn atom_of(&self, var: Var) -> Idx {
        self.atoms[var.index()]
    }

    /// Number of registered variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Variables in registration order.
    pub fn vars(&self) -> impl Iterator<Item = Var> {
        (0..self.names.len()).map(Var::new)
    }

    /// Names in registration order.
    pub fn names(&self) -> &[char] {
        &self.names
    }
}
