//! Evaluation of formulas under variable assignments.

use std::fmt::{Display, Formatter};

use crate::ast::{Expr, Idx};
use crate::error::EvalError;
use crate::formula::Formula;
use crate::types::Var;

/// Truth values for the variables of a formula.
///
/// Each slot is tri-state: `None` (unset), `Some(false)` or `Some(true)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    /// An assignment over `num_vars` variables with every slot unset.
    pub fn unset(num_vars: usize) -> Self {
        Self {
            values: vec![None; num_vars],
        }
    }

    /// The `index`-th assignment in enumeration order: bit `j` of `index`
    /// (least significant first) is the value of variable `j`.
    pub fn from_index(num_vars: usize, index: u64) -> Self {
        let mut assignment = Self::unset(num_vars);
        assignment.load_index(index);
        assignment
    }

    /// Overwrite every slot from the bits of `index`.
    pub fn load_index(&mut self, index: u64) {
        for (j, value) in self.values.iter_mut().enumerate() {
            *value = Some((index >> j) & 1 == 1);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of `var`; slots beyond the end are unset.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.get(var.index()).copied().flatten()
    }

    /// Set `var`, growing the assignment with unset slots if needed.
    pub fn set(&mut self, var: Var, value: bool) {
        let i = var.index();
        if i >= self.values.len() {
            self.values.resize(i + 1, None);
        }
        self.values[i] = Some(value);
    }

    pub fn clear(&mut self, var: Var) {
        if let Some(slot) = self.values.get_mut(var.index()) {
            *slot = None;
        }
    }

    /// Whether every variable has a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for value in self.values.iter() {
            let c = match value {
                None => '?',
                Some(false) => '0',
                Some(true) => '1',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Formula {
    /// An unset assignment sized for this formula.
    pub fn assignment(&self) -> Assignment {
        Assignment::unset(self.num_vars())
    }

    /// Set the truth value of an atom node.
    ///
    /// Only atoms carry a value; any compound node yields
    /// [`EvalError::InvalidMutation`] and leaves `assignment` untouched.
    pub fn assign(&self, node: Idx, value: bool, assignment: &mut Assignment) -> Result<(), EvalError> {
        match *self.node(node) {
            Expr::Atom(v) => {
                assignment.set(v, value);
                Ok(())
            }
            _ => Err(EvalError::InvalidMutation { node }),
        }
    }

    /// Truth value of the sub-expression at `node`.
    pub fn eval(&self, node: Idx, assignment: &Assignment) -> Result<bool, EvalError> {
        match *self.node(node) {
            Expr::Atom(v) => assignment.get(v).ok_or_else(|| EvalError::UndeterminedValue {
                name: self.registry().name(v),
            }),
            Expr::Not(a) => Ok(!self.eval(a, assignment)?),
            Expr::Binary(op, a, b) => {
                let lhs = self.eval(a, assignment)?;
                let rhs = self.eval(b, assignment)?;
                Ok(op.apply(lhs, rhs))
            }
        }
    }

    /// Truth value of the whole formula.
    pub fn eval_root(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        self.eval(self.root(), assignment)
    }

    /// Truth values of all nodes at once, indexed like the arena.
    ///
    /// Each node is computed exactly once, children before parents.
    pub fn eval_all(&self, assignment: &Assignment) -> Result<Vec<bool>, EvalError> {
        self.arena().try_collapse(|expr| match expr {
            Expr::Atom(v) => assignment.get(v).ok_or_else(|| EvalError::UndeterminedValue {
                name: self.registry().name(v),
            }),
            Expr::Not(&a) => Ok(!a),
            Expr::Binary(op, &a, &b) => Ok(op.apply(a, b)),
        })
    }
}
