//! Arena-allocated expression trees.
//!
//! Nodes live in an [`ExprArena`] and refer to their children by [`Idx`].
//! A child is always pushed before its parent, so the arena is topologically
//! sorted by construction and any bottom-up computation is a single forward
//! pass (see [`ExprArena::collapse`]).
//!
//! Several parents may point at the same child. The tree builder relies on
//! this to give every occurrence of a variable one shared atom node.

use std::fmt::{Display, Formatter};

use crate::types::Var;

/// Binary connectives, in order of decreasing precedence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    And,
    Or,
    Implies,
    Iff,
}

impl BinOp {
    /// Binding strength; higher binds tighter. Negation binds tighter than all of these.
    pub const fn precedence(self) -> u8 {
        match self {
            BinOp::And => 4,
            BinOp::Or => 3,
            BinOp::Implies => 2,
            BinOp::Iff => 1,
        }
    }

    /// Whether a chain like `a op b op c` groups as `(a op b) op c`.
    ///
    /// The arrows group to the left; `&` and `|` group to the right, so
    /// `a&b&c` is `a&(b&c)`.
    pub const fn is_left_assoc(self) -> bool {
        matches!(self, BinOp::Implies | BinOp::Iff)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Implies => "->",
            BinOp::Iff => "<->",
        }
    }

    /// Truth function of the connective.
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinOp::And => lhs && rhs,
            BinOp::Or => lhs || rhs,
            BinOp::Implies => !lhs || rhs,
            BinOp::Iff => lhs == rhs,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Index of a node inside an [`ExprArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Idx(usize);

impl Idx {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for Idx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node, generic over how children are referenced.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr<I = Idx> {
    /// Leaf bound to a variable.
    Atom(Var),
    /// Negation.
    Not(I),
    /// Binary connective with ordered operands.
    Binary(BinOp, I, I),
}

impl<A> Expr<A> {
    #[inline(always)]
    pub fn fmap_ref<B, F>(&self, mut f: F) -> Expr<B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Expr::Atom(v) => Expr::Atom(*v),
            Expr::Not(a) => Expr::Not(f(a)),
            Expr::Binary(op, a, b) => Expr::Binary(*op, f(a), f(b)),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Expr::Atom(_) => 0,
            Expr::Not(_) => 1,
            Expr::Binary(..) => 2,
        }
    }
}

impl<A: Copy> Expr<A> {
    /// Children in operand order (antecedent before consequent for implication).
    pub fn children(&self) -> impl DoubleEndedIterator<Item = A> {
        let (first, second) = match *self {
            Expr::Atom(_) => (None, None),
            Expr::Not(a) => (Some(a), None),
            Expr::Binary(_, a, b) => (Some(a), Some(b)),
        };
        first.into_iter().chain(second)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ExprArena {
    /// Topology sorted expressions, by construction.
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its index.
    ///
    /// # Panics
    ///
    /// Panics if a child index does not refer to an already allocated node.
    pub fn push(&mut self, expr: Expr) -> Idx {
        let idx = Idx(self.exprs.len());
        for child in expr.children() {
            assert!(child < idx, "child {} must precede its parent {}", child, idx);
        }
        self.exprs.push(expr);
        idx
    }

    pub fn get(&self, idx: Idx) -> &Expr {
        &self.exprs[idx.0]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Idx, &Expr)> {
        self.exprs.iter().enumerate().map(|(i, e)| (Idx(i), e))
    }

    /// Nodes reachable from `root`, in pre-order: the node itself, then each
    /// child subtree in operand order. Shared nodes are visited once per
    /// occurrence.
    pub fn preorder(&self, root: Idx) -> Vec<Idx> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            stack.extend(self.get(idx).children().rev());
        }
        order
    }

    /// Fold every node bottom-up, returning one result per node (indexed like the arena).
    pub fn collapse<R, F>(&self, mut collapse: F) -> Vec<R>
    where
        F: FnMut(Expr<&R>) -> R,
    {
        let mut results: Vec<R> = Vec::with_capacity(self.exprs.len());
        for expr in self.exprs.iter() {
            let result = collapse(expr.fmap_ref(|idx| &results[idx.0]));
            results.push(result);
        }
        results
    }

    /// Fallible version of [`collapse`][ExprArena::collapse]; stops at the first error.
    pub fn try_collapse<R, E, F>(&self, mut collapse: F) -> Result<Vec<R>, E>
    where
        F: FnMut(Expr<&R>) -> Result<R, E>,
    {
        let mut results: Vec<R> = Vec::with_capacity(self.exprs.len());
        for expr in self.exprs.iter() {
            let result = collapse(expr.fmap_ref(|idx| &results[idx.0]))?;
            results.push(result);
        }
        Ok(results)
    }
}
