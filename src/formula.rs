//! Parsed formulas.
//!
//! A [`Formula`] owns the expression arena, the variable registry built while
//! parsing it, and the index of the root node. It is immutable once built;
//! truth values are supplied separately through an
//! [`Assignment`][crate::eval::Assignment].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::ast::{Expr, ExprArena, Idx};
use crate::builder::build;
use crate::error::ParseError;
use crate::postfix::to_postfix;
use crate::registry::VarRegistry;
use crate::types::Var;

#[derive(Debug, Clone)]
pub struct Formula {
    arena: ExprArena,
    registry: VarRegistry,
    root: Idx,
}

/// Parse a formula such as `"(p->r)|(!s->!t)"`.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    debug!("parse({:?})", input);
    let postfix = to_postfix(input)?;
    build(&postfix)
}

impl Formula {
    pub(crate) fn new(arena: ExprArena, registry: VarRegistry, root: Idx) -> Self {
        Self { arena, registry, root }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse(input)
    }

    pub fn root(&self) -> Idx {
        self.root
    }

    pub fn node(&self, idx: Idx) -> &Expr {
        self.arena.get(idx)
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    pub fn registry(&self) -> &VarRegistry {
        &self.registry
    }

    /// Variable bound to the letter `name`, if it occurs in the formula.
    pub fn var(&self, name: char) -> Option<Var> {
        self.registry.get(name)
    }

    /// Number of distinct variables.
    pub fn num_vars(&self) -> usize {
        self.registry.len()
    }

    /// Sub-expressions in pre-order, root first. Atoms appear once per occurrence.
    pub fn preorder(&self) -> Vec<Idx> {
        self.arena.preorder(self.root)
    }

    /// Canonical fully parenthesized rendering of every node, indexed like the arena.
    pub fn labels(&self) -> Vec<String> {
        self.arena.collapse(|expr| match expr {
            Expr::Atom(v) => self.registry.name(v).to_string(),
            Expr::Not(a) => format!("(!{})", a),
            Expr::Binary(op, a, b) => format!("({}{}{})", a, op, b),
        })
    }

    /// Canonical rendering of the sub-expression at `idx`.
    pub fn label(&self, idx: Idx) -> String {
        let mut out = String::new();
        self.write_label(idx, &mut out);
        out
    }

    fn write_label(&self, idx: Idx, out: &mut String) {
        match *self.node(idx) {
            Expr::Atom(v) => out.push(self.registry.name(v)),
            Expr::Not(a) => {
                out.push_str("(!");
                self.write_label(a, out);
                out.push(')');
            }
            Expr::Binary(op, a, b) => {
                out.push('(');
                self.write_label(a, out);
                out.push_str(op.symbol());
                self.write_label(b, out);
                out.push(')');
            }
        }
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(self.root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::ast::BinOp;

    #[test]
    fn test_canonical_rendering() {
        assert_eq!(parse("a").unwrap().to_string(), "a");
        assert_eq!(parse("!a").unwrap().to_string(), "(!a)");
        assert_eq!(parse("a&b|c").unwrap().to_string(), "((a&b)|c)");
        assert_eq!(parse("a|b&c").unwrap().to_string(), "(a|(b&c))");
        assert_eq!(parse("((a))&(((b)))").unwrap().to_string(), "(a&b)");
        assert_eq!(parse("a->b->c").unwrap().to_string(), "((a->b)->c)");
        assert_eq!(parse("a&b&c").unwrap().to_string(), "(a&(b&c))");
        assert_eq!(parse("a|b|c").unwrap().to_string(), "(a|(b|c))");
        assert_eq!(parse("a -> (b -> c)").unwrap().to_string(), "(a->(b->c))");
        assert_eq!(parse("!a&b|c->d<->e").unwrap().to_string(), "(((((!a)&b)|c)->d)<->e)");
        assert_eq!(parse("!!a").unwrap().to_string(), "(!(!a))");
    }

    #[test]
    fn test_labels_agree_with_label() {
        let f = parse("(p->r)|(!s->!t)|(!u->v)").unwrap();
        let labels = f.labels();
        for (idx, _) in f.arena().iter() {
            assert_eq!(labels[idx.index()], f.label(idx));
        }
        assert_eq!(labels[f.root().index()], "((p->r)|(((!s)->(!t))|((!u)->v)))");
    }

    #[test]
    fn test_registry_order_is_first_occurrence() {
        let f = parse("b&a|c&b").unwrap();
        assert_eq!(f.registry().names(), &['b', 'a', 'c']);
        assert_eq!(f.num_vars(), 3);
        assert_eq!(f.var('c'), Some(Var::new(2)));
        assert_eq!(f.var('d'), None);
    }

    #[test]
    fn test_implication_children() {
        let f = parse("a->b").unwrap();
        match *f.node(f.root()) {
            Expr::Binary(BinOp::Implies, lhs, rhs) => {
                assert_eq!(lhs, f.registry().atom_of(f.var('a').unwrap()));
                assert_eq!(rhs, f.registry().atom_of(f.var('b').unwrap()));
            }
            ref other => panic!("unexpected root {:?}", other),
        }
    }

    #[test]
    fn test_preorder() {
        let f = parse("a&!a").unwrap();
        let labels: Vec<String> = f.preorder().into_iter().map(|i| f.label(i)).collect();
        assert_eq!(labels, vec!["(a&(!a))", "a", "(!a)", "a"]);
    }

    #[test]
    fn test_from_str() {
        let f: Formula = "x <-> y".parse().unwrap();
        assert_eq!(f.to_string(), "(x<->y)");
        assert!("x <- y".parse::<Formula>().is_err());
    }

    #[test]
    fn test_max_variables() {
        let input: String = ('a'..='z').map(String::from).collect::<Vec<_>>().join("|");
        let f = parse(&input).unwrap();
        assert_eq!(f.num_vars(), 26);
    }
}
