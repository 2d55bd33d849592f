//! Expression tree construction from postfix tokens.

use log::debug;

use crate::ast::{Expr, ExprArena, Idx};
use crate::error::ParseError;
use crate::formula::Formula;
use crate::postfix::PostfixToken;
use crate::registry::VarRegistry;
use crate::types::is_var_name;

/// Stack machine turning a postfix stream into a [`Formula`].
///
/// Variables resolve through a fresh [`VarRegistry`], so every occurrence of
/// a letter becomes the same atom node.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: ExprArena,
    registry: VarRegistry,
    stack: Vec<Idx>,
    consumed: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn pop(&mut self) -> Result<Idx, ParseError> {
        self.stack.pop().ok_or(ParseError::MalformedPostfix { index: self.consumed })
    }

    /// Feed one postfix token.
    pub fn push(&mut self, token: PostfixToken) -> Result<(), ParseError> {
        let idx = match token {
            PostfixToken::Var(name) => {
                if !is_var_name(name) {
                    return Err(ParseError::MalformedPostfix { index: self.consumed });
                }
                self.registry.atom(name, &mut self.arena)
            }
            PostfixToken::Not => {
                let arg = self.pop()?;
                self.arena.push(Expr::Not(arg))
            }
            PostfixToken::Bin(op) => {
                // The top of the stack is the right operand.
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                self.arena.push(Expr::Binary(op, lhs, rhs))
            }
        };
        self.stack.push(idx);
        self.consumed += 1;
        Ok(())
    }

    /// Finish building; exactly one node must remain on the stack.
    pub fn finish(mut self) -> Result<Formula, ParseError> {
        let root = self.pop()?;
        if !self.stack.is_empty() {
            return Err(ParseError::MalformedPostfix { index: self.consumed });
        }
        debug!(
            "built tree: {} nodes, {} variables, root = {}",
            self.arena.len(),
            self.registry.len(),
            root
        );
        Ok(Formula::new(self.arena, self.registry, root))
    }
}

/// Build a formula from a complete postfix sequence.
pub fn build(postfix: &[PostfixToken]) -> Result<Formula, ParseError> {
    let mut builder = TreeBuilder::new();
    for &token in postfix {
        builder.push(token)?;
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ast::BinOp;

    use crate::postfix::PostfixToken::*;

    #[test]
    fn test_implication_keeps_operand_order() {
        let f = build(&[Var('a'), Var('b'), Bin(BinOp::Implies)]).unwrap();
        let Expr::Binary(op, lhs, rhs) = *f.node(f.root()) else {
            panic!("root is not binary");
        };
        assert_eq!(op, BinOp::Implies);
        assert_eq!(f.node(lhs), &Expr::Atom(f.var('a').unwrap()));
        assert_eq!(f.node(rhs), &Expr::Atom(f.var('b').unwrap()));
    }

    #[test]
    fn test_shared_atoms() {
        // a a & a !  |
        let f = build(&[Var('a'), Var('a'), Bin(BinOp::And), Var('a'), Not, Bin(BinOp::Or)]).unwrap();
        assert_eq!(f.num_vars(), 1);
        // one atom, one and, one not, one or
        assert_eq!(f.arena().len(), 4);
        let Expr::Binary(_, and, _) = *f.node(f.root()) else {
            panic!("root is not binary");
        };
        let Expr::Binary(_, x, y) = *f.node(and) else {
            panic!("left child is not binary");
        };
        assert_eq!(x, y);
    }

    #[test]
    fn test_underflow() {
        assert_eq!(build(&[Not]).unwrap_err(), ParseError::MalformedPostfix { index: 0 });
        assert_eq!(
            build(&[Var('a'), Bin(BinOp::And)]).unwrap_err(),
            ParseError::MalformedPostfix { index: 1 }
        );
        assert_eq!(build(&[]).unwrap_err(), ParseError::MalformedPostfix { index: 0 });
    }

    #[test]
    fn test_rejects_non_letter_variables() {
        assert_eq!(build(&[Var('A')]).unwrap_err(), ParseError::MalformedPostfix { index: 0 });
        assert_eq!(
            build(&[Var('a'), Var('1'), Bin(BinOp::Or)]).unwrap_err(),
            ParseError::MalformedPostfix { index: 1 }
        );
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(
            build(&[Var('a'), Var('b')]).unwrap_err(),
            ParseError::MalformedPostfix { index: 2 }
        );
    }
}
