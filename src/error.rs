//! Error types for parsing and evaluation.

use thiserror::Error;

use crate::ast::Idx;

/// Result type alias for operations that may fail to parse or evaluate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning text into a [`Formula`][crate::formula::Formula].
///
/// Malformed input is always rejected; there is no best-effort recovery.
/// Positions are 0-based character offsets into the input.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The input contains no tokens.
    #[error("empty formula")]
    Empty,

    /// A character outside the formula grammar.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// An opening parenthesis is never closed.
    #[error("unmatched '(' at position {pos}")]
    UnmatchedOpen { pos: usize },

    /// A closing parenthesis has no opening counterpart.
    #[error("unmatched ')' at position {pos}")]
    UnmatchedClose { pos: usize },

    /// An operand was expected (dangling operator, empty parentheses).
    #[error("missing operand at position {pos}")]
    MissingOperand { pos: usize },

    /// Two operands without an operator between them.
    #[error("missing operator at position {pos}")]
    MissingOperator { pos: usize },

    /// A postfix sequence that does not reduce to exactly one formula, or
    /// that names something other than a lowercase letter as a variable.
    /// `index` counts postfix tokens, not characters.
    #[error("malformed postfix sequence at token {index}")]
    MalformedPostfix { index: usize },
}

/// Errors that can occur while evaluating a formula.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EvalError {
    /// An atom was evaluated before being assigned a truth value.
    #[error("truth value of '{name}' is not determined")]
    UndeterminedValue { name: char },

    /// Only atoms can be assigned a truth value.
    #[error("cannot assign a truth value to compound node {node:?}")]
    InvalidMutation { node: Idx },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
