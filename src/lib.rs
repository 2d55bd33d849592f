//! # truth-table: Truth tables for propositional formulas
//!
//! **`truth-table`** parses a propositional formula over single-letter
//! variables and evaluates it, together with every sub-expression, under all
//! assignments of its variables.
//!
//! ## Formula Syntax
//!
//! | Syntax | Meaning | Precedence |
//! |--------|---------|------------|
//! | `a`..`z` | variable | |
//! | `!x` | negation | 5 (tightest) |
//! | `x & y` | conjunction | 4 |
//! | `x \| y` | disjunction | 3 |
//! | `x -> y` | implication | 2 |
//! | `x <-> y` | biconditional | 1 (loosest) |
//! | `( x )` | grouping | |
//!
//! `->` and `<->` associate to the left, `&` and `|` to the right. Whitespace is ignored. Anything
//! else, including unbalanced parentheses and dangling operators, is rejected
//! with a [`ParseError`][crate::error::ParseError].
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::formula::parse;
//! use truth_table::truth_table::Classification;
//!
//! let f = parse("a -> b").unwrap();
//! assert_eq!(f.to_string(), "(a->b)");
//!
//! let table = f.truth_table().unwrap();
//! assert_eq!(table.header(), ["(a->b)", "a", "b"]);
//! assert_eq!(table.num_rows(), 4);
//! // Row i assigns bit j of i to the j-th variable: row 1 is a=T, b=F.
//! assert_eq!(table.row_tokens(1), ["F", "T", "F"]);
//! assert_eq!(table.classify(), Classification::Contingency);
//! ```
//!
//! ## Core Components
//!
//! - **[`lexer`]** and **[`postfix`]**: tokenizing and shunting-yard conversion to postfix form.
//! - **[`builder`]** and **[`registry`]**: tree construction with one shared atom per variable.
//! - **[`ast`]**: the arena-allocated expression tree.
//! - **[`eval`]**: evaluation under an explicit [`Assignment`][crate::eval::Assignment].
//! - **[`truth_table`]**: enumeration of all assignments.
//! - **[`dot`]**: Graphviz export of formula trees.

pub mod ast;
pub mod builder;
pub mod dot;
pub mod error;
pub mod eval;
pub mod formula;
pub mod lexer;
pub mod postfix;
pub mod registry;
pub mod truth_table;
pub mod types;

pub use error::{Error, EvalError, ParseError, Result};
pub use formula::{parse, Formula};
pub use truth_table::TruthTable;
