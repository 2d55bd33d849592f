//! Infix to postfix conversion (shunting-yard).
//!
//! Precedence, from tightest to loosest: `!`, `&`, `|`, `->`, `<->`.
//! Negation is a prefix operator. `->` and `<->` associate to the left, so
//! `a->b->c` means `(a->b)->c`; `&` and `|` associate to the right, so
//! `a&b&c` means `a&(b&c)`.
//!
//! Besides reordering, the conversion checks that operands and operators
//! alternate and that parentheses balance, so the output is always a
//! well-formed postfix sequence with exactly one result.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::ast::BinOp;
use crate::error::ParseError;
use crate::lexer::{tokenize, Spanned, Token};

/// Token of the postfix (reverse Polish) form.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PostfixToken {
    Var(char),
    Not,
    Bin(BinOp),
}

impl Display for PostfixToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PostfixToken::Var(ch) => write!(f, "{}", ch),
            PostfixToken::Not => write!(f, "!"),
            PostfixToken::Bin(op) => write!(f, "{}", op),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Pending {
    Not,
    Bin(BinOp),
    Open { pos: usize },
}

impl Pending {
    /// Whether this pending operator must be emitted before pushing `op`.
    fn binds_before(self, op: BinOp) -> bool {
        match self {
            Pending::Not => true,
            Pending::Bin(top) => match top.precedence().cmp(&op.precedence()) {
                Ordering::Greater => true,
                Ordering::Equal => op.is_left_assoc(),
                Ordering::Less => false,
            },
            Pending::Open { .. } => false,
        }
    }

    fn into_output(self) -> Option<PostfixToken> {
        match self {
            Pending::Not => Some(PostfixToken::Not),
            Pending::Bin(op) => Some(PostfixToken::Bin(op)),
            Pending::Open { .. } => None,
        }
    }
}

/// Tokenize `input` and convert it to postfix form.
pub fn to_postfix(input: &str) -> Result<Vec<PostfixToken>, ParseError> {
    let tokens = tokenize(input)?;
    shunting_yard(&tokens, input.chars().count())
}

/// Convert an infix token stream to postfix form.
///
/// `end` is the position reported when the input ends while an operand is
/// still expected.
pub fn shunting_yard(tokens: &[Spanned], end: usize) -> Result<Vec<PostfixToken>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut output: Vec<PostfixToken> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    // Operands and binary operators must alternate; `!` and `(` may only
    // appear where an operand is expected.
    let mut expect_operand = true;

    for &Spanned { token, pos } in tokens {
        match token {
            Token::Var(ch) => {
                if !expect_operand {
                    return Err(ParseError::MissingOperator { pos });
                }
                output.push(PostfixToken::Var(ch));
                expect_operand = false;
            }
            Token::Not => {
                if !expect_operand {
                    return Err(ParseError::MissingOperator { pos });
                }
                stack.push(Pending::Not);
            }
            Token::LParen => {
                if !expect_operand {
                    return Err(ParseError::MissingOperator { pos });
                }
                stack.push(Pending::Open { pos });
            }
            Token::RParen => {
                if expect_operand {
                    return Err(ParseError::MissingOperand { pos });
                }
                loop {
                    match stack.pop() {
                        None => return Err(ParseError::UnmatchedClose { pos }),
                        Some(Pending::Open { .. }) => break,
                        Some(pending) => output.extend(pending.into_output()),
                    }
                }
            }
            Token::Bin(op) => {
                if expect_operand {
                    return Err(ParseError::MissingOperand { pos });
                }
                while let Some(&top) = stack.last() {
                    if !top.binds_before(op) {
                        break;
                    }
                    stack.pop();
                    output.extend(top.into_output());
                }
                stack.push(Pending::Bin(op));
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(ParseError::MissingOperand { pos: end });
    }
    while let Some(pending) = stack.pop() {
        if let Pending::Open { pos } = pending {
            return Err(ParseError::UnmatchedOpen { pos });
        }
        output.extend(pending.into_output());
    }

    debug!(
        "postfix: {}",
        output.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn rpn(input: &str) -> String {
        to_postfix(input)
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_single_var() {
        assert_eq!(rpn("a"), "a");
        assert_eq!(rpn("((a))"), "a");
    }

    #[test]
    fn test_negation() {
        assert_eq!(rpn("!a"), "a !");
        assert_eq!(rpn("!!a"), "a ! !");
        assert_eq!(rpn("!a&b"), "a ! b &");
        assert_eq!(rpn("!(a&b)"), "a b & !");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("a&b|c"), "a b & c |");
        assert_eq!(rpn("a|b&c"), "a b c & |");
        assert_eq!(rpn("a|b->c"), "a b | c ->");
        assert_eq!(rpn("a->b<->c"), "a b -> c <->");
        assert_eq!(rpn("a<->b->c"), "a b c -> <->");
        assert_eq!(rpn("!a&b|c->d<->e"), "a ! b & c | d -> e <->");
    }

    #[test]
    fn test_associativity() {
        assert_eq!(rpn("a&b&c"), "a b c & &");
        assert_eq!(rpn("a|b|c"), "a b c | |");
        assert_eq!(rpn("a&b&c|d"), "a b c & & d |");
        assert_eq!(rpn("a->b->c"), "a b -> c ->");
        assert_eq!(rpn("a<->b<->c"), "a b <-> c <->");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(rpn("(a|b)&c"), "a b | c &");
        assert_eq!(rpn("a->(b->c)"), "a b c -> ->");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_postfix(""), Err(ParseError::Empty));
        assert_eq!(to_postfix("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(to_postfix("(a&b"), Err(ParseError::UnmatchedOpen { pos: 0 }));
        assert_eq!(to_postfix("a&(b|(c)"), Err(ParseError::UnmatchedOpen { pos: 2 }));
        assert_eq!(to_postfix("a&b)"), Err(ParseError::UnmatchedClose { pos: 3 }));
        assert_eq!(to_postfix(")a"), Err(ParseError::MissingOperand { pos: 0 }));
    }

    #[test]
    fn test_missing_operands() {
        assert_eq!(to_postfix("a&"), Err(ParseError::MissingOperand { pos: 2 }));
        assert_eq!(to_postfix("&a"), Err(ParseError::MissingOperand { pos: 0 }));
        assert_eq!(to_postfix("a&|b"), Err(ParseError::MissingOperand { pos: 2 }));
        assert_eq!(to_postfix("()"), Err(ParseError::MissingOperand { pos: 1 }));
        assert_eq!(to_postfix("!"), Err(ParseError::MissingOperand { pos: 1 }));
        assert_eq!(to_postfix("a->"), Err(ParseError::MissingOperand { pos: 3 }));
    }

    #[test]
    fn test_missing_operators() {
        assert_eq!(to_postfix("ab"), Err(ParseError::MissingOperator { pos: 1 }));
        assert_eq!(to_postfix("a(b)"), Err(ParseError::MissingOperator { pos: 1 }));
        assert_eq!(to_postfix("(a)(b)"), Err(ParseError::MissingOperator { pos: 3 }));
        assert_eq!(to_postfix("a!b"), Err(ParseError::MissingOperator { pos: 1 }));
    }
}
