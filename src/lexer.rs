//! Tokenizer for formula text.
//!
//! Grammar terminals: variables `a`..`z`, `!`, `&`, `|`, `->`, `<->`, `(`, `)`.
//! ASCII whitespace separates nothing and is skipped. Every other character,
//! as well as a `-` or `<` that does not start an arrow, is rejected.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::ast::BinOp;
use crate::error::ParseError;
use crate::types::is_var_name;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Var(char),
    Not,
    Bin(BinOp),
    LParen,
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Var(ch) => write!(f, "{}", ch),
            Token::Not => write!(f, "!"),
            Token::Bin(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub pos: usize,
}

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((pos, ch)) = chars.next() {
        let token = match ch {
            c if c.is_ascii_whitespace() => continue,
            c if is_var_name(c) => Token::Var(c),
            '!' => Token::Not,
            '&' => Token::Bin(BinOp::And),
            '|' => Token::Bin(BinOp::Or),
            '(' => Token::LParen,
            ')' => Token::RParen,
            '-' => {
                if chars.next_if(|&(_, c)| c == '>').is_none() {
                    return Err(ParseError::UnexpectedChar { ch, pos });
                }
                Token::Bin(BinOp::Implies)
            }
            '<' => {
                let arrow = chars.next_if(|&(_, c)| c == '-').is_some()
                    && chars.next_if(|&(_, c)| c == '>').is_some();
                if !arrow {
                    return Err(ParseError::UnexpectedChar { ch, pos });
                }
                Token::Bin(BinOp::Iff)
            }
            _ => return Err(ParseError::UnexpectedChar { ch, pos }),
        };
        tokens.push(Spanned { token, pos });
    }

    debug!(
        "tokenize({:?}) -> [{}]",
        input,
        tokens.iter().map(|t| t.token.to_string()).collect::<Vec<_>>().join(" ")
    );
    Ok(tokens)
}
