//! Pull interface between a token producer and the parser.

use std::{collections::VecDeque, rc::Rc};

use crate::{errors::errors::Error, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Produces tokens on demand.
///
/// Once the input is exhausted every further call must return an `EOS` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// A token source over an already built token list.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    last: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let last = tokens
            .last()
            .map(|token| token.position.clone())
            .unwrap_or_else(|| Position(1, Rc::new(String::from("shell"))));

        TokenStream {
            tokens: tokens.into(),
            last,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, Error> {
        match self.tokens.pop_front() {
            Some(token) => {
                self.last = token.position.clone();
                Ok(token)
            }
            None => Ok(MK_TOKEN!(TokenKind::Eos, None, self.last.clone())),
        }
    }
}
