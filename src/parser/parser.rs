//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser keeps exactly one token of lookahead, pulled on demand from a
//! [`TokenSource`], and every production builds its node in the tree arena
//! only after all of its children are built.
//!
//! It maintains a lookup table mapping the first token of an instruction
//! to the production handling it.

use std::collections::HashMap;

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    tree::tree::{NodeId, SyntaxTree, TreeBuilder, EPSILON_LABEL, SKIP_LINES_LABEL},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, first_set, InstructionLookup, LinkHandler, NonTerminal,
        ProductionHandler,
    },
    stmt::parse_program,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource>,
    /// The single token of lookahead
    lookahead: Token,
    /// Arena receiving the nodes as they are built
    tree: TreeBuilder,
    /// Lookup table for instruction parsing handlers
    instruction_lookup: InstructionLookup,
}

impl Parser {
    /// Creates a new Parser and pulls the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `source` - The token source to parse from
    ///
    /// # Returns
    ///
    /// The parser, or the error raised by the source while producing the
    /// first token.
    pub fn new(source: impl TokenSource + 'static) -> Result<Self, Error> {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let lookahead = source.next_token()?;

        let mut parser = Parser {
            source,
            lookahead,
            tree: TreeBuilder::new(),
            instruction_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Pulls the next token and returns the previous lookahead.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.source.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns a leaf holding the consumed token if the lookahead matches,
    /// otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<NodeId, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        found: kind,
                        expected: expected_kind,
                    },
                    self.get_position(),
                )
            }));
        }

        let token = self.advance()?;
        trace!(kind = %token.kind, line = token.line(), "Matched token");
        Ok(self.tree.leaf(token.kind.name(), Some(token)))
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<NodeId, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Error for a lookahead matching none of the alternatives of a production.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                found: self.current_token_kind(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Consumes any number of end-of-line tokens.
    pub fn skip_lines(&mut self) -> Result<NodeId, Error> {
        while self.current_token_kind() == TokenKind::EndLine {
            self.advance()?;
        }

        Ok(self.tree.leaf(SKIP_LINES_LABEL, None))
    }

    /// Placeholder leaf for an elided alternative.
    pub fn epsilon(&mut self) -> NodeId {
        self.tree.leaf(EPSILON_LABEL, None)
    }

    /// Builds the node of `non_terminal` over already built children.
    pub fn node(&mut self, non_terminal: NonTerminal, children: Vec<NodeId>) -> NodeId {
        self.tree.node(non_terminal.name(), children)
    }

    /// Builds the node of an epsilon alternative.
    pub fn empty(&mut self, non_terminal: NonTerminal) -> NodeId {
        let epsilon = self.epsilon();
        self.node(non_terminal, vec![epsilon])
    }

    /// Whether the lookahead selects the non-empty alternative of `non_terminal`.
    pub fn selects(&self, non_terminal: NonTerminal) -> bool {
        self.lookahead.is_one_of_many(first_set(non_terminal))
    }

    /// Parses a right-recursive production `X -> link X | EPSILON`.
    ///
    /// The links are read in a loop and the nested `X` nodes are built from
    /// the right afterwards, so program length does not grow the call stack.
    /// `link` returns the children preceding the nested `X`.
    pub fn chain(
        &mut self,
        non_terminal: NonTerminal,
        link: LinkHandler,
    ) -> Result<NodeId, Error> {
        let mut links = vec![];
        while self.selects(non_terminal) {
            links.push(link(self)?);
            self.enter(non_terminal);
        }

        let mut tail = self.empty(non_terminal);
        for mut children in links.into_iter().rev() {
            children.push(tail);
            tail = self.node(non_terminal, children);
        }

        Ok(tail)
    }

    /// Traces entry into the production of `non_terminal`.
    pub fn enter(&self, non_terminal: NonTerminal) {
        trace!(
            production = non_terminal.name(),
            lookahead = %self.current_token_kind(),
            line = self.lookahead.line(),
            "Entering production"
        );
    }

    /// Returns a reference to the instruction lookup table.
    pub fn get_instruction_lookup(&self) -> &InstructionLookup {
        &self.instruction_lookup
    }

    /// Registers an instruction handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The first token of the instruction
    /// * `handler` - The production parsing this instruction
    pub fn instruction(&mut self, kind: TokenKind, handler: ProductionHandler) {
        self.instruction_lookup.insert(kind, handler);
    }

    /// Returns the position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.lookahead.position.clone()
    }

    /// Parses a whole program and hands over the finished tree.
    pub fn start_parse(mut self) -> Result<SyntaxTree, Error> {
        let root = parse_program(&mut self)?;
        Ok(self.tree.finish(root))
    }
}

/// Parses the program produced by `source` into a syntax tree.
///
/// This is the main entry point for parsing. Parsing stops at the first
/// token that does not fit the grammar; no partial tree is returned.
///
/// # Arguments
///
/// * `source` - The token source to pull tokens from
///
/// # Returns
///
/// The tree rooted at the `Program` node, or the first error met.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: impl TokenSource + 'static) -> Result<SyntaxTree, Error> {
    Parser::new(source)?.start_parse()
}

/// Scans and parses a program text.
pub fn parse_source(source: String, file: Option<String>) -> Result<SyntaxTree, Error> {
    parse(Lexer::new(source, file))
}
