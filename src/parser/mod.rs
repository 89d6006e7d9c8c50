//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a [`SyntaxTree`](crate::tree::tree::SyntaxTree).
//! The grammar is LL(1): every production picks its alternative from the
//! kind of the single lookahead token. It handles:
//!
//! - Program structure, declarations and instructions
//! - Arithmetic expressions, with `HpExpr`/`LpExpr` helper productions for precedence
//! - Conditions, with `HpCond`/`LpCond` helper productions for `and`/`or`
//!
//! Parsing is fail-fast: the first token that does not fit the grammar
//! aborts the whole parse with an error.

pub mod cond;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
