//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts program text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an anchored regex pattern table
//! - Recognition of keywords, program and variable names, numbers and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser only depends on the [`source::TokenSource`] pull interface.

pub mod lexer;
pub mod source;
pub mod tokens;
