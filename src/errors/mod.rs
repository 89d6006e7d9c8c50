//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by the lexer and
//! the parser. It includes:
//!
//! - An error structure carrying the offending source position
//! - Specific error variants for lexing and parsing failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
