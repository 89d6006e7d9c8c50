//! Syntax tree produced by the parser.
//!
//! Submodules:
//! - tree: arena-backed labeled tree and its builder
//! - rewrite: normalization passes and comparison negation

pub mod rewrite;
pub mod tree;
