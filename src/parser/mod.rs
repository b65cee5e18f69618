//! Parser module for building the parse tree.
//!
//! This module contains the recursive-descent parser that pulls tokens
//! from the lexer on demand and builds the tree one grammar rule at a
//! time. It handles:
//!
//! - The token cursor: the single current token, advanced on demand
//! - Statement parsing, dispatched on the first token of a statement
//! - Expression parsing, with each binary-operator level kept as a flat,
//!   left-associative chain
//! - First-failure syntax error reporting
//!
//! Every grammar procedure returns `Result`, so a failed subtree can never
//! end up inside a finished tree.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
