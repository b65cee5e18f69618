//! Lexical analysis module for the front end.
//!
//! This module contains the DFA-driven lexer that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - The closed set of automaton states, which double as token categories
//! - The dense transition table, built from a declarative rule list
//! - Maximal-munch scanning with one character of lookahead
//! - Keyword reclassification of finished identifiers
//! - Invalid-token reporting without aborting the scan

pub mod dfa;
pub mod lexer;
pub mod tokens;
