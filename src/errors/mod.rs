//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while scanning and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - The expected-symbol sets quoted by syntax errors
//! - Helpful tips for the caret display

pub mod errors;
