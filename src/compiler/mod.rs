//! Code generation module.
//!
//! This module contains the stack-machine code generator that turns a
//! finished parse tree into an instruction stream. It handles:
//!
//! - Sequential slot numbering for variables
//! - Label allocation for conditionals, loops and switches
//! - Left-to-right emission of operator chains
//!
//! Only trees that parsed without error can reach it.

pub mod compiler;
pub mod expr;
pub mod stmt;

#[cfg(test)]
mod tests;
