//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates one transition rule of the scanning automaton
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The token category (a final or keyword `State`)
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(State::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a transition rule `from --class--> to`.
///
/// Both states are written as bare `State` variant names and the class as
/// a `CharClass` expression.
///
/// # Example
///
/// ```ignore
/// const RULES: &[Rule] = &[
///     MK_RULE!(Start, CharClass::Digit => Int),
///     MK_RULE!(Int, CharClass::Char('.') => Float),
/// ];
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($from:ident, $class:expr => $to:ident) => {
        Rule {
            from: State::$from,
            class: $class,
            to: State::$to,
        }
    };
}
