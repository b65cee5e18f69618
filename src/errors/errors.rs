use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether this is a lexical error (scanning goes on after these).
    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::InvalidToken { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedSymbol { token, expected } => {
                ErrorTip::Suggestion(format!("Unexpected symbol: `{}`, {}", token, expected))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { token } => ErrorTip::Suggestion(format!(
                "Nested too deeply at `{}`, try splitting the statement up",
                token
            )),
        }
    }
}

/// The diagnostic line, e.g. `# : Lexical Error, invalid token`.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{token} : Lexical Error, invalid token")]
    InvalidToken { token: String },
    #[error("{token} : Syntax Error, unexpected symbol where {expected}")]
    UnexpectedSymbol { token: String, expected: Expected },
    #[error("{token} : Syntax Error, numeric literal out of range")]
    NumberParseError { token: String },
    #[error("{token} : Syntax Error, nesting too deep")]
    NestingTooDeep { token: String },
}

/// The set of symbols that would have been accepted where a syntax error
/// was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    ArithOpOrRParen,
    Primary,
    RBrace,
    Semicolon,
    Assign,
    Statement,
    RParen,
    LParen,
    Colon,
    IntLabel,
    LBrace,
    While,
    Case,
    Id,
    EndOfInput,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Expected::ArithOpOrRParen => "arith op or ) expected",
            Expected::Primary => "id, int, float, bool literal, (, -, or ! expected",
            Expected::RBrace => "} expected",
            Expected::Semicolon => "; expected",
            Expected::Assign => "= expected",
            Expected::Statement => "id, if, switch, while, do, for, print, or { expected",
            Expected::RParen => ") expected",
            Expected::LParen => "( expected",
            Expected::Colon => ": expected",
            Expected::IntLabel => "integer label expected",
            Expected::LBrace => "{ expected",
            Expected::While => "while expected",
            Expected::Case => "case or default expected",
            Expected::Id => "id expected",
            Expected::EndOfInput => "end of input expected",
        };

        write!(f, "{}", description)
    }
}
