//! Parser implementation for building the parse tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! The parser owns the token cursor of exactly one parse, together with that
//! parse's syntax-error flag, and keeps lookup tables for:
//! - Statement handlers, keyed by the first token of a statement
//! - Binary operators, keyed by token category, with their chain level

use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::{expressions::BinaryOp, statements::Statement},
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::{
        lexer::Lexer,
        tokens::{State, Token},
    },
    Position, Span,
};

use super::{
    cursor::TokenCursor,
    lookups::{create_token_lookups, BinaryLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// How many statements and parenthesized or prefixed primaries may be open
/// at once.
pub const MAX_NESTING_DEPTH: usize = 100;

/// The main parser structure that maintains parsing state.
///
/// Grammar procedures take the parser explicitly; nothing about a parse
/// lives outside this struct, so independent parses never share state.
pub struct Parser {
    /// The current token and the lexer behind it
    cursor: TokenCursor,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operators and their chain level
    binary_lookup: BinaryLookup,
    /// Set by the first syntax error of this parse
    syntax_error_found: bool,
    /// Statements and primaries currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`.
    ///
    /// The lookup tables start empty; `parse` fills them with
    /// `create_token_lookups`.
    pub fn new(lexer: Lexer) -> Self {
        let file = Rc::clone(lexer.file());

        Parser {
            cursor: TokenCursor::new(lexer),
            file,
            stmt_lookup: HashMap::new(),
            binary_lookup: HashMap::new(),
            syntax_error_found: false,
            depth: 0,
        }
    }

    /// Returns the kind of the current token, `None` at end of input.
    pub fn current_token_kind(&self) -> Option<State> {
        self.cursor.peek_category()
    }

    /// Returns the lexeme of the current token, empty at end of input.
    pub fn current_lexeme(&self) -> &str {
        self.cursor.peek_lexeme()
    }

    pub fn is_at(&self, kind: State) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        self.cursor.advance()
    }

    /// Consumes a token of the given kind, or fails with a syntax error
    /// naming what was expected.
    pub fn expect(&mut self, kind: State, expected: Expected) -> Result<Token, Error> {
        match self.cursor.advance_if(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(expected)),
        }
    }

    /// Builds the syntax error for the current token and flags this parse
    /// as failed.
    pub fn error(&mut self, expected: Expected) -> Error {
        self.syntax_error_found = true;

        Error::new(
            ErrorImpl::UnexpectedSymbol {
                token: self.current_lexeme().to_string(),
                expected,
            },
            self.get_position(),
        )
    }

    /// Builds the error for a numeric literal that does not fit its type.
    pub fn number_error(&mut self) -> Error {
        self.syntax_error_found = true;

        Error::new(
            ErrorImpl::NumberParseError {
                token: self.current_lexeme().to_string(),
            },
            self.get_position(),
        )
    }

    /// Runs `inner` one nesting level deeper, failing at the current token
    /// once `MAX_NESTING_DEPTH` levels are open.
    pub fn nested<T>(
        &mut self,
        inner: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.syntax_error_found = true;

            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    token: self.current_lexeme().to_string(),
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = inner(self);
        self.depth -= 1;

        result
    }

    pub fn syntax_error_found(&self) -> bool {
        self.syntax_error_found
    }

    /// Lexical errors met so far, in source order.
    pub fn lexical_errors(&self) -> &[Error] {
        self.cursor.lexical_errors()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Whether the current token can start a statement.
    pub fn begins_statement(&self) -> bool {
        self.current_token_kind()
            .is_some_and(|kind| self.stmt_lookup.contains_key(&kind))
    }

    /// The operator at the cursor if it belongs to chain level `bp`.
    pub fn binary_operator_at(&self, bp: BindingPower) -> Option<BinaryOp> {
        let kind = self.current_token_kind()?;

        match self.binary_lookup.get(&kind) {
            Some((level, op)) if *level == bp => Some(*op),
            _ => None,
        }
    }

    /// Registers a binary operator token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The chain level this operator extends
    /// * `op` - The operator recorded in the chain
    pub fn binary(&mut self, kind: State, binding_power: BindingPower, op: BinaryOp) {
        self.binary_lookup.insert(kind, (binding_power, op));
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: State, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current position in the source.
    pub fn get_position(&self) -> Position {
        self.cursor.get_position()
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.cursor.previous_end(),
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }
}

/// Parses one statement from a source.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, parses exactly one `<statement>` and then
/// requires the input to be exhausted.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Reference-counted string containing the source name
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its lexical errors and syntax-error flag)
/// - Result containing either the statement or the first syntax error
pub fn parse(source: String, file: Rc<String>) -> (Parser, Result<Statement, Error>) {
    let mut parser = Parser::new(Lexer::new(source, Some(file.to_string())));
    create_token_lookups(&mut parser);

    let result = parse_program(&mut parser);

    match &result {
        Ok(statement) => debug!(
            "parsed {:?} statement from {}",
            statement.get_stmt_type(),
            parser.file()
        ),
        Err(error) => debug!("parse of {} failed: {}", parser.file(), error),
    }

    (parser, result)
}

fn parse_program(parser: &mut Parser) -> Result<Statement, Error> {
    let statement = parse_stmt(parser)?;

    if !parser.is_exhausted() {
        return Err(parser.error(Expected::EndOfInput));
    }

    Ok(statement)
}
