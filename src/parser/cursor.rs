//! The token cursor shared by the lexer and the parser.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{Lexer, Scan},
        tokens::{State, Token},
    },
    Position,
};

/// Holds the current token of one parse and scans the next one on
/// `advance`. There is no token buffer: one token of lookahead only.
///
/// Invalid tokens are recorded as lexical errors and then presented like
/// any other token, carrying the state the automaton halted in. No grammar
/// rule accepts those states, so the parser reports them where they stand.
pub struct TokenCursor {
    lexer: Lexer,
    current: Option<Token>,
    previous_end: Position,
    lexical_errors: Vec<Error>,
}

impl TokenCursor {
    pub fn new(lexer: Lexer) -> Self {
        let previous_end = lexer.get_position();

        let mut cursor = TokenCursor {
            lexer,
            current: None,
            previous_end,
            lexical_errors: vec![],
        };
        cursor.scan();
        cursor
    }

    fn scan(&mut self) {
        self.current = match self.lexer.next_token() {
            Scan::Token(token) => Some(token),
            Scan::Invalid(token) => {
                self.lexical_errors.push(Error::new(
                    ErrorImpl::InvalidToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                ));
                Some(token)
            }
            Scan::EndOfInput => None,
        };
    }

    /// Category of the current token, `None` once the input is exhausted.
    pub fn peek_category(&self) -> Option<State> {
        self.current.as_ref().map(|token| token.kind)
    }

    /// Lexeme of the current token, empty once the input is exhausted.
    pub fn peek_lexeme(&self) -> &str {
        self.current
            .as_ref()
            .map(|token| token.value.as_str())
            .unwrap_or("")
    }

    /// Moves to the next token and returns the one just passed.
    pub fn advance(&mut self) -> Option<Token> {
        let previous = self.current.take();
        if let Some(token) = &previous {
            self.previous_end = token.span.end.clone();
        }

        self.scan();
        previous
    }

    /// Advances only when the current token is of `kind`.
    pub fn advance_if(&mut self, kind: State) -> Option<Token> {
        if self.peek_category() == Some(kind) {
            self.advance()
        } else {
            None
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Start of the current token, or the end of the source once exhausted.
    pub fn get_position(&self) -> Position {
        match &self.current {
            Some(token) => token.span.start.clone(),
            None => self.lexer.get_position(),
        }
    }

    /// End of the last token passed by `advance`.
    pub fn previous_end(&self) -> Position {
        self.previous_end.clone()
    }

    pub fn lexical_errors(&self) -> &[Error] {
        &self.lexical_errors
    }
}
