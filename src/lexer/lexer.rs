use std::rc::Rc;

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    dfa::TRANSITIONS,
    tokens::{State, Token},
};

/// Outcome of one call to [`Lexer::next_token`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scan {
    /// A complete token, already reclassified if it spells a keyword.
    Token(Token),
    /// The automaton halted in a non-final state. The token holds the
    /// partial lexeme (including the offending character) and the state the
    /// automaton halted in.
    Invalid(Token),
    /// Only whitespace was left.
    EndOfInput,
}

/// Drives the scanning automaton over a source, one character at a time.
#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.chars().collect(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// The lookahead character, `None` at end of stream.
    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn skip_whitespace(&mut self) {
        while self.at().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans the next token with maximal munch.
    ///
    /// The character that stops a valid token is left for the next call; the
    /// character that stops an invalid one is consumed with it.
    pub fn next_token(&mut self) -> Scan {
        self.skip_whitespace();

        if self.at_eof() {
            return Scan::EndOfInput;
        }

        let start = self.pos;
        let mut state = State::Start;
        let mut lexeme = String::new();

        while let Some(c) = self.at() {
            match TRANSITIONS.transition(state, c) {
                Some(next) => {
                    state = next;
                    lexeme.push(c);
                    self.advance();
                }
                None if state.is_final() => return self.accept(state, lexeme, start),
                None => {
                    lexeme.push(c);
                    self.advance();
                    return self.reject(state, lexeme, start);
                }
            }
        }

        // The source ended mid-match
        if state.is_final() {
            self.accept(state, lexeme, start)
        } else {
            self.reject(state, lexeme, start)
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: self.get_position(),
        }
    }

    fn accept(&self, state: State, lexeme: String, start: usize) -> Scan {
        let mut token = MK_TOKEN!(state, lexeme, self.span_from(start));
        token.reclassify();

        trace!("scanned {:?} at {}", token.value, start);
        Scan::Token(token)
    }

    fn reject(&self, state: State, lexeme: String, start: usize) -> Scan {
        trace!("invalid token {:?} at {}, halted in {}", lexeme, start, state);
        Scan::Invalid(MK_TOKEN!(state, lexeme, self.span_from(start)))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Scan::Token(token) => Some(Ok(token)),
            Scan::Invalid(token) => Some(Err(Error::new(
                ErrorImpl::InvalidToken { token: token.value },
                token.span.start,
            ))),
            Scan::EndOfInput => None,
        }
    }
}

/// Scans a whole source. Invalid tokens appear in place as errors and the
/// scan carries on after them.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Result<Token, Error>> {
    Lexer::new(source, file).collect()
}
