//! Transition table of the scanning automaton.
//!
//! The table is dense (one row per scanning state, one column per 7-bit
//! character) and is filled once from `RULES`. Adding a token category
//! means adding its state and its rules here; the driver in `lexer.rs`
//! does not change.

use lazy_static::lazy_static;

use crate::MK_RULE;

use super::tokens::{State, SCANNING_STATES};

const ALPHABET: usize = 128;

/// A set of input characters a rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `A`-`Z` and `a`-`z`
    Letter,
    /// `0`-`9`
    Digit,
    Char(char),
}

impl CharClass {
    pub fn chars(self) -> Vec<char> {
        match self {
            CharClass::Letter => ('A'..='Z').chain('a'..='z').collect(),
            CharClass::Digit => ('0'..='9').collect(),
            CharClass::Char(c) => vec![c],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub from: State,
    pub class: CharClass,
    pub to: State,
}

pub const RULES: &[Rule] = &[
    // Identifiers
    MK_RULE!(Start, CharClass::Letter => Id),
    MK_RULE!(Id, CharClass::Letter => Id),
    MK_RULE!(Id, CharClass::Digit => Id),
    // Numbers
    MK_RULE!(Start, CharClass::Digit => Int),
    MK_RULE!(Int, CharClass::Digit => Int),
    MK_RULE!(Start, CharClass::Char('.') => Period),
    MK_RULE!(Int, CharClass::Char('.') => Float),
    MK_RULE!(Period, CharClass::Digit => Float),
    MK_RULE!(Float, CharClass::Digit => Float),
    MK_RULE!(Float, CharClass::Char('E') => E),
    MK_RULE!(Float, CharClass::Char('e') => E),
    MK_RULE!(E, CharClass::Char('+') => EPlusMinus),
    MK_RULE!(E, CharClass::Char('-') => EPlusMinus),
    MK_RULE!(E, CharClass::Digit => FloatE),
    MK_RULE!(EPlusMinus, CharClass::Digit => FloatE),
    MK_RULE!(FloatE, CharClass::Digit => FloatE),
    // Single-character operators and punctuation
    MK_RULE!(Start, CharClass::Char('+') => Add),
    MK_RULE!(Start, CharClass::Char('-') => Sub),
    MK_RULE!(Start, CharClass::Char('*') => Mul),
    MK_RULE!(Start, CharClass::Char('/') => Div),
    MK_RULE!(Start, CharClass::Char('!') => Inv),
    MK_RULE!(Start, CharClass::Char('<') => Lt),
    MK_RULE!(Start, CharClass::Char('>') => Gt),
    MK_RULE!(Start, CharClass::Char('=') => Assign),
    MK_RULE!(Start, CharClass::Char('(') => LParen),
    MK_RULE!(Start, CharClass::Char(')') => RParen),
    MK_RULE!(Start, CharClass::Char('{') => LBrace),
    MK_RULE!(Start, CharClass::Char('}') => RBrace),
    MK_RULE!(Start, CharClass::Char(':') => Colon),
    MK_RULE!(Start, CharClass::Char(';') => Semicolon),
    // Two-character operators
    MK_RULE!(Start, CharClass::Char('|') => Bar),
    MK_RULE!(Bar, CharClass::Char('|') => Or),
    MK_RULE!(Start, CharClass::Char('&') => Ampersand),
    MK_RULE!(Ampersand, CharClass::Char('&') => And),
    MK_RULE!(Assign, CharClass::Char('=') => Eq),
    MK_RULE!(Inv, CharClass::Char('=') => Neq),
    MK_RULE!(Lt, CharClass::Char('=') => Le),
    MK_RULE!(Gt, CharClass::Char('=') => Ge),
];

pub struct TransitionTable {
    next: [[Option<State>; ALPHABET]; SCANNING_STATES],
}

impl TransitionTable {
    pub fn build(rules: &[Rule]) -> Self {
        let mut next = [[None; ALPHABET]; SCANNING_STATES];

        for rule in rules {
            // Keyword states are never scanned from
            let Some(row) = rule.from.row() else {
                continue;
            };

            for c in rule.class.chars() {
                next[row][c as usize] = Some(rule.to);
            }
        }

        TransitionTable { next }
    }

    /// The state reached from `state` on `c`, or `None` when the automaton
    /// halts.
    pub fn transition(&self, state: State, c: char) -> Option<State> {
        let row = state.row()?;

        if !c.is_ascii() {
            return None;
        }

        self.next[row][c as usize]
    }
}

lazy_static! {
    pub static ref TRANSITIONS: TransitionTable = TransitionTable::build(RULES);
}
