use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, State> = {
        let mut map = HashMap::new();
        map.insert("if", State::KeywordIf);
        map.insert("else", State::KeywordElse);
        map.insert("switch", State::KeywordSwitch);
        map.insert("case", State::KeywordCase);
        map.insert("default", State::KeywordDefault);
        map.insert("while", State::KeywordWhile);
        map.insert("do", State::KeywordDo);
        map.insert("for", State::KeywordFor);
        map.insert("print", State::KeywordPrint);
        map.insert("false", State::KeywordFalse);
        map.insert("true", State::KeywordTrue);
        map
    };
}

/// States of the scanning automaton.
///
/// Final states come first and name the token categories, then the
/// intermediate states, then the keyword states an identifier can be
/// reclassified into. Only final and intermediate states have rows in the
/// transition table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum State {
    // Final
    Add,       // +
    Sub,       // -
    Mul,       // *
    Div,       // /
    Or,        // ||
    And,       // &&
    Inv,       // !
    Lt,        // <
    Le,        // <=
    Gt,        // >
    Ge,        // >=
    Eq,        // ==
    Neq,       // !=
    Assign,    // =
    Id,
    Int,
    Float,     // no exponent part
    FloatE,    // with exponent part
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Semicolon,

    // Non-final
    Start,
    Bar,        // |
    Ampersand,  // &
    Period,     // .
    E,          // float ending in E or e
    EPlusMinus, // float ending in the sign of its exponent

    // Keywords
    KeywordIf,
    KeywordElse,
    KeywordSwitch,
    KeywordCase,
    KeywordDefault,
    KeywordWhile,
    KeywordDo,
    KeywordFor,
    KeywordPrint,
    KeywordFalse,
    KeywordTrue,
}

/// Number of states that own a row in the transition table.
pub const SCANNING_STATES: usize = State::EPlusMinus as usize + 1;

impl State {
    pub fn is_final(self) -> bool {
        matches!(
            self,
            State::Add
                | State::Sub
                | State::Mul
                | State::Div
                | State::Or
                | State::And
                | State::Inv
                | State::Lt
                | State::Le
                | State::Gt
                | State::Ge
                | State::Eq
                | State::Neq
                | State::Assign
                | State::Id
                | State::Int
                | State::Float
                | State::FloatE
                | State::LParen
                | State::RParen
                | State::LBrace
                | State::RBrace
                | State::Colon
                | State::Semicolon
        )
    }

    pub fn is_keyword(self) -> bool {
        self as usize > State::EPlusMinus as usize
    }

    /// Row of this state in the transition table, if it has one.
    pub fn row(self) -> Option<usize> {
        if self.is_keyword() {
            None
        } else {
            Some(self as usize)
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_keyword() {
            let name = format!("{:?}", self);
            let word = name.trim_start_matches("Keyword").to_lowercase();
            write!(f, "Keyword_{}", word)
        } else {
            write!(f, "{:?}", self)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: State,
    pub value: String,
    pub span: Span,
}

/// The token-listing line, e.g. `while   : Keyword_while`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}   : {}", self.value, self.kind)
    }
}

impl Token {
    /// Rewrites an identifier to its keyword category when it spells a
    /// reserved word. Any other category is left alone.
    pub fn reclassify(&mut self) {
        if self.kind != State::Id {
            return;
        }

        if let Some(keyword) = RESERVED_LOOKUP.get(self.value.as_str()) {
            self.kind = *keyword;
        }
    }
}
