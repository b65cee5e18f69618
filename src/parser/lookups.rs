use std::collections::HashMap;

use crate::{
    ast::{expressions::BinaryOp, statements::Statement},
    errors::errors::Error,
    lexer::tokens::State,
};

use super::{parser::Parser, stmt::*};

/// The four left-associative operator levels, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(State::Or, BindingPower::LogicalOr, BinaryOp::Or);
    parser.binary(State::And, BindingPower::LogicalAnd, BinaryOp::And);

    // Additive and multiplicative
    parser.binary(State::Add, BindingPower::Additive, BinaryOp::Add);
    parser.binary(State::Sub, BindingPower::Additive, BinaryOp::Sub);
    parser.binary(State::Mul, BindingPower::Multiplicative, BinaryOp::Mul);
    parser.binary(State::Div, BindingPower::Multiplicative, BinaryOp::Div);

    // Statements
    parser.stmt(State::Id, parse_assignment_stmt);
    parser.stmt(State::KeywordIf, parse_cond_stmt);
    parser.stmt(State::KeywordSwitch, parse_switch_stmt);
    parser.stmt(State::KeywordWhile, parse_while_stmt);
    parser.stmt(State::KeywordDo, parse_do_stmt);
    parser.stmt(State::KeywordFor, parse_for_stmt);
    parser.stmt(State::KeywordPrint, parse_print_stmt);
    parser.stmt(State::LBrace, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<State, StmtHandler>;
pub type BinaryLookup = HashMap<State, (BindingPower, BinaryOp)>;
