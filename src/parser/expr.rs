use crate::{
    ast::expressions::{BoolPrimary, BoolTerm, Chain, Expr, Primary, RelOp, Term, E},
    errors::errors::{Error, Expected},
    lexer::tokens::State,
};

use super::{lookups::BindingPower, parser::Parser};

type OperandHandler<T> = fn(&mut Parser) -> Result<T, Error>;

/// Parses `operand { op operand }` for the operators of one level, keeping
/// the items in source order.
fn parse_chain<T>(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandHandler<T>,
) -> Result<Chain<T>, Error> {
    let mut chain = Chain::new(operand(parser)?);

    while let Some(op) = parser.binary_operator_at(bp) {
        parser.advance();
        chain.push(op, operand(parser)?);
    }

    Ok(chain)
}

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr(parse_chain(
        parser,
        BindingPower::LogicalOr,
        parse_bool_term,
    )?))
}

pub fn parse_bool_term(parser: &mut Parser) -> Result<BoolTerm, Error> {
    Ok(BoolTerm(parse_chain(
        parser,
        BindingPower::LogicalAnd,
        parse_bool_primary,
    )?))
}

pub fn parse_bool_primary(parser: &mut Parser) -> Result<BoolPrimary, Error> {
    let left = parse_e(parser)?;

    // Relational operators do not chain
    let Some(op) = parser.current_token_kind().and_then(RelOp::from_state) else {
        return Ok(BoolPrimary::Single(left));
    };

    parser.advance();
    let right = parse_e(parser)?;

    Ok(BoolPrimary::Rel { left, op, right })
}

pub fn parse_e(parser: &mut Parser) -> Result<E, Error> {
    Ok(E(parse_chain(parser, BindingPower::Additive, parse_term)?))
}

pub fn parse_term(parser: &mut Parser) -> Result<Term, Error> {
    Ok(Term(parse_chain(
        parser,
        BindingPower::Multiplicative,
        parse_primary,
    )?))
}

pub fn parse_primary(parser: &mut Parser) -> Result<Primary, Error> {
    let Some(kind) = parser.current_token_kind() else {
        return Err(parser.error(Expected::Primary));
    };

    match kind {
        State::Id => {
            let id = parser.current_lexeme().to_string();
            parser.advance();
            Ok(Primary::Id(id))
        }
        State::Int => {
            let value = match parser.current_lexeme().parse::<i32>() {
                Ok(value) => value,
                Err(_) => return Err(parser.number_error()),
            };
            parser.advance();
            Ok(Primary::Int(value))
        }
        State::Float | State::FloatE => {
            let value = match parser.current_lexeme().parse::<f32>() {
                Ok(value) if value.is_finite() => value,
                _ => return Err(parser.number_error()),
            };
            parser.advance();
            Ok(Primary::Float(value))
        }
        State::KeywordFalse => {
            parser.advance();
            Ok(Primary::Bool(false))
        }
        State::KeywordTrue => {
            parser.advance();
            Ok(Primary::Bool(true))
        }
        State::LParen => parser.nested(|parser| {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(State::RParen, Expected::ArithOpOrRParen)?;
            Ok(Primary::Parenthesized(Box::new(expr)))
        }),
        State::Sub => parser.nested(|parser| {
            parser.advance();
            Ok(Primary::Neg(Box::new(parse_primary(parser)?)))
        }),
        State::Inv => parser.nested(|parser| {
            parser.advance();
            Ok(Primary::Inv(Box::new(parse_primary(parser)?)))
        }),
        _ => Err(parser.error(Expected::Primary)),
    }
}
