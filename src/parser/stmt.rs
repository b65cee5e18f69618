use log::trace;

use crate::{
    ast::statements::{
        Assign, Assignment, Block, Case, CaseList, Cond, DoLoop, ForLoop, Print, SList,
        Statement, Switch, WhileLoop,
    },
    errors::errors::{Error, Expected},
    lexer::tokens::State,
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(handler) => {
            trace!("statement at {:?}", parser.current_lexeme());
            parser.nested(handler)
        }
        None => Err(parser.error(Expected::Statement)),
    }
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    let id = parser.expect(State::Id, Expected::Id)?.value;

    parser.expect(State::Assign, Expected::Assign)?;
    let expr = parse_expr(parser)?;
    parser.expect(State::Semicolon, Expected::Semicolon)?;

    Ok(Statement::Assignment(Assignment {
        id,
        expr,
        span: parser.span_from(start),
    }))
}

/// The `else` is looked for right after the first branch, before control
/// returns to any enclosing conditional, so it binds to the innermost `if`.
pub fn parse_cond_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    parser.expect(State::LParen, Expected::LParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(State::RParen, Expected::RParen)?;

    let then_branch = Box::new(parse_stmt(parser)?);

    let else_branch = if parser.is_at(State::KeywordElse) {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Statement::Cond(Cond {
        condition,
        then_branch,
        else_branch,
        span: parser.span_from(start),
    }))
}

pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    parser.expect(State::LParen, Expected::LParen)?;
    let scrutinee = parse_expr(parser)?;
    parser.expect(State::RParen, Expected::RParen)?;

    parser.expect(State::LBrace, Expected::LBrace)?;
    let cases = parse_case_list(parser)?;
    parser.expect(State::RBrace, Expected::RBrace)?;

    Ok(Statement::Switch(Switch {
        scrutinee,
        cases,
        span: parser.span_from(start),
    }))
}

pub fn parse_case_list(parser: &mut Parser) -> Result<CaseList, Error> {
    let mut cases = Vec::new();

    while parser.is_at(State::KeywordCase) || parser.is_at(State::KeywordDefault) {
        cases.push(parse_case(parser)?);
    }

    if cases.is_empty() {
        return Err(parser.error(Expected::Case));
    }

    Ok(CaseList(cases))
}

pub fn parse_case(parser: &mut Parser) -> Result<Case, Error> {
    if parser.is_at(State::KeywordCase) {
        parser.advance();
        let label = parse_label(parser)?;
        parser.expect(State::Colon, Expected::Colon)?;

        Ok(Case::Labeled {
            label,
            body: parse_s_list(parser)?,
        })
    } else {
        parser.expect(State::KeywordDefault, Expected::Case)?;
        parser.expect(State::Colon, Expected::Colon)?;

        Ok(Case::Default {
            body: parse_s_list(parser)?,
        })
    }
}

pub fn parse_label(parser: &mut Parser) -> Result<i32, Error> {
    if !parser.is_at(State::Int) {
        return Err(parser.error(Expected::IntLabel));
    }

    let label = match parser.current_lexeme().parse::<i32>() {
        Ok(label) => label,
        Err(_) => return Err(parser.number_error()),
    };
    parser.advance();

    Ok(label)
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    parser.expect(State::LParen, Expected::LParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(State::RParen, Expected::RParen)?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Statement::While(WhileLoop {
        condition,
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_do_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    let body = Box::new(parse_stmt(parser)?);

    parser.expect(State::KeywordWhile, Expected::While)?;
    parser.expect(State::LParen, Expected::LParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(State::RParen, Expected::RParen)?;
    parser.expect(State::Semicolon, Expected::Semicolon)?;

    Ok(Statement::Do(DoLoop {
        body,
        condition,
        span: parser.span_from(start),
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    parser.expect(State::LParen, Expected::LParen)?;
    let init = parse_assign(parser)?;
    parser.expect(State::Semicolon, Expected::Semicolon)?;
    let condition = parse_expr(parser)?;
    parser.expect(State::Semicolon, Expected::Semicolon)?;
    let update = parse_assign(parser)?;
    parser.expect(State::RParen, Expected::RParen)?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Statement::For(ForLoop {
        init,
        condition,
        update,
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_assign(parser: &mut Parser) -> Result<Assign, Error> {
    let id = parser.expect(State::Id, Expected::Id)?.value;
    parser.expect(State::Assign, Expected::Assign)?;
    let expr = parse_expr(parser)?;

    Ok(Assign { id, expr })
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    let expr = parse_expr(parser)?;
    parser.expect(State::Semicolon, Expected::Semicolon)?;

    Ok(Statement::Print(Print {
        expr,
        span: parser.span_from(start),
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.get_position();
    parser.advance();

    let body = parse_s_list(parser)?;
    parser.expect(State::RBrace, Expected::RBrace)?;

    Ok(Statement::Block(Block {
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_s_list(parser: &mut Parser) -> Result<SList, Error> {
    let mut statements = Vec::new();

    while parser.begins_statement() {
        statements.push(parse_stmt(parser)?);
    }

    Ok(SList(statements))
}
