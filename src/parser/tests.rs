//! Unit tests for the parser module.
//!
//! This module contains tests for parsing including:
//! - Every statement form
//! - Operator chains and their left-to-right order
//! - Dangling else
//! - Syntax errors and the expected sets they report

use std::rc::Rc;

use crate::{
    ast::{
        ast::StmtType,
        expressions::{BinaryOp, BoolPrimary, Expr, Primary, RelOp},
        statements::{Case, Statement},
    },
    errors::errors::{Error, ErrorImpl, Expected},
};

use super::parser::{parse, Parser, MAX_NESTING_DEPTH};

fn parse_source(source: &str) -> (Parser, Result<Statement, Error>) {
    parse(source.to_string(), Rc::new("test.lang".to_string()))
}

fn parse_ok(source: &str) -> Statement {
    let (parser, result) = parse_source(source);

    assert!(!parser.syntax_error_found());
    assert!(parser.lexical_errors().is_empty());
    result.unwrap()
}

fn parse_err(source: &str) -> (Parser, Error) {
    let (parser, result) = parse_source(source);
    let error = result.unwrap_err();

    assert!(parser.syntax_error_found());
    (parser, error)
}

fn expected_of(error: &Error) -> Expected {
    match error.get_kind() {
        ErrorImpl::UnexpectedSymbol { expected, .. } => *expected,
        other => panic!("Expected an unexpected-symbol error, got {:?}", other),
    }
}

fn assignment_expr(statement: &Statement) -> &Expr {
    match statement {
        Statement::Assignment(assignment) => &assignment.expr,
        other => panic!("Expected assignment, got {:?}", other),
    }
}

/// The single primary at the bottom of a one-operand expression.
fn only_primary(expr: &Expr) -> &Primary {
    let bool_term = expr.0.first();
    match bool_term.0.first() {
        BoolPrimary::Single(e) => e.0.first().0.first(),
        other => panic!("Expected a single <E>, got {:?}", other),
    }
}

#[test]
fn test_parse_assignment() {
    let statement = parse_ok("x = 42;");

    assert_eq!(statement.get_stmt_type(), StmtType::Assignment);
    match &statement {
        Statement::Assignment(assignment) => {
            assert_eq!(assignment.id, "x");
            assert_eq!(only_primary(&assignment.expr), &Primary::Int(42));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_subtraction_chain_is_flat_and_ordered() {
    let statement = parse_ok("x = a - b - c;");
    let expr = assignment_expr(&statement);

    let e = match expr.0.first().0.first() {
        BoolPrimary::Single(e) => e,
        other => panic!("Expected a single <E>, got {:?}", other),
    };

    assert_eq!(e.0.len(), 3);
    assert_eq!(
        e.0.operators(),
        vec![None, Some(BinaryOp::Sub), Some(BinaryOp::Sub)]
    );

    let names: Vec<&Primary> = e.0.iter().map(|item| item.operand.0.first()).collect();
    assert_eq!(
        names,
        vec![
            &Primary::Id("a".to_string()),
            &Primary::Id("b".to_string()),
            &Primary::Id("c".to_string()),
        ]
    );
}

#[test]
fn test_precedence_levels() {
    let statement = parse_ok("x = a || b && c + d * e;");
    let expr = assignment_expr(&statement);

    // `||` splits the expression in two bool terms
    assert_eq!(expr.0.operators(), vec![None, Some(BinaryOp::Or)]);

    let second = &expr.0.iter().nth(1).unwrap().operand;
    assert_eq!(second.0.operators(), vec![None, Some(BinaryOp::And)]);

    let e = match &second.0.iter().nth(1).unwrap().operand {
        BoolPrimary::Single(e) => e,
        other => panic!("Expected a single <E>, got {:?}", other),
    };
    assert_eq!(e.0.operators(), vec![None, Some(BinaryOp::Add)]);
    assert_eq!(
        e.0.iter().nth(1).unwrap().operand.0.operators(),
        vec![None, Some(BinaryOp::Mul)]
    );
}

#[test]
fn test_relational_primary() {
    let statement = parse_ok("b = x <= 10;");
    let expr = assignment_expr(&statement);

    match expr.0.first().0.first() {
        BoolPrimary::Rel { op, .. } => assert_eq!(*op, RelOp::Le),
        other => panic!("Expected a relation, got {:?}", other),
    }
}

#[test]
fn test_relational_operators_do_not_chain() {
    let (_, error) = parse_err("b = a < b < c;");

    assert_eq!(expected_of(&error), Expected::Semicolon);
    assert_eq!(error.to_string(), "< : Syntax Error, unexpected symbol where ; expected");
}

#[test]
fn test_literals() {
    assert_eq!(
        only_primary(assignment_expr(&parse_ok("x = 2.5;"))),
        &Primary::Float(2.5)
    );
    assert_eq!(
        only_primary(assignment_expr(&parse_ok("x = 1.5e2;"))),
        &Primary::Float(150.0)
    );
    assert_eq!(
        only_primary(assignment_expr(&parse_ok("x = true;"))),
        &Primary::Bool(true)
    );
    assert_eq!(
        only_primary(assignment_expr(&parse_ok("x = false;"))),
        &Primary::Bool(false)
    );
}

#[test]
fn test_unary_nesting() {
    let statement = parse_ok("x = --y;");
    assert_eq!(
        only_primary(assignment_expr(&statement)),
        &Primary::Neg(Box::new(Primary::Neg(Box::new(Primary::Id(
            "y".to_string()
        )))))
    );

    let statement = parse_ok("x = !!y;");
    assert_eq!(
        only_primary(assignment_expr(&statement)),
        &Primary::Inv(Box::new(Primary::Inv(Box::new(Primary::Id(
            "y".to_string()
        )))))
    );
}

#[test]
fn test_parenthesized_expression() {
    let statement = parse_ok("x = (a + b) * c;");
    let expr = assignment_expr(&statement);

    let e = match expr.0.first().0.first() {
        BoolPrimary::Single(e) => e,
        other => panic!("Expected a single <E>, got {:?}", other),
    };
    let term = e.0.first();
    assert_eq!(term.0.operators(), vec![None, Some(BinaryOp::Mul)]);
    assert!(matches!(term.0.first(), Primary::Parenthesized(_)));
}

#[test]
fn test_dangling_else_binds_innermost() {
    let statement = parse_ok("if (a) if (b) x = 1; else x = 2;");

    let outer = match &statement {
        Statement::Cond(cond) => cond,
        other => panic!("Expected cond, got {:?}", other),
    };
    assert!(outer.else_branch.is_none());

    match outer.then_branch.as_ref() {
        Statement::Cond(inner) => assert!(inner.else_branch.is_some()),
        other => panic!("Expected inner cond, got {:?}", other),
    }
}

#[test]
fn test_else_inside_block_binds_outer() {
    let statement = parse_ok("if (a) { if (b) x = 1; } else x = 2;");

    match &statement {
        Statement::Cond(cond) => assert!(cond.else_branch.is_some()),
        other => panic!("Expected cond, got {:?}", other),
    }
}

#[test]
fn test_parse_switch() {
    let statement = parse_ok("switch (n) { case 1: x = 1; y = 2; case 2: default: print x; }");

    let switch = match &statement {
        Statement::Switch(switch) => switch,
        other => panic!("Expected switch, got {:?}", other),
    };
    let cases: Vec<&Case> = switch.cases.iter().collect();

    assert_eq!(cases.len(), 3);
    assert!(matches!(cases[0], Case::Labeled { label: 1, .. }));
    assert_eq!(cases[0].body().len(), 2);
    assert!(matches!(cases[1], Case::Labeled { label: 2, .. }));
    assert!(cases[1].body().is_empty());
    assert!(matches!(cases[2], Case::Default { .. }));
    assert_eq!(cases[2].body().len(), 1);
}

#[test]
fn test_empty_case_list() {
    let (_, error) = parse_err("switch (n) { }");

    assert_eq!(expected_of(&error), Expected::Case);
    assert_eq!(
        error.to_string(),
        "} : Syntax Error, unexpected symbol where case or default expected"
    );
}

#[test]
fn test_case_label_must_be_int() {
    let (_, error) = parse_err("switch (n) { case x: }");

    assert_eq!(expected_of(&error), Expected::IntLabel);
}

#[test]
fn test_parse_while() {
    let statement = parse_ok("while (i < 10) i = i + 1;");

    match &statement {
        Statement::While(while_loop) => {
            assert_eq!(while_loop.body.get_stmt_type(), StmtType::Assignment);
        }
        other => panic!("Expected while, got {:?}", other),
    }
}

#[test]
fn test_parse_do() {
    let statement = parse_ok("do { i = i - 1; } while (i > 0);");

    assert_eq!(statement.get_stmt_type(), StmtType::DoLoop);
}

#[test]
fn test_do_requires_while() {
    let (_, error) = parse_err("do x = 1; (x);");

    assert_eq!(expected_of(&error), Expected::While);
}

#[test]
fn test_do_requires_semicolon() {
    let (_, error) = parse_err("do x = 1; while (x)");

    assert_eq!(expected_of(&error), Expected::Semicolon);
    assert_eq!(
        error.to_string(),
        " : Syntax Error, unexpected symbol where ; expected"
    );
}

#[test]
fn test_parse_for() {
    let statement = parse_ok("for (i = 0; i < n; i = i + 1) print i;");

    match &statement {
        Statement::For(for_loop) => {
            assert_eq!(for_loop.init.id, "i");
            assert_eq!(for_loop.update.id, "i");
            assert_eq!(for_loop.body.get_stmt_type(), StmtType::Print);
        }
        other => panic!("Expected for, got {:?}", other),
    }
}

#[test]
fn test_for_header_requires_id() {
    let (_, error) = parse_err("for (1 = 0; i; i = 1) x = 1;");

    assert_eq!(expected_of(&error), Expected::Id);
}

#[test]
fn test_parse_block() {
    let statement = parse_ok("{ a = 1; print a; { } }");

    match &statement {
        Statement::Block(block) => {
            assert_eq!(block.body.len(), 3);
            assert_eq!(
                block.body.iter().map(Statement::get_stmt_type).collect::<Vec<_>>(),
                vec![StmtType::Assignment, StmtType::Print, StmtType::Block]
            );
        }
        other => panic!("Expected block, got {:?}", other),
    }
}

#[test]
fn test_missing_primary() {
    let (parser, error) = parse_err("x = ;");

    assert_eq!(expected_of(&error), Expected::Primary);
    assert_eq!(
        error.to_string(),
        "; : Syntax Error, unexpected symbol where id, int, float, bool literal, (, -, or ! expected"
    );
    assert_eq!(error.get_position().0, 4);
    assert!(parser.lexical_errors().is_empty());
}

#[test]
fn test_missing_right_paren() {
    let (_, error) = parse_err("x = (a + b;");

    assert_eq!(expected_of(&error), Expected::ArithOpOrRParen);
}

#[test]
fn test_missing_assign() {
    let (_, error) = parse_err("x 1;");

    assert_eq!(expected_of(&error), Expected::Assign);
}

#[test]
fn test_missing_right_brace() {
    let (_, error) = parse_err("{ x = 1;");

    assert_eq!(expected_of(&error), Expected::RBrace);
}

#[test]
fn test_missing_left_paren() {
    let (_, error) = parse_err("while x) y = 1;");

    assert_eq!(expected_of(&error), Expected::LParen);
}

#[test]
fn test_not_a_statement() {
    let (_, error) = parse_err("else x = 1;");

    assert_eq!(expected_of(&error), Expected::Statement);
    assert_eq!(
        error.to_string(),
        "else : Syntax Error, unexpected symbol where id, if, switch, while, do, for, print, or { expected"
    );
}

#[test]
fn test_empty_source() {
    let (_, error) = parse_err("");

    assert_eq!(expected_of(&error), Expected::Statement);
}

#[test]
fn test_trailing_input() {
    let (_, error) = parse_err("x = 1; y = 2;");

    assert_eq!(expected_of(&error), Expected::EndOfInput);
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_integer_overflow() {
    let (_, error) = parse_err("x = 99999999999;");

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "99999999999 : Syntax Error, numeric literal out of range"
    );
}

#[test]
fn test_invalid_token_becomes_syntax_error() {
    let (parser, error) = parse_err("x = # ;");

    assert_eq!(parser.lexical_errors().len(), 1);
    assert_eq!(
        parser.lexical_errors()[0].to_string(),
        "# : Lexical Error, invalid token"
    );
    assert_eq!(expected_of(&error), Expected::Primary);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_first_error_aborts() {
    let (parser, error) = parse_err("{ x = ; y = ; }");

    assert_eq!(error.get_position().0, 6);
    assert!(parser.lexical_errors().is_empty());
}

#[test]
fn test_independent_parsers() {
    let (failed, _) = parse_err("x = ;");
    let (succeeded, result) = parse_source("x = 1;");

    assert!(failed.syntax_error_found());
    assert!(!succeeded.syntax_error_found());
    assert!(result.is_ok());
}

#[test]
fn test_statement_span() {
    let statement = parse_ok("  print a + 1;  ");

    assert_eq!(statement.get_span().start.0, 2);
    assert_eq!(statement.get_span().end.0, 14);
}

#[test]
fn test_float_overflow() {
    let (_, error) = parse_err("x = 1.0e50;");

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "1.0e50 : Syntax Error, numeric literal out of range"
    );
}

#[test]
fn test_case_label_overflow() {
    let (_, error) = parse_err("switch (x) { case 99999999999: }");

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "99999999999 : Syntax Error, numeric literal out of range"
    );
    assert_eq!(error.get_position().0, 18);
}

fn parenthesized(levels: usize) -> String {
    format!("x = {}1{};", "(".repeat(levels), ")".repeat(levels))
}

#[test]
fn test_nesting_limit() {
    // The statement itself is one level
    let statement = parse_ok(&parenthesized(MAX_NESTING_DEPTH - 1));
    assert_eq!(statement.get_stmt_type(), StmtType::Assignment);

    let (_, error) = parse_err(&parenthesized(MAX_NESTING_DEPTH));
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "( : Syntax Error, nesting too deep");
    assert_eq!(error.get_position().0, 4 + MAX_NESTING_DEPTH as u32 - 1);
}

#[test]
fn test_nesting_limit_far_past() {
    let (_, error) = parse_err(&parenthesized(5000));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_nesting_limit_on_prefix_operators() {
    parse_ok(&format!("x = {}y;", "-".repeat(MAX_NESTING_DEPTH - 1)));

    let (_, error) = parse_err(&format!("x = {}y;", "!".repeat(MAX_NESTING_DEPTH)));
    assert_eq!(error.to_string(), "! : Syntax Error, nesting too deep");
}

#[test]
fn test_nesting_limit_on_statements() {
    parse_ok(&format!("{}x = 1;", "if (a) ".repeat(MAX_NESTING_DEPTH - 1)));

    let (_, error) = parse_err(&format!("{}x = 1;", "if (a) ".repeat(MAX_NESTING_DEPTH)));
    assert_eq!(error.to_string(), "x : Syntax Error, nesting too deep");
    assert_eq!(error.get_position().0, 7 * MAX_NESTING_DEPTH as u32);
}

#[test]
fn test_nesting_depth_is_released() {
    // Siblings each reach close to the limit without adding up
    let deep = format!("y = {}1{};", "(".repeat(90), ")".repeat(90));
    let statement = parse_ok(&format!("{{ {} }}", deep.repeat(3)));

    match &statement {
        Statement::Block(block) => assert_eq!(block.body.len(), 3),
        other => panic!("Expected block, got {:?}", other),
    }
}
