//! Unit tests for the compiler module.
//!
//! Each test compiles one parsed statement and checks the instruction
//! listing line for line.

use std::rc::Rc;

use crate::{ast::expressions::RelOp, parser::parser::parse};

use super::compiler::{compile, Compiler, EmitInstructions, Instruction};

fn listing(source: &str) -> Vec<String> {
    let (_, result) = parse(source.to_string(), Rc::new("test.lang".to_string()));
    compile(&result.unwrap()).listing()
}

#[test]
fn test_assignment() {
    assert_eq!(
        listing("x = a + 1;"),
        vec!["\tload 0", "\tpush 1", "\tadd", "\tstore 1"]
    );
}

#[test]
fn test_chain_folds_left() {
    assert_eq!(
        listing("x = a - b - c;"),
        vec![
            "\tload 0", "\tload 1", "\tsub", "\tload 2", "\tsub", "\tstore 3"
        ]
    );
}

#[test]
fn test_precedence() {
    assert_eq!(
        listing("x = a || b && c;"),
        vec![
            "\tload 0", "\tload 1", "\tload 2", "\tand", "\tor", "\tstore 3"
        ]
    );
    assert_eq!(
        listing("x = a + b * c;"),
        vec![
            "\tload 0", "\tload 1", "\tload 2", "\tmul", "\tadd", "\tstore 3"
        ]
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(
        listing("x = -!b;"),
        vec!["\tload 0", "\tinv", "\tneg", "\tstore 1"]
    );
}

#[test]
fn test_literals() {
    assert_eq!(listing("print 2.5;"), vec!["\tpush 2.5", "\tprint"]);
    assert_eq!(listing("print true;"), vec!["\tpush true", "\tprint"]);
}

#[test]
fn test_relation() {
    assert_eq!(
        listing("b = x != 3;"),
        vec!["\tload 0", "\tpush 3", "\tneq", "\tstore 1"]
    );
}

#[test]
fn test_cond_without_else() {
    assert_eq!(
        listing("if (a) x = 1;"),
        vec!["\tload 0", "\tiffalse L0", "\tpush 1", "\tstore 1", "L0:"]
    );
}

#[test]
fn test_cond_with_else() {
    assert_eq!(
        listing("if (a) x = 1; else x = 2;"),
        vec![
            "\tload 0",
            "\tiffalse L0",
            "\tpush 1",
            "\tstore 1",
            "\tgoto L1",
            "L0:",
            "\tpush 2",
            "\tstore 1",
            "L1:",
        ]
    );
}

#[test]
fn test_while_loop() {
    assert_eq!(
        listing("while (i < 10) i = i + 1;"),
        vec![
            "L0:",
            "\tload 0",
            "\tpush 10",
            "\tlt",
            "\tiffalse L1",
            "\tload 0",
            "\tpush 1",
            "\tadd",
            "\tstore 0",
            "\tgoto L0",
            "L1:",
        ]
    );
}

#[test]
fn test_do_loop() {
    assert_eq!(
        listing("do x = x - 1; while (x > 0);"),
        vec![
            "L0:",
            "\tload 0",
            "\tpush 1",
            "\tsub",
            "\tstore 0",
            "\tload 0",
            "\tpush 0",
            "\tgt",
            "\tiftrue L0",
        ]
    );
}

#[test]
fn test_for_loop() {
    assert_eq!(
        listing("for (i = 0; i < 3; i = i + 1) print i;"),
        vec![
            "\tpush 0",
            "\tstore 0",
            "L0:",
            "\tload 0",
            "\tpush 3",
            "\tlt",
            "\tiffalse L1",
            "\tload 0",
            "\tprint",
            "\tload 0",
            "\tpush 1",
            "\tadd",
            "\tstore 0",
            "\tgoto L0",
            "L1:",
        ]
    );
}

#[test]
fn test_switch() {
    assert_eq!(
        listing("switch (n) { case 1: print 1; default: print 0; }"),
        vec![
            "\tload 0",
            "\tdup",
            "\tpush 1",
            "\teq",
            "\tiffalse L1",
            "\tpop",
            "\tpush 1",
            "\tprint",
            "\tgoto L0",
            "L1:",
            "\tpop",
            "\tpush 0",
            "\tprint",
            "\tgoto L0",
            "\tpop",
            "L0:",
        ]
    );
}

#[test]
fn test_block() {
    assert_eq!(
        listing("{ a = 1; b = a; }"),
        vec!["\tpush 1", "\tstore 0", "\tload 0", "\tstore 1"]
    );
    assert!(listing("{ }").is_empty());
}

#[test]
fn test_variable_slots() {
    let mut compiler = Compiler::new();

    assert_eq!(compiler.var_slot("a"), 0);
    assert_eq!(compiler.var_slot("b"), 1);
    assert_eq!(compiler.var_slot("a"), 0);
    assert_eq!(compiler.new_label(), 0);
    assert_eq!(compiler.new_label(), 1);
}

#[test]
fn test_instruction_display() {
    assert_eq!(Instruction::Label(3).to_string(), "L3:");
    assert_eq!(Instruction::Rel(RelOp::Ge).to_string(), "\tge");
    assert_eq!(Instruction::PushFloat(1.0).to_string(), "\tpush 1.0");
    assert_eq!(Instruction::IfTrue(2).to_string(), "\tiftrue L2");
}

#[test]
fn test_statement_emits_into_existing_compiler() {
    let (_, result) = parse("print a;".to_string(), Rc::new("test.lang".to_string()));
    let statement = result.unwrap();

    let mut compiler = Compiler::new();
    compiler.var_slot("z");
    statement.emit_instructions(&mut compiler);

    assert_eq!(compiler.listing(), vec!["\tload 1", "\tprint"]);
}
