//! Integration tests for the whole front end.
//!
//! These tests drive a source through scanning, parsing, tree printing and
//! instruction emission the way the command line does, and check the exact
//! lines produced.

use stmtc::{
    display_error,
    driver::{self, Emit},
};

const FILE: &str = "test.lang";

#[test]
fn test_token_listing() {
    let output = driver::run("x = 1.5;", FILE, Emit::Tokens);

    assert!(!output.has_errors());
    assert_eq!(
        output.lines,
        vec!["x   : Id", "=   : Assign", "1.5   : Float", ";   : Semicolon"]
    );
}

#[test]
fn test_token_listing_keywords() {
    let output = driver::run("if iffy", FILE, Emit::Tokens);

    assert_eq!(output.lines, vec!["if   : Keyword_if", "iffy   : Id"]);
}

#[test]
fn test_token_listing_continues_after_invalid_token() {
    let output = driver::run("a # b", FILE, Emit::Tokens);

    assert_eq!(
        output.lines,
        vec!["a   : Id", "# : Lexical Error, invalid token", "b   : Id"]
    );
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].get_position().0, 2);
}

#[test]
fn test_tree_output() {
    let output = driver::run("print a + 1;", FILE, Emit::Tree);

    assert!(!output.has_errors());
    assert_eq!(
        output.render(),
        "\
0 <statement>
 1 <print>
  2 <expr>
   3 <boolTerm>
    4 <boolPrimary>
     5 <E>
      6 <term>
       7 <primary> a
      6 +
      6 <term>
       7 <primary> 1
"
    );
}

#[test]
fn test_no_tree_after_syntax_error() {
    let output = driver::run("x = ;", FILE, Emit::Tree);

    assert!(output.has_errors());
    assert_eq!(
        output.lines,
        vec!["; : Syntax Error, unexpected symbol where id, int, float, bool literal, (, -, or ! expected"]
    );
}

#[test]
fn test_lexical_then_syntax_error() {
    let output = driver::run("x = # ;", FILE, Emit::Tree);

    assert_eq!(
        output.lines,
        vec![
            "# : Lexical Error, invalid token",
            "# : Syntax Error, unexpected symbol where id, int, float, bool literal, (, -, or ! expected",
        ]
    );
}

#[test]
fn test_error_at_end_of_input() {
    let output = driver::run("while (x) x = 1", FILE, Emit::Tree);

    assert_eq!(
        output.lines,
        vec![" : Syntax Error, unexpected symbol where ; expected"]
    );
}

#[test]
fn test_trailing_input_is_an_error() {
    let output = driver::run("x = 1; }", FILE, Emit::Tree);

    assert_eq!(
        output.lines,
        vec!["} : Syntax Error, unexpected symbol where end of input expected"]
    );
}

#[test]
fn test_instruction_output() {
    let output = driver::run("if (a < 1) a = 1; else a = a - 1;", FILE, Emit::Instructions);

    assert!(!output.has_errors());
    assert_eq!(
        output.lines,
        vec![
            "\tload 0",
            "\tpush 1",
            "\tlt",
            "\tiffalse L0",
            "\tpush 1",
            "\tstore 0",
            "\tgoto L1",
            "L0:",
            "\tload 0",
            "\tpush 1",
            "\tsub",
            "\tstore 0",
            "L1:",
        ]
    );
}

#[test]
fn test_no_instructions_after_error() {
    let output = driver::run("switch (n) { }", FILE, Emit::Instructions);

    assert_eq!(
        output.lines,
        vec!["} : Syntax Error, unexpected symbol where case or default expected"]
    );
}

#[test]
fn test_runs_are_independent() {
    let failed = driver::run("x = ;", FILE, Emit::Tree);
    let first = driver::run("{ x = 1; y = x * 2; }", FILE, Emit::Tree);
    let second = driver::run("{ x = 1; y = x * 2; }", FILE, Emit::Tree);

    assert!(failed.has_errors());
    assert!(!first.has_errors());
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_larger_program() {
    let source = "
{
    sum = 0;
    for (i = 1; i <= 10; i = i + 1) {
        switch (i) {
            case 3: print i;
            case 5: sum = sum + i * 2;
            default: sum = sum + 1;
        }
    }
    do sum = sum - 1; while (sum > 100 && !done);
    if (sum >= 1.5e1) print sum; else print -sum;
}
";

    let tree = driver::run(source, FILE, Emit::Tree);
    assert!(!tree.has_errors());
    assert_eq!(tree.lines[0], "0 <statement>");
    assert_eq!(tree.lines[1], " 1 <block>");

    let instructions = driver::run(source, FILE, Emit::Instructions);
    assert!(!instructions.has_errors());
    assert_eq!(instructions.lines.last().unwrap(), "L7:");
}

#[test]
fn test_display_error_points_at_token() {
    let source = "x = ;";
    let output = driver::run(source, FILE, Emit::Tree);
    let rendered = display_error(&output.diagnostics[0], source);

    assert!(rendered.starts_with("Error: UnexpectedSymbol"));
    assert!(rendered.contains("-> test.lang\n"));
    assert!(rendered.contains("1 | x = ;\n"));
    assert!(rendered.ends_with("----^\n"));
}

#[test]
fn test_whitespace_only_source() {
    let output = driver::run("  \n\t \n", FILE, Emit::Tokens);

    assert!(output.lines.is_empty());
    assert!(!output.has_errors());
}

#[test]
fn test_deep_nesting_reports_instead_of_crashing() {
    let source = format!("x = {}1{};", "(".repeat(10_000), ")".repeat(10_000));
    let output = driver::run(&source, FILE, Emit::Tree);

    assert_eq!(output.lines, vec!["( : Syntax Error, nesting too deep"]);
}
