//! Runs the front end over one source and collects its output lines.
//!
//! Diagnostics are written to the same stream as the tree or instruction
//! listing, in the order they were found. A tree is only rendered, and only
//! compiled, when the parse raised no error at all.

use std::rc::Rc;

use log::{debug, info};

use crate::{
    ast::{ast::ParseTree, statements::Statement},
    compiler::compiler::compile,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// What to produce for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// One line per token
    Tokens,
    /// The indented parse tree
    Tree,
    /// The stack-machine instruction stream
    Instructions,
}

#[derive(Debug, Default)]
pub struct Output {
    /// Every output line, diagnostics included
    pub lines: Vec<String>,
    /// The diagnostics alone, for callers that want positions
    pub diagnostics: Vec<Error>,
}

impl Output {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn report(&mut self, error: Error) {
        self.lines.push(error.to_string());
        self.diagnostics.push(error);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

pub fn run(source: &str, file: &str, emit: Emit) -> Output {
    info!("running {:?} over {}", emit, file);

    match emit {
        Emit::Tokens => list_tokens(source, file),
        Emit::Tree => parse_tree(source, file),
        Emit::Instructions => instructions(source, file),
    }
}

/// Token-listing mode: `lexeme   : Category`, or the lexical error line.
pub fn list_tokens(source: &str, file: &str) -> Output {
    let mut output = Output::default();

    for result in tokenize(source.to_string(), Some(file.to_string())) {
        match result {
            Ok(token) => output.lines.push(token.to_string()),
            Err(error) => output.report(error),
        }
    }

    debug!("listed {} tokens", output.lines.len() - output.diagnostics.len());
    output
}

pub fn parse_tree(source: &str, file: &str) -> Output {
    let (mut output, statement) = parse_checked(source, file);

    if let Some(statement) = statement {
        let tree = statement.to_tree_string();
        output.lines.extend(tree.lines().map(str::to_string));
    }

    output
}

pub fn instructions(source: &str, file: &str) -> Output {
    let (mut output, statement) = parse_checked(source, file);

    if let Some(statement) = statement {
        output.lines.extend(compile(&statement).listing());
    }

    output
}

/// Parses `source`, returning its diagnostics and the statement when, and
/// only when, the parse raised no error.
fn parse_checked(source: &str, file: &str) -> (Output, Option<Statement>) {
    let mut output = Output::default();
    let (parser, result) = parse(source.to_string(), Rc::new(file.to_string()));

    for error in parser.lexical_errors() {
        output.report(error.clone());
    }

    match result {
        Ok(statement) if !parser.syntax_error_found() && !output.has_errors() => {
            (output, Some(statement))
        }
        Ok(_) => (output, None),
        Err(error) => {
            output.report(error);
            (output, None)
        }
    }
}
