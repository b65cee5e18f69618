use std::slice::Iter;

use crate::lexer::tokens::State;

use super::ast::{ParseTree, TreePrinter};

/// Operators of the four left-associative levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Relational operators. At most one appears per `<boolPrimary>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Neq,
}

impl RelOp {
    pub fn from_state(state: State) -> Option<Self> {
        match state {
            State::Lt => Some(RelOp::Lt),
            State::Le => Some(RelOp::Le),
            State::Gt => Some(RelOp::Gt),
            State::Ge => Some(RelOp::Ge),
            State::Eq => Some(RelOp::Eq),
            State::Neq => Some(RelOp::Neq),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
            RelOp::Eq => "==",
            RelOp::Neq => "!=",
        }
    }
}

// CHAINS

/// One element of an operator chain: the operand and the operator to its
/// left. Only the first element of a chain has no operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainItem<T> {
    pub operator: Option<BinaryOp>,
    pub operand: T,
}

/// A run of one binary-operator level, e.g. `a - b - c`, kept flat and in
/// source order so that walking it left to right is left-associative.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<T> {
    items: Vec<ChainItem<T>>,
}

impl<T> Chain<T> {
    pub fn new(first: T) -> Self {
        Chain {
            items: vec![ChainItem {
                operator: None,
                operand: first,
            }],
        }
    }

    pub fn push(&mut self, operator: BinaryOp, operand: T) {
        self.items.push(ChainItem {
            operator: Some(operator),
            operand,
        });
    }

    pub fn first(&self) -> &T {
        &self.items[0].operand
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, ChainItem<T>> {
        self.items.iter()
    }

    /// The operators in order, `None` for the leading operand.
    pub fn operators(&self) -> Vec<Option<BinaryOp>> {
        self.items.iter().map(|item| item.operator).collect()
    }
}

impl<T: ParseTree> Chain<T> {
    fn print_items(&self, printer: &mut TreePrinter, depth: usize) {
        for item in &self.items {
            if let Some(operator) = item.operator {
                printer.line(depth, operator.symbol());
            }
            item.operand.print_tree(printer, depth);
        }
    }
}

/// `<expr> --> <boolTerm> { "||" <boolTerm> }`
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(pub Chain<BoolTerm>);

impl ParseTree for Expr {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<expr>");
        self.0.print_items(printer, depth + 1);
    }
}

/// `<boolTerm> --> <boolPrimary> { "&&" <boolPrimary> }`
#[derive(Debug, Clone, PartialEq)]
pub struct BoolTerm(pub Chain<BoolPrimary>);

impl ParseTree for BoolTerm {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<boolTerm>");
        self.0.print_items(printer, depth + 1);
    }
}

/// `<boolPrimary> --> <E> [ <rel op> <E> ]`
#[derive(Debug, Clone, PartialEq)]
pub enum BoolPrimary {
    Single(E),
    Rel { left: E, op: RelOp, right: E },
}

impl ParseTree for BoolPrimary {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<boolPrimary>");
        match self {
            BoolPrimary::Single(e) => e.print_tree(printer, depth + 1),
            BoolPrimary::Rel { left, op, right } => {
                left.print_tree(printer, depth + 1);
                printer.line(depth + 1, op.symbol());
                right.print_tree(printer, depth + 1);
            }
        }
    }
}

/// `<E> --> <term> { (+|-) <term> }`
#[derive(Debug, Clone, PartialEq)]
pub struct E(pub Chain<Term>);

impl ParseTree for E {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<E>");
        self.0.print_items(printer, depth + 1);
    }
}

/// `<term> --> <primary> { (*|/) <primary> }`
#[derive(Debug, Clone, PartialEq)]
pub struct Term(pub Chain<Primary>);

impl ParseTree for Term {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<term>");
        self.0.print_items(printer, depth + 1);
    }
}

/// `<primary>`: literals, identifiers, parentheses and the two prefix
/// operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    Id(String),
    Int(i32),
    Float(f32),
    Bool(bool),
    Parenthesized(Box<Expr>),
    /// `- <primary>`
    Neg(Box<Primary>),
    /// `! <primary>`
    Inv(Box<Primary>),
}

impl ParseTree for Primary {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        match self {
            Primary::Id(id) => printer.line(depth, format!("<primary> {}", id)),
            Primary::Int(value) => printer.line(depth, format!("<primary> {}", value)),
            Primary::Float(value) => printer.line(depth, format!("<primary> {:?}", value)),
            Primary::Bool(value) => printer.line(depth, format!("<primary> {}", value)),
            Primary::Parenthesized(expr) => {
                printer.line(depth, "<primary>");
                expr.print_tree(printer, depth + 1);
            }
            Primary::Neg(operand) => {
                printer.line(depth, "<primary>");
                printer.line(depth, "-");
                operand.print_tree(printer, depth + 1);
            }
            Primary::Inv(operand) => {
                printer.line(depth, "<primary>");
                printer.line(depth, "!");
                operand.print_tree(printer, depth + 1);
            }
        }
    }
}
