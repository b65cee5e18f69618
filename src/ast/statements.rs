use std::slice::Iter;

use crate::Span;

use super::{
    ast::{ParseTree, StmtType, TreePrinter},
    expressions::Expr,
};

/// `<statement>`
///
/// One variant per statement form. A `Cond` with no else-branch is the
/// one-armed conditional.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    Cond(Cond),
    Switch(Switch),
    While(WhileLoop),
    Do(DoLoop),
    For(ForLoop),
    Print(Print),
    Block(Block),
}

impl Statement {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Statement::Assignment(_) => StmtType::Assignment,
            Statement::Cond(_) => StmtType::Cond,
            Statement::Switch(_) => StmtType::Switch,
            Statement::While(_) => StmtType::WhileLoop,
            Statement::Do(_) => StmtType::DoLoop,
            Statement::For(_) => StmtType::ForLoop,
            Statement::Print(_) => StmtType::Print,
            Statement::Block(_) => StmtType::Block,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Statement::Assignment(stmt) => &stmt.span,
            Statement::Cond(stmt) => &stmt.span,
            Statement::Switch(stmt) => &stmt.span,
            Statement::While(stmt) => &stmt.span,
            Statement::Do(stmt) => &stmt.span,
            Statement::For(stmt) => &stmt.span,
            Statement::Print(stmt) => &stmt.span,
            Statement::Block(stmt) => &stmt.span,
        }
    }
}

impl ParseTree for Statement {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<statement>");
        printer.line(depth + 1, self.get_stmt_type().label());

        let depth = depth + 2;
        match self {
            Statement::Assignment(stmt) => {
                printer.line(depth, &stmt.id);
                printer.line(depth, "=");
                stmt.expr.print_tree(printer, depth);
            }
            Statement::Cond(stmt) => {
                printer.line(depth, "if");
                stmt.condition.print_tree(printer, depth);
                stmt.then_branch.print_tree(printer, depth);
                if let Some(else_branch) = &stmt.else_branch {
                    printer.line(depth, "else");
                    else_branch.print_tree(printer, depth);
                }
            }
            Statement::Switch(stmt) => {
                printer.line(depth, "switch");
                stmt.scrutinee.print_tree(printer, depth);
                stmt.cases.print_tree(printer, depth);
            }
            Statement::While(stmt) => {
                printer.line(depth, "while");
                stmt.condition.print_tree(printer, depth);
                stmt.body.print_tree(printer, depth);
            }
            Statement::Do(stmt) => {
                printer.line(depth, "do");
                stmt.body.print_tree(printer, depth);
                printer.line(depth, "while");
                stmt.condition.print_tree(printer, depth);
            }
            Statement::For(stmt) => {
                printer.line(depth, "for");
                stmt.init.print_tree(printer, depth);
                stmt.condition.print_tree(printer, depth);
                stmt.update.print_tree(printer, depth);
                stmt.body.print_tree(printer, depth);
            }
            Statement::Print(stmt) => stmt.expr.print_tree(printer, depth),
            Statement::Block(stmt) => stmt.body.print_tree(printer, depth),
        }
    }
}

/// `<assignment> --> <id> "=" <expr> ";"`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub expr: Expr,
    pub span: Span,
}

/// `<assign> --> <id> "=" <expr>`, the header parts of a for loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub id: String,
    pub expr: Expr,
}

impl ParseTree for Assign {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<assign>");
        printer.line(depth + 1, &self.id);
        printer.line(depth + 1, "=");
        self.expr.print_tree(printer, depth + 1);
    }
}

/// `<cond> --> "if" "(" <expr> ")" <statement> [ "else" <statement> ]`
#[derive(Debug, Clone, PartialEq)]
pub struct Cond {
    pub condition: Expr,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// `<switch> --> "switch" "(" <expr> ")" "{" <case list> "}"`
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub scrutinee: Expr,
    pub cases: CaseList,
    pub span: Span,
}

/// `<case list> --> { <case> }+`
#[derive(Debug, Clone, PartialEq)]
pub struct CaseList(pub Vec<Case>);

impl CaseList {
    pub fn iter(&self) -> Iter<'_, Case> {
        self.0.iter()
    }
}

impl ParseTree for CaseList {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<case list>");
        for case in &self.0 {
            case.print_tree(printer, depth + 1);
        }
    }
}

/// `<case> --> "case" <label> ":" <s list> | "default" ":" <s list>`
#[derive(Debug, Clone, PartialEq)]
pub enum Case {
    Labeled { label: i32, body: SList },
    Default { body: SList },
}

impl Case {
    pub fn body(&self) -> &SList {
        match self {
            Case::Labeled { body, .. } | Case::Default { body } => body,
        }
    }
}

impl ParseTree for Case {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        match self {
            Case::Labeled { label, .. } => printer.line(depth, format!("case : {}", label)),
            Case::Default { .. } => printer.line(depth, "default"),
        }
        self.body().print_tree(printer, depth + 1);
    }
}

/// `<while loop> --> "while" "(" <expr> ")" <statement>`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expr,
    pub body: Box<Statement>,
    pub span: Span,
}

/// `<do loop> --> "do" <statement> "while" "(" <expr> ")" ";"`
#[derive(Debug, Clone, PartialEq)]
pub struct DoLoop {
    pub body: Box<Statement>,
    pub condition: Expr,
    pub span: Span,
}

/// `<for loop> --> "for" "(" <assign> ";" <expr> ";" <assign> ")" <statement>`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub init: Assign,
    pub condition: Expr,
    pub update: Assign,
    pub body: Box<Statement>,
    pub span: Span,
}

/// `<print> --> "print" <expr> ";"`
#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub expr: Expr,
    pub span: Span,
}

/// `<block> --> "{" <s list> "}"`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: SList,
    pub span: Span,
}

/// `<s list> --> { <statement> }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SList(pub Vec<Statement>);

impl SList {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ParseTree for SList {
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize) {
        printer.line(depth, "<s list>");
        for statement in &self.0 {
            statement.print_tree(printer, depth + 1);
        }
    }
}
