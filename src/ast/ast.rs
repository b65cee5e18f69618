use std::fmt::Display;

/// Collects the lines of a printed parse tree.
///
/// Every line is the node's depth, indented by that many blanks, followed
/// by the node's label: `"  2 <assignment>"`.
#[derive(Debug, Default)]
pub struct TreePrinter {
    lines: Vec<String>,
}

impl TreePrinter {
    pub fn new() -> Self {
        TreePrinter::default()
    }

    pub fn line(&mut self, depth: usize, label: impl Display) {
        self.lines
            .push(format!("{:indent$}{} {}", "", depth, label, indent = depth));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Parse Tree Trait
///
/// Implemented by every node that can render itself in the indented,
/// depth-labelled tree form. Printing never mutates the tree.
pub trait ParseTree {
    /// Appends this node's lines, with the node itself at `depth`.
    fn print_tree(&self, printer: &mut TreePrinter, depth: usize);

    /// Renders this node as the root of a tree, one line per node.
    fn to_tree_string(&self) -> String {
        let mut printer = TreePrinter::new();
        self.print_tree(&mut printer, 0);

        let mut out = printer.into_lines().join("\n");
        out.push('\n');
        out
    }
}

/// Statement Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum StmtType {
    Assignment,
    Cond,
    Switch,
    WhileLoop,
    DoLoop,
    ForLoop,
    Print,
    Block,
}

impl StmtType {
    /// The syntactic category label used in printed trees.
    pub fn label(self) -> &'static str {
        match self {
            StmtType::Assignment => "<assignment>",
            StmtType::Cond => "<cond>",
            StmtType::Switch => "<switch>",
            StmtType::WhileLoop => "<while loop>",
            StmtType::DoLoop => "<do loop>",
            StmtType::ForLoop => "<for loop>",
            StmtType::Print => "<print>",
            StmtType::Block => "<block>",
        }
    }
}
