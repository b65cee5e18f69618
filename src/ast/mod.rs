/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the parse tree
///
/// Submodules:
/// - ast: The printing trait and the line-oriented tree printer
/// - expressions: The expression hierarchy and its operator chains
/// - statements: The statement variants and their parts
pub mod ast;
pub mod expressions;
pub mod statements;
