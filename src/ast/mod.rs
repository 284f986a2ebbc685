/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree built by the parser
///
/// Submodules:
/// - ast: Program, functions and parameters, plus the shared printer helpers
/// - expressions: The closed set of expression variants
/// - statements: The closed set of statement variants and blocks
pub mod ast;
pub mod expressions;
pub mod statements;
