/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, declarations and identifiers
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - types: Definitions for type representations in the AST
/// - printer: Renders a tree back to source-like text
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;
