//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns the token stream of a single `int main() { ... }` program into a
//! [`ast::Program`](crate::ast::ast::Program). It handles:
//!
//! - Declarations (`int a, b;`, `float[10] xs;`)
//! - Statements (blocks, `if`/`else`, `while`, assignments, array element assignments)
//! - Expressions, by precedence climbing over the binding powers in [`lookups`]
//! - Error recovery: one report per offending token, then panic-mode skipping
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
