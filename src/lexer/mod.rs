//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for error reporting
//! - One-token lookahead through `Lexer::peek`
//!
//! Lexing is total: anything it cannot make sense of becomes an `UNKNOWN` token.

pub mod lexer;
pub mod tokens;
