//! Error types and error handling for the compiler.
//!
//! This module defines the diagnostics produced by every stage. It includes:
//!
//! - Error structures with optional source position information
//! - Syntactic and semantic error variants
//! - The semantic error kinds and their report categories
//! - Error formatting and short suggestions for the driver

pub mod errors;

#[cfg(test)]
mod tests;
