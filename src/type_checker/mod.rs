//! Type checking and semantic analysis module.
//!
//! This module runs after parsing, over the flat lists the parser collected rather than the
//! tree itself. It reports:
//!
//! - Names declared more than once
//! - References to undeclared names
//! - Assignments whose value does not match the variable's declared type
//! - Conditions built from a comparison
//!
//! All checks run to completion; errors accumulate in a [`type_checker::SemanticReport`].

pub mod casting;
pub mod type_checker;

#[cfg(test)]
mod tests;
