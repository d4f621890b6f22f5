use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A diagnostic from any stage. Syntax errors carry the position of the offending token;
/// semantic errors are reported by variable name and carry none.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn without_position(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    /// Semantic kind of the error, `None` for syntax errors.
    pub fn get_error_type(&self) -> Option<ErrorType> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => None,
            ErrorImpl::Variable { kind, .. } => Some(*kind),
            ErrorImpl::InvalidCondition => Some(ErrorType::InvalidCondition),
        }
    }

    pub fn get_error_name(&self) -> &'static str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::Variable { kind, .. } => kind.name(),
            ErrorImpl::InvalidCondition => ErrorType::InvalidCondition.name(),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, expected } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::Variable { kind, variable } => match kind {
                ErrorType::NoDeclaration => {
                    ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
                }
                ErrorType::MultipleDeclaration => {
                    ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
                }
                ErrorType::ArrayToSingle => ErrorTip::Suggestion(format!(
                    "Array value assigned to single variable `{}`",
                    variable
                )),
                ErrorType::SingleToArray => ErrorTip::Suggestion(format!(
                    "Single value assigned to array `{}`",
                    variable
                )),
                _ => ErrorTip::Suggestion(format!(
                    "Value assigned to `{}` does not match its declared type",
                    variable
                )),
            },
            ErrorImpl::InvalidCondition => ErrorTip::None,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedToken { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.internal_error, self.position) {
            (ErrorImpl::UnexpectedToken { found, expected }, Some(position)) => write!(
                f,
                "ERROR: {} at line {}, column {}; Expected {}",
                found, position.line, position.column, expected
            ),
            (error, _) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
    },
    #[error("{}: {}, variable ({})", .kind.category(), .kind, .variable)]
    Variable { kind: ErrorType, variable: String },
    #[error("Invalid Condition: INVALID_CONDITION")]
    InvalidCondition,
}

/// Semantic error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    NoDeclaration,
    MultipleDeclaration,

    IntFloatCasting,
    IntCharCasting,
    IntBooleanCasting,
    FloatIntCasting,
    FloatCharCasting,
    FloatBooleanCasting,
    CharIntCasting,
    CharFloatCasting,
    CharBooleanCasting,
    BooleanIntCasting,
    BooleanFloatCasting,
    BooleanCharCasting,

    ArrayToSingle,
    SingleToArray,
    InvalidCondition,
}

impl ErrorType {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorType::NoDeclaration => "NO_DECLARATION",
            ErrorType::MultipleDeclaration => "MULTIPLE_DECLARATION",
            ErrorType::IntFloatCasting => "INT_FLOAT_CASTING",
            ErrorType::IntCharCasting => "INT_CHAR_CASTING",
            ErrorType::IntBooleanCasting => "INT_BOOLEAN_CASTING",
            ErrorType::FloatIntCasting => "FLOAT_INT_CASTING",
            ErrorType::FloatCharCasting => "FLOAT_CHAR_CASTING",
            ErrorType::FloatBooleanCasting => "FLOAT_BOOLEAN_CASTING",
            ErrorType::CharIntCasting => "CHAR_INT_CASTING",
            ErrorType::CharFloatCasting => "CHAR_FLOAT_CASTING",
            ErrorType::CharBooleanCasting => "CHAR_BOOLEAN_CASTING",
            ErrorType::BooleanIntCasting => "BOOLEAN_INT_CASTING",
            ErrorType::BooleanFloatCasting => "BOOLEAN_FLOAT_CASTING",
            ErrorType::BooleanCharCasting => "BOOLEAN_CHAR_CASTING",
            ErrorType::ArrayToSingle => "ARRAY_TO_SINGLE",
            ErrorType::SingleToArray => "SINGLE_TO_ARRAY",
            ErrorType::InvalidCondition => "INVALID_CONDITION",
        }
    }

    /// Label printed in front of the kind in a diagnostic line.
    pub fn category(&self) -> &'static str {
        match self {
            ErrorType::NoDeclaration | ErrorType::MultipleDeclaration => "Declaration Error",
            ErrorType::ArrayToSingle | ErrorType::SingleToArray => "Invalid Assignment",
            ErrorType::InvalidCondition => "Invalid Condition",
            _ => "Casting Error",
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
