//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ErrorType};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn variable_error(kind: ErrorType, variable: &str) -> Error {
    Error::without_position(ErrorImpl::Variable {
        kind,
        variable: variable.to_string(),
    })
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: TokenKind::Identifier,
            expected: TokenKind::Semicolon,
        },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position(), Some(Position::new(3, 7)));
    assert!(error.is_syntax_error());
    assert_eq!(error.get_error_type(), None);
    assert_eq!(
        error.to_string(),
        "ERROR: ID at line 3, column 7; Expected SEMI"
    );
}

#[test]
fn test_declaration_error_format() {
    let error = variable_error(ErrorType::MultipleDeclaration, "a");

    assert_eq!(error.get_position(), None);
    assert!(!error.is_syntax_error());
    assert_eq!(
        error.to_string(),
        "Declaration Error: MULTIPLE_DECLARATION, variable (a)"
    );

    let error = variable_error(ErrorType::NoDeclaration, "b");
    assert_eq!(
        error.to_string(),
        "Declaration Error: NO_DECLARATION, variable (b)"
    );
}

#[test]
fn test_casting_error_format() {
    let error = variable_error(ErrorType::FloatIntCasting, "total");

    assert_eq!(error.get_error_name(), "FLOAT_INT_CASTING");
    assert_eq!(error.get_error_type(), Some(ErrorType::FloatIntCasting));
    assert_eq!(
        error.to_string(),
        "Casting Error: FLOAT_INT_CASTING, variable (total)"
    );
}

#[test]
fn test_invalid_assignment_format() {
    assert_eq!(
        variable_error(ErrorType::ArrayToSingle, "x").to_string(),
        "Invalid Assignment: ARRAY_TO_SINGLE, variable (x)"
    );
    assert_eq!(
        variable_error(ErrorType::SingleToArray, "xs").to_string(),
        "Invalid Assignment: SINGLE_TO_ARRAY, variable (xs)"
    );
}

#[test]
fn test_invalid_condition_format() {
    let error = Error::without_position(ErrorImpl::InvalidCondition);

    assert_eq!(error.get_error_name(), "INVALID_CONDITION");
    assert_eq!(error.get_error_type(), Some(ErrorType::InvalidCondition));
    assert_eq!(error.to_string(), "Invalid Condition: INVALID_CONDITION");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_categories() {
    assert_eq!(ErrorType::NoDeclaration.category(), "Declaration Error");
    assert_eq!(ErrorType::CharBooleanCasting.category(), "Casting Error");
    assert_eq!(ErrorType::IntFloatCasting.category(), "Casting Error");
    assert_eq!(ErrorType::SingleToArray.category(), "Invalid Assignment");
    assert_eq!(ErrorType::InvalidCondition.category(), "Invalid Condition");
}

#[test]
fn test_error_tips() {
    let error = variable_error(ErrorType::NoDeclaration, "y");
    assert_eq!(error.get_tip().to_string(), "Variable `y` not declared");

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: TokenKind::EOF,
            expected: TokenKind::CloseCurly,
        },
        Position::start(),
    );
    assert_eq!(error.get_tip().to_string(), "expected RBRACE, found EOF");
}
