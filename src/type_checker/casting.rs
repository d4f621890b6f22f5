//! Assignment compatibility rules.
//!
//! Compatibility is exact: a value may only be assigned to a variable of the same base type, so
//! every ordered pair of distinct base types has its own casting error. Arrays and scalars never
//! mix, whatever their base types.

use crate::{
    ast::types::{BaseType, Type},
    errors::errors::ErrorType,
};

/// Casting error for assigning a `from` value to a `to` variable.
pub fn casting_error(from: BaseType, to: BaseType) -> Option<ErrorType> {
    use BaseType::*;

    match (from, to) {
        (Int, Int) | (Float, Float) | (Char, Char) | (Boolean, Boolean) => None,

        (Int, Float) => Some(ErrorType::IntFloatCasting),
        (Int, Char) => Some(ErrorType::IntCharCasting),
        (Int, Boolean) => Some(ErrorType::IntBooleanCasting),

        (Float, Int) => Some(ErrorType::FloatIntCasting),
        (Float, Char) => Some(ErrorType::FloatCharCasting),
        (Float, Boolean) => Some(ErrorType::FloatBooleanCasting),

        (Char, Int) => Some(ErrorType::CharIntCasting),
        (Char, Float) => Some(ErrorType::CharFloatCasting),
        (Char, Boolean) => Some(ErrorType::CharBooleanCasting),

        (Boolean, Int) => Some(ErrorType::BooleanIntCasting),
        (Boolean, Float) => Some(ErrorType::BooleanFloatCasting),
        (Boolean, Char) => Some(ErrorType::BooleanCharCasting),
    }
}

/// Right-hand side of an assignment, as far as the checker can classify it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssignedValue<'a> {
    Literal(BaseType),
    /// A variable reference, with the variable's declared type.
    Variable(&'a Type),
}

/// Errors for assigning `value` to a variable declared as `target`.
///
/// Literals are checked against the target's base type, so `a = 1.5` is a `FLOAT_INT_CASTING`
/// for an `int[]` as well as for an `int`. Variables are cast-checked only when they are scalars;
/// mixing an array with a scalar is reported on its own.
pub fn assignment_errors(target: &Type, value: &AssignedValue) -> Vec<ErrorType> {
    let Some(to) = target.base() else {
        return vec![];
    };

    let mut errors = vec![];

    match value {
        AssignedValue::Literal(from) => errors.extend(casting_error(*from, to)),
        AssignedValue::Variable(source) => {
            if source.is_scalar() {
                if let Some(from) = source.base() {
                    errors.extend(casting_error(from, to));
                }
            }

            if target.is_scalar() && source.is_array() {
                errors.push(ErrorType::ArrayToSingle);
            }
            if target.is_array() && source.is_scalar() {
                errors.push(ErrorType::SingleToArray);
            }
        }
    }

    errors
}
