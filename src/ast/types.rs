//! Type system definitions for the AST.
//!
//! The language has four scalar types and an array type for each of them. Array types are
//! their own kinds: `int` and `int[]` are unrelated for compatibility purposes.

use std::fmt::Display;

/// The four scalar types, used to name casting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Int,
    Float,
    Char,
    Boolean,
}

impl Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseType::Int => write!(f, "int"),
            BaseType::Float => write!(f, "float"),
            BaseType::Char => write!(f, "char"),
            BaseType::Boolean => write!(f, "boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    Char,
    Boolean,
    IntArray,
    FloatArray,
    CharArray,
    BooleanArray,
    /// A type referenced by name. The grammar never produces one.
    Named(String),
    /// Stands in for a type that failed to parse.
    Error,
}

impl Type {
    pub fn scalar(base: BaseType) -> Type {
        match base {
            BaseType::Int => Type::Int,
            BaseType::Float => Type::Float,
            BaseType::Char => Type::Char,
            BaseType::Boolean => Type::Boolean,
        }
    }

    pub fn array_of(base: BaseType) -> Type {
        match base {
            BaseType::Int => Type::IntArray,
            BaseType::Float => Type::FloatArray,
            BaseType::Char => Type::CharArray,
            BaseType::Boolean => Type::BooleanArray,
        }
    }

    /// Scalar type for scalars, element type for arrays.
    pub fn base(&self) -> Option<BaseType> {
        match self {
            Type::Int | Type::IntArray => Some(BaseType::Int),
            Type::Float | Type::FloatArray => Some(BaseType::Float),
            Type::Char | Type::CharArray => Some(BaseType::Char),
            Type::Boolean | Type::BooleanArray => Some(BaseType::Boolean),
            Type::Named(_) | Type::Error => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Type::IntArray | Type::FloatArray | Type::CharArray | Type::BooleanArray
        )
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::Char | Type::Boolean)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Named(name) => write!(f, "{}", name),
            Type::Error => write!(f, "<error>"),
            ty => match ty.base() {
                Some(base) if ty.is_array() => write!(f, "{}[]", base),
                Some(base) => write!(f, "{}", base),
                None => Ok(()),
            },
        }
    }
}
