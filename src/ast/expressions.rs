use crate::lexer::tokens::TokenKind;

use super::{ast::Identifier, types::BaseType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    MoreThan,
    MoreEqual,
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            TokenKind::Equals => Some(BinaryOp::Equal),
            TokenKind::NotEquals => Some(BinaryOp::NotEqual),
            TokenKind::Less => Some(BinaryOp::LessThan),
            TokenKind::LessEquals => Some(BinaryOp::LessEqual),
            TokenKind::Greater => Some(BinaryOp::MoreThan),
            TokenKind::GreaterEquals => Some(BinaryOp::MoreEqual),
            TokenKind::Plus => Some(BinaryOp::Plus),
            TokenKind::Dash => Some(BinaryOp::Minus),
            TokenKind::Star => Some(BinaryOp::Times),
            TokenKind::Slash => Some(BinaryOp::Divide),
            TokenKind::Percent => Some(BinaryOp::Modulo),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::MoreThan => ">",
            BinaryOp::MoreEqual => ">=",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
        }
    }

    pub fn is_relational(&self) -> bool {
        match self {
            BinaryOp::Equal
            | BinaryOp::NotEqual
            | BinaryOp::LessThan
            | BinaryOp::LessEqual
            | BinaryOp::MoreThan
            | BinaryOp::MoreEqual => true,
            BinaryOp::And
            | BinaryOp::Or
            | BinaryOp::Plus
            | BinaryOp::Minus
            | BinaryOp::Times
            | BinaryOp::Divide
            | BinaryOp::Modulo => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLookupExpr {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals
    Int(i32),
    Float(f32),
    Char(char),
    Boolean(bool),

    Identifier(Identifier),

    Not(Box<Expr>),
    Negate(Box<Expr>),
    Binary(BinaryExpr),

    ArrayLookup(ArrayLookupExpr),
    ArrayLength(Box<Expr>),
    NewArray(Box<Expr>),

    /// Stands in for an expression that failed to parse.
    Error,
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOp, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn array_lookup(array: Expr, index: Expr) -> Expr {
        Expr::ArrayLookup(ArrayLookupExpr {
            array: Box::new(array),
            index: Box::new(index),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Expr {
        Expr::Identifier(Identifier::new(name))
    }

    /// Type of a literal expression, `None` for everything else.
    pub fn literal_type(&self) -> Option<BaseType> {
        match self {
            Expr::Int(_) => Some(BaseType::Int),
            Expr::Float(_) => Some(BaseType::Float),
            Expr::Char(_) => Some(BaseType::Char),
            Expr::Boolean(_) => Some(BaseType::Boolean),
            _ => None,
        }
    }
}
