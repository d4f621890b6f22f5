use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("char", TokenKind::Char);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("main", TokenKind::Main);
        map
    };

    /// Characters that always form a token on their own.
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('%', TokenKind::Percent);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map.insert('=', TokenKind::Assignment);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntConst,
    FloatConst,
    CharConst,
    BooleanConst,
    EOF,
    Unknown,

    And,           // &&
    Or,            // ||
    Equals,        // ==
    NotEquals,     // !=
    Less,          // <
    Greater,       // >
    LessEquals,    // <=
    GreaterEquals, // >=
    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    // Reserved
    Main,
    Int,
    Char,
    Float,
    Boolean,
    If,
    Else,
    While,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Comma,
    Assignment, // =
    Not,        // !

    // Never produced by the lexer; named in "expected ..." diagnostics only
    Statement,
    Expression,
    Operator,
    Type,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::IntConst => "INT_CONST",
            TokenKind::FloatConst => "FLOAT_CONST",
            TokenKind::CharConst => "CHAR_CONST",
            TokenKind::BooleanConst => "BOOLEAN_CONST",
            TokenKind::EOF => "EOF",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::Less => "LT",
            TokenKind::Greater => "RT",
            TokenKind::LessEquals => "LT_EQ",
            TokenKind::GreaterEquals => "RT_EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "TIMES",
            TokenKind::Slash => "DIV",
            TokenKind::Percent => "MOD",
            TokenKind::Main => "MAIN",
            TokenKind::Int => "INT",
            TokenKind::Char => "CHAR",
            TokenKind::Float => "FLOAT",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Semicolon => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Not => "NOT",
            TokenKind::Statement => "STATEMENT",
            TokenKind::Expression => "EXPRESSION",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Type => "TYPE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Literal payload carried by constant and identifier tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenAttribute {
    None,
    Int(i32),
    Float(f32),
    Char(char),
    Boolean(bool),
    Identifier(String),
}

impl Display for TokenAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenAttribute::None => write!(f, ""),
            TokenAttribute::Int(value) => write!(f, "{}", value),
            TokenAttribute::Float(value) => write!(f, "{:?}", value),
            TokenAttribute::Char(value) => write!(f, "{}", value),
            TokenAttribute::Boolean(value) => write!(f, "{}", value),
            TokenAttribute::Identifier(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: TokenAttribute,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({},{})",
            self.kind, self.position.line, self.position.column
        )?;
        if let TokenAttribute::None = self.literal {
            Ok(())
        } else {
            write!(f, ": {}", self.literal)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Name carried by an `ID` token.
    pub fn identifier(&self) -> Option<&str> {
        match &self.literal {
            TokenAttribute::Identifier(name) => Some(name),
            _ => None,
        }
    }
}
