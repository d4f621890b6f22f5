use crate::{
    ast::{
        ast::{Identifier, VarDecl, VarDeclList},
        types::{BaseType, Type},
    },
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

fn base_type(kind: TokenKind) -> Option<BaseType> {
    match kind {
        TokenKind::Int => Some(BaseType::Int),
        TokenKind::Float => Some(BaseType::Float),
        TokenKind::Char => Some(BaseType::Char),
        TokenKind::Boolean => Some(BaseType::Boolean),
        _ => None,
    }
}

pub fn is_type_start(kind: TokenKind) -> bool {
    base_type(kind).is_some()
}

/// `Declarations ::= { VarDeclGroup }`
pub fn parse_declarations(parser: &mut Parser) -> Vec<VarDeclList> {
    let mut declarations = vec![];

    while is_type_start(parser.current_token_kind()) {
        declarations.push(parse_var_decl_list(parser));
    }

    declarations
}

/// `VarDeclGroup ::= Type Identifier { ',' Identifier } ';'`
///
/// A missing identifier is reported and leaves no declaration behind.
pub fn parse_var_decl_list(parser: &mut Parser) -> VarDeclList {
    let ty = parse_type(parser);
    let mut decls = vec![];

    if let Some(id) = parse_identifier(parser) {
        decls.push(VarDecl::new(ty.clone(), id));
    }

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        if let Some(id) = parse_identifier(parser) {
            decls.push(VarDecl::new(ty.clone(), id));
        }
    }

    for decl in &decls {
        parser.record_declaration(decl.clone());
    }

    parser.expect(TokenKind::Semicolon);

    VarDeclList { decls }
}

/// `Type ::= ('int'|'float'|'boolean'|'char') [ '[' IntLiteral ']' ]`
pub fn parse_type(parser: &mut Parser) -> Type {
    let Some(base) = base_type(parser.current_token_kind()) else {
        parser.error(TokenKind::Type);
        return Type::Error;
    };
    parser.advance();

    if parser.current_token_kind() != TokenKind::OpenBracket {
        return Type::scalar(base);
    }
    parser.advance();

    if parser.expect(TokenKind::IntConst) && parser.current_token_kind() == TokenKind::CloseBracket
    {
        parser.advance();
        return Type::array_of(base);
    }

    parser.error(TokenKind::Type);
    Type::Error
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Identifier> {
    if parser.current_token_kind() != TokenKind::Identifier {
        parser.error(TokenKind::Identifier);
        return None;
    }

    let token = parser.advance();
    Some(Identifier::new(token.identifier().unwrap_or_default()))
}
