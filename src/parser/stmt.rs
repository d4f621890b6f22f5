use crate::{
    ast::{
        ast::Identifier,
        expressions::Expr,
        statements::{ArrayAssignStmt, Assignment, BlockStmt, IfStmt, Stmt, WhileStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Tokens that open a statement in a statement list. `;` and `(` are accepted here only to be
/// reported and skipped by [`parse_stmt`].
pub fn is_statement_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Semicolon
            | TokenKind::If
            | TokenKind::While
            | TokenKind::OpenParen
            | TokenKind::OpenCurly
            | TokenKind::Identifier
    )
}

/// `StatementList ::= { Statement }`
pub fn parse_stmt_list(parser: &mut Parser) -> Vec<Stmt> {
    let mut body = vec![];

    while is_statement_start(parser.current_token_kind()) {
        body.push(parse_stmt(parser));
    }

    body
}

pub fn parse_stmt(parser: &mut Parser) -> Stmt {
    if !parser.enter_nesting(TokenKind::Statement) {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
        return Stmt::Error;
    }

    let token_kind = parser.current_token_kind();
    let stmt = match parser.get_stmt_lookup().get(&token_kind).copied() {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_unknown_stmt(parser),
    };

    parser.leave_nesting(1);
    stmt
}

/// Reports the current token, consumes it and leaves a placeholder.
fn parse_unknown_stmt(parser: &mut Parser) -> Stmt {
    parser.error(TokenKind::Statement);
    parser.advance();
    Stmt::Error
}

/// `'(' Exp ')'` of an `if` or `while`. The condition is recorded for the type checker.
fn parse_condition(parser: &mut Parser) -> Expr {
    if !parser.expect(TokenKind::OpenParen) {
        parser.skip_to(&[
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
        ]);
    }

    let condition = parse_expr(parser);
    parser.record_condition(condition.clone());

    if !parser.expect(TokenKind::CloseParen) {
        parser.skip_to(&[
            TokenKind::OpenCurly,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
        ]);
    }

    condition
}

/// `If ::= 'if' '(' Exp ')' Statement [ 'else' Statement ]`
pub fn parse_if_stmt(parser: &mut Parser) -> Stmt {
    parser.advance();

    let condition = parse_condition(parser);
    let then_body = Box::new(parse_stmt(parser));

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)))
    } else {
        None
    };

    Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
    })
}

/// `While ::= 'while' '(' Exp ')' Statement`
pub fn parse_while_stmt(parser: &mut Parser) -> Stmt {
    parser.advance();

    let condition = parse_condition(parser);
    let body = Box::new(parse_stmt(parser));

    Stmt::While(WhileStmt { condition, body })
}

/// `Block ::= '{' { Statement } '}'`
pub fn parse_block_stmt(parser: &mut Parser) -> Stmt {
    parser.advance();

    let mut body = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        body.push(parse_stmt(parser));
    }

    if !parser.expect(TokenKind::CloseCurly) {
        parser.skip_to(&[TokenKind::CloseCurly, TokenKind::Semicolon]);
    }

    Stmt::Block(BlockStmt { body })
}

/// `Identifier '=' Exp ';'` or `Identifier '[' Exp ']' '=' Exp ';'`
pub fn parse_identifier_stmt(parser: &mut Parser) -> Stmt {
    let token = parser.advance();
    let id = Identifier::new(token.identifier().unwrap_or_default());
    parser.record_identifier(id.clone());

    match parser.current_token_kind() {
        TokenKind::Assignment => {
            parser.advance();
            let value = parse_expr(parser);
            parser.expect(TokenKind::Semicolon);

            let assignment = Assignment { id, value };
            parser.record_assignment(assignment.clone());
            Stmt::Assign(assignment)
        }
        TokenKind::OpenBracket => {
            parser.advance();
            let index = parse_expr(parser);

            if !parser.expect(TokenKind::CloseBracket) {
                parser.skip_to(&[TokenKind::Assignment, TokenKind::Semicolon]);
            }
            if !parser.expect(TokenKind::Assignment) {
                parser.skip_to(&[TokenKind::Semicolon]);
            }

            let value = parse_expr(parser);
            parser.expect(TokenKind::Semicolon);

            // The target is also checked like a plain assignment to the whole array.
            parser.record_assignment(Assignment {
                id: id.clone(),
                value: value.clone(),
            });
            Stmt::ArrayAssign(ArrayAssignStmt { id, index, value })
        }
        _ => parse_unknown_stmt(parser),
    }
}
