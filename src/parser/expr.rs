use crate::{
    ast::{
        ast::Identifier,
        expressions::{BinaryOp, Expr},
    },
    lexer::tokens::{TokenAttribute, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// `Exp ::= PrimaryExp BinopRHS`
pub fn parse_expr(parser: &mut Parser) -> Expr {
    if !parser.enter_nesting(TokenKind::Expression) {
        return Expr::Error;
    }

    let lhs = parse_primary_expr(parser);
    let expr = parse_binop_rhs(parser, BindingPower::Default.level(), lhs);

    parser.leave_nesting(1);
    expr
}

/// Literal, identifier, prefix operator or parenthesized expression. Anything else is reported,
/// consumed and replaced by [`Expr::Error`].
pub fn parse_primary_expr(parser: &mut Parser) -> Expr {
    let token_kind = parser.current_token_kind();

    match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud_fn) => nud_fn(parser),
        None => {
            parser.error(TokenKind::Expression);
            parser.advance();
            Expr::Error
        }
    }
}

fn current_level(parser: &Parser) -> i32 {
    parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .map_or(-1, BindingPower::level)
}

/// Folds operators of level `level` or higher into `lhs`.
pub fn parse_binop_rhs(parser: &mut Parser, level: i32, mut lhs: Expr) -> Expr {
    let mut folded = 0;

    loop {
        let token_kind = parser.current_token_kind();
        let Some(bp) = parser.get_bp_lookup().get(&token_kind).copied() else {
            break;
        };
        if bp.level() < level {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        // Each fold nests `lhs` one level deeper.
        if !parser.enter_nesting(TokenKind::Expression) {
            break;
        }
        folded += 1;
        lhs = led_fn(parser, lhs, bp);
    }

    parser.leave_nesting(folded);
    lhs
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Expr {
    let Some(operator) = BinaryOp::from_token(parser.current_token_kind()) else {
        parser.error(TokenKind::Operator);
        parser.advance();
        return left;
    };
    parser.advance();

    let mut right = parse_primary_expr(parser);

    // A tighter operator after the operand claims it first.
    if current_level(parser) > bp.level() {
        right = parse_binop_rhs(parser, bp.level() + 1, right);
    }

    Expr::binary(left, operator, right)
}

/// Postfix `[ Exp ]`.
pub fn parse_array_lookup_expr(parser: &mut Parser, array: Expr, _bp: BindingPower) -> Expr {
    parser.advance();
    let index = parse_expr(parser);
    parser.expect(TokenKind::CloseBracket);

    Expr::array_lookup(array, index)
}

pub fn parse_literal_expr(parser: &mut Parser) -> Expr {
    let token = parser.advance();

    match token.literal {
        TokenAttribute::Int(value) => Expr::Int(value),
        TokenAttribute::Float(value) => Expr::Float(value),
        TokenAttribute::Char(value) => Expr::Char(value),
        TokenAttribute::Boolean(value) => Expr::Boolean(value),
        TokenAttribute::Identifier(_) | TokenAttribute::None => Expr::Error,
    }
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Expr {
    let token = parser.advance();
    let identifier = Identifier::new(token.identifier().unwrap_or_default());

    parser.record_identifier(identifier.clone());
    Expr::Identifier(identifier)
}

/// `!` and `-` apply to the whole expression that follows them.
pub fn parse_prefix_expr(parser: &mut Parser) -> Expr {
    let operator = parser.advance();
    let operand = Box::new(parse_expr(parser));

    match operator.kind {
        TokenKind::Dash => Expr::Negate(operand),
        _ => Expr::Not(operand),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Expr {
    parser.advance();
    let expr = parse_expr(parser);
    parser.expect(TokenKind::CloseParen);

    expr
}
