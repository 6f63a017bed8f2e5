use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, Identifier, NumberLiteral, StringLiteral},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected(Expected::Expression));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than bp, keep folding into lhs
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if operator_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.advance();
            Ok(Expr::Number(NumberLiteral {
                value: token.lexeme.clone(),
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance();
            Ok(Expr::String(StringLiteral {
                value: token.lexeme.clone(),
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Identifier(Identifier {
                name: token.lexeme.clone(),
                span: token.span,
            }))
        }
        _ => Err(parser.unexpected(Expected::Expression)),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    // Parsing the rhs at the operator's own power stops it at the next
    // operator, so the outer loop folds that one onto the whole lhs.
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        operator: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
