use crate::{
    ast::{
        ast::Stmt,
        statements::{FunctionDecl, IfStatement, LetDecl, ReturnStatement, WhileStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    // Bare expressions take no trailing semicolon
    let expr = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(expr))
}

pub fn parse_let_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Let)?.span.start;

    let is_mutable = parser.current_token_kind() == TokenKind::Mut;
    if is_mutable {
        parser.advance();
    }

    let name = parser.expect(TokenKind::Identifier)?.lexeme;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Let(LetDecl {
        name,
        is_mutable,
        value,
        span: Span { start, end },
    }))
}

/// Parses `{ statement* }`, returning the statements and the span of the braces.
pub fn parse_block(parser: &mut Parser) -> Result<(Vec<Stmt>, Span), Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        statements.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok((statements, Span { start, end }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Fn)?.span.start;

    let name = parser.expect(TokenKind::Identifier)?.lexeme;

    // No parameter lists: only `()` is accepted
    parser.expect(TokenKind::OpenParen)?;
    parser.expect(TokenKind::CloseParen)?;

    let (body, body_span) = parse_block(parser)?;

    Ok(Stmt::Function(FunctionDecl {
        name,
        body,
        span: Span {
            start,
            end: body_span.end,
        },
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let (then_body, then_span) = parse_block(parser)?;

    let (else_body, end) = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        let (else_body, else_span) = parse_block(parser)?;
        (else_body, else_span.end)
    } else {
        (Vec::new(), then_span.end)
    };

    Ok(Stmt::If(IfStatement {
        condition,
        then_body,
        else_body,
        span: Span { start, end },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let (body, body_span) = parse_block(parser)?;

    Ok(Stmt::While(WhileStatement {
        condition,
        body,
        span: Span {
            start,
            end: body_span.end,
        },
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;

    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Return(ReturnStatement {
        value,
        span: Span { start, end },
    }))
}
