use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operators share one level, which is what makes chains fold to the left
/// with no precedence between `+` and `*` or `<`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Binary,
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Arithmetic
    parser.led(TokenKind::Plus, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Binary, parse_binary_expr);

    // Assignment folds like any other operator
    parser.led(TokenKind::Assignment, BindingPower::Binary, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Equals, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Binary, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Binary, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_decl_stmt);
    parser.stmt(TokenKind::Fn, parse_fn_decl_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
