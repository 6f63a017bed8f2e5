use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Number Literal
/// Keeps the digits exactly as written (`007` stays `007`). Conversion to a
/// numeric value, and any overflow check, belongs to a later phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: String,
    pub span: Span,
}

/// String Literal
/// The raw text between the quotes; no escape processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

// OPERATIONS

/// Binary Expression
/// `left operator right`. Chains fold to the left with no precedence, so
/// `1 + 2 * 3` has `1 + 2` as its left side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    pub fn operator_symbol(&self) -> &str {
        &self.operator.lexeme
    }
}
