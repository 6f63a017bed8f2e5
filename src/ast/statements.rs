use crate::Span;

use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetDecl {
    pub name: String,
    pub is_mutable: bool,
    pub value: Expr,
    pub span: Span,
}

/// `fn name() { ... }`. Functions take no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `if condition { ... } else { ... }`
///
/// A missing `else` and an empty `else { }` both leave `else_body` empty;
/// the two cannot be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStatement {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Expr,
    pub span: Span,
}
