use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, Identifier, NumberLiteral, StringLiteral},
    statements::{FunctionDecl, IfStatement, LetDecl, ReturnStatement, WhileStatement},
};

/// Expressions
///
/// Every expression kind in the tree. Each node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberLiteral),
    String(StringLiteral),
    Identifier(Identifier),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(number) => &number.span,
            Expr::String(string) => &string.span,
            Expr::Identifier(identifier) => &identifier.span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    /// Renders the expression as an indented tree, two spaces per level.
    pub fn render(&self, indent: usize) -> String {
        let mut lines = Vec::new();
        self.render_into(indent, &mut lines);
        lines.join("\n")
    }

    fn render_into(&self, indent: usize, lines: &mut Vec<String>) {
        match self {
            Expr::Number(number) => {
                lines.push(format!("{}NumberLiteral({})", indent_str(indent), number.value))
            }
            Expr::String(string) => lines.push(format!(
                "{}StringLiteral(\"{}\")",
                indent_str(indent),
                string.value
            )),
            Expr::Identifier(identifier) => {
                lines.push(format!("{}Identifier({})", indent_str(indent), identifier.name))
            }
            Expr::Binary(binary) => {
                lines.push(format!(
                    "{}BinaryExpr({})",
                    indent_str(indent),
                    binary.operator_symbol()
                ));
                binary.left.render_into(indent + 1, lines);
                binary.right.render_into(indent + 1, lines);
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

/// Statements
///
/// A program is a `Vec<Stmt>`. Bare expressions are statements too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expression(Expr),
    Let(LetDecl),
    Function(FunctionDecl),
    If(IfStatement),
    While(WhileStatement),
    Return(ReturnStatement),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(expression) => expression.get_span(),
            Stmt::Let(let_decl) => &let_decl.span,
            Stmt::Function(function) => &function.span,
            Stmt::If(if_stmt) => &if_stmt.span,
            Stmt::While(while_stmt) => &while_stmt.span,
            Stmt::Return(return_stmt) => &return_stmt.span,
        }
    }

    /// Renders the statement as an indented tree, two spaces per level.
    pub fn render(&self, indent: usize) -> String {
        let mut lines = Vec::new();
        self.render_into(indent, &mut lines);
        lines.join("\n")
    }

    fn render_into(&self, indent: usize, lines: &mut Vec<String>) {
        match self {
            Stmt::Expression(expression) => expression.render_into(indent, lines),
            Stmt::Let(let_decl) => {
                let mut_str = if let_decl.is_mutable { "mut " } else { "" };
                lines.push(format!(
                    "{}LetDecl({}{})",
                    indent_str(indent),
                    mut_str,
                    let_decl.name
                ));
                let_decl.value.render_into(indent + 1, lines);
            }
            Stmt::Function(function) => {
                lines.push(format!("{}FunctionDecl({})", indent_str(indent), function.name));
                render_body(&function.body, indent + 1, lines);
            }
            Stmt::If(if_stmt) => {
                lines.push(format!("{}IfStatement", indent_str(indent)));
                lines.push(format!("{}Condition:", indent_str(indent + 1)));
                if_stmt.condition.render_into(indent + 2, lines);
                lines.push(format!("{}Then:", indent_str(indent + 1)));
                render_body(&if_stmt.then_body, indent + 2, lines);
                // An absent else and an empty else render the same way.
                if !if_stmt.else_body.is_empty() {
                    lines.push(format!("{}Else:", indent_str(indent + 1)));
                    render_body(&if_stmt.else_body, indent + 2, lines);
                }
            }
            Stmt::While(while_stmt) => {
                lines.push(format!("{}WhileStatement", indent_str(indent)));
                lines.push(format!("{}Condition:", indent_str(indent + 1)));
                while_stmt.condition.render_into(indent + 2, lines);
                lines.push(format!("{}Body:", indent_str(indent + 1)));
                render_body(&while_stmt.body, indent + 2, lines);
            }
            Stmt::Return(return_stmt) => {
                lines.push(format!("{}ReturnStatement", indent_str(indent)));
                return_stmt.value.render_into(indent + 1, lines);
            }
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

/// Renders every top-level statement, one tree after another.
pub fn render_program(program: &[Stmt]) -> String {
    program
        .iter()
        .map(|stmt| stmt.render(0))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_body(body: &[Stmt], indent: usize, lines: &mut Vec<String>) {
    for stmt in body {
        stmt.render_into(indent, lines);
    }
}

fn indent_str(level: usize) -> String {
    "  ".repeat(level)
}
