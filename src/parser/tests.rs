//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Let declarations
//! - Function declarations
//! - Flat binary expressions
//! - Control flow statements
//! - Fail-fast syntax errors

use rstest::rstest;

use super::parser::parse;
use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::BinaryExpr,
    },
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    parse(&tokenize(source))
}

fn parse_ok(source: &str) -> Vec<Stmt> {
    match parse_source(source) {
        Ok(program) => program,
        Err(error) => panic!("failed to parse {:?}: {}", source, error),
    }
}

fn as_binary(expr: &Expr) -> &BinaryExpr {
    match expr {
        Expr::Binary(binary) => binary,
        other => panic!("expected binary expression, got {:?}", other),
    }
}

fn assert_number(expr: &Expr, expected: &str) {
    match expr {
        Expr::Number(number) => assert_eq!(number.value, expected),
        other => panic!("expected number {}, got {:?}", expected, other),
    }
}

fn assert_identifier(expr: &Expr, expected: &str) {
    match expr {
        Expr::Identifier(identifier) => assert_eq!(identifier.name, expected),
        other => panic!("expected identifier {}, got {:?}", expected, other),
    }
}

#[test]
fn test_parse_let_mut_declaration() {
    let program = parse_ok("let mut x = 5;");

    assert_eq!(program.len(), 1);
    let Stmt::Let(let_decl) = &program[0] else {
        panic!("expected let declaration, got {:?}", program[0]);
    };
    assert_eq!(let_decl.name, "x");
    assert!(let_decl.is_mutable);
    assert_number(&let_decl.value, "5");
    assert_eq!(
        let_decl.span,
        Span {
            start: Position::new(1, 1),
            end: Position::new(1, 15)
        }
    );
}

#[test]
fn test_parse_immutable_let_declaration() {
    let program = parse_ok("let name = \"toy\";");

    let Stmt::Let(let_decl) = &program[0] else {
        panic!("expected let declaration");
    };
    assert!(!let_decl.is_mutable);
    match &let_decl.value {
        Expr::String(string) => assert_eq!(string.value, "toy"),
        other => panic!("expected string literal, got {:?}", other),
    }
}

#[test]
fn test_number_literal_keeps_digits() {
    let program = parse_ok("let x = 007;");

    let Stmt::Let(let_decl) = &program[0] else {
        panic!("expected let declaration");
    };
    assert_number(&let_decl.value, "007");
}

#[test]
fn test_flat_expression_folding() {
    let program = parse_ok("1 + 2 * 3");

    assert_eq!(program.len(), 1);
    let Stmt::Expression(expr) = &program[0] else {
        panic!("expected expression statement");
    };

    let outer = as_binary(expr);
    assert_eq!(outer.operator_symbol(), "*");
    assert_number(&outer.right, "3");

    let inner = as_binary(&outer.left);
    assert_eq!(inner.operator_symbol(), "+");
    assert_number(&inner.left, "1");
    assert_number(&inner.right, "2");
}

#[test]
fn test_comparison_has_no_precedence_either() {
    let program = parse_ok("a < b + c");

    let Stmt::Expression(expr) = &program[0] else {
        panic!("expected expression statement");
    };
    let outer = as_binary(expr);
    assert_eq!(outer.operator.kind, TokenKind::Plus);
    assert_identifier(&outer.right, "c");

    let inner = as_binary(&outer.left);
    assert_eq!(inner.operator.kind, TokenKind::Less);
    assert_identifier(&inner.left, "a");
    assert_identifier(&inner.right, "b");
}

#[test]
fn test_long_chain_folds_left() {
    let program = parse_ok("a - b - c - d");

    let Stmt::Expression(expr) = &program[0] else {
        panic!("expected expression statement");
    };

    let mut depth = 0;
    let mut current = expr;
    while let Expr::Binary(binary) = current {
        assert!(!matches!(*binary.right, Expr::Binary(_)));
        current = binary.left.as_ref();
        depth += 1;
    }
    assert_eq!(depth, 3);
    assert_identifier(current, "a");
}

#[test]
fn test_assignment_is_a_binary_expression() {
    let program = parse_ok("x = x + 1");

    let Stmt::Expression(expr) = &program[0] else {
        panic!("expected expression statement");
    };
    let outer = as_binary(expr);
    assert_eq!(outer.operator_symbol(), "+");
    let inner = as_binary(&outer.left);
    assert_eq!(inner.operator_symbol(), "=");
}

#[test]
fn test_bare_expressions_need_no_semicolon() {
    let program = parse_ok("x y 3");

    assert_eq!(program.len(), 3);
    assert!(program.iter().all(|stmt| matches!(stmt, Stmt::Expression(_))));
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_ok("fn main() { let x = 1; return x; }");

    assert_eq!(program.len(), 1);
    let Stmt::Function(function) = &program[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.name, "main");
    assert_eq!(function.body.len(), 2);
    assert!(matches!(function.body[0], Stmt::Let(_)));
    assert!(matches!(function.body[1], Stmt::Return(_)));
}

#[test]
fn test_parse_empty_function() {
    let program = parse_ok("fn noop() {}");

    let Stmt::Function(function) = &program[0] else {
        panic!("expected function declaration");
    };
    assert!(function.body.is_empty());
}

#[test]
fn test_function_parameters_are_rejected() {
    let error = parse_source("fn add(a) { }").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::Token(TokenKind::CloseParen),
            found_kind: TokenKind::Identifier,
            found: String::from("a"),
        }
    );
    assert_eq!(error.get_position(), Position::new(1, 8));
}

#[test]
fn test_function_requires_name() {
    let error = parse_source("fn () {}").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::Token(TokenKind::Identifier),
            found_kind: TokenKind::OpenParen,
            found: String::from("("),
        }
    );
}

#[test]
fn test_parse_if_statement() {
    let program = parse_ok("if x > 5 { y }");

    let Stmt::If(if_stmt) = &program[0] else {
        panic!("expected if statement");
    };
    let condition = as_binary(&if_stmt.condition);
    assert_eq!(condition.operator.kind, TokenKind::Greater);
    assert_eq!(if_stmt.then_body.len(), 1);
    assert!(if_stmt.else_body.is_empty());
}

#[test]
fn test_empty_else_matches_missing_else() {
    // An empty else body and no else at all produce the same shape
    let with_else = parse_ok("if x { } else { }");
    let without_else = parse_ok("if x { }");

    let Stmt::If(with_else) = &with_else[0] else {
        panic!("expected if statement");
    };
    let Stmt::If(without_else) = &without_else[0] else {
        panic!("expected if statement");
    };

    assert!(with_else.then_body.is_empty());
    assert!(with_else.else_body.is_empty());
    assert_eq!(with_else.then_body, without_else.then_body);
    assert_eq!(with_else.else_body, without_else.else_body);
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_ok("if a == b { return 1; } else { return 2; }");

    let Stmt::If(if_stmt) = &program[0] else {
        panic!("expected if statement");
    };
    assert_eq!(if_stmt.then_body.len(), 1);
    assert_eq!(if_stmt.else_body.len(), 1);
    assert_eq!(if_stmt.span.end, Position::new(1, 43));
}

#[test]
fn test_parse_while_loop() {
    let program = parse_ok("while count < 10 { count = count + 1 }");

    let Stmt::While(while_stmt) = &program[0] else {
        panic!("expected while statement");
    };
    assert_eq!(as_binary(&while_stmt.condition).operator_symbol(), "<");
    assert_eq!(while_stmt.body.len(), 1);
}

#[test]
fn test_parse_return_statement() {
    let program = parse_ok("return a + 1;");

    let Stmt::Return(return_stmt) = &program[0] else {
        panic!("expected return statement");
    };
    assert_eq!(as_binary(&return_stmt.value).operator_symbol(), "+");
}

#[test]
fn test_parse_nested_blocks() {
    let program = parse_ok("fn main() { while x { if y { let z = 1; } } }");

    let Stmt::Function(function) = &program[0] else {
        panic!("expected function declaration");
    };
    let Stmt::While(while_stmt) = &function.body[0] else {
        panic!("expected while statement");
    };
    let Stmt::If(if_stmt) = &while_stmt.body[0] else {
        panic!("expected if statement");
    };
    assert!(matches!(if_stmt.then_body[0], Stmt::Let(_)));
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_ok("let x = 10; let y = 20; let z = x + y;");

    assert_eq!(program.len(), 3);
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("  // nothing here\n").is_empty());
}

#[test]
fn test_missing_semicolon_reports_end_of_input() {
    let error = parse_source("let x = 5").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::Semicolon),
        }
    );
    assert_eq!(error.get_position(), Position::new(1, 10));
    assert_eq!(
        error.to_string(),
        "1:10: expected SEMICOLON `;` but reached end of input"
    );
}

#[test]
fn test_missing_identifier_in_let() {
    let error = parse_source("let = 42;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::Token(TokenKind::Identifier),
            found_kind: TokenKind::Assignment,
            found: String::from("="),
        }
    );
}

#[test]
fn test_unclosed_block() {
    let error = parse_source("fn main() { let x = 1;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::CloseCurly),
        }
    );
}

#[rstest]
#[case("let x = ;", TokenKind::Semicolon)]
#[case("return };", TokenKind::CloseCurly)]
#[case("1 + (", TokenKind::OpenParen)]
#[case("while { }", TokenKind::OpenCurly)]
#[case("else { }", TokenKind::Else)]
fn test_expression_expected(#[case] source: &str, #[case] found_kind: TokenKind) {
    let error = parse_source(source).unwrap_err();

    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken {
            expected,
            found_kind: kind,
            ..
        } => {
            assert_eq!(*expected, Expected::Expression);
            assert_eq!(*kind, found_kind);
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_operator_at_end_of_input() {
    let error = parse_source("x +").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: Expected::Expression,
        }
    );
}

#[test]
fn test_error_token_stops_the_parse() {
    let error = parse_source("let s = \"open;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::Expression,
            found_kind: TokenKind::Error,
            found: String::from("\"open;"),
        }
    );
    assert_eq!(error.get_position(), Position::new(1, 9));
}

#[test]
fn test_failure_after_valid_statements_returns_no_ast() {
    let result = parse_source("let a = 1; let b = 2; let c 3;");

    assert!(result.is_err());
}

#[test]
fn test_parse_without_eof_token() {
    let mut tokens = tokenize("let x = 1");
    tokens.pop();

    let error = parse(&tokens).unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::Semicolon),
        }
    );
    assert_eq!(error.get_position(), Position::new(1, 10));
}

#[test]
fn test_parse_empty_token_slice() {
    let tokens: Vec<Token> = Vec::new();

    assert!(parse(&tokens).unwrap().is_empty());
}
