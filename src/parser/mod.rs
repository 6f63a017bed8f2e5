//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a list of statements. It handles:
//!
//! - Statement parsing (`let`, `fn`, `if`/`else`, `while`, `return`)
//! - Flat binary expressions folded strictly left to right
//! - Fail-fast error reporting: the first violation ends the parse
//!
//! Expressions go through NUD (null denotation) and LED (left denotation)
//! tables. Every operator shares one binding power, so there is no
//! precedence between them.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
