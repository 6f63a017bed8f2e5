//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for every token
//! - Comments and whitespace handling
//! - In-band `ERROR` tokens for text that is not part of the language

pub mod lexer;
pub mod tokens;
