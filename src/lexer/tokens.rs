use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Fn,
    Let,
    Mut,
    If,
    Else,
    While,
    Return,

    Identifier,
    Integer,
    String,

    Plus,
    Dash,
    Star,
    Slash,
    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Colon,
    Comma,

    EOF,
    Error,
}

impl TokenKind {
    /// The external name of the kind, e.g. `KW_FN` or `SEMICOLON`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Fn => "KW_FN",
            TokenKind::Let => "KW_LET",
            TokenKind::Mut => "KW_MUT",
            TokenKind::If => "KW_IF",
            TokenKind::Else => "KW_ELSE",
            TokenKind::While => "KW_WHILE",
            TokenKind::Return => "KW_RETURN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::LessEquals => "LTE",
            TokenKind::GreaterEquals => "GTE",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::EOF => "END_OF_FILE",
            TokenKind::Error => "ERROR",
        }
    }

    /// The fixed source text of the kind, if it has one.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::Fn => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::Mut => Some("mut"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::Return => Some("return"),
            TokenKind::Plus => Some("+"),
            TokenKind::Dash => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Assignment => Some("="),
            TokenKind::Equals => Some("=="),
            TokenKind::NotEquals => Some("!="),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::LessEquals => Some("<="),
            TokenKind::GreaterEquals => Some(">="),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenCurly => Some("{"),
            TokenKind::CloseCurly => Some("}"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Colon => Some(":"),
            TokenKind::Comma => Some(","),
            TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::String
            | TokenKind::EOF
            | TokenKind::Error => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Let
                | TokenKind::Mut
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Return
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Assignment
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEquals
                | TokenKind::GreaterEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text. String literals drop their quotes; an unterminated
    /// string keeps its opening quote.
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}  {}  {}",
            self.span.start.line, self.span.start.column, self.kind, self.lexeme
        )
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    /// Classifies an `ERROR` token. Returns `None` for every other kind.
    pub fn lex_error(&self) -> Option<Error> {
        if self.kind != TokenKind::Error {
            return None;
        }

        let error = match self.lexeme.strip_prefix('"') {
            Some(partial) => ErrorImpl::UnterminatedString {
                partial: partial.to_string(),
            },
            None => ErrorImpl::UnrecognisedCharacter {
                character: self.lexeme.clone(),
            },
        };

        Some(Error::new(error, self.span.start))
    }
}
