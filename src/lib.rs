#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source. Columns count characters,
/// so a tab is a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the line `position` points into, without its line ending.
///
/// The position one past a trailing newline sits on a line that has no text;
/// that line is reported as empty.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    let index = (position.line as usize).checked_sub(1)?;
    let line_count = source.lines().count();

    if index < line_count {
        source.lines().nth(index)
    } else if index == line_count && (source.is_empty() || source.ends_with('\n')) {
        Some("")
    } else {
        None
    }
}


/// Renders an error as a caret diagnostic against the source it came from.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> main.toy
          |
        1 | let x = 5
          | ---------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut lines = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!(
            "Error: {} ({})",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    lines.push(format!("-> {}", file));
    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    lines.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n")
}

/// Prints a caret diagnostic for `error` to stderr.
pub fn display_error(error: &Error, source: &str, file: &str) {
    eprintln!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
