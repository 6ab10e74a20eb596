#![allow(clippy::module_inception)]

//! Lexer for a restricted, JSX-like markup.
//!
//! The input is consumed one character at a time by a finite-state automaton
//! and turned into an ordered list of tokens (tag delimiters, tag names,
//! attribute names and values, text runs).
//!
//! ```ignore
//! let tokens = jsx_lexer::tokenize("<div>Hello</div>")?;
//! assert_eq!(tokens.len(), 8);
//! ```

use std::fmt::Display;

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod render;

pub use config::{LexerConfig, TrailingText};
pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::lexer::{tokenize, tokenize_partial, tokenize_with, validate, Lexer};
pub use lexer::tokens::{Token, TokenKind};

/// Byte offset into the lexed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }

    pub fn offset(&self) -> usize {
        self.0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the text of that line and the column
/// (in characters) of `position` inside `source`.
///
/// A position at the very end of the input maps to the column just past the
/// last character of the final line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line[..pos - start].chars().count();
            return (line_number, line.trim_end_matches(['\r', '\n']).to_string(), column);
        }

        start = end;
        line_number += 1;
    }

    // End of input: report the last line, or an empty first line.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            let line = line.trim_end_matches('\r');
            (line_number - 1, line.to_string(), line.chars().count())
        }
        _ => (line_number, String::new(), 0),
    }
}
