//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts JSX-like markup
//! into a stream of tokens. It handles:
//!
//! - Tag delimiters (`<`, `>`, `/`) and tag names
//! - Attribute names with quoted or `{...}` values
//! - Text runs between tags
//! - Token position tracking for error reporting

pub mod lexer;
pub mod state;
pub mod tokens;
