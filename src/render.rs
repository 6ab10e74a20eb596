//! Output formats for token lists.

use std::fmt::Write;

use crate::lexer::tokens::{Token, TokenKind};

/// Pretty-printed JSON array of `{"type": ..., "value": ...}` objects.
pub fn to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Line-oriented listing, one token per line, stable for diffing the output
/// of two lexers against each other:
///
/// ```text
/// TOKENS_COUNT:3
/// TOKEN_0:TagOpen:<
/// TOKEN_1:Identifier:div
/// TOKEN_2:TagClose:>
/// ```
pub fn to_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TOKENS_COUNT:{}", tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "TOKEN_{}:{}:{}", i, token.kind, token.value);
    }

    out
}

/// Rebuilds the markup a token list was produced from, putting back the
/// separators and delimiters that are not part of any token's value.
pub fn to_source(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        match token.kind {
            TokenKind::TagOpen | TokenKind::TagClose | TokenKind::Slash => {
                out.push_str(&token.value)
            }
            TokenKind::Identifier | TokenKind::Text => out.push_str(&token.value),
            TokenKind::AttributeName => {
                out.push(' ');
                out.push_str(&token.value);
                out.push('=');
            }
            TokenKind::AttributeStringValue => {
                out.push('"');
                out.push_str(&token.value);
                out.push('"');
            }
            TokenKind::AttributeExpressionValue => {
                out.push('{');
                out.push_str(&token.value);
                out.push('}');
            }
        }
    }

    out
}
