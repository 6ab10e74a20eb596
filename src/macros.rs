//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PUNCT!` - Creates a single-character structural token
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "div".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a structural token (`<`, `>` or `/`) for the character `$ch`
/// found at byte offset `$pos`.
///
/// # Example
///
/// ```ignore
/// let token = MK_PUNCT!(TokenKind::TagOpen, '<', 0);
/// ```
#[macro_export]
macro_rules! MK_PUNCT {
    ($kind:expr, $ch:expr, $pos:expr) => {
        $crate::MK_TOKEN!(
            $kind,
            String::from($ch),
            $crate::Span::new($pos, $pos + $ch.len_utf8())
        )
    };
}
