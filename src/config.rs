//! Per-call lexer configuration.

/// What to do with text still being collected when the input ends,
/// e.g. the `tail` in `<p>x</p>tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingText {
    /// Emit it as a final `Text` token.
    #[default]
    Flush,
    /// Fail with `TruncatedInput`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    pub trailing_text: TrailingText,
}

impl LexerConfig {
    /// Configuration that treats any unfinished token at end of input as an error.
    pub fn strict() -> Self {
        LexerConfig {
            trailing_text: TrailingText::Reject,
        }
    }
}
