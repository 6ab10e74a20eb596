//! The lexer's transition table.
//!
//! Every step of the automaton is a pure function of the current state and
//! the current character, so the whole table can be inspected and tested
//! without running the lexer over an input.

use crate::{
    config::{LexerConfig, TrailingText},
    errors::errors::ErrorImpl,
};

use super::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    Start,
    AfterOpen,
    InIdentifier,
    AwaitingAttribute,
    InAttributeName,
    AwaitingAttributeValue,
    InStringValue,
    InExpressionValue,
    AfterAttributeValue,
    AfterTagClose,
    InText,
}

impl LexState {
    pub const ALL: [LexState; 11] = [
        LexState::Start,
        LexState::AfterOpen,
        LexState::InIdentifier,
        LexState::AwaitingAttribute,
        LexState::InAttributeName,
        LexState::AwaitingAttributeValue,
        LexState::InStringValue,
        LexState::InExpressionValue,
        LexState::AfterAttributeValue,
        LexState::AfterTagClose,
        LexState::InText,
    ];

    /// Short description used in error tips, e.g. "input ended while reading a tag name".
    pub fn describe(&self) -> &'static str {
        match self {
            LexState::Start => "waiting for the first `<`",
            LexState::AfterOpen => "expecting a tag name after `<`",
            LexState::InIdentifier => "reading a tag name",
            LexState::AwaitingAttribute => "expecting an attribute name",
            LexState::InAttributeName => "reading an attribute name",
            LexState::AwaitingAttributeValue => "expecting an attribute value after `=`",
            LexState::InStringValue => "inside a quoted attribute value",
            LexState::InExpressionValue => "inside a `{...}` attribute value",
            LexState::AfterAttributeValue => "expecting a space or `>` after an attribute value",
            LexState::AfterTagClose => "after `>`",
            LexState::InText => "reading text",
        }
    }
}

/// What a single transition does with the current character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The character is a separator and produces nothing.
    Skip,
    /// Emit a structural token whose value is the character itself.
    Emit(TokenKind),
    /// Start accumulating a token of this kind; the character is its first.
    Begin(TokenKind),
    /// Start accumulating a token of this kind; the character is an opening
    /// delimiter and is not part of the value.
    Open(TokenKind),
    /// Append the character to the token being accumulated.
    Extend,
    /// Emit the accumulated token; the character is a closing delimiter or separator.
    Flush,
    /// Emit the accumulated token, then a structural token for the character.
    FlushThen(TokenKind),
}

/// What happens to a state when the input runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndAction {
    /// Nothing is pending.
    Done,
    /// Emit the accumulated token.
    Flush,
}

/// Identifier, attribute name and attribute value characters.
pub fn is_name_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

pub fn transition(state: LexState, ch: char) -> Result<(LexState, Action), ErrorImpl> {
    use Action::*;
    use LexState::*;

    let next = match state {
        Start => match ch {
            '<' => (AfterOpen, Emit(TokenKind::TagOpen)),
            _ => return Err(ErrorImpl::InvalidStart { found: Some(ch) }),
        },
        AfterOpen => match ch {
            '/' => (AfterOpen, Emit(TokenKind::Slash)),
            c if is_name_char(c) => (InIdentifier, Begin(TokenKind::Identifier)),
            _ => return Err(ErrorImpl::InvalidTagStart { found: ch }),
        },
        InIdentifier => match ch {
            ' ' => (AwaitingAttribute, Flush),
            '>' => (AfterTagClose, FlushThen(TokenKind::TagClose)),
            c if is_name_char(c) => (InIdentifier, Extend),
            _ => return Err(ErrorImpl::InvalidIdentifierChar { found: ch }),
        },
        AwaitingAttribute => match ch {
            c if is_name_char(c) => (InAttributeName, Begin(TokenKind::AttributeName)),
            _ => return Err(ErrorImpl::InvalidAttributeStart { found: ch }),
        },
        InAttributeName => match ch {
            '=' => (AwaitingAttributeValue, Flush),
            c if is_name_char(c) => (InAttributeName, Extend),
            _ => return Err(ErrorImpl::InvalidAttributeNameChar { found: ch }),
        },
        AwaitingAttributeValue => match ch {
            '"' => (InStringValue, Open(TokenKind::AttributeStringValue)),
            '{' => (InExpressionValue, Open(TokenKind::AttributeExpressionValue)),
            _ => return Err(ErrorImpl::InvalidAttributeValueStart { found: ch }),
        },
        InStringValue => match ch {
            '"' => (AfterAttributeValue, Flush),
            c if is_name_char(c) => (InStringValue, Extend),
            _ => return Err(ErrorImpl::InvalidStringValueChar { found: ch }),
        },
        InExpressionValue => match ch {
            '}' => (AfterAttributeValue, Flush),
            c if is_name_char(c) => (InExpressionValue, Extend),
            _ => return Err(ErrorImpl::InvalidExpressionValueChar { found: ch }),
        },
        AfterAttributeValue => match ch {
            ' ' => (AwaitingAttribute, Skip),
            '>' => (AfterTagClose, Emit(TokenKind::TagClose)),
            _ => return Err(ErrorImpl::InvalidAfterAttributeValue { found: ch }),
        },
        AfterTagClose => match ch {
            '<' => (AfterOpen, Emit(TokenKind::TagOpen)),
            _ => (InText, Begin(TokenKind::Text)),
        },
        InText => match ch {
            '<' => (AfterOpen, FlushThen(TokenKind::TagOpen)),
            _ => (InText, Extend),
        },
    };

    Ok(next)
}

/// Decides what the input ending in `state` means.
pub fn finish(state: LexState, config: &LexerConfig) -> Result<EndAction, ErrorImpl> {
    match state {
        LexState::Start => Err(ErrorImpl::InvalidStart { found: None }),
        LexState::AfterTagClose => Ok(EndAction::Done),
        LexState::InText => match config.trailing_text {
            TrailingText::Flush => Ok(EndAction::Flush),
            TrailingText::Reject => Err(ErrorImpl::TruncatedInput { state }),
        },
        _ => Err(ErrorImpl::TruncatedInput { state }),
    }
}
