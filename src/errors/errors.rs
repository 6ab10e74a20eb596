use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::state::LexState, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at offset {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidStart { .. } => "InvalidStart",
            ErrorImpl::InvalidTagStart { .. } => "InvalidTagStart",
            ErrorImpl::InvalidIdentifierChar { .. } => "InvalidIdentifierChar",
            ErrorImpl::InvalidAttributeStart { .. } => "InvalidAttributeStart",
            ErrorImpl::InvalidAttributeNameChar { .. } => "InvalidAttributeNameChar",
            ErrorImpl::InvalidAttributeValueStart { .. } => "InvalidAttributeValueStart",
            ErrorImpl::InvalidStringValueChar { .. } => "InvalidStringValueChar",
            ErrorImpl::InvalidExpressionValueChar { .. } => "InvalidExpressionValueChar",
            ErrorImpl::InvalidAfterAttributeValue { .. } => "InvalidAfterAttributeValue",
            ErrorImpl::TruncatedInput { .. } => "TruncatedInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidStart { found: None } => {
                ErrorTip::Suggestion(String::from("input is empty, expected a tag like `<div>`"))
            }
            ErrorImpl::InvalidStart { .. } => {
                ErrorTip::Suggestion(String::from("input must begin with `<`"))
            }
            ErrorImpl::InvalidTagStart { .. } => ErrorTip::Suggestion(String::from(
                "a tag name or `/` must directly follow `<`",
            )),
            ErrorImpl::InvalidIdentifierChar { found: '/' }
            | ErrorImpl::InvalidAttributeStart { found: '/' }
            | ErrorImpl::InvalidAfterAttributeValue { found: '/' } => ErrorTip::Suggestion(
                String::from("self-closing tags are not supported, write `<name></name>`"),
            ),
            ErrorImpl::InvalidIdentifierChar { .. } | ErrorImpl::InvalidAttributeNameChar { .. } => {
                ErrorTip::Suggestion(String::from(
                    "names may only contain ASCII letters and digits",
                ))
            }
            ErrorImpl::InvalidAttributeStart { found: ' ' } => ErrorTip::Suggestion(String::from(
                "attributes are separated by exactly one space",
            )),
            ErrorImpl::InvalidAttributeStart { .. } => ErrorTip::None,
            ErrorImpl::InvalidAttributeValueStart { .. } => ErrorTip::Suggestion(String::from(
                "attribute values start with `\"` or `{`",
            )),
            ErrorImpl::InvalidStringValueChar { .. } => ErrorTip::Suggestion(String::from(
                "string values may only contain ASCII letters and digits",
            )),
            ErrorImpl::InvalidExpressionValueChar { .. } => ErrorTip::Suggestion(String::from(
                "expression values may only contain ASCII letters and digits, nesting is not supported",
            )),
            ErrorImpl::InvalidAfterAttributeValue { .. } => ErrorTip::Suggestion(String::from(
                "expected a space or `>` after an attribute value",
            )),
            ErrorImpl::TruncatedInput { state } => {
                ErrorTip::Suggestion(format!("input ended while {}", state.describe()))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid start: expected `<`, found {}", describe_found(.found))]
    InvalidStart { found: Option<char> },
    #[error("invalid tag start: unexpected {found:?}")]
    InvalidTagStart { found: char },
    #[error("invalid character {found:?} in tag name")]
    InvalidIdentifierChar { found: char },
    #[error("invalid attribute start: unexpected {found:?}")]
    InvalidAttributeStart { found: char },
    #[error("invalid character {found:?} in attribute name")]
    InvalidAttributeNameChar { found: char },
    #[error("invalid attribute value start: unexpected {found:?}")]
    InvalidAttributeValueStart { found: char },
    #[error("invalid character {found:?} in string value")]
    InvalidStringValueChar { found: char },
    #[error("invalid character {found:?} in expression value")]
    InvalidExpressionValueChar { found: char },
    #[error("unexpected {found:?} after attribute value")]
    InvalidAfterAttributeValue { found: char },
    #[error("truncated input in state {state:?}")]
    TruncatedInput { state: LexState },
}

impl ErrorImpl {
    /// The character that triggered the error, if any.
    pub fn found(&self) -> Option<char> {
        match *self {
            ErrorImpl::InvalidStart { found } => found,
            ErrorImpl::InvalidTagStart { found }
            | ErrorImpl::InvalidIdentifierChar { found }
            | ErrorImpl::InvalidAttributeStart { found }
            | ErrorImpl::InvalidAttributeNameChar { found }
            | ErrorImpl::InvalidAttributeValueStart { found }
            | ErrorImpl::InvalidStringValueChar { found }
            | ErrorImpl::InvalidExpressionValueChar { found }
            | ErrorImpl::InvalidAfterAttributeValue { found } => Some(found),
            ErrorImpl::TruncatedInput { .. } => None,
        }
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("{:?}", ch),
        None => String::from("end of input"),
    }
}
