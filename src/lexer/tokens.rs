use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::Span;

lazy_static! {
    static ref KIND_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::ALL {
            map.insert(kind.name(), kind);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    TagOpen,  // <
    TagClose, // >
    Slash,    // /

    Identifier,
    AttributeName,
    AttributeStringValue,
    AttributeExpressionValue,
    Text,
}

impl TokenKind {
    pub const ALL: [TokenKind; 8] = [
        TokenKind::TagOpen,
        TokenKind::TagClose,
        TokenKind::Slash,
        TokenKind::Identifier,
        TokenKind::AttributeName,
        TokenKind::AttributeStringValue,
        TokenKind::AttributeExpressionValue,
        TokenKind::Text,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::TagOpen => "TagOpen",
            TokenKind::TagClose => "TagClose",
            TokenKind::Slash => "Slash",
            TokenKind::Identifier => "Identifier",
            TokenKind::AttributeName => "AttributeName",
            TokenKind::AttributeStringValue => "AttributeStringValue",
            TokenKind::AttributeExpressionValue => "AttributeExpressionValue",
            TokenKind::Text => "Text",
        }
    }

    /// Kinds whose value is collected character by character rather than
    /// being a single structural character.
    pub fn is_accumulated(&self) -> bool {
        !matches!(
            self,
            TokenKind::TagOpen | TokenKind::TagClose | TokenKind::Slash
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenKind(pub String);

impl Display for UnknownTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown token kind `{}`", self.0)
    }
}

impl std::error::Error for UnknownTokenKind {}

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = KIND_LOOKUP.get(s) {
            return Ok(*kind);
        }

        KIND_LOOKUP
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    #[serde(skip)]
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
