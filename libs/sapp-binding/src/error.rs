//! Binding configuration error types

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::config::ItemKind;

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Rule of the status address grammar that rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// Wrong field count or empty device id
    MalformedStructure,
    /// Unknown address type, or one not permitted by the address table
    InvalidAddressType,
    /// Non-numeric address, or outside the range of its address type
    InvalidAddressValue,
    /// Sub-address not in the allowed token set
    InvalidSubAddress,
    /// Open value present but non-numeric
    InvalidOpenValue,
}

impl ParseErrorKind {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedStructure => "expected pnmasid:type:address:subaddress[:openvalue]",
            Self::InvalidAddressType => "invalid address type",
            Self::InvalidAddressValue => "invalid address",
            Self::InvalidSubAddress => "invalid sub-address",
            Self::InvalidOpenValue => "invalid open value",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Rejected status address string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid Sapp binding configuration for ContactItem '{input}': {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The original binding string as supplied by the caller
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors raised while building an item binding config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Item '{item}' of kind {kind} is not supported by the Sapp binding")]
    UnsupportedItemKind { item: String, kind: ItemKind },

    #[error("Unknown item kind: '{0}'")]
    UnknownItemKind(String),

    #[error("Item name must not be empty")]
    EmptyItemName,
}

impl BindingError {
    /// Parse failure category, when the binding string itself was rejected
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Parse(err) => Some(err.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::InvalidSubAddress, "home:V:192:Z");
        assert_eq!(
            err.to_string(),
            "Invalid Sapp binding configuration for ContactItem 'home:V:192:Z': invalid sub-address"
        );
        assert_eq!(err.input(), "home:V:192:Z");
        assert_eq!(err.kind(), ParseErrorKind::InvalidSubAddress);
    }

    #[test]
    fn test_binding_error_wraps_parse_error() {
        let err: BindingError = ParseError::new(ParseErrorKind::InvalidOpenValue, "a:V:1:1:x").into();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::InvalidOpenValue));
        assert!(err.to_string().contains("'a:V:1:1:x'"));

        assert_eq!(BindingError::EmptyItemName.parse_kind(), None);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ParseErrorKind::MalformedStructure).unwrap(),
            "\"malformed_structure\""
        );
    }
}
