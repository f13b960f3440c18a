//! Error types for sapp-model

use thiserror::Error;

/// Errors raised while building address model data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Invalid address type: '{0}'. Valid values: I, O, V")]
    UnknownAddressType(String),

    #[error("Invalid address range: low bound {low} is greater than high bound {high}")]
    InvertedRange { low: i32, high: i32 },

    #[error("Invalid sub-address token: '{0}'")]
    InvalidSubAddressToken(String),

    #[error("Sub-address set must contain at least one token")]
    EmptySubAddressSet,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ModelError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        ModelError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
