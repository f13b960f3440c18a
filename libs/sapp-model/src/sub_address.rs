//! Legal sub-address tokens
//!
//! A sub-address narrows a status address down to a bit or half of the
//! addressed word: `*` (whole word), `H`/`L` (high/low byte) or a single
//! bit position `1`..`16`.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Tokens accepted by [`SubAddressSet::standard`]
pub const STANDARD_SUB_ADDRESSES: [&str; 19] = [
    "*", "H", "L", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14",
    "15", "16",
];

/// Set of upper-cased sub-address tokens a binding accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SubAddressSet {
    tokens: Vec<String>,
}

impl SubAddressSet {
    /// `*`, `H`, `L` and `1`..`16`
    pub fn standard() -> Self {
        Self {
            tokens: STANDARD_SUB_ADDRESSES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Build a set from arbitrary tokens, normalized to upper case
    ///
    /// Duplicates are dropped. Empty tokens and tokens containing the `:`
    /// field delimiter can never be matched and are rejected.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() || token.contains(':') {
                return Err(ModelError::InvalidSubAddressToken(token.to_string()));
            }
            let upper = token.to_uppercase();
            if !normalized.contains(&upper) {
                normalized.push(upper);
            }
        }

        if normalized.is_empty() {
            return Err(ModelError::EmptySubAddressSet);
        }

        Ok(Self { tokens: normalized })
    }

    /// Check membership of an already upper-cased token
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for SubAddressSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<String>> for SubAddressSet {
    type Error = ModelError;

    fn try_from(tokens: Vec<String>) -> Result<Self> {
        Self::from_tokens(tokens)
    }
}

impl From<SubAddressSet> for Vec<String> {
    fn from(set: SubAddressSet) -> Self {
        set.tokens
    }
}
