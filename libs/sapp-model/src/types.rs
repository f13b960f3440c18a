//! Address type of a pnmas point
//!
//! A Sapp controller exposes three classes of addressable points:
//! - I (Input): binary inputs wired to the controller
//! - O (Output): binary outputs driven by the controller
//! - V (Virtual): controller variables

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

/// Address type of a pnmas point, keyed by its single-letter token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// I - binary input
    #[serde(rename = "I", alias = "i")]
    Input,

    /// O - binary output
    #[serde(rename = "O", alias = "o")]
    Output,

    /// V - virtual / variable
    #[serde(rename = "V", alias = "v")]
    Virtual,
}

impl AddressType {
    /// Every address type the model knows about
    pub const ALL: [AddressType; 3] = [AddressType::Input, AddressType::Output, AddressType::Virtual];

    /// Canonical single-letter token
    ///
    /// # Examples
    /// ```
    /// # use sapp_model::AddressType;
    /// assert_eq!(AddressType::Input.as_str(), "I");
    /// assert_eq!(AddressType::Virtual.as_str(), "V");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Input => "I",
            AddressType::Output => "O",
            AddressType::Virtual => "V",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AddressType {
    type Err = ModelError;

    /// Parse AddressType from its token (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" | "i" => Ok(AddressType::Input),
            "O" | "o" => Ok(AddressType::Output),
            "V" | "v" => Ok(AddressType::Virtual),
            _ => Err(ModelError::UnknownAddressType(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_address_type_as_str() {
        assert_eq!(AddressType::Input.as_str(), "I");
        assert_eq!(AddressType::Output.as_str(), "O");
        assert_eq!(AddressType::Virtual.as_str(), "V");
    }

    #[test]
    fn test_address_type_from_str() {
        assert_eq!("I".parse::<AddressType>(), Ok(AddressType::Input));
        assert_eq!("o".parse::<AddressType>(), Ok(AddressType::Output));
        assert_eq!("v".parse::<AddressType>(), Ok(AddressType::Virtual));

        // Only the single-letter tokens are part of the grammar
        assert_eq!(
            "X".parse::<AddressType>(),
            Err(ModelError::UnknownAddressType("X".to_string()))
        );
        assert!("".parse::<AddressType>().is_err());
        assert!("II".parse::<AddressType>().is_err());
        assert!("input".parse::<AddressType>().is_err());
    }

    #[test]
    fn test_address_type_display_round_trip() {
        for address_type in AddressType::ALL {
            let rendered = address_type.to_string();
            assert_eq!(rendered.parse::<AddressType>().unwrap(), address_type);
        }
    }

    #[test]
    fn test_address_type_serde() {
        assert_eq!(
            serde_json::to_string(&AddressType::Virtual).unwrap(),
            "\"V\""
        );
        let parsed: AddressType = serde_json::from_str("\"o\"").unwrap();
        assert_eq!(parsed, AddressType::Output);
        assert!(serde_json::from_str::<AddressType>("\"Z\"").is_err());
    }
}
