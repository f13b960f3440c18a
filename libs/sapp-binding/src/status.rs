//! Parsed open/closed status address

use sapp_model::AddressType;
use serde::Serialize;
use std::fmt;

/// Open value used when a binding string omits it
pub const DEFAULT_OPEN_VALUE: i32 = 1;

/// Validated status address of a contact-style pnmas point
///
/// Only [`StatusAddressParser`](crate::StatusAddressParser) builds these, so
/// every field has passed validation against the parser's address table and
/// sub-address set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAddress {
    #[serde(rename = "pnmasId")]
    device_id: String,
    address_type: AddressType,
    address: i32,
    sub_address: String,
    open_value: i32,
}

impl StatusAddress {
    pub(crate) fn new(
        device_id: String,
        address_type: AddressType,
        address: i32,
        sub_address: String,
        open_value: i32,
    ) -> Self {
        Self {
            device_id,
            address_type,
            address,
            sub_address,
            open_value,
        }
    }

    /// pnmas controller id
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    pub fn address(&self) -> i32 {
        self.address
    }

    /// Upper-cased sub-address token
    pub fn sub_address(&self) -> &str {
        &self.sub_address
    }

    /// Value the point reports when open
    pub fn open_value(&self) -> i32 {
        self.open_value
    }

    /// Render back into binding string form, open value always explicit
    pub fn to_binding_string(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.device_id, self.address_type, self.address, self.sub_address, self.open_value
        )
    }
}

impl fmt::Display for StatusAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[pnmasId:{}, addressType:{}, address:{}, subAddress:{}, openValue:{}]",
            self.device_id, self.address_type, self.address, self.sub_address, self.open_value
        )
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn sample() -> StatusAddress {
        StatusAddress::new(
            "home".to_string(),
            AddressType::Virtual,
            192,
            "H".to_string(),
            DEFAULT_OPEN_VALUE,
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "[pnmasId:home, addressType:V, address:192, subAddress:H, openValue:1]"
        );
    }

    #[test]
    fn test_to_binding_string() {
        assert_eq!(sample().to_binding_string(), "home:V:192:H:1");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pnmasId": "home",
                "addressType": "V",
                "address": 192,
                "subAddress": "H",
                "openValue": 1
            })
        );
    }
}
