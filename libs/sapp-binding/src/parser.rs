//! Status address parser
//!
//! Binding string format:
//!
//! ```text
//! <pnmasid>:<address type I/O/V>:<address>:<sub-address */H/L/1-16>[:<open value>]
//! ```
//!
//! The open value defaults to 1 when omitted. Examples: `home:V:192:1`,
//! `home:V:192:1:0`.
//!
//! Validation stops at the first rule the input breaks; the returned
//! [`ParseError`] names that rule and carries the original string.

use sapp_model::{AddressTable, AddressType, SubAddressSet};

use crate::error::{ParseError, ParseErrorKind};
use crate::status::{StatusAddress, DEFAULT_OPEN_VALUE};

const FIELD_DELIMITER: char = ':';

/// Parses binding strings against an address table and sub-address set
///
/// # Example
/// ```
/// use sapp_binding::StatusAddressParser;
/// use sapp_model::AddressType;
///
/// let parser = StatusAddressParser::default();
/// let status = parser.parse("home:V:192:1").unwrap();
/// assert_eq!(status.address_type(), AddressType::Virtual);
/// assert_eq!(status.open_value(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusAddressParser {
    table: AddressTable,
    sub_addresses: SubAddressSet,
}

impl StatusAddressParser {
    pub fn new(table: AddressTable, sub_addresses: SubAddressSet) -> Self {
        Self {
            table,
            sub_addresses,
        }
    }

    pub fn table(&self) -> &AddressTable {
        &self.table
    }

    pub fn sub_addresses(&self) -> &SubAddressSet {
        &self.sub_addresses
    }

    /// Parse and validate one binding string
    pub fn parse(&self, raw: &str) -> Result<StatusAddress, ParseError> {
        let fail = |kind: ParseErrorKind| ParseError::new(kind, raw);

        // Empty fields are kept so a stray delimiter changes the field count
        let fields: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
        if fields.len() != 4 && fields.len() != 5 {
            return Err(fail(ParseErrorKind::MalformedStructure));
        }

        let device_id = fields[0];
        if device_id.is_empty() {
            return Err(fail(ParseErrorKind::MalformedStructure));
        }

        let address_type: AddressType = fields[1]
            .to_uppercase()
            .parse()
            .map_err(|_| fail(ParseErrorKind::InvalidAddressType))?;
        let range = self
            .table
            .range_for(address_type)
            .ok_or_else(|| fail(ParseErrorKind::InvalidAddressType))?;

        let address: i32 = fields[2]
            .parse()
            .map_err(|_| fail(ParseErrorKind::InvalidAddressValue))?;
        if !range.contains(address) {
            return Err(fail(ParseErrorKind::InvalidAddressValue));
        }

        let sub_address = fields[3].to_uppercase();
        if !self.sub_addresses.contains(&sub_address) {
            return Err(fail(ParseErrorKind::InvalidSubAddress));
        }

        // No range check on the open value
        let open_value = match fields.get(4) {
            Some(token) => token
                .parse()
                .map_err(|_| fail(ParseErrorKind::InvalidOpenValue))?,
            None => DEFAULT_OPEN_VALUE,
        };

        Ok(StatusAddress::new(
            device_id.to_string(),
            address_type,
            address,
            sub_address,
            open_value,
        ))
    }
}

/// Parse with the contact address table and the standard sub-address set
pub fn parse_status_address(raw: &str) -> Result<StatusAddress, ParseError> {
    StatusAddressParser::default().parse(raw)
}
