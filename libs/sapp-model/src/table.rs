//! Address ranges per address type
//!
//! The table maps every address type permitted for a binding flavor to the
//! inclusive range of addresses it accepts. A type missing from the table is
//! not legal for that flavor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{ModelError, Result};
use crate::types::AddressType;

/// Inclusive address range, `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct AddressRange {
    low: i32,
    high: i32,
}

#[derive(Deserialize)]
struct RawRange {
    low: i32,
    high: i32,
}

impl TryFrom<RawRange> for AddressRange {
    type Error = ModelError;

    fn try_from(raw: RawRange) -> Result<Self> {
        AddressRange::new(raw.low, raw.high)
    }
}

impl AddressRange {
    pub fn new(low: i32, high: i32) -> Result<Self> {
        if low > high {
            return Err(ModelError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    /// Check whether `value` lies within the range, bounds included
    pub fn contains(&self, value: i32) -> bool {
        value >= self.low && value <= self.high
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Immutable address type to range mapping
///
/// # Example
/// ```
/// use sapp_model::{AddressTable, AddressType};
///
/// let table = AddressTable::contact();
/// assert!(table.is_valid(AddressType::Virtual));
/// assert_eq!(table.range_for(AddressType::Virtual).map(|r| r.high()), Some(2500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressTable {
    ranges: HashMap<AddressType, AddressRange>,
}

impl AddressTable {
    /// Build a table from explicit entries; later entries replace earlier ones
    pub fn new(entries: impl IntoIterator<Item = (AddressType, AddressRange)>) -> Self {
        Self {
            ranges: entries.into_iter().collect(),
        }
    }

    /// Table used by contact items: I 1-250, O 1-250, V 1-2500
    pub fn contact() -> Self {
        Self::new([
            (AddressType::Input, AddressRange { low: 1, high: 250 }),
            (AddressType::Output, AddressRange { low: 1, high: 250 }),
            (AddressType::Virtual, AddressRange { low: 1, high: 2500 }),
        ])
    }

    /// Parse a table from a YAML mapping keyed by address type letter
    ///
    /// ```yaml
    /// I: { low: 1, high: 250 }
    /// V: { low: 1, high: 2500 }
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn range_for(&self, address_type: AddressType) -> Option<AddressRange> {
        self.ranges.get(&address_type).copied()
    }

    pub fn is_valid(&self, address_type: AddressType) -> bool {
        self.ranges.contains_key(&address_type)
    }

    /// Copy of this table with `address_type` mapped to `range`
    pub fn with_range(&self, address_type: AddressType, range: AddressRange) -> Self {
        let mut ranges = self.ranges.clone();
        ranges.insert(address_type, range);
        Self { ranges }
    }

    /// Copy of this table with `address_type` no longer permitted
    pub fn without(&self, address_type: AddressType) -> Self {
        let mut ranges = self.ranges.clone();
        ranges.remove(&address_type);
        Self { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for AddressTable {
    fn default() -> Self {
        Self::contact()
    }
}
