//! Item binding configs
//!
//! A binding config ties one named UI item to the Sapp payload parsed from
//! its binding string. The payload is a tagged variant per item kind;
//! callers match on it instead of downcasting.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{BindingError, Result};
use crate::parser::StatusAddressParser;
use crate::status::StatusAddress;

/// Kind of UI item a binding string is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    Contact,
    Switch,
    Number,
    Dimmer,
    Rollershutter,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Contact => "Contact",
            ItemKind::Switch => "Switch",
            ItemKind::Number => "Number",
            ItemKind::Dimmer => "Dimmer",
            ItemKind::Rollershutter => "Rollershutter",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = BindingError;

    /// Accepts the item type name with or without the `Item` suffix
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let name = lower.strip_suffix("item").unwrap_or(lower.as_str());
        match name {
            "contact" => Ok(ItemKind::Contact),
            "switch" => Ok(ItemKind::Switch),
            "number" => Ok(ItemKind::Number),
            "dimmer" => Ok(ItemKind::Dimmer),
            "rollershutter" => Ok(ItemKind::Rollershutter),
            _ => Err(BindingError::UnknownItemKind(s.to_string())),
        }
    }
}

/// Contact item payload: the point whose value drives open/closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactBinding {
    status: StatusAddress,
}

impl ContactBinding {
    pub fn status(&self) -> &StatusAddress {
        &self.status
    }
}

/// Parsed payload, one variant per supported item kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindingPayload {
    Contact(ContactBinding),
}

impl BindingPayload {
    pub fn item_kind(&self) -> ItemKind {
        match self {
            BindingPayload::Contact(_) => ItemKind::Contact,
        }
    }
}

/// Binding config of one named item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SappBindingConfig {
    item_name: String,
    payload: BindingPayload,
}

impl SappBindingConfig {
    /// Parse the binding string of an item of the given kind
    pub fn parse(
        parser: &StatusAddressParser,
        item_kind: ItemKind,
        item_name: &str,
        binding: &str,
    ) -> Result<Self> {
        match item_kind {
            ItemKind::Contact => Self::contact(parser, item_name, binding),
            kind => {
                warn!(item = item_name, kind = %kind, "Unsupported item kind for Sapp binding");
                Err(BindingError::UnsupportedItemKind {
                    item: item_name.to_string(),
                    kind,
                })
            },
        }
    }

    /// Parse the binding string of a contact item
    pub fn contact(parser: &StatusAddressParser, item_name: &str, binding: &str) -> Result<Self> {
        if item_name.is_empty() {
            warn!(binding, "Rejected Sapp binding without item name");
            return Err(BindingError::EmptyItemName);
        }

        let status = parser.parse(binding).map_err(|e| {
            warn!(item = item_name, binding, kind = %e.kind(), "Rejected Sapp contact binding");
            e
        })?;

        let config = Self {
            item_name: item_name.to_string(),
            payload: BindingPayload::Contact(ContactBinding { status }),
        };
        debug!(item = item_name, binding, "Accepted Sapp contact binding: {}", config);
        Ok(config)
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn payload(&self) -> &BindingPayload {
        &self.payload
    }

    pub fn item_kind(&self) -> ItemKind {
        self.payload.item_kind()
    }

    /// Contact payload, if this is a contact item
    pub fn as_contact(&self) -> Option<&ContactBinding> {
        match &self.payload {
            BindingPayload::Contact(contact) => Some(contact),
        }
    }

    pub fn into_payload(self) -> BindingPayload {
        self.payload
    }
}

impl fmt::Display for SappBindingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            BindingPayload::Contact(contact) => {
                write!(f, "[itemName:{}: status:{} ]", self.item_name, contact.status)
            },
        }
    }
}
