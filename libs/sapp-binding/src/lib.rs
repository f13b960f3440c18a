//! sapp-binding - Sapp (pnmas) binding configuration parsing
//!
//! Turns item binding strings into validated, immutable records:
//!
//! - [`StatusAddressParser`]: parses `pnmasid:type:address:subaddress[:openvalue]`
//!   into a [`StatusAddress`], or a [`ParseError`] naming the first broken rule
//! - [`SappBindingConfig`]: a named item with its [`BindingPayload`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────┐   ┌──────────────────────┐
//! │ item binding │──▶│ StatusAddressParser │──▶│ AddressTable         │
//! │   string     │   │   (parse/validate)  │   │ SubAddressSet        │
//! └──────────────┘   └─────────────────────┘   │ (sapp-model)         │
//!                              │               └──────────────────────┘
//!                              ▼
//!                  StatusAddress | ParseError
//! ```
//!
//! The parser is stateless apart from its read-only tables and may be shared
//! across threads.
//!
//! # Example
//!
//! ```rust
//! use sapp_binding::{ParseErrorKind, SappBindingConfig, StatusAddressParser};
//!
//! let parser = StatusAddressParser::default();
//!
//! let config = SappBindingConfig::contact(&parser, "FrontDoor", "home:V:192:1:0").unwrap();
//! let status = config.as_contact().unwrap().status();
//! assert_eq!(status.device_id(), "home");
//! assert_eq!(status.open_value(), 0);
//!
//! let err = parser.parse("home:V:192").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::MalformedStructure);
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod status;

// Re-export public API
pub use config::{BindingPayload, ContactBinding, ItemKind, SappBindingConfig};
pub use error::{BindingError, ParseError, ParseErrorKind, Result};
pub use parser::{parse_status_address, StatusAddressParser};
pub use status::{StatusAddress, DEFAULT_OPEN_VALUE};

// Model types callers need to configure a parser
pub use sapp_model::{AddressRange, AddressTable, AddressType, SubAddressSet};
