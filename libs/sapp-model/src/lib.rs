//! sapp-model - Address model for Sapp (pnmas) bindings
//!
//! Constant data the binding-config parser validates against:
//!
//! - [`AddressType`]: I (input), O (output), V (virtual)
//! - [`AddressTable`]: inclusive [`AddressRange`] per permitted address type
//! - [`SubAddressSet`]: legal sub-address tokens (`*`, `H`, `L`, `1`..`16`)
//!
//! Tables are built once (from the defaults or from host configuration) and
//! are read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use sapp_model::{AddressTable, AddressType, SubAddressSet};
//!
//! let table = AddressTable::contact();
//! let range = table.range_for(AddressType::Input).unwrap();
//! assert!(range.contains(250));
//! assert!(!range.contains(251));
//!
//! assert!(SubAddressSet::standard().contains("H"));
//! ```

pub mod error;
pub mod sub_address;
pub mod table;
pub mod types;

// Re-exports for convenience
pub use error::{ModelError, Result};
pub use sub_address::{SubAddressSet, STANDARD_SUB_ADDRESSES};
pub use table::{AddressRange, AddressTable};
pub use types::AddressType;
