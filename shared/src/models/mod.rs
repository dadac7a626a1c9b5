//! Data models
//!
//! Records of the remote entity store. Ids are opaque strings assigned by
//! the store; guests reference tables by `table_number`.

pub mod guest;
pub mod layout_item;
pub mod table;

// Re-exports
pub use guest::*;
pub use layout_item::*;
pub use table::*;
