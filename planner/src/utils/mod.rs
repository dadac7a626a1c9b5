//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - form payload checks run before any gateway call

pub mod logger;
pub mod validation;

pub use logger::init_logger;
pub use validation::{validate_guest_draft, validate_table_draft};
