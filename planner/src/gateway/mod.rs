//! Entity gateway adapters owned by the planner
//!
//! The REST adapter lives in `planner-client`; this module holds the
//! in-process store used for demos and tests.

mod memory;

pub use memory::MemoryGateway;
