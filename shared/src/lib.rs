//! Shared types for the seating planner
//!
//! Entity models, the unified error system, and the entity gateway trait
//! used by the planner core and the gateway adapters.

pub mod error;
pub mod gateway;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use gateway::{Entity, EntityGateway, FieldFilter, GatewayError, GatewayResult, SortKey};
pub use models::{Guest, LayoutItem, Position, RsvpStatus, Table};
