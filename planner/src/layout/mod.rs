//! Room layout computations
//!
//! - [`reset`] - deterministic grid placement
//! - [`seat_map`] - guest-facing room plan

pub mod reset;
pub mod seat_map;

pub use reset::{GridPlacement, grid_position, grid_positions};
pub use seat_map::{ItemMarker, SeatMap, TableMarker};
