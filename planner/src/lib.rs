//! Seating Planner - reception table layout and guest assignment
//!
//! # Module structure
//!
//! ```text
//! planner/
//! ├── core/        # Configuration
//! ├── utils/       # Logging, form validation
//! ├── geometry     # Points, sizes, clamping
//! ├── editor/      # Drag-to-reposition state machine
//! ├── assignment   # Occupancy and guest counts
//! ├── seating/     # Seat finder, autocomplete
//! ├── layout/      # Grid reset, guest-facing seat map
//! ├── guests/      # Guest list filters
//! ├── gateway/     # In-memory entity store
//! └── services/    # Page flows over the entity gateway
//! ```
//!
//! Data only ever flows one way: the gateway returns a snapshot, the pure
//! modules derive from it, and writes go back through the gateway. Nothing
//! here caches records between calls.

pub mod assignment;
pub mod core;
pub mod editor;
pub mod gateway;
pub mod geometry;
pub mod guests;
pub mod layout;
pub mod seating;
pub mod services;
pub mod utils;

// Re-export common types
pub use assignment::{AssignmentIndex, GuestCounts, Occupancy, OccupancyLabel};
pub use core::Config;
pub use editor::{DragEffect, DragState, EditorConfig, MoveCommit, SpatialEditor};
pub use gateway::MemoryGateway;
pub use geometry::{Point, Rect, Size};
pub use seating::{SeatAssignment, SeatLookup, find_seat};
pub use services::{
    DashboardService, GuestService, LayoutService, PlannerGateway, SeatLookupService,
};

/// Install the tracing subscriber described by `config`
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    utils::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())
}
