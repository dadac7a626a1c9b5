//! Page flows over the entity gateway
//!
//! # Structure
//!
//! - [`LayoutService`] - table designer: snapshot, table CRUD, drag commits, grid reset
//! - [`GuestService`] - guest list CRUD
//! - [`SeatLookupService`] - guest-facing seat search and room plan
//! - [`DashboardService`] - aggregate counts and table summaries
//!
//! Services never keep records between calls. Every read returns a fresh
//! snapshot and gateway failures come back as [`AppError`](shared::AppError)
//! values instead of escaping as panics.

pub mod dashboard;
pub mod guests;
pub mod layout;
pub mod seat_lookup;

pub use dashboard::{Dashboard, DashboardService, TableSummary};
pub use guests::{GuestService, GuestSnapshot};
pub use layout::{LayoutService, LayoutSnapshot, ResetReport};
pub use seat_lookup::SeatLookupService;

use shared::gateway::EntityGateway;
use shared::models::{Guest, LayoutItem, Table};

/// A gateway serving every entity kind the planner reads
pub trait PlannerGateway:
    EntityGateway<Guest> + EntityGateway<Table> + EntityGateway<LayoutItem> + 'static
{
    fn guests(&self) -> &dyn EntityGateway<Guest>;
    fn tables(&self) -> &dyn EntityGateway<Table>;
    fn layout_items(&self) -> &dyn EntityGateway<LayoutItem>;
}

impl<T> PlannerGateway for T
where
    T: EntityGateway<Guest> + EntityGateway<Table> + EntityGateway<LayoutItem> + 'static,
{
    fn guests(&self) -> &dyn EntityGateway<Guest> {
        self
    }

    fn tables(&self) -> &dyn EntityGateway<Table> {
        self
    }

    fn layout_items(&self) -> &dyn EntityGateway<LayoutItem> {
        self
    }
}
