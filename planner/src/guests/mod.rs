//! Guest list views

pub mod filter;

pub use filter::{AssignmentFilter, FilteredGuests, GuestFilter, RsvpFilter};
