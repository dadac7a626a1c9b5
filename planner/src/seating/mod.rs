//! Guest-facing seat lookup
//!
//! - [`finder`] - name resolution, table and tablemates
//! - [`autocomplete`] - suggestions while typing

pub mod autocomplete;
pub mod finder;

pub use autocomplete::{Autocomplete, MAX_SUGGESTIONS, MIN_QUERY_CHARS, suggest};
pub use finder::{GuestMatch, MatchKind, SeatAssignment, SeatLookup, find_seat, match_guest};
