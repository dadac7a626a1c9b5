//! Seat Finder
//!
//! Resolves a free-text name to one guest, then to that guest's table and
//! tablemates. Matching is case-insensitive and runs in two passes:
//!
//! 1. exact: normalized name equals the normalized query
//! 2. partial: first guest whose name contains the query, or whose name is
//!    contained in the query
//!
//! Ambiguity is not an error; the first candidate in collection order wins.

use serde::Serialize;
use shared::models::{Guest, Table};

/// Case-insensitive comparison key. Whitespace is kept as typed.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuestMatch<'a> {
    pub guest: &'a Guest,
    pub kind: MatchKind,
}

/// Resolve `query` to a single guest.
pub fn match_guest<'a>(query: &str, guests: &'a [Guest]) -> Option<GuestMatch<'a>> {
    if query.trim().is_empty() {
        return None;
    }
    let query = normalize(query);

    let names: Vec<String> = guests.iter().map(|g| normalize(&g.name)).collect();

    if let Some(i) = names.iter().position(|name| *name == query) {
        return Some(GuestMatch {
            guest: &guests[i],
            kind: MatchKind::Exact,
        });
    }

    names
        .iter()
        .position(|name| !name.is_empty() && (name.contains(&query) || query.contains(name.as_str())))
        .map(|i| GuestMatch {
            guest: &guests[i],
            kind: MatchKind::Partial,
        })
}

/// Resolved guest with their seat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatAssignment {
    pub guest: Guest,
    pub match_kind: MatchKind,
    /// `None` when the guest has no table, or their number matches no table
    pub table: Option<Table>,
    /// Guests sharing the table number, excluding the resolved guest
    pub table_guests: Vec<Guest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeatLookup {
    Found(SeatAssignment),
    NotFound,
}

impl SeatLookup {
    pub fn assignment(&self) -> Option<&SeatAssignment> {
        match self {
            Self::Found(assignment) => Some(assignment),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Tablemates of `guest`: same assigned number, other ids
pub fn tablemates(guest: &Guest, guests: &[Guest]) -> Vec<Guest> {
    let Some(number) = guest.assigned_table() else {
        return Vec::new();
    };
    guests
        .iter()
        .filter(|g| g.assigned_table() == Some(number) && g.id != guest.id)
        .cloned()
        .collect()
}

/// Full lookup over an already fetched snapshot.
///
/// `tables` only needs to contain candidates; the first one carrying the
/// guest's number is used.
pub fn find_seat(query: &str, guests: &[Guest], tables: &[Table]) -> SeatLookup {
    let Some(found) = match_guest(query, guests) else {
        return SeatLookup::NotFound;
    };

    let guest = found.guest;
    let table = guest
        .assigned_table()
        .and_then(|number| tables.iter().find(|t| t.table_number == number))
        .cloned();

    SeatLookup::Found(SeatAssignment {
        guest: guest.clone(),
        match_kind: found.kind,
        table,
        table_guests: tablemates(guest, guests),
    })
}
