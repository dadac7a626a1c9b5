//! Assignment Index
//!
//! Derived guest/table assignment state. Guests join tables by
//! `table_number`, never by id, so a guest may point at a number no table
//! carries anymore. Such dangling guests keep their stored number but are
//! treated as unassigned for occupancy and listing.
//!
//! The index is a borrowed view over one snapshot of both collections and
//! holds no state of its own; building it twice over the same input yields
//! equal values.

use std::collections::HashMap;

use serde::Serialize;
use shared::models::{Guest, RsvpStatus, Table};

/// Aggregate guest counts for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GuestCounts {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub declined: usize,
    /// Guests with a stored table number, dangling or not
    pub assigned: usize,
    /// Guests whose stored table number matches no table
    pub dangling: usize,
}

impl GuestCounts {
    /// Guests without a table, dangling ones included
    pub fn unassigned(&self) -> usize {
        self.total - self.assigned + self.dangling
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyLabel {
    Empty,
    Partial,
    Full,
}

impl OccupancyLabel {
    /// Over-capacity tables report `Full`, so does a capacity-0 table once occupied.
    pub fn classify(occupants: usize, capacity: u32) -> Self {
        if occupants == 0 {
            Self::Empty
        } else if occupants >= capacity as usize {
            Self::Full
        } else {
            Self::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Partial => "Partial",
            Self::Full => "Full",
        }
    }
}

/// Occupancy badge of one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occupancy<'a> {
    pub table: &'a Table,
    #[serde(skip)]
    pub occupants: Vec<&'a Guest>,
    pub count: usize,
    pub label: OccupancyLabel,
}

impl Occupancy<'_> {
    /// `"3/8"` style badge text
    pub fn badge(&self) -> String {
        format!("{}/{}", self.count, self.table.capacity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentIndex<'a> {
    guests: &'a [Guest],
    tables: &'a [Table],
    by_number: HashMap<u32, Vec<&'a Guest>>,
    counts: GuestCounts,
}

impl<'a> AssignmentIndex<'a> {
    pub fn build(guests: &'a [Guest], tables: &'a [Table]) -> Self {
        let mut by_number: HashMap<u32, Vec<&'a Guest>> = HashMap::new();
        let mut counts = GuestCounts {
            total: guests.len(),
            ..Default::default()
        };

        for guest in guests {
            match guest.rsvp_status {
                RsvpStatus::Confirmed => counts.confirmed += 1,
                RsvpStatus::Pending => counts.pending += 1,
                RsvpStatus::Declined => counts.declined += 1,
            }
            if let Some(number) = guest.assigned_table() {
                counts.assigned += 1;
                by_number.entry(number).or_default().push(guest);
            }
        }

        counts.dangling = by_number
            .iter()
            .filter(|(number, _)| !tables.iter().any(|t| t.table_number == **number))
            .map(|(_, occupants)| occupants.len())
            .sum();

        Self {
            guests,
            tables,
            by_number,
            counts,
        }
    }

    pub fn counts(&self) -> GuestCounts {
        self.counts
    }

    /// Guests seated at `table_number`, in collection order
    pub fn occupants_of(&self, table_number: u32) -> &[&'a Guest] {
        self.by_number
            .get(&table_number)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every table with that number reports the same occupants.
    pub fn occupancy(&self, table: &'a Table) -> Occupancy<'a> {
        let occupants = self.occupants_of(table.table_number).to_vec();
        let count = occupants.len();
        Occupancy {
            table,
            occupants,
            count,
            label: OccupancyLabel::classify(count, table.capacity),
        }
    }

    /// Occupancy of every table, in collection order
    pub fn occupancies(&self) -> Vec<Occupancy<'a>> {
        self.tables.iter().map(|t| self.occupancy(t)).collect()
    }

    fn has_table(&self, number: u32) -> bool {
        self.tables.iter().any(|t| t.table_number == number)
    }

    /// Guests without a table, including those pointing at a deleted one
    pub fn unassigned(&self) -> Vec<&'a Guest> {
        self.guests
            .iter()
            .filter(|g| match g.assigned_table() {
                Some(number) => !self.has_table(number),
                None => true,
            })
            .collect()
    }

    /// Guests whose stored number matches no table
    pub fn dangling(&self) -> Vec<&'a Guest> {
        self.guests
            .iter()
            .filter(|g| g.assigned_table().is_some_and(|n| !self.has_table(n)))
            .collect()
    }

    /// Table a guest sits at; duplicates resolve to the first in collection order.
    pub fn table_for(&self, guest: &Guest) -> Option<&'a Table> {
        let number = guest.assigned_table()?;
        self.tables.iter().find(|t| t.table_number == number)
    }

    /// Sidebar preview: first two occupant names, then `+N more`.
    pub fn preview(&self, table_number: u32) -> Option<String> {
        let occupants = self.occupants_of(table_number);
        if occupants.is_empty() {
            return None;
        }
        let names: Vec<&str> = occupants.iter().take(2).map(|g| g.name.as_str()).collect();
        let mut preview = names.join(", ");
        if occupants.len() > 2 {
            preview.push_str(&format!(" +{} more", occupants.len() - 2));
        }
        Some(preview)
    }
}
