//! Guest list filtering

use serde::{Deserialize, Serialize};
use shared::models::{Guest, RsvpStatus};

use crate::seating::finder::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpFilter {
    #[default]
    All,
    Only(RsvpStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentFilter {
    #[default]
    All,
    Assigned,
    Unassigned,
}

/// Guest page filters; the default lets everything through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestFilter {
    /// Case-insensitive substring over name or email
    pub search: String,
    pub rsvp: RsvpFilter,
    pub assignment: AssignmentFilter,
}

/// Filter result with the "showing N of M" totals
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredGuests<'a> {
    pub guests: Vec<&'a Guest>,
    pub total: usize,
}

impl FilteredGuests<'_> {
    pub fn shown(&self) -> usize {
        self.guests.len()
    }
}

impl GuestFilter {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn rsvp(mut self, status: RsvpStatus) -> Self {
        self.rsvp = RsvpFilter::Only(status);
        self
    }

    pub fn assignment(mut self, assignment: AssignmentFilter) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn matches(&self, guest: &Guest) -> bool {
        let needle = normalize(&self.search);
        let text_ok = needle.is_empty()
            || guest.name.to_lowercase().contains(&needle)
            || guest
                .email
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle));

        let rsvp_ok = match self.rsvp {
            RsvpFilter::All => true,
            RsvpFilter::Only(status) => guest.rsvp_status == status,
        };

        // "assigned" here is the stored number, dangling or not
        let assignment_ok = match self.assignment {
            AssignmentFilter::All => true,
            AssignmentFilter::Assigned => guest.is_assigned(),
            AssignmentFilter::Unassigned => !guest.is_assigned(),
        };

        text_ok && rsvp_ok && assignment_ok
    }

    pub fn apply<'a>(&self, guests: &'a [Guest]) -> FilteredGuests<'a> {
        FilteredGuests {
            guests: guests.iter().filter(|g| self.matches(g)).collect(),
            total: guests.len(),
        }
    }
}
