//! Guest Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RSVP answer of a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
        }
    }
}

/// Guest entity
///
/// `table_number` links the guest to a [`Table`](super::Table) by its
/// `table_number`, never by the table's id. The reference may dangle once
/// the table is deleted; the stored number is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub table_number: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

impl Guest {
    /// Stored table number, treating `0` the same as "no table".
    pub fn assigned_table(&self) -> Option<u32> {
        self.table_number.filter(|n| *n > 0)
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_table().is_some()
    }
}

/// Guest form payload, used for both create and update.
///
/// Every field is sent, so an update with `table_number: None` clears the
/// assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    pub table_number: Option<u32>,
    pub notes: Option<String>,
}

impl GuestDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_table(mut self, table_number: u32) -> Self {
        self.table_number = Some(table_number);
        self
    }

    pub fn with_rsvp(mut self, status: RsvpStatus) -> Self {
        self.rsvp_status = status;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl From<&Guest> for GuestDraft {
    fn from(guest: &Guest) -> Self {
        Self {
            name: guest.name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            rsvp_status: guest.rsvp_status,
            table_number: guest.table_number,
            notes: guest.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_defaults_from_sparse_json() {
        let guest: Guest = serde_json::from_str(r#"{"id":"g1","name":"Ana"}"#).unwrap();
        assert_eq!(guest.rsvp_status, RsvpStatus::Pending);
        assert_eq!(guest.table_number, None);
        assert!(!guest.is_assigned());
    }

    #[test]
    fn test_zero_table_number_is_unassigned() {
        let guest: Guest =
            serde_json::from_str(r#"{"id":"g1","name":"Ana","table_number":0}"#).unwrap();
        assert_eq!(guest.table_number, Some(0));
        assert_eq!(guest.assigned_table(), None);
    }

    #[test]
    fn test_rsvp_status_wire_names() {
        let json = serde_json::to_string(&RsvpStatus::Declined).unwrap();
        assert_eq!(json, "\"declined\"");
        assert_eq!(RsvpStatus::Confirmed.as_str(), "confirmed");
    }

    #[test]
    fn test_draft_serializes_cleared_table_as_null() {
        let draft = GuestDraft::new("Ana");
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("table_number").unwrap().is_null());
    }
}
