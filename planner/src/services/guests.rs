//! Guest Service - guest list flows

use std::sync::Arc;

use futures::future::try_join;
use shared::error::AppResult;
use shared::gateway::SortKey;
use shared::models::{Guest, GuestDraft, Table};

use super::PlannerGateway;
use crate::assignment::AssignmentIndex;
use crate::guests::{FilteredGuests, GuestFilter};
use crate::utils::validation::validate_guest_draft;

/// Guests (newest first) and tables for the guest page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuestSnapshot {
    pub guests: Vec<Guest>,
    pub tables: Vec<Table>,
}

impl GuestSnapshot {
    pub fn index(&self) -> AssignmentIndex<'_> {
        AssignmentIndex::build(&self.guests, &self.tables)
    }

    pub fn filtered(&self, filter: &GuestFilter) -> FilteredGuests<'_> {
        filter.apply(&self.guests)
    }
}

pub struct GuestService<G> {
    gateway: Arc<G>,
}

impl<G> Clone for GuestService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<G: PlannerGateway> GuestService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn load(&self) -> AppResult<GuestSnapshot> {
        let newest_first = SortKey::descending("created_date");
        let by_number = SortKey::ascending("table_number");
        let (guests, tables) = try_join(
            self.gateway.guests().list(Some(&newest_first)),
            self.gateway.tables().list(Some(&by_number)),
        )
        .await?;
        Ok(GuestSnapshot { guests, tables })
    }

    /// Create a guest, or overwrite `id` with the form contents.
    pub async fn save_guest(&self, id: Option<&str>, draft: &GuestDraft) -> AppResult<Guest> {
        validate_guest_draft(draft)?;
        let guest = match id {
            Some(id) => self.gateway.guests().update(id, draft).await?,
            None => self.gateway.guests().create(draft).await?,
        };
        tracing::info!(guest_id = %guest.id, table_number = ?guest.table_number, "Guest saved");
        Ok(guest)
    }

    pub async fn delete_guest(&self, id: &str) -> AppResult<()> {
        self.gateway.guests().delete(id).await?;
        tracing::info!(guest_id = %id, "Guest deleted");
        Ok(())
    }
}
