//! Dashboard Service - headline numbers for the planner home page

use std::sync::Arc;

use serde::Serialize;
use shared::error::AppResult;
use shared::models::{Guest, Table};

use super::PlannerGateway;
use super::layout::LayoutService;
use crate::assignment::{AssignmentIndex, GuestCounts, OccupancyLabel};

/// Max characters of a table name in the summary
pub const SUMMARY_NAME_CHARS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub table_id: String,
    pub table_number: u32,
    pub name: Option<String>,
    pub occupied: usize,
    pub capacity: u32,
    pub label: OccupancyLabel,
    /// First occupant names, see [`AssignmentIndex::preview`]
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub counts: GuestCounts,
    pub tables: Vec<TableSummary>,
}

impl Dashboard {
    pub fn build(guests: &[Guest], tables: &[Table]) -> Self {
        let index = AssignmentIndex::build(guests, tables);
        let tables = index
            .occupancies()
            .into_iter()
            .map(|o| TableSummary {
                table_id: o.table.id.clone(),
                table_number: o.table.table_number,
                name: o.table.display_name(SUMMARY_NAME_CHARS),
                occupied: o.count,
                capacity: o.table.capacity,
                label: o.label,
                preview: index.preview(o.table.table_number),
            })
            .collect();
        Self {
            counts: index.counts(),
            tables,
        }
    }
}

pub struct DashboardService<G> {
    layout: LayoutService<G>,
}

impl<G: PlannerGateway> DashboardService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            layout: LayoutService::new(gateway),
        }
    }

    pub async fn load(&self) -> AppResult<Dashboard> {
        let snapshot = self.layout.load().await?;
        Ok(Dashboard::build(&snapshot.guests, &snapshot.tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryGateway;
    use shared::EntityGateway;
    use shared::models::{GuestDraft, RsvpStatus, TableDraft};

    #[tokio::test]
    async fn test_dashboard_counts_and_summaries() {
        let gateway = Arc::new(MemoryGateway::new());
        let tables: &dyn EntityGateway<Table> = &*gateway;
        let guests: &dyn EntityGateway<Guest> = &*gateway;

        tables
            .create(&TableDraft::numbered(1).with_capacity(2).with_name("Wedding party"))
            .await
            .unwrap();
        for (name, rsvp, table) in [
            ("Ana", RsvpStatus::Confirmed, Some(1)),
            ("Ben", RsvpStatus::Confirmed, Some(1)),
            ("Cai", RsvpStatus::Declined, None),
            ("Dee", RsvpStatus::Pending, Some(7)),
        ] {
            let mut draft = GuestDraft::new(name).with_rsvp(rsvp);
            draft.table_number = table;
            guests.create(&draft).await.unwrap();
        }

        let dashboard = DashboardService::new(gateway.clone()).load().await.unwrap();
        assert_eq!(dashboard.counts.total, 4);
        assert_eq!(dashboard.counts.confirmed, 2);
        assert_eq!(dashboard.counts.assigned, 3);
        assert_eq!(dashboard.counts.dangling, 1);

        let summary = &dashboard.tables[0];
        assert_eq!(summary.name.as_deref(), Some("Wedding part..."));
        assert_eq!(summary.label, OccupancyLabel::Full);
        assert_eq!(summary.preview.as_deref(), Some("Ana, Ben"));
    }
}
