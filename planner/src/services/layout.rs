//! Layout Service - table designer flows
//!
//! Drag commits and grid resets write positions back through the gateway.
//! Each table update stands alone: a failed write is reported and logged,
//! never retried, and the stored record stays authoritative until the next
//! [`LayoutService::load`].

use std::sync::Arc;

use futures::future::{join_all, try_join};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::gateway::{FieldFilter, SortKey};
use shared::models::{Guest, Table, TableDraft, TableUpdate};

use super::PlannerGateway;
use crate::assignment::AssignmentIndex;
use crate::editor::MoveCommit;
use crate::layout::grid_positions;
use crate::utils::validation::validate_table_draft;

/// Tables and guests fetched together for the designer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    /// Ascending by `table_number`
    pub tables: Vec<Table>,
    pub guests: Vec<Guest>,
}

impl LayoutSnapshot {
    pub fn index(&self) -> AssignmentIndex<'_> {
        AssignmentIndex::build(&self.guests, &self.tables)
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }
}

/// Per-table outcome of a grid reset
#[derive(Debug, Clone, Default)]
pub struct ResetReport {
    pub updated: Vec<Table>,
    pub failed: Vec<(String, AppError)>,
}

impl ResetReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Collapse into an error when any table kept its old position.
    pub fn into_result(self) -> AppResult<Vec<Table>> {
        if self.failed.is_empty() {
            return Ok(self.updated);
        }
        let failed: Vec<&str> = self.failed.iter().map(|(id, _)| id.as_str()).collect();
        Err(AppError::with_message(
            ErrorCode::LayoutResetIncomplete,
            format!("{} of {} tables were not moved", failed.len(), failed.len() + self.updated.len()),
        )
        .with_detail("table_ids", failed))
    }
}

pub struct LayoutService<G> {
    gateway: Arc<G>,
}

impl<G> Clone for LayoutService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<G: PlannerGateway> LayoutService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn load(&self) -> AppResult<LayoutSnapshot> {
        let sort = SortKey::ascending("table_number");
        let (tables, guests) = try_join(
            self.gateway.tables().list(Some(&sort)),
            self.gateway.guests().list(None),
        )
        .await?;
        Ok(LayoutSnapshot { tables, guests })
    }

    /// Create a table, or update `id` with every form field.
    pub async fn save_table(&self, id: Option<&str>, draft: &TableDraft) -> AppResult<Table> {
        validate_table_draft(draft)?;
        let table = match id {
            Some(id) => {
                self.gateway
                    .tables()
                    .update(id, &TableUpdate::from(draft))
                    .await?
            }
            None => self.gateway.tables().create(draft).await?,
        };
        tracing::info!(table_id = %table.id, table_number = table.table_number, "Table saved");
        Ok(table)
    }

    /// Delete a table. Guests seated there keep their stored number; the
    /// count of such guests is returned.
    pub async fn delete_table(&self, table: &Table) -> AppResult<usize> {
        let seated = self
            .gateway
            .guests()
            .filter(&[FieldFilter::table_number(table.table_number)])
            .await?;
        self.gateway.tables().delete(&table.id).await?;

        if seated.is_empty() {
            tracing::info!(table_id = %table.id, "Table deleted");
        } else {
            tracing::warn!(
                table_id = %table.id,
                table_number = table.table_number,
                guests = seated.len(),
                "Table deleted, guests keep a dangling table number"
            );
        }
        Ok(seated.len())
    }

    /// Persist the final position of a drag.
    pub async fn commit_move(&self, commit: &MoveCommit) -> AppResult<Table> {
        let update = TableUpdate::position(commit.position);
        match self.gateway.tables().update(&commit.table_id, &update).await {
            Ok(table) => {
                tracing::info!(
                    table_id = %commit.table_id,
                    x = commit.position.x,
                    y = commit.position.y,
                    "Table moved"
                );
                Ok(table)
            }
            Err(e) => {
                tracing::warn!(table_id = %commit.table_id, error = %e, "Move commit lost");
                Err(AppError::with_message(ErrorCode::LayoutCommitFailed, e.to_string())
                    .with_detail("table_id", commit.table_id.clone()))
            }
        }
    }

    /// Move every table onto the default grid, in the given order.
    ///
    /// Updates run concurrently and independently; some may land while
    /// others fail.
    pub async fn reset_layout(&self, tables: &[Table]) -> ResetReport {
        let placements = grid_positions(tables);
        let results = join_all(placements.iter().map(|placement| async move {
            let update = TableUpdate::position(placement.position);
            let result = self
                .gateway
                .tables()
                .update(&placement.table_id, &update)
                .await;
            (placement.table_id.clone(), result)
        }))
        .await;

        let mut report = ResetReport::default();
        for (table_id, result) in results {
            match result {
                Ok(table) => report.updated.push(table),
                Err(e) => {
                    tracing::warn!(table_id = %table_id, error = %e, "Grid reset failed for table");
                    report.failed.push((table_id, e.into()));
                }
            }
        }
        tracing::info!(
            updated = report.updated.len(),
            failed = report.failed.len(),
            "Layout reset"
        );
        report
    }
}
