//! Seat Lookup Service - guest-facing "find my table"

use std::sync::Arc;

use shared::error::AppResult;
use shared::gateway::{FieldFilter, SortKey};
use shared::models::Table;

use super::PlannerGateway;
use crate::layout::SeatMap;
use crate::seating::{SeatLookup, find_seat, match_guest};

pub struct SeatLookupService<G> {
    gateway: Arc<G>,
}

impl<G> Clone for SeatLookupService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<G: PlannerGateway> SeatLookupService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Resolve a name against the current guest list.
    ///
    /// Gateway failures are logged and answered with
    /// [`SeatLookup::NotFound`]; the guest page has no other error state.
    pub async fn search(&self, query: &str) -> SeatLookup {
        let guests = match self.gateway.guests().list(None).await {
            Ok(guests) => guests,
            Err(e) => {
                tracing::warn!(error = %e, "Seat lookup could not load guests");
                return SeatLookup::NotFound;
            }
        };

        let number = match match_guest(query, &guests) {
            Some(found) => found.guest.assigned_table(),
            None => return SeatLookup::NotFound,
        };

        let tables: Vec<Table> = match number {
            Some(number) => {
                match self
                    .gateway
                    .tables()
                    .filter(&[FieldFilter::table_number(number)])
                    .await
                {
                    Ok(tables) => tables,
                    Err(e) => {
                        tracing::warn!(table_number = number, error = %e, "Seat lookup could not load table");
                        return SeatLookup::NotFound;
                    }
                }
            }
            None => Vec::new(),
        };

        find_seat(query, &guests, &tables)
    }

    /// Room plan with `highlight` flagged as the guest's table.
    ///
    /// A failing layout item listing leaves the overlay empty.
    pub async fn seat_map(&self, highlight: Option<u32>) -> AppResult<SeatMap> {
        let tables = self
            .gateway
            .tables()
            .list(Some(&SortKey::ascending("table_number")))
            .await?;
        let items = self
            .gateway
            .layout_items()
            .list(None)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Layout items unavailable, showing tables only");
                Vec::new()
            });
        Ok(SeatMap::build(&tables, &items, highlight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryGateway;
    use shared::models::{Guest, LayoutItem};

    fn seeded() -> Arc<MemoryGateway> {
        let gateway = Arc::new(MemoryGateway::new());
        let guests: Vec<Guest> = serde_json::from_value(serde_json::json!([
            {"id": "g1", "name": "Jane Smith", "table_number": 2},
            {"id": "g2", "name": "Jane Doe", "table_number": 4},
            {"id": "g3", "name": "Omar Haddad", "table_number": 4},
            {"id": "g4", "name": "Lin Wu"},
        ]))
        .unwrap();
        for guest in &guests {
            gateway.insert(guest).unwrap();
        }
        let tables: Vec<Table> = serde_json::from_value(serde_json::json!([
            {"id": "t2", "table_number": 2},
            {"id": "t4", "table_number": 4, "table_name": "Family"},
        ]))
        .unwrap();
        for table in &tables {
            gateway.insert(table).unwrap();
        }
        gateway
            .insert(&LayoutItem {
                id: "i1".into(),
                name: Some("Stage".into()),
                position_x: 0.0,
                position_y: 0.0,
                width: 200.0,
                height: 80.0,
                color: None,
            })
            .unwrap();
        gateway
    }

    #[tokio::test]
    async fn test_search_resolves_table_and_tablemates() {
        let service = SeatLookupService::new(seeded());
        let lookup = service.search("jane doe").await;
        let seat = lookup.assignment().unwrap();
        assert_eq!(seat.guest.id, "g2");
        assert_eq!(seat.table.as_ref().unwrap().id, "t4");
        assert_eq!(seat.table_guests.len(), 1);
        assert_eq!(seat.table_guests[0].name, "Omar Haddad");
    }

    #[tokio::test]
    async fn test_search_guest_without_table() {
        let service = SeatLookupService::new(seeded());
        let lookup = service.search("Lin").await;
        let seat = lookup.assignment().unwrap();
        assert!(seat.table.is_none());
        assert!(seat.table_guests.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_reads_as_not_found() {
        let gateway = seeded();
        let service = SeatLookupService::new(gateway.clone());

        gateway.fail_kind::<Table>();
        assert_eq!(service.search("Jane Doe").await, SeatLookup::NotFound);

        gateway.set_offline(true);
        assert_eq!(service.search("Jane Doe").await, SeatLookup::NotFound);
    }

    #[tokio::test]
    async fn test_seat_map_degrades_without_items() {
        let gateway = seeded();
        let service = SeatLookupService::new(gateway.clone());

        let map = service.seat_map(Some(4)).await.unwrap();
        assert_eq!(map.items.len(), 1);
        assert_eq!(map.guest_table().unwrap().table_id, "t4");

        gateway.fail_kind::<LayoutItem>();
        let map = service.seat_map(Some(4)).await.unwrap();
        assert!(map.items.is_empty());
        assert_eq!(map.tables.len(), 2);
    }
}
