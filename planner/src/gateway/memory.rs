//! In-process entity store
//!
//! Records are kept as JSON objects per entity kind, so sorting and
//! filtering work on the same field representation the remote store uses.
//! Ids are UUID v4 strings and `created_date` is stamped on create.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use shared::gateway::{Entity, EntityGateway, FieldFilter, GatewayError, GatewayResult, SortKey};
use uuid::Uuid;

/// Injected failures
#[derive(Debug, Default)]
struct FailurePlan {
    offline: bool,
    kinds: HashSet<&'static str>,
    updates: HashSet<String>,
}

impl FailurePlan {
    fn check(&self, kind: &'static str) -> GatewayResult<()> {
        if self.offline || self.kinds.contains(kind) {
            return Err(GatewayError::Transport(format!("{kind} store unreachable")));
        }
        Ok(())
    }
}

/// Entity store held in memory
#[derive(Debug, Default)]
pub struct MemoryGateway {
    /// Kind -> records in insertion order
    collections: RwLock<HashMap<&'static str, Vec<Value>>>,
    failures: RwLock<FailurePlan>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a full record as-is, replacing any record with the same id.
    pub fn insert<E: Entity>(&self, record: &E) -> GatewayResult<()> {
        let value = serde_json::to_value(record)?;
        let mut collections = self.collections.write();
        let records = collections.entry(E::KIND).or_default();
        match records.iter_mut().find(|r| record_id(r) == Some(record.id())) {
            Some(existing) => *existing = value,
            None => records.push(value),
        }
        Ok(())
    }

    /// Current records of one kind, in insertion order
    pub fn records<E: Entity>(&self) -> GatewayResult<Vec<E>> {
        let collections = self.collections.read();
        collections
            .get(E::KIND)
            .map(|records| records.iter().cloned().map(decode).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Fail every call until switched back
    pub fn set_offline(&self, offline: bool) {
        self.failures.write().offline = offline;
    }

    /// Fail every call for one entity kind
    pub fn fail_kind<E: Entity>(&self) {
        self.failures.write().kinds.insert(E::KIND);
    }

    /// Fail updates of one record
    pub fn fail_updates_for(&self, id: impl Into<String>) {
        self.failures.write().updates.insert(id.into());
    }

    pub fn clear_failures(&self) {
        *self.failures.write() = FailurePlan::default();
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn decode<E: Entity>(value: Value) -> GatewayResult<E> {
    serde_json::from_value(value).map_err(GatewayError::from)
}

fn into_object(value: Value) -> GatewayResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(GatewayError::Rejected(format!(
            "payload must be an object, got {other}"
        ))),
    }
}

fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}

/// Field ordering: null first, then numbers, strings (dates by instant), bools.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Number(_) => 1,
            Value::String(_) => 2,
            Value::Bool(_) => 3,
            Value::Array(_) | Value::Object(_) => 4,
        }
    }

    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => match (parse_date(x), parse_date(y)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => x.cmp(y),
        },
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn sort_records(records: &mut [Value], sort: &SortKey) {
    records.sort_by(|a, b| {
        let a = a.get(&sort.field).unwrap_or(&Value::Null);
        let b = b.get(&sort.field).unwrap_or(&Value::Null);
        let ordering = compare_values(a, b);
        if sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

#[async_trait]
impl<E: Entity> EntityGateway<E> for MemoryGateway {
    async fn list(&self, sort: Option<&SortKey>) -> GatewayResult<Vec<E>> {
        self.failures.read().check(E::KIND)?;
        let mut records = self
            .collections
            .read()
            .get(E::KIND)
            .cloned()
            .unwrap_or_default();
        if let Some(sort) = sort {
            sort_records(&mut records, sort);
        }
        records.into_iter().map(decode).collect()
    }

    async fn filter(&self, filters: &[FieldFilter]) -> GatewayResult<Vec<E>> {
        self.failures.read().check(E::KIND)?;
        let collections = self.collections.read();
        collections
            .get(E::KIND)
            .into_iter()
            .flatten()
            .filter(|record| filters.iter().all(|f| f.matches(record)))
            .cloned()
            .map(decode)
            .collect()
    }

    async fn create(&self, data: &E::Create) -> GatewayResult<E> {
        self.failures.read().check(E::KIND)?;
        let mut record = into_object(serde_json::to_value(data)?)?;
        record.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        record.insert("created_date".into(), serde_json::to_value(Utc::now())?);

        let record = Value::Object(record);
        let entity: E = serde_json::from_value(record.clone())
            .map_err(|e| GatewayError::Rejected(format!("invalid {}: {e}", E::KIND)))?;

        self.collections
            .write()
            .entry(E::KIND)
            .or_default()
            .push(record);
        Ok(entity)
    }

    async fn update(&self, id: &str, data: &E::Update) -> GatewayResult<E> {
        {
            let failures = self.failures.read();
            failures.check(E::KIND)?;
            if failures.updates.contains(id) {
                return Err(GatewayError::Transport(format!("update of {id} timed out")));
            }
        }
        let changes = into_object(serde_json::to_value(data)?)?;

        let mut collections = self.collections.write();
        let not_found = || GatewayError::NotFound {
            kind: E::KIND,
            id: id.to_string(),
        };
        let stored = collections
            .get_mut(E::KIND)
            .and_then(|records| records.iter_mut().find(|r| record_id(r) == Some(id)))
            .ok_or_else(not_found)?;

        let mut merged = stored.clone();
        if let Value::Object(fields) = &mut merged {
            for (key, value) in changes {
                if key != "id" {
                    fields.insert(key, value);
                }
            }
        }

        // Validate before writing so a bad update leaves the record intact
        let entity: E = serde_json::from_value(merged.clone())
            .map_err(|e| GatewayError::Rejected(format!("invalid {}: {e}", E::KIND)))?;
        *stored = merged;
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        self.failures.read().check(E::KIND)?;
        let mut collections = self.collections.write();
        let records = collections.entry(E::KIND).or_default();
        let before = records.len();
        records.retain(|r| record_id(r) != Some(id));
        if records.len() == before {
            return Err(GatewayError::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Guest, GuestDraft, Table, TableDraft, TableUpdate};

    fn tables(gateway: &MemoryGateway) -> &dyn EntityGateway<Table> {
        gateway
    }

    fn guests(gateway: &MemoryGateway) -> &dyn EntityGateway<Guest> {
        gateway
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_date() {
        let gateway = MemoryGateway::new();
        let table = tables(&gateway)
            .create(&TableDraft::numbered(4).with_name("Family"))
            .await
            .unwrap();

        assert!(Uuid::parse_str(&table.id).is_ok());
        assert!(table.created_date.is_some());
        assert_eq!(table.capacity, 8);
        assert_eq!(gateway.records::<Table>().unwrap(), vec![table]);
    }

    #[tokio::test]
    async fn test_create_without_number_is_rejected() {
        let gateway = MemoryGateway::new();
        let err = tables(&gateway)
            .create(&TableDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(_)));
        assert!(gateway.records::<Table>().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_sorts_ascending_and_descending() {
        let gateway = MemoryGateway::new();
        for n in [3, 1, 2] {
            tables(&gateway).create(&TableDraft::numbered(n)).await.unwrap();
        }

        let asc = tables(&gateway)
            .list(Some(&SortKey::parse("table_number")))
            .await
            .unwrap();
        let numbers: Vec<_> = asc.iter().map(|t| t.table_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let desc = tables(&gateway)
            .list(Some(&SortKey::parse("-table_number")))
            .await
            .unwrap();
        let numbers: Vec<_> = desc.iter().map(|t| t.table_number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_sort_by_date_puts_missing_dates_first() {
        let gateway = MemoryGateway::new();
        let seed = serde_json::json!([
            {"id": "old", "name": "Old", "created_date": "2026-01-01T10:00:00Z"},
            {"id": "none", "name": "None"},
            {"id": "new", "name": "New", "created_date": "2026-03-01T10:00:00+02:00"},
        ]);
        for guest in serde_json::from_value::<Vec<Guest>>(seed).unwrap() {
            gateway.insert(&guest).unwrap();
        }

        let list = guests(&gateway)
            .list(Some(&SortKey::parse("-created_date")))
            .await
            .unwrap();
        let ids: Vec<_> = list.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "none"]);
    }

    #[tokio::test]
    async fn test_filter_by_table_number() {
        let gateway = MemoryGateway::new();
        guests(&gateway).create(&GuestDraft::new("Ana").with_table(2)).await.unwrap();
        guests(&gateway).create(&GuestDraft::new("Ben")).await.unwrap();
        guests(&gateway).create(&GuestDraft::new("Cai").with_table(2)).await.unwrap();

        let seated = guests(&gateway)
            .filter(&[FieldFilter::table_number(2)])
            .await
            .unwrap();
        let names: Vec<_> = seated.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Cai"]);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let gateway = MemoryGateway::new();
        let table = tables(&gateway)
            .create(&TableDraft::numbered(1).with_name("Head"))
            .await
            .unwrap();

        let update = TableUpdate {
            position_x: Some(240.0),
            ..Default::default()
        };
        let updated = tables(&gateway).update(&table.id, &update).await.unwrap();
        assert_eq!(updated.position_x, Some(240.0));
        assert_eq!(updated.position_y, Some(100.0));
        assert_eq!(updated.table_name.as_deref(), Some("Head"));
        assert_eq!(updated.id, table.id);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_record() {
        let gateway = MemoryGateway::new();
        let err = tables(&gateway)
            .update("nope", &TableUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotFound { kind: "Table", .. }));

        let err = tables(&gateway).delete("nope").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let gateway = MemoryGateway::new();
        let table = tables(&gateway).create(&TableDraft::numbered(1)).await.unwrap();

        gateway.fail_updates_for(table.id.clone());
        let err = tables(&gateway)
            .update(&table.id, &TableUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(tables(&gateway).list(None).await.is_ok());

        gateway.set_offline(true);
        assert!(tables(&gateway).list(None).await.is_err());
        assert!(guests(&gateway).list(None).await.is_err());

        gateway.clear_failures();
        gateway.fail_kind::<Guest>();
        assert!(tables(&gateway).list(None).await.is_ok());
        assert!(guests(&gateway).list(None).await.is_err());
    }
}
