//! Entity Gateway
//!
//! Generic access to the remote entity store:
//! ```text
//!         ┌──────────────────────┐
//!         │ EntityGateway<E>     │  ◄── list / filter / create / update / delete
//!         └──────────┬───────────┘
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!     MemoryGateway       HttpGateway
//!     (in-process)        (REST client)
//! ```
//!
//! The planner core never holds an authoritative copy of any record. Every
//! component re-derives from the latest snapshot returned here.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::error::{AppError, ErrorCode};
use crate::models::{Guest, GuestDraft, LayoutItem, LayoutItemDraft, Table, TableDraft, TableUpdate};

/// A record kind stored behind the gateway
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Collection name on the store, e.g. `"Guest"`
    const KIND: &'static str;

    /// Payload accepted by `create`
    type Create: Serialize + Send + Sync;

    /// Payload accepted by `update`; only serialized keys are written
    type Update: Serialize + Send + Sync;

    fn id(&self) -> &str;
}

impl Entity for Guest {
    const KIND: &'static str = "Guest";
    type Create = GuestDraft;
    type Update = GuestDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Table {
    const KIND: &'static str = "Table";
    type Create = TableDraft;
    type Update = TableUpdate;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for LayoutItem {
    const KIND: &'static str = "LayoutItem";
    type Create = LayoutItemDraft;
    type Update = LayoutItemDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Sort order of a `list` call
///
/// Parsed from the store convention: `"table_number"` is ascending,
/// `"-created_date"` is descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    pub fn parse(key: &str) -> Self {
        match key.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(key),
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Wire form, the inverse of [`SortKey::parse`]
    pub fn as_query(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.clone()
        }
    }
}

/// Exact-match predicate on one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FieldFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn table_number(number: u32) -> Self {
        Self::equals("table_number", number)
    }

    /// Whether a serialized record satisfies this predicate
    pub fn matches(&self, record: &Value) -> bool {
        record.get(&self.field).unwrap_or(&Value::Null) == &self.value
    }
}

/// Entity gateway error types
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Rejected by store: {0}")]
    Rejected(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match &err {
            GatewayError::NotFound { kind, id } => {
                let code = if *kind == Guest::KIND {
                    ErrorCode::GuestNotFound
                } else if *kind == Table::KIND {
                    ErrorCode::TableNotFound
                } else {
                    ErrorCode::NotFound
                };
                AppError::with_message(code, err.to_string())
                    .with_detail("kind", *kind)
                    .with_detail("id", id.clone())
            }
            _ => AppError::with_message(ErrorCode::GatewayFailure, err.to_string()),
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote object store for one entity kind
///
/// All calls are asynchronous and may fail with a transport-level error.
#[async_trait]
pub trait EntityGateway<E: Entity>: Send + Sync {
    /// All records, optionally ordered by a field
    async fn list(&self, sort: Option<&SortKey>) -> GatewayResult<Vec<E>>;

    /// Records matching every predicate
    async fn filter(&self, filters: &[FieldFilter]) -> GatewayResult<Vec<E>>;

    async fn create(&self, data: &E::Create) -> GatewayResult<E>;

    async fn update(&self, id: &str, data: &E::Update) -> GatewayResult<E>;

    async fn delete(&self, id: &str) -> GatewayResult<()>;
}
