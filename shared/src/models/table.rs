//! Reception Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default seat count of a new table
pub const DEFAULT_CAPACITY: u32 = 8;

/// Fallback canvas offset used when a table has no stored position
pub const DEFAULT_POSITION: f64 = 100.0;

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

/// Pixel offset of a table inside the design canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Table shape
///
/// Unknown wire values fall back to [`TableShape::Round`] instead of failing
/// the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TableShape {
    #[default]
    Round,
    Square,
    Rectangular,
}

/// Icon drawn next to the table number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeIcon {
    Circle,
    Square,
    Minus,
}

impl TableShape {
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "rectangular" => Self::Rectangular,
            _ => Self::Round,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Square => "square",
            Self::Rectangular => "rectangular",
        }
    }

    /// Icon used by the designer and the sidebar
    pub fn icon(&self) -> ShapeIcon {
        match self {
            Self::Round => ShapeIcon::Circle,
            Self::Square => ShapeIcon::Square,
            Self::Rectangular => ShapeIcon::Minus,
        }
    }
}

impl From<String> for TableShape {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl From<TableShape> for String {
    fn from(shape: TableShape) -> Self {
        shape.as_str().to_string()
    }
}

/// Table footprint class, unknown values fall back to [`TableSize::Medium`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TableSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TableSize {
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Square side length in canvas pixels
    pub fn side(&self) -> f64 {
        match self {
            Self::Small => 80.0,
            Self::Medium => 112.0,
            Self::Large => 140.0,
        }
    }
}

impl From<String> for TableSize {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl From<TableSize> for String {
    fn from(size: TableSize) -> Self {
        size.as_str().to_string()
    }
}

/// Reception table entity
///
/// `table_number` is the join key guests refer to. Uniqueness is intended
/// but not enforced; lookups resolve duplicates to the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub table_number: u32,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default)]
    pub shape: TableShape,
    #[serde(default)]
    pub size: TableSize,
    #[serde(default)]
    pub position_x: Option<f64>,
    #[serde(default)]
    pub position_y: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

impl Table {
    /// Stored position, each axis falling back to 100 when absent or not finite.
    pub fn position(&self) -> Position {
        let axis = |v: Option<f64>| v.filter(|v| v.is_finite()).unwrap_or(DEFAULT_POSITION);
        Position::new(axis(self.position_x), axis(self.position_y))
    }

    /// Table name shortened to `max_chars`, with `...` appended when cut.
    pub fn display_name(&self, max_chars: usize) -> Option<String> {
        let name = self.table_name.as_deref().filter(|n| !n.is_empty())?;
        if name.chars().count() > max_chars {
            let cut: String = name.chars().take(max_chars).collect();
            Some(format!("{cut}..."))
        } else {
            Some(name.to_string())
        }
    }
}

/// Table form payload for create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDraft {
    /// Missing until the user fills the form in
    pub table_number: Option<u32>,
    pub table_name: Option<String>,
    pub capacity: u32,
    pub shape: TableShape,
    pub size: TableSize,
    pub position_x: f64,
    pub position_y: f64,
    pub notes: Option<String>,
}

impl Default for TableDraft {
    fn default() -> Self {
        Self {
            table_number: None,
            table_name: None,
            capacity: DEFAULT_CAPACITY,
            shape: TableShape::Round,
            size: TableSize::Medium,
            position_x: DEFAULT_POSITION,
            position_y: DEFAULT_POSITION,
            notes: None,
        }
    }
}

impl TableDraft {
    pub fn numbered(table_number: u32) -> Self {
        Self {
            table_number: Some(table_number),
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }
}

/// Partial table update, absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<TableShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TableSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TableUpdate {
    /// Update touching only the canvas position
    pub fn position(position: Position) -> Self {
        Self {
            position_x: Some(position.x),
            position_y: Some(position.y),
            ..Default::default()
        }
    }
}

impl From<&TableDraft> for TableUpdate {
    fn from(draft: &TableDraft) -> Self {
        Self {
            table_number: draft.table_number,
            table_name: draft.table_name.clone(),
            capacity: Some(draft.capacity),
            shape: Some(draft.shape),
            size: Some(draft.size),
            position_x: Some(draft.position_x),
            position_y: Some(draft.position_y),
            notes: draft.notes.clone(),
        }
    }
}
