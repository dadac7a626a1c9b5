//! Seat Map
//!
//! Read-only room plan shown to guests: positioned table markers with the
//! guest's own table flagged, plus decorative layout items.
//!
//! Marker placement differs from the designer: a missing or zero stored
//! coordinate falls back to a spread-out row (`x = (number - 1) * 120 + 50`,
//! `y = 100`) so tables never stack at the origin.

use serde::Serialize;
use shared::models::{LayoutItem, ShapeIcon, Table, TableShape};

use crate::geometry::{Point, Rect, Size};

/// Max characters of a table name on a marker
pub const MARKER_NAME_CHARS: usize = 10;

const FALLBACK_STEP_X: f64 = 120.0;
const FALLBACK_X: f64 = 50.0;
const FALLBACK_Y: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableMarker {
    pub table_id: String,
    pub table_number: u32,
    pub label: Option<String>,
    pub capacity: u32,
    pub rect: Rect,
    pub icon: ShapeIcon,
    pub is_guest_table: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMarker {
    pub item_id: String,
    pub name: Option<String>,
    pub rect: Rect,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SeatMap {
    pub tables: Vec<TableMarker>,
    pub items: Vec<ItemMarker>,
}

impl SeatMap {
    /// `highlight` is the viewing guest's table number, if any.
    pub fn build(tables: &[Table], items: &[LayoutItem], highlight: Option<u32>) -> Self {
        Self {
            tables: tables.iter().map(|t| table_marker(t, highlight)).collect(),
            items: items.iter().map(item_marker).collect(),
        }
    }

    pub fn guest_table(&self) -> Option<&TableMarker> {
        self.tables.iter().find(|t| t.is_guest_table)
    }
}

fn marker_origin(table: &Table) -> Point {
    let stored = |v: Option<f64>| v.filter(|v| v.is_finite() && *v != 0.0);
    let x = stored(table.position_x).unwrap_or_else(|| {
        f64::from(table.table_number.saturating_sub(1)) * FALLBACK_STEP_X + FALLBACK_X
    });
    let y = stored(table.position_y).unwrap_or(FALLBACK_Y);
    Point::new(x, y)
}

fn table_marker(table: &Table, highlight: Option<u32>) -> TableMarker {
    let origin = marker_origin(table);
    let side = table.size.side();
    TableMarker {
        table_id: table.id.clone(),
        table_number: table.table_number,
        label: table.display_name(MARKER_NAME_CHARS),
        capacity: table.capacity,
        rect: Rect {
            origin,
            size: Size::square(side),
        },
        icon: match table.shape {
            TableShape::Square => ShapeIcon::Square,
            _ => ShapeIcon::Circle,
        },
        is_guest_table: highlight.is_some_and(|n| n > 0 && n == table.table_number),
    }
}

fn item_marker(item: &LayoutItem) -> ItemMarker {
    ItemMarker {
        item_id: item.id.clone(),
        name: item.name.clone(),
        rect: Rect::new(item.position_x, item.position_y, item.width, item.height),
        color: item.color_or_default().to_string(),
    }
}
