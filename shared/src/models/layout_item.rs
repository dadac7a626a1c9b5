//! Layout Item Model

use serde::{Deserialize, Serialize};

/// Fill colour used when a layout item has none
pub const DEFAULT_ITEM_COLOR: &str = "#8cabc0";

/// Decorative overlay on the room plan (dance floor, stage, bar, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl LayoutItem {
    pub fn color_or_default(&self) -> &str {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ITEM_COLOR)
    }
}

/// Create/update payload for a layout item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutItemDraft {
    pub name: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Option<String>,
}
