//! Grid reset of table positions

use serde::Serialize;
use shared::models::{Position, Table};

/// Tables per grid row
pub const COLUMNS: usize = 4;
pub const SPACING_X: f64 = 200.0;
pub const SPACING_Y: f64 = 150.0;
/// Offset of the first cell from the canvas corner
pub const ORIGIN: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridPlacement {
    pub table_id: String,
    pub position: Position,
}

/// Position of the `index`-th table in display order
pub fn grid_position(index: usize) -> Position {
    Position::new(
        (index % COLUMNS) as f64 * SPACING_X + ORIGIN,
        (index / COLUMNS) as f64 * SPACING_Y + ORIGIN,
    )
}

/// Grid placement for every table, in the given order.
pub fn grid_positions(tables: &[Table]) -> Vec<GridPlacement> {
    tables
        .iter()
        .enumerate()
        .map(|(i, table)| GridPlacement {
            table_id: table.id.clone(),
            position: grid_position(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(n: usize) -> Vec<Table> {
        (0..n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": format!("t{i}"),
                    "table_number": i + 1,
                    "position_x": 7.0,
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_five_tables_wrap_after_four() {
        let placements = grid_positions(&tables(5));
        let positions: Vec<_> = placements.iter().map(|p| (p.position.x, p.position.y)).collect();
        assert_eq!(
            positions,
            vec![
                (100.0, 100.0),
                (300.0, 100.0),
                (500.0, 100.0),
                (700.0, 100.0),
                (100.0, 250.0),
            ]
        );
        assert_eq!(placements[4].table_id, "t4");
    }

    #[test]
    fn test_same_order_same_output() {
        let list = tables(9);
        assert_eq!(grid_positions(&list), grid_positions(&list));
        assert_eq!(grid_position(8), Position::new(100.0, 400.0));
    }

    #[test]
    fn test_no_tables() {
        assert!(grid_positions(&[]).is_empty());
    }
}
