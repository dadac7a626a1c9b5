//! Visual hooks of a drag session

use shared::Position;

/// Presentation callbacks driven by the [`SpatialEditor`](super::SpatialEditor).
///
/// `capture` and `release` are always paired: every captured table is
/// released exactly once, whichever way the drag ends.
pub trait DragSurface {
    /// Stop the table from receiving pointer input and raise it above the others.
    fn capture(&mut self, _table_id: &str) {}

    /// Show the table at `position` without persisting anything.
    fn preview(&mut self, _table_id: &str, _position: Position) {}

    /// Restore interactivity and stacking order.
    fn release(&mut self, _table_id: &str) {}
}

/// Surface for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSurface;

impl DragSurface for NoopSurface {}
