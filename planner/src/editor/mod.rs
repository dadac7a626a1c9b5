//! Spatial Editor
//!
//! Drag-to-reposition engine for the table designer canvas.
//!
//! ```text
//! Idle --begin_drag--> Dragging --update_drag--> Dragging
//!   ^                     |
//!   +----end_drag/cancel--+
//! ```
//!
//! One table at most is tracked at a time. Pointer movement only produces
//! transient previews; the position is emitted once, as a [`MoveCommit`],
//! when the drag ends. Persisting it is the caller's job (see
//! [`LayoutService::commit_move`](crate::services::LayoutService::commit_move)).
//!
//! Visual side effects (lifting the grabbed table, live transform,
//! restoring it) go through a [`DragSurface`]. The surface is captured when
//! a drag begins and released on every exit path: end, cancel, and drop of
//! the editor itself.

mod surface;

pub use surface::{DragSurface, NoopSurface};

use serde::Serialize;
use shared::Position;
use thiserror::Error;

use crate::geometry::{Point, Rect, Size, clamp_to_container};

/// Side of the square table footprint in the designer view
pub const DEFAULT_TABLE_FOOTPRINT: f64 = 112.0;

/// Editor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Size every table occupies on the designer canvas
    pub footprint: Size,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            footprint: Size::square(DEFAULT_TABLE_FOOTPRINT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Invalid table footprint {width}x{height}")]
    InvalidFootprint { width: f64, height: f64 },
}

/// Bookkeeping of the drag in progress
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub table_id: String,
    /// Pointer position minus the table's top-left corner at grab time
    pub offset: Point,
    /// Canvas bounds in viewport space
    pub container: Rect,
    pub pointer_down: Point,
    pub last_pointer: Point,
    /// Last clamped canvas offset
    pub position: Position,
}

impl DragSession {
    fn has_moved(&self, pointer: Point) -> bool {
        pointer != self.pointer_down
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Final position of a dragged table, to be persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveCommit {
    pub table_id: String,
    pub position: Position,
}

/// Why an input was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    NoActiveDrag,
    DragAlreadyActive,
    InvalidGeometry,
}

/// Outcome of one editor input
#[derive(Debug, Clone, PartialEq)]
pub enum DragEffect {
    Started { table_id: String },
    Previewed { table_id: String, position: Position },
    Committed(MoveCommit),
    /// Pointer went down and up without net movement
    Selected { table_id: String },
    /// Tracking was lost before the pointer moved; nothing to commit
    Released { table_id: String },
    Noop(NoopReason),
}

impl DragEffect {
    pub fn commit(&self) -> Option<&MoveCommit> {
        match self {
            Self::Committed(commit) => Some(commit),
            _ => None,
        }
    }

    pub fn into_commit(self) -> Option<MoveCommit> {
        match self {
            Self::Committed(commit) => Some(commit),
            _ => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop(_))
    }
}

/// Drag state machine for the designer canvas
pub struct SpatialEditor<S: DragSurface = NoopSurface> {
    config: EditorConfig,
    state: DragState,
    surface: S,
}

impl SpatialEditor<NoopSurface> {
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        Self::with_surface(config, NoopSurface)
    }
}

impl<S: DragSurface> SpatialEditor<S> {
    pub fn with_surface(config: EditorConfig, surface: S) -> Result<Self, EditorError> {
        let Size { width, height } = config.footprint;
        if !config.footprint.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(EditorError::InvalidFootprint { width, height });
        }
        Ok(Self {
            config,
            state: DragState::Idle,
            surface,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Id of the table being dragged, if any
    pub fn dragged_table(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging(session) => Some(&session.table_id),
            DragState::Idle => None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Pointer went down on a table.
    ///
    /// `table_origin` is the table's top-left corner and `container` the
    /// canvas bounds, both in viewport space.
    pub fn begin_drag(
        &mut self,
        table_id: impl Into<String>,
        pointer: Point,
        table_origin: Point,
        container: Rect,
    ) -> DragEffect {
        if self.is_dragging() {
            return DragEffect::Noop(NoopReason::DragAlreadyActive);
        }
        if !pointer.is_finite() || !table_origin.is_finite() || !container.is_finite() {
            return DragEffect::Noop(NoopReason::InvalidGeometry);
        }

        let table_id = table_id.into();
        let offset = pointer - table_origin;
        let mut session = DragSession {
            table_id: table_id.clone(),
            offset,
            container,
            pointer_down: pointer,
            last_pointer: pointer,
            position: Position::default(),
        };
        session.position = self.clamped(&session, pointer);

        self.surface.capture(&table_id);
        tracing::debug!(table_id = %table_id, x = session.position.x, y = session.position.y, "Drag started");
        self.state = DragState::Dragging(session);

        DragEffect::Started { table_id }
    }

    /// Pointer moved while a drag is active. Produces a preview only.
    pub fn update_drag(&mut self, pointer: Point) -> DragEffect {
        let footprint = self.config.footprint;
        let DragState::Dragging(session) = &mut self.state else {
            return DragEffect::Noop(NoopReason::NoActiveDrag);
        };
        if !pointer.is_finite() {
            return DragEffect::Noop(NoopReason::InvalidGeometry);
        }

        session.last_pointer = pointer;
        session.position = clamp_to_container(
            pointer - session.container.origin - session.offset,
            session.container.size,
            footprint,
        );
        self.surface.preview(&session.table_id, session.position);

        DragEffect::Previewed {
            table_id: session.table_id.clone(),
            position: session.position,
        }
    }

    /// Canvas was resized or scrolled during the drag.
    pub fn set_container(&mut self, container: Rect) {
        if !container.is_finite() {
            return;
        }
        let footprint = self.config.footprint;
        if let DragState::Dragging(session) = &mut self.state {
            session.container = container;
            session.position = clamp_to_container(
                session.last_pointer - container.origin - session.offset,
                container.size,
                footprint,
            );
        }
    }

    /// Pointer released. Commits the clamped position, or selects the table
    /// when the pointer ends where it went down.
    pub fn end_drag(&mut self, pointer: Point) -> DragEffect {
        let DragState::Dragging(mut session) = std::mem::take(&mut self.state) else {
            return DragEffect::Noop(NoopReason::NoActiveDrag);
        };
        self.surface.release(&session.table_id);

        let pointer = if pointer.is_finite() {
            pointer
        } else {
            session.last_pointer
        };

        if !session.has_moved(pointer) {
            tracing::debug!(table_id = %session.table_id, "Click without drag");
            return DragEffect::Selected {
                table_id: session.table_id,
            };
        }

        session.position = self.clamped(&session, pointer);
        tracing::debug!(
            table_id = %session.table_id,
            x = session.position.x,
            y = session.position.y,
            "Drag committed"
        );
        DragEffect::Committed(MoveCommit {
            table_id: session.table_id,
            position: session.position,
        })
    }

    /// Pointer tracking was lost (capture stolen, window blurred, ...).
    ///
    /// Behaves like a release at the last known pointer position, except
    /// that an unmoved table is not selected.
    pub fn cancel(&mut self) -> DragEffect {
        let DragState::Dragging(mut session) = std::mem::take(&mut self.state) else {
            return DragEffect::Noop(NoopReason::NoActiveDrag);
        };
        self.surface.release(&session.table_id);

        if !session.has_moved(session.last_pointer) {
            return DragEffect::Released {
                table_id: session.table_id,
            };
        }

        session.position = self.clamped(&session, session.last_pointer);
        tracing::debug!(table_id = %session.table_id, "Drag cancelled, committing last position");
        DragEffect::Committed(MoveCommit {
            table_id: session.table_id,
            position: session.position,
        })
    }

    fn clamped(&self, session: &DragSession, pointer: Point) -> Position {
        clamp_to_container(
            pointer - session.container.origin - session.offset,
            session.container.size,
            self.config.footprint,
        )
    }
}

impl<S: DragSurface> Drop for SpatialEditor<S> {
    fn drop(&mut self) {
        if let DragState::Dragging(session) = &self.state {
            self.surface.release(&session.table_id);
        }
    }
}

impl<S: DragSurface> std::fmt::Debug for SpatialEditor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialEditor")
            .field("footprint", &self.config.footprint)
            .field("dragging", &self.dragged_table())
            .finish()
    }
}

#[cfg(test)]
mod tests;
