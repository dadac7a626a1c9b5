use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Records surface calls so tests can check capture/release pairing
#[derive(Clone, Default)]
struct RecordingSurface {
    calls: Rc<RefCell<Vec<String>>>,
}

impl RecordingSurface {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl DragSurface for RecordingSurface {
    fn capture(&mut self, table_id: &str) {
        self.calls.borrow_mut().push(format!("capture:{table_id}"));
    }

    fn preview(&mut self, table_id: &str, position: Position) {
        self.calls
            .borrow_mut()
            .push(format!("preview:{table_id}:{}:{}", position.x, position.y));
    }

    fn release(&mut self, table_id: &str) {
        self.calls.borrow_mut().push(format!("release:{table_id}"));
    }
}

/// Canvas at viewport (50, 20), 1000x600
const CANVAS: Rect = Rect::new(50.0, 20.0, 1000.0, 600.0);

fn editor() -> SpatialEditor {
    SpatialEditor::new(EditorConfig::default()).unwrap()
}

/// Grab table "t1" whose top-left sits at canvas offset (100, 100), 10px inside its corner.
fn grab(editor: &mut SpatialEditor<impl DragSurface>) -> DragEffect {
    editor.begin_drag(
        "t1",
        Point::new(160.0, 130.0),
        Point::new(150.0, 120.0),
        CANVAS,
    )
}

#[test]
fn test_drag_commits_pointer_relative_position() {
    let mut editor = editor();
    assert_eq!(
        grab(&mut editor),
        DragEffect::Started {
            table_id: "t1".into()
        }
    );
    assert_eq!(editor.dragged_table(), Some("t1"));

    let preview = editor.update_drag(Point::new(260.0, 180.0));
    assert_eq!(
        preview,
        DragEffect::Previewed {
            table_id: "t1".into(),
            position: Position::new(200.0, 150.0),
        }
    );

    let effect = editor.end_drag(Point::new(310.0, 230.0));
    assert_eq!(
        effect.commit(),
        Some(&MoveCommit {
            table_id: "t1".into(),
            position: Position::new(250.0, 200.0),
        })
    );
    assert!(!editor.is_dragging());
    assert_eq!(editor.state(), &DragState::Idle);
}

#[test]
fn test_drag_is_clamped_to_canvas() {
    let mut editor = editor();
    grab(&mut editor);

    let effect = editor.update_drag(Point::new(5000.0, -300.0));
    assert_eq!(
        effect,
        DragEffect::Previewed {
            table_id: "t1".into(),
            position: Position::new(888.0, 0.0),
        }
    );

    let commit = editor.end_drag(Point::new(-900.0, 9000.0)).into_commit().unwrap();
    assert_eq!(commit.position, Position::new(0.0, 488.0));
}

#[test]
fn test_committed_position_always_within_bounds() {
    let containers = [
        Size::new(1000.0, 600.0),
        Size::new(320.0, 240.0),
        Size::new(112.0, 112.0),
        Size::new(113.5, 400.25),
    ];
    let deltas = [-10_000.0, -250.0, -1.0, 0.5, 37.0, 111.9, 500.0, 1e9];

    for container in containers {
        for dx in deltas {
            for dy in deltas {
                let mut editor = editor();
                let canvas = Rect {
                    origin: Point::new(40.0, 40.0),
                    size: container,
                };
                editor.begin_drag("t", Point::new(45.0, 45.0), Point::new(40.0, 40.0), canvas);
                let commit = editor
                    .end_drag(Point::new(45.0 + dx, 45.0 + dy))
                    .into_commit()
                    .unwrap();

                let max_x = container.width - DEFAULT_TABLE_FOOTPRINT;
                let max_y = container.height - DEFAULT_TABLE_FOOTPRINT;
                assert!(commit.position.x.is_finite() && commit.position.y.is_finite());
                assert!(
                    (0.0..=max_x).contains(&commit.position.x),
                    "x={} container={container:?}",
                    commit.position.x
                );
                assert!(
                    (0.0..=max_y).contains(&commit.position.y),
                    "y={} container={container:?}",
                    commit.position.y
                );
            }
        }
    }
}

#[test]
fn test_click_without_movement_selects() {
    let mut editor = editor();
    grab(&mut editor);

    let effect = editor.end_drag(Point::new(160.0, 130.0));
    assert_eq!(
        effect,
        DragEffect::Selected {
            table_id: "t1".into()
        }
    );
    assert!(effect.commit().is_none());
    assert!(!editor.is_dragging());
}

#[test]
fn test_wiggle_back_to_origin_is_still_a_click() {
    let mut editor = editor();
    grab(&mut editor);
    editor.update_drag(Point::new(170.0, 140.0));

    let effect = editor.end_drag(Point::new(160.0, 130.0));
    assert!(matches!(effect, DragEffect::Selected { .. }));
}

#[test]
fn test_second_drag_rejected_while_active() {
    let mut editor = editor();
    grab(&mut editor);

    let effect = editor.begin_drag("t2", Point::new(0.0, 0.0), Point::new(0.0, 0.0), CANVAS);
    assert_eq!(effect, DragEffect::Noop(NoopReason::DragAlreadyActive));
    assert_eq!(editor.dragged_table(), Some("t1"));
}

#[test]
fn test_inputs_while_idle_are_noops() {
    let mut editor = editor();
    assert_eq!(
        editor.update_drag(Point::new(1.0, 1.0)),
        DragEffect::Noop(NoopReason::NoActiveDrag)
    );
    assert_eq!(
        editor.end_drag(Point::new(1.0, 1.0)),
        DragEffect::Noop(NoopReason::NoActiveDrag)
    );
    assert_eq!(editor.cancel(), DragEffect::Noop(NoopReason::NoActiveDrag));
}

#[test]
fn test_non_finite_input_is_ignored() {
    let mut editor = editor();
    let effect = editor.begin_drag("t1", Point::new(f64::NAN, 0.0), Point::new(0.0, 0.0), CANVAS);
    assert_eq!(effect, DragEffect::Noop(NoopReason::InvalidGeometry));
    assert!(!editor.is_dragging());

    grab(&mut editor);
    editor.update_drag(Point::new(260.0, 180.0));
    assert_eq!(
        editor.update_drag(Point::new(f64::INFINITY, 0.0)),
        DragEffect::Noop(NoopReason::InvalidGeometry)
    );

    // release with a bad pointer falls back to the last tracked one
    let commit = editor
        .end_drag(Point::new(f64::NAN, f64::NAN))
        .into_commit()
        .unwrap();
    assert_eq!(commit.position, Position::new(200.0, 150.0));
}

#[test]
fn test_cancel_commits_last_known_position() {
    let mut editor = editor();
    grab(&mut editor);
    editor.update_drag(Point::new(260.0, 180.0));

    let commit = editor.cancel().into_commit().unwrap();
    assert_eq!(commit.table_id, "t1");
    assert_eq!(commit.position, Position::new(200.0, 150.0));
    assert!(!editor.is_dragging());
}

#[test]
fn test_cancel_before_moving_releases_without_selecting() {
    let mut editor = editor();
    grab(&mut editor);

    assert_eq!(
        editor.cancel(),
        DragEffect::Released {
            table_id: "t1".into()
        }
    );
}

#[test]
fn test_container_change_applies_to_later_moves() {
    let mut editor = editor();
    grab(&mut editor);
    editor.set_container(Rect::new(50.0, 20.0, 300.0, 300.0));

    let commit = editor
        .end_drag(Point::new(900.0, 900.0))
        .into_commit()
        .unwrap();
    assert_eq!(commit.position, Position::new(188.0, 188.0));
}

#[test]
fn test_cancel_after_container_shrinks_stays_in_bounds() {
    let mut editor = editor();
    grab(&mut editor);
    editor.update_drag(Point::new(5000.0, 5000.0));
    editor.set_container(Rect::new(50.0, 20.0, 400.0, 300.0));

    let commit = editor.cancel().into_commit().unwrap();
    // 400 - 112, 300 - 112
    assert_eq!(commit.position, Position::new(288.0, 188.0));
}

#[test]
fn test_surface_capture_and_release_are_paired() {
    let surface = RecordingSurface::default();
    let mut editor =
        SpatialEditor::with_surface(EditorConfig::default(), surface.clone()).unwrap();

    grab(&mut editor);
    editor.update_drag(Point::new(260.0, 180.0));
    editor.end_drag(Point::new(260.0, 180.0));

    grab(&mut editor);
    editor.cancel();

    assert_eq!(
        surface.calls(),
        vec![
            "capture:t1",
            "preview:t1:200:150",
            "release:t1",
            "capture:t1",
            "release:t1",
        ]
    );
}

#[test]
fn test_dropping_editor_mid_drag_releases_surface() {
    let surface = RecordingSurface::default();
    {
        let mut editor =
            SpatialEditor::with_surface(EditorConfig::default(), surface.clone()).unwrap();
        grab(&mut editor);
    }
    assert_eq!(surface.calls(), vec!["capture:t1", "release:t1"]);
}

#[test]
fn test_invalid_footprint_rejected() {
    let config = EditorConfig {
        footprint: Size::new(0.0, 112.0),
    };
    assert_eq!(
        SpatialEditor::new(config).unwrap_err(),
        EditorError::InvalidFootprint {
            width: 0.0,
            height: 112.0
        }
    );

    let config = EditorConfig {
        footprint: Size::square(f64::NAN),
    };
    assert!(SpatialEditor::new(config).is_err());
}
