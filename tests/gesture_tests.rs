use rplanner::core::gesture::{
    EditSession, EditState, GestureEvent, GestureOutcome, GridGeometry, resize_span,
};
use rplanner::store::AllocationStore;

mod common;
use common::store_on;

/// 10 columns of 160px.
fn grid() -> GridGeometry {
    GridGeometry::new(1600.0, 10)
}

fn with_one(day: u32, hours: f64) -> (AllocationStore, i64) {
    let mut store = store_on("2025-03-03");
    let id = store.create_allocation("PROJ X", "1", day, hours, None);
    (store, id)
}

#[test]
fn test_day_at_clamps_to_window() {
    let g = grid();
    assert_eq!(g.column_width(), 160.0);
    assert_eq!(g.day_at(0.0), 0);
    assert_eq!(g.day_at(159.9), 0);
    assert_eq!(g.day_at(160.0), 1);
    assert_eq!(g.day_at(-50.0), 0);
    assert_eq!(g.day_at(99_999.0), 9);
    assert_eq!(g.day_at(g.x_for_day(4)), 4);
}

#[test]
fn test_drag_and_drop_moves_allocation() {
    let (mut store, id) = with_one(0, 4.0);
    let mut session = EditSession::new();
    let g = grid();

    assert_eq!(
        session.handle(GestureEvent::DragStart(id), &mut store, &g),
        GestureOutcome::Started(EditState::Dragging(id))
    );

    let out = session.handle(
        GestureEvent::Drop {
            resource_id: "2".into(),
            x: g.x_for_day(5),
        },
        &mut store,
        &g,
    );

    assert_eq!(out, GestureOutcome::Moved { id, day: 5 });
    assert_eq!(session.state(), EditState::Idle);
    let a = store.allocation(id).unwrap();
    assert_eq!((a.resource_id.as_str(), a.day, a.hours), ("2", 5, 4.0));
    assert_eq!(store.capacity().hours_used("2", 5), 4.0);
}

#[test]
fn test_drop_may_overbook() {
    let mut store = store_on("2025-03-03");
    store.create_allocation("A", "1", 3, 6.0, None);
    let id = store.create_allocation("B", "2", 0, 6.0, None);
    let mut session = EditSession::new();
    let g = grid();

    session.handle(GestureEvent::DragStart(id), &mut store, &g);
    session.handle(
        GestureEvent::Drop {
            resource_id: "1".into(),
            x: g.x_for_day(3),
        },
        &mut store,
        &g,
    );

    assert_eq!(store.capacity().hours_used("1", 3), 12.0);
}

#[test]
fn test_resize_rederives_hours_from_span() {
    let (mut store, id) = with_one(2, 3.0);
    let mut session = EditSession::new();
    let g = grid();

    session.handle(GestureEvent::ResizeStart(id), &mut store, &g);
    let out = session.handle(GestureEvent::PointerMove { x: g.x_for_day(4) }, &mut store, &g);

    assert_eq!(
        out,
        GestureOutcome::Resized {
            id,
            span_days: 3,
            hours: 24.0
        }
    );
    let a = store.allocation(id).unwrap();
    assert_eq!(a.span_days, 3);
    assert_eq!(a.hours, 24.0);
}

#[test]
fn test_resize_writes_every_sample() {
    let (mut store, id) = with_one(0, 2.0);
    let mut session = EditSession::new();
    let g = grid();

    session.handle(GestureEvent::ResizeStart(id), &mut store, &g);

    let mut seen = Vec::new();
    for day in [3, 1, 6] {
        session.handle(GestureEvent::PointerMove { x: g.x_for_day(day) }, &mut store, &g);
        seen.push(store.allocation(id).unwrap().hours);
    }
    assert_eq!(seen, vec![32.0, 16.0, 56.0]);

    assert_eq!(
        session.handle(GestureEvent::Release, &mut store, &g),
        GestureOutcome::Ended
    );
    assert_eq!(session.state(), EditState::Idle);

    // moves after release no longer resize
    session.handle(GestureEvent::PointerMove { x: g.x_for_day(9) }, &mut store, &g);
    assert_eq!(store.allocation(id).unwrap().span_days, 7);
}

#[test]
fn test_resize_clamps_to_start_and_window() {
    let g = grid();
    assert_eq!(resize_span(4, g.x_for_day(1), &g), 1);
    assert_eq!(resize_span(4, -300.0, &g), 1);
    assert_eq!(resize_span(4, 50_000.0, &g), 6);
    assert_eq!(resize_span(0, 50_000.0, &g), 10);
    assert_eq!(resize_span(9, g.x_for_day(9), &g), 1);
}

#[test]
fn test_only_one_gesture_at_a_time() {
    let mut store = store_on("2025-03-03");
    let a = store.create_allocation("A", "1", 0, 2.0, None);
    let b = store.create_allocation("B", "2", 0, 2.0, None);
    let mut session = EditSession::new();
    let g = grid();

    session.handle(GestureEvent::DragStart(a), &mut store, &g);
    assert_eq!(
        session.handle(GestureEvent::ResizeStart(b), &mut store, &g),
        GestureOutcome::Ignored
    );
    assert_eq!(
        session.handle(GestureEvent::DragStart(b), &mut store, &g),
        GestureOutcome::Ignored
    );
    assert_eq!(session.state(), EditState::Dragging(a));

    // pointer moves do not resize while dragging
    session.handle(GestureEvent::PointerMove { x: g.x_for_day(5) }, &mut store, &g);
    assert_eq!(store.allocation(a).unwrap().span_days, 1);
}

#[test]
fn test_events_without_active_gesture_are_ignored() {
    let (mut store, id) = with_one(0, 2.0);
    let mut session = EditSession::new();
    let g = grid();
    let before = store.allocations().to_vec();

    for ev in [
        GestureEvent::PointerMove { x: 500.0 },
        GestureEvent::Release,
        GestureEvent::Drop {
            resource_id: "2".into(),
            x: 500.0,
        },
    ] {
        assert_eq!(session.handle(ev, &mut store, &g), GestureOutcome::Ignored);
    }
    assert_eq!(store.allocations(), before.as_slice());
    assert!(store.allocation(id).is_some());
}

#[test]
fn test_stale_target_is_dropped_silently() {
    let (mut store, id) = with_one(0, 2.0);
    let mut session = EditSession::new();
    let g = grid();

    session.handle(GestureEvent::ResizeStart(id), &mut store, &g);
    store.delete_allocation(id);
    store.take_dirty();

    assert_eq!(
        session.handle(GestureEvent::PointerMove { x: 800.0 }, &mut store, &g),
        GestureOutcome::Stale(id)
    );
    assert!(store.allocations().is_empty());
    assert!(!store.take_dirty().any());

    session.handle(GestureEvent::Release, &mut store, &g);
    session.handle(GestureEvent::DragStart(id), &mut store, &g);
    assert_eq!(
        session.handle(
            GestureEvent::Drop {
                resource_id: "1".into(),
                x: 0.0
            },
            &mut store,
            &g
        ),
        GestureOutcome::Stale(id)
    );
    assert_eq!(session.state(), EditState::Idle);
}
