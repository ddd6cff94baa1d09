use jumperkit_core::{Cell, Color, ColorNormalizer};
use jumperkit_designer::{flood_fill, paint, DesignStore, HistoryLog, OperationKind};
use jumperkit_shapes::ShapeGeometry;
use std::sync::Arc;

fn store() -> DesignStore {
    DesignStore::new(Arc::new(ShapeGeometry::rectangle(10, 10)))
}

#[test]
fn test_undo_restores_overwritten_colors() {
    let n = ColorNormalizer::default();
    let mut store = store();
    let mut history = HistoryLog::new(10);

    history.record(paint(&mut store, [Cell::new(5, 5)], &Color::new("#ff0000"), &n));
    history.record(flood_fill(&mut store, Cell::new(1, 1), &Color::new("#0000ff"), &n));
    assert_eq!(store.len(), 100);

    let undone = history.undo(&mut store).map(|op| op.kind());
    assert_eq!(undone, Some(OperationKind::Fill));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(Cell::new(5, 5)), Some(&Color::new("#ff0000")));

    history.undo(&mut store);
    assert!(store.is_empty());
    assert!(history.undo(&mut store).is_none());
}

#[test]
fn test_new_record_clears_redo() {
    let n = ColorNormalizer::default();
    let mut store = store();
    let mut history = HistoryLog::default();

    history.record(paint(&mut store, [Cell::new(1, 1)], &Color::new("#111111"), &n));
    history.undo(&mut store);
    assert!(history.can_redo());

    history.record(paint(&mut store, [Cell::new(2, 2)], &Color::new("#222222"), &n));
    assert!(!history.can_redo());
    assert!(history.redo(&mut store).is_none());
}

#[test]
fn test_capacity_evicts_oldest() {
    let n = ColorNormalizer::default();
    let mut store = store();
    let mut history = HistoryLog::new(3);

    for col in 1..=5 {
        history.record(paint(&mut store, [Cell::new(1, col)], &Color::new("#abcdef"), &n));
    }
    assert_eq!(history.undo_depth(), 3);

    while history.undo(&mut store).is_some() {}
    // The first two paints fell off the bottom of the stack.
    assert_eq!(store.len(), 2);
    assert!(store.get(Cell::new(1, 1)).is_some());
    assert!(store.get(Cell::new(1, 3)).is_none());
}
