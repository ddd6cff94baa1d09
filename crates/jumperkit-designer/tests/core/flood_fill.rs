use jumperkit_core::{Cell, Color, ColorNormalizer};
use jumperkit_designer::{flood_fill, DesignStore, OperationKind};
use jumperkit_shapes::{ShapeCatalog, ShapeGeometry};
use std::sync::Arc;

#[test]
fn test_fill_covers_whole_blank_silhouette() {
    let geometry = ShapeCatalog::builtin().unwrap().get("classic", "s").unwrap();
    let total = geometry.active_cell_count();
    let mut store = DesignStore::new(Arc::clone(&geometry));

    let op = flood_fill(
        &mut store,
        Cell::new(20, 20),
        &Color::new("#336699"),
        &ColorNormalizer::default(),
    );

    assert_eq!(op.kind(), OperationKind::Fill);
    assert_eq!(op.len(), total);
    assert_eq!(store.len(), total);
}

#[test]
fn test_fill_stops_at_color_boundary() {
    let geometry = Arc::new(ShapeGeometry::rectangle(10, 10));
    let mut store = DesignStore::new(geometry);
    let n = ColorNormalizer::default();
    let wall = Color::new("#000000");
    for row in 1..=10 {
        store.set(Cell::new(row, 5), wall.clone());
    }

    let op = flood_fill(&mut store, Cell::new(3, 2), &Color::new("#ff0000"), &n);
    assert_eq!(op.len(), 40);
    assert!(op.cells().all(|cell| cell.col < 5));
    assert!(store.get(Cell::new(3, 8)).is_none());
}

#[test]
fn test_fill_treats_background_literal_as_blank() {
    let geometry = Arc::new(ShapeGeometry::rectangle(4, 4));
    let mut store = DesignStore::new(geometry);
    let n = ColorNormalizer::default();
    store.set(Cell::new(1, 1), Color::new("#FFFFFF"));
    assert!(store.get(Cell::new(1, 1)).is_none());
    assert!(store.is_empty());

    let op = flood_fill(&mut store, Cell::new(4, 4), &Color::new("#00ff00"), &n);
    assert_eq!(op.len(), 16);
}

#[test]
fn test_fill_on_ten_by_ten_grid() {
    let n = ColorNormalizer::default();
    let blue = Color::new("#0000ff");

    let mut blank = DesignStore::new(Arc::new(ShapeGeometry::rectangle(10, 10)));
    let op = flood_fill(&mut blank, Cell::new(1, 1), &blue, &n);
    assert_eq!(op.len(), 100);
    assert_eq!(blank.len(), 100);

    let mut store = DesignStore::new(Arc::new(ShapeGeometry::rectangle(10, 10)));
    store.set(Cell::new(5, 5), Color::new("#ff0000"));
    let op = flood_fill(&mut store, Cell::new(1, 1), &blue, &n);
    assert_eq!(op.len(), 99);
    assert!(op.cells().all(|cell| cell != Cell::new(5, 5)));
    assert_eq!(store.get(Cell::new(5, 5)), Some(&Color::new("#ff0000")));
}

#[test]
fn test_fill_on_inactive_start_is_empty() {
    let geometry = ShapeCatalog::builtin().unwrap().get("classic", "m").unwrap();
    let mut store = DesignStore::new(geometry);
    let op = flood_fill(
        &mut store,
        Cell::new(1, 1),
        &Color::new("#ff0000"),
        &ColorNormalizer::default(),
    );
    assert!(op.is_empty());
    assert!(store.is_empty());
}
