use jumperkit_core::{Axis, Cell, Color, ColorNormalizer, MirrorMode};
use jumperkit_designer::{mirror_cell, mirrored_cells, reflect, DesignStore};
use jumperkit_shapes::{ShapeCatalog, ShapeGeometry};
use std::sync::Arc;

#[test]
fn test_odd_width_center_column_maps_to_itself() {
    let geometry = ShapeGeometry::rectangle(9, 9);
    let cells = mirrored_cells(&geometry, Cell::new(2, 5), MirrorMode::new(true, false));
    assert_eq!(cells.as_slice(), &[Cell::new(2, 5)]);
}

#[test]
fn test_vertical_mirror_skips_inactive_neckline_cells() {
    let geometry = ShapeCatalog::builtin().unwrap().get("classic", "m").unwrap();
    // Row 1 column 10 mirrors to row 50 column 10, outside the neckline taper.
    let cells = mirrored_cells(&geometry, Cell::new(1, 10), MirrorMode::new(false, true));
    assert_eq!(cells.as_slice(), &[Cell::new(1, 10)]);
    assert_eq!(
        mirror_cell(&geometry, Cell::new(1, 10), Axis::Vertical),
        Cell::new(50, 10)
    );
}

#[test]
fn test_reflect_makes_pattern_symmetric() {
    let geometry = Arc::new(ShapeGeometry::rectangle(10, 10));
    let mut store = DesignStore::new(Arc::clone(&geometry));
    let n = ColorNormalizer::default();
    store.set(Cell::new(2, 1), Color::new("#ff0000"));
    store.set(Cell::new(4, 3), Color::new("#00ff00"));

    let op = reflect(&mut store, Axis::Horizontal, &n);
    assert_eq!(op.len(), 2);
    assert_eq!(store.get(Cell::new(2, 10)), Some(&Color::new("#ff0000")));
    assert_eq!(store.get(Cell::new(4, 8)), Some(&Color::new("#00ff00")));

    let again = reflect(&mut store, Axis::Horizontal, &n);
    assert!(again.is_empty());
}

#[test]
fn test_reflect_ignores_background_colored_entries() {
    let geometry = Arc::new(ShapeGeometry::rectangle(6, 6));
    let mut store = DesignStore::new(geometry);
    let n = ColorNormalizer::default();
    store.set(Cell::new(1, 1), Color::new("#ffffff"));
    assert!(store.is_empty());

    let op = reflect(&mut store, Axis::Vertical, &n);
    assert!(op.is_empty());
    assert!(store.get(Cell::new(6, 1)).is_none());
}
