use jumperkit_core::{Cell, Color, ColorNormalizer};
use jumperkit_designer::DesignStore;
use jumperkit_shapes::ShapeCatalog;
use std::collections::BTreeMap;

#[test]
fn test_store_rejects_cells_outside_silhouette() {
    let geometry = ShapeCatalog::builtin().unwrap().get("classic", "m").unwrap();
    let mut store = DesignStore::new(geometry);

    // Body rows are padded by 6 on each side.
    assert!(!store.set(Cell::new(1, 6), Color::new("#ff0000")));
    assert!(store.set(Cell::new(1, 7), Color::new("#ff0000")));
    assert!(store.set(Cell::new(1, 44), Color::new("#ff0000")));
    assert!(!store.set(Cell::new(1, 45), Color::new("#ff0000")));

    // Sleeve rows span the full width.
    assert!(store.set(Cell::new(31, 1), Color::new("#ff0000")));
    assert!(store.set(Cell::new(31, 50), Color::new("#ff0000")));

    // The neckline tapers to columns 17..=34.
    assert!(!store.set(Cell::new(50, 16), Color::new("#ff0000")));
    assert!(store.set(Cell::new(50, 17), Color::new("#ff0000")));

    assert_eq!(store.len(), 5);
}

#[test]
fn test_entries_iterate_row_major() {
    let geometry = ShapeCatalog::builtin().unwrap().get("classic", "s").unwrap();
    let mut store = DesignStore::new(geometry);
    for (row, col) in [(5, 20), (2, 30), (5, 10), (2, 8)] {
        store.set(Cell::new(row, col), Color::new("#123456"));
    }

    let order: Vec<Cell> = store.entries().map(|(cell, _)| cell).collect();
    assert_eq!(
        order,
        vec![
            Cell::new(2, 8),
            Cell::new(2, 30),
            Cell::new(5, 10),
            Cell::new(5, 20)
        ]
    );
}

#[test]
fn test_import_onto_smaller_shape_drops_inactive() {
    let catalog = ShapeCatalog::builtin().unwrap();
    let mut entries = BTreeMap::new();
    entries.insert("45-25".to_string(), "#aa0000".to_string());
    entries.insert("10-20".to_string(), "#00aa00".to_string());

    let (store, summary) = DesignStore::import(
        catalog.get("classic", "s").unwrap(),
        &entries,
        &ColorNormalizer::default(),
    );
    assert_eq!(store.len(), 1);
    assert_eq!(summary.inactive, 1);
}
