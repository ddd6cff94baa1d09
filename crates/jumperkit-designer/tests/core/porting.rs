use jumperkit_core::{Cell, Color, PortStrategy};
use jumperkit_designer::{port, preview_all, DesignStore};
use jumperkit_shapes::ShapeCatalog;

#[test]
fn test_scale_between_builtin_sizes_keeps_most_cells() {
    let catalog = ShapeCatalog::builtin().unwrap();
    let mut source = DesignStore::new(catalog.get("classic", "m").unwrap());
    for col in 10..=40 {
        source.set(Cell::new(20, col), Color::new("#884422"));
    }

    let result = port(&source, catalog.get("classic", "l").unwrap(), PortStrategy::Scale);
    assert_eq!(result.stats.input, 31);
    assert_eq!(result.stats.output, 31);
    assert!(result.stats.is_lossless());
    assert!(result.store.get(Cell::new(24, 12)).is_some());
}

#[test]
fn test_anchor_top_left_to_shorter_shape() {
    let catalog = ShapeCatalog::builtin().unwrap();
    let mut source = DesignStore::new(catalog.get("classic", "m").unwrap());
    // One cell at the neckline, one near the hem.
    source.set(Cell::new(50, 25), Color::new("#000000"));
    source.set(Cell::new(2, 25), Color::new("#000000"));

    let result = port(
        &source,
        catalog.get("classic", "s").unwrap(),
        PortStrategy::AnchorTopLeft,
    );
    // Rows shift down by 10: the neck cell survives, the hem cell falls off.
    assert!(result.store.get(Cell::new(40, 25)).is_some());
    assert_eq!(result.stats.lost, 1);
}

#[test]
fn test_port_result_uses_target_geometry() {
    let catalog = ShapeCatalog::builtin().unwrap();
    let source = DesignStore::new(catalog.get("classic", "m").unwrap());
    let result = port(
        &source,
        catalog.get("cropped", "s").unwrap(),
        PortStrategy::CenterClip,
    );
    assert!(result.store.geometry().is("cropped", "s"));
    assert!(result.store.is_empty());
}

#[test]
fn test_preview_all_discard_loses_everything() {
    let catalog = ShapeCatalog::builtin().unwrap();
    let mut source = DesignStore::new(catalog.get("classic", "s").unwrap());
    source.set(Cell::new(10, 20), Color::new("#ff00ff"));

    let target = catalog.get("classic", "m").unwrap();
    let previews = preview_all(&source, &target);
    let discard = previews
        .iter()
        .find(|(strategy, _)| *strategy == PortStrategy::Discard)
        .map(|(_, stats)| *stats)
        .unwrap();
    assert_eq!(discard.output, 0);
    assert_eq!(discard.lost, 1);
}
