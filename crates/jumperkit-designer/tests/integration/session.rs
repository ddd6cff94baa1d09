use jumperkit_core::{Axis, Cell, Color, MirrorMode, Panel, PortStrategy};
use jumperkit_designer::{DesignDocument, EditorSession, OperationKind, SessionOptions};
use jumperkit_shapes::ShapeCatalog;
use std::sync::Arc;
use tempfile::TempDir;

fn session() -> EditorSession {
    let catalog = Arc::new(ShapeCatalog::builtin().unwrap());
    EditorSession::new(catalog, SessionOptions::default())
}

fn red() -> Color {
    Color::new("#cc0000")
}

#[test]
fn test_new_session_uses_default_shape() {
    let session = session();
    assert!(session.geometry().is("classic", "m"));
    assert_eq!(session.active_panel(), Panel::Front);
    assert!(!session.can_undo());
}

#[test]
fn test_paint_with_mirror_mode() {
    let mut session = session();
    session.set_mirror_mode(MirrorMode::new(true, false));

    let op = session.paint_cell(Cell::new(10, 10), &red());
    assert_eq!(op.len(), 2);
    assert!(session.active_store().get(Cell::new(10, 41)).is_some());
    assert_eq!(session.history().peek_undo_kind(), Some(OperationKind::Paint));

    let undone = session.undo().unwrap();
    assert_eq!(undone.len(), 2);
    assert!(session.active_store().is_empty());

    session.redo();
    assert_eq!(session.active_store().len(), 2);
}

#[test]
fn test_paint_inactive_cell_records_nothing() {
    let mut session = session();
    let op = session.paint_cell(Cell::new(1, 1), &red());
    assert!(op.is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_paint_cells_is_one_operation() {
    let mut session = session();
    let stroke: Vec<Cell> = (10..20).map(|col| Cell::new(5, col)).collect();
    let op = session.paint_cells(&stroke, &red());
    assert_eq!(op.len(), 10);
    assert_eq!(session.history().undo_depth(), 1);

    let op = session.erase_cell(Cell::new(5, 12));
    assert_eq!(op.kind(), OperationKind::Erase);
    assert_eq!(session.active_store().len(), 9);
}

#[test]
fn test_switch_panel_resets_history() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());
    assert!(session.can_undo());

    session.switch_panel(Panel::Back);
    assert!(!session.can_undo());
    assert!(session.active_store().is_empty());
    assert_eq!(session.store(Panel::Front).len(), 1);
}

#[test]
fn test_fill_reflect_and_clear() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());

    let op = session.reflect(Axis::Horizontal);
    assert_eq!(op.len(), 1);

    let op = session.fill(Cell::new(20, 20), &Color::new("#eeeeee"));
    assert_eq!(op.len(), session.geometry().active_cell_count() - 2);

    let op = session.clear_panel();
    assert_eq!(op.kind(), OperationKind::Clear);
    assert!(session.active_store().is_empty());
    assert_eq!(session.history().undo_depth(), 4);
}

#[test]
fn test_copy_panel_onto_active_is_undoable() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());
    session.switch_panel(Panel::Back);

    let op = session.copy_panel(Panel::Front, Panel::Back);
    assert_eq!(op.kind(), OperationKind::CopyPanel);
    assert_eq!(session.active_store().len(), 1);

    session.undo();
    assert!(session.active_store().is_empty());
}

#[test]
fn test_copy_panel_onto_inactive_is_not_recorded() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());

    let op = session.copy_panel(Panel::Front, Panel::Back);
    assert_eq!(op.len(), 1);
    assert_eq!(session.store(Panel::Back).len(), 1);
    assert_eq!(session.history().undo_depth(), 1);
}

#[test]
fn test_change_shape_ports_both_panels() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());
    session.switch_panel(Panel::Back);
    session.paint_cell(Cell::new(45, 25), &red());

    let report = session
        .change_shape("classic", "l", PortStrategy::Scale)
        .unwrap();
    assert!(session.geometry().is("classic", "l"));
    assert_eq!(report.front.output, 1);
    assert_eq!(report.back.output, 1);
    assert_eq!(report.total_lost(), 0);
    assert!(session.store(Panel::Front).get(Cell::new(12, 12)).is_some());
    assert!(!session.can_undo());
}

#[test]
fn test_change_shape_unknown_size_keeps_state() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());

    assert!(session.change_shape("classic", "xxl", PortStrategy::Scale).is_err());
    assert!(session.geometry().is("classic", "m"));
    assert!(session.can_undo());
    assert_eq!(session.active_store().len(), 1);
}

#[test]
fn test_preview_shape_change_lists_strategies() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());

    let preview = session.preview_shape_change("cropped", "m").unwrap();
    assert_eq!(preview.front.len(), PortStrategy::ALL.len());
    assert!(preview.back.iter().all(|(_, stats)| stats.input == 0));
    // Previewing never changes the design.
    assert!(session.geometry().is("classic", "m"));
}

#[test]
fn test_document_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("design.json");

    let mut session = session();
    session.set_name("Stripes");
    session.paint_cell(Cell::new(10, 10), &red());
    session.save_to_file(&path).unwrap();

    let mut restored = self::session();
    restored.switch_panel(Panel::Back);
    let report = restored.load_from_file(&path).unwrap();

    assert_eq!(report.skipped(), 0);
    assert!(!report.fell_back);
    assert_eq!(restored.design().name, "Stripes");
    assert_eq!(restored.active_panel(), Panel::Front);
    assert_eq!(restored.to_document().front, session.to_document().front);
}

#[test]
fn test_load_document_with_unknown_shape_falls_back() {
    let mut document = DesignDocument::new("Odd", "poncho", "m");
    document.front.insert("20-20".to_string(), "#101010".to_string());

    let mut session = session();
    let report = session.load_document(&document);

    assert!(report.fell_back);
    assert!(session.geometry().is("classic", "m"));
    assert_eq!(session.active_store().len(), 1);
}

#[test]
fn test_new_design_clears_everything() {
    let mut session = session();
    session.paint_cell(Cell::new(10, 10), &red());
    session.new_design("Fresh");

    assert_eq!(session.design().name, "Fresh");
    assert_eq!(session.design().colored_cells(), 0);
    assert!(!session.can_undo());
}
