use milanko_core::consts::{ZOOM_DEFAULT_PERCENT, ZOOM_MAX_PERCENT, ZOOM_MIN_PERCENT};
use milanko_core::layout::{snap_zoom, LayoutMode, ZoomState};

// ---------------------------------------------------------------------------
// Capacities
// ---------------------------------------------------------------------------

#[test]
fn test_layout_capacities() {
    assert_eq!(LayoutMode::List.capacity(), None);
    assert_eq!(LayoutMode::Horizontal.capacity(), Some(2));
    assert_eq!(LayoutMode::Vertical.capacity(), Some(2));
    assert_eq!(LayoutMode::Grid.capacity(), Some(4));
}

#[test]
fn test_list_shows_everything() {
    assert_eq!(LayoutMode::List.visible_count(0), 0);
    assert_eq!(LayoutMode::List.visible_count(5), 5);
    assert_eq!(LayoutMode::List.visible_count(100), 100);
}

#[test]
fn test_grid_truncates_to_four() {
    assert_eq!(LayoutMode::Grid.visible_count(5), 4);
    assert_eq!(LayoutMode::Grid.visible_count(4), 4);
    assert_eq!(LayoutMode::Grid.visible_count(3), 3);
    assert_eq!(LayoutMode::Grid.visible_count(0), 0);
}

#[test]
fn test_splits_truncate_to_two() {
    assert_eq!(LayoutMode::Horizontal.visible_count(5), 2);
    assert_eq!(LayoutMode::Horizontal.visible_count(1), 1);
    assert_eq!(LayoutMode::Vertical.visible_count(3), 2);
}

#[test]
fn test_layout_display() {
    assert_eq!(format!("{}", LayoutMode::List), "List");
    assert_eq!(format!("{}", LayoutMode::Horizontal), "Horizontal Split");
    assert_eq!(format!("{}", LayoutMode::Vertical), "Vertical Split");
    assert_eq!(format!("{}", LayoutMode::Grid), "Grid (2×2)");
}

#[test]
fn test_default_mode_is_list() {
    assert_eq!(LayoutMode::default(), LayoutMode::List);
}

// ---------------------------------------------------------------------------
// Zoom snapping
// ---------------------------------------------------------------------------

#[test]
fn test_snap_zoom_clamps_to_bounds() {
    assert_eq!(snap_zoom(30), ZOOM_MIN_PERCENT);
    assert_eq!(snap_zoom(-10), ZOOM_MIN_PERCENT);
    assert_eq!(snap_zoom(300), ZOOM_MAX_PERCENT);
}

#[test]
fn test_snap_zoom_rounds_to_step() {
    assert_eq!(snap_zoom(100), 100);
    assert_eq!(snap_zoom(102), 100);
    assert_eq!(snap_zoom(103), 105);
    assert_eq!(snap_zoom(148), 150);
}

// ---------------------------------------------------------------------------
// Zoom state
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_defaults_to_hundred() {
    let zoom = ZoomState::new();
    assert_eq!(zoom.get(0), ZOOM_DEFAULT_PERCENT);
    assert_eq!(zoom.get(3), ZOOM_DEFAULT_PERCENT);
}

#[test]
fn test_zoom_is_independent_per_pane() {
    let mut zoom = ZoomState::new();
    zoom.set(0, 150);
    zoom.set(1, 75);
    assert_eq!(zoom.get(0), 150);
    assert_eq!(zoom.get(1), 75);
    assert_eq!(zoom.get(2), ZOOM_DEFAULT_PERCENT);
}

#[test]
fn test_zoom_set_snaps_input() {
    let mut zoom = ZoomState::new();
    zoom.set(0, 999);
    assert_eq!(zoom.get(0), ZOOM_MAX_PERCENT);
    zoom.set(0, 52);
    assert_eq!(zoom.get(0), 50);
}

#[test]
fn test_zoom_reset_restores_defaults() {
    let mut zoom = ZoomState::new();
    zoom.set(0, 200);
    zoom.set(3, 50);
    zoom.reset();
    assert_eq!(zoom.get(0), ZOOM_DEFAULT_PERCENT);
    assert_eq!(zoom.get(3), ZOOM_DEFAULT_PERCENT);
}
