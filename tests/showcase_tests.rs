//! Showcase Lifecycle Tests
//!
//! Tests for:
//! - Teardown idempotence and what each call releases
//! - Host events and frames after teardown
//! - Selection change notifications and dismissal
//! - Drop and failed mounts

mod common;

use common::{EMPTY_SPOT, RecordingSurface, WIDE, bookshelf, mount, new_log, screen_of_item, still_settings};
use vitrine::{
    ItemId, Listeners, SelectionChange, Showcase, ShowcaseSettings, TeardownReport, Viewport, VitrineError,
};

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn teardown_twice_releases_once() {
    let (mut showcase, log) = mount(&bookshelf(), WIDE, &ShowcaseSettings::default());
    assert!(showcase.frame(0.0));
    assert_eq!(showcase.listeners(), Listeners::all());

    let first = showcase.teardown();
    assert_eq!(
        first,
        TeardownReport {
            frames_cancelled: true,
            listeners_removed: Listeners::all(),
            surface_released: true,
        }
    );

    let second = showcase.teardown();
    assert!(second.is_noop());
    assert_eq!(log.borrow().drops, 1);
    assert!(showcase.listeners().is_empty());
    assert!(!showcase.is_active());
}

#[test]
fn no_frames_after_teardown() {
    let (mut showcase, log) = mount(&bookshelf(), WIDE, &ShowcaseSettings::default());
    showcase.frame(0.0);
    showcase.frame(16.0);
    showcase.teardown();

    assert!(!showcase.frame(32.0));
    assert!(!showcase.frame(48.0));
    assert_eq!(showcase.frame_count(), 2);
    assert_eq!(log.borrow().frames.len(), 2);
}

#[test]
fn events_after_teardown_are_ignored() {
    let (mut showcase, log) = mount(&bookshelf(), WIDE, &still_settings());
    let (x, y) = screen_of_item(showcase.scene(), 1);
    showcase.teardown();

    showcase.on_pointer_move(x, y);
    showcase.on_pointer_click(x, y);
    showcase.on_resize(800, 600);
    showcase.on_dismiss();

    assert_eq!(showcase.hovered(), None);
    assert!(showcase.selected().is_none());
    assert!(showcase.take_selection_change().is_none());
    assert_eq!(showcase.scene().viewport(), WIDE);
    assert!(log.borrow().resizes.is_empty());
}

#[test]
fn teardown_clears_interaction_state() {
    let (mut showcase, _log) = mount(&bookshelf(), WIDE, &still_settings());
    let (x, y) = screen_of_item(showcase.scene(), 0);
    showcase.on_pointer_move(x, y);
    showcase.on_pointer_click(x, y);
    assert!(showcase.selected().is_some());

    showcase.teardown();

    assert_eq!(showcase.hovered(), None);
    assert!(showcase.selected().is_none());
    assert_eq!(showcase.context().pointer, glam::Vec2::ZERO);
    assert!(showcase.take_selection_change().is_none());
}

#[test]
fn drop_tears_down() {
    let (showcase, log) = mount(&bookshelf(), WIDE, &ShowcaseSettings::default());
    drop(showcase);
    assert_eq!(log.borrow().drops, 1);
}

#[test]
fn drop_after_teardown_releases_nothing_more() {
    let (mut showcase, log) = mount(&bookshelf(), WIDE, &ShowcaseSettings::default());
    showcase.teardown();
    drop(showcase);
    assert_eq!(log.borrow().drops, 1);
}

// ============================================================================
// Mount failures
// ============================================================================

#[test]
fn failed_mount_leaves_nothing_behind() {
    let result = Showcase::<RecordingSurface>::mount(&bookshelf(), WIDE, &ShowcaseSettings::default(), |_| {
        Err(VitrineError::SurfaceUnavailable("webgl unavailable".into()))
    });
    assert!(matches!(result, Err(VitrineError::SurfaceUnavailable(_))));
}

#[test]
fn zero_sized_mount_never_creates_surface() {
    let log = new_log();
    let surface_log = log.clone();
    let result = Showcase::mount(&bookshelf(), Viewport::new(0, 720), &ShowcaseSettings::default(), move |_| {
        Ok(RecordingSurface::new(&surface_log))
    });

    assert!(matches!(result, Err(VitrineError::InvalidViewport { .. })));
    assert_eq!(log.borrow().drops, 0);
}

#[test]
fn mount_applies_background_setting() {
    let mut settings = ShowcaseSettings::default();
    settings.background = vitrine::Color::from_hex_u32(0x20_20_20);
    let (showcase, _log) = mount(&bookshelf(), WIDE, &settings);
    assert_eq!(showcase.scene().background(), vitrine::Color::from_hex_u32(0x20_20_20));
}

// ============================================================================
// Selection notifications
// ============================================================================

#[test]
fn click_reports_selection_once() {
    let (mut showcase, _log) = mount(&bookshelf(), WIDE, &still_settings());
    let (x, y) = screen_of_item(showcase.scene(), 2);
    showcase.on_pointer_move(x, y);
    showcase.on_pointer_click(x, y);

    match showcase.take_selection_change() {
        Some(SelectionChange::Selected(item)) => {
            assert_eq!(item.id, ItemId(2));
            assert_eq!(item.title, "The Last Garden");
        }
        other => panic!("expected selection, got {other:?}"),
    }
    assert!(showcase.take_selection_change().is_none());
}

#[test]
fn reselecting_same_item_is_not_a_change() {
    let (mut showcase, _log) = mount(&bookshelf(), WIDE, &still_settings());
    let (x, y) = screen_of_item(showcase.scene(), 1);
    showcase.on_pointer_click(x, y);
    let _ = showcase.take_selection_change();

    showcase.on_pointer_click(x, y);
    assert!(showcase.take_selection_change().is_none());
    assert_eq!(showcase.selected().map(|i| i.id), Some(ItemId(1)));
}

#[test]
fn empty_click_reports_cleared() {
    let (mut showcase, _log) = mount(&bookshelf(), WIDE, &still_settings());
    let (x, y) = screen_of_item(showcase.scene(), 0);
    showcase.on_pointer_click(x, y);
    let _ = showcase.take_selection_change();

    showcase.on_pointer_click(EMPTY_SPOT.0, EMPTY_SPOT.1);
    assert_eq!(showcase.take_selection_change(), Some(SelectionChange::Cleared));

    // Already empty: nothing to report.
    showcase.on_pointer_click(EMPTY_SPOT.0, EMPTY_SPOT.1);
    assert!(showcase.take_selection_change().is_none());
}

#[test]
fn dismiss_and_clear_selection() {
    let (mut showcase, _log) = mount(&bookshelf(), WIDE, &still_settings());
    let (x, y) = screen_of_item(showcase.scene(), 0);
    showcase.on_pointer_move(x, y);
    showcase.on_pointer_click(x, y);
    let _ = showcase.take_selection_change();

    showcase.on_dismiss();
    assert!(showcase.selected().is_none());
    assert_eq!(showcase.hovered(), Some(ItemId(0)), "dismiss leaves hover alone");
    assert_eq!(showcase.take_selection_change(), Some(SelectionChange::Cleared));

    showcase.clear_selection();
    assert!(showcase.take_selection_change().is_none());
}

#[test]
fn resize_event_reaches_scene() {
    let (mut showcase, log) = mount(&bookshelf(), WIDE, &ShowcaseSettings::default());
    showcase.on_resize(500, 800);
    assert_eq!(showcase.scene().camera().position().z, 12.0);
    assert_eq!(log.borrow().resizes, vec![(500, 800)]);
}
