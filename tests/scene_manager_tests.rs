//! Scene Manager Tests
//!
//! Tests for:
//! - Scene contents after initialization (entities, parts, lights, background)
//! - Camera distance tiers and resize behaviour
//! - Initialization failures
//! - Dispose idempotence and rendering after dispose

mod common;

use common::{RecordingSurface, WIDE, approx, bookshelf, new_log};
use glam::Vec3;
use vitrine::scene::BookPart;
use vitrine::{Catalog, Color, DistanceTier, ItemId, SceneManager, Viewport, VitrineError};

fn scene_with_log(viewport: Viewport) -> (SceneManager<RecordingSurface>, std::rc::Rc<std::cell::RefCell<common::SurfaceLog>>) {
    let log = new_log();
    let surface_log = log.clone();
    let scene = SceneManager::initialize(&bookshelf(), viewport, move |_| Ok(RecordingSurface::new(&surface_log)))
        .expect("initialize");
    (scene, log)
}

// ============================================================================
// Scene contents
// ============================================================================

#[test]
fn every_item_gets_three_parts() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.render();

    let log = log.borrow();
    let frame = &log.frames[0];
    assert_eq!(frame.draws.len(), 9);
    for id in 0..3 {
        let parts: Vec<BookPart> = frame.draws_for(ItemId(id)).map(|d| d.part).collect();
        assert_eq!(parts, BookPart::ALL.to_vec());
    }
}

#[test]
fn frame_carries_lights_and_background() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.render();

    let log = log.borrow();
    let frame = &log.frames[0];
    assert_eq!(frame.lights.len(), 4);
    assert_eq!(frame.clear_color, Color::from_hex_u32(0x0a_0a_1a));
    assert_eq!(frame.camera_position, Vec3::new(0.0, 1.0, 8.0));
}

#[test]
fn parts_are_shaded_from_item_color() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.render();

    let log = log.borrow();
    let draws: Vec<_> = log.frames[0].draws_for(ItemId(0)).copied().collect();
    let (cover, spine, pages) = (draws[0], draws[1], draws[2]);

    let base = Color::from_hex_u32(0xff_6b_6b).to_linear();
    assert!((cover.color - base).length() < 1e-5);
    assert!(spine.color.x < cover.color.x, "spine is darker than the cover");
    assert!(cover.shininess > spine.shininess);
    assert_eq!(pages.color, Color::from_hex_u32(0xf5_f5_f5).to_linear());
}

#[test]
fn parts_sit_at_their_offsets() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.render();

    let log = log.borrow();
    let spine = log.frames[0]
        .draws_for(ItemId(1))
        .find(|d| d.part == BookPart::Spine)
        .copied()
        .unwrap();
    let p = spine.world_position();
    assert!(approx(p.x, -0.75));
    assert!(approx(p.y, 0.0));
    assert!(approx(p.z, 0.0));
}

#[test]
fn empty_catalog_renders_empty_frame() {
    let log = new_log();
    let surface_log = log.clone();
    let mut scene = SceneManager::initialize(&Catalog::default(), WIDE, move |_| Ok(RecordingSurface::new(&surface_log)))
        .unwrap();
    scene.render();

    assert!(scene.registry().is_empty());
    assert!(log.borrow().frames[0].draws.is_empty());
}

// ============================================================================
// Distance tiers & resize
// ============================================================================

#[test]
fn initial_distance_follows_width() {
    for (width, z) in [(500, 12.0), (800, 10.0), (1500, 8.0)] {
        let (scene, _log) = scene_with_log(Viewport::new(width, 600));
        assert_eq!(scene.camera().position(), Vec3::new(0.0, 1.0, z), "width {width}");
    }
}

#[test]
fn tier_boundaries() {
    assert_eq!(DistanceTier::for_width(639), DistanceTier::Compact);
    assert_eq!(DistanceTier::for_width(640), DistanceTier::Medium);
    assert_eq!(DistanceTier::for_width(1023), DistanceTier::Medium);
    assert_eq!(DistanceTier::for_width(1024), DistanceTier::Wide);
}

#[test]
fn resize_recenters_camera_on_new_tier() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.camera_state_mut().position = Vec3::new(1.5, 0.2, 8.0);

    scene.resize(Viewport::new(800, 600));

    assert_eq!(scene.camera().position(), Vec3::new(0.0, 1.0, 10.0));
    assert!(approx(scene.camera().aspect, 800.0 / 600.0));
    assert_eq!(scene.viewport(), Viewport::new(800, 600));
    assert_eq!(log.borrow().resizes, vec![(800, 600)]);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.resize(Viewport::new(0, 600));
    scene.resize(Viewport::new(800, 0));

    assert_eq!(scene.viewport(), WIDE);
    assert_eq!(scene.camera().state.tier, DistanceTier::Wide);
    assert!(log.borrow().resizes.is_empty());
}

// ============================================================================
// Initialization failures
// ============================================================================

#[test]
fn empty_viewport_is_rejected_before_surface() {
    let mut called = false;
    let result = SceneManager::<RecordingSurface>::initialize(&bookshelf(), Viewport::new(0, 0), |_| {
        called = true;
        Err(VitrineError::SurfaceUnavailable("unreachable".into()))
    });

    assert!(matches!(result, Err(VitrineError::InvalidViewport { width: 0, height: 0 })));
    assert!(!called);
}

#[test]
fn surface_error_propagates() {
    let result = SceneManager::<RecordingSurface>::initialize(&bookshelf(), WIDE, |_| {
        Err(VitrineError::SurfaceUnavailable("no context".into()))
    });
    assert!(matches!(result, Err(VitrineError::SurfaceUnavailable(_))));
}

#[test]
fn factory_receives_viewport() {
    let log = new_log();
    let surface_log = log.clone();
    let mut seen = None;
    let _scene = SceneManager::initialize(&bookshelf(), WIDE, |vp| {
        seen = Some(vp);
        Ok(RecordingSurface::new(&surface_log))
    })
    .unwrap();
    assert_eq!(seen, Some(WIDE));
}

// ============================================================================
// Dispose
// ============================================================================

#[test]
fn dispose_releases_surface_once() {
    let (mut scene, log) = scene_with_log(WIDE);
    assert!(!scene.is_disposed());

    scene.dispose();
    scene.dispose();

    assert!(scene.is_disposed());
    assert!(scene.surface().is_none());
    assert_eq!(log.borrow().drops, 1);
}

#[test]
fn render_after_dispose_draws_nothing() {
    let (mut scene, log) = scene_with_log(WIDE);
    scene.render();
    scene.dispose();
    scene.render();
    scene.resize(Viewport::new(800, 600));

    let log = log.borrow();
    assert_eq!(log.frames.len(), 1);
    assert!(log.resizes.is_empty());
}

#[test]
fn resize_after_dispose_leaves_camera_alone() {
    let (mut scene, _log) = scene_with_log(WIDE);
    scene.dispose();
    scene.resize(Viewport::new(500, 800));

    assert_eq!(scene.viewport(), WIDE);
    assert_eq!(scene.camera().state.tier, DistanceTier::Wide);
    assert_eq!(scene.camera().position(), Vec3::new(0.0, 1.0, 8.0));
    assert!(approx(scene.camera().aspect, 1280.0 / 720.0));
}

#[test]
fn failed_draw_is_not_fatal() {
    let (mut scene, log) = scene_with_log(WIDE);
    log.borrow_mut().fail_draws = true;
    scene.render();
    log.borrow_mut().fail_draws = false;
    scene.render();

    assert_eq!(log.borrow().frames.len(), 1);
    assert!(!scene.is_disposed());
}
