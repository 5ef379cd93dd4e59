//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec3, Vec4Swizzles};

use vitrine::renderer::{FrameSnapshot, RenderSurface};
use vitrine::{Catalog, Color, Item, Result, SceneManager, Showcase, ShowcaseSettings, Viewport, VitrineError};

pub const EPSILON: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// What a [`RecordingSurface`] observed.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub frames: Vec<FrameSnapshot>,
    pub resizes: Vec<(u32, u32)>,
    pub drops: usize,
    pub fail_draws: bool,
}

/// A headless surface that records every call into a shared log.
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new(log: &Rc<RefCell<SurfaceLog>>) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl RenderSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().resizes.push((width, height));
    }

    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_draws {
            return Err(VitrineError::SurfaceUnavailable("device lost".into()));
        }
        log.frames.push(frame.clone());
        Ok(())
    }
}

impl Drop for RecordingSurface {
    fn drop(&mut self) {
        self.log.borrow_mut().drops += 1;
    }
}

pub fn new_log() -> Rc<RefCell<SurfaceLog>> {
    init_logging();
    Rc::new(RefCell::new(SurfaceLog::default()))
}

/// The three-book shelf.
pub fn bookshelf() -> Catalog {
    Catalog::new(vec![
        Item::new(0, "The Quantum Mind", Color::from_hex_u32(0xff_6b_6b), Vec3::new(-3.0, 0.0, 0.0), Vec3::new(0.0, 0.3, 0.0))
            .with_author("Dr. Sarah Chen")
            .with_price("$24.99"),
        Item::new(1, "Digital Dreams", Color::from_hex_u32(0x4e_cd_c4), Vec3::ZERO, Vec3::ZERO)
            .with_author("Alex Rivera")
            .with_price("$19.99"),
        Item::new(2, "The Last Garden", Color::from_hex_u32(0x45_b7_d1), Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, -0.3, 0.0))
            .with_author("Emma Thompson")
            .with_price("$22.99"),
    ])
    .expect("valid catalog")
}

pub const WIDE: Viewport = Viewport::new(1280, 720);

/// Settings with the idle bob switched off, so easing is exactly geometric.
pub fn still_settings() -> ShowcaseSettings {
    let mut settings = ShowcaseSettings::default();
    settings.animation.idle_motion = false;
    settings
}

/// Routes library logs to the test harness; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn mount(catalog: &Catalog, viewport: Viewport, settings: &ShowcaseSettings) -> (Showcase<RecordingSurface>, Rc<RefCell<SurfaceLog>>) {
    init_logging();
    let log = new_log();
    let surface_log = Rc::clone(&log);
    let showcase = Showcase::mount(catalog, viewport, settings, move |_| Ok(RecordingSurface::new(&surface_log)))
        .expect("mount");
    (showcase, log)
}

/// Pixel position of a world point under the scene's current camera.
pub fn screen_of<S: RenderSurface>(scene: &SceneManager<S>, world: Vec3) -> (f32, f32) {
    let clip = scene.camera().view_projection_matrix() * world.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    let vp = scene.viewport();
    (
        (ndc.x + 1.0) * 0.5 * vp.width as f32,
        (1.0 - ndc.y) * 0.5 * vp.height as f32,
    )
}

/// Pixel position of an item's group origin.
pub fn screen_of_item<S: RenderSurface>(scene: &SceneManager<S>, id: u32) -> (f32, f32) {
    let entity = scene.registry().entity(vitrine::ItemId(id)).expect("registered item");
    screen_of(scene, entity.current_position)
}

/// A pixel well above the shelf.
pub const EMPTY_SPOT: (f32, f32) = (5.0, 5.0);
