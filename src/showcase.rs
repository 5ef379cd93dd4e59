//! Mounted showcase.
//!
//! A [`Showcase`] bundles one [`SceneManager`], the interaction context shared
//! by the pointer handlers and the frame loop, the frame scheduler and the set
//! of host listeners it is subscribed to. It is the single entry point for
//! host events and frame callbacks.
//!
//! # Lifecycle
//!
//! ```rust,ignore
//! let mut showcase = Showcase::mount(&catalog, viewport, &settings, |vp| make_surface(vp))?;
//! showcase.on_pointer_move(120.0, 300.0);
//! showcase.frame(16.0);
//! if let Some(change) = showcase.take_selection_change() { /* update panel */ }
//! showcase.teardown();
//! ```
//!
//! Teardown cancels the scheduler, unsubscribes every listener and disposes
//! the scene, each exactly once. Anything delivered afterwards is ignored.

use bitflags::bitflags;

use crate::animation::{AnimationLoop, FrameScheduler};
use crate::catalog::{Catalog, Item, ItemId};
use crate::errors::Result;
use crate::input::InputTracker;
use crate::interaction::{InteractionContext, SelectionChange};
use crate::renderer::RenderSurface;
use crate::scene::camera::Viewport;
use crate::scene::manager::SceneManager;
use crate::settings::ShowcaseSettings;

bitflags! {
    /// Host event subscriptions held by a mounted showcase.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        const POINTER_MOVE  = 1 << 0;
        const POINTER_CLICK = 1 << 1;
        const RESIZE        = 1 << 2;
        /// Keyboard dismiss (clears the selection).
        const DISMISS       = 1 << 3;
    }
}

/// What a [`Showcase::teardown`] call actually released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeardownReport {
    pub frames_cancelled: bool,
    pub listeners_removed: Listeners,
    pub surface_released: bool,
}

impl TeardownReport {
    /// `true` if the call released nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.frames_cancelled && self.listeners_removed.is_empty() && !self.surface_released
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::empty()
    }
}

pub struct Showcase<S: RenderSurface> {
    scene: SceneManager<S>,
    ctx: InteractionContext,
    input: InputTracker,
    animation: AnimationLoop,
    scheduler: FrameScheduler,
    listeners: Listeners,
    pending_change: Option<SelectionChange>,
}

impl<S: RenderSurface> Showcase<S> {
    /// Builds the scene and subscribes to every host event.
    ///
    /// On error nothing is mounted: no listener is registered and there is
    /// nothing to tear down.
    pub fn mount<F>(catalog: &Catalog, viewport: Viewport, settings: &ShowcaseSettings, surface_factory: F) -> Result<Self>
    where
        F: FnOnce(Viewport) -> Result<S>,
    {
        let mut scene = SceneManager::initialize(catalog, viewport, surface_factory)?;
        scene.set_background(settings.background);

        let listeners = Listeners::all();
        log::info!("Showcase mounted, listening to {listeners:?}");

        Ok(Self {
            scene,
            ctx: InteractionContext::new(),
            input: InputTracker::new(),
            animation: AnimationLoop::new(settings.animation.clone()),
            scheduler: FrameScheduler::new(),
            listeners,
            pending_change: None,
        })
    }

    /// Pointer moved to `(x, y)` in physical pixels.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !self.listeners.contains(Listeners::POINTER_MOVE) {
            return;
        }
        let viewport = self.scene.viewport();
        self.input
            .on_pointer_move(&mut self.ctx, &self.scene, x, y, viewport);
    }

    /// Primary button pressed at `(x, y)` in physical pixels.
    pub fn on_pointer_click(&mut self, x: f32, y: f32) {
        if !self.listeners.contains(Listeners::POINTER_CLICK) {
            return;
        }
        let viewport = self.scene.viewport();
        if self
            .input
            .on_pointer_click(&mut self.ctx, &self.scene, x, y, viewport)
        {
            self.record_selection_change();
        }
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        if !self.listeners.contains(Listeners::RESIZE) {
            return;
        }
        self.scene.resize(Viewport::new(width, height));
    }

    /// Keyboard dismiss.
    pub fn on_dismiss(&mut self) {
        if !self.listeners.contains(Listeners::DISMISS) {
            return;
        }
        self.clear_selection();
    }

    /// Runs one frame at `time_ms` since mount.
    ///
    /// Returns `false` once the scheduler is cancelled; nothing is rendered then.
    pub fn frame(&mut self, time_ms: f64) -> bool {
        if !self.scheduler.begin_frame() {
            return false;
        }
        self.animation.step(&self.ctx, &mut self.scene, time_ms);
        true
    }

    /// The item the UI panel should show.
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.ctx.state.selected()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ItemId> {
        self.ctx.state.hovered()
    }

    /// The latest selection edge since the previous call, if any.
    pub fn take_selection_change(&mut self) -> Option<SelectionChange> {
        self.pending_change.take()
    }

    /// Inbound control from the UI layer (panel close button).
    pub fn clear_selection(&mut self) {
        if self.ctx.state.clear_selection() {
            log::info!("Selection cleared");
            self.record_selection_change();
        }
    }

    fn record_selection_change(&mut self) {
        self.pending_change = Some(match self.ctx.state.selected() {
            Some(item) => SelectionChange::Selected(item.clone()),
            None => SelectionChange::Cleared,
        });
    }

    /// Stops the frame loop, unsubscribes and releases the surface.
    ///
    /// Safe to call any number of times; later calls release nothing.
    pub fn teardown(&mut self) -> TeardownReport {
        let frames_cancelled = self.scheduler.cancel();
        let listeners_removed = std::mem::take(&mut self.listeners);
        let surface_released = !self.scene.is_disposed();
        self.scene.dispose();
        self.ctx.reset();
        self.pending_change = None;

        let report = TeardownReport {
            frames_cancelled,
            listeners_removed,
            surface_released,
        };
        if report.is_noop() {
            log::debug!("Showcase already torn down");
        } else {
            log::info!("Showcase torn down: {report:?}");
        }
        report
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.scheduler.is_active()
    }

    #[inline]
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    #[inline]
    #[must_use]
    pub fn context(&self) -> &InteractionContext {
        &self.ctx
    }

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &SceneManager<S> {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut SceneManager<S> {
        &mut self.scene
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.scheduler.frame_count()
    }
}

impl<S: RenderSurface> Drop for Showcase<S> {
    fn drop(&mut self) {
        if self.scheduler.is_active() {
            self.teardown();
        }
    }
}
