//! Pointer input tracking.
//!
//! Turns pointer positions into camera rays, resolves them against the scene
//! and writes the result into the [`InteractionContext`]. Every event is
//! processed; the most recent one wins.

use crate::catalog::ItemId;
use crate::interaction::InteractionContext;
use crate::renderer::RenderSurface;
use crate::scene::camera::Viewport;
use crate::scene::manager::SceneManager;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker;

impl InputTracker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Updates the stored pointer and the hover axis.
    ///
    /// Returns the item now under the pointer. Events on an empty viewport are
    /// ignored.
    pub fn on_pointer_move<S: RenderSurface>(
        &self,
        ctx: &mut InteractionContext,
        scene: &SceneManager<S>,
        screen_x: f32,
        screen_y: f32,
        viewport: Viewport,
    ) -> Option<ItemId> {
        if viewport.is_empty() {
            return None;
        }

        let ndc = viewport.to_ndc(screen_x, screen_y);
        ctx.pointer = ndc;

        let hit = scene.pick(ndc).map(|hit| hit.item);
        ctx.state.set_hovered(hit);
        hit
    }

    /// Updates the selection axis.
    ///
    /// A hit selects the full catalog item; a miss clears the selection. The
    /// hover axis and the stored pointer are left alone. Returns `true` if the
    /// selection changed.
    pub fn on_pointer_click<S: RenderSurface>(
        &self,
        ctx: &mut InteractionContext,
        scene: &SceneManager<S>,
        screen_x: f32,
        screen_y: f32,
        viewport: Viewport,
    ) -> bool {
        if viewport.is_empty() {
            return false;
        }

        let ndc = viewport.to_ndc(screen_x, screen_y);
        let selected = scene
            .pick(ndc)
            .and_then(|hit| scene.registry().item(hit.item))
            .cloned();

        match &selected {
            Some(item) => log::info!("Selected {} \"{}\"", item.id, item.title),
            None if ctx.state.selected().is_some() => log::info!("Selection cleared"),
            None => {}
        }

        ctx.state.set_selected(selected)
    }
}
