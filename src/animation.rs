//! Frame Loop
//!
//! [`AnimationLoop::step`] runs once per display refresh. It reads the
//! interaction context, eases the camera and every display entity toward their
//! targets, layers the idle bob on top and renders. Given the same elapsed
//! times, state history and pointer positions it produces the same transforms.
//!
//! [`FrameScheduler`] gates the loop: once cancelled, no further frame runs.

use glam::Vec3;

use crate::interaction::InteractionContext;
use crate::renderer::RenderSurface;
use crate::scene::manager::SceneManager;
use crate::settings::AnimationSettings;

/// Moves `current` toward `target` by `factor` of the remaining distance.
#[inline]
#[must_use]
pub fn ease(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[derive(Debug, Clone, Default)]
pub struct AnimationLoop {
    settings: AnimationSettings,
}

impl AnimationLoop {
    #[must_use]
    pub fn new(settings: AnimationSettings) -> Self {
        Self { settings }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Advances every transform by one frame and renders.
    ///
    /// `time_ms` is the elapsed time since mount; it only drives the idle bob.
    pub fn step<S: RenderSurface>(&self, ctx: &InteractionContext, scene: &mut SceneManager<S>, time_ms: f64) {
        let s = &self.settings;
        let pointer = ctx.pointer;
        let hovered = ctx.state.hovered();

        let (camera, registry) = scene.animation_targets();

        let cam_target_x = pointer.x * s.pointer_sway;
        let cam_target_y = pointer.y + s.camera_height;
        camera.position.x = ease(camera.position.x, cam_target_x, s.camera_ease);
        camera.position.y = ease(camera.position.y, cam_target_y, s.camera_ease);
        camera.target = Vec3::ZERO;

        // Height targets are absolute (lift or floor); yaw is relative to the base.
        for entity in registry.entities_mut() {
            let base_yaw = entity.item().base_rotation.y;

            let (target_y, target_yaw) = if hovered == Some(entity.item_id()) {
                (s.hover_lift, base_yaw + s.hover_yaw)
            } else {
                (0.0, base_yaw)
            };

            entity.current_position.y = ease(entity.current_position.y, target_y, s.item_ease);
            entity.current_rotation.y = ease(entity.current_rotation.y, target_yaw, s.item_ease);

            if s.idle_motion {
                entity.current_position.y += idle_offset(s, time_ms, entity.index);
            }
        }

        scene.render();
    }
}

/// `sin(time_ms * frequency + index) * amplitude`
#[must_use]
pub fn idle_offset(settings: &AnimationSettings, time_ms: f64, index: usize) -> f32 {
    let phase = time_ms * f64::from(settings.bob_frequency) + index as f64;
    (phase.sin() as f32) * settings.bob_amplitude
}

/// Gate for the per-frame callback.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    active: bool,
    frames: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: true,
            frames: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Claims the next frame. Returns `false` once cancelled.
    pub fn begin_frame(&mut self) -> bool {
        if self.active {
            self.frames += 1;
        }
        self.active
    }

    /// Frames run so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Stops further frames. Returns `true` only on the first call.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
