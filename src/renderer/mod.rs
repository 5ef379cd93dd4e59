//! Rendering backend.
//!
//! The scene hands a fully resolved [`FrameSnapshot`] to a [`RenderSurface`]
//! once per frame. The surface owns every GPU resource; dropping it releases
//! them. [`WgpuSurface`] draws to a window; tests supply their own surfaces
//! to observe frames without a GPU.

pub mod settings;
pub mod wgpu_surface;

use glam::{Mat3, Mat4, Vec3};

use crate::catalog::{Color, ItemId};
use crate::errors::Result;
use crate::scene::geometry::{BookPart, BoxMesh};
use crate::scene::light::Light;

pub use settings::{PowerPreference, RenderSettings};
pub use wgpu_surface::WgpuSurface;

/// A drawable target for showcase frames.
pub trait RenderSurface {
    /// Resizes the backing buffers, in physical pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame.
    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height);
    }

    fn draw(&mut self, frame: &FrameSnapshot) -> Result<()> {
        (**self).draw(frame)
    }
}

/// One box instance, already in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub item: ItemId,
    pub part: BookPart,
    /// Node world matrix with the box extents folded in; maps the unit cube.
    pub model: Mat4,
    /// Linear base color.
    pub color: Vec3,
    /// Linear specular color.
    pub specular: Vec3,
    pub shininess: f32,
}

impl DrawItem {
    #[must_use]
    pub fn new(item: ItemId, part: BookPart, world: Mat4, mesh: &BoxMesh) -> Self {
        Self {
            item,
            part,
            model: world * Mat4::from_scale(mesh.size),
            color: mesh.material.color.to_linear(),
            specular: mesh.material.specular.to_linear(),
            shininess: mesh.material.shininess,
        }
    }

    /// Inverse-transpose of the model's upper 3×3.
    #[must_use]
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.model).inverse().transpose()
    }

    #[inline]
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub view_projection: Mat4,
    pub camera_position: Vec3,
    pub clear_color: Color,
    pub lights: Vec<Light>,
    pub draws: Vec<DrawItem>,
}

impl FrameSnapshot {
    /// Draws belonging to `item`, in part order.
    pub fn draws_for(&self, item: ItemId) -> impl Iterator<Item = &DrawItem> {
        self.draws.iter().filter(move |d| d.item == item)
    }
}
