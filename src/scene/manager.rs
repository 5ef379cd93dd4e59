//! Scene Manager
//!
//! Owns everything a mounted showcase draws: the render surface, the camera,
//! the light rig and the scene graph with one display entity per catalog
//! item. The surface is held in an `Option` and released by [`SceneManager::dispose`];
//! once released, rendering becomes a no-op.

use glam::{Mat4, Vec2};

use crate::catalog::{Catalog, Color};
use crate::errors::{Result, VitrineError};
use crate::pick::{self, PickHit, Ray};
use crate::renderer::{DrawItem, FrameSnapshot, RenderSurface};
use crate::scene::camera::{Camera, CameraState, DistanceTier, Viewport};
use crate::scene::geometry::BookPart;
use crate::scene::graph::SceneGraph;
use crate::scene::light::{self, Light};
use crate::scene::node::Node;
use crate::scene::registry::ObjectRegistry;
use crate::scene::transform::Transform;

pub struct SceneManager<S: RenderSurface> {
    surface: Option<S>,
    graph: SceneGraph,
    registry: ObjectRegistry,
    camera: Camera,
    lights: Vec<Light>,
    background: Color,
    viewport: Viewport,
}

impl<S: RenderSurface> SceneManager<S> {
    pub const DEFAULT_BACKGROUND: u32 = 0x0a_0a_1a;

    /// Builds the scene for `catalog` and acquires a surface from `surface_factory`.
    ///
    /// # Errors
    ///
    /// [`VitrineError::InvalidViewport`] for a zero-sized viewport, or whatever
    /// the factory reports when no surface can be created. Nothing is left
    /// allocated on failure.
    pub fn initialize<F>(catalog: &Catalog, viewport: Viewport, surface_factory: F) -> Result<Self>
    where
        F: FnOnce(Viewport) -> Result<S>,
    {
        if viewport.is_empty() {
            return Err(VitrineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let surface = surface_factory(viewport)?;

        let mut graph = SceneGraph::new();
        let mut registry = ObjectRegistry::new();

        for item in catalog.iter() {
            let mut root = Transform::from_position(item.base_position);
            root.rotation = item.base_rotation;
            let group = graph.add_node(Node::with_transform(root));

            let parts = BookPart::ALL.map(|part| {
                graph.add_mesh_to_parent(
                    part.mesh(item.color),
                    Transform::from_position(part.offset()),
                    group,
                )
            });

            if registry.register(item.clone(), group, parts).is_none() {
                return Err(VitrineError::Catalog(format!("duplicate item id {}", item.id)));
            }
        }

        graph.update_world_matrices();

        let camera = Camera::for_viewport(viewport);
        log::info!(
            "Scene initialized: {} items, {}x{}, camera tier {:?}",
            registry.len(),
            viewport.width,
            viewport.height,
            camera.state.tier
        );

        Ok(Self {
            surface: Some(surface),
            graph,
            registry,
            camera,
            lights: light::showcase_rig(),
            background: Color::from_hex_u32(Self::DEFAULT_BACKGROUND),
            viewport,
        })
    }

    /// Syncs entity transforms into the graph and draws one frame.
    ///
    /// Silent no-op after [`dispose`](Self::dispose). Draw failures are logged
    /// and the frame is dropped.
    pub fn render(&mut self) {
        if self.surface.is_none() {
            return;
        }

        self.sync_transforms();
        let frame = self.snapshot();

        if let Some(surface) = self.surface.as_mut()
            && let Err(e) = surface.draw(&frame)
        {
            log::warn!("Frame skipped: {e}");
        }
    }

    /// Copies each entity's current transform into its group node and
    /// refreshes world matrices.
    pub fn sync_transforms(&mut self) {
        for entity in self.registry.entities() {
            if let Some(node) = self.graph.get_node_mut(entity.group) {
                node.transform.position = entity.current_position;
                node.transform.rotation = entity.current_rotation;
            }
        }
        self.graph.update_world_matrices();
    }

    /// Resolves the current scene into a [`FrameSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut draws = Vec::with_capacity(self.registry.len() * BookPart::ALL.len());
        for entity in self.registry.entities() {
            for part in BookPart::ALL {
                let key = entity.part(part);
                let (Some(node), Some(mesh)) = (self.graph.get_node(key), self.graph.mesh(key)) else {
                    continue;
                };
                if !node.visible {
                    continue;
                }
                draws.push(DrawItem::new(
                    entity.item_id(),
                    part,
                    Mat4::from(*node.world_matrix()),
                    mesh,
                ));
            }
        }

        FrameSnapshot {
            view_projection: self.camera.view_projection_matrix(),
            camera_position: self.camera.position(),
            clear_color: self.background,
            lights: self.lights.clone(),
            draws,
        }
    }

    /// Applies a new viewport size.
    ///
    /// Updates the aspect ratio, recenters the camera on the distance tier for
    /// the new width and resizes the surface. Zero-sized viewports (minimized
    /// windows) and resizes after [`dispose`](Self::dispose) are ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.surface.is_none() {
            return;
        }
        if viewport.is_empty() {
            log::debug!("Ignoring resize to {}x{}", viewport.width, viewport.height);
            return;
        }

        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.camera.state.apply_tier(DistanceTier::for_width(viewport.width));

        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport.width, viewport.height);
        }
    }

    /// Releases the render surface. Idempotent.
    pub fn dispose(&mut self) {
        match self.surface.take() {
            Some(surface) => {
                drop(surface);
                log::info!("Scene disposed");
            }
            None => log::debug!("Scene already disposed"),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.surface.is_none()
    }

    /// World-space ray from the camera through a point in NDC.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        self.camera.ray_from_ndc(ndc)
    }

    /// Nearest entity under `ndc`, if any.
    #[must_use]
    pub fn pick(&self, ndc: Vec2) -> Option<PickHit> {
        let ray = self.ray_from_ndc(ndc);
        pick::pick_nearest(&ray, &self.graph, &self.registry)
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    #[inline]
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_state_mut(&mut self) -> &mut CameraState {
        &mut self.camera.state
    }

    /// Camera and entities together, for per-frame easing.
    pub fn animation_targets(&mut self) -> (&mut CameraState, &mut ObjectRegistry) {
        (&mut self.camera.state, &mut self.registry)
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut ObjectRegistry {
        &mut self.registry
    }

    #[inline]
    #[must_use]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    #[inline]
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The live surface, until disposed.
    #[inline]
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}
