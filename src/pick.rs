//! Ray hit-testing.
//!
//! Rays are tested against every box mesh of every display entity with the
//! slab method, in the box's local frame. A hit resolves to the entity owning
//! the mesh. Only entry intersections in front of the ray origin count, so a
//! ray that starts inside a box does not hit that box.
//!
//! Among several hits the nearest wins. Exact distance ties are broken by the
//! lowest item id, then the lowest part index, so the result never depends
//! on traversal order.

use std::cmp::Ordering;

use glam::{Affine3A, Vec3};

use crate::catalog::ItemId;
use crate::scene::geometry::BookPart;
use crate::scene::graph::SceneGraph;
use crate::scene::registry::ObjectRegistry;

/// A half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is normalized; a zero direction yields a ray that hits nothing.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Entry distance into an axis-aligned box of `half_extents` centered at
    /// the origin of the frame described by `world`.
    ///
    /// The ray is brought into the box's local frame; the direction is not
    /// renormalized, so the returned parameter is a world-space distance.
    #[must_use]
    pub fn intersect_box(&self, world: &Affine3A, half_extents: Vec3) -> Option<f32> {
        let inv = world.inverse();
        let origin = inv.transform_point3(self.origin);
        let direction = inv.transform_vector3(self.direction);

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let h = half_extents[axis];

            if d.abs() < f32::EPSILON {
                if o < -h || o > h {
                    return None;
                }
                continue;
            }

            let t1 = (-h - o) / d;
            let t2 = (h - o) / d;
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));

            if t_exit < t_enter {
                return None;
            }
        }

        (t_enter.is_finite() && t_enter >= 0.0).then_some(t_enter)
    }
}

/// A ray/mesh intersection resolved to its owning item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub item: ItemId,
    pub part: BookPart,
    pub distance: f32,
}

impl PickHit {
    /// Nearest first; ties go to the lowest item id, then the lowest part.
    #[must_use]
    pub fn priority(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.item.cmp(&other.item))
            .then(self.part.cmp(&other.part))
    }
}

/// Every intersection of `ray` with the registered entities, unordered.
#[must_use]
pub fn intersect_all(ray: &Ray, graph: &SceneGraph, registry: &ObjectRegistry) -> Vec<PickHit> {
    let mut hits = Vec::new();
    for entity in registry.entities() {
        for part in BookPart::ALL {
            let key = entity.part(part);
            let (Some(node), Some(mesh)) = (graph.get_node(key), graph.mesh(key)) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            let Some(distance) = ray.intersect_box(node.world_matrix(), mesh.half_extents()) else {
                continue;
            };
            let Some(item) = registry.item_for_node(key) else {
                continue;
            };
            hits.push(PickHit {
                item,
                part,
                distance,
            });
        }
    }
    hits
}

/// The winning hit of `ray`, if any.
#[must_use]
pub fn pick_nearest(ray: &Ray, graph: &SceneGraph, registry: &ObjectRegistry) -> Option<PickHit> {
    intersect_all(ray, graph, registry)
        .into_iter()
        .min_by(PickHit::priority)
}
