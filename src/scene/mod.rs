//! Scene graph and showcase scene.
//!
//! - [`Node`]: hierarchy node with a [`Transform`]
//! - [`SceneGraph`]: node storage, box meshes, world-matrix propagation
//! - [`Camera`]: perspective camera with tiered distance
//! - [`Light`]: ambient, directional and point lights
//! - [`ObjectRegistry`]: display entities and the node → item side table
//! - [`SceneManager`]: owns the surface and draws frames

pub mod camera;
pub mod geometry;
pub mod graph;
pub mod light;
pub mod manager;
pub mod node;
pub mod registry;
pub mod transform;

pub use camera::{Camera, CameraState, DistanceTier, Viewport};
pub use geometry::{BookPart, BoxGeometry, BoxMesh, PhongMaterial};
pub use graph::SceneGraph;
pub use light::{Light, LightKind};
pub use manager::SceneManager;
pub use node::Node;
pub use registry::{DisplayEntity, ObjectRegistry};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Opaque identity of a scene node.
    pub struct NodeKey;
}
