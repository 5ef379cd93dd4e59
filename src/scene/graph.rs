//! Scene graph storage and world-matrix propagation.

use glam::Affine3A;
use slotmap::{SecondaryMap, SlotMap};

use crate::scene::geometry::BoxMesh;
use crate::scene::node::Node;
use crate::scene::transform::Transform;
use crate::scene::NodeKey;

/// Node hierarchy plus the box meshes attached to some of its nodes.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    meshes: SecondaryMap<NodeKey, BoxMesh>,
    roots: Vec<NodeKey>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a root node.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.roots.push(key);
        key
    }

    /// Inserts `child` under `parent`.
    ///
    /// Falls back to a root node if `parent` is not in the graph.
    pub fn add_to_parent(&mut self, mut child: Node, parent: NodeKey) -> NodeKey {
        if !self.nodes.contains_key(parent) {
            log::warn!("add_to_parent: unknown parent {parent:?}, inserting as root");
            return self.add_node(child);
        }
        child.parent = Some(parent);
        let key = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        key
    }

    /// Inserts a box mesh node under `parent`.
    pub fn add_mesh_to_parent(&mut self, mesh: BoxMesh, transform: Transform, parent: NodeKey) -> NodeKey {
        let key = self.add_to_parent(Node::with_transform(transform), parent);
        self.meshes.insert(key, mesh);
        key
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn mesh(&self, key: NodeKey) -> Option<&BoxMesh> {
        self.meshes.get(key)
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Refreshes local matrices and propagates world matrices from the roots.
    ///
    /// A subtree whose ancestors did not change keeps its cached world
    /// matrices.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeKey, Affine3A, bool)> = self
            .roots
            .iter()
            .rev()
            .map(|&root| (root, Affine3A::IDENTITY, false))
            .collect();

        while let Some((key, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let changed = local_changed || parent_changed;
            if changed {
                let world = parent_world * *node.transform.local_matrix();
                node.transform.set_world_matrix(world);
            }

            let world = *node.transform.world_matrix();
            stack.extend(node.children.iter().rev().map(|&child| (child, world, changed)));
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn child_world_matrix_follows_parent() {
        let mut graph = SceneGraph::new();
        let parent = graph.add_node(Node::with_transform(Transform::from_position(Vec3::new(3.0, 0.0, 0.0))));
        let child = graph.add_to_parent(
            Node::with_transform(Transform::from_position(Vec3::new(0.0, 1.0, 0.0))),
            parent,
        );

        graph.update_world_matrices();
        let world = graph.get_node(child).unwrap().world_matrix().translation;
        assert!(Vec3::from(world).abs_diff_eq(Vec3::new(3.0, 1.0, 0.0), 1e-6));

        graph.get_node_mut(parent).unwrap().transform.position.y = 0.5;
        graph.update_world_matrices();
        let world = graph.get_node(child).unwrap().world_matrix().translation;
        assert!(Vec3::from(world).abs_diff_eq(Vec3::new(3.0, 1.5, 0.0), 1e-6));
    }
}
