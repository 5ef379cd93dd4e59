//! Object Registry
//!
//! Holds one [`DisplayEntity`] per catalog item, in catalog order, and the
//! side table that maps scene nodes back to logical item ids. Scene nodes
//! never carry domain data; picking resolves a hit node through
//! [`ObjectRegistry::item_for_node`].

use glam::Vec3;
use rustc_hash::FxHashMap;
use slotmap::SecondaryMap;

use crate::catalog::{Item, ItemId};
use crate::scene::geometry::BookPart;
use crate::scene::NodeKey;

/// The spatial counterpart of a catalog item.
#[derive(Debug, Clone)]
pub struct DisplayEntity {
    item: Item,
    /// Catalog order; also the idle-motion phase offset.
    pub index: usize,
    /// Group node the part meshes hang from.
    pub group: NodeKey,
    /// Part meshes, indexed by [`BookPart::index`].
    pub parts: [NodeKey; 3],

    pub current_position: Vec3,
    /// XYZ Euler angles in radians.
    pub current_rotation: Vec3,
}

impl DisplayEntity {
    #[inline]
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item.id
    }

    #[inline]
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[inline]
    #[must_use]
    pub fn part(&self, part: BookPart) -> NodeKey {
        self.parts[part.index()]
    }
}

#[derive(Debug, Default)]
pub struct ObjectRegistry {
    entities: Vec<DisplayEntity>,
    by_id: FxHashMap<ItemId, usize>,
    node_items: SecondaryMap<NodeKey, ItemId>,
}

impl ObjectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity for `item` at its base transform.
    ///
    /// The group node and every part node resolve to `item.id` afterwards.
    /// Returns `None` if the id is already registered.
    pub fn register(&mut self, item: Item, group: NodeKey, parts: [NodeKey; 3]) -> Option<&DisplayEntity> {
        if self.by_id.contains_key(&item.id) {
            log::warn!("Item {} is already registered", item.id);
            return None;
        }

        let index = self.entities.len();
        self.by_id.insert(item.id, index);
        self.node_items.insert(group, item.id);
        for part in parts {
            self.node_items.insert(part, item.id);
        }

        self.entities.push(DisplayEntity {
            current_position: item.base_position,
            current_rotation: item.base_rotation,
            item,
            index,
            group,
            parts,
        });
        self.entities.last()
    }

    /// Logical item owning `node` (a group or one of its parts).
    #[inline]
    #[must_use]
    pub fn item_for_node(&self, node: NodeKey) -> Option<ItemId> {
        self.node_items.get(node).copied()
    }

    #[must_use]
    pub fn entity(&self, id: ItemId) -> Option<&DisplayEntity> {
        self.by_id.get(&id).and_then(|&i| self.entities.get(i))
    }

    pub fn entity_mut(&mut self, id: ItemId) -> Option<&mut DisplayEntity> {
        self.by_id.get(&id).and_then(|&i| self.entities.get_mut(i))
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.entity(id).map(DisplayEntity::item)
    }

    /// Entities in catalog order.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[DisplayEntity] {
        &self.entities
    }

    #[inline]
    pub fn entities_mut(&mut self) -> &mut [DisplayEntity] {
        &mut self.entities
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
