//! Hover and selection state.
//!
//! Two independent axes: the item under the pointer, and the item the user
//! clicked. Pointer handlers write them; the frame loop reads `hovered` and
//! the UI layer reads `selected`.

use glam::Vec2;

use crate::catalog::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    hovered: Option<ItemId>,
    selected: Option<Item>,
}

impl InteractionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_hovered(&self, id: ItemId) -> bool {
        self.hovered == Some(id)
    }

    /// Returns `true` if the hovered item changed.
    pub fn set_hovered(&mut self, hovered: Option<ItemId>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        log::debug!("Hover: {:?} -> {:?}", self.hovered, hovered);
        self.hovered = hovered;
        true
    }

    /// Returns `true` if the selected item changed.
    pub fn set_selected(&mut self, selected: Option<Item>) -> bool {
        let before = self.selected.as_ref().map(|item| item.id);
        let after = selected.as_ref().map(|item| item.id);
        self.selected = selected;
        before != after
    }

    /// Clears the selection axis only.
    pub fn clear_selection(&mut self) -> bool {
        self.set_selected(None)
    }

    /// Both axes back to none.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}

/// A change of the selection axis, for UI layers that react on edges.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Selected(Item),
    Cleared,
}

/// State shared by the pointer handlers and the frame loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionContext {
    pub state: InteractionState,
    /// Last pointer position in NDC; starts at the viewport center.
    pub pointer: Vec2,
}

impl InteractionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.pointer = Vec2::ZERO;
    }
}
