//! Item Catalog
//!
//! The catalog is supplied once, at mount time, by the layer that owns the
//! informational UI. It is an ordered list of immutable [`Item`] records;
//! catalog order defines each item's index (used as the idle-motion phase).
//!
//! Catalogs are usually loaded from JSON:
//!
//! ```json
//! [
//!   {
//!     "id": 0,
//!     "title": "The Quantum Mind",
//!     "author": "Dr. Sarah Chen",
//!     "description": "...",
//!     "price": "$24.99",
//!     "color": "#ff6b6b",
//!     "position": [-3.0, 0.0, 0.0],
//!     "rotation": [0.0, 0.3, 0.0]
//!   }
//! ]
//! ```
//!
//! Malformed entries (missing id, bad color, duplicate id, non-finite
//! transforms) are configuration errors reported by [`Catalog::new`] and the
//! loaders; nothing is recovered.

use std::fmt;
use std::io::Read;
use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, VitrineError};

/// Logical identity of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Color
// ============================================================================

/// An sRGB color with components in `[0, 1]`.
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_hex_u32(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(r, g, b)
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(VitrineError::Catalog(format!(
                "color '{text}' must have the form #rrggbb"
            )));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|e| VitrineError::Catalog(format!("color '{text}': {e}")))?;
        Ok(Self::from_hex_u32(packed))
    }

    /// Multiplies every channel by `factor`, clamped to `[0, 1]`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(
            (self.r * factor).clamp(0.0, 1.0),
            (self.g * factor).clamp(0.0, 1.0),
            (self.b * factor).clamp(0.0, 1.0),
        )
    }

    /// Converts to linear RGB for shading.
    #[must_use]
    pub fn to_linear(self) -> Vec3 {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Vec3::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Formats as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

impl TryFrom<String> for Color {
    type Error = VitrineError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Item
// ============================================================================

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    pub color: Color,
    /// Rest position of the item's group node.
    #[serde(rename = "position")]
    pub base_position: Vec3,
    /// Rest rotation as XYZ Euler angles in radians.
    #[serde(rename = "rotation", default)]
    pub base_rotation: Vec3,
}

impl Item {
    /// Creates an item with empty subtitle, description and price.
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>, color: Color, position: Vec3, rotation: Vec3) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            author: String::new(),
            description: String::new(),
            price: String::new(),
            color,
            base_position: position,
            base_rotation: rotation,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, validated sequence of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Validates and wraps `items`.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Catalog`] for duplicate ids or non-finite
    /// base transforms.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(VitrineError::Catalog(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if !item.base_position.is_finite() || !item.base_rotation.is_finite() {
                return Err(VitrineError::Catalog(format!(
                    "item {} has a non-finite base transform",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!("Loaded {} catalog items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_with_and_without_hash() {
        let a = Color::from_hex("#ff6b6b").unwrap();
        let b = Color::from_hex("ff6b6b").unwrap();
        assert_eq!(a, b);
        assert!((a.r - 1.0).abs() < 1e-6);
        assert!((a.g - 107.0 / 255.0).abs() < 1e-6);
        assert_eq!(a.to_hex(), "#ff6b6b");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#+fffff").is_err());
        assert!(Color::from_hex("#-fffff").is_err());
    }

    #[test]
    fn spine_shade_is_darker() {
        let base = Color::from_hex_u32(0x4ecdc4);
        let spine = base.scaled(0.8);
        assert!(spine.r < base.r && spine.g < base.g && spine.b < base.b);
    }
}
