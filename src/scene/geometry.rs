//! Box meshes and the three-part book model.
//!
//! Every display item is a group node with three box children (cover, spine
//! and page block). A box is described by its full extents; the renderer draws
//! them all from one shared unit cube scaled per instance, and picking tests
//! the same extents in the box's local frame.

use glam::Vec3;

use crate::catalog::Color;

/// Blinn-Phong surface parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub color: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl PhongMaterial {
    pub const DEFAULT_SHININESS: f32 = 30.0;

    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular: Color::from_hex_u32(0x11_11_11),
            shininess: Self::DEFAULT_SHININESS,
        }
    }

    #[must_use]
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    #[must_use]
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

/// An axis-aligned box centered on its node's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMesh {
    /// Full width, height and depth.
    pub size: Vec3,
    pub material: PhongMaterial,
}

impl BoxMesh {
    #[must_use]
    pub fn new(size: Vec3, material: PhongMaterial) -> Self {
        Self { size, material }
    }

    #[inline]
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

/// The three boxes a book is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookPart {
    Cover,
    Spine,
    Pages,
}

impl BookPart {
    pub const ALL: [BookPart; 3] = [BookPart::Cover, BookPart::Spine, BookPart::Pages];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn size(self) -> Vec3 {
        match self {
            Self::Cover => Vec3::new(1.5, 2.0, 0.1),
            Self::Spine => Vec3::new(0.1, 2.0, 1.0),
            Self::Pages => Vec3::new(1.4, 1.9, 0.8),
        }
    }

    /// Offset from the group origin.
    #[must_use]
    pub fn offset(self) -> Vec3 {
        match self {
            Self::Cover => Vec3::ZERO,
            Self::Spine => Vec3::new(-0.75, 0.0, 0.0),
            Self::Pages => Vec3::new(0.0, 0.0, -0.1),
        }
    }

    #[must_use]
    pub fn material(self, base: Color) -> PhongMaterial {
        match self {
            Self::Cover => PhongMaterial::new(base)
                .with_shininess(100.0)
                .with_specular(Color::from_hex_u32(0x44_44_44)),
            Self::Spine => PhongMaterial::new(base.scaled(0.8)),
            Self::Pages => PhongMaterial::new(Color::from_hex_u32(0xf5_f5_f5)),
        }
    }

    #[must_use]
    pub fn mesh(self, base: Color) -> BoxMesh {
        BoxMesh::new(self.size(), self.material(base))
    }
}

/// Flat-shaded box geometry: 24 vertices (4 per face) and 36 indices.
#[derive(Debug, Clone)]
pub struct BoxGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl BoxGeometry {
    /// Unit cube spanning `[-0.5, 0.5]` on every axis.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[must_use]
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let w = width / 2.0;
        let h = height / 2.0;
        let d = depth / 2.0;

        // (normal, four corners counter-clockwise seen from outside)
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([0.0, 0.0, 1.0], [[-w, -h, d], [w, -h, d], [w, h, d], [-w, h, d]]),
            ([0.0, 0.0, -1.0], [[-w, -h, -d], [-w, h, -d], [w, h, -d], [w, -h, -d]]),
            ([0.0, 1.0, 0.0], [[-w, h, -d], [-w, h, d], [w, h, d], [w, h, -d]]),
            ([0.0, -1.0, 0.0], [[-w, -h, -d], [w, -h, -d], [w, -h, d], [-w, -h, d]]),
            ([1.0, 0.0, 0.0], [[w, -h, -d], [w, h, -d], [w, h, d], [w, -h, d]]),
            ([-1.0, 0.0, 0.0], [[-w, -h, -d], [-w, -h, d], [-w, h, d], [-w, h, -d]]),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (face, (normal, corners)) in faces.iter().enumerate() {
            let base = (face * 4) as u16;
            positions.extend_from_slice(corners);
            normals.extend(std::iter::repeat_n(*normal, 4));
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            positions,
            normals,
            indices,
        }
    }
}
