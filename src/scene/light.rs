use glam::Vec3;

use crate::catalog::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Distance at which the contribution reaches zero.
    pub range: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Position the light shines from, towards the origin.
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional(DirectionalLight),
    Point(PointLight),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Color,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_directional(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight { position }),
        }
    }

    #[must_use]
    pub fn new_point(color: Color, intensity: f32, range: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Point(PointLight { position, range }),
        }
    }

    /// Linear color premultiplied by intensity.
    #[must_use]
    pub fn radiance(&self) -> Vec3 {
        self.color.to_linear() * self.intensity
    }
}

/// Ambient fill, a white key light and two colored accents.
#[must_use]
pub fn showcase_rig() -> Vec<Light> {
    vec![
        Light::new_ambient(Color::from_hex_u32(0x40_40_40), 0.6),
        Light::new_directional(Color::WHITE, 1.0, Vec3::new(5.0, 10.0, 5.0)),
        Light::new_point(
            Color::from_hex_u32(0xff_6b_6b),
            0.8,
            10.0,
            Vec3::new(-4.0, 2.0, 2.0),
        ),
        Light::new_point(
            Color::from_hex_u32(0x4e_cd_c4),
            0.8,
            10.0,
            Vec3::new(4.0, 2.0, 2.0),
        ),
    ]
}
