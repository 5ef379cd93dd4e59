use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::pick::Ray;

/// Drawable area in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Maps a pixel position to normalized device coordinates.
    ///
    /// `x` runs −1 (left) to +1 (right), `y` runs +1 (top) to −1 (bottom).
    #[must_use]
    pub fn to_ndc(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        Vec2::new(
            (screen_x / self.width as f32) * 2.0 - 1.0,
            -(screen_y / self.height as f32) * 2.0 + 1.0,
        )
    }
}

/// Camera distance band chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceTier {
    /// Narrow viewports (< 640 px).
    Compact,
    /// 640 px up to 1024 px.
    Medium,
    /// 1024 px and wider.
    Wide,
}

impl DistanceTier {
    pub const COMPACT_BELOW: u32 = 640;
    pub const MEDIUM_BELOW: u32 = 1024;

    #[must_use]
    pub fn for_width(width: u32) -> Self {
        if width < Self::COMPACT_BELOW {
            Self::Compact
        } else if width < Self::MEDIUM_BELOW {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    /// Camera z distance for this tier.
    #[must_use]
    pub fn distance(self) -> f32 {
        match self {
            Self::Compact => 12.0,
            Self::Medium => 10.0,
            Self::Wide => 8.0,
        }
    }
}

/// Mutable camera placement, eased every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub tier: DistanceTier,
}

impl CameraState {
    /// Resting height of the camera.
    pub const REST_HEIGHT: f32 = 1.0;

    #[must_use]
    pub fn for_width(width: u32) -> Self {
        let mut state = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            tier: DistanceTier::for_width(width),
        };
        state.apply_tier(state.tier);
        state
    }

    /// Recenters to `(0, REST_HEIGHT, tier distance)`.
    pub fn apply_tier(&mut self, tier: DistanceTier) {
        self.tier = tier;
        self.position = Vec3::new(0.0, Self::REST_HEIGHT, tier.distance());
    }
}

/// Perspective camera that always looks at [`CameraState::target`].
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub state: CameraState,
}

impl Camera {
    pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 1000.0;

    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            state: CameraState::for_width(0),
        }
    }

    /// The showcase camera for a viewport: 75°, 0.1..1000, tiered distance.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let mut cam = Self::new_perspective(
            Self::DEFAULT_FOV_DEGREES,
            viewport.aspect(),
            Self::DEFAULT_NEAR,
            Self::DEFAULT_FAR,
        );
        cam.state = CameraState::for_width(viewport.width);
        cam
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // glam's perspective_rh maps depth to [0, 1], matching wgpu.
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.state.position, self.state.target, Vec3::Y)
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the camera through a point in NDC.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection_matrix().inverse();
        let far = inv * ndc.extend(1.0).extend(1.0);
        let far = far.xyz() / far.w;
        let origin = self.state.position;
        Ray::new(origin, far - origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(DistanceTier::for_width(639), DistanceTier::Compact);
        assert_eq!(DistanceTier::for_width(640), DistanceTier::Medium);
        assert_eq!(DistanceTier::for_width(1023), DistanceTier::Medium);
        assert_eq!(DistanceTier::for_width(1024), DistanceTier::Wide);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera::for_viewport(Viewport::new(1280, 720));
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.state.target - cam.position()).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-4));
        assert!(ray.origin.abs_diff_eq(Vec3::new(0.0, 1.0, 8.0), 1e-6));
    }

    #[test]
    fn ndc_mapping_corners() {
        let vp = Viewport::new(800, 600);
        assert!(vp.to_ndc(0.0, 0.0).abs_diff_eq(Vec2::new(-1.0, 1.0), 1e-6));
        assert!(vp.to_ndc(800.0, 600.0).abs_diff_eq(Vec2::new(1.0, -1.0), 1e-6));
        assert!(vp.to_ndc(400.0, 300.0).abs_diff_eq(Vec2::ZERO, 1e-6));
    }
}
