//! Renderer Settings
//!
//! GPU-facing configuration for [`WgpuSurface`](super::WgpuSurface). The
//! showcase draws a handful of opaque boxes with a single forward pass, so
//! there is no render-path choice: one sample per pixel, one depth buffer.
//!
//! ```rust,ignore
//! use vitrine::renderer::{PowerPreference, RenderSettings};
//!
//! let settings = RenderSettings {
//!     vsync: false,
//!     power_preference: PowerPreference::LowPower,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Adapter selection hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    #[default]
    HighPerformance,
    LowPower,
}

impl From<PowerPreference> for wgpu::PowerPreference {
    fn from(value: PowerPreference) -> Self {
        match value {
            PowerPreference::HighPerformance => wgpu::PowerPreference::HighPerformance,
            PowerPreference::LowPower => wgpu::PowerPreference::LowPower,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Present in sync with the display refresh (FIFO) instead of immediately.
    pub vsync: bool,

    pub power_preference: PowerPreference,

    /// Multisample count for the color target. The showcase pipeline only
    /// supports `1`; other values are clamped.
    pub msaa_samples: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            power_preference: PowerPreference::HighPerformance,
            msaa_samples: 1,
        }
    }
}

impl RenderSettings {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    #[inline]
    #[must_use]
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> u32 {
        if self.msaa_samples != 1 {
            log::warn!("msaa_samples = {} is not supported, using 1", self.msaa_samples);
        }
        1
    }
}
