//! Showcase Settings
//!
//! Everything tunable about a showcase, loadable from JSON. Every field has a
//! default, so a config file only names what it overrides:
//!
//! ```json
//! {
//!   "title": "Bookshop",
//!   "vsync": false,
//!   "animation": { "idle_motion": false }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Color;
use crate::errors::{Result, VitrineError};
use crate::renderer::RenderSettings;

/// Easing and motion constants used by the frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Fraction of the remaining camera offset closed per frame.
    pub camera_ease: f32,
    /// Horizontal camera travel per unit of pointer x (NDC).
    pub pointer_sway: f32,
    /// Camera height above the pointer y (NDC).
    pub camera_height: f32,
    /// Fraction of the remaining item offset closed per frame.
    pub item_ease: f32,
    /// Height a hovered item eases to; unhovered items ease to zero.
    pub hover_lift: f32,
    /// Extra yaw of a hovered item, radians.
    pub hover_yaw: f32,
    /// Per-frame idle bob added to each item's height.
    pub bob_amplitude: f32,
    /// Radians of bob phase per millisecond.
    pub bob_frequency: f32,
    pub idle_motion: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            camera_ease: 0.02,
            pointer_sway: 2.0,
            camera_height: 1.0,
            item_ease: 0.1,
            hover_lift: 0.5,
            hover_yaw: 0.1,
            bob_amplitude: 0.005,
            bob_frequency: 0.001,
            idle_motion: true,
        }
    }
}

impl AnimationSettings {
    fn validate(&self) -> Result<()> {
        for (name, ease) in [("camera_ease", self.camera_ease), ("item_ease", self.item_ease)] {
            if !(0.0..=1.0).contains(&ease) {
                return Err(VitrineError::Settings(format!(
                    "{name} must be within [0, 1], got {ease}"
                )));
            }
        }
        let all_finite = [
            self.pointer_sway,
            self.camera_height,
            self.hover_lift,
            self.hover_yaw,
            self.bob_amplitude,
            self.bob_frequency,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(VitrineError::Settings("animation constants must be finite".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub background: Color,
    #[serde(flatten)]
    pub render: RenderSettings,
    pub animation: AnimationSettings,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            title: "Vitrine".into(),
            width: 1280,
            height: 720,
            background: Color::from_hex_u32(0x0a_0a_1a),
            render: RenderSettings::default(),
            animation: AnimationSettings::default(),
        }
    }
}

impl ShowcaseSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VitrineError::Settings(format!(
                "window size {}x{} has no area",
                self.width, self.height
            )));
        }
        self.animation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let s = ShowcaseSettings::from_json_str(
            r#"{ "vsync": false, "power_preference": "low-power", "animation": { "idle_motion": false } }"#,
        )
        .unwrap();
        assert!(!s.render.vsync);
        assert_eq!(s.render.power_preference, crate::renderer::PowerPreference::LowPower);
        assert!(!s.animation.idle_motion);
        assert!((s.animation.item_ease - 0.1).abs() < f32::EPSILON);
        assert_eq!(s.width, 1280);
    }

    #[test]
    fn out_of_range_ease_is_rejected() {
        let err = ShowcaseSettings::from_json_str(r#"{ "animation": { "camera_ease": 1.5 } }"#);
        assert!(matches!(err, Err(VitrineError::Settings(_))));
    }

    #[test]
    fn background_parses_from_hex() {
        let s = ShowcaseSettings::from_json_str(r##"{ "background": "#102030" }"##).unwrap();
        assert_eq!(s.background.to_hex(), "#102030");
    }
}
