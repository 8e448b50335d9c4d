//! Picker settings.
//!
//! With the `serde` feature enabled, [`PickerConfig`] can be loaded from any
//! serde format; missing fields take their defaults.

use crate::color::Rgb;
use crate::constants::WHEEL_SIZE;
use crate::updater::ContrastRule;

/// Settings used to build a [`ColorPicker`](crate::picker::ColorPicker).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Side length of the wheel bitmap in pixels
    pub wheel_size: u32,

    /// Color reported when the wheel can't be sampled
    pub default_rgb: Rgb,

    /// Hex color to select on creation; `None` starts at the wheel center
    pub initial_color: Option<String>,

    /// Readout text contrast rule
    pub contrast: ContrastRule,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            wheel_size: WHEEL_SIZE,
            default_rgb: Rgb::WHITE,
            initial_color: None,
            contrast: ContrastRule::default(),
        }
    }
}

impl PickerConfig {
    pub fn with_wheel_size(mut self, wheel_size: u32) -> Self {
        self.wheel_size = wheel_size;
        self
    }

    pub fn with_initial_color(mut self, hex: impl Into<String>) -> Self {
        self.initial_color = Some(hex.into());
        self
    }

    pub fn with_default_rgb(mut self, rgb: Rgb) -> Self {
        self.default_rgb = rgb;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.wheel_size, WHEEL_SIZE);
        assert_eq!(config.default_rgb, Rgb::WHITE);
        assert_eq!(config.initial_color, None);
        assert_eq!(config.contrast.threshold, 70);
    }

    #[test]
    fn builders_override_fields() {
        let config = PickerConfig::default()
            .with_wheel_size(100)
            .with_initial_color("#abc")
            .with_default_rgb(Rgb::BLACK);
        assert_eq!(config.wheel_size, 100);
        assert_eq!(config.initial_color.as_deref(), Some("#abc"));
        assert_eq!(config.default_rgb, Rgb::BLACK);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let config: PickerConfig =
            serde_json::from_str(r#"{ "wheel_size": 120, "contrast": { "threshold": 90 } }"#)
                .unwrap();
        assert_eq!(config.wheel_size, 120);
        assert_eq!(config.contrast.threshold, 90);
        assert_eq!(config.default_rgb, Rgb::WHITE);
        assert_eq!(config.initial_color, None);
    }
}
