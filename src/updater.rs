//! Color updates: sample the wheel, apply brightness, format the readout,
//! and push the result to any attached presentation sinks.
//!
//! The computation is pure. Sinks are the only side effect and are handed
//! the finished [`ColorUpdate`]; none of them can influence it.

use std::fmt;

use crate::color::Rgb;
use crate::constants::TEXT_CONTRAST_THRESHOLD;
use crate::sampler::{get_target_color, PixelSource};

/// Readout text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    pub fn name(&self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the readout text color from brightness and the resolved swatch.
///
/// Text is white below `threshold` and black otherwise, except that a black
/// swatch always gets white text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContrastRule {
    pub threshold: u8,
}

impl Default for ContrastRule {
    fn default() -> Self {
        Self {
            threshold: TEXT_CONTRAST_THRESHOLD,
        }
    }
}

impl ContrastRule {
    pub fn text_color(&self, brightness: u8, foreground: Rgb) -> TextColor {
        let mut text = if brightness < self.threshold {
            TextColor::White
        } else {
            TextColor::Black
        };
        if foreground == Rgb::BLACK {
            text = TextColor::White;
        }
        text
    }
}

/// Presentation target for a color update.
///
/// A UI layer implements this for its slider, swatch, or hex field. Each
/// method is called at most once per update, after the color is computed.
pub trait ColorSink {
    /// Paint the swatch/slider with the new color.
    fn set_foreground(&mut self, hex: &str);

    /// Show the hex string as text.
    fn set_text(&mut self, _hex: &str) {}

    fn set_text_color(&mut self, _color: TextColor) {}
}

/// Adapts a change callback into a [`ColorSink`].
///
/// The callback receives the hex string once per update.
pub struct OnChange<F>(pub F);

impl<F: FnMut(&str)> ColorSink for OnChange<F> {
    fn set_foreground(&mut self, hex: &str) {
        (self.0)(hex)
    }
}

/// The result of one color update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorUpdate {
    /// Brightness-scaled color
    pub rgb: Rgb,
    /// `rgb` as lowercase `#rrggbb`
    pub hex: String,
    /// Readout text color for `rgb`
    pub text_color: TextColor,
}

impl ColorUpdate {
    /// Build an update from an unscaled sampled color.
    pub fn new(sampled: Rgb, brightness: u8, rule: &ContrastRule) -> Self {
        let rgb = scale_brightness(sampled, brightness);
        Self {
            rgb,
            hex: rgb.to_hex(),
            text_color: rule.text_color(brightness, rgb),
        }
    }

    /// Push this update to `sink`, calling each sink method exactly once.
    pub fn apply<S: ColorSink + ?Sized>(&self, sink: &mut S) {
        sink.set_foreground(&self.hex);
        sink.set_text(&self.hex);
        sink.set_text_color(self.text_color);
    }
}

/// Scale every channel by `brightness / 255`, truncating toward zero.
///
/// Channel 255 at brightness 128 gives 128, not 129.
pub fn scale_brightness(rgb: Rgb, brightness: u8) -> Rgb {
    let scale = |c: u8| (u16::from(c) * u16::from(brightness) / 255) as u8;
    Rgb::new(scale(rgb.r), scale(rgb.g), scale(rgb.b))
}

/// Sample `image` at `(target_x, target_y)`, apply `brightness`, and notify `sinks`.
///
/// Sampling failures fall back to `fallback`. Sinks are applied in slice
/// order, synchronously, once each.
pub fn update_colors<P>(
    image: &P,
    target_x: i32,
    target_y: i32,
    brightness: u8,
    fallback: Rgb,
    sinks: &mut [&mut dyn ColorSink],
) -> ColorUpdate
where
    P: PixelSource + ?Sized,
{
    update_colors_with(
        &ContrastRule::default(),
        image,
        target_x,
        target_y,
        brightness,
        fallback,
        sinks,
    )
}

/// [`update_colors`] with an explicit contrast rule.
pub fn update_colors_with<P>(
    rule: &ContrastRule,
    image: &P,
    target_x: i32,
    target_y: i32,
    brightness: u8,
    fallback: Rgb,
    sinks: &mut [&mut dyn ColorSink],
) -> ColorUpdate
where
    P: PixelSource + ?Sized,
{
    let sampled = get_target_color(image, target_x, target_y, fallback);
    let update = ColorUpdate::new(sampled, brightness, rule);
    log::trace!(
        "sampled {sampled} at ({target_x}, {target_y}), brightness {brightness} -> {}",
        update.hex
    );
    for sink in sinks.iter_mut() {
        update.apply(&mut **sink);
    }
    update
}
