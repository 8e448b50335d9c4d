//! `Rgb` and `Hsv` — the public color representations.
//!
//! `Rgb` holds 0–255 integer channels as shown in the readouts. `Hsv` holds
//! hue, saturation, and value as f64 in 0.0–1.0, hue measured in turns.

use std::fmt;
use std::str::FromStr;

use crate::error::HexError;
use crate::hex;
use crate::math;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, `#ffffff`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse any string [`hex::normalize_hex`] accepts.
    pub fn from_hex<'a>(input: impl Into<Option<&'a str>>) -> Result<Self, HexError> {
        hex::parse_hex(input)
    }

    /// Canonical lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        hex::format_hex(*self)
    }

    pub fn to_hsv(&self) -> Hsv {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, HexError> {
        hex::parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::format_hex(*self))
    }
}

/// HSV color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in turns, 0.0 (red) up to but excluding 1.0
    pub h: f64,
    /// Saturation, 0.0 (gray) to 1.0
    pub s: f64,
    /// Value, 0.0 (black) to 1.0
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert to 8-bit RGB, rounding and clamping each channel.
    pub fn to_rgb(&self) -> Rgb {
        math::hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Value scaled to the 0–255 brightness slider range.
    pub fn brightness(&self) -> u8 {
        math::unit_to_u8(self.v)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsv()
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_hex() {
        let c = Rgb::new(59, 130, 246);
        assert_eq!(c.to_string(), "#3b82f6");
        assert_eq!(c.to_hex(), c.to_string());
    }

    #[test]
    fn parses_from_str() {
        let c: Rgb = "#ABC".parse().unwrap();
        assert_eq!(c, Rgb::new(0xaa, 0xbb, 0xcc));
        assert!("#ff".parse::<Rgb>().is_err());
    }

    #[test]
    fn hsv_brightness_scales_value() {
        assert_eq!(Hsv::new(0.0, 0.0, 1.0).brightness(), 255);
        assert_eq!(Hsv::new(0.0, 0.0, 0.5).brightness(), 128);
        assert_eq!(Hsv::new(0.0, 0.0, 0.0).brightness(), 0);
    }

    #[test]
    fn converts_between_spaces() {
        let red = Rgb::new(255, 0, 0);
        let hsv: Hsv = red.into();
        assert_eq!(hsv, Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(Rgb::from(hsv), red);
    }
}
