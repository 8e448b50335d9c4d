//! Color math — direct conversions without external dependencies.
//! Internal helpers work on normalized f64 in 0.0–1.0; the public functions
//! take and return 8-bit channels.

use crate::color::{Hsv, Rgb};

/// HSV → RGB. All values 0.0–1.0; hue wraps.
pub(crate) fn hsv_to_unit_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. All values 0.0–1.0.
pub(crate) fn unit_rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// 0.0–1.0 → 0–255, rounded to nearest and clamped.
pub(crate) fn unit_to_u8(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert 8-bit RGB to HSV with hue in turns `[0, 1)`.
///
/// Achromatic colors (including black) report hue and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (h, s, v) = unit_rgb_to_hsv(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );
    Hsv { h, s, v }
}

/// Convert HSV (each 0.0–1.0) to 8-bit RGB.
///
/// Channels are rounded to nearest; values pushed past the ends by rounding
/// or out-of-range inputs are clamped into 0–255.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let (r, g, b) = hsv_to_unit_rgb(h, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
    Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
}
