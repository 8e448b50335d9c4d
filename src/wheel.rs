//! Circular HSV color wheel geometry.
//!
//! Angle maps to hue and radius maps to saturation around the center of a
//! square wheel bitmap. The bitmap is always rendered at full value, so the
//! value channel travels separately as a 0–255 brightness.
//!
//! Angles follow image space: 0 at the right (3 o'clock), increasing
//! clockwise because y grows downward.

use std::f64::consts::TAU;

use image::{Rgba, RgbaImage};

use crate::color::Hsv;
use crate::constants::{FEATHER, FULL_BRIGHTNESS, WHEEL_EDGE_INSET};
use crate::hex;
use crate::math;

/// A position on the wheel together with the out-of-band brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPoint {
    pub x: f64,
    pub y: f64,
    /// Value channel scaled to 0–255
    pub brightness: u8,
}

impl WheelPoint {
    /// Integer pixel coordinates, truncated toward zero.
    pub fn pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Center of a wheel bitmap of side `dimension`.
pub fn wheel_center(dimension: u32) -> (f64, f64) {
    let half = f64::from(dimension) / 2.0;
    (half, half)
}

/// Radius at which saturation reaches 1.0.
///
/// One pixel inside the half-width so the maximal point never samples an
/// edge pixel.
pub fn saturation_radius(dimension: u32) -> f64 {
    (f64::from(dimension) / 2.0 - WHEEL_EDGE_INSET).max(0.0)
}

/// Map hue and saturation (0.0–1.0) to a point on a wheel of side `dimension`.
pub fn hsv_to_wheel(h: f64, s: f64, dimension: u32) -> (f64, f64) {
    let (cx, cy) = wheel_center(dimension);
    let angle = h * TAU;
    let r = s * saturation_radius(dimension);
    (cx + angle.cos() * r, cy + angle.sin() * r)
}

/// Inverse of [`hsv_to_wheel`]: hue in `[0, 1)` and saturation clamped to 0.0–1.0.
pub fn wheel_to_hsv(x: f64, y: f64, dimension: u32) -> (f64, f64) {
    let (cx, cy) = wheel_center(dimension);
    let max_r = saturation_radius(dimension);
    let dx = x - cx;
    let dy = y - cy;

    // atan2 gives -PI..PI, we map to 0..1
    let mut h = dy.atan2(dx) / TAU;
    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h = 0.0;
    }

    let s = if max_r > 0.0 {
        (dx.hypot(dy) / max_r).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (h, s)
}

/// Locate a hex color on a wheel of side `dimension`.
///
/// Absent or invalid input yields the wheel center at full brightness, the
/// "no selection" state.
pub fn hex_to_wheel<'a>(hex_color: impl Into<Option<&'a str>>, dimension: u32) -> WheelPoint {
    let rgb = match hex::parse_hex(hex_color) {
        Ok(rgb) => rgb,
        Err(err) => {
            log::trace!("hex_to_wheel falling back to center: {err}");
            let (x, y) = wheel_center(dimension);
            return WheelPoint {
                x,
                y,
                brightness: FULL_BRIGHTNESS,
            };
        }
    };
    let Hsv { h, s, v } = rgb.to_hsv();
    let (x, y) = hsv_to_wheel(h, s, dimension);
    WheelPoint {
        x,
        y,
        brightness: math::unit_to_u8(v),
    }
}

/// Project a point onto the circumference of a circle.
///
/// The result lies on the ray from the circle center through the point, so
/// the angle (hue) is preserved exactly. A point at the center projects to
/// angle 0.
pub fn projection_on_circle(
    point_x: f64,
    point_y: f64,
    circle_x: f64,
    circle_y: f64,
    radius: f64,
) -> (f64, f64) {
    let angle = (point_y - circle_y).atan2(point_x - circle_x);
    (
        circle_x + radius * angle.cos(),
        circle_y + radius * angle.sin(),
    )
}

/// Keep a pointer position on the wheel.
///
/// Points closer to the center than half the wheel side pass through;
/// anything else is pulled back onto the saturation radius.
pub fn clamp_to_wheel(x: f64, y: f64, dimension: u32) -> (f64, f64) {
    let (cx, cy) = wheel_center(dimension);
    let half = f64::from(dimension) / 2.0;
    if (x - cx).hypot(y - cy) < half {
        return (x, y);
    }
    let projected = projection_on_circle(x, y, cx, cy, saturation_radius(dimension));
    log::trace!("clamped ({x}, {y}) onto wheel at {projected:?}");
    projected
}

/// Rasterize the color wheel at full value (V = 1.0).
///
/// Uses the same center and saturation radius as [`hsv_to_wheel`], so
/// sampling the pixel under a mapped point gives back (approximately) the
/// hue and saturation that produced it. The rim fades out over
/// [`FEATHER`] pixels; everything beyond is transparent black.
pub fn rasterize_wheel(dimension: u32) -> RgbaImage {
    let (cx, cy) = wheel_center(dimension);
    let radius = saturation_radius(dimension);

    RgbaImage::from_fn(dimension, dimension, |px, py| {
        let dx = f64::from(px) - cx;
        let dy = f64::from(py) - cy;
        let dist = dx.hypot(dy);

        if dist > radius + FEATHER {
            return Rgba([0, 0, 0, 0]);
        }

        // Feather only affects alpha; colors stay fully saturated past the radius.
        let alpha = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);
        let (hue, sat) = wheel_to_hsv(f64::from(px), f64::from(py), dimension);
        let rgb = math::hsv_to_rgb(hue, sat, 1.0);
        Rgba([rgb.r, rgb.g, rgb.b, math::unit_to_u8(alpha)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn no_color_maps_to_center_full_brightness() {
        let p = hex_to_wheel(None, 200);
        assert_eq!((p.x, p.y, p.brightness), (100.0, 100.0, 255));

        let p = hex_to_wheel("#zz", 200);
        assert_eq!((p.x, p.y, p.brightness), (100.0, 100.0, 255));
    }

    #[test]
    fn pure_red_sits_on_the_right_rim() {
        let p = hex_to_wheel("#ff0000", 200);
        assert_abs_diff_eq!(p.x, 199.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 100.0, epsilon = 1e-9);
        assert_eq!(p.brightness, 255);
    }

    #[test]
    fn brightness_carries_value() {
        let p = hex_to_wheel("#800000", 200);
        assert_eq!(p.brightness, 128);
        // Hue and saturation unchanged by the darker value.
        assert_abs_diff_eq!(p.x, 199.0, epsilon = 1e-9);

        let black = hex_to_wheel("#000", 200);
        assert_eq!((black.x, black.y, black.brightness), (100.0, 100.0, 0));
    }

    #[test]
    fn wheel_to_hsv_inverts_hsv_to_wheel() {
        for &(h, s) in &[(0.0, 1.0), (0.25, 0.5), (0.6, 0.9), (0.99, 0.1)] {
            let (x, y) = hsv_to_wheel(h, s, 240);
            let (h2, s2) = wheel_to_hsv(x, y, 240);
            assert_abs_diff_eq!(h2, h, epsilon = 1e-9);
            assert_abs_diff_eq!(s2, s, epsilon = 1e-9);
        }
    }

    #[test]
    fn wheel_to_hsv_clamps_saturation() {
        let (_, s) = wheel_to_hsv(1000.0, 100.0, 200);
        assert_eq!(s, 1.0);
        let (h, s) = wheel_to_hsv(100.0, 100.0, 200);
        assert_eq!((h, s), (0.0, 0.0));
    }

    #[test]
    fn projection_preserves_angle_and_radius() {
        let (cx, cy, r) = (50.0, 60.0, 30.0);
        for &(px, py) in &[(200.0, 60.0), (-10.0, -40.0), (51.0, 61.0), (50.0, 500.0)] {
            let (x, y) = projection_on_circle(px, py, cx, cy, r);
            assert_abs_diff_eq!((x - cx).hypot(y - cy), r, epsilon = 1e-9);
            let before = (py - cy).atan2(px - cx);
            let after = (y - cy).atan2(x - cx);
            assert_abs_diff_eq!(before, after, epsilon = 1e-9);
        }
    }

    #[test]
    fn projection_of_center_points_right() {
        let (x, y) = projection_on_circle(10.0, 10.0, 10.0, 10.0, 5.0);
        assert_abs_diff_eq!(x, 15.0);
        assert_abs_diff_eq!(y, 10.0);
    }

    #[test]
    fn clamp_passes_inside_points_through() {
        assert_eq!(clamp_to_wheel(120.0, 80.0, 200), (120.0, 80.0));
    }

    #[test]
    fn clamp_projects_outside_points() {
        let (x, y) = clamp_to_wheel(100.0, 400.0, 200);
        assert_abs_diff_eq!(x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 199.0, epsilon = 1e-9);
    }

    #[test]
    fn tiny_wheel_has_no_negative_radius() {
        assert_eq!(saturation_radius(1), 0.0);
        assert_eq!(hsv_to_wheel(0.3, 1.0, 1), (0.5, 0.5));
    }

    #[test]
    fn rasterized_wheel_matches_mapping() {
        let wheel = rasterize_wheel(200);
        assert_eq!(wheel.dimensions(), (200, 200));

        assert_eq!(wheel.get_pixel(100, 100).0, [255, 255, 255, 255]);
        assert_eq!(wheel.get_pixel(199, 100).0, [255, 0, 0, 255]);
        assert_eq!(wheel.get_pixel(0, 0).0[3], 0);

        let (x, y) = hsv_to_wheel(1.0 / 3.0, 1.0, 200);
        let px = wheel.get_pixel(x as u32, y as u32).0;
        assert_eq!(px[1], 255);
        assert!(px[0] < 10 && px[2] < 10, "expected green, got {px:?}");
    }
}
