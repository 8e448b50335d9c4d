//! # floem-wheel
//!
//! The toolkit-independent core of a color wheel picker: a hue/saturation
//! wheel, a brightness slider, and hex/RGB readouts.
//!
//! Provides hex normalization, RGB/HSV conversion, wheel geometry (HSV to
//! wheel coordinates and back, rim projection), wheel bitmap sampling, and
//! the color update that ties them together. Widgets plug in through
//! [`ColorSink`].
//!
//! ## Usage
//!
//! ```rust
//! use floem_wheel::{normalize_hex, ColorPicker, PickerConfig};
//!
//! assert_eq!(normalize_hex("#ABC").unwrap(), "#aabbcc");
//!
//! let mut picker = ColorPicker::new(&PickerConfig::default().with_wheel_size(200));
//! picker.drag_to(500.0, 100.0); // off the wheel, pulled back to the red rim
//! assert_eq!(picker.get(), "#ff0000");
//! assert_eq!(picker.set_brightness(128).hex, "#800000");
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod hex;
mod math;
pub mod picker;
pub mod sampler;
pub mod sinks;
pub mod updater;
pub mod wheel;

pub use color::{Hsv, Rgb};
pub use config::PickerConfig;
pub use error::{HexError, SampleError};
pub use hex::{format_hex, normalize_hex, parse_hex, try_normalize_hex};
pub use math::{hsv_to_rgb, rgb_to_hsv};
pub use picker::ColorPicker;
pub use sampler::{get_target_color, PixelSource};
pub use updater::{
    scale_brightness, update_colors, update_colors_with, ColorSink, ColorUpdate, ContrastRule,
    OnChange, TextColor,
};
pub use wheel::{
    clamp_to_wheel, hex_to_wheel, hsv_to_wheel, projection_on_circle, rasterize_wheel,
    wheel_to_hsv, WheelPoint,
};
