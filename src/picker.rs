//! Picker model: the state behind a color wheel, brightness slider, and hex
//! readout, without any widgets.
//!
//! A UI layer forwards pointer drags, slider moves, and programmatic color
//! changes here and renders whatever [`ColorPicker::current`] reports.
//! Presentation targets registered with [`ColorPicker::add_sink`] are
//! updated after every change.

use image::RgbaImage;

use crate::color::{Hsv, Rgb};
use crate::config::PickerConfig;
use crate::constants::FULL_BRIGHTNESS;
use crate::hex;
use crate::sampler::{get_target_color, PixelSource};
use crate::updater::{ColorSink, ColorUpdate, ContrastRule, OnChange, TextColor};
use crate::wheel::{self, WheelPoint};

/// Color wheel picker state over a wheel bitmap `S`.
pub struct ColorPicker<S = RgbaImage> {
    wheel: S,
    dimension: u32,
    target: (f64, f64),
    brightness: u8,
    default_rgb: Rgb,
    contrast: ContrastRule,
    sinks: Vec<Box<dyn ColorSink>>,
    current: ColorUpdate,
}

impl ColorPicker<RgbaImage> {
    /// Create a picker over a freshly rasterized wheel of `config.wheel_size`.
    pub fn new(config: &PickerConfig) -> Self {
        Self::with_wheel(wheel::rasterize_wheel(config.wheel_size), config)
    }
}

impl Default for ColorPicker<RgbaImage> {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl<S: PixelSource> ColorPicker<S> {
    /// Create a picker over a caller-supplied wheel bitmap.
    ///
    /// `wheel` is assumed to be `config.wheel_size` pixels square and laid
    /// out like [`wheel::rasterize_wheel`].
    pub fn with_wheel(wheel: S, config: &PickerConfig) -> Self {
        let target = wheel::wheel_center(config.wheel_size);
        let sampled = get_target_color(
            &wheel,
            target.0 as i32,
            target.1 as i32,
            config.default_rgb,
        );
        let current = ColorUpdate::new(sampled, FULL_BRIGHTNESS, &config.contrast);

        let mut picker = Self {
            wheel,
            dimension: config.wheel_size,
            target,
            brightness: FULL_BRIGHTNESS,
            default_rgb: config.default_rgb,
            contrast: config.contrast,
            sinks: Vec::new(),
            current,
        };
        if let Some(initial) = config.initial_color.as_deref() {
            picker.set_color(initial);
        }
        picker
    }

    /// Register a presentation target. It is updated on every later change.
    pub fn add_sink<K: ColorSink + 'static>(&mut self, sink: K) {
        self.sinks.push(Box::new(sink));
    }

    /// Register a change callback receiving the new hex string.
    pub fn on_change<F: FnMut(&str) + 'static>(&mut self, callback: F) {
        self.add_sink(OnChange(callback));
    }

    /// Move the selection to `hex_color`.
    ///
    /// Invalid or absent input resets to the wheel center at full
    /// brightness. The reported color is sampled from the wheel, so it can
    /// differ from the request by the wheel's pixel resolution.
    pub fn set_color<'a>(&mut self, hex_color: impl Into<Option<&'a str>>) -> &ColorUpdate {
        let hex_color: Option<&str> = hex_color.into();
        if let Err(err) = hex::normalize_hex(hex_color) {
            log::warn!("ignoring color {hex_color:?}: {err}");
        }
        let WheelPoint { x, y, brightness } = wheel::hex_to_wheel(hex_color, self.dimension);
        self.target = (x, y);
        self.brightness = brightness;
        self.refresh()
    }

    /// Follow a pointer press or drag at `(x, y)` in wheel pixel space.
    ///
    /// Positions off the wheel are projected back onto its rim.
    pub fn drag_to(&mut self, x: f64, y: f64) -> &ColorUpdate {
        self.target = wheel::clamp_to_wheel(x, y, self.dimension);
        self.refresh()
    }

    /// Follow a brightness slider change.
    pub fn set_brightness(&mut self, brightness: u8) -> &ColorUpdate {
        self.brightness = brightness;
        self.refresh()
    }

    /// Resample the wheel at the current target and notify sinks.
    pub fn refresh(&mut self) -> &ColorUpdate {
        let (x, y) = self.target;
        let sampled = get_target_color(&self.wheel, x as i32, y as i32, self.default_rgb);
        let update = ColorUpdate::new(sampled, self.brightness, &self.contrast);
        for sink in &mut self.sinks {
            update.apply(sink.as_mut());
        }
        self.current = update;
        &self.current
    }
}

impl<S> ColorPicker<S> {
    /// Current hex color.
    pub fn get(&self) -> &str {
        &self.current.hex
    }

    pub fn current(&self) -> &ColorUpdate {
        &self.current
    }

    pub fn rgb(&self) -> Rgb {
        self.current.rgb
    }

    pub fn text_color(&self) -> TextColor {
        self.current.text_color
    }

    /// Selected hue and saturation from the target position, value from brightness.
    pub fn hsv(&self) -> Hsv {
        let (h, s) = wheel::wheel_to_hsv(self.target.0, self.target.1, self.dimension);
        Hsv::new(h, s, f64::from(self.brightness) / 255.0)
    }

    /// Target position in wheel pixel space.
    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn wheel(&self) -> &S {
        &self.wheel
    }
}
