//! Sizing, threshold, and default-value constants for the picker.

/// Default side length of the wheel bitmap, in pixels
pub const WHEEL_SIZE: u32 = 240;

/// Inset between the wheel's half-width and its saturation radius.
///
/// Keeps the fully saturated point strictly inside the bitmap so sampling
/// never lands on an edge pixel.
pub const WHEEL_EDGE_INSET: f64 = 1.0;

/// Anti-alias feather width at the wheel rim, in pixels
pub const FEATHER: f64 = 1.5;

/// Slider value for full brightness (V = 1.0)
pub const FULL_BRIGHTNESS: u8 = 255;

/// Brightness below which readout text switches to white
pub const TEXT_CONTRAST_THRESHOLD: u8 = 70;
