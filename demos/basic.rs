//! Standalone demo: drives the picker model the way a widget would.
//!
//! Run with `RUST_LOG=trace` to see sampling and clamping decisions.

use floem_wheel::{ColorPicker, PickerConfig, TextColor};

fn main() {
    env_logger::init();

    let config = PickerConfig::default().with_initial_color("#3B82F6");
    let mut picker = ColorPicker::new(&config);
    picker.on_change(|hex| println!("changed -> {hex}"));

    println!(
        "initial {} at {:?}, brightness {}",
        picker.get(),
        picker.target(),
        picker.brightness()
    );

    let size = f64::from(picker.dimension());
    picker.drag_to(size * 2.0, size / 2.0);
    picker.set_brightness(60);

    let hsv = picker.hsv();
    let text = match picker.text_color() {
        TextColor::White => "white",
        TextColor::Black => "black",
    };
    println!(
        "final {} rgb {:?} hsv ({:.3}, {:.3}, {:.3}), {text} text",
        picker.get(),
        picker.rgb(),
        hsv.h,
        hsv.s,
        hsv.v
    );

    picker.set_color("not a color");
    println!("reset to {}", picker.get());
}
