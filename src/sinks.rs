//! Toolkit adapters implementing [`ColorSink`](crate::updater::ColorSink).
//!
//! Each adapter lives behind its own cargo feature so the core stays free of
//! UI dependencies.

#[cfg(feature = "clipboard")]
pub use self::clipboard_sink::*;

#[cfg(feature = "floem")]
mod floem_sink {
    use floem::reactive::{RwSignal, SignalUpdate};

    use crate::updater::ColorSink;

    /// A Floem signal tracks the latest hex color.
    impl ColorSink for RwSignal<String> {
        fn set_foreground(&mut self, hex: &str) {
            self.set(hex.to_string());
        }
    }

    #[cfg(test)]
    mod tests {
        use floem::reactive::{RwSignal, SignalGet};

        use crate::updater::ColorSink;

        #[test]
        fn signal_receives_hex() {
            let mut signal = RwSignal::new(String::new());
            signal.set_foreground("#3b82f6");
            assert_eq!(signal.get_untracked(), "#3b82f6");
        }
    }
}

#[cfg(feature = "clipboard")]
mod clipboard_sink {
    use crate::updater::ColorSink;

    /// Copies the hex text of every update to the system clipboard.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ClipboardSink;

    impl ColorSink for ClipboardSink {
        fn set_foreground(&mut self, _hex: &str) {}

        fn set_text(&mut self, hex: &str) {
            copy_to_clipboard(hex);
        }
    }

    /// Put `text` on the clipboard. Failures are logged and otherwise ignored.
    pub fn copy_to_clipboard(text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(text) {
                    log::warn!("failed to copy {text} to clipboard: {err}");
                }
            }
            Err(err) => log::warn!("clipboard unavailable: {err}"),
        }
    }
}
