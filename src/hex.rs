//! Hex color strings: validation, canonicalization, and formatting.
//!
//! Every accepted string comes back in canonical `#rrggbb` lowercase form.
//! Shorthand `#rgb` is expanded by duplicating each digit.

use crate::color::Rgb;
use crate::error::{HexError, Result};

/// Validate `input` and return its canonical `#rrggbb` form.
///
/// Accepts `&str` or `Option<&str>`. Surrounding whitespace is trimmed, case
/// is folded, and the leading `#` is optional. Digits are checked before
/// length, so `"gg"` reports [`HexError::InvalidDigits`].
pub fn normalize_hex<'a>(input: impl Into<Option<&'a str>>) -> Result<String> {
    let input: Option<&str> = input.into();
    let lowered = input.map(str::trim).unwrap_or_default().to_lowercase();
    if lowered.is_empty() {
        return Err(HexError::Empty);
    }

    let digits = lowered.strip_prefix('#').unwrap_or(&lowered);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigits {
            input: digits.to_string(),
        });
    }

    match digits.len() {
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            Ok(out)
        }
        6 => Ok(format!("#{digits}")),
        len => Err(HexError::InvalidLength { len }),
    }
}

/// [`normalize_hex`] with failures mapped to `None`.
pub fn try_normalize_hex<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    normalize_hex(input).ok()
}

/// Normalize and decode a color string into its RGB channels.
pub fn parse_hex<'a>(input: impl Into<Option<&'a str>>) -> Result<Rgb> {
    let canonical = normalize_hex(input)?;
    // Canonical form is always `#` + 6 ASCII hex digits.
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&canonical[range], 16);
    match (channel(1..3), channel(3..5), channel(5..7)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb::new(r, g, b)),
        _ => Err(HexError::InvalidDigits {
            input: canonical[1..].to_string(),
        }),
    }
}

/// Format an RGB triple as lowercase `#rrggbb`.
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}
