//! Utility functions for color conversion.

use rand::Rng;

use crate::error::{Error, Result};

/// Decomposes a `#rrggbb` (or `#rgb`) hex string into an RGB triplet.
///
/// # Example
///
/// ```rust
/// use logchu::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#f44747").unwrap(), (244, 71, 71));
/// assert_eq!(hex_to_rgb("#fff").unwrap(), (255, 255, 255));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] if the string lacks the leading `#`, has the
/// wrong length, or contains non-hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| Error::invalid_color(hex, "hex colors must start with '#'"))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(hex, "contains non-hexadecimal digits"));
    }

    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        // #abc is shorthand for #aabbcc
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        n => {
            return Err(Error::invalid_color(
                hex,
                format!("expected 3 or 6 hex digits, found {}", n),
            ))
        }
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|e| Error::invalid_color(hex, e.to_string()))
    };

    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Decomposes a decimal color packed as `0xRRGGBB` into an RGB triplet.
///
/// # Example
///
/// ```rust
/// use logchu::decimal_to_rgb;
///
/// assert_eq!(decimal_to_rgb(0xf44747).unwrap(), (244, 71, 71));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for values above `0xFFFFFF`.
pub fn decimal_to_rgb(value: u32) -> Result<(u8, u8, u8)> {
    if value > 0x00ff_ffff {
        return Err(Error::invalid_color(
            value.to_string(),
            "decimal colors must not exceed 16777215 (0xFFFFFF)",
        ));
    }
    let [_, r, g, b] = value.to_be_bytes();
    Ok((r, g, b))
}

/// Picks a uniformly random RGB triplet.
pub fn random_rgb() -> (u8, u8, u8) {
    let mut rng = rand::thread_rng();
    (rng.gen(), rng.gen(), rng.gen())
}
