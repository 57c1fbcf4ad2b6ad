//! Color values and their resolution to raw escapes.

use serde::Deserialize;

use super::preset::ColorPreset;
use crate::error::{Error, Result};
use crate::util::{decimal_to_rgb, hex_to_rgb};

/// Prefix marking a reference to a custom color preset in configuration.
pub const PRESET_REF_PREFIX: &str = "$custom:";

/// Any accepted representation of a color.
///
/// Exactly one representation is active per value. Everything except
/// [`PresetRef`](ColorValue::PresetRef) resolves to a raw escape through
/// [`resolve_color`]; preset references are rewritten by the
/// [`PresetRegistry`](crate::PresetRegistry) before formatting.
///
/// In configuration files a color is written as:
///
/// | Form | Variant |
/// |------|---------|
/// | `"\u001b[34m"` | [`Ansi`](ColorValue::Ansi) |
/// | `"#f44747"` | [`Hex`](ColorValue::Hex) |
/// | `"$custom:name"` | [`PresetRef`](ColorValue::PresetRef) |
/// | `[244, 71, 71]` | [`Rgb`](ColorValue::Rgb) |
/// | `16009031` | [`Decimal`](ColorValue::Decimal) |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawColor")]
pub enum ColorValue {
    /// One of the built-in palette entries.
    Preset(ColorPreset),
    /// A raw escape sequence, used verbatim.
    Ansi(String),
    /// A truecolor foreground.
    Rgb(u8, u8, u8),
    /// A `#rrggbb` or `#rgb` string.
    Hex(String),
    /// A color packed as `0xRRGGBB`.
    Decimal(u32),
    /// A reference to a named custom color preset.
    PresetRef(String),
}

impl ColorValue {
    /// Classifies a configuration string.
    ///
    /// Strings starting with `#` are hex colors, strings starting with
    /// `$custom:` are preset references, anything else is a raw escape.
    pub fn parse(value: &str) -> Self {
        if let Some(name) = value.strip_prefix(PRESET_REF_PREFIX) {
            ColorValue::PresetRef(name.to_string())
        } else if value.starts_with('#') {
            ColorValue::Hex(value.to_string())
        } else {
            ColorValue::Ansi(value.to_string())
        }
    }

    /// Returns the referenced preset name for [`PresetRef`](ColorValue::PresetRef) values.
    pub fn preset_ref(&self) -> Option<&str> {
        match self {
            ColorValue::PresetRef(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Rgb((u8, u8, u8)),
    Decimal(u32),
}

impl From<RawColor> for ColorValue {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Text(text) => ColorValue::parse(&text),
            RawColor::Rgb((r, g, b)) => ColorValue::Rgb(r, g, b),
            RawColor::Decimal(value) => ColorValue::Decimal(value),
        }
    }
}

impl From<ColorPreset> for ColorValue {
    fn from(preset: ColorPreset) -> Self {
        ColorValue::Preset(preset)
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorValue::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColorValue::Rgb(r, g, b)
    }
}

impl From<u32> for ColorValue {
    fn from(value: u32) -> Self {
        ColorValue::Decimal(value)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::parse(value)
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::parse(&value)
    }
}

/// Formats an RGB triplet as a truecolor foreground escape.
///
/// # Example
///
/// ```rust
/// use logchu::from_rgb;
///
/// assert_eq!(from_rgb((255, 255, 255)), "\x1b[38;2;255;255;255m");
/// ```
pub fn from_rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Converts a hex color to a truecolor foreground escape.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for malformed hex strings.
pub fn from_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(from_rgb)
}

/// Converts a decimal color to a truecolor foreground escape.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for values above `0xFFFFFF`.
pub fn from_decimal(value: u32) -> Result<String> {
    decimal_to_rgb(value).map(from_rgb)
}

/// Extracts the opening escape from text styled by another library.
///
/// Style a single space with the other library and pass the result; everything
/// before the first space is the color escape.
///
/// ```rust
/// use logchu::{from_styled, ColorValue};
///
/// assert_eq!(
///     from_styled("\x1b[31m \x1b[39m"),
///     ColorValue::Ansi("\x1b[31m".to_string())
/// );
/// ```
pub fn from_styled(styled: &str) -> ColorValue {
    let escape = styled.split(' ').next().unwrap_or_default();
    ColorValue::Ansi(escape.to_string())
}

/// Resolves any color value to a single raw escape sequence.
///
/// Raw escapes and palette presets pass through unchanged; RGB, hex and decimal
/// values are formatted as `ESC[38;2;r;g;bm`.
///
/// # Errors
///
/// - [`Error::InvalidColor`] for malformed hex or out-of-range decimal values.
/// - [`Error::UnknownColorPreset`] for a preset reference that was never
///   resolved against the registry.
pub fn resolve_color(color: &ColorValue) -> Result<String> {
    match color {
        ColorValue::Preset(preset) => Ok(preset.escape().to_string()),
        ColorValue::Ansi(escape) => Ok(escape.clone()),
        ColorValue::Rgb(r, g, b) => Ok(from_rgb((*r, *g, *b))),
        ColorValue::Hex(hex) => from_hex(hex),
        ColorValue::Decimal(value) => from_decimal(*value),
        ColorValue::PresetRef(name) => Err(Error::UnknownColorPreset { id: name.clone() }),
    }
}
