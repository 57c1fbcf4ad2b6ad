//! Wraps text in color and attribute escapes.

use super::options::Styling;
use crate::color::{resolve_color, RESET};
use crate::error::Result;

/// Styles `text` with a bare color or a full set of options.
///
/// - A bare color yields `color + text + RESET`.
/// - Options yield `color + attributes + text + RESET`, where the color
///   defaults to the reset escape and attributes follow the fixed order bold,
///   underline, inverse, strikethrough, hidden, italic.
///
/// # Example
///
/// ```rust
/// use logchu::{customize, ColorPreset, ColorValue, StyleOptions};
///
/// let plain = customize("hi", ColorPreset::Red).unwrap();
/// assert_eq!(plain, "\x1b[38;2;255;0;0mhi\x1b[0m");
///
/// let bold = customize("hi", StyleOptions::new().with_color(ColorValue::Rgb(1, 2, 3)).bold()).unwrap();
/// assert_eq!(bold, "\x1b[38;2;1;2;3m\x1b[1mhi\x1b[0m");
/// ```
///
/// # Errors
///
/// Returns the color resolution error for malformed hex/decimal colors or an
/// unresolved preset reference.
pub fn customize(text: &str, styling: impl Into<Styling>) -> Result<String> {
    match styling.into() {
        Styling::Color(color) => {
            let escape = resolve_color(&color)?;
            Ok(format!("{}{}{}", escape, text, RESET))
        }
        Styling::Options(options) => {
            let mut out = match &options.color {
                Some(color) => resolve_color(color)?,
                None => RESET.to_string(),
            };
            for attribute in options.enabled_attributes() {
                out.push_str(attribute.escape());
            }
            out.push_str(text);
            out.push_str(RESET);
            Ok(out)
        }
    }
}
