//! Color representations and resolution to ANSI escapes.
//!
//! - [`ColorPreset`]: the fixed truecolor palette
//! - [`ColorValue`]: any accepted color representation
//! - [`resolve_color`]: turns a [`ColorValue`] into one raw escape

mod preset;
mod value;

pub use preset::{ColorPreset, RESET};
pub use value::{
    from_decimal, from_hex, from_rgb, from_styled, resolve_color, ColorValue, PRESET_REF_PREFIX,
};
