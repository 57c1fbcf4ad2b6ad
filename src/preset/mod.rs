//! Named presets sourced from configuration.
//!
//! - [`PresetRegistry`]: resolves logger and color presets from a snapshot
//! - [`LoggerPresets`]: the preset set handed to a [`CustomLogger`](crate::CustomLogger)
//! - [`PresetHook`] / [`HookRecord`]: pre-emission callbacks

mod hook;
mod registry;

pub use hook::{HookRecord, PresetHook};
pub use registry::{LoggerPresets, PresetRegistry};
