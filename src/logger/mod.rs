//! The logger facade.
//!
//! - [`Logchu`]: built-in styled logging methods and preset lookup
//! - [`CustomLogger`]: a logger made of named presets
//! - [`WriteEntry`]: one segment of a multi-style line

mod builtin;
mod custom;
mod write;

pub use builtin::{rainbow, Logchu, LogchuBuilder};
pub use custom::{CustomLogger, PresetHandle};
pub use write::WriteEntry;
