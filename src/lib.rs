//! # Logchu - Styled Console Logging
//!
//! Logchu prints text in 24-bit color with optional attributes, and routes
//! every line to up to three sinks: a named console channel, listener
//! callbacks, and an optional plain-text log file.
//!
//! ## Core Concepts
//!
//! - [`ColorPreset`]: the built-in truecolor palette
//! - [`ColorValue`]: presets, raw escapes, RGB, hex, decimal or `$custom:` references
//! - [`StyleOptions`]: color, attributes and [`LogCategory`]
//! - [`Logchu`]: the facade with `info`, `warning`, `rainbow`, `write`, ...
//! - [`CustomLogger`]: named presets loaded from `logchu.config.{json,yaml,yml}`
//!
//! ## Quick Start
//!
//! ```rust
//! use logchu::{customize, ColorPreset, StyleOptions};
//!
//! let styled = customize("Hello", StyleOptions::new().with_color(ColorPreset::Red).bold()).unwrap();
//! assert_eq!(styled, "\x1b[38;2;255;0;0m\x1b[1mHello\x1b[0m");
//! ```
//!
//! ## Configured Loggers
//!
//! ```rust
//! use std::sync::Arc;
//! use logchu::{Config, Logchu, MemoryConsole, StyleOptions};
//!
//! let config = Config::from_yaml_str(r##"
//! customColorPresets:
//!   testColor: "#000000"
//! customLoggers:
//!   testLogger:
//!     info: { color: "$custom:testColor", bold: true }
//! "##).unwrap();
//!
//! let console = Arc::new(MemoryConsole::new());
//! let log = Logchu::builder().config(config).console(console.clone()).build().unwrap();
//!
//! log.use_logger("testLogger").unwrap().invoke("info", "hi", None).unwrap();
//! assert_eq!(console.last().unwrap().1, "\x1b[38;2;0;0;0m\x1b[1mhi\x1b[0m");
//! ```
//!
//! ## Global Logger
//!
//! [`logger()`] returns a process-wide [`Logchu`] that discovers its
//! configuration in the current directory on first use.
//!
//! Diagnostics about the library itself (reloads, console write failures) go
//! through the [`log`] facade under the `logchu` target.

mod category;
mod color;
mod config;
mod error;
mod logger;
mod preset;
mod sink;
mod style;
mod util;

use once_cell::sync::Lazy;

pub use category::{Channel, LogCategory};
pub use color::{
    from_decimal, from_hex, from_rgb, from_styled, resolve_color, ColorPreset, ColorValue,
    PRESET_REF_PREFIX, RESET,
};
pub use config::{Config, ConfigHandle, ConfigSource, ReloadPolicy, CONFIG_FILE_NAMES};
pub use error::{Error, Result};
pub use logger::{rainbow, CustomLogger, Logchu, LogchuBuilder, PresetHandle, WriteEntry};
pub use preset::{HookRecord, LoggerPresets, PresetHook, PresetRegistry};
pub use sink::{
    Console, Dispatcher, FileSink, LogRecord, MemoryConsole, TermConsole, Watcher,
    FILE_TIMESTAMP_FORMAT,
};
pub use style::{customize, Attribute, StyleOptions, Styling};
pub use util::{decimal_to_rgb, hex_to_rgb, random_rgb};

/// Target used for the library's own `log` records.
pub(crate) const LOG_TARGET: &str = "logchu";

static LOGGER: Lazy<Logchu> = Lazy::new(|| {
    let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    Logchu::builder().discover(dir).build().unwrap_or_else(|err| {
        log::warn!(target: LOG_TARGET, "falling back to empty configuration: {}", err);
        Logchu::new(Config::new())
    })
});

/// The process-wide logger.
///
/// Configuration is discovered in the current working directory the first
/// time this is called and re-read before every preset resolution. A missing
/// or broken file falls back to an empty configuration.
pub fn logger() -> &'static Logchu {
    &LOGGER
}
