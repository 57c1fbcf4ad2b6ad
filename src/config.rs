//! Configuration: presets, log file and runtime attachments.
//!
//! Configuration comes from a JSON or YAML file (or is built in code) and is
//! served through a [`ConfigHandle`] as immutable snapshots. Loading only
//! happens on [`ConfigHandle::reload`], which the handle also calls before
//! preset resolution under [`ReloadPolicy::OnResolve`].
//!
//! ```yaml
//! customColorPresets:
//!   testColor: "\e[38;2;0;0;0m"
//!   hex: "#f44747"
//! customLoggers:
//!   testLogger:
//!     info: { bold: true, italic: true, color: [0, 255, 255] }
//!     alsoWorksWithCustomColors: { color: "$custom:testColor" }
//! logFile: logs/app.log
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;

use crate::color::ColorValue;
use crate::error::{Error, Result};
use crate::preset::{HookRecord, PresetHook};
use crate::sink::Watcher;
use crate::style::StyleOptions;
use crate::LOG_TARGET;

/// File names probed by [`Config::discover`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "logchu.config.json",
    "logchu.config.yaml",
    "logchu.config.yml",
];

/// Presets, sinks and hooks used by a [`Logchu`](crate::Logchu).
///
/// `watcher` and `hooks` are runtime-only: they are never read from files and
/// survive [`ConfigHandle::reload`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub custom_color_presets: BTreeMap<String, ColorValue>,
    pub custom_loggers: BTreeMap<String, BTreeMap<String, StyleOptions>>,
    pub log_file: Option<PathBuf>,
    #[serde(skip)]
    pub watcher: Option<Arc<Watcher>>,
    #[serde(skip)]
    pub hooks: BTreeMap<String, PresetHook>,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color_preset(mut self, id: impl Into<String>, color: impl Into<ColorValue>) -> Self {
        self.custom_color_presets.insert(id.into(), color.into());
        self
    }

    /// Registers a custom logger built from `(preset name, options)` pairs.
    pub fn with_logger<K, I>(mut self, id: impl Into<String>, presets: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, StyleOptions)>,
    {
        let presets = presets
            .into_iter()
            .map(|(name, options)| (name.into(), options))
            .collect();
        self.custom_loggers.insert(id.into(), presets);
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_watcher(mut self, watcher: Arc<Watcher>) -> Self {
        self.watcher = Some(watcher);
        self
    }

    /// Attaches a hook to the custom logger `logger_id`.
    pub fn with_hook(
        mut self,
        logger_id: impl Into<String>,
        hook: impl Fn(&HookRecord) + Send + Sync + 'static,
    ) -> Self {
        self.hooks.insert(logger_id.into(), PresetHook::new(hook));
        self
    }

    /// Parses a JSON configuration document.
    pub fn from_json_str(source: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Parses a YAML configuration document.
    pub fn from_yaml_str(source: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Loads a configuration file, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedConfigFormat`] unless the extension is `json`, `yaml` or `yml`.
    /// - [`Error::ConfigLoad`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |message: String| Error::ConfigLoad {
            path: path.to_path_buf(),
            message,
        };

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("yaml") | Some("yml") => false,
            _ => {
                return Err(Error::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let parsed = if is_json {
            Self::from_json_str(&source).map_err(|e| e.to_string())
        } else {
            Self::from_yaml_str(&source).map_err(|e| e.to_string())
        };
        parsed.map_err(load_error)
    }

    /// Returns the first of [`CONFIG_FILE_NAMES`] present in `dir`.
    pub fn find_in(dir: impl AsRef<Path>) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Loads the configuration file found in `dir`, or the empty configuration
    /// if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoad`] if a file exists but cannot be parsed.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        match Self::find_in(dir) {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    fn carry_runtime_from(mut self, previous: &Config) -> Self {
        self.watcher = previous.watcher.clone();
        self.hooks = previous.hooks.clone();
        self
    }
}

/// Where a [`ConfigHandle`] reloads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built in code; reloading keeps the current snapshot.
    Memory,
    /// A specific JSON or YAML file.
    File(PathBuf),
    /// Whichever of [`CONFIG_FILE_NAMES`] exists in the directory.
    Discover(PathBuf),
}

impl ConfigSource {
    /// Loads a fresh configuration, or `None` for [`ConfigSource::Memory`].
    pub fn load(&self) -> Result<Option<Config>> {
        match self {
            ConfigSource::Memory => Ok(None),
            ConfigSource::File(path) => Config::from_path(path).map(Some),
            ConfigSource::Discover(dir) => Config::discover(dir).map(Some),
        }
    }
}

/// When a [`ConfigHandle`] re-reads its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Only on explicit [`ConfigHandle::reload`].
    #[default]
    Manual,
    /// Additionally before every preset resolution, so edits to the file take
    /// effect without restarting.
    OnResolve,
}

/// Shared, reloadable configuration.
///
/// Readers take an `Arc<Config>` snapshot; a reload swaps the snapshot without
/// disturbing readers already holding the old one.
#[derive(Debug)]
pub struct ConfigHandle {
    source: ConfigSource,
    policy: ReloadPolicy,
    current: RwLock<Arc<Config>>,
}

impl ConfigHandle {
    /// Wraps an in-memory configuration.
    pub fn new(config: Config) -> Self {
        Self {
            source: ConfigSource::Memory,
            policy: ReloadPolicy::Manual,
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Loads `source` once and keeps it as the reload source.
    ///
    /// # Errors
    ///
    /// Returns the load error of the initial read.
    pub fn load(source: ConfigSource, policy: ReloadPolicy) -> Result<Self> {
        let handle = Self {
            source,
            policy,
            current: RwLock::new(Arc::new(Config::default())),
        };
        handle.reload()?;
        Ok(handle)
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn policy(&self) -> ReloadPolicy {
        self.policy
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Re-reads the source and swaps in the new snapshot.
    ///
    /// Runtime attachments (watcher, hooks) carry over from the previous
    /// snapshot. A failed load leaves the previous snapshot in place.
    ///
    /// # Errors
    ///
    /// Returns the load error; it is never swallowed.
    pub fn reload(&self) -> Result<Arc<Config>> {
        let Some(fresh) = self.source.load()? else {
            return Ok(self.snapshot());
        };

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(fresh.carry_runtime_from(&current));
        *current = Arc::clone(&next);
        log::debug!(target: LOG_TARGET, "reloaded configuration from {:?}", self.source);
        Ok(next)
    }

    /// Replaces the snapshot with an explicit configuration.
    pub fn replace(&self, config: Config) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
    }

    /// Derives a new snapshot from the current one, e.g. to attach a watcher
    /// or hooks to file-backed configuration.
    pub fn update(&self, f: impl FnOnce(Config) -> Config) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(f((**current).clone()));
    }

    /// The snapshot preset resolution should use, honoring the reload policy.
    pub(crate) fn for_resolution(&self) -> Result<Arc<Config>> {
        match self.policy {
            ReloadPolicy::Manual => Ok(self.snapshot()),
            ReloadPolicy::OnResolve => self.reload(),
        }
    }
}
