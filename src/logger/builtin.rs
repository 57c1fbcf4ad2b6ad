//! The built-in logger facade.

use std::path::PathBuf;
use std::sync::Arc;

use rand::Rng;

use super::custom::CustomLogger;
use super::write::WriteEntry;
use crate::category::LogCategory;
use crate::color::{ColorPreset, ColorValue};
use crate::config::{Config, ConfigHandle, ConfigSource, ReloadPolicy};
use crate::error::Result;
use crate::preset::{HookRecord, LoggerPresets, PresetHook, PresetRegistry};
use crate::sink::{Console, Dispatcher, TermConsole, Watcher};
use crate::style::{customize, Attribute, StyleOptions, Styling};
use crate::util::random_rgb;

/// Styled console logger with configurable sinks and custom loggers.
///
/// Cloning is cheap; clones share configuration and console.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use logchu::{Channel, ColorPreset, Config, Logchu, MemoryConsole, StyleOptions};
///
/// let console = Arc::new(MemoryConsole::new());
/// let log = Logchu::builder()
///     .config(Config::new())
///     .console(console.clone())
///     .build()
///     .unwrap();
///
/// log.info("Hello, World", None).unwrap();
/// log.warning("Hello, World", Some(&StyleOptions::new().bold())).unwrap();
///
/// assert_eq!(
///     console.channel_lines(Channel::Info),
///     vec!["\x1b[38;2;0;128;255mHello, World\x1b[0m"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Logchu {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: ConfigHandle,
    dispatcher: Dispatcher,
}

impl Logchu {
    /// Creates a logger over an in-memory configuration writing to the terminal.
    pub fn new(config: Config) -> Self {
        Self::from_parts(ConfigHandle::new(config), Arc::new(TermConsole))
    }

    pub fn builder() -> LogchuBuilder {
        LogchuBuilder::default()
    }

    fn from_parts(config: ConfigHandle, console: Arc<dyn Console>) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                dispatcher: Dispatcher::new(console),
            }),
        }
    }

    /// The configuration handle shared by this logger and its clones.
    pub fn config(&self) -> &ConfigHandle {
        &self.inner.config
    }

    /// Re-reads the configuration source.
    ///
    /// # Errors
    ///
    /// Returns the load error; the previous configuration stays active.
    pub fn reload(&self) -> Result<()> {
        self.inner.config.reload().map(|_| ())
    }

    /// A registry over the configuration used for preset resolution.
    ///
    /// # Errors
    ///
    /// Returns the load error when the reload policy re-reads a broken file.
    pub fn registry(&self) -> Result<PresetRegistry> {
        self.inner.config.for_resolution().map(PresetRegistry::new)
    }

    /// Builds the custom logger `id` from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLogger`](crate::Error::UnknownLogger),
    /// [`Error::UnknownColorPreset`](crate::Error::UnknownColorPreset) or a
    /// configuration load error.
    pub fn use_logger(&self, id: &str) -> Result<CustomLogger> {
        self.use_logger_with(id, false)
    }

    /// Like [`use_logger`](Self::use_logger), optionally suppressing the default
    /// emission so only the logger's hook runs.
    ///
    /// # Errors
    ///
    /// Same as [`use_logger`](Self::use_logger).
    pub fn use_logger_with(&self, id: &str, overwrite_default_emission: bool) -> Result<CustomLogger> {
        let presets = self.registry()?.resolve_logger(id)?;
        Ok(CustomLogger::build(
            self.clone(),
            presets,
            overwrite_default_emission,
        ))
    }

    /// Returns the custom color preset `id` as stored in configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColorPreset`](crate::Error::UnknownColorPreset)
    /// or a configuration load error.
    pub fn use_color(&self, id: &str) -> Result<ColorValue> {
        self.registry()?.resolve_color_preset(id)
    }

    /// Builds a custom logger from presets defined in code.
    ///
    /// `$custom:<name>` colors are resolved against the configured color
    /// presets, as for [`use_logger`](Self::use_logger).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColorPreset`](crate::Error::UnknownColorPreset),
    /// [`Error::ColorPresetCycle`](crate::Error::ColorPresetCycle) or a
    /// configuration load error.
    pub fn custom_logger(&self, presets: LoggerPresets) -> Result<CustomLogger> {
        let presets = self.registry()?.resolve_presets(presets)?;
        Ok(CustomLogger::build(self.clone(), presets, false))
    }

    /// Sends an already formatted line through every sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileSink`](crate::Error::FileSink) if the log file
    /// cannot be written.
    pub fn emit(&self, original: &str, formatted: &str, category: LogCategory) -> Result<()> {
        let config = self.inner.config.snapshot();
        self.inner
            .dispatcher
            .emit(&config, original, formatted, category)
    }

    /// Logs `text` with optional styling on the `log` channel.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn default(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        let formatted = customize(text, options.cloned().unwrap_or_default())?;
        self.emit(text, &formatted, LogCategory::Normal)
    }

    /// Logs `text` with a bare color or full options.
    ///
    /// The category comes from the options, defaulting to
    /// [`LogCategory::Normal`].
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn custom(&self, text: &str, styling: impl Into<Styling>) -> Result<()> {
        let styling = styling.into();
        let category = styling.category().unwrap_or_default();
        let formatted = customize(text, styling)?;
        self.emit(text, &formatted, category)
    }

    /// Logs in the info color on the `info` channel.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn info(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        self.with_preset(text, options, ColorPreset::Info, LogCategory::Info)
    }

    /// Logs in the success color on the `log` channel.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn success(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        self.with_preset(text, options, ColorPreset::Success, LogCategory::Normal)
    }

    /// Logs in the warning color on the `warn` channel.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn warning(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        self.with_preset(text, options, ColorPreset::Warning, LogCategory::Warning)
    }

    /// Logs in the error color on the `error` channel.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn error(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        self.with_preset(text, options, ColorPreset::Error, LogCategory::Error)
    }

    /// Logs in the debug color on the `debug` channel.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn debug(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        self.with_preset(text, options, ColorPreset::Debug, LogCategory::Debug)
    }

    /// Logs in one random truecolor.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn random(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        let base = StyleOptions::new().with_color(ColorValue::from(random_rgb()));
        self.emit_merged(text, base, options, LogCategory::Normal)
    }

    /// Logs in a random color with every attribute randomly on or off.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn full_random(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        let mut rng = rand::thread_rng();
        let mut base = StyleOptions::new().with_color(ColorValue::from(random_rgb()));
        for attribute in Attribute::ORDER {
            base.set_flag(attribute, rng.gen_bool(0.5));
        }
        self.emit_merged(text, base, options, LogCategory::Normal)
    }

    /// Colors each character with the next entry of [`ColorPreset::RAINBOW`].
    ///
    /// Without options only the closing reset is added; options are applied
    /// around the colored text as in [`custom`](Self::custom).
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn rainbow(&self, text: &str, options: Option<&StyleOptions>) -> Result<()> {
        let colored = rainbow(text);
        let formatted = match options {
            Some(options) => customize(&colored, options)?,
            None => customize(&colored, ColorValue::Ansi(String::new()))?,
        };
        self.emit(text, &formatted, LogCategory::Normal)
    }

    /// Writes several differently styled segments as one `log` line.
    ///
    /// # Errors
    ///
    /// Returns color resolution and file sink errors.
    pub fn write(&self, default_style: &StyleOptions, entries: &[WriteEntry]) -> Result<()> {
        let mut formatted = String::new();
        let mut original = String::new();
        for entry in entries {
            formatted.push_str(&customize(&entry.text, entry.effective(default_style))?);
            original.push_str(&entry.text);
        }
        self.emit(&original, &formatted, LogCategory::Normal)
    }

    fn with_preset(
        &self,
        text: &str,
        options: Option<&StyleOptions>,
        color: ColorPreset,
        category: LogCategory,
    ) -> Result<()> {
        self.emit_merged(text, StyleOptions::new().with_color(color), options, category)
    }

    fn emit_merged(
        &self,
        text: &str,
        base: StyleOptions,
        options: Option<&StyleOptions>,
        category: LogCategory,
    ) -> Result<()> {
        let mut merged = match options {
            Some(overrides) => base.merge(overrides),
            None => base,
        };
        merged.category = Some(category);
        let formatted = customize(text, merged)?;
        self.emit(text, &formatted, category)
    }
}

/// Interleaves [`ColorPreset::RAINBOW`] escapes with the characters of `text`.
pub fn rainbow(text: &str) -> String {
    let palette = ColorPreset::RAINBOW;
    text.chars()
        .enumerate()
        .map(|(i, c)| format!("{}{}", palette[i % palette.len()].escape(), c))
        .collect()
}

/// Builder for [`Logchu`].
#[derive(Default)]
pub struct LogchuBuilder {
    config: Config,
    source: Option<ConfigSource>,
    policy: Option<ReloadPolicy>,
    console: Option<Arc<dyn Console>>,
    watcher: Option<Arc<Watcher>>,
    hooks: Vec<(String, PresetHook)>,
}

impl LogchuBuilder {
    /// Uses an in-memory configuration (the default is empty).
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self.source = None;
        self
    }

    /// Loads configuration from a JSON or YAML file.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(ConfigSource::File(path.into()));
        self
    }

    /// Loads whichever `logchu.config.*` file exists in `dir`.
    pub fn discover(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = Some(ConfigSource::Discover(dir.into()));
        self
    }

    /// Overrides the reload policy. File-backed configuration defaults to
    /// [`ReloadPolicy::OnResolve`]; in-memory configuration never reloads.
    pub fn reload_policy(mut self, policy: ReloadPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    pub fn watcher(mut self, watcher: Arc<Watcher>) -> Self {
        self.watcher = Some(watcher);
        self
    }

    /// Attaches a hook to the configured custom logger `logger_id`.
    pub fn hook(
        mut self,
        logger_id: impl Into<String>,
        hook: impl Fn(&HookRecord) + Send + Sync + 'static,
    ) -> Self {
        self.hooks.push((logger_id.into(), PresetHook::new(hook)));
        self
    }

    /// Builds the logger, loading file-backed configuration once.
    ///
    /// # Errors
    ///
    /// Returns the configuration load error.
    pub fn build(self) -> Result<Logchu> {
        let handle = match self.source {
            None => ConfigHandle::new(self.config),
            Some(source) => {
                ConfigHandle::load(source, self.policy.unwrap_or(ReloadPolicy::OnResolve))?
            }
        };

        let watcher = self.watcher;
        let hooks = self.hooks;
        if watcher.is_some() || !hooks.is_empty() {
            handle.update(|mut config| {
                if watcher.is_some() {
                    config.watcher = watcher;
                }
                config.hooks.extend(hooks);
                config
            });
        }

        let console = self.console.unwrap_or_else(|| Arc::new(TermConsole));
        Ok(Logchu::from_parts(handle, console))
    }
}

impl std::fmt::Debug for LogchuBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogchuBuilder")
            .field("source", &self.source)
            .field("policy", &self.policy)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
