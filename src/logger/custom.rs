//! Loggers built from named presets.

use std::collections::BTreeMap;

use chrono::Utc;

use super::builtin::Logchu;
use crate::error::{Error, Result};
use crate::preset::{HookRecord, LoggerPresets, PresetHook};
use crate::style::StyleOptions;

/// A logger whose methods are the named presets of one configured logger.
///
/// Invoking a preset runs the logger's hook (if any) and then, unless the
/// default emission is overwritten, logs through [`Logchu::custom`] with the
/// stored preset merged with the call's overrides.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use logchu::{ColorPreset, Logchu, LoggerPresets, MemoryConsole, StyleOptions};
///
/// let console = Arc::new(MemoryConsole::new());
/// let log = Logchu::builder().console(console.clone()).build().unwrap();
///
/// let app = log
///     .custom_logger(
///         LoggerPresets::new("app")
///             .add("success", StyleOptions::new().with_color(ColorPreset::LightGreen).bold()),
///     )
///     .unwrap();
/// app.invoke("success", "deployed", None).unwrap();
/// assert!(app.invoke("missing", "x", None).is_err());
/// assert_eq!(console.lines().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CustomLogger {
    logger: Logchu,
    id: String,
    presets: BTreeMap<String, StyleOptions>,
    hook: Option<PresetHook>,
    overwrite_default_emission: bool,
}

impl CustomLogger {
    pub(crate) fn build(logger: Logchu, presets: LoggerPresets, overwrite_default_emission: bool) -> Self {
        Self {
            logger,
            id: presets.id,
            presets: presets.presets,
            hook: presets.hook,
            overwrite_default_emission,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(|s| s.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Whether invocations skip the default emission.
    pub fn overwrites_default_emission(&self) -> bool {
        self.overwrite_default_emission
    }

    /// A callable handle for one preset.
    pub fn preset(&self, name: &str) -> Option<PresetHandle<'_>> {
        let (name, options) = self.presets.get_key_value(name)?;
        Some(PresetHandle {
            logger: self,
            name,
            options,
        })
    }

    /// Invokes preset `name` with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] if the logger has no such preset, or
    /// any error of [`Logchu::custom`].
    pub fn invoke(&self, name: &str, text: &str, overrides: Option<&StyleOptions>) -> Result<()> {
        let options = self.presets.get(name).ok_or_else(|| Error::UnknownPreset {
            logger: self.id.clone(),
            name: name.to_string(),
        })?;
        self.run(name, options, text, overrides)
    }

    fn run(
        &self,
        name: &str,
        options: &StyleOptions,
        text: &str,
        overrides: Option<&StyleOptions>,
    ) -> Result<()> {
        if let Some(hook) = &self.hook {
            hook.call(&HookRecord {
                text: text.to_string(),
                overrides: overrides.cloned(),
                timestamp: Utc::now(),
                preset: name.to_string(),
            });
        }

        if self.overwrite_default_emission {
            return Ok(());
        }

        let merged = match overrides {
            Some(overrides) => options.merge(overrides),
            None => options.clone(),
        };
        self.logger.custom(text, merged)
    }
}

/// One preset of a [`CustomLogger`], ready to log.
#[derive(Debug, Clone, Copy)]
pub struct PresetHandle<'a> {
    logger: &'a CustomLogger,
    name: &'a str,
    options: &'a StyleOptions,
}

impl PresetHandle<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    /// The stored style of this preset.
    pub fn options(&self) -> &StyleOptions {
        self.options
    }

    /// # Errors
    ///
    /// Returns any error of [`Logchu::custom`].
    pub fn log(&self, text: &str) -> Result<()> {
        self.logger.run(self.name, self.options, text, None)
    }

    /// Logs with per-call overrides merged over the stored preset.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Logchu::custom`].
    pub fn log_with(&self, text: &str, overrides: &StyleOptions) -> Result<()> {
        self.logger.run(self.name, self.options, text, Some(overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Channel, LogCategory};
    use crate::color::{ColorPreset, RESET};
    use crate::config::Config;
    use crate::sink::MemoryConsole;
    use std::sync::{Arc, Mutex};

    fn capture(config: Config) -> (Logchu, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let log = Logchu::builder()
            .config(config)
            .console(console.clone())
            .build()
            .unwrap();
        (log, console)
    }

    fn app_presets() -> LoggerPresets {
        LoggerPresets::new("app")
            .add(
                "info",
                StyleOptions::new()
                    .with_color(ColorPreset::BackgroundBlue)
                    .italic(),
            )
            .add(
                "warn",
                StyleOptions::new()
                    .with_color(ColorPreset::Warning)
                    .with_category(LogCategory::Warning),
            )
    }

    #[test]
    fn test_invoke_emits_stored_style() {
        let (log, console) = capture(Config::new());
        let app = log.custom_logger(app_presets()).unwrap();

        app.invoke("info", "hello", None).unwrap();

        assert_eq!(
            console.lines(),
            vec![(
                Channel::Log,
                format!("{}\x1b[3mhello{RESET}", ColorPreset::BackgroundBlue)
            )]
        );
    }

    #[test]
    fn test_stored_category_selects_channel() {
        let (log, console) = capture(Config::new());
        log.custom_logger(app_presets())
            .unwrap()
            .invoke("warn", "careful", None)
            .unwrap();
        assert_eq!(console.last().unwrap().0, Channel::Warn);
    }

    #[test]
    fn test_overrides_win_without_mutating_preset() {
        let (log, console) = capture(Config::new());
        let app = log.custom_logger(app_presets()).unwrap();
        let overrides = StyleOptions {
            italic: Some(false),
            ..StyleOptions::new().bold()
        };

        app.invoke("info", "a", Some(&overrides)).unwrap();
        app.invoke("info", "b", None).unwrap();

        let lines = console.channel_lines(Channel::Log);
        assert_eq!(lines[0], format!("{}\x1b[1ma{RESET}", ColorPreset::BackgroundBlue));
        assert_eq!(lines[1], format!("{}\x1b[3mb{RESET}", ColorPreset::BackgroundBlue));
    }

    #[test]
    fn test_unknown_preset() {
        let (log, console) = capture(Config::new());
        let app = log.custom_logger(app_presets()).unwrap();

        let result = app.invoke("nope", "x", None);
        assert!(matches!(
            result,
            Err(Error::UnknownPreset { logger, name }) if logger == "app" && name == "nope"
        ));
        assert!(app.preset("nope").is_none());
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_hook_runs_before_emission() {
        let (log, console) = capture(Config::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observed = Arc::clone(&console);
        let app = log.custom_logger(app_presets().with_hook(move |record| {
            sink.lock()
                .unwrap()
                .push((record.preset.clone(), record.text.clone(), observed.lines().len()));
        }))
        .unwrap();

        app.preset("info").unwrap().log("hi").unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![("info".to_string(), "hi".to_string(), 0)]);
        assert_eq!(console.lines().len(), 1);
    }

    #[test]
    fn test_overwrite_default_emission_only_runs_hook() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let config = Config::new()
            .with_logger("quiet", [("info", StyleOptions::new().bold())])
            .with_hook("quiet", move |_| *counter.lock().unwrap() += 1);
        let (log, console) = capture(config);

        let quiet = log.use_logger_with("quiet", true).unwrap();
        assert!(quiet.overwrites_default_emission());
        quiet.invoke("info", "x", None).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_hook_receives_overrides() {
        let (log, _console) = capture(Config::new());
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let app = log.custom_logger(app_presets().with_hook(move |record| {
            *sink.lock().unwrap() = record.overrides.clone();
        }))
        .unwrap();

        let overrides = StyleOptions::new().underline();
        app.preset("info").unwrap().log_with("x", &overrides).unwrap();

        assert_eq!(*seen.lock().unwrap(), Some(overrides));
    }

    #[test]
    fn test_code_presets_resolve_custom_colors() {
        let config = Config::new().with_color_preset("brand", "#f44747");
        let (log, console) = capture(config);

        let app = log
            .custom_logger(
                LoggerPresets::new("app").add("p", StyleOptions::new().with_color("$custom:brand")),
            )
            .unwrap();
        app.invoke("p", "x", None).unwrap();

        assert_eq!(console.last().unwrap().1, format!("\x1b[38;2;244;71;71mx{RESET}"));
    }

    #[test]
    fn test_code_presets_dangling_reference() {
        let (log, _console) = capture(Config::new());
        let result = log.custom_logger(
            LoggerPresets::new("app").add("p", StyleOptions::new().with_color("$custom:brand")),
        );
        assert!(matches!(result, Err(Error::UnknownColorPreset { id }) if id == "brand"));
    }

    #[test]
    fn test_names_sorted() {
        let (log, _console) = capture(Config::new());
        let app = log.custom_logger(app_presets()).unwrap();
        assert_eq!(app.id(), "app");
        assert_eq!(app.names().collect::<Vec<_>>(), vec!["info", "warn"]);
        assert!(app.has("warn"));
    }
}
