//! Resolution of configured logger presets and color presets.
//!
//! Two namespaces live in the configuration:
//!
//! - **color presets**: id → [`ColorValue`]
//! - **logger presets**: id → (preset name → [`StyleOptions`])
//!
//! A logger preset may point at a color preset with `$custom:<name>`. Those
//! references are rewritten eagerly across the whole registry whenever a
//! logger is resolved, so one dangling reference anywhere fails every
//! resolution until the configuration is fixed.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::hook::{HookRecord, PresetHook};
use crate::color::ColorValue;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::style::StyleOptions;

/// The named style presets of one custom logger, plus its optional hook.
///
/// # Example
///
/// ```rust
/// use logchu::{ColorPreset, LoggerPresets, StyleOptions};
///
/// let presets = LoggerPresets::new("app")
///     .add("info", StyleOptions::new().with_color(ColorPreset::BackgroundBlue).italic())
///     .add("success", StyleOptions::new().with_color(ColorPreset::LightGreen).bold());
/// assert!(presets.get("info").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerPresets {
    pub(crate) id: String,
    pub(crate) presets: BTreeMap<String, StyleOptions>,
    pub(crate) hook: Option<PresetHook>,
}

impl LoggerPresets {
    /// Creates an empty preset set for the logger `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Adds a named preset, returning the updated set for chaining.
    pub fn add(mut self, name: impl Into<String>, options: StyleOptions) -> Self {
        self.presets.insert(name.into(), options);
        self
    }

    /// Attaches a hook run before every emission of this logger.
    pub fn with_hook(mut self, hook: impl Fn(&HookRecord) + Send + Sync + 'static) -> Self {
        self.hook = Some(PresetHook::new(hook));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, name: &str) -> Option<&StyleOptions> {
        self.presets.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(|s| s.as_str())
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Read-only view over one configuration snapshot.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    config: Arc<Config>,
}

impl PresetRegistry {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Resolves the presets of custom logger `id`.
    ///
    /// Every `$custom:<name>` color in every registered logger is replaced by
    /// the referenced color preset (following preset-to-preset references)
    /// before the set for `id` is returned. The hook attached to `id`, if
    /// any, travels with the result.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownLogger`] if `id` is not registered.
    /// - [`Error::UnknownColorPreset`] if any reference names a missing preset.
    /// - [`Error::ColorPresetCycle`] if color presets reference each other in a loop.
    pub fn resolve_logger(&self, id: &str) -> Result<LoggerPresets> {
        if !self.config.custom_loggers.contains_key(id) {
            return Err(Error::UnknownLogger { id: id.to_string() });
        }

        let mut loggers = self.config.custom_loggers.clone();
        for presets in loggers.values_mut() {
            self.rewrite_references(presets)?;
        }

        let presets = loggers
            .remove(id)
            .ok_or_else(|| Error::UnknownLogger { id: id.to_string() })?;

        Ok(LoggerPresets {
            id: id.to_string(),
            presets,
            hook: self.config.hooks.get(id).cloned(),
        })
    }

    /// Replaces every `$custom:<name>` color in presets built in code.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownColorPreset`] if a reference names a missing preset.
    /// - [`Error::ColorPresetCycle`] if color presets reference each other in a loop.
    pub fn resolve_presets(&self, mut presets: LoggerPresets) -> Result<LoggerPresets> {
        self.rewrite_references(&mut presets.presets)?;
        Ok(presets)
    }

    /// Returns the color stored under `id`, unresolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColorPreset`] if `id` is not registered.
    pub fn resolve_color_preset(&self, id: &str) -> Result<ColorValue> {
        self.lookup_color(id).cloned()
    }

    pub fn logger_ids(&self) -> impl Iterator<Item = &str> {
        self.config.custom_loggers.keys().map(|s| s.as_str())
    }

    pub fn color_preset_ids(&self) -> impl Iterator<Item = &str> {
        self.config.custom_color_presets.keys().map(|s| s.as_str())
    }

    fn lookup_color(&self, id: &str) -> Result<&ColorValue> {
        self.config
            .custom_color_presets
            .get(id)
            .ok_or_else(|| Error::UnknownColorPreset { id: id.to_string() })
    }

    fn rewrite_references(&self, presets: &mut BTreeMap<String, StyleOptions>) -> Result<()> {
        for options in presets.values_mut() {
            let reference = options
                .color
                .as_ref()
                .and_then(ColorValue::preset_ref)
                .map(str::to_owned);
            if let Some(name) = reference {
                options.color = Some(self.follow_color_preset(&name)?);
            }
        }
        Ok(())
    }

    fn follow_color_preset(&self, id: &str) -> Result<ColorValue> {
        let mut path = vec![id.to_string()];
        let mut current = self.lookup_color(id)?;

        while let ColorValue::PresetRef(next) = current {
            let seen = path.contains(next);
            path.push(next.clone());
            if seen {
                return Err(Error::ColorPresetCycle { path });
            }
            current = self.lookup_color(next)?;
        }

        Ok(current.clone())
    }
}
