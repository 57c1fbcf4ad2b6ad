//! Side-effect hooks attached to custom loggers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::style::StyleOptions;

/// What a custom logger's hook receives on every invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct HookRecord {
    /// The unformatted text passed to the preset.
    pub text: String,
    /// The per-call overrides, if any.
    pub overrides: Option<StyleOptions>,
    pub timestamp: DateTime<Utc>,
    /// Name of the preset that was invoked.
    pub preset: String,
}

/// A callback run before a custom logger emits.
///
/// Hooks cannot come from configuration files; attach them in code with
/// [`Config::with_hook`](crate::Config::with_hook) or
/// [`LoggerPresets::with_hook`](crate::LoggerPresets::with_hook).
#[derive(Clone)]
pub struct PresetHook(Arc<dyn Fn(&HookRecord) + Send + Sync>);

impl PresetHook {
    pub fn new(hook: impl Fn(&HookRecord) + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    pub fn call(&self, record: &HookRecord) {
        (self.0)(record)
    }
}

impl std::fmt::Debug for PresetHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PresetHook(..)")
    }
}
