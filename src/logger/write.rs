//! Segments of a multi-style line for [`Logchu::write`](crate::Logchu::write).

use crate::style::StyleOptions;

/// One styled segment of an advanced log line.
///
/// # Example
///
/// ```rust
/// use logchu::{ColorPreset, StyleOptions, WriteEntry};
///
/// let entries = [
///     WriteEntry::new("First one was default config ")
///         .styled(StyleOptions::new().with_color(ColorPreset::LightGreen)),
///     WriteEntry::new("this is ").use_default(),
///     WriteEntry::new("awesome!")
///         .styled(StyleOptions::new().with_color(ColorPreset::LightCyan).bold()),
/// ];
/// assert!(entries[1].uses_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteEntry {
    pub text: String,
    /// Apply the shared default style and ignore `options`.
    pub use_default: bool,
    pub options: StyleOptions,
}

impl WriteEntry {
    /// An unstyled segment: options default to "nothing applied".
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn styled(mut self, options: StyleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn use_default(mut self) -> Self {
        self.use_default = true;
        self
    }

    pub fn uses_default(&self) -> bool {
        self.use_default
    }

    /// The style this segment renders with.
    pub(crate) fn effective<'a>(&'a self, default_style: &'a StyleOptions) -> &'a StyleOptions {
        if self.use_default {
            default_style
        } else {
            &self.options
        }
    }
}
