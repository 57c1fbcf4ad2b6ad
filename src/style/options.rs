//! Style options and the style inputs accepted by [`customize`](super::customize).

use serde::Deserialize;

use crate::category::LogCategory;
use crate::color::{ColorPreset, ColorValue};

/// A text attribute applied after the color escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Underline,
    Inverse,
    Strikethrough,
    Hidden,
    Italic,
}

impl Attribute {
    /// Emission order of attribute escapes.
    pub const ORDER: [Attribute; 6] = [
        Attribute::Bold,
        Attribute::Underline,
        Attribute::Inverse,
        Attribute::Strikethrough,
        Attribute::Hidden,
        Attribute::Italic,
    ];

    #[rustfmt::skip]
    pub fn escape(self) -> &'static str {
        match self {
            Attribute::Bold          => "\x1b[1m",
            Attribute::Underline     => "\x1b[4m",
            Attribute::Inverse       => "\x1b[7m",
            Attribute::Strikethrough => "\x1b[9m",
            Attribute::Hidden        => "\x1b[8m",
            Attribute::Italic        => "\x1b[3m",
        }
    }
}

/// Independent style attributes plus an optional color and log category.
///
/// Every field is optional; `None` means "not applied", and only `Some(true)`
/// emits an attribute escape.
///
/// # Example
///
/// ```rust
/// use logchu::{ColorPreset, LogCategory, StyleOptions};
///
/// let options = StyleOptions::new()
///     .with_color(ColorPreset::Debug)
///     .italic()
///     .with_category(LogCategory::Debug);
/// assert_eq!(options.italic, Some(true));
/// assert_eq!(options.bold, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    pub bold: Option<bool>,
    pub underline: Option<bool>,
    pub inverse: Option<bool>,
    pub strikethrough: Option<bool>,
    pub hidden: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<ColorValue>,
    #[serde(alias = "type")]
    pub category: Option<LogCategory>,
}

impl StyleOptions {
    /// Creates options with nothing applied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<ColorValue>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_category(mut self, category: LogCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn inverse(mut self) -> Self {
        self.inverse = Some(true);
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = Some(true);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Returns the flag stored for an attribute.
    pub fn flag(&self, attribute: Attribute) -> Option<bool> {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Underline => self.underline,
            Attribute::Inverse => self.inverse,
            Attribute::Strikethrough => self.strikethrough,
            Attribute::Hidden => self.hidden,
            Attribute::Italic => self.italic,
        }
    }

    /// Sets the flag for an attribute.
    pub fn set_flag(&mut self, attribute: Attribute, value: bool) {
        let slot = match attribute {
            Attribute::Bold => &mut self.bold,
            Attribute::Underline => &mut self.underline,
            Attribute::Inverse => &mut self.inverse,
            Attribute::Strikethrough => &mut self.strikethrough,
            Attribute::Hidden => &mut self.hidden,
            Attribute::Italic => &mut self.italic,
        };
        *slot = Some(value);
    }

    /// Iterates the enabled attributes in emission order.
    pub fn enabled_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ORDER
            .into_iter()
            .filter(|attribute| self.flag(*attribute) == Some(true))
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(&self, overrides: &StyleOptions) -> StyleOptions {
        StyleOptions {
            bold: overrides.bold.or(self.bold),
            underline: overrides.underline.or(self.underline),
            inverse: overrides.inverse.or(self.inverse),
            strikethrough: overrides.strikethrough.or(self.strikethrough),
            hidden: overrides.hidden.or(self.hidden),
            italic: overrides.italic.or(self.italic),
            color: overrides.color.clone().or_else(|| self.color.clone()),
            category: overrides.category.or(self.category),
        }
    }
}

/// Input accepted by [`customize`](super::customize): a bare color or full options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Styling {
    Color(ColorValue),
    Options(StyleOptions),
}

impl Styling {
    /// The category requested by this styling, if it carries options.
    pub fn category(&self) -> Option<LogCategory> {
        match self {
            Styling::Color(_) => None,
            Styling::Options(options) => options.category,
        }
    }
}

impl From<ColorValue> for Styling {
    fn from(color: ColorValue) -> Self {
        Styling::Color(color)
    }
}

impl From<ColorPreset> for Styling {
    fn from(preset: ColorPreset) -> Self {
        Styling::Color(preset.into())
    }
}

impl From<&str> for Styling {
    fn from(color: &str) -> Self {
        Styling::Color(color.into())
    }
}

impl From<(u8, u8, u8)> for Styling {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Styling::Color(rgb.into())
    }
}

impl From<StyleOptions> for Styling {
    fn from(options: StyleOptions) -> Self {
        Styling::Options(options)
    }
}

impl From<&StyleOptions> for Styling {
    fn from(options: &StyleOptions) -> Self {
        Styling::Options(options.clone())
    }
}
