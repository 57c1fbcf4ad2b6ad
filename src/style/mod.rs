//! Style system: options records and the formatter that applies them.
//!
//! - [`StyleOptions`]: optional attributes, color and category
//! - [`Styling`]: a bare color or a full [`StyleOptions`]
//! - [`customize`]: renders text with a [`Styling`]

mod format;
mod options;

pub use format::customize;
pub use options::{Attribute, StyleOptions, Styling};
