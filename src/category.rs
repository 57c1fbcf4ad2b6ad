//! Log categories and the console channels they map to.

use serde::{Deserialize, Serialize};

/// The semantic class of a log emission.
///
/// Each category maps to exactly one console [`Channel`]. Configuration may
/// name a category (`"warning"`) or give its index (`0` = normal through
/// `4` = debug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCategory")]
pub enum LogCategory {
    #[default]
    Normal,
    Info,
    Warning,
    Error,
    Debug,
}

impl LogCategory {
    /// Categories in index order.
    pub const ALL: [LogCategory; 5] = [
        LogCategory::Normal,
        LogCategory::Info,
        LogCategory::Warning,
        LogCategory::Error,
        LogCategory::Debug,
    ];

    /// Returns the console channel this category is written to.
    pub fn channel(self) -> Channel {
        match self {
            LogCategory::Normal => Channel::Log,
            LogCategory::Info => Channel::Info,
            LogCategory::Warning => Channel::Warn,
            LogCategory::Error => Channel::Error,
            LogCategory::Debug => Channel::Debug,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum NamedCategory {
    Normal,
    Info,
    Warning,
    Error,
    Debug,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Named(NamedCategory),
    Index(u64),
}

impl TryFrom<RawCategory> for LogCategory {
    type Error = String;

    fn try_from(raw: RawCategory) -> Result<Self, <LogCategory as TryFrom<RawCategory>>::Error> {
        match raw {
            RawCategory::Named(NamedCategory::Normal) => Ok(LogCategory::Normal),
            RawCategory::Named(NamedCategory::Info) => Ok(LogCategory::Info),
            RawCategory::Named(NamedCategory::Warning) => Ok(LogCategory::Warning),
            RawCategory::Named(NamedCategory::Error) => Ok(LogCategory::Error),
            RawCategory::Named(NamedCategory::Debug) => Ok(LogCategory::Debug),
            RawCategory::Index(index) => usize::try_from(index)
                .ok()
                .and_then(|i| LogCategory::ALL.get(i).copied())
                .ok_or_else(|| format!("log category index {} is out of range 0..=4", index)),
        }
    }
}

/// A named console output stream.
///
/// Channel names double as listener event names (see [`crate::Watcher`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Log,
    Info,
    Warn,
    Error,
    Debug,
}

impl Channel {
    /// All channels in declaration order.
    pub const ALL: [Channel; 5] = [
        Channel::Log,
        Channel::Info,
        Channel::Warn,
        Channel::Error,
        Channel::Debug,
    ];

    /// The lower-case channel name (`log`, `info`, `warn`, `error`, `debug`).
    pub fn name(self) -> &'static str {
        match self {
            Channel::Log => "log",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Debug => "debug",
        }
    }

    /// Whether the channel goes to stderr rather than stdout.
    pub fn is_stderr(self) -> bool {
        matches!(self, Channel::Warn | Channel::Error)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
