//! The per-emission record handed to listener and file sinks.

use chrono::{DateTime, Utc};

use crate::category::LogCategory;

/// Timestamp layout of file sink lines (RFC 1123, always GMT).
pub const FILE_TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// One emission: original unformatted text, category and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub text: String,
    pub category: LogCategory,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    pub fn now(text: impl Into<String>, category: LogCategory) -> Self {
        Self {
            text: text.into(),
            category,
            timestamp: Utc::now(),
        }
    }

    /// Renders the line appended to the log file, newline included.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use logchu::{LogCategory, LogRecord};
    ///
    /// let record = LogRecord {
    ///     text: "boom".into(),
    ///     category: LogCategory::Error,
    ///     timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 9, 15, 2).unwrap(),
    /// };
    /// assert_eq!(record.file_line(), "[Mon, 19 Oct 2026 09:15:02 GMT] ERROR > boom\n");
    /// ```
    pub fn file_line(&self) -> String {
        format!(
            "[{}] {} > {}\n",
            self.timestamp.format(FILE_TIMESTAMP_FORMAT),
            self.category.channel().name().to_uppercase(),
            self.text
        )
    }
}
