//! Routes one formatted emission to console, listener and file sinks.

use std::sync::Arc;

use super::console::Console;
use super::file::FileSink;
use super::record::LogRecord;
use crate::category::{Channel, LogCategory};
use crate::config::Config;
use crate::error::Result;
use crate::LOG_TARGET;

/// Fans a formatted line out to every configured sink.
///
/// Order per emission: console channel, then listener events (`log`, then the
/// category's channel), then the file sink. A file error surfaces after the
/// console line has already been written.
#[derive(Clone)]
pub struct Dispatcher {
    console: Arc<dyn Console>,
}

impl Dispatcher {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    /// Emits `formatted` on the console and `original` to the other sinks.
    ///
    /// Console write failures are reported through the `log` facade and
    /// otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileSink`](crate::Error::FileSink) if the configured
    /// log file cannot be written.
    pub fn emit(
        &self,
        config: &Config,
        original: &str,
        formatted: &str,
        category: LogCategory,
    ) -> Result<()> {
        let channel = category.channel();
        if let Err(err) = self.console.write_line(channel, formatted) {
            log::warn!(target: LOG_TARGET, "failed to write to console channel {}: {}", channel, err);
        }

        let record = LogRecord::now(original, category);

        if let Some(watcher) = &config.watcher {
            watcher.emit(Channel::Log, &record);
            watcher.emit(channel, &record);
        }

        if let Some(path) = &config.log_file {
            FileSink::new(path).append(&record)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
