//! Console channels.

use std::io;
use std::sync::{Mutex, PoisonError};

use console::Term;

use crate::category::Channel;

/// Destination for formatted console lines.
pub trait Console: Send + Sync {
    /// Writes one line to the given channel.
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()>;
}

/// Writes to the process terminal: `log`, `info` and `debug` go to stdout,
/// `warn` and `error` to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermConsole;

impl Console for TermConsole {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        let term = if channel.is_stderr() {
            Term::stderr()
        } else {
            Term::stdout()
        };
        term.write_line(line)
    }
}

/// Captures lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line with its channel.
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lock().clone()
    }

    /// Captured lines written to one channel.
    pub fn channel_lines(&self, channel: Channel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// The most recent line, if any.
    pub fn last(&self) -> Option<(Channel, String)> {
        self.lock().last().cloned()
    }

    /// Drains and returns everything captured so far.
    pub fn take(&self) -> Vec<(Channel, String)> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Channel, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        self.lock().push((channel, line.to_string()));
        Ok(())
    }
}
