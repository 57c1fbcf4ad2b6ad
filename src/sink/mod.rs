//! Output sinks and the dispatcher that feeds them.
//!
//! - [`Console`]: named console channels ([`TermConsole`], [`MemoryConsole`])
//! - [`Watcher`]: listener callbacks keyed by event
//! - [`FileSink`]: plain-text log file
//! - [`Dispatcher`]: routes one emission to all of the above

mod console;
mod dispatch;
mod file;
mod record;
mod watcher;

pub use console::{Console, MemoryConsole, TermConsole};
pub use dispatch::Dispatcher;
pub use file::FileSink;
pub use record::{LogRecord, FILE_TIMESTAMP_FORMAT};
pub use watcher::Watcher;
