//! Listener sink: callbacks subscribed to log events.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::record::LogRecord;
use crate::category::Channel;

type Listener = Arc<dyn Fn(&LogRecord) + Send + Sync>;

/// Subscribes callbacks to log events.
///
/// Event names are the console channel names: every emission fires
/// [`Channel::Log`] and then the channel of its category, so a
/// [`Normal`](crate::LogCategory::Normal) emission reaches `log` listeners
/// twice.
///
/// Listeners run synchronously on the emitting thread. A listener subscribed
/// from inside a callback takes effect from the next emission.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use logchu::{Channel, Config, Watcher};
///
/// let watcher = Arc::new(Watcher::new());
/// watcher.on(Channel::Error, |record| eprintln!("alert: {}", record.text));
/// let config = Config::new().with_watcher(watcher);
/// ```
#[derive(Default)]
pub struct Watcher {
    listeners: RwLock<BTreeMap<Channel, Vec<Listener>>>,
}

impl Watcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `listener` to `event`.
    pub fn on(
        &self,
        event: Channel,
        listener: impl Fn(&LogRecord) + Send + Sync + 'static,
    ) -> &Self {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event)
            .or_default()
            .push(Arc::new(listener));
        self
    }

    /// Calls every listener of `event` in subscription order.
    pub fn emit(&self, event: Channel, record: &LogRecord) {
        let subscribed: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event)
            .cloned()
            .unwrap_or_default();
        for listener in subscribed {
            listener(record);
        }
    }

    pub fn listener_count(&self, event: Channel) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event)
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: BTreeMap<_, _> = Channel::ALL
            .iter()
            .map(|channel| (channel.name(), self.listener_count(*channel)))
            .filter(|(_, count)| *count > 0)
            .collect();
        f.debug_struct("Watcher").field("listeners", &counts).finish()
    }
}
