use crate::error::LoadError;

/// Which loader entry point an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Refresh,
    LoadMore,
}

/// Change notification emitted by a loader after each state transition.
///
/// `Appended` carries the affected range so presentation can re-render just
/// the new rows instead of rebuilding the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// The accumulated list was cleared because a refresh started.
    Cleared,
    /// Rows landed at `start..start + count`.
    Appended {
        start: usize,
        count: usize,
        /// Accumulated count after the merge.
        shown: usize,
        /// Server-reported total, when known.
        total: Option<u64>,
        can_load_more: bool,
    },
    /// An operation failed. For `LoadMore` the accumulated rows are intact.
    Failed { kind: LoadKind, error: LoadError },
}

/// Observer half of the loader's notification interface.
pub trait ListEventSink: Send + Sync {
    fn emit(&self, event: ListEvent);
}

/// Sink that forwards events over a std channel, typically drained by the
/// thread that owns the screen.
pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<ListEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<ListEvent>) -> Self {
        Self { tx }
    }
}

impl ListEventSink for ChannelEventSink {
    fn emit(&self, event: ListEvent) {
        let _ = self.tx.send(event);
    }
}
