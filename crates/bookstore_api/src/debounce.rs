use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs at most one delayed task at a time.
///
/// Every `schedule` call aborts whatever was pending, so a burst of calls
/// results in exactly one execution once the burst pauses for `delay`.
/// Dropping the debouncer aborts the pending task too, which keeps a
/// half-typed search from firing after its screen is gone.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `task` to run after the configured delay, replacing any
    /// previously scheduled task. Must be called within a tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Abort the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a scheduled task has not finished or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
