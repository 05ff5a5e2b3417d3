use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A single cancellable delayed task. Scheduling again replaces the pending one.
pub struct Debouncer {
    handle: Handle,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            pending: None,
        }
    }

    /// Runs `task` once `delay` has passed, unless rescheduled or cancelled first.
    /// Returns whether a still-pending task was superseded.
    pub fn schedule<F>(&mut self, delay: Duration, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let superseded = self.cancel();
        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
        superseded
    }

    /// Returns whether a pending task was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) if !pending.is_finished() => {
                pending.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
