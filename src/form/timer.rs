//! Status auto-reset timer

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Single-slot timer that clears a submission status after a delay.
///
/// Holds at most one pending task. Scheduling aborts the previous task
/// before storing the new one; dropping the timer aborts the pending task.
#[derive(Debug, Default)]
pub struct ResetTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the pending task. Returns whether one was still waiting.
    pub fn cancel(&self) -> bool {
        let handle = self.slot().take();
        match handle {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Cancelled pending status reset");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot().as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Run `on_fire` after `delay`, replacing any pending task.
    ///
    /// Returns `false` when no tokio runtime is available; the status then
    /// stays until the next submission or reset.
    pub fn schedule<F>(&self, delay: Duration, on_fire: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!("Status reset not scheduled, no async runtime: {err}");
                return false;
            }
        };

        let mut slot = self.slot();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        }));
        debug!("Status reset scheduled in {delay:?}");
        true
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
