//! Explicit scheduled tasks with cancellable handles.
//!
//! Every timer in the crate (alert auto-expiry, the simulated registration
//! delay, the particle interval) runs as a task whose handle is retained
//! by its owner, so a new validation pass or a teardown can cancel pending
//! work instead of letting fire-and-forget callbacks race it.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to a scheduled task.
///
/// Cancelling is idempotent; cancelling a finished task is a no-op.
#[derive(Debug)]
pub struct TaskHandle {
    inner: JoinHandle<()>,
}

impl TaskHandle {
    /// Cancel the task. Pending sleeps are interrupted; a job body already
    /// past its last await point runs to completion.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// True once the task has run (or been cancelled).
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

/// Run `job` once after `delay`.
///
/// Must be called within a Tokio runtime.
pub fn once<F>(delay: Duration, job: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    TaskHandle {
        inner: tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job();
        }),
    }
}

/// Run `job` every `period`, first firing one period from now, until the
/// handle is cancelled.
///
/// Must be called within a Tokio runtime.
pub fn every<F>(period: Duration, job: F) -> TaskHandle
where
    F: FnMut() + Send + 'static,
{
    TaskHandle {
        inner: tokio::spawn(async move {
            let mut job = job;
            let mut ticker = tokio::time::interval(period);
            // the first tick completes immediately; consume it so the job
            // fires one period from now, matching interval-timer semantics
            ticker.tick().await;
            loop {
                ticker.tick().await;
                job();
            }
        }),
    }
}
