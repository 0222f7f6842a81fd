//! Trailing-edge debouncer
//!
//! Each [`Debounced::call`] restarts a timer; the wrapped action runs once
//! the calls stop for the configured delay. There is no leading-edge run.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::utils::lock;

type Action = Arc<dyn Fn() + Send + Sync>;

/// A debounced wrapper around a synchronous action.
///
/// Aborting the pending timer never interrupts a run that has started:
/// the action is synchronous and runs to completion once the timer fires,
/// so anything it spawns (such as a network request) is out of reach.
pub struct Debounced {
    action: Action,
    delay: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debounced {
    pub fn new<F>(action: F, delay: Duration, runtime: Handle) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            runtime,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel the pending run, if any, and schedule a new one `delay` from now.
    pub fn call(&self) {
        let mut pending = lock(&self.pending);
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending run without scheduling another.
    pub fn cancel(&self) {
        if let Some(timer) = lock(&self.pending).take() {
            timer.abort();
        }
    }

    /// Whether a run is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        lock(&self.pending)
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for Debounced {
    fn drop(&mut self) {
        self.cancel();
    }
}
