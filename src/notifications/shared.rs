// SPDX-License-Identifier: MPL-2.0
//! Thread-safe handle around a [`Manager`] plus a tokio timer driver.
//!
//! All mutations go through a single mutex. The driver task polls the manager,
//! sleeps until its next deadline, and is woken early whenever a call through
//! the handle may have changed the schedule.

use super::events::SubscriptionId;
use super::manager::Manager;
use super::notification::ToastId;
use super::options::{RawOptions, ToastOptions};
use super::Event;
use crate::error::{Error, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::{oneshot, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Cloneable, thread-safe access to a notification manager.
#[derive(Debug)]
pub struct SharedManager<T> {
    inner: Arc<Mutex<Manager<T>>>,
    wake: Arc<Notify>,
}

impl<T> Clone for SharedManager<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            wake: Arc::clone(&self.wake),
        }
    }
}

impl<T> SharedManager<T> {
    pub fn new(manager: Manager<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
            wake: Arc::new(Notify::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Manager<T>>> {
        Ok(self.inner.lock()?)
    }

    /// Runs `f` with exclusive access, then wakes the driver.
    pub fn with<R>(&self, f: impl FnOnce(&mut Manager<T>) -> R) -> Result<R> {
        let result = f(&mut *self.lock()?);
        self.wake.notify_one();
        Ok(result)
    }

    pub fn show(&self, content: T, options: ToastOptions) -> Result<ToastId> {
        self.with(|manager| manager.show(content, options))
    }

    pub fn try_show(&self, content: T, raw: RawOptions) -> Result<ToastId> {
        self.with(|manager| manager.try_show(content, raw))?
            .map_err(Error::from)
    }

    pub fn remove(&self, id: ToastId) -> Result<bool> {
        self.with(|manager| manager.remove(id))
    }

    pub fn pause(&self, id: ToastId) -> Result<bool> {
        self.with(|manager| manager.pause(id))
    }

    pub fn resume(&self, id: ToastId) -> Result<bool> {
        self.with(|manager| manager.resume(id))
    }

    /// Registers an event callback.
    ///
    /// The callback runs while the manager lock is held, so it must not call
    /// back into this handle.
    pub fn subscribe(
        &self,
        callback: impl FnMut(&Event) + Send + 'static,
    ) -> Result<SubscriptionId> {
        Ok(self.lock()?.subscribe(callback))
    }

    /// Number of tracked notifications.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}

impl<T: Send + 'static> SharedManager<T> {
    /// Spawns the timer driver on the current tokio runtime.
    pub fn spawn_driver(&self) -> DriverHandle {
        let shared = self.clone();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            debug!("toast driver started");
            loop {
                let wait = match shared.lock() {
                    Ok(mut manager) => {
                        manager.poll();
                        manager
                            .next_deadline()
                            .map(|deadline| deadline.saturating_sub(manager.now()))
                    }
                    Err(err) => {
                        warn!(%err, "toast driver stopping");
                        break;
                    }
                };

                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    () = shared.wake.notified() => {}
                    () = sleep_until_due(wait) => {}
                }
            }
            debug!("toast driver stopped");
        });

        DriverHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}

async fn sleep_until_due(wait: Option<Duration>) {
    match wait {
        Some(wait) => tokio::time::sleep(wait).await,
        None => std::future::pending().await,
    }
}

/// Handle to a running driver task. Dropping it also stops the driver.
#[derive(Debug)]
pub struct DriverHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl DriverHandle {
    /// Stops the driver and waits for it to exit.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(err) = (&mut self.task).await {
            warn!(%err, "toast driver task failed");
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
