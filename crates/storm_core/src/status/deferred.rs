//! Deferred one-shot status refresh with an owned cancellation handle.
//!
//! The presentation layer refreshes its status text a few seconds after
//! the (already synchronous) pipeline finishes. A bare timer would keep a
//! dangling callback if the UI goes away first, so the task is owned: the
//! handle cancels on `cancel()` or drop.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

struct Shared {
    cancelled: Mutex<bool>,
    signal: Condvar,
}

/// Handle to a scheduled one-shot callback.
pub struct DeferredStatus {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl DeferredStatus {
    /// The fixed delay used for the post-setup status refresh.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    /// Run `callback` once after `delay`, unless cancelled first.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let shared = Arc::new(Shared {
            cancelled: Mutex::new(false),
            signal: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("deferred-status".to_string())
            .spawn(move || {
                let deadline = Instant::now() + delay;
                let mut cancelled = worker_shared.cancelled.lock();
                while !*cancelled {
                    // Loop guards against spurious wakeups.
                    if worker_shared
                        .signal
                        .wait_until(&mut cancelled, deadline)
                        .timed_out()
                    {
                        break;
                    }
                }
                let fire = !*cancelled;
                drop(cancelled);
                if fire {
                    callback();
                }
            })
            .ok();

        Self { shared, worker }
    }

    /// Prevent the callback from firing. Safe to call more than once,
    /// including after the callback already ran.
    pub fn cancel(&mut self) {
        *self.shared.cancelled.lock() = true;
        self.shared.signal.notify_all();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for DeferredStatus {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn callback_fires_after_delay() {
        let (tx, rx) = mpsc::channel();
        let task = DeferredStatus::schedule(Duration::from_millis(10), move || {
            tx.send(()).unwrap();
        });

        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
        drop(task);
    }

    #[test]
    fn cancel_prevents_callback() {
        let (tx, rx) = mpsc::channel::<()>();
        let mut task = DeferredStatus::schedule(Duration::from_millis(100), move || {
            let _ = tx.send(());
        });
        task.cancel();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn drop_cancels_pending_callback() {
        let (tx, rx) = mpsc::channel::<()>();
        {
            let _task = DeferredStatus::schedule(Duration::from_millis(100), move || {
                let _ = tx.send(());
            });
        }

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn cancel_after_fire_is_harmless() {
        let (tx, rx) = mpsc::channel();
        let mut task = DeferredStatus::schedule(Duration::from_millis(5), move || {
            tx.send(()).unwrap();
        });
        rx.recv_timeout(Duration::from_secs(2)).unwrap();
        task.cancel();
    }
}
