//! Host memory-pressure notifications.
//!
//! The host (an OS hook, a signal, a test) calls
//! [`MemoryPressureNotifier::notify`]; every live subscriber's handler runs
//! on the notifying thread. Subscriptions are released on drop.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, info};

type Handler = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    handlers: Mutex<HashMap<u64, Handler>>,
    next_id: AtomicU64,
}

/// Source of memory-pressure signals.
#[derive(Clone, Default)]
pub struct MemoryPressureNotifier {
    registry: Arc<Registry>,
}

impl MemoryPressureNotifier {
    /// Creates a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` until the returned subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, handler: F) -> MemoryPressureSubscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.handlers.lock().insert(id, Arc::new(handler));
        debug!(subscription = id, "Memory pressure subscriber added");
        MemoryPressureSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Signals memory pressure to every subscriber.
    /// Returns the number of handlers invoked.
    pub fn notify(&self) -> usize {
        // Snapshot so handlers run without the registry lock held.
        let handlers: Vec<Handler> = self.registry.handlers.lock().values().cloned().collect();
        info!(subscribers = handlers.len(), "Memory pressure signalled");
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.handlers.lock().len()
    }

    /// Forwards `SIGUSR1` to [`notify`](Self::notify) until the runtime shuts down.
    ///
    /// # Errors
    /// Returns error if the signal handler cannot be installed.
    #[cfg(unix)]
    pub fn forward_sigusr1(&self) -> std::io::Result<tokio::task::JoinHandle<()>> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut stream = signal(SignalKind::user_defined1())?;
        let notifier = self.clone();
        Ok(tokio::spawn(async move {
            while stream.recv().await.is_some() {
                notifier.notify();
            }
        }))
    }
}

impl std::fmt::Debug for MemoryPressureNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPressureNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Scoped registration with a [`MemoryPressureNotifier`].
#[derive(Debug)]
pub struct MemoryPressureSubscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for MemoryPressureSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.handlers.lock().remove(&self.id);
            debug!(subscription = self.id, "Memory pressure subscriber removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn test_notify_runs_handlers() {
        let notifier = MemoryPressureNotifier::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let _sub = notifier.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(notifier.notify(), 1);
        assert_eq!(notifier.notify(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let notifier = MemoryPressureNotifier::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let sub = notifier.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(notifier.subscriber_count(), 1);

        drop(sub);
        assert_eq!(notifier.subscriber_count(), 0);
        assert_eq!(notifier.notify(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscription_outlives_notifier() {
        let notifier = MemoryPressureNotifier::new();
        let sub = notifier.subscribe(|| {});
        drop(notifier);
        drop(sub);
    }

    #[test]
    fn test_handler_may_unsubscribe_others() {
        let notifier = MemoryPressureNotifier::new();
        let slot: Arc<Mutex<Option<MemoryPressureSubscription>>> = Arc::new(Mutex::new(None));

        *slot.lock() = Some(notifier.subscribe(|| {}));
        let held = slot.clone();
        let _first = notifier.subscribe(move || {
            held.lock().take();
        });

        notifier.notify();
        assert_eq!(notifier.subscriber_count(), 1);
    }
}
