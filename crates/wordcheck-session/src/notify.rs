// Dictionary change notification: a minimal callback registry the session
// wires to its cache invalidation

use std::sync::Arc;

use parking_lot::Mutex;

/// Identifies one subscription so it can be removed when a session closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn() + Send + Sync>;

struct NotifierInner {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Fans a zero-argument "dictionary data changed" signal out to
/// subscribers.
///
/// Listeners are cloned out of the registry lock before being invoked, so
/// delivering a notification never blocks (and is never blocked by) work a
/// listener triggers, such as an in-flight lookup probing the cache.
pub struct ChangeNotifier {
    inner: Mutex<NotifierInner>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(NotifierInner {
                next_id: 0,
                listeners: Vec::new(),
            }),
        }
    }

    pub fn subscribe(&self, listener: Listener) -> ListenerId {
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        id
    }

    /// Remove a subscription. Returns `false` if the id was unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Deliver the change signal to every subscriber. Fire-and-forget.
    pub fn notify_changed(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_reaches_all_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            notifier.subscribe(Arc::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }
        notifier.notify_changed();
        notifier.notify_changed();
        assert_eq!(hits.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);
        let id = notifier.subscribe(Arc::new(move || {
            hits2.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(notifier.unsubscribe(id));
        notifier.notify_changed();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_unknown_id_is_refused() {
        let notifier = ChangeNotifier::new();
        let id = notifier.subscribe(Arc::new(|| {}));
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
    }

    #[test]
    fn listener_may_resubscribe_without_deadlock() {
        // A listener touching the notifier again must not deadlock; the
        // listener list is cloned out of the lock before delivery.
        let notifier = Arc::new(ChangeNotifier::new());
        let n2 = Arc::clone(&notifier);
        notifier.subscribe(Arc::new(move || {
            let _ = n2.subscribe(Arc::new(|| {}));
        }));
        notifier.notify_changed();
        assert_eq!(notifier.listener_count(), 2);
    }
}
