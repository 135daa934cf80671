//! A single-slot observable value.

use tokio::sync::watch;

/// Holds the latest value of `T` and notifies subscribers when it is
/// replaced.
///
/// Backed by a [`tokio::sync::watch`] channel: receivers always see the
/// most recent whole value, and intermediate values may be skipped if
/// nobody looked at them. Replacing works even when there are no
/// subscribers.
#[derive(Debug)]
pub struct StateHolder<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> StateHolder<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replaces the current value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Builds a new value from the current one, then replaces it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        // The read guard must be released before sending.
        let next = {
            let current = self.sender.borrow();
            f(&current)
        };
        self.sender.send_replace(next);
    }

    /// Opens a new receiver. It starts out having seen the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
