//! Value-changed listeners
//!
//! A single listener list, invoked synchronously in subscription order.

use std::fmt;

pub type ToggleListener = Box<dyn FnMut(bool) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct ToggleListeners {
    next_id: u64,
    entries: Vec<(ListenerId, ToggleListener)>,
}

impl ToggleListeners {
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(bool) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was never subscribed or is already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, is_on: bool) {
        for (_, listener) in self.entries.iter_mut() {
            listener(is_on);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ToggleListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = ToggleListeners::default();

        let first = Arc::clone(&log);
        listeners.subscribe(move |on| first.lock().unwrap().push(("a", on)));
        let second = Arc::clone(&log);
        listeners.subscribe(move |on| second.lock().unwrap().push(("b", on)));

        listeners.notify(true);
        assert_eq!(*log.lock().unwrap(), vec![("a", true), ("b", true)]);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Arc::new(Mutex::new(0));
        let mut listeners = ToggleListeners::default();
        let counter = Arc::clone(&hits);
        let id = listeners.subscribe(move |_| *counter.lock().unwrap() += 1);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert!(listeners.is_empty());

        listeners.notify(false);
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut listeners = ToggleListeners::default();
        let a = listeners.subscribe(|_| {});
        listeners.unsubscribe(a);
        let b = listeners.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(listeners.len(), 1);
    }
}
