//! Listener registrations shared by the preference signal and the surface.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned when a listener is registered, used to remove it again.
///
/// Ids are unique for the whole process, so an id from one signal or surface
/// never removes a listener registered somewhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registered listeners, in registration order.
pub(crate) struct ListenerSet<L: ?Sized> {
    entries: Vec<(ListenerId, Rc<L>)>,
}

impl<L: ?Sized> ListenerSet<L> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, listener: Rc<L>) -> ListenerId {
        let id = ListenerId::next();
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Clones the current listeners so they can be called without holding a
    /// borrow of the set.
    pub(crate) fn snapshot(&self) -> Vec<Rc<L>> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> std::fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_ids_are_unique() {
        let mut a: ListenerSet<dyn Fn()> = ListenerSet::new();
        let mut b: ListenerSet<dyn Fn()> = ListenerSet::new();
        let first = a.add(Rc::new(|| {}));
        let second = b.add(Rc::new(|| {}));
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_only_matching_id() {
        let mut set: ListenerSet<dyn Fn()> = ListenerSet::new();
        let kept = set.add(Rc::new(|| {}));
        let removed = set.add(Rc::new(|| {}));

        assert!(set.remove(removed));
        assert!(!set.remove(removed));
        assert_eq!(set.len(), 1);
        assert!(set.remove(kept));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let calls = Rc::new(Cell::new(0u32));
        let mut set: ListenerSet<dyn Fn(u32)> = ListenerSet::new();
        for _ in 0..3 {
            let calls = Rc::clone(&calls);
            set.add(Rc::new(move |n| calls.set(calls.get() * 10 + n)));
        }
        for (n, listener) in set.snapshot().iter().enumerate() {
            listener(n as u32 + 1);
        }
        assert_eq!(calls.get(), 123);
    }
}
