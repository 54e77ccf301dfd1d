//! Application-controlled preference signal.

use std::cell::RefCell;
use std::rc::Rc;

use super::{PreferenceListener, PreferenceSignal};
use crate::listener::{ListenerId, ListenerSet};

#[derive(Debug)]
struct Inner {
    dark: bool,
    listeners: ListenerSet<dyn Fn(bool)>,
}

/// A preference signal whose value is set explicitly.
///
/// Useful for tests, for hosts that receive the color scheme from elsewhere,
/// and for forcing a preference from the command line.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use theme_toggler::{ManualPreference, PreferenceSignal};
///
/// let preference = ManualPreference::new(false);
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
/// preference.subscribe(Rc::new(move |dark| sink.set(Some(dark))));
///
/// preference.set_dark(true);
/// assert_eq!(seen.get(), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct ManualPreference {
    inner: Rc<RefCell<Inner>>,
}

impl ManualPreference {
    /// Creates a signal with the given initial value.
    pub fn new(dark: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                dark,
                listeners: ListenerSet::new(),
            })),
        }
    }

    /// Updates the preference, notifying subscribers if it changed.
    ///
    /// Returns whether the value changed.
    pub fn set_dark(&self, dark: bool) -> bool {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.dark == dark {
                return false;
            }
            inner.dark = dark;
            inner.listeners.snapshot()
        };

        log::debug!("Preference changed: prefers dark = {}", dark);
        for listener in listeners {
            listener(dark);
        }
        true
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for ManualPreference {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PreferenceSignal for ManualPreference {
    fn is_dark_preferred(&self) -> bool {
        self.inner.borrow().dark
    }

    fn subscribe(&self, listener: PreferenceListener) -> ListenerId {
        self.inner.borrow_mut().listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(id)
    }
}
