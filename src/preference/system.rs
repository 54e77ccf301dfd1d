//! Preference signal backed by the operating system's color scheme.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Mutex, PoisonError};

use super::{PreferenceListener, PreferenceSignal};
use crate::listener::{ListenerId, ListenerSet};
use crate::theme::Appearance;

/// Function used to detect the OS appearance.
pub type PreferenceDetector = fn() -> Appearance;

static PREFERENCE_DETECTOR: Lazy<Mutex<PreferenceDetector>> =
    Lazy::new(|| Mutex::new(os_preference_detector));

/// Overrides the detector used to determine whether the OS prefers a light or dark appearance.
///
/// This is useful for testing or when you want to force a specific appearance.
pub fn set_preference_detector(detector: PreferenceDetector) {
    let mut guard = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub(crate) fn detect_appearance() -> Appearance {
    let detector = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_preference_detector() -> Appearance {
    match detect_os_theme() {
        OsThemeMode::Dark => Appearance::Dark,
        _ => Appearance::Light,
    }
}

#[derive(Debug)]
struct Inner {
    dark: bool,
    listeners: ListenerSet<dyn Fn(bool)>,
}

/// A preference signal that follows the OS color scheme.
///
/// The OS is queried when the signal is created and on every
/// [`refresh`](SystemPreference::refresh). There is no push notification from
/// the OS, so hosts that want to track changes call `refresh` periodically or
/// when their window regains focus.
#[derive(Debug, Clone)]
pub struct SystemPreference {
    inner: Rc<RefCell<Inner>>,
}

impl SystemPreference {
    /// Creates a signal seeded with the current OS preference.
    pub fn new() -> Self {
        let dark = detect_appearance().is_dark();
        log::debug!("Detected system preference: prefers dark = {}", dark);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                dark,
                listeners: ListenerSet::new(),
            })),
        }
    }

    /// Re-queries the OS, notifying subscribers if the preference changed.
    ///
    /// Returns whether the value changed.
    pub fn refresh(&self) -> bool {
        let dark = detect_appearance().is_dark();
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.dark == dark {
                return false;
            }
            inner.dark = dark;
            inner.listeners.snapshot()
        };

        log::debug!("System preference changed: prefers dark = {}", dark);
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

impl Default for SystemPreference {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceSignal for SystemPreference {
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
