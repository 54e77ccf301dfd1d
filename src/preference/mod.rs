//! The system color-scheme preference.
//!
//! This module provides:
//!
//! - [`PreferenceSignal`]: A "prefers dark" boolean with change notification
//! - [`ManualPreference`]: A signal set by the application
//! - [`SystemPreference`]: A signal backed by OS detection
//! - [`set_preference_detector`]: Overrides how the OS preference is detected
//!
//! Signals are cheap handles: clones observe and notify the same listeners.

mod manual;
mod system;

pub use manual::ManualPreference;
pub use system::{set_preference_detector, PreferenceDetector, SystemPreference};

use std::rc::Rc;

use crate::listener::ListenerId;

/// Callback invoked with the new "prefers dark" value when it changes.
pub type PreferenceListener = Rc<dyn Fn(bool)>;

/// A boolean "the system prefers a dark appearance" signal.
pub trait PreferenceSignal {
    /// Whether a dark appearance is currently preferred.
    fn is_dark_preferred(&self) -> bool;

    /// Registers a listener called whenever the preference changes.
    fn subscribe(&self, listener: PreferenceListener) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}
