//! The render adapter the toggler draws on.
//!
//! This module provides:
//!
//! - [`RenderSurface`]: Shows the control, reflects attributes and reports
//!   activations
//! - [`HeadlessSurface`]: An in-memory surface for tests and non-graphical hosts
//!
//! The presenter never talks to a surface; [`ThemeToggler`](crate::ThemeToggler)
//! reflects presenter state onto one.

mod headless;

pub use headless::HeadlessSurface;

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::listener::ListenerId;

/// Control attribute holding the current state (`auto`, `light` or `dark`).
pub const STATE_ATTR: &str = "state";

/// Control attribute holding the accessible label.
pub const ARIA_LABEL_ATTR: &str = "aria-label";

/// Document attribute carrying the forced appearance.
pub const DEFAULT_DOCUMENT_ATTR: &str = "data-theme";

/// Attribute name/value pairs applied to the control.
pub type Attributes = BTreeMap<String, String>;

/// Callback invoked once per user activation of the control.
pub type ActivateListener = Rc<dyn Fn()>;

/// Where the toggle control is displayed.
pub trait RenderSurface {
    /// Sets attributes on the control, leaving others untouched.
    fn set_attributes(&self, attributes: &Attributes);

    /// Sets a document-level attribute, or removes it when `value` is `None`.
    fn set_document_attribute(&self, name: &str, value: Option<&str>);

    /// Registers a listener for activations of the control.
    fn on_activate(&self, listener: ActivateListener) -> ListenerId;

    /// Removes an activation listener. Returns `false` if it was not registered.
    fn remove_activate_listener(&self, id: ListenerId) -> bool;
}
