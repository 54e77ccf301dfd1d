//! In-memory render surface.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{ActivateListener, Attributes, RenderSurface, ARIA_LABEL_ATTR, STATE_ATTR};
use crate::listener::{ListenerId, ListenerSet};

#[derive(Debug, Default)]
struct Inner {
    control: Attributes,
    document: BTreeMap<String, String>,
    listeners: ListenerSet<dyn Fn()>,
    renders: usize,
}

/// A surface that records attributes in memory.
///
/// Clones share the same control, so a host can keep one handle to inspect
/// and [`activate`](HeadlessSurface::activate) while the toggler owns another.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    inner: Rc<RefCell<Inner>>,
}

impl HeadlessSurface {
    /// Creates a surface with no attributes and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates one user activation of the control.
    ///
    /// Returns the number of listeners that were called.
    pub fn activate(&self) -> usize {
        let listeners = self.inner.borrow().listeners.snapshot();
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }

    /// Returns a control attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().control.get(name).cloned()
    }

    /// Returns all control attributes.
    pub fn attributes(&self) -> Attributes {
        self.inner.borrow().control.clone()
    }

    /// The control's `state` attribute.
    pub fn state(&self) -> Option<String> {
        self.attribute(STATE_ATTR)
    }

    /// The control's `aria-label` attribute.
    pub fn label(&self) -> Option<String> {
        self.attribute(ARIA_LABEL_ATTR)
    }

    /// Returns a document-level attribute.
    pub fn document_attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().document.get(name).cloned()
    }

    /// Number of activation listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Number of times control attributes have been written.
    pub fn render_count(&self) -> usize {
        self.inner.borrow().renders
    }
}

impl RenderSurface for HeadlessSurface {
    fn set_attributes(&self, attributes: &Attributes) {
        let mut inner = self.inner.borrow_mut();
        for (name, value) in attributes {
            inner.control.insert(name.clone(), value.clone());
        }
        inner.renders += 1;
    }

    fn set_document_attribute(&self, name: &str, value: Option<&str>) {
        let mut inner = self.inner.borrow_mut();
        match value {
            Some(value) => {
                inner.document.insert(name.to_string(), value.to_string());
            }
            None => {
                inner.document.remove(name);
            }
        }
    }

    fn on_activate(&self, listener: ActivateListener) -> ListenerId {
        self.inner.borrow_mut().listeners.add(listener)
    }

    fn remove_activate_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_attributes_merges() {
        let surface = HeadlessSurface::new();
        let mut first = Attributes::new();
        first.insert(STATE_ATTR.to_string(), "auto".to_string());
        first.insert(ARIA_LABEL_ATTR.to_string(), "Change to dark theme".to_string());
        surface.set_attributes(&first);

        let mut second = Attributes::new();
        second.insert(STATE_ATTR.to_string(), "dark".to_string());
        surface.set_attributes(&second);

        assert_eq!(surface.state().as_deref(), Some("dark"));
        assert_eq!(surface.label().as_deref(), Some("Change to dark theme"));
        assert_eq!(surface.render_count(), 2);
    }

    #[test]
    fn test_document_attribute_set_and_remove() {
        let surface = HeadlessSurface::new();
        surface.set_document_attribute("data-theme", Some("light"));
        assert_eq!(
            surface.document_attribute("data-theme").as_deref(),
            Some("light")
        );

        surface.set_document_attribute("data-theme", None);
        assert_eq!(surface.document_attribute("data-theme"), None);
    }

    #[test]
    fn test_activate_calls_listeners() {
        let surface = HeadlessSurface::new();
        let clicks = Rc::new(Cell::new(0));
        let sink = Rc::clone(&clicks);
        let id = surface.on_activate(Rc::new(move || sink.set(sink.get() + 1)));

        assert_eq!(surface.activate(), 1);
        assert_eq!(clicks.get(), 1);

        assert!(surface.remove_activate_listener(id));
        assert_eq!(surface.activate(), 0);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_listener_may_write_attributes() {
        let surface = HeadlessSurface::new();
        let handle = surface.clone();
        surface.on_activate(Rc::new(move || {
            handle.set_document_attribute("data-theme", Some("dark"));
        }));

        surface.activate();
        assert_eq!(
            surface.document_attribute("data-theme").as_deref(),
            Some("dark")
        );
    }
}
