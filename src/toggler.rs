//! The toggle widget: a presenter bound to a surface and a preference signal.
//!
//! [`ThemeToggler`] mirrors the lifecycle of a UI element:
//!
//! - [`connect`](ThemeToggler::connect) restores the persisted state (once per
//!   toggler), draws the control and starts listening for activations and
//!   preference changes.
//! - An activation advances the presenter and redraws the control and the
//!   document attribute. A preference change redraws the label only.
//! - [`disconnect`](ThemeToggler::disconnect) removes both listeners. Dropping
//!   the toggler disconnects it.
//!
//! Events are handled one at a time to completion. Listeners hold a weak
//! reference to the presenter, so a surface or signal that outlives the
//! toggler never keeps it alive.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::listener::ListenerId;
use crate::preference::PreferenceSignal;
use crate::presenter::{ThemeTogglePresenter, Transition};
use crate::store::KeyValueStore;
use crate::surface::{Attributes, RenderSurface, ARIA_LABEL_ATTR, STATE_ATTR};
use crate::theme::{Appearance, ThemeState};

type SharedPresenter<S, P> = Rc<RefCell<ThemeTogglePresenter<S, P>>>;

/// A theme toggle control.
///
/// # Example
///
/// ```rust
/// use theme_toggler::{
///     HeadlessSurface, ManualPreference, MemoryStore, ThemeTogglePresenter, ThemeToggler,
///     TogglerConfig,
/// };
///
/// let preference = ManualPreference::new(false);
/// let surface = HeadlessSurface::new();
/// let presenter = ThemeTogglePresenter::new(MemoryStore::new(), preference.clone(), TogglerConfig::default());
///
/// let mut toggler = ThemeToggler::new(presenter, surface.clone());
/// toggler.connect();
/// assert_eq!(surface.label().as_deref(), Some("Change to dark theme"));
///
/// preference.set_dark(true);
/// assert_eq!(surface.label().as_deref(), Some("Change to light theme"));
/// ```
pub struct ThemeToggler<S, P, R>
where
    S: KeyValueStore + 'static,
    P: PreferenceSignal + Clone + 'static,
    R: RenderSurface + Clone + 'static,
{
    presenter: SharedPresenter<S, P>,
    preference: P,
    surface: R,
    activate_listener: Option<ListenerId>,
    preference_listener: Option<ListenerId>,
}

impl<S, P, R> ThemeToggler<S, P, R>
where
    S: KeyValueStore + 'static,
    P: PreferenceSignal + Clone + 'static,
    R: RenderSurface + Clone + 'static,
{
    /// Binds a presenter to a surface. Nothing happens until [`connect`](Self::connect).
    pub fn new(presenter: ThemeTogglePresenter<S, P>, surface: R) -> Self {
        let preference = presenter.preference().clone();
        Self {
            presenter: Rc::new(RefCell::new(presenter)),
            preference,
            surface,
            activate_listener: None,
            preference_listener: None,
        }
    }

    /// Attaches the toggler to its surface and preference signal.
    ///
    /// The persisted state is restored the first time only; reconnecting just
    /// redraws and re-registers the listeners. Returns `false` if the toggler
    /// was already connected.
    pub fn connect(&mut self) -> bool {
        if self.is_connected() {
            log::debug!("Theme toggler already connected");
            return false;
        }

        match self.presenter.try_borrow_mut() {
            Ok(mut presenter) => {
                presenter.initialize();
                render(&*presenter, &self.surface);
            }
            Err(_) => {
                log::warn!("Theme toggler connected while handling an event; skipping render");
            }
        }

        let presenter = Rc::downgrade(&self.presenter);
        let surface = self.surface.clone();
        self.activate_listener = Some(self.surface.on_activate(Rc::new(move || {
            handle_activation(&presenter, &surface);
        })));

        let presenter = Rc::downgrade(&self.presenter);
        let surface = self.surface.clone();
        self.preference_listener = Some(self.preference.subscribe(Rc::new(move |dark| {
            handle_preference_change(&presenter, &surface, dark);
        })));

        log::debug!("Theme toggler connected");
        true
    }

    /// Removes the activation and preference listeners.
    ///
    /// Returns `false` if the toggler was not connected.
    pub fn disconnect(&mut self) -> bool {
        let activate = self.activate_listener.take();
        let preference = self.preference_listener.take();
        if activate.is_none() && preference.is_none() {
            return false;
        }

        if let Some(id) = activate {
            self.surface.remove_activate_listener(id);
        }
        if let Some(id) = preference {
            self.preference.unsubscribe(id);
        }
        log::debug!("Theme toggler disconnected");
        true
    }

    pub fn is_connected(&self) -> bool {
        self.activate_listener.is_some() || self.preference_listener.is_some()
    }

    /// Activates the control programmatically, exactly as a user activation would.
    ///
    /// Returns `None` if another event is still being handled.
    pub fn activate(&self) -> Option<Transition> {
        activate_and_render(&*self.presenter, &self.surface)
    }

    /// Sets the state from a string and redraws the control.
    ///
    /// The value is normalized like [`ThemeTogglePresenter::set_state`].
    pub fn select(&self, value: &str) -> ThemeState {
        let mut presenter = self.presenter.borrow_mut();
        let state = presenter.set_state(value);
        render(&*presenter, &self.surface);
        state
    }

    pub fn current_state(&self) -> ThemeState {
        self.presenter.borrow().current_state()
    }

    pub fn current_label(&self) -> String {
        self.presenter.borrow().current_label()
    }

    pub fn effective_appearance(&self) -> Appearance {
        self.presenter.borrow().effective_appearance()
    }

    /// Borrows the underlying presenter.
    pub fn presenter(&self) -> Ref<'_, ThemeTogglePresenter<S, P>> {
        self.presenter.borrow()
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

impl<S, P, R> Drop for ThemeToggler<S, P, R>
where
    S: KeyValueStore + 'static,
    P: PreferenceSignal + Clone + 'static,
    R: RenderSurface + Clone + 'static,
{
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl<S, P, R> std::fmt::Debug for ThemeToggler<S, P, R>
where
    S: KeyValueStore + 'static,
    P: PreferenceSignal + Clone + 'static,
    R: RenderSurface + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeToggler")
            .field("state", &self.presenter.try_borrow().map(|p| p.current_state()))
            .field("activate_listener", &self.activate_listener)
            .field("preference_listener", &self.preference_listener)
            .finish()
    }
}

fn handle_activation<S, P, R>(presenter: &Weak<RefCell<ThemeTogglePresenter<S, P>>>, surface: &R)
where
    S: KeyValueStore,
    P: PreferenceSignal,
    R: RenderSurface,
{
    if let Some(presenter) = presenter.upgrade() {
        activate_and_render(&*presenter, surface);
    }
}

fn activate_and_render<S, P, R>(
    presenter: &RefCell<ThemeTogglePresenter<S, P>>,
    surface: &R,
) -> Option<Transition>
where
    S: KeyValueStore,
    P: PreferenceSignal,
    R: RenderSurface,
{
    let Ok(mut presenter) = presenter.try_borrow_mut() else {
        log::warn!("Dropping theme activation received while another event is being handled");
        return None;
    };
    let transition = presenter.activate();
    render(&*presenter, surface);
    Some(transition)
}

fn handle_preference_change<S, P, R>(
    presenter: &Weak<RefCell<ThemeTogglePresenter<S, P>>>,
    surface: &R,
    dark: bool,
) where
    S: KeyValueStore,
    P: PreferenceSignal,
    R: RenderSurface,
{
    let Some(presenter) = presenter.upgrade() else {
        return;
    };
    let Ok(presenter) = presenter.try_borrow() else {
        log::warn!("Dropping preference change received while another event is being handled");
        return;
    };
    log::debug!("Refreshing theme label (prefers dark = {})", dark);
    render_label(&*presenter, surface);
}

/// Draws the control attributes and the document attribute.
fn render<S, P, R>(presenter: &ThemeTogglePresenter<S, P>, surface: &R)
where
    S: KeyValueStore,
    P: PreferenceSignal,
    R: RenderSurface,
{
    let mut attributes = Attributes::new();
    attributes.insert(
        STATE_ATTR.to_string(),
        presenter.current_state().as_str().to_string(),
    );
    attributes.insert(ARIA_LABEL_ATTR.to_string(), presenter.current_label());
    surface.set_attributes(&attributes);

    surface.set_document_attribute(
        &presenter.config().document_attribute,
        presenter.appearance_override().map(|a| a.as_str()),
    );
}

fn render_label<S, P, R>(presenter: &ThemeTogglePresenter<S, P>, surface: &R)
where
    S: KeyValueStore,
    P: PreferenceSignal,
    R: RenderSurface,
{
    let mut attributes = Attributes::new();
    attributes.insert(ARIA_LABEL_ATTR.to_string(), presenter.current_label());
    surface.set_attributes(&attributes);
}
