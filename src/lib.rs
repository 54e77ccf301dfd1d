//! # Theme Toggler
//!
//! A three-state theme switch (`auto`, `light`, `dark`) that persists the
//! user's choice and follows the system color scheme while in `auto`.
//!
//! The crate is split along the collaborators of the widget:
//!
//! - [`ThemeTogglePresenter`]: the state machine. Owns the [`ThemeState`],
//!   computes transitions and the "Change to {x} theme" label.
//! - [`KeyValueStore`]: where the choice is persisted ([`MemoryStore`],
//!   [`JsonFileStore`]).
//! - [`PreferenceSignal`]: whether the system prefers dark, with change
//!   notification ([`ManualPreference`], [`SystemPreference`]).
//! - [`RenderSurface`]: the render adapter that shows the control and reports
//!   activations ([`HeadlessSurface`]).
//! - [`ThemeToggler`]: wires the presenter to a surface and a signal, and owns
//!   the connect/disconnect lifecycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_toggler::{
//!     HeadlessSurface, ManualPreference, MemoryStore, ThemeState, ThemeTogglePresenter,
//!     ThemeToggler, TogglerConfig,
//! };
//!
//! let store = MemoryStore::new();
//! let preference = ManualPreference::new(true);
//! let surface = HeadlessSurface::new();
//!
//! let presenter = ThemeTogglePresenter::new(store.clone(), preference, TogglerConfig::default());
//! let mut toggler = ThemeToggler::new(presenter, surface.clone());
//! toggler.connect();
//!
//! assert_eq!(surface.label().as_deref(), Some("Change to light theme"));
//!
//! surface.activate();
//! assert_eq!(toggler.current_state(), ThemeState::Light);
//! assert_eq!(surface.document_attribute("data-theme").as_deref(), Some("light"));
//! assert_eq!(store.get("theme").as_deref(), Some("light"));
//!
//! toggler.disconnect();
//! ```
//!
//! ## Transition tables
//!
//! Two activation tables are available through [`TransitionTable`]. The
//! default, [`TransitionTable::Cyclic`], walks through all three states taking
//! the system preference into account at every step. [`TransitionTable::Toggle`]
//! leaves `auto` once and then flips between light and dark.

pub mod config;
mod listener;
pub mod preference;
pub mod presenter;
pub mod store;
pub mod surface;
pub mod theme;
pub mod toggler;

pub use config::{ConfigError, TogglerConfig};
pub use listener::ListenerId;
pub use preference::{
    set_preference_detector, ManualPreference, PreferenceListener, PreferenceSignal,
    SystemPreference,
};
pub use presenter::{ThemeTogglePresenter, Transition};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError, THEME_KEY};
pub use surface::{
    ActivateListener, Attributes, HeadlessSurface, RenderSurface, ARIA_LABEL_ATTR,
    DEFAULT_DOCUMENT_ATTR, STATE_ATTR,
};
pub use theme::{
    next_label, peek_next_state, Appearance, ParseThemeStateError, ThemeState, TransitionTable,
};
pub use toggler::ThemeToggler;
