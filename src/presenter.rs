//! The theme toggle state machine.
//!
//! [`ThemeTogglePresenter`] owns the [`ThemeState`] and everything derived
//! from it. It reads the persisted choice once at startup, writes it back on
//! every change, and answers what the control should say about the next
//! activation. It knows nothing about how the control is drawn.
//!
//! # State machine
//!
//! ```text
//!             initialize()                activate()
//!   [Auto] ──────────────────▶ [restored] ───────────▶ table.next(state, has_dark)
//! ```
//!
//! The machine starts in `Auto`, is overridden by a recognized persisted value
//! and from then on only moves through [`activate`](ThemeTogglePresenter::activate)
//! or [`set_state`](ThemeTogglePresenter::set_state). It has no terminal state.

use crate::config::TogglerConfig;
use crate::preference::PreferenceSignal;
use crate::store::KeyValueStore;
use crate::theme::{next_label, peek_next_state, Appearance, ThemeState};

/// The outcome of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the activation
    pub from: ThemeState,
    /// State after the activation
    pub to: ThemeState,
    /// System preference the transition was computed with
    pub has_dark: bool,
}

impl Transition {
    /// Whether the activation changed the state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Owns the theme state, persists it and computes the control's label.
///
/// # Example
///
/// ```rust
/// use theme_toggler::{ManualPreference, MemoryStore, ThemeState, ThemeTogglePresenter, TogglerConfig};
///
/// let store = MemoryStore::with_entry("theme", "DARK");
/// let mut presenter = ThemeTogglePresenter::new(store, ManualPreference::new(false), TogglerConfig::default());
/// presenter.initialize();
///
/// assert_eq!(presenter.current_state(), ThemeState::Dark);
/// assert_eq!(presenter.current_label(), "Change to light theme");
///
/// let transition = presenter.activate();
/// assert_eq!(transition.to, ThemeState::Auto);
/// ```
#[derive(Debug)]
pub struct ThemeTogglePresenter<S, P> {
    state: ThemeState,
    appearance_override: Option<Appearance>,
    store: S,
    preference: P,
    config: TogglerConfig,
    initialized: bool,
}

impl<S: KeyValueStore, P: PreferenceSignal> ThemeTogglePresenter<S, P> {
    /// Creates a presenter in the `Auto` state.
    ///
    /// Nothing is read from the store until [`initialize`](Self::initialize).
    pub fn new(store: S, preference: P, config: TogglerConfig) -> Self {
        Self {
            state: ThemeState::Auto,
            appearance_override: None,
            store,
            preference,
            config,
            initialized: false,
        }
    }

    /// Restores the persisted state.
    ///
    /// A recognized persisted value (in any case) is applied as if passed to
    /// [`set_state`](Self::set_state); anything else leaves the state at `Auto`.
    /// Runs once per presenter: later calls do nothing and return `false`.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            log::debug!("Theme presenter already initialized; skipping restore");
            return false;
        }
        self.initialized = true;

        let persisted = match self.store.load(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not read persisted theme, using auto: {}", e);
                None
            }
        };

        match persisted {
            Some(value) => match ThemeState::parse(&value) {
                Some(state) => {
                    log::debug!("Restoring persisted theme '{}'", state);
                    self.set_theme(state);
                }
                None => {
                    log::warn!("Ignoring unrecognized persisted theme '{}'", value);
                }
            },
            None => log::debug!("No persisted theme; starting in auto"),
        }
        true
    }

    /// Sets the state from a string.
    ///
    /// The value is normalized first: matching ignores case and anything other
    /// than `auto`, `light` or `dark` becomes `auto`. The normalized value is
    /// persisted and the appearance override updated. The label is not
    /// re-rendered here; that is up to the caller.
    pub fn set_state(&mut self, value: &str) -> ThemeState {
        let state = ThemeState::normalize(value);
        self.set_theme(state);
        state
    }

    /// Sets an already-typed state. Same side effects as [`set_state`](Self::set_state).
    pub fn set_theme(&mut self, state: ThemeState) {
        self.state = state;
        self.appearance_override = state.appearance_override();

        if let Err(e) = self.store.save(&self.config.storage_key, state.as_str()) {
            log::warn!("Could not persist theme '{}': {}", state, e);
        }
    }

    /// Advances the state machine by one user activation.
    ///
    /// Reads the current system preference, moves to the state given by the
    /// configured [`TransitionTable`](crate::TransitionTable) and persists it.
    pub fn activate(&mut self) -> Transition {
        let has_dark = self.preference.is_dark_preferred();
        let from = self.state;
        let to = self.config.transitions.next(from, has_dark);

        log::debug!(
            "Theme activation: {} -> {} (prefers dark = {}, table = {})",
            from,
            to,
            has_dark,
            self.config.transitions
        );
        self.set_theme(to);

        Transition { from, to, has_dark }
    }

    pub fn current_state(&self) -> ThemeState {
        self.state
    }

    /// The forced appearance; `None` while in `Auto`.
    pub fn appearance_override(&self) -> Option<Appearance> {
        self.appearance_override
    }

    /// The appearance that should be rendered right now.
    pub fn effective_appearance(&self) -> Appearance {
        self.appearance_override
            .unwrap_or_else(|| Appearance::from_dark_preferred(self.is_dark_preferred()))
    }

    pub fn is_dark_preferred(&self) -> bool {
        self.preference.is_dark_preferred()
    }

    /// The state the label advertises, given the current preference.
    pub fn peek_next_state(&self) -> ThemeState {
        peek_next_state(self.state, self.is_dark_preferred())
    }

    /// `"Change to {next} theme"` for the current state and preference.
    pub fn current_label(&self) -> String {
        next_label(self.state, self.is_dark_preferred())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &TogglerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preference(&self) -> &P {
        &self.preference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::ManualPreference;
    use crate::store::{MemoryStore, StoreError};
    use crate::theme::TransitionTable;

    fn presenter(
        store: &MemoryStore,
        dark: bool,
    ) -> ThemeTogglePresenter<MemoryStore, ManualPreference> {
        ThemeTogglePresenter::new(
            store.clone(),
            ManualPreference::new(dark),
            TogglerConfig::default(),
        )
    }

    /// A store whose every access fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::NoLocation)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::NoLocation)
        }
    }

    #[test]
    fn test_starts_in_auto() {
        let store = MemoryStore::new();
        let presenter = presenter(&store, false);
        assert_eq!(presenter.current_state(), ThemeState::Auto);
        assert_eq!(presenter.appearance_override(), None);
        assert!(!presenter.is_initialized());
    }

    #[test]
    fn test_initialize_without_persisted_value() {
        let store = MemoryStore::new();
        let mut presenter = presenter(&store, true);

        assert!(presenter.initialize());
        assert_eq!(presenter.current_state(), ThemeState::Auto);
        assert_eq!(presenter.current_label(), "Change to light theme");
        // Nothing persisted until the state actually changes
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_initialize_restores_case_insensitively() {
        let store = MemoryStore::with_entry("theme", "Light");
        let mut presenter = presenter(&store, false);
        presenter.initialize();

        assert_eq!(presenter.current_state(), ThemeState::Light);
        assert_eq!(presenter.appearance_override(), Some(Appearance::Light));
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_initialize_ignores_unrecognized_value() {
        let store = MemoryStore::with_entry("theme", "solarized");
        let mut presenter = presenter(&store, false);
        presenter.initialize();

        assert_eq!(presenter.current_state(), ThemeState::Auto);
        assert_eq!(presenter.appearance_override(), None);
    }

    #[test]
    fn test_initialize_runs_once() {
        let store = MemoryStore::with_entry("theme", "dark");
        let mut presenter = presenter(&store, false);
        assert!(presenter.initialize());

        presenter.set_theme(ThemeState::Light);
        let mut other = store.clone();
        other.save("theme", "dark").unwrap();

        assert!(!presenter.initialize());
        assert_eq!(presenter.current_state(), ThemeState::Light);
    }

    #[test]
    fn test_set_state_normalizes_and_persists() {
        let store = MemoryStore::new();
        let mut presenter = presenter(&store, false);

        assert_eq!(presenter.set_state("DARK"), ThemeState::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(presenter.appearance_override(), Some(Appearance::Dark));

        assert_eq!(presenter.set_state("purple"), ThemeState::Auto);
        assert_eq!(store.get("theme").as_deref(), Some("auto"));
        assert_eq!(presenter.appearance_override(), None);
    }

    #[test]
    fn test_set_state_is_idempotent() {
        let store = MemoryStore::new();
        let mut presenter = presenter(&store, false);

        presenter.set_state("light");
        let once = (store.get("theme"), presenter.appearance_override());
        presenter.set_state("light");
        let twice = (store.get("theme"), presenter.appearance_override());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_activate_from_auto_prefers_dark() {
        let store = MemoryStore::new();
        let mut presenter = presenter(&store, true);
        presenter.initialize();

        assert_eq!(presenter.current_label(), "Change to light theme");
        let transition = presenter.activate();

        assert_eq!(
            transition,
            Transition {
                from: ThemeState::Auto,
                to: ThemeState::Light,
                has_dark: true,
            }
        );
        assert!(transition.changed());
        assert_eq!(presenter.current_state(), ThemeState::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_activate_dark_prefers_light_returns_to_auto() {
        let store = MemoryStore::with_entry("theme", "dark");
        let mut presenter = presenter(&store, false);
        presenter.initialize();

        assert_eq!(presenter.activate().to, ThemeState::Auto);
        assert_eq!(presenter.appearance_override(), None);
    }

    #[test]
    fn test_activate_with_toggle_table() {
        let store = MemoryStore::with_entry("theme", "dark");
        let config = TogglerConfig::default().with_transitions(TransitionTable::Toggle);
        let mut presenter =
            ThemeTogglePresenter::new(store.clone(), ManualPreference::new(false), config);
        presenter.initialize();

        assert_eq!(presenter.activate().to, ThemeState::Light);
        assert_eq!(presenter.activate().to, ThemeState::Dark);
        assert_eq!(presenter.activate().to, ThemeState::Light);
    }

    #[test]
    fn test_cyclic_walk_returns_to_auto() {
        let store = MemoryStore::new();
        let mut presenter = presenter(&store, true);
        presenter.initialize();

        let visited: Vec<ThemeState> = (0..3).map(|_| presenter.activate().to).collect();
        assert_eq!(
            visited,
            vec![ThemeState::Light, ThemeState::Auto, ThemeState::Light]
        );
    }

    #[test]
    fn test_label_tracks_preference_without_state_change() {
        let store = MemoryStore::new();
        let preference = ManualPreference::new(false);
        let presenter =
            ThemeTogglePresenter::new(store, preference.clone(), TogglerConfig::default());

        assert_eq!(presenter.current_label(), "Change to dark theme");
        preference.set_dark(true);
        assert_eq!(presenter.current_label(), "Change to light theme");
        assert_eq!(presenter.current_state(), ThemeState::Auto);
    }

    #[test]
    fn test_effective_appearance() {
        let store = MemoryStore::new();
        let preference = ManualPreference::new(true);
        let mut presenter =
            ThemeTogglePresenter::new(store, preference.clone(), TogglerConfig::default());

        assert_eq!(presenter.effective_appearance(), Appearance::Dark);
        preference.set_dark(false);
        assert_eq!(presenter.effective_appearance(), Appearance::Light);

        presenter.set_theme(ThemeState::Dark);
        assert_eq!(presenter.effective_appearance(), Appearance::Dark);
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::with_entry("site-theme", "light");
        let config = TogglerConfig::default().with_storage_key("site-theme");
        let mut presenter =
            ThemeTogglePresenter::new(store.clone(), ManualPreference::new(false), config);
        presenter.initialize();
        assert_eq!(presenter.current_state(), ThemeState::Light);

        presenter.activate();
        assert_eq!(store.get("site-theme").as_deref(), Some("dark"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_broken_store_degrades_gracefully() {
        let mut presenter = ThemeTogglePresenter::new(
            BrokenStore,
            ManualPreference::new(false),
            TogglerConfig::default(),
        );

        assert!(presenter.initialize());
        assert_eq!(presenter.current_state(), ThemeState::Auto);

        let transition = presenter.activate();
        assert_eq!(transition.to, ThemeState::Dark);
        assert_eq!(presenter.current_state(), ThemeState::Dark);
    }
}
