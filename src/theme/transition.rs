//! Activation transitions and the label describing them.
//!
//! Two tables are supported. They agree on where `auto` goes and differ on
//! what happens once a fixed theme is selected:
//!
//! | current | table | prefers dark | prefers light |
//! |---------|-------|--------------|---------------|
//! | auto    | both  | light        | dark          |
//! | light   | cyclic| auto         | dark          |
//! | dark    | cyclic| light        | auto          |
//! | light   | toggle| dark         | dark          |
//! | dark    | toggle| light        | light         |
//!
//! The label shown on the control is computed by [`peek_next_state`] for
//! both tables.

use serde::{Deserialize, Serialize};

use super::state::ThemeState;

/// Which activation table drives the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionTable {
    /// Walks through all three states; the fixed theme matching the system
    /// preference returns to `auto`.
    #[default]
    Cyclic,
    /// Leaves `auto` once, then flips between light and dark.
    Toggle,
}

impl TransitionTable {
    /// Computes the state an activation moves to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use theme_toggler::{ThemeState, TransitionTable};
    ///
    /// let next = TransitionTable::Cyclic.next(ThemeState::Dark, false);
    /// assert_eq!(next, ThemeState::Auto);
    ///
    /// let next = TransitionTable::Toggle.next(ThemeState::Dark, false);
    /// assert_eq!(next, ThemeState::Light);
    /// ```
    pub fn next(&self, state: ThemeState, has_dark: bool) -> ThemeState {
        match (self, state) {
            (_, ThemeState::Auto) => {
                if has_dark {
                    ThemeState::Light
                } else {
                    ThemeState::Dark
                }
            }
            (TransitionTable::Cyclic, ThemeState::Light) => {
                if has_dark {
                    ThemeState::Auto
                } else {
                    ThemeState::Dark
                }
            }
            (TransitionTable::Cyclic, ThemeState::Dark) => {
                if has_dark {
                    ThemeState::Light
                } else {
                    ThemeState::Auto
                }
            }
            (TransitionTable::Toggle, ThemeState::Light) => ThemeState::Dark,
            (TransitionTable::Toggle, ThemeState::Dark) => ThemeState::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionTable::Cyclic => "cyclic",
            TransitionTable::Toggle => "toggle",
        }
    }
}

impl std::fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state the control advertises as the next one.
///
/// This drives the label only. It is independent of the [`TransitionTable`]
/// in use, so with the cyclic table a fixed theme that matches the system
/// preference still advertises the opposite fixed theme.
pub fn peek_next_state(state: ThemeState, has_dark: bool) -> ThemeState {
    match state {
        ThemeState::Auto => {
            if has_dark {
                ThemeState::Light
            } else {
                ThemeState::Dark
            }
        }
        ThemeState::Light => ThemeState::Dark,
        ThemeState::Dark => ThemeState::Light,
    }
}

/// The accessible label for the control: `"Change to {next} theme"`.
pub fn next_label(state: ThemeState, has_dark: bool) -> String {
    format!("Change to {} theme", peek_next_state(state, has_dark))
}
