//! The three-valued theme selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::appearance::Appearance;

/// The user's theme selection.
///
/// Exactly one variant is active at a time. Any value outside the three
/// recognized names normalizes to [`ThemeState::Auto`], so nothing else is
/// ever persisted or rendered.
///
/// # Example
///
/// ```rust
/// use theme_toggler::ThemeState;
///
/// assert_eq!(ThemeState::normalize("DARK"), ThemeState::Dark);
/// assert_eq!(ThemeState::normalize("sepia"), ThemeState::Auto);
/// assert_eq!(ThemeState::Light.as_str(), "light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    /// Follow the system color scheme.
    #[default]
    Auto,
    /// Force the light appearance.
    Light,
    /// Force the dark appearance.
    Dark,
}

impl ThemeState {
    /// All states, in `auto`, `light`, `dark` order.
    pub const ALL: [ThemeState; 3] = [ThemeState::Auto, ThemeState::Light, ThemeState::Dark];

    /// Recognizes a state name, ignoring case.
    ///
    /// Returns `None` for anything that isn't `auto`, `light` or `dark`.
    pub fn parse(value: &str) -> Option<ThemeState> {
        match value.to_lowercase().as_str() {
            "auto" => Some(ThemeState::Auto),
            "light" => Some(ThemeState::Light),
            "dark" => Some(ThemeState::Dark),
            _ => None,
        }
    }

    /// Like [`ThemeState::parse`], but unrecognized values become `Auto`.
    pub fn normalize(value: &str) -> ThemeState {
        Self::parse(value).unwrap_or_default()
    }

    /// The lowercase name, as persisted and rendered.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeState::Auto => "auto",
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    /// The forced appearance, or `None` when the system preference decides.
    pub fn appearance_override(&self) -> Option<Appearance> {
        match self {
            ThemeState::Auto => None,
            ThemeState::Light => Some(Appearance::Light),
            ThemeState::Dark => Some(Appearance::Dark),
        }
    }

    /// Resolves the appearance that should be rendered.
    pub fn effective_appearance(&self, has_dark: bool) -> Appearance {
        self.appearance_override()
            .unwrap_or_else(|| Appearance::from_dark_preferred(has_dark))
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict [`FromStr`] parse of a [`ThemeState`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme state '{value}' (expected auto, light or dark)")]
pub struct ParseThemeStateError {
    /// The rejected input
    pub value: String,
}

impl FromStr for ThemeState {
    type Err = ParseThemeStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeState::parse(s).ok_or_else(|| ParseThemeStateError {
            value: s.to_string(),
        })
    }
}
