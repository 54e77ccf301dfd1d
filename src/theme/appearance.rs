//! The appearance actually rendered on screen.

use serde::{Deserialize, Serialize};

/// A concrete light or dark appearance.
///
/// Unlike [`ThemeState`](super::ThemeState), there is no `auto` here: an
/// appearance is what `auto` resolves to once the system preference is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Maps a "prefers dark" signal to an appearance.
    pub fn from_dark_preferred(has_dark: bool) -> Self {
        if has_dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }

    /// The lowercase name, as written to the document attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
