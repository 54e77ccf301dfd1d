//! Theme states and the transitions between them.
//!
//! This module provides:
//!
//! - [`ThemeState`]: The user's selection, one of `auto`, `light` or `dark`
//! - [`Appearance`]: The light or dark appearance actually rendered
//! - [`TransitionTable`]: Which state an activation moves to
//! - [`peek_next_state`] / [`next_label`]: What the control advertises the
//!   next activation will do
//!
//! Everything here is pure; persistence and rendering live elsewhere.

mod appearance;
mod state;
mod transition;

pub use appearance::Appearance;
pub use state::{ParseThemeStateError, ThemeState};
pub use transition::{next_label, peek_next_state, TransitionTable};
