//! Persistence for the selected theme.
//!
//! This module provides:
//!
//! - [`KeyValueStore`]: The get/set-one-string-key collaborator
//! - [`MemoryStore`]: A shared in-memory store
//! - [`JsonFileStore`]: A store backed by a flat JSON object on disk
//! - [`StoreError`]: Errors from store access
//!
//! The presenter never fails because of a store: read errors are treated as
//! "nothing persisted" and write errors leave the in-memory state in place.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key the theme selection is persisted under.
pub const THEME_KEY: &str = "theme";

/// A persistent string key-value store.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
