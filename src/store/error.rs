//! Store access errors.

use std::path::PathBuf;

/// Error returned when reading or writing a [`KeyValueStore`](super::KeyValueStore) fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("failed to access store file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but is not a flat JSON object of strings
    #[error("store file '{}' is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// No location is available for the store
    #[error("no configuration directory available for the theme store")]
    NoLocation,
}
