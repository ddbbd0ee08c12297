use thiserror::Error;

/// Errors raised by storage backends.
///
/// None of these reach callers of [`super::JsonStorage`]; they are logged
/// and converted to "no data".
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },

    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode value under '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },
}
