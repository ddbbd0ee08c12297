//! Raw text key-value backend trait.

use async_trait::async_trait;

use super::error::StorageError;

/// Keys map to file names, so they are restricted to a portable subset.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Persistent string store addressed by key.
///
/// Implementations make no transactional promise across keys.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Returns the name of this backend for logging.
    fn name(&self) -> &'static str;

    /// Read the raw value. A missing key is `Ok(None)`, not an error.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value. Deleting a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Write several keys.
    ///
    /// The default writes them one by one and stops at the first failure,
    /// leaving earlier keys written.
    async fn set_items(&self, entries: &[(String, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set_item(key, value).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_key;

    #[test]
    fn accepts_slice_names() {
        for key in ["session", "users", "leaveSummary", "recentRequests", "root", "a-b_c"] {
            assert!(is_valid_key(key), "{key} should be valid");
        }
    }

    #[test]
    fn rejects_paths_and_empty() {
        for key in ["", "../etc", "a/b", "a.b", "with space"] {
            assert!(!is_valid_key(key), "{key:?} should be rejected");
        }
    }
}
