//! Store wiring for a running application.

use crate::config::Config;
use crate::storage::JsonStorage;
use crate::store::{Persistence, PersistenceHandle, Store};

/// A store plus, when enabled, the persistence that mirrors it to disk.
pub struct App {
    store: Store,
    persistence: Option<PersistenceHandle>,
}

impl App {
    /// Build the store described by `config` and wait until persisted
    /// state has been loaded.
    pub async fn open(config: &Config) -> Self {
        if !config.persistence.enabled {
            return Self::in_memory();
        }
        let dir = config.data_dir();
        tracing::debug!(dir = %dir.display(), "opening storage");
        Self::with_storage(JsonStorage::in_dir(dir), config).await
    }

    pub async fn with_storage(storage: JsonStorage, config: &Config) -> Self {
        let store = Store::new();
        let persistence = Persistence::attach(&store, storage, config.persistence.to_options());
        store.wait_ready().await;
        Self {
            store,
            persistence: Some(persistence),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            store: Store::new(),
            persistence: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    /// Delete everything persisted. The in-memory tree is untouched.
    pub async fn purge(&self) {
        if let Some(persistence) = &self.persistence {
            persistence.purge().await;
        }
    }

    /// Write out pending changes and stop persistence.
    pub async fn close(self) {
        if let Some(persistence) = self.persistence {
            persistence.shutdown().await;
        }
    }
}
