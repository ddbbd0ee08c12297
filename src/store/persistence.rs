//! Whole-tree or per-slice persistence for a [`Store`].
//!
//! Attaching persistence puts the store into a not-ready state, loads the
//! last snapshot, applies it, and marks the store ready. From then on every
//! change to a whitelisted slice is queued to one writer task, so writes
//! reach storage in the order they were issued and a burst of changes
//! collapses into the newest snapshot.
//!
//! Layouts:
//! - [`PersistLayout::WholeTree`]: one key holds every whitelisted slice.
//!   A single file replace, so a crash leaves either the old or the new tree.
//! - [`PersistLayout::PerSlice`]: one key per slice. Slices are replaced
//!   one after another; a crash between two of them leaves the keys out of
//!   step with each other (for example a session naming a user that the
//!   users key does not yet contain).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::storage::JsonStorage;
use crate::store::action::AppAction;
use crate::store::container::{Store, SubscriptionId};
use crate::store::slice_key::SliceKey;
use crate::store::snapshot::PersistedSnapshot;

pub const DEFAULT_ROOT_KEY: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistLayout {
    WholeTree { key: String },
    PerSlice,
}

impl Default for PersistLayout {
    fn default() -> Self {
        Self::WholeTree {
            key: DEFAULT_ROOT_KEY.to_string(),
        }
    }
}

impl PersistLayout {
    /// Every storage key this layout may write under `whitelist`.
    pub fn keys(&self, whitelist: &[SliceKey]) -> Vec<String> {
        match self {
            Self::WholeTree { key } => vec![key.clone()],
            Self::PerSlice => whitelist.iter().map(|k| k.as_str().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOptions {
    pub layout: PersistLayout,
    pub whitelist: Vec<SliceKey>,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            layout: PersistLayout::default(),
            whitelist: SliceKey::all().to_vec(),
        }
    }
}

enum WriterCommand {
    Write(PersistedSnapshot),
    Flush(oneshot::Sender<()>),
    Purge(oneshot::Sender<()>),
}

pub struct Persistence;

impl Persistence {
    /// Start persisting `store` through `storage`.
    ///
    /// Must be called inside a tokio runtime. The store reports not-ready
    /// until the stored snapshot has been applied; actions dispatched before
    /// that are applied normally but may be overwritten by the snapshot.
    pub fn attach(store: &Store, storage: JsonStorage, options: PersistOptions) -> PersistenceHandle {
        store.set_ready(false);

        let (sender, receiver) = mpsc::unbounded_channel();
        let hydrated = Arc::new(AtomicBool::new(false));

        let subscription = {
            let sender = sender.clone();
            let whitelist = options.whitelist.clone();
            let hydrated = Arc::clone(&hydrated);
            let last = Mutex::new(None::<PersistedSnapshot>);
            store.subscribe(move |state| {
                // The writer catches up on its own once rehydration is done.
                if !hydrated.load(Ordering::SeqCst) {
                    return;
                }
                let snapshot = PersistedSnapshot::capture(state, &whitelist);
                let mut last = last.lock();
                if last.as_ref() == Some(&snapshot) {
                    return;
                }
                *last = Some(snapshot.clone());
                // A closed channel means the handle was shut down.
                let _ = sender.send(WriterCommand::Write(snapshot));
            })
        };

        let task = tokio::spawn(run(
            store.clone(),
            storage,
            options.clone(),
            receiver,
            hydrated,
        ));

        PersistenceHandle {
            store: store.clone(),
            sender,
            subscription,
            options,
            task,
        }
    }
}

/// Owner of a running persistence writer.
pub struct PersistenceHandle {
    store: Store,
    sender: mpsc::UnboundedSender<WriterCommand>,
    subscription: SubscriptionId,
    options: PersistOptions,
    task: JoinHandle<()>,
}

impl PersistenceHandle {
    pub fn options(&self) -> &PersistOptions {
        &self.options
    }

    /// Wait until rehydration is done and every write queued so far has
    /// reached storage.
    pub async fn flush(&self) {
        self.round_trip(WriterCommand::Flush).await;
    }

    /// Delete every persisted key. In-memory state is left as it is; the
    /// next change writes it out again.
    pub async fn purge(&self) {
        self.round_trip(WriterCommand::Purge).await;
    }

    /// Stop mirroring changes, drain pending writes, and wait for the
    /// writer to exit.
    pub async fn shutdown(self) {
        self.store.unsubscribe(self.subscription);
        drop(self.sender);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "persistence writer ended abnormally");
        }
    }

    async fn round_trip(&self, command: fn(oneshot::Sender<()>) -> WriterCommand) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(command(done)).is_err() {
            tracing::warn!("persistence writer is gone");
            return;
        }
        let _ = wait.await;
    }
}

async fn run(
    store: Store,
    storage: JsonStorage,
    options: PersistOptions,
    mut receiver: mpsc::UnboundedReceiver<WriterCommand>,
    hydrated: Arc<AtomicBool>,
) {
    let loaded = load(&storage, &options).await;
    if loaded.is_empty() {
        tracing::info!(backend = storage.backend_name(), "no persisted state, starting from defaults");
    } else {
        tracing::info!(backend = storage.backend_name(), "rehydrating persisted state");
        store.dispatch(AppAction::Rehydrate(loaded.clone()));
    }
    hydrated.store(true, Ordering::SeqCst);
    store.set_ready(true);

    // Storage may be missing slices, or the tree may have changed while
    // loading. Either way bring storage in line with memory once.
    let current = store.with_state_ref(|state| PersistedSnapshot::capture(state, &options.whitelist));
    if current != loaded {
        write(&storage, &options.layout, &current).await;
    }

    let mut pending: Option<WriterCommand> = None;
    loop {
        let command = match pending.take() {
            Some(command) => command,
            None => match receiver.recv().await {
                Some(command) => command,
                None => break,
            },
        };

        match command {
            WriterCommand::Write(mut snapshot) => {
                // Collapse consecutive writes into the newest one.
                while let Ok(next) = receiver.try_recv() {
                    match next {
                        WriterCommand::Write(newer) => snapshot = newer,
                        other => {
                            pending = Some(other);
                            break;
                        }
                    }
                }
                write(&storage, &options.layout, &snapshot).await;
            }
            WriterCommand::Flush(done) => {
                let _ = done.send(());
            }
            WriterCommand::Purge(done) => {
                for key in options.layout.keys(&options.whitelist) {
                    storage.delete(&key).await;
                }
                tracing::info!("persisted state purged");
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("persistence writer stopped");
}

async fn load(storage: &JsonStorage, options: &PersistOptions) -> PersistedSnapshot {
    let mut entries = Vec::new();
    match &options.layout {
        PersistLayout::WholeTree { key } => {
            let Some(mut tree) = storage.get::<Map<String, Value>>(key).await else {
                return PersistedSnapshot::default();
            };
            for slice in &options.whitelist {
                if let Some(value) = tree.remove(slice.as_str()) {
                    entries.push((*slice, value));
                }
            }
        }
        PersistLayout::PerSlice => {
            for slice in &options.whitelist {
                if let Some(value) = storage.get::<Value>(slice.as_str()).await {
                    entries.push((*slice, value));
                }
            }
        }
    }
    PersistedSnapshot::from_entries(entries)
}

async fn write(storage: &JsonStorage, layout: &PersistLayout, snapshot: &PersistedSnapshot) {
    match layout {
        PersistLayout::WholeTree { key } => storage.set(key, snapshot).await,
        PersistLayout::PerSlice => {
            let entries = snapshot
                .entries()
                .into_iter()
                .map(|(slice, value)| (slice.as_str().to_string(), value))
                .collect();
            storage.set_many(entries).await;
        }
    }
}
