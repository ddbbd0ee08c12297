//! The store itself.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};
use tokio::sync::watch;

use crate::mvi::Reducer;
use crate::store::action::AppAction;
use crate::store::state::{AppReducer, AppState};

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Aggregate state container.
///
/// Cloning is cheap and every clone addresses the same tree. Dispatches are
/// applied one at a time in call order, and listeners observe states in
/// that same order. A listener may dispatch from inside its callback.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
    /// Held across reduce + notify so notifications never interleave.
    dispatch_gate: ReentrantMutex<()>,
    ready: watch::Sender<bool>,
}

impl Store {
    /// A store with default slices, ready immediately.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (ready, _) = watch::channel(true);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
                dispatch_gate: ReentrantMutex::new(()),
                ready,
            }),
        }
    }

    /// Route `action` to its slice and replace that part of the tree.
    ///
    /// Returns `true` if the state changed. Listeners only run on change.
    pub fn dispatch(&self, action: impl Into<AppAction>) -> bool {
        let action = action.into();
        let _gate = self.inner.dispatch_gate.lock();

        tracing::debug!(slice = ?action.slice(), ?action, "dispatch");

        let next = {
            let mut state = self.inner.state.write();
            let next = AppReducer::reduce(state.clone(), action);
            if next == *state {
                return false;
            }
            *state = next.clone();
            next
        };

        // Snapshot the list so listeners can (un)subscribe while being called.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
        true
    }

    /// Snapshot of the whole tree.
    pub fn get_state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Run `f` against the current tree without cloning it.
    pub fn with_state_ref<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.read())
    }

    /// Register a callback invoked with the new tree after every change.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// `false` while a persisted snapshot is still being loaded.
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.borrow()
    }

    /// Resolve once the store is ready.
    pub async fn wait_ready(&self) {
        let mut ready = self.inner.ready.subscribe();
        // The sender lives as long as `self`, so this only returns on ready.
        let _ = ready.wait_for(|ready| *ready).await;
    }

    pub(crate) fn set_ready(&self, ready: bool) {
        self.inner.ready.send_replace(ready);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::leave_summary::{LeaveSummary, LeaveSummaryIntent};
    use crate::features::session::SessionIntent;
    use crate::features::users::{User, UsersIntent};
    use parking_lot::Mutex;

    #[test]
    fn dispatch_routes_to_owning_slice_only() {
        let store = Store::new();
        store.dispatch(UsersIntent::Add(User::new("Ann", "a@x.com", "pw")));
        let state = store.get_state();
        assert_eq!(state.users.users.len(), 1);
        assert!(state.session.user.is_none());
        assert_eq!(state.leave_summary, LeaveSummary::DEFAULT);
    }

    #[test]
    fn no_op_dispatch_does_not_notify() {
        let store = Store::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| *counter.lock() += 1);

        assert!(!store.dispatch(SessionIntent::SignOut));
        assert!(!store.dispatch(LeaveSummaryIntent::Reset));
        assert_eq!(*calls.lock(), 0);

        assert!(store.dispatch(LeaveSummaryIntent::SetAll(LeaveSummary::new(1, 0, 1))));
        assert_eq!(*calls.lock(), 1);
    }

    #[test]
    fn listeners_see_states_in_dispatch_order() {
        let store = Store::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| sink.lock().push(state.users.users.len()));

        for i in 0..5 {
            store.dispatch(UsersIntent::Add(User::new("U", format!("{i}@x.com"), "pw")));
        }
        assert_eq!(*seen.lock(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = Store::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| *counter.lock() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(LeaveSummaryIntent::SetAll(LeaveSummary::new(2, 1, 1)));
        assert_eq!(*calls.lock(), 0);
    }

    #[test]
    fn listener_may_dispatch() {
        let store = Store::new();
        let inner = store.clone();
        store.subscribe(move |state| {
            if state.session.user.is_some() && state.users.users.is_empty() {
                if let Some(user) = state.session.user.clone() {
                    inner.dispatch(UsersIntent::Add(user));
                }
            }
        });
        store.dispatch(SessionIntent::SignIn(User::new("Ann", "a@x.com", "pw")));
        assert_eq!(store.get_state().users.users.len(), 1);
    }

    #[tokio::test]
    async fn new_store_is_ready() {
        let store = Store::new();
        assert!(store.is_ready());
        store.wait_ready().await;
    }
}
