//! Aggregate state container.
//!
//! The [`Store`] owns one [`AppState`] tree composed of the four entity
//! slices and routes every [`AppAction`] to the slice that owns it.
//! [`persistence`] optionally mirrors whitelisted slices to storage.

mod action;
mod container;
pub mod persistence;
pub mod selectors;
mod slice_key;
mod snapshot;
mod state;

pub use action::AppAction;
pub use persistence::{PersistLayout, PersistOptions, Persistence, PersistenceHandle};
pub use slice_key::SliceKey;
pub use snapshot::PersistedSnapshot;
pub use state::{AppReducer, AppState};
pub use container::{Store, SubscriptionId};
