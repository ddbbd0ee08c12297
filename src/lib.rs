//! Leave-management client core.
//!
//! A reducer store over four entity slices (session, users, leave summary,
//! recent requests), mirrored to a local JSON key-value store, plus the
//! validated user flows that drive it.

pub mod app;
pub mod avatar;
pub mod config;
pub mod features;
pub mod flows;
pub mod logging;
pub mod mvi;
pub mod notify;
pub mod storage;
pub mod store;

pub use app::App;
pub use store::{AppAction, AppState, Store};
