//! Model-View-Intent primitives shared by every state slice.
//!
//! ```text
//! Intent ──→ Reducer ──→ SliceState ──→ Selectors
//!    ↑                                      │
//!    └──────────────────────────────────────┘
//! ```
//!
//! - **SliceState**: owned, serializable data for one entity
//! - **Intent**: a transition request addressed to one slice
//! - **Reducer**: pure function that folds an intent into the slice state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
