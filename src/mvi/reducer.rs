//! Reducer trait for slice transitions.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms a slice state based on intents.
///
/// The reducer is the only place where slice transitions happen.
/// It must be total: unmatched lookups leave the state untouched
/// instead of failing.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
