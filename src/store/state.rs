use serde::{Deserialize, Serialize};

use crate::features::leave_summary::{LeaveSummary, LeaveSummaryReducer};
use crate::features::recent_requests::{RecentRequestsReducer, RecentRequestsState};
use crate::features::session::{SessionReducer, SessionState};
use crate::features::users::{UsersReducer, UsersState};
use crate::mvi::{Reducer, SliceState};
use crate::store::action::AppAction;

/// The aggregate state tree, addressed by slice name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub session: SessionState,
    pub users: UsersState,
    pub leave_summary: LeaveSummary,
    pub recent_requests: RecentRequestsState,
}

impl SliceState for AppState {}

/// Root reducer: hands each action to the one slice that owns it and
/// leaves the other slices untouched.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppAction::Session(intent) => AppState {
                session: SessionReducer::reduce(state.session, intent),
                ..state
            },
            AppAction::Users(intent) => AppState {
                users: UsersReducer::reduce(state.users, intent),
                ..state
            },
            AppAction::LeaveSummary(intent) => AppState {
                leave_summary: LeaveSummaryReducer::reduce(state.leave_summary, intent),
                ..state
            },
            AppAction::RecentRequests(intent) => AppState {
                recent_requests: RecentRequestsReducer::reduce(state.recent_requests, intent),
                ..state
            },
            AppAction::Rehydrate(snapshot) => snapshot.apply_to(state),
        }
    }
}
