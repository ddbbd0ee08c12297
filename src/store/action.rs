use crate::features::leave_summary::LeaveSummaryIntent;
use crate::features::recent_requests::RecentRequestsIntent;
use crate::features::session::SessionIntent;
use crate::features::users::UsersIntent;
use crate::mvi::Intent;
use crate::store::slice_key::SliceKey;
use crate::store::snapshot::PersistedSnapshot;

/// Everything that can be dispatched to the [`super::Store`].
#[derive(Debug, Clone)]
pub enum AppAction {
    Session(SessionIntent),
    Users(UsersIntent),
    LeaveSummary(LeaveSummaryIntent),
    RecentRequests(RecentRequestsIntent),
    /// Replace the slices present in a persisted snapshot.
    Rehydrate(PersistedSnapshot),
}

impl Intent for AppAction {}

impl AppAction {
    /// The slice this action is routed to. `None` for rehydration, which
    /// may touch several.
    pub fn slice(&self) -> Option<SliceKey> {
        match self {
            Self::Session(_) => Some(SliceKey::Session),
            Self::Users(_) => Some(SliceKey::Users),
            Self::LeaveSummary(_) => Some(SliceKey::LeaveSummary),
            Self::RecentRequests(_) => Some(SliceKey::RecentRequests),
            Self::Rehydrate(_) => None,
        }
    }
}

impl From<SessionIntent> for AppAction {
    fn from(intent: SessionIntent) -> Self {
        Self::Session(intent)
    }
}

impl From<UsersIntent> for AppAction {
    fn from(intent: UsersIntent) -> Self {
        Self::Users(intent)
    }
}

impl From<LeaveSummaryIntent> for AppAction {
    fn from(intent: LeaveSummaryIntent) -> Self {
        Self::LeaveSummary(intent)
    }
}

impl From<RecentRequestsIntent> for AppAction {
    fn from(intent: RecentRequestsIntent) -> Self {
        Self::RecentRequests(intent)
    }
}
