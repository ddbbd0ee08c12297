use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::leave_summary::LeaveSummary;
use crate::features::recent_requests::RecentRequestsState;
use crate::features::session::SessionState;
use crate::features::users::UsersState;
use crate::store::slice_key::SliceKey;
use crate::store::state::AppState;

/// The whitelisted part of the tree, as persisted.
///
/// Absent slices are left alone when the snapshot is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<UsersState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_summary: Option<LeaveSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_requests: Option<RecentRequestsState>,
}

impl PersistedSnapshot {
    /// Copy the whitelisted slices out of `state`.
    pub fn capture(state: &AppState, whitelist: &[SliceKey]) -> Self {
        let mut snapshot = Self::default();
        for key in whitelist {
            match key {
                SliceKey::Session => snapshot.session = Some(state.session.clone()),
                SliceKey::Users => snapshot.users = Some(state.users.clone()),
                SliceKey::LeaveSummary => snapshot.leave_summary = Some(state.leave_summary),
                SliceKey::RecentRequests => {
                    snapshot.recent_requests = Some(state.recent_requests.clone())
                }
            }
        }
        snapshot
    }

    /// Build a snapshot from raw JSON values, one per slice.
    ///
    /// A value that does not decode into its slice shape is logged and
    /// skipped, so one corrupt slice does not discard the others.
    pub fn from_entries(entries: impl IntoIterator<Item = (SliceKey, Value)>) -> Self {
        let mut snapshot = Self::default();
        for (key, value) in entries {
            let decoded = match key {
                SliceKey::Session => {
                    serde_json::from_value(value).map(|s| snapshot.session = Some(s))
                }
                SliceKey::Users => serde_json::from_value(value).map(|s| snapshot.users = Some(s)),
                SliceKey::LeaveSummary => {
                    serde_json::from_value(value).map(|s| snapshot.leave_summary = Some(s))
                }
                SliceKey::RecentRequests => {
                    serde_json::from_value(value).map(|s| snapshot.recent_requests = Some(s))
                }
            };
            if let Err(e) = decoded {
                tracing::warn!(slice = %key, error = %e, "discarding undecodable persisted slice");
            }
        }
        snapshot
    }

    /// Encode each present slice on its own, keyed by slice name.
    pub fn entries(&self) -> Vec<(SliceKey, Value)> {
        let mut out = Vec::new();
        for key in SliceKey::all() {
            let encoded = match key {
                SliceKey::Session => self.session.as_ref().map(serde_json::to_value),
                SliceKey::Users => self.users.as_ref().map(serde_json::to_value),
                SliceKey::LeaveSummary => self.leave_summary.as_ref().map(serde_json::to_value),
                SliceKey::RecentRequests => {
                    self.recent_requests.as_ref().map(serde_json::to_value)
                }
            };
            match encoded {
                Some(Ok(value)) => out.push((*key, value)),
                Some(Err(e)) => {
                    tracing::warn!(slice = %key, error = %e, "failed to encode slice for persistence")
                }
                None => {}
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.session.is_none()
            && self.users.is_none()
            && self.leave_summary.is_none()
            && self.recent_requests.is_none()
    }

    /// Replace the slices this snapshot carries.
    pub fn apply_to(self, state: AppState) -> AppState {
        AppState {
            session: self.session.unwrap_or(state.session),
            users: self.users.unwrap_or(state.users),
            leave_summary: self.leave_summary.unwrap_or(state.leave_summary),
            recent_requests: self.recent_requests.unwrap_or(state.recent_requests),
        }
    }
}
