//! Leave request submission and review.

use chrono::{NaiveDate, Utc};

use crate::features::leave_summary::LeaveSummaryIntent;
use crate::features::recent_requests::{RecentRequest, RecentRequestsIntent, RequestStatus};
use crate::notify::Notifier;
use crate::store::{selectors, Store};

use super::error::ValidationError;
use super::{is_blank, reject};

/// A new or edited leave request as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    /// `Some` edits the request with that id; `None` creates one.
    pub id: Option<u64>,
    pub date: Option<NaiveDate>,
    pub leave_type: String,
}

/// Create or edit a request.
///
/// New requests start as [`RequestStatus::Pending`] and are placed first.
/// Edits keep the status the request already had.
pub fn submit_leave(
    store: &Store,
    notifier: &dyn Notifier,
    form: LeaveForm,
) -> Result<RecentRequest, ValidationError> {
    let Some(date) = form.date else {
        return reject(notifier, ValidationError::MissingDate);
    };
    if is_blank(&form.leave_type) {
        return reject(notifier, ValidationError::MissingLeaveType);
    }
    let leave_type = form.leave_type.trim().to_string();

    match form.id {
        Some(id) => {
            let Some(existing) = store.with_state_ref(|state| selectors::find_request(state, id).cloned()) else {
                return reject(notifier, ValidationError::RequestNotFound { id });
            };
            let updated = RecentRequest {
                date,
                leave_type,
                ..existing
            };
            store.dispatch(RecentRequestsIntent::Update(updated.clone()));
            Ok(updated)
        }
        None => {
            let id = store.with_state_ref(|state| next_request_id(state.recent_requests.max_id()));
            let request = RecentRequest::new(id, date, leave_type);
            store.dispatch(RecentRequestsIntent::Add(request.clone()));
            tracing::info!(id, "leave request added");
            Ok(request)
        }
    }
}

pub fn approve_request(store: &Store, notifier: &dyn Notifier, id: u64) -> Result<RecentRequest, ValidationError> {
    set_request_status(store, notifier, id, RequestStatus::Approved)
}

pub fn reject_request(store: &Store, notifier: &dyn Notifier, id: u64) -> Result<RecentRequest, ValidationError> {
    set_request_status(store, notifier, id, RequestStatus::Rejected)
}

pub fn set_request_status(
    store: &Store,
    notifier: &dyn Notifier,
    id: u64,
    status: RequestStatus,
) -> Result<RecentRequest, ValidationError> {
    let Some(existing) = store.with_state_ref(|state| selectors::find_request(state, id).cloned()) else {
        return reject(notifier, ValidationError::RequestNotFound { id });
    };
    let updated = existing.with_status(status);
    store.dispatch(RecentRequestsIntent::Update(updated.clone()));
    tracing::info!(id, %status, "leave request status changed");
    Ok(updated)
}

/// Restore the default leave summary and drop every request.
pub fn reset_data(store: &Store) {
    store.dispatch(LeaveSummaryIntent::Reset);
    store.dispatch(RecentRequestsIntent::Reset);
}

/// Millisecond timestamp, bumped past `max_existing` so ids stay unique
/// even when two requests land in the same millisecond.
fn next_request_id(max_existing: Option<u64>) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    match max_existing {
        Some(max) if max >= now => max.saturating_add(1),
        _ => now,
    }
}
