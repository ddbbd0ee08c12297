//! Read-only projections of the aggregate tree.
//!
//! Selectors are plain functions of [`AppState`]; calling one twice on the
//! same tree gives the same answer.

use serde::Serialize;

use crate::features::leave_summary::LeaveSummary;
use crate::features::recent_requests::{RecentRequest, RequestStatus};
use crate::features::users::User;
use crate::store::state::AppState;

pub fn is_authenticated(state: &AppState) -> bool {
    state.session.is_authenticated()
}

pub fn current_user(state: &AppState) -> Option<&User> {
    state.session.user.as_ref()
}

pub fn users_list(state: &AppState) -> &[User] {
    &state.users.users
}

pub fn find_user_by_email<'a>(state: &'a AppState, email: &str) -> Option<&'a User> {
    state.users.find_by_email(email)
}

pub fn leave_summary(state: &AppState) -> &LeaveSummary {
    &state.leave_summary
}

pub fn recent_requests(state: &AppState) -> &[RecentRequest] {
    &state.recent_requests.requests
}

pub fn find_request(state: &AppState, id: u64) -> Option<&RecentRequest> {
    state.recent_requests.find(id)
}

/// Request counts by status, derived from the requests list.
///
/// Unlike [`LeaveSummary`] this can never disagree with the requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RequestTally {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn request_tally(state: &AppState) -> RequestTally {
    recent_requests(state)
        .iter()
        .fold(RequestTally::default(), |mut tally, request| {
            tally.total += 1;
            match request.status {
                RequestStatus::Pending => tally.pending += 1,
                RequestStatus::Approved => tally.approved += 1,
                RequestStatus::Rejected => tally.rejected += 1,
            }
            tally
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(id: u64, status: RequestStatus) -> RecentRequest {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        RecentRequest::new(id, date, "Annual").with_status(status)
    }

    #[test]
    fn tally_counts_by_status() {
        let mut state = AppState::default();
        state.recent_requests.requests = vec![
            request(1, RequestStatus::Pending),
            request(2, RequestStatus::Approved),
            request(3, RequestStatus::Approved),
            request(4, RequestStatus::Rejected),
        ];
        assert_eq!(
            request_tally(&state),
            RequestTally {
                total: 4,
                pending: 1,
                approved: 2,
                rejected: 1,
            }
        );
    }

    #[test]
    fn anonymous_by_default() {
        let state = AppState::default();
        assert!(!is_authenticated(&state));
        assert!(current_user(&state).is_none());
        assert_eq!(*leave_summary(&state), LeaveSummary::DEFAULT);
    }
}
