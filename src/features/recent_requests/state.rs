use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single leave request.
///
/// `date` serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRequest {
    pub id: u64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub status: RequestStatus,
}

impl RecentRequest {
    pub fn new(id: u64, date: NaiveDate, leave_type: impl Into<String>) -> Self {
        Self {
            id,
            date,
            leave_type: leave_type.into(),
            status: RequestStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }
}

/// Requests, newest first. Persisted as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentRequestsState {
    pub requests: Vec<RecentRequest>,
}

impl SliceState for RecentRequestsState {}

impl RecentRequestsState {
    pub fn find(&self, id: u64) -> Option<&RecentRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn max_id(&self) -> Option<u64> {
        self.requests.iter().map(|r| r.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_stored_layout() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let json = serde_json::to_value(RecentRequest::new(7, date, "Sick")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "date": "2025-03-14", "type": "Sick", "status": "Pending"})
        );
    }

    #[test]
    fn unknown_status_fails_to_decode() {
        let result: Result<RecentRequest, _> = serde_json::from_str(
            r#"{"id":1,"date":"2025-01-01","type":"Annual","status":"Lost"}"#,
        );
        assert!(result.is_err());
    }
}
