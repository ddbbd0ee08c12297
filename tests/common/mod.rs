//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use chrono::NaiveDate;
use leavedesk::features::recent_requests::RecentRequest;
use leavedesk::features::users::User;
use leavedesk::storage::{JsonStorage, MemoryBackend};

pub fn memory_storage() -> (JsonStorage, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    (JsonStorage::new(backend.clone()), backend)
}

pub fn user(name: &str, email: &str) -> User {
    User::new(name, email, "secret")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn request(id: u64, leave_type: &str) -> RecentRequest {
    RecentRequest::new(id, date(2025, 5, 1), leave_type)
}
