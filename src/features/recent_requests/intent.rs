use crate::features::recent_requests::state::RecentRequest;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RecentRequestsIntent {
    SetAll(Vec<RecentRequest>),
    /// Prepend: the newest request comes first.
    Add(RecentRequest),
    /// Replace the entry with the same id. No-op when absent.
    Update(RecentRequest),
    Reset,
}

impl Intent for RecentRequestsIntent {}
