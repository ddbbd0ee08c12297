//! Entity slices.
//!
//! Each slice owns one entity record or collection and exposes its
//! transitions as an intent enum folded by a pure reducer.

pub mod leave_summary;
pub mod recent_requests;
pub mod session;
pub mod users;
