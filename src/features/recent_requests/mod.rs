mod intent;
mod reducer;
mod state;

pub use intent::RecentRequestsIntent;
pub use reducer::RecentRequestsReducer;
pub use state::{RecentRequest, RecentRequestsState, RequestStatus};
