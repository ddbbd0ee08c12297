mod intent;
mod reducer;
mod state;

pub use intent::LeaveSummaryIntent;
pub use reducer::LeaveSummaryReducer;
pub use state::LeaveSummary;
