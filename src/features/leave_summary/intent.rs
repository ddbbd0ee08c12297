use crate::features::leave_summary::state::LeaveSummary;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LeaveSummaryIntent {
    SetAll(LeaveSummary),
    /// Restore [`LeaveSummary::DEFAULT`].
    Reset,
}

impl Intent for LeaveSummaryIntent {}
