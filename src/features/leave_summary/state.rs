use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// Leave balance figures.
///
/// This record is authoritative on its own and is not reconciled with the
/// recent requests list; `total == taken + remaining` is not enforced.
/// See [`crate::store::selectors::request_tally`] for counts derived from
/// the requests themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    pub total: u32,
    pub taken: u32,
    pub remaining: u32,
}

impl LeaveSummary {
    pub const DEFAULT: LeaveSummary = LeaveSummary {
        total: 30,
        taken: 12,
        remaining: 18,
    };

    pub fn new(total: u32, taken: u32, remaining: u32) -> Self {
        Self {
            total,
            taken,
            remaining,
        }
    }
}

impl Default for LeaveSummary {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SliceState for LeaveSummary {}
