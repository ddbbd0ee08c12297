use crate::features::leave_summary::intent::LeaveSummaryIntent;
use crate::features::leave_summary::state::LeaveSummary;
use crate::mvi::Reducer;

pub struct LeaveSummaryReducer;

impl Reducer for LeaveSummaryReducer {
    type State = LeaveSummary;
    type Intent = LeaveSummaryIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LeaveSummaryIntent::SetAll(summary) => summary,
            LeaveSummaryIntent::Reset => LeaveSummary::DEFAULT,
        }
    }
}
